use docbrief_core::Pipeline;

/// Shared application state accessible from all handlers. Read-only after
/// startup; concurrent requests never coordinate through it.
pub struct AppState {
    /// Static secret callers must present as a bearer token on `/upload`.
    pub auth_token: String,
    pub pipeline: Pipeline,
}
