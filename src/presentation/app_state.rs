// Application state for HTTP handlers
//
// Everything is computed before the server starts accepting requests;
// handlers only read this immutable snapshot.
#[derive(Clone)]
pub struct AppState {
    /// Pre-rendered dashboard page, served verbatim on every request.
    pub page_html: String,
}
