use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer. The dashboard and the spreadsheet automation call
/// from other origins; permissive for now, tighten per deployment.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
