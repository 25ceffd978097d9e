use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Cross-origin policy of one resource.
///
/// Every OPTIONS request is answered by the layer itself with an empty 200,
/// so preflights never reach a handler or the database.
/// All other responses get the wildcard `Access-Control-Allow-Origin`.
pub fn cors_layer<const N: usize>(allowed_methods: [Method; N]) -> CorsLayer {
	CorsLayer::new()
		.allow_origin(Any)
		.allow_methods(allowed_methods)
		.allow_headers([CONTENT_TYPE])
		.max_age(PREFLIGHT_MAX_AGE)
}
