use crate::context::ApplicationContext;
use axum::Router;
use tower_http::trace::TraceLayer;

mod rest_api;

pub async fn run_server(application_context: ApplicationContext) -> Result<(), std::io::Error> {
	let address = application_context.configuration.address;
	let router = create_router(application_context);

	axum_server::bind(address).serve(router.into_make_service()).await
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	rest_api::rest_api()
		.layer(TraceLayer::new_for_http())
		.with_state(application_context)
}
