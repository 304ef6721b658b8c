use super::{ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::Router;
use tower::ServiceBuilder;

pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
) -> Router {
    // trace wraps body limit so rejected requests are traced as well
    let middleware = ServiceBuilder::new()
        .layer(application_middleware.trace)
        .layer(application_middleware.body_limit);

    routing(&application_middleware.auth)
        .with_state(application_state)
        .layer(middleware)
}
