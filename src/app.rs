use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the application router
///
/// Registrations mirror `routes::ROUTE_TABLE` one for one, which the startup
/// report is printed from. Anything else, including a known path with an
/// unregistered method, falls through to a 404.
pub fn build_router(state: AppState) -> Router {
    let api_docs_enabled = state.config.api_docs_enabled;

    let mut router = Router::new()
        .route(
            routes::PUPPIES,
            get(handlers::get_puppies)
                .post(handlers::post_puppies)
                .put(handlers::put_puppies)
                .delete(handlers::delete_puppies),
        )
        .route(routes::PUPPIEZZZZ, get(handlers::get_puppiezzzz))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .with_state(state);

    if api_docs_enabled {
        router = router.merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::API_DOCS, ApiDoc::openapi()));
    }

    router.layer(TraceLayer::new_for_http())
}
