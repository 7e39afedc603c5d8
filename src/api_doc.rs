use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "puppies-server API",
        version = "0.1.0",
        description = "Five fixed-reply puppy endpoints"
    ),
    paths(
        handlers::puppies::get_puppies,
        handlers::puppies::get_puppiezzzz,
        handlers::puppies::post_puppies,
        handlers::puppies::put_puppies,
        handlers::puppies::delete_puppies
    ),
    components(
        schemas(
            ErrorResponse
        )
    ),
    tags(
        (name = "puppies", description = "Puppy greeting endpoints")
    )
)]
pub struct ApiDoc;
