// Route path constants - single source of truth for all API paths

use axum::http::Method;

pub const PUPPIES: &str = "/puppies";
pub const PUPPIEZZZZ: &str = "/puppiezzzz";

pub const API_DOCS: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";

pub const GET_PUPPIES_REPLY: &str = "hello from GET /puppies!";
pub const GET_PUPPIEZZZZ_REPLY: &str = "hello from GET /puppiezzzz!";
pub const POST_PUPPIES_REPLY: &str = "hello from POST /puppies!";
pub const PUT_PUPPIES_REPLY: &str = "hello from PUT /puppies!";
pub const DELETE_PUPPIES_REPLY: &str = "hello from DELETE /puppies!";

/// One registered endpoint and the fixed reply it serves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub reply: &'static str,
}

/// Every route the service answers, in registration order.
pub static ROUTE_TABLE: [Route; 5] = [
    Route {
        method: Method::GET,
        path: PUPPIES,
        reply: GET_PUPPIES_REPLY,
    },
    Route {
        method: Method::GET,
        path: PUPPIEZZZZ,
        reply: GET_PUPPIEZZZZ_REPLY,
    },
    Route {
        method: Method::POST,
        path: PUPPIES,
        reply: POST_PUPPIES_REPLY,
    },
    Route {
        method: Method::PUT,
        path: PUPPIES,
        reply: PUT_PUPPIES_REPLY,
    },
    Route {
        method: Method::DELETE,
        path: PUPPIES,
        reply: DELETE_PUPPIES_REPLY,
    },
];

/// Lines of the startup routes report, one per registered route.
pub fn report_lines() -> Vec<String> {
    ROUTE_TABLE
        .iter()
        .map(|route| format!("{:<7} {}", route.method.as_str(), route.path))
        .collect()
}

pub fn print_report() {
    tracing::info!("Registered routes:");
    for line in report_lines() {
        tracing::info!("  {}", line);
    }
}
