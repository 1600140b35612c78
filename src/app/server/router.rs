use super::api::ApiDoc;
use crate::app::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::{path::Path, time::Duration};
use tower_http::{
    classify::ServerErrorsFailureClass, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use tracing::{warn, Span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub(super) mod company;
pub(super) mod employee;

/// Upper bound for request bodies on routes accepting logos.
const UPLOAD_BODY_LIMIT: usize = 5 * 1024 * 1024;

/// Build the application router.
///
/// * `state`: Application state.
/// * `public_path`: Root directory served at `/storage`.
/// * `origins`: CORS allowed origins. No CORS layer is added if empty.
pub fn router(state: AppState, public_path: impl AsRef<Path>, origins: Vec<String>) -> Router {
    use company::*;
    use employee::*;

    let companies = Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/:id",
            get(show_company)
                .put(update_company)
                .patch(update_company)
                .post(update_company)
                .delete(delete_company),
        )
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .route("/companies/create", get(create_company_form))
        .route("/companies/:id/edit", get(edit_company_form));

    let employees = Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(show_employee)
                .put(update_employee)
                .patch(update_employee)
                .delete(delete_employee),
        )
        .route("/employees/create", get(create_employee_form))
        .route("/employees/:id/edit", get(edit_employee_form));

    let router = Router::new()
        .merge(companies)
        .merge(employees)
        .with_state(state)
        .nest_service("/storage", ServeDir::new(public_path))
        .layer(
            TraceLayer::new_for_http()
                .on_request(|req: &axum::http::Request<_>, _span: &Span| {
                    let ctype = req
                        .headers()
                        .get("content-type")
                        .map(|v| v.to_str().unwrap_or("none"))
                        .unwrap_or("none");

                    tracing::info!(
                        "Processing request | {} {} | content-type: {ctype}",
                        req.method(),
                        req.uri().path()
                    );
                })
                .on_response(
                    |res: &axum::http::Response<_>, latency: Duration, _span: &Span| {
                        let status = res.status();
                        let ctype = res
                            .headers()
                            .get("content-type")
                            .map(|v| v.to_str().unwrap_or("none"))
                            .unwrap_or("none");

                        tracing::info!(
                            "Sending response | {status} | {}ms | {ctype}",
                            latency.as_millis()
                        );
                    },
                )
                .on_failure(
                    |error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                        tracing::error!("Error in request: {error}")
                    },
                ),
        );

    let router = match cors(origins) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Has to go last to exclude all the tracing/cors layers
        .route("/_health", get(health_check))
}

fn cors(origins: Vec<String>) -> Option<CorsLayer> {
    let origins = origins
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => {
                tracing::info!("Adding {origin} to allowed origins");
                Some(value)
            }
            Err(e) => {
                warn!("Skipping invalid origin '{origin}': {e}");
                None
            }
        })
        .collect::<Vec<_>>();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(tower_http::cors::AllowOrigin::list(origins))
            .allow_headers(tower_http::cors::Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::DELETE,
                Method::PUT,
                Method::PATCH,
            ]),
    )
}

#[utoipa::path(
    get,
    path = "/_health",
    responses(
        (status = 200, description = "Service is up", body = String),
    )
)]
pub(super) async fn health_check() -> impl IntoResponse {
    "OK"
}
