use std::sync::Arc;

use crate::application::http::{
    feedback::router::feedback_routes,
    health::health_routes,
    recipe::router::recipe_routes,
    recognition::router::recognition_routes,
    server::{app_state::AppState, openapi::ApiDoc},
};
use crate::args::Args;

use anyhow::Context;
use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use kitchenwise_core::{application::create_service, domain::common::KitchenwiseConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info_span};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = KitchenwiseConfig::from(args.as_ref().clone());
    let service = create_service(config).context("failed to create service")?;

    Ok(AppState::new(args, service))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        // Credentials forbid a literal wildcard, echo the caller instead
        AllowOrigin::mirror_request()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("invalid allowed origin: {origin}"))
            })
            .collect::<Result<Vec<HeaderValue>, _>>()?;

        debug!("Allowed origins: {:?}", origins);
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins)?;

    let mut openapi = ApiDoc::build();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let mut router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(recognition_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .merge(feedback_routes(state.clone()))
        .merge(health_routes(&root_path));

    if state.args.server.metrics_enabled {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    Ok(router.layer(trace_layer).layer(cors).with_state(state))
}
