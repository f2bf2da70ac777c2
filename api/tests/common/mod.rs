#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use kitchenwise_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use test_context::AsyncTestContext;

/// Arguments with no gateway credentials and metrics disabled.
pub fn test_args(extra: &[&str]) -> Args {
    let mut argv = vec!["kitchenwise-api", "--metrics-enabled", "false"];
    argv.extend_from_slice(extra);

    let mut args = Args::try_parse_from(argv).expect("valid test arguments");
    args.recognition.clarifai_pat = None;
    args.llm.gemini_api_key = None;
    args
}

pub fn test_server(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).expect("state");
    let app = router(app_state).expect("router");
    TestServer::new(app).expect("test server")
}

pub struct ApiContext {
    pub server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        Self {
            server: test_server(test_args(&[])),
        }
    }
}
