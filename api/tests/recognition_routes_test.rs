mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use common::ApiContext;
use serde_json::Value;
use test_context::test_context;

fn image_form(mime_type: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data)
            .file_name("fridge.jpg")
            .mime_type(mime_type),
    )
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_image_without_credentials_is_unavailable(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/analyze-image/")
        .multipart(image_form("image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0]))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_SERVICE_UNAVAILABLE");
    assert!(body["message"].as_str().unwrap().contains("CLARIFAI_PAT"));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_image_rejects_unsupported_type(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/analyze-image/")
        .multipart(image_form("image/gif", vec![0x47, 0x49, 0x46]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_image_rejects_empty_file(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/analyze-image/")
        .multipart(image_form("image/png", Vec::new()))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_image_requires_file_field(ctx: &mut ApiContext) {
    let form = MultipartForm::new().add_text("note", "no image here");

    let response = ctx.server.post("/analyze-image/").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
