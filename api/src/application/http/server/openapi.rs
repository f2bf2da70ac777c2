use crate::application::http::{
    feedback::router::FeedbackApiDoc, health::router::HealthApiDoc, recipe::router::RecipeApiDoc,
    recognition::router::RecognitionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "KitchenWise API",
        description = "Detect ingredients on a photo and turn them into recipe suggestions"
    ),
    tags(
        (name = "recognition", description = "Food recognition on uploaded images"),
        (name = "recipes", description = "Recipe matching and generation"),
        (name = "feedback", description = "Recipe feedback"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// The document with every route module merged in.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(RecognitionApiDoc::openapi());
        openapi.merge(RecipeApiDoc::openapi());
        openapi.merge(FeedbackApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
