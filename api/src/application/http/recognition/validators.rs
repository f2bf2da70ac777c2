use kitchenwise_core::domain::recipe::entities::DetectedItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Multipart body of an image analysis request.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeImageForm {
    /// JPEG, PNG or WEBP image
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub items: Vec<DetectedItem>,
}
