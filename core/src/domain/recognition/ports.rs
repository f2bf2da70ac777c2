use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::DetectedItem,
    recognition::{
        entities::{ImageContentType, RecognizedConcept},
        value_objects::AnalyzeImageInput,
    },
};

/// Gateway to the external food recognition model
#[cfg_attr(test, mockall::automock)]
pub trait FoodRecognitionClient: Send + Sync {
    fn recognize(
        &self,
        image_data: Vec<u8>,
        content_type: ImageContentType,
    ) -> impl Future<Output = Result<Vec<RecognizedConcept>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecognitionService: Send + Sync {
    /// Detects food items on an image, most confident first.
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<Vec<DetectedItem>, CoreError>> + Send;
}
