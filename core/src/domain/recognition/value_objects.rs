#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image_data: Vec<u8>,
    pub content_type: String,
}
