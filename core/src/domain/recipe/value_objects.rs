use crate::domain::recipe::entities::DetectedItem;

#[derive(Debug, Clone, Default)]
pub struct SuggestRecipesInput {
    pub items: Vec<DetectedItem>,
    pub only_complete: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateRecipesInput {
    pub items: Vec<DetectedItem>,
    pub only_complete: bool,
}
