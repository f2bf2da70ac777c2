use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct KitchenwiseConfig {
    pub recognition: RecognitionConfig,
    pub llm: LLMConfig,
    pub http_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct RecognitionConfig {
    pub clarifai_pat: Option<String>,
    pub base_url: String,
    pub user_id: String,
    pub app_id: String,
    pub model_id: String,
    pub model_version_id: String,
    pub confidence_threshold: f64,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            clarifai_pat: None,
            base_url: "https://api.clarifai.com".to_string(),
            user_id: "epicureanapps".to_string(),
            app_id: "fridge-ai-app".to_string(),
            model_id: "food-item-recognition".to_string(),
            model_version_id: "1d5fd481e0cf4826aa72ec3ff049e044".to_string(),
            confidence_threshold: 0.05,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub base_url: String,
    pub gemini_model: String,
    pub max_recipes: u32,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            gemini_model: "gemini-2.0-flash".to_string(),
            max_recipes: 3,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
