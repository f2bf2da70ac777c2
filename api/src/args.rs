use std::time::Duration;

use clap::{ArgAction, Args as ClapArgs, Parser};
use kitchenwise_core::domain::common::{KitchenwiseConfig, LLMConfig, RecognitionConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "kitchenwise-api", version, about = "KitchenWise API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub recognition: RecognitionArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Timeout applied to every outgoing gateway request
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api"
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RecognitionArgs {
    #[arg(long, env = "CLARIFAI_PAT", hide_env_values = true)]
    pub clarifai_pat: Option<String>,

    #[arg(long, env = "CLARIFAI_BASE_URL", default_value = "https://api.clarifai.com")]
    pub clarifai_base_url: String,

    #[arg(long, env = "CLARIFAI_USER_ID", default_value = "epicureanapps")]
    pub clarifai_user_id: String,

    #[arg(long, env = "CLARIFAI_APP_ID", default_value = "fridge-ai-app")]
    pub clarifai_app_id: String,

    #[arg(long, env = "CLARIFAI_MODEL_ID", default_value = "food-item-recognition")]
    pub clarifai_model_id: String,

    #[arg(
        long,
        env = "CLARIFAI_MODEL_VERSION_ID",
        default_value = "1d5fd481e0cf4826aa72ec3ff049e044"
    )]
    pub clarifai_model_version_id: String,

    /// Minimum confidence for a recognized concept to be kept
    #[arg(long, env = "CONFIDENCE_THRESHOLD", default_value_t = 0.05)]
    pub confidence_threshold: f64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long, env = "MAX_RECIPES", default_value_t = 3)]
    pub max_recipes: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for KitchenwiseConfig {
    fn from(args: Args) -> Self {
        Self {
            recognition: RecognitionConfig {
                clarifai_pat: args.recognition.clarifai_pat,
                base_url: args.recognition.clarifai_base_url,
                user_id: args.recognition.clarifai_user_id,
                app_id: args.recognition.clarifai_app_id,
                model_id: args.recognition.clarifai_model_id,
                model_version_id: args.recognition.clarifai_model_version_id,
                confidence_threshold: args.recognition.confidence_threshold,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                base_url: args.llm.gemini_base_url,
                gemini_model: args.llm.gemini_model,
                max_recipes: args.llm.max_recipes,
            },
            http_timeout: Duration::from_secs(args.http_timeout_secs),
        }
    }
}
