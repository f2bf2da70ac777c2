use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    common::{RecognitionConfig, entities::app_errors::CoreError},
    recognition::{
        entities::{ImageContentType, RecognizedConcept},
        ports::FoodRecognitionClient,
    },
};

/// Clarifai reports success with this status code, regardless of HTTP status.
const CLARIFAI_SUCCESS: u32 = 10000;

#[derive(Debug, Clone)]
pub struct ClarifaiRecognitionClient {
    config: RecognitionConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ClarifaiRequest {
    inputs: Vec<Input>,
}

#[derive(Debug, Serialize)]
struct Input {
    data: InputData,
}

#[derive(Debug, Serialize)]
struct InputData {
    image: Image,
}

#[derive(Debug, Serialize)]
struct Image {
    base64: String,
}

#[derive(Debug, Deserialize)]
struct ClarifaiResponse {
    status: Status,
    #[serde(default)]
    outputs: Vec<Output>,
}

#[derive(Debug, Deserialize)]
struct Status {
    code: u32,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct Output {
    data: OutputData,
}

#[derive(Debug, Deserialize)]
struct OutputData {
    #[serde(default)]
    concepts: Vec<Concept>,
}

#[derive(Debug, Deserialize)]
struct Concept {
    name: String,
    value: f64,
}

impl ClarifaiResponse {
    fn into_concepts(self) -> Result<Vec<RecognizedConcept>, CoreError> {
        if self.status.code != CLARIFAI_SUCCESS {
            tracing::error!(
                "Clarifai status error: {} - {}",
                self.status.code,
                self.status.description
            );
            return Err(CoreError::ExternalServiceError(format!(
                "Recognition service status error: {} - {}",
                self.status.code, self.status.description
            )));
        }

        Ok(self
            .outputs
            .into_iter()
            .next()
            .map(|output| {
                output
                    .data
                    .concepts
                    .into_iter()
                    .map(|c| RecognizedConcept::new(c.name, c.value))
                    .collect()
            })
            .unwrap_or_default())
    }
}

impl ClarifaiRecognitionClient {
    pub fn new(config: RecognitionConfig, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build Clarifai HTTP client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self { config, client })
    }

    fn outputs_url(&self) -> String {
        format!(
            "{}/v2/users/{}/apps/{}/models/{}/versions/{}/outputs",
            self.config.base_url.trim_end_matches('/'),
            self.config.user_id,
            self.config.app_id,
            self.config.model_id,
            self.config.model_version_id
        )
    }

    fn personal_access_token(&self) -> Result<&str, CoreError> {
        self.config
            .clarifai_pat
            .as_deref()
            .map(str::trim)
            .filter(|pat| !pat.is_empty())
            .ok_or_else(|| CoreError::MissingCredentials("CLARIFAI_PAT".to_string()))
    }
}

impl FoodRecognitionClient for ClarifaiRecognitionClient {
    async fn recognize(
        &self,
        image_data: Vec<u8>,
        content_type: ImageContentType,
    ) -> Result<Vec<RecognizedConcept>, CoreError> {
        let pat = self.personal_access_token()?;

        debug!(
            content_type = content_type.as_mime(),
            size = image_data.len(),
            "Sending image to Clarifai"
        );

        let request = ClarifaiRequest {
            inputs: vec![Input {
                data: InputData {
                    image: Image {
                        base64: general_purpose::STANDARD.encode(&image_data),
                    },
                },
            }],
        };

        let response = self
            .client
            .post(self.outputs_url())
            .header(reqwest::header::AUTHORIZATION, format!("Key {}", pat))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Clarifai API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Recognition API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Clarifai API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Recognition API returned status {}",
                status
            )));
        }

        let clarifai_response: ClarifaiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Clarifai response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse recognition response: {}", e))
        })?;

        clarifai_response.into_concepts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(base_url: &str) -> ClarifaiRecognitionClient {
        let config = RecognitionConfig {
            clarifai_pat: Some("clarifai-pat".to_string()),
            base_url: base_url.to_string(),
            ..RecognitionConfig::default()
        };
        ClarifaiRecognitionClient::new(config, Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_outputs_url() {
        let config = RecognitionConfig {
            base_url: "https://api.clarifai.com/".to_string(),
            ..RecognitionConfig::default()
        };
        let client = ClarifaiRecognitionClient::new(config, Duration::from_secs(1)).unwrap();

        assert_eq!(
            client.outputs_url(),
            "https://api.clarifai.com/v2/users/epicureanapps/apps/fridge-ai-app/models/food-item-recognition/versions/1d5fd481e0cf4826aa72ec3ff049e044/outputs"
        );
    }

    #[test]
    fn test_request_shape() {
        let request = ClarifaiRequest {
            inputs: vec![Input {
                data: InputData {
                    image: Image {
                        base64: general_purpose::STANDARD.encode(b"img"),
                    },
                },
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"inputs": [{"data": {"image": {"base64": "aW1n"}}}]})
        );
    }

    #[test]
    fn test_concepts_from_success() {
        let response: ClarifaiResponse = serde_json::from_value(json!({
            "status": {"code": 10000, "description": "Ok"},
            "outputs": [{
                "data": {
                    "concepts": [
                        {"id": "ai_1", "name": "Tomato", "value": 0.93},
                        {"id": "ai_2", "name": "basil", "value": 0.02}
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(
            response.into_concepts().unwrap(),
            vec![
                RecognizedConcept::new("Tomato", 0.93),
                RecognizedConcept::new("basil", 0.02)
            ]
        );
    }

    #[test]
    fn test_no_outputs_is_empty() {
        let response: ClarifaiResponse =
            serde_json::from_value(json!({"status": {"code": 10000}})).unwrap();

        assert!(response.into_concepts().unwrap().is_empty());
    }

    #[test]
    fn test_status_error() {
        let response: ClarifaiResponse = serde_json::from_value(json!({
            "status": {"code": 11102, "description": "Invalid request"}
        }))
        .unwrap();

        assert!(matches!(
            response.into_concepts(),
            Err(CoreError::ExternalServiceError(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_pat() {
        let client =
            ClarifaiRecognitionClient::new(RecognitionConfig::default(), Duration::from_secs(1))
                .unwrap();

        let result = client.recognize(vec![1, 2, 3], ImageContentType::Jpeg).await;

        assert_eq!(
            result,
            Err(CoreError::MissingCredentials("CLARIFAI_PAT".to_string()))
        );
    }

    #[tokio::test]
    async fn test_recognize_against_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(
                "/v2/users/epicureanapps/apps/fridge-ai-app/models/food-item-recognition/versions/1d5fd481e0cf4826aa72ec3ff049e044/outputs",
            ))
            .and(header("authorization", "Key clarifai-pat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": {"code": 10000, "description": "Ok"},
                "outputs": [{"data": {"concepts": [{"name": "egg", "value": 0.88}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server.uri())
            .recognize(vec![1, 2, 3], ImageContentType::Png)
            .await;

        assert_eq!(result, Ok(vec![RecognizedConcept::new("egg", 0.88)]));
    }

    #[tokio::test]
    async fn test_error_status_is_external_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let result = client_for(&server.uri())
            .recognize(vec![1, 2, 3], ImageContentType::Jpeg)
            .await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError(
                "Recognition API returned status 500 Internal Server Error".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_unreachable_gateway_is_external_error() {
        let result = client_for("http://127.0.0.1:9")
            .recognize(vec![1, 2, 3], ImageContentType::Jpeg)
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
