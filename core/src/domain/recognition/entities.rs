use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

/// A raw label returned by the recognition gateway, before any filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedConcept {
    pub name: String,
    pub value: f64,
}

impl RecognizedConcept {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageContentType {
    Jpeg,
    Png,
    Webp,
}

impl ImageContentType {
    pub fn as_mime(&self) -> &'static str {
        match self {
            ImageContentType::Jpeg => "image/jpeg",
            ImageContentType::Png => "image/png",
            ImageContentType::Webp => "image/webp",
        }
    }
}

impl FromStr for ImageContentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Parameters such as "; charset=binary" are ignored
        let mime = s.split(';').next().unwrap_or_default().trim();

        match mime.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(ImageContentType::Jpeg),
            "image/png" => Ok(ImageContentType::Png),
            "image/webp" => Ok(ImageContentType::Webp),
            _ => Err(CoreError::UnsupportedContentType(s.to_string())),
        }
    }
}
