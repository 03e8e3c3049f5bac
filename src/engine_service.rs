use serde::{Deserialize, Serialize};
use reqwest::Client;

use crate::error::TranslatorResult;

/// HTTP client for the external translation / speech engine service
#[derive(Debug, Clone)]
pub struct EngineServiceClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelDownloadRequest {
    pub source_lang: String,
    pub target_lang: String,
    pub require_wifi: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelDownloadResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translated_text: String,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ASRAvailabilityResponse {
    pub available: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ASRRequest {
    pub audio_data: Vec<f32>,
    pub language: String,
    pub language_model: String,
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ASRResponse {
    #[serde(default)]
    pub candidates: Vec<String>,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl EngineServiceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn download_model(
        &self,
        request: ModelDownloadRequest,
    ) -> TranslatorResult<ModelDownloadResponse> {
        let url = format!("{}/models/download", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        let result: ModelDownloadResponse = response.json().await?;
        Ok(result)
    }

    pub async fn translate(&self, request: TranslateRequest) -> TranslatorResult<TranslateResponse> {
        let url = format!("{}/translate", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        let result: TranslateResponse = response.json().await?;
        Ok(result)
    }

    pub async fn asr_available(&self) -> TranslatorResult<ASRAvailabilityResponse> {
        let url = format!("{}/asr/available", self.base_url);
        let response = self.client.get(&url).send().await?;
        let result: ASRAvailabilityResponse = response.json().await?;
        Ok(result)
    }

    pub async fn recognize(&self, request: ASRRequest) -> TranslatorResult<ASRResponse> {
        let url = format!("{}/asr/recognize", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        let result: ASRResponse = response.json().await?;
        Ok(result)
    }

    pub async fn health_check(&self) -> TranslatorResult<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}
