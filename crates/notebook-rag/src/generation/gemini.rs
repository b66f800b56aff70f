//! Gemini client for the Google Generative Language API
//!
//! Authenticates with a plain API key passed per call, so the same client
//! serves keys supplied by the browser and the server default.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::provider::{GenerativeModelApi, ModelInfo};
use crate::config::GeminiConfig;
use crate::error::{Error, Result};

const API_KEY_HEADER: &str = "x-goog-api-key";
const LIST_PAGE_SIZE: u32 = 1000;

/// Gemini REST client
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }

    /// `model` is a full resource name such as `models/gemini-1.5-flash`
    fn generate_url(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.base_url, model)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
    next_page_token: Option<String>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text parts of the first candidate, concatenated
    fn into_text(self) -> Option<String> {
        let parts = self.candidates.into_iter().next()?.content?.parts;
        let texts: Vec<String> = parts.into_iter().filter_map(|p| p.text).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[async_trait]
impl GenerativeModelApi for GeminiClient {
    async fn list_models(&self, api_key: &str) -> Result<Vec<ModelInfo>> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(self.models_url())
                .header(API_KEY_HEADER, api_key)
                .query(&[("pageSize", LIST_PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| Error::Llm(format!("Gemini model listing failed: {}", e)))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::Llm(format!(
                    "Gemini model listing failed ({}): {}",
                    status, body
                )));
            }

            let page: ListModelsResponse = response
                .json()
                .await
                .map_err(|e| Error::Llm(format!("Failed to parse Gemini model list: {}", e)))?;

            models.extend(page.models);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(models)
    }

    async fn generate_content(&self, api_key: &str, model: &str, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url(model))
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Llm(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Llm(format!(
                "Gemini generation failed ({}): {}",
                status, body
            )));
        }

        let gen_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Llm(format!("Failed to parse Gemini response: {}", e)))?;

        gen_response
            .into_text()
            .ok_or_else(|| Error::Llm("No text in Gemini response".to_string()))
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
