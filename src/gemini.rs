// ABOUTME: Gemini API client for the deckgen application
// ABOUTME: Implements the content, image and text-transform capabilities over HTTP

use crate::ai::{ContentGenerator, ImageGenerator, TextTransformRequest, TextTransformer};
use crate::config::Config;
use crate::errors::{DeckError, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationSettings<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationSettings<'a>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        Some(text)
    }
}

#[derive(Serialize)]
struct ImageInstance<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageParameters {
    sample_count: u32,
    aspect_ratio: &'static str,
    output_mime_type: &'static str,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: Vec<ImageInstance<'a>>,
    parameters: ImageParameters,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

/// HTTP client for the Gemini and Imagen endpoints.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    content_model: String,
    image_model: String,
    text_model: String,
}

impl GeminiClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            DeckError::ConfigError(
                "No API key configured. Set GEMINI_API_KEY (or API_KEY).".to_string(),
            )
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(DeckError::FetchError)?;

        Ok(Self {
            client,
            api_key,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            content_model: config.content_model.clone(),
            image_model: config.image_model.clone(),
            text_model: config.text_model.clone(),
        })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    /// POST `body` as JSON. Transport failures stay `FetchError`; a non-2xx
    /// reply becomes `ApiError` carrying the status and body.
    async fn post<B, R>(&self, url: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DeckError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<R>().await?)
    }

    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        schema: Option<&Value>,
        no_text: fn(String) -> DeckError,
    ) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: schema.map(|schema| GenerationSettings {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
        };

        let response: GenerateContentResponse = self
            .post(&self.endpoint(model, "generateContent"), &request)
            .await?;
        response
            .text()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| no_text("the model returned no text".to_string()))
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_content(&self, prompt: &str, schema: &Value) -> Result<String> {
        info!("Requesting presentation outline from {}", self.content_model);
        self.generate_text(
            &self.content_model,
            prompt,
            Some(schema),
            DeckError::ContentGeneration,
        )
        .await
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate_image(&self, prompt: &str, style: &str) -> Result<String> {
        let full_prompt = format!(
            "{}, cinematic, high-detail, professional photograph of: {}",
            style, prompt
        );
        let request = PredictRequest {
            instances: vec![ImageInstance {
                prompt: &full_prompt,
            }],
            parameters: ImageParameters {
                sample_count: 1,
                aspect_ratio: "16:9",
                output_mime_type: "image/png",
            },
        };

        let response: PredictResponse = self
            .post(&self.endpoint(&self.image_model, "predict"), &request)
            .await?;

        let prediction = response
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| DeckError::ImageGeneration("no image was returned".to_string()))?;
        let bytes = prediction.bytes_base64_encoded.ok_or_else(|| {
            DeckError::ImageGeneration("the image response had no data".to_string())
        })?;
        let mime = prediction
            .mime_type
            .unwrap_or_else(|| "image/png".to_string());

        Ok(format!("data:{};base64,{}", mime, bytes))
    }
}

/// Instruction sent for a single-field rewrite.
pub fn text_transform_prompt(request: &TextTransformRequest) -> String {
    let bullets = if request.context.bullets.is_empty() {
        "(none)".to_string()
    } else {
        request
            .context
            .bullets
            .iter()
            .map(|b| format!("- {}", b))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "You are an expert presentation editor. Rewrite a single piece of slide text.\n\n\
         Slide title: {title}\n\
         Other points on the slide:\n{bullets}\n\n\
         Text to rewrite: \"{text}\"\n\
         Instruction: {action}\n\n\
         Reply with only the rewritten text. Do not add quotes, labels or explanations.",
        title = request.context.title,
        bullets = bullets,
        text = request.text,
        action = request.action
    )
}

#[async_trait]
impl TextTransformer for GeminiClient {
    async fn transform_text(&self, request: &TextTransformRequest) -> Result<String> {
        info!("Requesting text transform '{}'", request.action);
        let prompt = text_transform_prompt(request);
        self.generate_text(&self.text_model, &prompt, None, DeckError::TextTransform)
            .await
            .map(|text| text.trim().to_string())
    }
}
