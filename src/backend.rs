//! Sentiment backend client
//!
//! Comment retrieval, classification and image generation all happen on the
//! backend; this module only moves JSON and image bytes over HTTP.

use crate::comment_data::{Comment, CommentsPayload, Prediction, SentimentDatapoint};
use crate::config::PopupConfig;
use crate::error::{BackendError, Result};
use crate::metrics::SentimentCounts;
use crate::report::{ImageBlob, VisualKind};
use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Content type assumed when an image response does not declare one
const DEFAULT_IMAGE_TYPE: &str = "image/png";

/// Operations the popup needs from the backend
#[async_trait(?Send)]
pub trait SentimentBackend {
    async fn fetch_comments(&self, video_id: &str) -> Result<Vec<Comment>>;

    async fn predict_with_timestamps(&self, comments: &[Comment]) -> Result<Vec<Prediction>>;

    async fn generate_visual(&self, request: &VisualRequest) -> Result<ImageBlob>;
}

/// Payload for one of the image endpoints
#[derive(Debug, Clone, PartialEq)]
pub enum VisualRequest {
    SentimentChart(SentimentCounts),
    TrendGraph(Vec<SentimentDatapoint>),
    WordCloud(Vec<String>),
}

impl VisualRequest {
    pub fn kind(&self) -> VisualKind {
        match self {
            VisualRequest::SentimentChart(_) => VisualKind::SentimentChart,
            VisualRequest::TrendGraph(_) => VisualKind::TrendGraph,
            VisualRequest::WordCloud(_) => VisualKind::WordCloud,
        }
    }

    pub fn body(&self) -> serde_json::Value {
        match self {
            VisualRequest::SentimentChart(counts) => json!({ "sentiment_counts": counts }),
            VisualRequest::TrendGraph(points) => json!({ "sentiment_data": points }),
            VisualRequest::WordCloud(texts) => json!({ "comments": texts }),
        }
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    comments: &'a [Comment],
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PredictResponse {
    Predictions(Vec<Prediction>),
    Failed { error: String },
}

/// Pull the `error` field out of a backend error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Decode a `/predict_with_timestamps` body, treating `{error}` as a failure
fn parse_predictions(body: &str) -> Result<Vec<Prediction>> {
    match serde_json::from_str::<PredictResponse>(body)? {
        PredictResponse::Predictions(predictions) => Ok(predictions),
        PredictResponse::Failed { error } => Err(BackendError::Rejected(error)),
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(BackendError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// HTTP client for the Flask sentiment service
pub struct BackendClient {
    http: Client,
    config: PopupConfig,
}

impl BackendClient {
    pub fn new(config: PopupConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl SentimentBackend for BackendClient {
    async fn fetch_comments(&self, video_id: &str) -> Result<Vec<Comment>> {
        let mut url = self.config.endpoint("fetch_comments")?;
        url.query_pairs_mut().append_pair("videoId", video_id);
        debug!("GET {}", url);

        let response = check_status(self.http.get(url).send().await?).await?;
        let payload: CommentsPayload = serde_json::from_str(&response.text().await?)?;

        Ok(payload.comments)
    }

    async fn predict_with_timestamps(&self, comments: &[Comment]) -> Result<Vec<Prediction>> {
        let url = self.config.endpoint("predict_with_timestamps")?;
        debug!("POST {} ({} comments)", url, comments.len());

        let response = self
            .http
            .post(url)
            .json(&PredictRequest { comments })
            .send()
            .await?;
        let response = check_status(response).await?;

        parse_predictions(&response.text().await?)
    }

    async fn generate_visual(&self, request: &VisualRequest) -> Result<ImageBlob> {
        let url = self.config.endpoint(request.kind().endpoint())?;
        debug!("POST {}", url);

        let response = self.http.post(url).json(&request.body()).send().await?;
        let response = check_status(response).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(DEFAULT_IMAGE_TYPE)
            .to_string();
        let bytes = response.bytes().await?;

        Ok(ImageBlob::new(bytes.to_vec(), &content_type))
    }
}
