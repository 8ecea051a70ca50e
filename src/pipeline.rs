/// Popup controller: URL check, comment fetch, classification, rendering

use crate::backend::{SentimentBackend, VisualRequest};
use crate::comment_data::{Comment, Prediction};
use crate::config::PopupConfig;
use crate::metrics::{CommentMetrics, sentiment_series};
use crate::report::{RankedComment, ReportBlock, ReportSink, VisualKind};
use crate::video_id::extract_video_id;
use log::{error, info};

pub const INVALID_URL_MESSAGE: &str = "This is not a valid YouTube URL.";
pub const COMMENTS_FAILED_MESSAGE: &str = "Error fetching comments from backend.";
pub const NO_COMMENTS_MESSAGE: &str = "No comments found for this video.";
pub const PREDICTIONS_FAILED_MESSAGE: &str = "Error fetching sentiment predictions.";
pub const NO_PREDICTIONS_MESSAGE: &str = "Could not get sentiment predictions.";

/// Where a pipeline run stopped
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    InvalidUrl,
    NoComments,
    PredictionsFailed,
    Completed { failed_visuals: Vec<VisualKind> },
}

/// Run the whole analysis for the active tab's URL
///
/// Every stage gates the next: an invalid URL makes no network call, an empty
/// or failed comment fetch stops before classification, and a failed
/// classification stops before any image or the comment list is requested.
/// The three images are requested one after another and a failure in one of
/// them only affects its own section.
pub async fn run_analysis<B, S>(
    tab_url: &str,
    backend: &B,
    config: &PopupConfig,
    sink: &mut S,
) -> PipelineOutcome
where
    B: SentimentBackend + ?Sized,
    S: ReportSink + ?Sized,
{
    let Some(video_id) = extract_video_id(tab_url) else {
        info!("Active tab is not a watch page: {}", tab_url);
        sink.push(ReportBlock::Notice(INVALID_URL_MESSAGE.to_string()));
        return PipelineOutcome::InvalidUrl;
    };

    sink.push(ReportBlock::VideoId(video_id.clone()));
    sink.push(ReportBlock::Notice("Fetching comments...".to_string()));

    let comments = fetch_comments_stage(&video_id, backend, sink).await;
    if comments.is_empty() {
        sink.push(ReportBlock::Notice(NO_COMMENTS_MESSAGE.to_string()));
        return PipelineOutcome::NoComments;
    }

    sink.push(ReportBlock::Notice(format!(
        "Fetched {} comments. Performing sentiment analysis...",
        comments.len()
    )));

    let Some(predictions) = predictions_stage(&comments, backend, sink).await else {
        sink.push(ReportBlock::Notice(NO_PREDICTIONS_MESSAGE.to_string()));
        return PipelineOutcome::PredictionsFailed;
    };

    let metrics = CommentMetrics::compute(&comments, &predictions);
    info!(
        "{} comments, {} commenters, sentiment {}/10",
        metrics.total_comments,
        metrics.unique_commenters,
        metrics.normalized_sentiment_score_display()
    );

    let requests = [
        VisualRequest::SentimentChart(metrics.sentiment_counts.clone()),
        VisualRequest::TrendGraph(sentiment_series(&predictions)),
        VisualRequest::WordCloud(comments.iter().map(|c| c.text.clone()).collect()),
    ];
    sink.push(ReportBlock::Summary(metrics));

    let mut failed_visuals = Vec::new();
    for request in &requests {
        if !visual_stage(request, backend, sink).await {
            failed_visuals.push(request.kind());
        }
    }

    sink.push(ReportBlock::TopComments {
        limit: config.top_comment_limit,
        items: top_comments(&predictions, config.top_comment_limit),
    });

    PipelineOutcome::Completed { failed_visuals }
}

async fn fetch_comments_stage<B, S>(video_id: &str, backend: &B, sink: &mut S) -> Vec<Comment>
where
    B: SentimentBackend + ?Sized,
    S: ReportSink + ?Sized,
{
    match backend.fetch_comments(video_id).await {
        Ok(comments) => comments,
        Err(e) => {
            error!("Error fetching comments from backend: {}", e);
            sink.push(ReportBlock::Error(COMMENTS_FAILED_MESSAGE.to_string()));
            Vec::new()
        }
    }
}

async fn predictions_stage<B, S>(
    comments: &[Comment],
    backend: &B,
    sink: &mut S,
) -> Option<Vec<Prediction>>
where
    B: SentimentBackend + ?Sized,
    S: ReportSink + ?Sized,
{
    match backend.predict_with_timestamps(comments).await {
        Ok(predictions) => Some(predictions),
        Err(e) => {
            error!("Error fetching predictions: {}", e);
            sink.push(ReportBlock::Error(PREDICTIONS_FAILED_MESSAGE.to_string()));
            None
        }
    }
}

/// Returns false when the image could not be produced
async fn visual_stage<B, S>(request: &VisualRequest, backend: &B, sink: &mut S) -> bool
where
    B: SentimentBackend + ?Sized,
    S: ReportSink + ?Sized,
{
    let kind = request.kind();
    match backend.generate_visual(request).await {
        Ok(image) => {
            sink.push(ReportBlock::Visual {
                kind,
                image: Some(image),
            });
            true
        }
        Err(e) => {
            error!("{} ({}): {}", kind.failure_message(), kind.endpoint(), e);
            sink.push(ReportBlock::Visual { kind, image: None });
            sink.push(ReportBlock::Error(kind.failure_message().to_string()));
            false
        }
    }
}

/// First `limit` predictions in backend order, ranked from 1
pub fn top_comments(predictions: &[Prediction], limit: usize) -> Vec<RankedComment> {
    predictions
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, item)| RankedComment {
            rank: index + 1,
            comment: item.comment.clone(),
            sentiment: item.sentiment.clone(),
        })
        .collect()
}
