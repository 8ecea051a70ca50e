/// Comment and sentiment aggregation

use crate::comment_data::{Comment, Prediction, SentimentDatapoint};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Labels the classifier is known to emit
pub const KNOWN_LABELS: [&str; 3] = ["1", "0", "-1"];

/// Count of predictions per sentiment label
///
/// Starts with every known label at zero. Labels outside the known set are
/// accumulated as they appear rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentCounts(BTreeMap<String, usize>);

impl SentimentCounts {
    pub fn new() -> Self {
        SentimentCounts(
            KNOWN_LABELS
                .iter()
                .map(|label| (label.to_string(), 0))
                .collect(),
        )
    }

    pub fn from_predictions(predictions: &[Prediction]) -> Self {
        predictions.iter().fold(Self::new(), |mut counts, item| {
            counts.record(&item.sentiment);
            counts
        })
    }

    pub fn record(&mut self, label: &str) {
        *self.0.entry(label.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, label: &str) -> usize {
        self.0.get(label).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

impl Default for SentimentCounts {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a sentiment label as an integer score
///
/// Reads an optional sign and the leading digits, ignoring whatever follows,
/// so `"1.0"` scores as 1. Labels with no leading digits have no score.
pub fn parse_label(label: &str) -> Option<i64> {
    let label = label.trim_start();
    let sign_len = usize::from(label.starts_with(['-', '+']));
    let digits_len = label[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return None;
    }
    label[..sign_len + digits_len].parse::<i64>().ok()
}

/// Build the trend series, skipping predictions whose label is not an integer
pub fn sentiment_series(predictions: &[Prediction]) -> Vec<SentimentDatapoint> {
    predictions
        .iter()
        .filter_map(|item| match parse_label(&item.sentiment) {
            Some(sentiment) => Some(SentimentDatapoint {
                timestamp: item.timestamp.clone(),
                sentiment,
            }),
            None => {
                warn!("Skipping non-numeric sentiment label {:?}", item.sentiment);
                None
            }
        })
        .collect()
}

/// Count whitespace-delimited words in a comment
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Round half away from zero to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summary statistics shown at the top of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentMetrics {
    pub total_comments: usize,
    pub unique_commenters: usize,
    pub total_words: usize,
    pub avg_word_length: f64,
    pub sentiment_counts: SentimentCounts,
    pub avg_sentiment_score: f64,
    pub normalized_sentiment_score: f64,
}

impl CommentMetrics {
    pub fn compute(comments: &[Comment], predictions: &[Prediction]) -> CommentMetrics {
        let total_comments = comments.len();
        let unique_commenters = comments
            .iter()
            .map(|c| c.author_id.as_str())
            .collect::<HashSet<_>>()
            .len();
        let total_words: usize = comments.iter().map(|c| word_count(&c.text)).sum();

        let avg_word_length = if total_comments == 0 {
            0.0
        } else {
            round2(total_words as f64 / total_comments as f64)
        };

        let scores: Vec<i64> = predictions
            .iter()
            .filter_map(|p| parse_label(&p.sentiment))
            .collect();
        let avg_sentiment_score = if scores.is_empty() {
            0.0
        } else {
            round2(scores.iter().sum::<i64>() as f64 / scores.len() as f64)
        };

        // Rescale [-1, 1] onto the [0, 10] display range
        let normalized_sentiment_score = round2(((avg_sentiment_score + 1.0) / 2.0) * 10.0);

        CommentMetrics {
            total_comments,
            unique_commenters,
            total_words,
            avg_word_length,
            sentiment_counts: SentimentCounts::from_predictions(predictions),
            avg_sentiment_score,
            normalized_sentiment_score,
        }
    }

    pub fn avg_word_length_display(&self) -> String {
        format!("{:.2}", self.avg_word_length)
    }

    pub fn avg_sentiment_score_display(&self) -> String {
        format!("{:.2}", self.avg_sentiment_score)
    }

    pub fn normalized_sentiment_score_display(&self) -> String {
        format!("{:.2}", self.normalized_sentiment_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_prediction(sentiment: &str, timestamp: &str) -> Prediction {
        Prediction {
            comment: format!("comment {}", sentiment),
            sentiment: sentiment.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    fn predictions_with(labels: &[&str]) -> Vec<Prediction> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| create_test_prediction(label, &format!("2024-01-{:02}T00:00:00Z", i + 1)))
            .collect()
    }

    #[test]
    fn test_counts_start_with_known_labels() {
        let counts = SentimentCounts::new();

        assert_eq!(counts.get("1"), 0);
        assert_eq!(counts.get("0"), 0);
        assert_eq!(counts.get("-1"), 0);
        assert_eq!(counts.iter().count(), 3);
    }

    #[test]
    fn test_counts_from_predictions() {
        let counts = SentimentCounts::from_predictions(&predictions_with(&["1", "1", "-1", "0"]));

        assert_eq!(counts.get("1"), 2);
        assert_eq!(counts.get("0"), 1);
        assert_eq!(counts.get("-1"), 1);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 4);
    }

    #[test]
    fn test_counts_accumulate_unknown_labels() {
        let counts = SentimentCounts::from_predictions(&predictions_with(&["1", "2", "neutral", "2"]));

        assert_eq!(counts.get("2"), 2);
        assert_eq!(counts.get("neutral"), 1);
        assert_eq!(counts.get("0"), 0);
        assert_eq!(counts.iter().count(), 5);
    }

    #[test]
    fn test_counts_serialize_as_plain_map() {
        let counts = SentimentCounts::from_predictions(&predictions_with(&["1", "1", "-1", "0"]));
        let value = serde_json::to_value(&counts).unwrap();

        assert_eq!(value, serde_json::json!({"1": 2, "0": 1, "-1": 1}));
    }

    #[test]
    fn test_commenter_and_word_metrics() {
        let comments = vec![Comment::new("hello world", "a"), Comment::new("hi", "a")];
        let metrics = CommentMetrics::compute(&comments, &predictions_with(&["1", "0"]));

        assert_eq!(metrics.total_comments, 2);
        assert_eq!(metrics.unique_commenters, 1);
        assert_eq!(metrics.total_words, 3);
        assert_eq!(metrics.avg_word_length_display(), "1.50");
    }

    #[test]
    fn test_sentiment_scores() {
        let comments: Vec<Comment> = (0..4).map(|i| Comment::new("x", &i.to_string())).collect();
        let metrics = CommentMetrics::compute(&comments, &predictions_with(&["1", "1", "-1", "0"]));

        assert_eq!(metrics.avg_sentiment_score_display(), "0.25");
        assert_eq!(metrics.normalized_sentiment_score_display(), "6.25");
    }

    #[test]
    fn test_normalized_score_bounds() {
        let comments = vec![Comment::new("x", "a"), Comment::new("y", "b")];

        let all_negative = CommentMetrics::compute(&comments, &predictions_with(&["-1", "-1"]));
        assert_eq!(all_negative.normalized_sentiment_score_display(), "0.00");

        let all_positive = CommentMetrics::compute(&comments, &predictions_with(&["1", "1"]));
        assert_eq!(all_positive.normalized_sentiment_score_display(), "10.00");
    }

    #[test]
    fn test_non_numeric_labels_do_not_move_average() {
        let comments = vec![Comment::new("x", "a"), Comment::new("y", "b"), Comment::new("z", "c")];
        let metrics = CommentMetrics::compute(&comments, &predictions_with(&["1", "unsure", "1"]));

        assert_eq!(metrics.avg_sentiment_score_display(), "1.00");
        assert_eq!(metrics.sentiment_counts.get("unsure"), 1);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label("1"), Some(1));
        assert_eq!(parse_label("-1"), Some(-1));
        assert_eq!(parse_label("+1"), Some(1));
        assert_eq!(parse_label(" 0"), Some(0));
        assert_eq!(parse_label("1.0"), Some(1));
        assert_eq!(parse_label("-1.0"), Some(-1));
        assert_eq!(parse_label("2x"), Some(2));
        assert_eq!(parse_label("neutral"), None);
        assert_eq!(parse_label("-"), None);
        assert_eq!(parse_label(""), None);
    }

    #[test]
    fn test_float_labels_score_by_integer_part() {
        let comments = vec![Comment::new("x", "a"), Comment::new("y", "b")];
        let predictions = predictions_with(&["1.0", "1.0"]);

        let metrics = CommentMetrics::compute(&comments, &predictions);

        assert_eq!(metrics.avg_sentiment_score_display(), "1.00");
        assert_eq!(metrics.normalized_sentiment_score_display(), "10.00");
        assert_eq!(sentiment_series(&predictions).len(), 2);
        assert_eq!(metrics.sentiment_counts.get("1.0"), 2);
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  spaced   out\twords\n"), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(format!("{:.2}", round2(0.125)), "0.13");
        assert_eq!(format!("{:.2}", round2(-0.125)), "-0.13");
        assert_eq!(format!("{:.2}", round2(1.0 / 3.0)), "0.33");
    }

    #[test]
    fn test_sentiment_series() {
        let series = sentiment_series(&predictions_with(&["1", "-1", "bogus", "0"]));

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].sentiment, 1);
        assert_eq!(series[1].sentiment, -1);
        assert_eq!(series[2].sentiment, 0);
        assert_eq!(series[2].timestamp, "2024-01-04T00:00:00Z");
    }
}
