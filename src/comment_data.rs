/// Data structures exchanged with the sentiment backend
use serde::{Deserialize, Deserializer, Serialize};

/// One user comment on a video, as returned by `/fetch_comments`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub text: String,
    #[serde(rename = "authorId", default = "unknown_author")]
    pub author_id: String,
    /// Original posting time, forwarded untouched to `/predict_with_timestamps`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

fn unknown_author() -> String {
    "Unknown".to_string()
}

impl Comment {
    pub fn new(text: &str, author_id: &str) -> Comment {
        Comment {
            text: text.to_string(),
            author_id: author_id.to_string(),
            timestamp: None,
        }
    }
}

/// Response body of `/fetch_comments`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentsPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<Comment>,
}

/// A `null` comment list means the video has no comments
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Comment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Comment>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A comment paired with its classified sentiment label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub comment: String,
    pub sentiment: String,
    #[serde(default)]
    pub timestamp: String,
}

/// One point of the sentiment trend series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentDatapoint {
    pub timestamp: String,
    pub sentiment: i64,
}

/// Active browser tab as reported by the extension host
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActiveTab {
    #[serde(default)]
    pub url: Option<String>,
}
