/// Render instructions that make up the popup output

use crate::metrics::CommentMetrics;
use std::rc::Rc;

/// The three images generated by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    SentimentChart,
    TrendGraph,
    WordCloud,
}

impl VisualKind {
    pub const ALL: [VisualKind; 3] = [
        VisualKind::SentimentChart,
        VisualKind::TrendGraph,
        VisualKind::WordCloud,
    ];

    pub fn endpoint(&self) -> &'static str {
        match self {
            VisualKind::SentimentChart => "generate_chart",
            VisualKind::TrendGraph => "generate_trend_graph",
            VisualKind::WordCloud => "generate_wordcloud",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            VisualKind::SentimentChart => "Sentiment Analysis Results",
            VisualKind::TrendGraph => "Sentiment Trend Over Time",
            VisualKind::WordCloud => "Comment Wordcloud",
        }
    }

    pub fn caption(&self) -> Option<&'static str> {
        match self {
            VisualKind::SentimentChart => Some("See the pie chart below for sentiment distribution."),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            VisualKind::SentimentChart => "Error fetching chart image.",
            VisualKind::TrendGraph => "Error fetching trend graph image.",
            VisualKind::WordCloud => "Error fetching word cloud image.",
        }
    }
}

/// Binary image returned by a visualization endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlob {
    pub bytes: Rc<Vec<u8>>,
    pub content_type: String,
}

impl ImageBlob {
    pub fn new(bytes: Vec<u8>, content_type: &str) -> ImageBlob {
        ImageBlob {
            bytes: Rc::new(bytes),
            content_type: content_type.to_string(),
        }
    }
}

/// A prediction listed in the top comments section
#[derive(Debug, Clone, PartialEq)]
pub struct RankedComment {
    pub rank: usize,
    pub comment: String,
    pub sentiment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportBlock {
    Notice(String),
    Error(String),
    VideoId(String),
    Summary(CommentMetrics),
    Visual {
        kind: VisualKind,
        image: Option<ImageBlob>,
    },
    TopComments {
        limit: usize,
        items: Vec<RankedComment>,
    },
}

/// Receives blocks in the order the popup should display them
pub trait ReportSink {
    fn push(&mut self, block: ReportBlock);
}

/// Append-only output owned by the popup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub blocks: Vec<ReportBlock>,
}

impl Report {
    pub fn new() -> Self {
        Report { blocks: Vec::new() }
    }

    /// True once the metrics summary has been appended
    pub fn has_summary(&self) -> bool {
        self.blocks
            .iter()
            .any(|block| matches!(block, ReportBlock::Summary(_)))
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            ReportBlock::Error(msg) => Some(msg.as_str()),
            _ => None,
        })
    }
}

impl ReportSink for Report {
    fn push(&mut self, block: ReportBlock) {
        self.blocks.push(block);
    }
}
