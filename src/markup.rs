/// HTML escaping and static report export

use crate::report::{ImageBlob, ReportBlock};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt::Write as _;

/// Escape text for embedding in HTML
///
/// Ampersand goes first so the entities produced for the other characters
/// are not escaped a second time.
pub fn escape_html(unsafe_text: &str) -> String {
    unsafe_text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

fn image_data_uri(image: &ImageBlob) -> String {
    format!(
        "data:{};base64,{}",
        escape_html(&image.content_type),
        STANDARD.encode(image.bytes.as_slice())
    )
}

fn section(out: &mut String, title: &str, body: &str) {
    let _ = write!(
        out,
        "<div class=\"section\"><div class=\"section-title\">{}</div>{}</div>",
        escape_html(title),
        body
    );
}

fn metric(title: &str, value: &str) -> String {
    format!(
        "<div class=\"metric\"><div class=\"metric-title\">{}</div><div class=\"metric-value\">{}</div></div>",
        escape_html(title),
        escape_html(value)
    )
}

/// Render a report as a standalone HTML document
pub fn render_report_html(title: &str, blocks: &[ReportBlock]) -> String {
    let mut body = String::new();

    for block in blocks {
        match block {
            ReportBlock::Notice(msg) => {
                let _ = write!(body, "<p>{}</p>", escape_html(msg));
            }
            ReportBlock::Error(msg) => {
                let _ = write!(body, "<p class=\"error\">{}</p>", escape_html(msg));
            }
            ReportBlock::VideoId(id) => {
                section(&mut body, "YouTube Video ID", &format!("<p>{}</p>", escape_html(id)));
            }
            ReportBlock::Summary(metrics) => {
                let cards = [
                    metric("Total Comments", &metrics.total_comments.to_string()),
                    metric("Unique Commenters", &metrics.unique_commenters.to_string()),
                    metric(
                        "Avg Comment Length",
                        &format!("{} words", metrics.avg_word_length_display()),
                    ),
                    metric(
                        "Avg Sentiment Score",
                        &format!("{}/10", metrics.normalized_sentiment_score_display()),
                    ),
                ];
                section(
                    &mut body,
                    "Comment Analysis Summary",
                    &format!("<div class=\"metrics-container\">{}</div>", cards.concat()),
                );
            }
            ReportBlock::Visual { kind, image } => {
                let mut inner = String::new();
                if let Some(caption) = kind.caption() {
                    let _ = write!(inner, "<p>{}</p>", escape_html(caption));
                }
                if let Some(image) = image {
                    let _ = write!(
                        inner,
                        "<img src=\"{}\" alt=\"{}\" style=\"width: 100%; margin-top: 20px;\">",
                        image_data_uri(image),
                        escape_html(kind.title())
                    );
                }
                section(&mut body, kind.title(), &inner);
            }
            ReportBlock::TopComments { limit, items } => {
                let list: String = items
                    .iter()
                    .map(|item| {
                        format!(
                            "<li class=\"comment-item\"><span>{}. {}</span><br><span class=\"comment-sentiment\">Sentiment: {}</span></li>",
                            item.rank,
                            escape_html(&item.comment),
                            escape_html(&item.sentiment)
                        )
                    })
                    .collect();
                section(
                    &mut body,
                    &format!("Top {} Comments with Sentiments", limit),
                    &format!("<ul class=\"comment-list\">{}</ul>", list),
                );
            }
        }
    }

    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head><body><div id=\"output\">{}</div></body></html>\n",
        escape_html(title),
        body
    )
}
