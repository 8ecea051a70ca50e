/// Renders the report blocks appended by the pipeline

use crate::report::{Report, ReportBlock, VisualKind};
use crate::ui::components::{MetricCard, ReportSection, VisualImage};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportViewProps {
    pub report: Report,
}

#[function_component(ReportView)]
pub fn report_view(props: &ReportViewProps) -> Html {
    html! {
        <div id="output">
            {for props.report.blocks.iter().map(render_block)}
        </div>
    }
}

fn container_id(kind: VisualKind) -> &'static str {
    match kind {
        VisualKind::SentimentChart => "chart-container",
        VisualKind::TrendGraph => "trend-graph-container",
        VisualKind::WordCloud => "wordcloud-container",
    }
}

fn render_block(block: &ReportBlock) -> Html {
    match block {
        ReportBlock::Notice(msg) => html! {
            <p>{msg}</p>
        },
        ReportBlock::Error(msg) => html! {
            <p class="error-text">{msg}</p>
        },
        ReportBlock::VideoId(id) => html! {
            <ReportSection title="YouTube Video ID">
                <p>{id}</p>
            </ReportSection>
        },
        ReportBlock::Summary(metrics) => html! {
            <ReportSection title="Comment Analysis Summary">
                <div class="metrics-container">
                    <MetricCard title="Total Comments" value={metrics.total_comments.to_string()} />
                    <MetricCard title="Unique Commenters" value={metrics.unique_commenters.to_string()} />
                    <MetricCard
                        title="Avg Comment Length"
                        value={format!("{} words", metrics.avg_word_length_display())}
                    />
                    <MetricCard
                        title="Avg Sentiment Score"
                        value={format!("{}/10", metrics.normalized_sentiment_score_display())}
                    />
                </div>
            </ReportSection>
        },
        ReportBlock::Visual { kind, image } => html! {
            <ReportSection title={kind.title()}>
                if let Some(caption) = kind.caption() {
                    <p>{caption}</p>
                }
                <div id={container_id(*kind)}>
                    if let Some(image) = image {
                        <VisualImage image={image.clone()} alt={kind.title()} />
                    }
                </div>
            </ReportSection>
        },
        ReportBlock::TopComments { limit, items } => html! {
            <ReportSection title={format!("Top {} Comments with Sentiments", limit)}>
                <ul class="comment-list">
                    {for items.iter().map(|item| html! {
                        <li class="comment-item">
                            <span>{format!("{}. {}", item.rank, item.comment)}</span>
                            <br />
                            <span class="comment-sentiment">{format!("Sentiment: {}", item.sentiment)}</span>
                        </li>
                    })}
                </ul>
            </ReportSection>
        },
    }
}
