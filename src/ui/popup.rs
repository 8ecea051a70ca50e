/// Popup UI for the comment insights extension

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use log::{error, info};
use std::rc::Rc;
use crate::backend::BackendClient;
use crate::comment_data::ActiveTab;
use crate::config::PopupConfig;
use crate::markup::render_report_html;
use crate::pipeline::{run_analysis, PipelineOutcome};
use crate::report::{Report, ReportBlock, ReportSink};
use crate::ui::report_view::ReportView;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    fn exportToFile(data: &str, filename: &str);
}

pub enum ReportAction {
    Append(ReportBlock),
}

impl Reducible for Report {
    type Action = ReportAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut report = (*self).clone();
        match action {
            ReportAction::Append(block) => report.push(block),
        }
        Rc::new(report)
    }
}

/// Feeds pipeline output into the popup's report reducer
struct DispatchSink(UseReducerDispatcher<Report>);

impl ReportSink for DispatchSink {
    fn push(&mut self, block: ReportBlock) {
        self.0.dispatch(ReportAction::Append(block));
    }
}

#[derive(Clone, PartialEq)]
enum AppState {
    Running,
    Finished,
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let report = use_reducer(Report::new);
    let state = use_state(|| AppState::Running);

    // Analyze the active tab once, when the popup opens
    {
        let dispatcher = report.dispatcher();
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match analyze_active_tab(dispatcher).await {
                    Ok(outcome) => {
                        info!("Analysis finished: {:?}", outcome);
                        state.set(AppState::Finished);
                    }
                    Err(e) => {
                        error!("Analysis could not start: {}", e);
                        state.set(AppState::Error(e));
                    }
                }
            });
            || ()
        });
    }

    let on_export = {
        let report = report.clone();

        Callback::from(move |_| {
            let html = render_report_html("YouTube Comment Insights", &report.blocks);
            let filename = format!("comment-insights-{}.html", js_sys::Date::now() as i64);
            exportToFile(&html, &filename);
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"YouTube Comment Insights"}</h1>

            <ReportView report={(*report).clone()} />

            // Status display
            {match &*state {
                AppState::Running => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Finished => html! {}
            }}

            if *state == AppState::Finished && report.has_summary() {
                <Button onclick={on_export} variant={ButtonVariant::Secondary} block={true}>
                    {"📥 Export Report"}
                </Button>
            }

            <p class="footer-popup">
                {"YouTube Comment Insights v0.1.0"}
            </p>
        </div>
    }
}

// Helper functions

async fn analyze_active_tab(dispatcher: UseReducerDispatcher<Report>) -> Result<PipelineOutcome, String> {
    let config = PopupConfig::from_build_env()
        .map_err(|e| format!("Invalid backend configuration: {}", e))?;
    let url = get_active_tab_url().await?;

    let backend = BackendClient::new(config.clone());
    let mut sink = DispatchSink(dispatcher);

    Ok(run_analysis(&url, &backend, &config, &mut sink).await)
}

async fn get_active_tab_url() -> Result<String, String> {
    match getActiveTab().await {
        Ok(tab_js) => {
            if tab_js.is_null() || tab_js.is_undefined() {
                return Ok(String::new());
            }
            let tab: ActiveTab = serde_wasm_bindgen::from_value(tab_js)
                .map_err(|e| format!("Failed to parse tab: {:?}", e))?;
            Ok(tab.url.unwrap_or_default())
        }
        Err(e) => Err(format!("Failed to query active tab: {:?}", e)),
    }
}
