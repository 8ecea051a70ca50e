/// YouTube Comment Insights - Chrome Extension popup
/// Built with Rust + WASM + Yew

pub mod backend;
pub mod comment_data;
pub mod config;
pub mod error;
pub mod markup;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod video_id;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export core helpers for JavaScript access
#[wasm_bindgen]
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id::extract_video_id(url)
}

#[wasm_bindgen]
pub fn escape_html(text: &str) -> String {
    markup::escape_html(text)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
