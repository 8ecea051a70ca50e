/// UI module exports
pub mod components;
pub mod image;
pub mod popup;
pub mod report_view;
