/// Reusable UI components

use crate::report::ImageBlob;
use crate::ui::image::{object_url, revoke_object_url};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportSectionProps {
    pub title: AttrValue,
    pub children: Children,
}

#[function_component(ReportSection)]
pub fn report_section(props: &ReportSectionProps) -> Html {
    html! {
        <div class="section">
            <div class="section-title">{props.title.clone()}</div>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <div class="metric">
            <div class="metric-title">{props.title.clone()}</div>
            <div class="metric-value">{props.value.clone()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VisualImageProps {
    pub image: ImageBlob,
    pub alt: AttrValue,
}

/// Backend image shown through an object URL that lives as long as the component
#[function_component(VisualImage)]
pub fn visual_image(props: &VisualImageProps) -> Html {
    let src = use_memo(props.image.clone(), |image| match object_url(image) {
        Ok(url) => Some(url),
        Err(e) => {
            log::error!("Failed to create image URL: {:?}", e);
            None
        }
    });

    use_effect_with(src.clone(), |src| {
        let src = src.clone();
        move || {
            if let Some(url) = &*src {
                revoke_object_url(url);
            }
        }
    });

    match &*src {
        Some(url) => html! {
            <img
                src={url.clone()}
                alt={props.alt.clone()}
                style="width: 100%; margin-top: 20px;"
            />
        },
        None => html! {
            <p class="error-text">{"Could not display image."}</p>
        },
    }
}
