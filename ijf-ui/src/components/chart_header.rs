//! Chart card header with title and a one-line caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Caption under the title
    #[props(default = String::new())]
    pub caption: String,
}

/// Centered header for the chart card.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 24px; text-align: center;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 24px; font-weight: bold;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0; color: #6B7280;",
                    "{props.caption}"
                }
            }
        }
    }
}
