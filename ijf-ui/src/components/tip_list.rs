//! Icon-led list of bold-heading tips (culture, rights, action plan).

use dioxus::prelude::*;
use ijf_content::resources::Tip;

#[derive(Props, Clone, PartialEq)]
pub struct TipListProps {
    pub tips: &'static [Tip],
    /// Row background, e.g. the green tint of the action plan
    #[props(default = String::new())]
    pub row_background: String,
}

#[component]
pub fn TipList(props: TipListProps) -> Element {
    let row_style = if props.row_background.is_empty() {
        "display: flex; align-items: flex-start;".to_string()
    } else {
        format!(
            "display: flex; align-items: center; padding: 12px; border-radius: 8px; background: {};",
            props.row_background
        )
    };

    rsx! {
        ul {
            style: "list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 18px;",
            for tip in props.tips.iter() {
                li {
                    key: "{tip.heading}",
                    style: "{row_style}",
                    span { style: "font-size: 24px; margin-right: 16px;", "{tip.icon}" }
                    div {
                        strong { style: "color: #1F2937;", "{tip.heading}" }
                        " {tip.body}"
                    }
                }
            }
        }
    }
}
