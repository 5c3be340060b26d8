//! Centered section heading with an intro paragraph.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub intro: String,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div {
            style: "text-align: center; margin-bottom: 48px;",
            h2 {
                style: "font-size: 36px; font-weight: bold; margin: 0;",
                "{props.title}"
            }
            if !props.intro.is_empty() {
                p {
                    style: "margin: 16px auto 0 auto; font-size: 18px; color: #4B5563; max-width: 768px;",
                    "{props.intro}"
                }
            }
        }
    }
}
