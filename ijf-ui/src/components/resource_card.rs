//! Toolkit card: icon, title, optional intro and a list of outbound links.

use crate::components::ExternalLink;
use crate::theme::{card_style, ACCENT};
use dioxus::prelude::*;
use ijf_content::resources::ResourceGroup;

#[derive(Props, Clone, PartialEq)]
pub struct ResourceCardProps {
    pub group: ResourceGroup,
}

#[component]
pub fn ResourceCard(props: ResourceCardProps) -> Element {
    let group = props.group;
    let link_style = format!("font-weight: 600; color: {}; text-decoration: none;", ACCENT);

    rsx! {
        div {
            style: card_style(24),
            h3 {
                style: "font-size: 20px; font-weight: bold; margin: 0 0 16px 0; display: flex; align-items: center;",
                span { style: "font-size: 24px; margin-right: 12px;", "{group.icon}" }
                "{group.title}"
            }
            if let Some(intro) = group.intro {
                p { style: "font-size: 14px; color: #4B5563; margin: 0 0 16px 0;", "{intro}" }
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 14px;",
                for link in group.links.iter() {
                    li {
                        key: "{link.url}",
                        ExternalLink {
                            href: link.url.to_string(),
                            style: link_style.clone(),
                            "{link.name}"
                        }
                        p { style: "font-size: 13px; color: #6B7280; margin: 2px 0 0 0;", "{link.blurb}" }
                    }
                }
            }
        }
    }
}
