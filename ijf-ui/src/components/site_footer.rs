//! Footer with key support contacts.

use crate::components::ExternalLink;
use crate::theme::INK;
use dioxus::prelude::*;
use ijf_content::resources::{FOOTER_NOTE, SUPPORT_CONTACTS};

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            style: "background: {INK}; color: #fff;",
            div {
                style: "max-width: 1200px; margin: 0 auto; padding: 32px 24px; text-align: center;",
                p { style: "font-weight: bold; font-size: 18px; margin: 0 0 16px 0;", "Key Support Contacts" }
                div {
                    style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 32px;",
                    for contact in SUPPORT_CONTACTS.iter() {
                        ExternalLink {
                            key: "{contact.url}",
                            href: contact.url.to_string(),
                            style: "color: #fff;".to_string(),
                            "{contact.label}"
                        }
                    }
                }
                p { style: "font-size: 14px; margin: 32px 0 0 0; color: #9CA3AF;", "{FOOTER_NOTE}" }
            }
        }
    }
}
