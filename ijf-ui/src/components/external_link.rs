//! Outbound link that always opens in a new browsing context.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ExternalLinkProps {
    pub href: String,
    #[props(default = String::new())]
    pub style: String,
    pub children: Element,
}

/// `<a target="_blank" rel="noopener noreferrer">`.
#[component]
pub fn ExternalLink(props: ExternalLinkProps) -> Element {
    rsx! {
        a {
            href: "{props.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            style: "{props.style}",
            {props.children}
        }
    }
}
