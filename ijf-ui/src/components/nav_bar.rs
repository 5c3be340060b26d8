//! Sticky header with the site title and scroll-spy navigation links.

use crate::scroll;
use crate::state::AppState;
use crate::theme::{ACCENT, INK};
use dioxus::prelude::*;
use ijf_content::navigation::{self, NAV_LINKS};
use ijf_content::resources::SITE_TITLE;

/// Inline style for a nav link; the active one is underlined in the accent colour.
pub(crate) fn nav_link_style(active: bool) -> String {
    let (color, border) = if active { (ACCENT, ACCENT) } else { (INK, "transparent") };
    format!(
        "color: {}; border-bottom: 2px solid {}; padding-bottom: 4px; text-decoration: none; transition: all 0.2s;",
        color, border
    )
}

/// Resolve a clicked nav href and ask `scroll_to` to bring its section into
/// view. Returns the anchor scrolled to.
///
/// The highlight is left alone: the scroll-spy moves it as the page scrolls.
pub(crate) fn follow_nav_link(href: &str, scroll_to: impl FnOnce(&str) -> bool) -> Option<&'static str> {
    match navigation::resolve_href(href) {
        Ok(link) if scroll_to(link.anchor) => Some(link.anchor),
        Ok(_) => None,
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

/// Header navigation. Clicking a link smooth-scrolls to its section instead
/// of jumping to the anchor.
#[component]
pub fn NavBar() -> Element {
    let state = use_context::<AppState>();
    let selection = (state.selection)();

    rsx! {
        header {
            style: "position: sticky; top: 0; z-index: 20; background: rgba(255,255,255,0.8); backdrop-filter: blur(12px); box-shadow: 0 1px 2px rgba(0,0,0,0.05);",
            nav {
                style: "max-width: 1200px; margin: 0 auto; padding: 12px 24px; display: flex; align-items: center; justify-content: space-between;",
                div {
                    style: "font-size: 20px; font-weight: bold;",
                    "{SITE_TITLE}"
                }
                div {
                    style: "display: flex; gap: 32px; align-items: center;",
                    for link in NAV_LINKS.iter() {
                        a {
                            key: "{link.anchor}",
                            class: "nav-link",
                            href: link.href(),
                            style: nav_link_style(selection.is_nav_active(link.anchor)),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                follow_nav_link(&link.href(), scroll::scroll_to_section);
                            },
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
