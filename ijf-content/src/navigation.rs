//! Header navigation links and the page sections they point to.

use crate::error::{ContentError, Result};

/// A header link to one of the page sections.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NavLink {
    /// DOM id of the target `section`
    pub anchor: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// In-page href, e.g. `#toolkit`.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Anchor highlighted before any scroll position is known.
pub const DEFAULT_ANCHOR: &str = "welcome";

/// Sections in top-to-bottom document order.
pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { anchor: "welcome", label: "Welcome" },
    NavLink { anchor: "opportunities", label: "Opportunities" },
    NavLink { anchor: "toolkit", label: "Toolkit" },
    NavLink { anchor: "culture", label: "Workplace" },
    NavLink { anchor: "action-plan", label: "Your Plan" },
];

/// Look up a section by anchor id. Accepts both `toolkit` and `#toolkit`.
pub fn find(anchor: &str) -> Option<&'static NavLink> {
    let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
    NAV_LINKS.iter().find(|link| link.anchor == anchor)
}

/// Resolve a clicked in-page href (`#toolkit`) to its section link.
///
/// Only fragment hrefs naming one of `NAV_LINKS` resolve; anything else
/// would be a real navigation and is rejected.
pub fn resolve_href(href: &str) -> Result<&'static NavLink> {
    href.strip_prefix('#')
        .and_then(find)
        .ok_or_else(|| ContentError::UnknownAnchor(href.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_order() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|l| l.anchor).collect();
        assert_eq!(
            anchors,
            vec!["welcome", "opportunities", "toolkit", "culture", "action-plan"]
        );
        assert_eq!(NAV_LINKS[0].anchor, DEFAULT_ANCHOR);
    }

    #[test]
    fn test_find_with_and_without_hash() {
        assert_eq!(find("#culture").unwrap().label, "Workplace");
        assert_eq!(find("action-plan").unwrap().label, "Your Plan");
        assert!(find("#jobs").is_none());
    }

    #[test]
    fn test_resolve_href() {
        for link in NAV_LINKS.iter() {
            assert_eq!(resolve_href(&link.href()).unwrap(), link);
        }
        assert!(matches!(resolve_href("toolkit"), Err(ContentError::UnknownAnchor(_))));
        assert!(resolve_href("#footer").is_err());
        assert!(resolve_href("https://www.seek.co.nz/#toolkit").is_err());
    }

    #[test]
    fn test_href() {
        assert_eq!(NAV_LINKS[2].href(), "#toolkit");
    }
}
