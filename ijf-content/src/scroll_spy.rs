//! Scroll-spy: pick the navigation anchor for the current scroll offset.

/// Sections start counting as "in view" this many pixels before their top
/// edge reaches the top of the viewport.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

/// Vertical position of one page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionPosition<'a> {
    pub anchor: &'a str,
    /// Offset of the section's top edge from the document top, or `None`
    /// when the element is not in the document.
    pub top: Option<f64>,
}

/// Return the anchor of the bottom-most section whose top is at or above
/// `scroll_y + SCROLL_LOOKAHEAD`.
///
/// `sections` must be in document order. Falls back to the first section
/// when none qualify, and returns `None` only for an empty slice.
pub fn active_anchor<'a>(sections: &[SectionPosition<'a>], scroll_y: f64) -> Option<&'a str> {
    let threshold = scroll_y + SCROLL_LOOKAHEAD;
    let mut current = sections.first().map(|s| s.anchor);
    for section in sections {
        if let Some(top) = section.top {
            if top <= threshold {
                current = Some(section.anchor);
            }
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionPosition<'static>> {
        vec![
            SectionPosition { anchor: "welcome", top: Some(60.0) },
            SectionPosition { anchor: "opportunities", top: Some(700.0) },
            SectionPosition { anchor: "toolkit", top: Some(2100.0) },
            SectionPosition { anchor: "culture", top: Some(2900.0) },
            SectionPosition { anchor: "action-plan", top: Some(3700.0) },
        ]
    }

    #[test]
    fn test_top_of_page_is_welcome() {
        assert_eq!(active_anchor(&page(), 0.0), Some("welcome"));
    }

    #[test]
    fn test_before_first_section_defaults_to_first() {
        let sections = vec![
            SectionPosition { anchor: "welcome", top: Some(500.0) },
            SectionPosition { anchor: "opportunities", top: Some(900.0) },
        ];
        assert_eq!(active_anchor(&sections, 0.0), Some("welcome"));
    }

    #[test]
    fn test_lookahead_boundary() {
        // 700 - 100 = 600 is the first offset that activates "opportunities"
        assert_eq!(active_anchor(&page(), 599.0), Some("welcome"));
        assert_eq!(active_anchor(&page(), 600.0), Some("opportunities"));
        assert_eq!(active_anchor(&page(), 2000.0), Some("toolkit"));
    }

    #[test]
    fn test_bottom_of_page_is_last_section() {
        assert_eq!(active_anchor(&page(), 10_000.0), Some("action-plan"));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut sections = page();
        sections[2].top = None;
        assert_eq!(active_anchor(&sections, 2000.0), Some("opportunities"));
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(active_anchor(&[], 100.0), None);
    }
}
