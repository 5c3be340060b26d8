//! The page's two pieces of selection state: the sector tab and the
//! highlighted navigation anchor.

use crate::error::{ContentError, Result};
use crate::navigation::{self, NAV_LINKS};
use crate::scroll_spy::{self, SectionPosition};
use crate::sector::{self, SectorEntry, SECTORS};

/// Current sector tab and navigation highlight.
///
/// Both fields always hold keys from the static catalogs; the setters
/// reject anything else and leave the state as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelection {
    active_sector: &'static str,
    active_nav: &'static str,
}

impl Default for PageSelection {
    fn default() -> Self {
        Self {
            active_sector: sector::DEFAULT_SECTOR,
            active_nav: navigation::DEFAULT_ANCHOR,
        }
    }
}

impl PageSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_sector(&self) -> &'static str {
        self.active_sector
    }

    pub fn active_nav(&self) -> &'static str {
        self.active_nav
    }

    /// Catalog entry for the active sector tab.
    pub fn active_sector_entry(&self) -> &'static SectorEntry {
        sector::find(self.active_sector).unwrap_or(&SECTORS[0])
    }

    pub fn is_sector_active(&self, id: &str) -> bool {
        self.active_sector == id
    }

    pub fn is_nav_active(&self, anchor: &str) -> bool {
        self.active_nav == anchor.strip_prefix('#').unwrap_or(anchor)
    }

    /// Switch the sector tab, returning the newly shown entry.
    pub fn select_sector(&mut self, id: &str) -> Result<&'static SectorEntry> {
        let entry = sector::find(id).ok_or_else(|| ContentError::UnknownSector(id.to_string()))?;
        self.active_sector = entry.id;
        Ok(entry)
    }

    /// Recompute the navigation highlight from measured section offsets.
    ///
    /// `tops` is indexed like `NAV_LINKS`; missing entries count as absent
    /// sections. Returns true when the highlight changed.
    pub fn apply_scroll(&mut self, tops: &[Option<f64>], scroll_y: f64) -> bool {
        let sections: Vec<SectionPosition<'static>> = NAV_LINKS
            .iter()
            .enumerate()
            .map(|(i, link)| SectionPosition {
                anchor: link.anchor,
                top: tops.get(i).copied().flatten(),
            })
            .collect();
        let next = scroll_spy::active_anchor(&sections, scroll_y).unwrap_or(navigation::DEFAULT_ANCHOR);
        if next == self.active_nav {
            return false;
        }
        self.active_nav = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPS: [Option<f64>; 5] = [Some(0.0), Some(800.0), Some(1900.0), Some(2600.0), Some(3400.0)];

    #[test]
    fn test_initial_state() {
        let selection = PageSelection::new();
        assert_eq!(selection.active_sector(), "trades");
        assert_eq!(selection.active_nav(), "welcome");
        assert_eq!(selection.active_sector_entry().title, "Skilled Trades & Services");
    }

    #[test]
    fn test_select_every_sector() {
        let mut selection = PageSelection::new();
        for expected in SECTORS.iter() {
            let shown = selection.select_sector(expected.id).unwrap();
            assert_eq!(shown, expected);
            let entry = selection.active_sector_entry();
            assert_eq!(entry.title, expected.title);
            assert_eq!(entry.description, expected.description);
            assert_eq!(entry.roles, expected.roles);
            assert_eq!(entry.shortages, expected.shortages);
        }
    }

    #[test]
    fn test_exactly_one_sector_active() {
        let mut selection = PageSelection::new();
        for chosen in SECTORS.iter() {
            selection.select_sector(chosen.id).unwrap();
            let active: Vec<&str> = SECTORS
                .iter()
                .filter(|s| selection.is_sector_active(s.id))
                .map(|s| s.id)
                .collect();
            assert_eq!(active, vec![chosen.id]);
        }
    }

    #[test]
    fn test_unknown_sector_leaves_state() {
        let mut selection = PageSelection::new();
        selection.select_sector("retail").unwrap();
        let err = selection.select_sector("mining").unwrap_err();
        assert!(matches!(err, ContentError::UnknownSector(ref id) if id == "mining"));
        assert_eq!(selection.active_sector(), "retail");
    }

    #[test]
    fn test_is_nav_active_accepts_href() {
        let selection = PageSelection::new();
        assert!(selection.is_nav_active("#welcome"));
        assert!(selection.is_nav_active("welcome"));
        assert!(!selection.is_nav_active("#toolkit"));
    }

    #[test]
    fn test_apply_scroll() {
        let mut selection = PageSelection::new();
        assert!(!selection.apply_scroll(&TOPS, 0.0));
        assert_eq!(selection.active_nav(), "welcome");

        assert!(selection.apply_scroll(&TOPS, 700.0));
        assert_eq!(selection.active_nav(), "opportunities");

        assert!(!selection.apply_scroll(&TOPS, 750.0));

        assert!(selection.apply_scroll(&TOPS, 3300.0));
        assert_eq!(selection.active_nav(), "action-plan");
    }

    #[test]
    fn test_apply_scroll_without_measurements() {
        let mut selection = PageSelection::new();
        assert!(selection.apply_scroll(&TOPS, 2700.0));
        assert_eq!(selection.active_nav(), "culture");
        assert!(selection.apply_scroll(&[], 5000.0));
        assert_eq!(selection.active_nav(), "welcome");
    }

    #[test]
    fn test_scroll_does_not_touch_sector() {
        let mut selection = PageSelection::new();
        selection.select_sector("agri").unwrap();
        selection.apply_scroll(&TOPS, 2000.0);
        assert_eq!(selection.active_sector(), "agri");
        assert_eq!(selection.active_nav(), "toolkit");
    }
}
