//! Row of sector buttons; exactly one is marked active.

use crate::state::AppState;
use crate::theme::{ACCENT, CREAM};
use dioxus::prelude::*;
use ijf_content::sector::SECTORS;

pub(crate) fn sector_tab_style(active: bool) -> String {
    let (border, background) = if active { (ACCENT, CREAM) } else { ("#E5E7EB", "#fff") };
    format!(
        "text-align: center; padding: 12px; border: 2px solid {}; background: {}; border-radius: 8px; cursor: pointer; transition: all 0.2s;",
        border, background
    )
}

/// Sector selector. Updates `AppState::selection` on click.
#[component]
pub fn SectorTabs() -> Element {
    let state = use_context::<AppState>();
    let selection = (state.selection)();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 16px; margin-bottom: 32px;",
            for sector in SECTORS.iter() {
                button {
                    key: "{sector.id}",
                    class: "sector-card",
                    aria_pressed: if selection.is_sector_active(sector.id) { "true" } else { "false" },
                    style: sector_tab_style(selection.is_sector_active(sector.id)),
                    onclick: move |_| {
                        let mut selection = state.selection;
                        let result = selection.write().select_sector(sector.id);
                        match result {
                            Ok(entry) => log::debug!("Showing sector {}", entry.id),
                            Err(e) => log::warn!("{}", e),
                        }
                    },
                    div { style: "font-size: 24px;", "{sector.icon}" }
                    div {
                        style: "margin-top: 4px; font-size: 14px; font-weight: 600;",
                        "{sector.name}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::sector_tab_style;
    use crate::components::SectorTabs;
    use crate::state::AppState;
    use dioxus::prelude::*;
    use ijf_content::sector::SECTORS;
    use ijf_content::selection::PageSelection;

    #[component]
    fn TabsWithSector(sector: &'static str) -> Element {
        use_context_provider(move || {
            let mut selection = PageSelection::new();
            selection.select_sector(sector).ok();
            AppState::with_selection(selection)
        });
        rsx! { SectorTabs {} }
    }

    fn render_tabs(sector: &'static str) -> String {
        let mut dom = VirtualDom::new_with_props(TabsWithSector, TabsWithSectorProps { sector });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_active_tab_style() {
        let active = sector_tab_style(true);
        assert!(active.contains("#81B29A"));
        assert!(active.contains("background: #F4F1DE"));
        assert!(!sector_tab_style(false).contains("#81B29A"));
    }

    #[test]
    fn test_exactly_one_tab_pressed() {
        for sector in SECTORS.iter() {
            let html = render_tabs(sector.id);
            assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1, "{}", sector.id);
            assert_eq!(html.matches(r#"aria-pressed="false""#).count(), SECTORS.len() - 1);
            assert_eq!(html.matches("sector-card").count(), SECTORS.len());
        }
    }

    #[test]
    fn test_pressed_tab_is_the_selected_one() {
        let html = render_tabs("mfg");
        let pressed = html.find(r#"aria-pressed="true""#).unwrap();
        let after = &html[pressed..];
        let next_tab = after[1..].find("<button").map(|i| i + 1).unwrap_or(after.len());
        assert!(after[..next_tab].contains("Manufacturing"));
    }
}
