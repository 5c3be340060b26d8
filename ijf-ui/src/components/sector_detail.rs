//! Detail panel for the active sector: roles, shortages and job-board links.

use crate::components::ExternalLink;
use crate::state::AppState;
use crate::theme::{ACCENT, CORAL, INK};
use dioxus::prelude::*;

#[component]
pub fn SectorDetail() -> Element {
    let state = use_context::<AppState>();
    let content = (state.selection)().active_sector_entry();

    let button_style = |background: &str| {
        format!(
            "display: inline-block; text-align: center; padding: 12px 24px; font-weight: bold; border-radius: 8px; color: #fff; background: {}; text-decoration: none;",
            background
        )
    };

    rsx! {
        div {
            class: "tab-content active",
            style: "padding: 24px; background: #F9FAFB; border-radius: 8px;",
            h4 {
                style: "font-weight: bold; font-size: 24px; color: {INK}; margin: 0 0 12px 0;",
                "{content.title}"
            }
            p {
                style: "color: #4B5563; margin: 0 0 24px 0;",
                "{content.description}"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px;",
                div {
                    h5 { style: "font-weight: bold; margin: 0 0 8px 0;", "In-Demand Roles:" }
                    ul {
                        class: "sector-roles",
                        style: "list-style: disc inside; color: #374151; padding: 0; margin: 0;",
                        for role in content.roles.iter() {
                            li { key: "{role}", "{role}" }
                        }
                    }
                }
                div {
                    style: "background: #FEF9C3; border-left: 4px solid #EAB308; color: #854D0E; padding: 16px; border-radius: 0 8px 8px 0;",
                    h5 { style: "font-weight: bold; margin: 0 0 8px 0;", "Your Opportunity!" }
                    p { style: "font-size: 14px; margin: 0 0 8px 0;", "Employers have a shortage of:" }
                    ul {
                        class: "sector-shortages",
                        style: "list-style: disc inside; font-size: 14px; padding: 0; margin: 0;",
                        for shortage in content.shortages.iter() {
                            li { key: "{shortage}", "{shortage}" }
                        }
                    }
                    p {
                        style: "font-size: 14px; margin: 12px 0 0 0;",
                        "Your hard work and reliability can fill this gap."
                    }
                }
            }
            div {
                style: "margin-top: 24px; display: flex; flex-wrap: wrap; gap: 16px;",
                ExternalLink {
                    href: content.links.seek.to_string(),
                    style: button_style(ACCENT),
                    "Find Jobs on Seek"
                }
                ExternalLink {
                    href: content.links.trade_me.to_string(),
                    style: button_style(CORAL),
                    "Find Jobs on Trade Me"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::components::SectorDetail;
    use crate::state::AppState;
    use dioxus::prelude::*;
    use ijf_content::sector::SECTORS;
    use ijf_content::selection::PageSelection;

    #[component]
    fn DetailForSector(sector: &'static str) -> Element {
        use_context_provider(move || {
            let mut selection = PageSelection::new();
            selection.select_sector(sector).ok();
            AppState::with_selection(selection)
        });
        rsx! { SectorDetail {} }
    }

    fn render_detail(sector: &'static str) -> String {
        let mut dom = VirtualDom::new_with_props(DetailForSector, DetailForSectorProps { sector });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Assert every run of `text` between HTML-escapable characters appears
    /// in `html`, so the check holds whether or not `&` and `'` are escaped.
    fn assert_rendered(html: &str, text: &str) {
        for fragment in text.split(['&', '\'', '"', '<', '>']) {
            let fragment = fragment.trim();
            if !fragment.is_empty() {
                assert!(html.contains(fragment), "missing '{}' in rendered detail", fragment);
            }
        }
    }

    #[test]
    fn test_detail_matches_selected_sector() {
        for sector in SECTORS.iter() {
            let html = render_detail(sector.id);
            assert_rendered(&html, sector.title);
            assert_rendered(&html, sector.description);
            for role in sector.roles {
                assert_rendered(&html, role);
            }
            for shortage in sector.shortages {
                assert_rendered(&html, shortage);
            }
            assert!(html.contains(sector.links.seek));
            assert!(html.contains(sector.links.trade_me));
        }
    }

    #[test]
    fn test_detail_shows_only_selected_sector() {
        for sector in SECTORS.iter() {
            let html = render_detail(sector.id);
            for other in SECTORS.iter().filter(|s| s.id != sector.id) {
                assert!(!html.contains(other.links.seek), "{} leaked into {}", other.id, sector.id);
            }
            assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
            assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 2);
        }
    }

    #[test]
    fn test_roles_rendered_in_order() {
        let html = render_detail("healthcare");
        let positions: Vec<usize> = ["Support Worker", "General Practitioner", "Midwife"]
            .iter()
            .map(|role| html.find(role).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
