//! The five page sections. Each `section` id doubles as the scroll-spy
//! anchor from `NAV_LINKS`.

use dioxus::prelude::*;
use ijf_content::industry::CHART_TITLE;
use ijf_content::resources::{
    ACTION_PLAN, EMPLOYEE_RIGHTS, OPPORTUNITIES_INTRO, RIGHTS_INTRO, TOOLKIT, WELCOME_HIGHLIGHTS,
    WELCOME_INTRO, WORKPLACE_CULTURE,
};
use ijf_ui::components::{
    ChartContainer, ChartHeader, ResourceCard, SectionHeader, SectorDetail, SectorTabs, TipList,
};
use ijf_ui::theme::{card_style, section_background};

use crate::CHART_CONTAINER_ID;

const CONTAINER_STYLE: &str = "max-width: 1200px; margin: 0 auto; padding: 0 24px;";

#[derive(Props, Clone, PartialEq)]
struct PageSectionProps {
    id: &'static str,
    #[props(default = false)]
    shaded: bool,
    children: Element,
}

/// A full-width `section` with the page's vertical rhythm.
#[component]
fn PageSection(props: PageSectionProps) -> Element {
    let background = section_background(props.shaded);
    rsx! {
        section {
            id: "{props.id}",
            style: "padding: 80px 0; background: {background};",
            div {
                style: CONTAINER_STYLE,
                {props.children}
            }
        }
    }
}

#[component]
pub fn WelcomeSection() -> Element {
    rsx! {
        PageSection {
            id: "welcome",
            shaded: true,
            div {
                style: "text-align: center;",
                h1 {
                    style: "font-size: 48px; font-weight: bold; margin: 0 0 16px 0;",
                    "Welcome to Invercargill!"
                }
                p {
                    style: "font-size: 20px; color: #374151; max-width: 768px; margin: 0 auto 32px auto;",
                    "{WELCOME_INTRO}"
                }
                div {
                    style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; color: #4B5563;",
                    for highlight in WELCOME_HIGHLIGHTS.iter() {
                        span {
                            key: "{highlight.label}",
                            style: "display: flex; align-items: center;",
                            span { style: "font-size: 24px; margin-right: 8px;", "{highlight.icon}" }
                            "{highlight.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn OpportunitiesSection() -> Element {
    let card = card_style(32);

    rsx! {
        PageSection {
            id: "opportunities",
            SectionHeader {
                title: "Where Are The Jobs?".to_string(),
                intro: OPPORTUNITIES_INTRO.to_string(),
            }
            div {
                style: "{card} margin-bottom: 64px;",
                ChartHeader {
                    title: CHART_TITLE.to_string(),
                    caption: "This chart shows where business activity is highest in the city.".to_string(),
                }
                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    height: 400,
                }
            }
            div {
                style: "{card}",
                ChartHeader {
                    title: "Explore In-Demand Job Sectors".to_string(),
                    caption: "Click on a sector below to see specific in-demand roles, skills shortages you can help fill, and direct links to find current job openings.".to_string(),
                }
                SectorTabs {}
                SectorDetail {}
            }
        }
    }
}

#[component]
pub fn ToolkitSection() -> Element {
    rsx! {
        PageSection {
            id: "toolkit",
            shaded: true,
            SectionHeader {
                title: "Your Job Search Toolkit".to_string(),
                intro: "Here are the essential resources you'll need to find and apply for jobs effectively in Invercargill.".to_string(),
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 32px;",
                for group in TOOLKIT.iter() {
                    ResourceCard { key: "{group.title}", group: *group }
                }
            }
        }
    }
}

#[component]
pub fn CultureSection() -> Element {
    let card = card_style(32);
    rsx! {
        PageSection {
            id: "culture",
            SectionHeader {
                title: "Understanding the Kiwi Workplace".to_string(),
                intro: "Adapting to the local work culture is just as important as your skills. Here's what you need to know.".to_string(),
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 32px;",
                div {
                    style: "{card}",
                    h3 { style: "font-size: 24px; font-weight: bold; margin: 0 0 24px 0;", "Workplace Culture & Etiquette" }
                    TipList { tips: &WORKPLACE_CULTURE[..] }
                }
                div {
                    style: "{card}",
                    h3 { style: "font-size: 24px; font-weight: bold; margin: 0 0 24px 0;", "Your Rights as an Employee" }
                    p { style: "color: #4B5563; margin: 0 0 24px 0;", "{RIGHTS_INTRO}" }
                    TipList { tips: &EMPLOYEE_RIGHTS[..] }
                }
            }
        }
    }
}

#[component]
pub fn ActionPlanSection() -> Element {
    let card = card_style(32);
    rsx! {
        PageSection {
            id: "action-plan",
            shaded: true,
            SectionHeader {
                title: "Your Personal Action Plan".to_string(),
                intro: "Success comes from taking consistent action. Use this checklist to guide your first few weeks.".to_string(),
            }
            div {
                style: "{card} max-width: 672px; margin: 0 auto;",
                TipList { tips: &ACTION_PLAN[..], row_background: "#F0FDF4".to_string() }
            }
        }
    }
}
