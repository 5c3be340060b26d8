//! Invercargill Job Finder
//!
//! A single page of career guidance for newcomers: an industry bar chart,
//! in-demand sector tabs, a job-search toolkit, workplace tips and an
//! action plan.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/industries.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse the CSV (falling back to the built-in dataset),
//!    load the D3 chart scripts and render the industry chart.
//! 4. A passive scroll listener keeps the header highlight in sync with the
//!    section in view; clicks on sector tabs swap the detail panel.

mod sections;

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use ijf_content::industry::{chart_config, chart_data_json, IndustryStat};
use ijf_ui::components::{ErrorDisplay, NavBar, SiteFooter};
use ijf_ui::js_bridge;
use ijf_ui::scroll::{self, ScrollListener};
use ijf_ui::state::AppState;
use ijf_ui::theme::{FONT_STACK, INK, PAPER};
use sections::{
    ActionPlanSection, CultureSection, OpportunitiesSection, ToolkitSection, WelcomeSection,
};

// Embed the industry dataset (label,businesses,color) at compile time.
const INDUSTRIES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/industries.csv"));

/// DOM id for the D3 chart container div.
pub(crate) const CHART_CONTAINER_ID: &str = "industry-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("job-finder-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let scroll_listener = use_hook(|| Rc::new(RefCell::new(None::<ScrollListener>)));

    // ─── Effect 1: Load the industry dataset once on mount ───
    use_effect(move || {
        let (stats, err) = IndustryStat::load_or_builtin(INDUSTRIES_CSV);
        if let Some(e) = err {
            state.error_msg.set(Some(format!(
                "Industry figures could not be read, showing built-in figures instead ({})",
                e
            )));
        }
        log::info!("Loaded {} industries", stats.len());
        state.industries.set(stats);

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
    });

    // ─── Effect 2: Render the chart whenever the dataset changes ───
    use_effect(move || {
        let stats = state.industries.read().clone();
        if stats.is_empty() {
            return;
        }
        let data_json = chart_data_json(&stats);
        let config_json = chart_config().to_string();
        js_bridge::render_bar_chart(CHART_CONTAINER_ID, &data_json, &config_json);
    });

    // ─── Effect 3: Scroll-spy, computed once now and on every scroll ───
    use_effect({
        let scroll_listener = scroll_listener.clone();
        move || {
            let selection = state.selection;
            scroll::refresh_scroll_spy(selection);
            *scroll_listener.borrow_mut() =
                ScrollListener::attach(move || scroll::refresh_scroll_spy(selection));
        }
    });

    use_drop(move || {
        scroll_listener.borrow_mut().take();
        js_bridge::destroy_chart(CHART_CONTAINER_ID);
    });

    // ─── Render ───
    rsx! {
        div {
            style: "font-family: {FONT_STACK}; background: {PAPER}; color: {INK};",
            NavBar {}
            ErrorDisplay {}
            main {
                WelcomeSection {}
                OpportunitiesSection {}
                ToolkitSection {}
                CultureSection {}
                ActionPlanSection {}
            }
            SiteFooter {}
        }
    }
}
