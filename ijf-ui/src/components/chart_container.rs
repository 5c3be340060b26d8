//! Fixed-height container the D3 bar chart renders into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Chart height in pixels
    #[props(default = 400)]
    pub height: u32,
    /// Maximum chart width in pixels
    #[props(default = 800)]
    pub max_width: u32,
}

/// A centered container div for the D3.js chart. D3 draws into the inner
/// div once it has loaded, so there is no placeholder to clear.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "position: relative; width: 100%; max-width: {}px; margin: 0 auto; height: {}px; max-height: 50vh;",
        props.max_width, props.height
    );

    rsx! {
        div {
            class: "chart-container",
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChartContainer;
    use dioxus::prelude::*;

    #[component]
    fn IndustryChart() -> Element {
        rsx! {
            ChartContainer { id: "industry-chart".to_string() }
        }
    }

    #[test]
    fn test_container_has_chart_target() {
        let mut dom = VirtualDom::new(IndustryChart);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"id="industry-chart""#));
        assert!(html.contains("height: 400px"));
        assert!(html.contains("max-width: 800px"));
        assert!(!html.contains("Loading chart"));
    }
}
