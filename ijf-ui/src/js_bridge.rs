//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js bar chart lives in `assets/js/*.js` and is loaded at runtime.
//! The scripts are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

// Embed the chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('IJF JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload for embedding inside a single-quoted JS string.
pub fn escape_js_string(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// `bar-chart.js` and `tooltip.js` define their entry points with `function`
/// declarations. They are evaluated at global scope once D3 is ready and
/// then promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS].join("\n");

    // Stash the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__ijfChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__ijfChartsReady) { return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__ijfChartScripts);
                    delete window.__ijfChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__ijfChartsReady = true;
                    console.log('IJF charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
    log::info!("Waiting for D3.js before loading chart scripts");
}

/// Render the horizontal industry bar chart.
///
/// Polls until D3.js is loaded, the chart scripts are initialized, and the
/// container DOM element exists.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_js_string(data_json);
    let escaped_config = escape_js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__ijfChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[IJF] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = ''; if (window.hideTooltip) window.hideTooltip();",
        container_id
    ));
}

#[cfg(test)]
mod tests {
    use super::escape_js_string;

    #[test]
    fn test_escape_js_string() {
        let json = r#"[{"label":"Retail & hospitality's best","note":"a\"b"}]"#;
        let escaped = escape_js_string(json);
        assert!(escaped.contains(r"hospitality\'s"));
        assert!(escaped.contains(r#"a\\"b"#));
        assert!(!escaped.contains('\n'));
    }

    #[test]
    fn test_escape_strips_newlines() {
        assert_eq!(escape_js_string("[1,\n2]"), "[1,2]");
    }
}
