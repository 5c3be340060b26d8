//! Page palette.

pub const ACCENT: &str = "#81B29A";
pub const CORAL: &str = "#E07A5F";
pub const INK: &str = "#3D405B";
pub const CREAM: &str = "#F4F1DE";
pub const PAPER: &str = "#FDFBF8";

pub const FONT_STACK: &str = "system-ui, -apple-system, sans-serif";

/// Inline style for a white content card.
pub fn card_style(padding_px: u32) -> String {
    format!(
        "background: #fff; padding: {}px; border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",
        padding_px
    )
}

/// Background for alternating page sections.
pub fn section_background(shaded: bool) -> &'static str {
    if shaded {
        CREAM
    } else {
        PAPER
    }
}
