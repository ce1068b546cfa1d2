//! Page-level style dictionaries.

use std::sync::LazyLock;

use serde_json::json;

use crate::style::Style;

/// Drifting dotted background.
pub static DOTS: LazyLock<Style> = LazyLock::new(|| {
    Style::from_json(&json!({
        "@keyframes dots": {
            "0%": {"background_position": "0 0"},
            "100%": {"background_position": "40px 40px"}
        },
        "animation": "dots 4s linear infinite alternate-reverse both"
    }))
    .expect("dots style should be well-formed")
});

/// Waving hand next to the greeting.
pub static WAVE: LazyLock<Style> = LazyLock::new(|| {
    Style::from_json(&json!({
        "@keyframes wave": {
            "0%": {"transform": "rotate(45deg)"},
            "100%": {"transform": "rotate(-15deg)"}
        },
        "animation": "wave 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94) infinite alternate-reverse both"
    }))
    .expect("wave style should be well-formed")
});

/// Named section styles, looked up with [`Style::get`].
pub static CSS: LazyLock<Style> = LazyLock::new(|| {
    Style::from_json(&json!({
        "app": {
            "_dark": {"bg": "#15171b"}
        },
        "header": {
            "width": "100%",
            "height": "50px",
            "padding": [
                "0rem 1rem",
                "0rem 1rem",
                "0rem 1rem",
                "0rem 8rem",
                "0rem 8rem"
            ],
            "transition": "all 550ms ease"
        },
        "main": {
            "property": {
                "width": "100%",
                "height": "84vh",
                "padding": "15rem 0rem",
                "align_items": "center",
                "justify_content": "start"
            }
        },
        "footer": {
            "width": ["100%", "90%", "60%", "45%", "45%"],
            "height": "50px",
            "align_items": "center",
            "justify_content": "center"
        }
    }))
    .expect("section styles should be well-formed")
});

/// Style of the section named `name`, empty when there is none.
pub fn section(name: &str) -> Style {
    CSS.get(name).cloned().unwrap_or_default()
}
