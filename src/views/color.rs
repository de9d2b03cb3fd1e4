use serde_json::json;

use super::{escape_html, Fragment};

/// The color swap box; re-requests `/color` on `trigger`
#[derive(Debug, Clone)]
pub struct ColorBox {
    pub color: String,
    pub trigger: String,
    pub animate: bool,
}

impl Fragment for ColorBox {
    fn render(&self) -> String {
        let vals = json!({
            "current": self.color,
            "trigger": self.trigger,
            "animate": self.animate,
        });
        let transition = if self.animate {
            " transition-colors duration-700"
        } else {
            ""
        };

        format!(
            r#"<div hx-get="/color" hx-vals="{vals}" hx-trigger="{trigger}" hx-swap="outerHTML" class="{color}{transition} h-24 w-24 rounded-lg"></div>"#,
            vals = escape_html(&vals.to_string()),
            trigger = escape_html(&self.trigger),
            color = escape_html(&self.color),
            transition = transition,
        )
    }
}
