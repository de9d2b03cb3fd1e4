use super::{escape_html, Fragment};

/// Display name used for every chat line; connections are anonymous.
pub const ANONYMOUS: &str = "anonymous";

/// Out-of-band swap appended to both chat logs on every peer
#[derive(Debug, Clone)]
pub struct ChatFragment {
    pub text: String,
}

impl Fragment for ChatFragment {
    fn render(&self) -> String {
        let text = escape_html(&self.text);
        format!(
            r#"<div hx-swap-oob="beforeend:#messages"><p><b>{user}</b>: {text}</p></div><div hx-swap-oob="beforeend:#messages2"><p>{text}</p></div>"#,
            user = ANONYMOUS,
            text = text,
        )
    }
}
