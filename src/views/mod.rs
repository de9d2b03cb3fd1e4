//! Server-rendered HTML fragments
//!
//! One view struct per fragment. Every piece of user-supplied text goes
//! through [`escape_html`] before it lands in markup.

mod chat;
mod click_to_load;
mod color;
mod contact;
mod gallery;
mod index;
mod modal;

pub use chat::ChatFragment;
pub use click_to_load::{ClickToLoadRows, ClickToLoadTable};
pub use color::ColorBox;
pub use contact::{ContactDisplay, ContactForm};
pub use gallery::{build_gallery, GalleryEntry};
pub use index::IndexPage;
pub use modal::{ModalButton, ModalDialog};

use axum::response::{Html, IntoResponse, Response};

/// Something that renders to an HTML snippet
pub trait Fragment {
    fn render(&self) -> String;
}

/// Axum responder for any [`Fragment`]
pub struct HtmlFragment<T>(pub T);

impl<T: Fragment> IntoResponse for HtmlFragment<T> {
    fn into_response(self) -> Response {
        Html(self.0.render()).into_response()
    }
}

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html(""), "");
    }
}
