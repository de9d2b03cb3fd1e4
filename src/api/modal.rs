use crate::views::{HtmlFragment, ModalDialog};

pub async fn show() -> HtmlFragment<ModalDialog> {
    HtmlFragment(ModalDialog)
}
