use super::Fragment;

/// Button that fetches the modal into `body`
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalButton;

/// The dialog returned by `GET /modal`
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalDialog;

impl Fragment for ModalButton {
    fn render(&self) -> String {
        r#"<button hx-get="/modal" hx-target="body" hx-swap="beforeend" class="btn">Open Modal</button>"#
            .to_string()
    }
}

impl Fragment for ModalDialog {
    fn render(&self) -> String {
        r#"<div id="modal" _="on closeModal add .closing then wait for animationend then remove me" class="fixed inset-0 flex items-center justify-center bg-black/50">
    <div class="modal-underlay" _="on click trigger closeModal"></div>
    <div class="modal-content rounded-lg bg-white p-6 shadow-lg">
        <h1 class="text-lg font-semibold">Modal Dialog</h1>
        <p>This modal was loaded from the server.</p>
        <button class="btn" _="on click trigger closeModal">Close</button>
    </div>
</div>"#
            .to_string()
    }
}
