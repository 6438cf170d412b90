//! Document-level event listener that detaches itself on drop.
//!
//! Requires a browser environment.

use wasm_bindgen::{JsCast, closure::Closure};

pub struct DocumentListener {
    document: web_sys::Document,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl DocumentListener {
    /// Attach `handler` for `event` on `document`.
    ///
    /// Returns `None` when there is no document or the browser refuses the
    /// listener.
    pub fn attach(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        document
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { document, event, callback })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
