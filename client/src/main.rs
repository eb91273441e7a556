mod app;
mod config;
mod dom;
mod events;
mod loader;
mod mount;

use std::any::Any;
use std::cell::RefCell;

use leptos::mount::mount_to;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

thread_local! {
    // Dropping the handle unmounts the app.
    static APP: RefCell<Option<Box<dyn Any>>> = const { RefCell::new(None) };
}

/// `#app` when the page provides it, otherwise `<body>`.
fn mount_target() -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        .or_else(|| document.body())
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(target) = mount_target() else {
        return;
    };
    let handle = mount_to(target, app::App);
    APP.with(|slot| *slot.borrow_mut() = Some(Box::new(handle)));
}
