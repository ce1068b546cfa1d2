#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod landing;
pub mod style;
pub mod tree;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        // logger from an earlier hydrate is still installed
        log::debug!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(App);
}
