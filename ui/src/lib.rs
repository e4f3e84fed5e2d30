#[cfg(feature = "web")]
use leptos::mount::mount_to_body;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

pub mod app;
pub mod components;
pub mod data;
pub mod page;
pub mod pages;

pub use crate::app::App;
