/// Article Clipper - Chrome Extension that saves the current page to a reading list
/// Built with Rust + WASM + Yew

pub mod bridge;
pub mod config;
pub mod error;
pub mod flow;
pub mod platform;
pub mod poll;
pub mod status;
pub mod tab_data;
pub mod ui;

use wasm_bindgen::prelude::*;

pub use config::{Environment, PopupConfig};
pub use error::FlowError;
pub use flow::{FlowOutcome, SaveFlow};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
