/// Domain Replacer - Chrome Extension that rewrites bookmark hostnames in bulk
/// Built with Rust + WASM + Yew

pub mod bookmark;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod matcher;
pub mod message;
pub mod preview;
pub mod replacer;
pub mod settings;
pub mod store;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::message::{Message, ReplaceResponse};
use crate::store::ChromeBookmarks;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Background worker entry: answer one runtime message with the
/// `{ok, result | error}` envelope. Always resolves.
#[wasm_bindgen]
pub async fn handle_message(msg: JsValue) -> Result<JsValue, JsValue> {
    let response = match serde_wasm_bindgen::from_value::<Message>(msg) {
        Ok(Message::PerformReplace(request)) => {
            ReplaceResponse::from(replacer::perform_replace(&ChromeBookmarks, &request).await)
        }
        Err(e) => ReplaceResponse::failure(&error::ReplaceError::Request(e.to_string())),
    };

    if let Some(error) = &response.error {
        log::error!("Replace failed: {}", error);
    }

    serde_wasm_bindgen::to_value(&response).map_err(|e| JsValue::from_str(&e.to_string()))
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    let settings = settings::Settings::detect();
    yew::Renderer::<ui::popup::App>::with_props(ui::popup::AppProps { settings }).render();
}
