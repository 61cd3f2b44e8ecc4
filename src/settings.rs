/// Popup configuration, detected once at startup
use wasm_bindgen::prelude::*;

use crate::i18n::{detect_language, Language};

#[wasm_bindgen(module = "/js/popup.js")]
extern "C" {
    fn getUiLanguage() -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    pub language: Language,
}

impl Settings {
    /// Read the browser environment and settle on a language.
    ///
    /// Nothing is stored; the next popup opening detects again.
    pub fn detect() -> Settings {
        let mut candidates = Vec::new();
        if let Some(ui_language) = getUiLanguage() {
            candidates.push(ui_language);
        }
        if let Some(window) = web_sys::window() {
            let navigator = window.navigator();
            if let Some(language) = navigator.language() {
                candidates.push(language);
            }
            candidates.extend(navigator.languages().iter().filter_map(|v| v.as_string()));
        }

        let time_zone = resolved_time_zone();
        let language = detect_language(&candidates, time_zone.as_deref());
        log::info!("Popup language: {}", language.code());

        Settings { language }
    }
}

fn resolved_time_zone() -> Option<String> {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    js_sys::Reflect::get(&format.resolved_options(), &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|tz| tz.as_string())
}
