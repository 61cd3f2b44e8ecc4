// Message envelope through real JsValue conversion
// Run with: wasm-pack test --headless --chrome
#![cfg(target_arch = "wasm32")]

use domain_replacer::bookmark::Diff;
use domain_replacer::matcher::MatchMode;
use domain_replacer::message::{Message, ReplaceRequest, ReplaceResponse};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn request_round_trips_through_js() {
    let message = Message::PerformReplace(ReplaceRequest::new("*.old.com", "new.com", MatchMode::Wildcard));

    let js = serde_wasm_bindgen::to_value(&message).unwrap();
    let kind = js_sys::Reflect::get(&js, &JsValue::from_str("type")).unwrap();
    assert_eq!(kind.as_string().as_deref(), Some("performReplace"));

    let back: Message = serde_wasm_bindgen::from_value(js).unwrap();
    assert_eq!(back, message);
}

#[wasm_bindgen_test]
fn success_envelope_is_a_plain_object() {
    let response = ReplaceResponse::success(vec![Diff {
        id: "1".to_string(),
        title: "Old".to_string(),
        old_url: "http://a.com/".to_string(),
        new_url: "http://b.com/".to_string(),
    }]);

    let js = serde_wasm_bindgen::to_value(&response).unwrap();
    let ok = js_sys::Reflect::get(&js, &JsValue::from_str("ok")).unwrap();
    let result = js_sys::Reflect::get(&js, &JsValue::from_str("result")).unwrap();

    assert_eq!(ok.as_bool(), Some(true));
    assert!(js_sys::Array::is_array(&result));
    assert_eq!(js_sys::Array::from(&result).length(), 1);
}

#[wasm_bindgen_test]
async fn unknown_message_type_gets_failure_envelope() {
    let msg = js_sys::Object::new();
    js_sys::Reflect::set(&msg, &JsValue::from_str("type"), &JsValue::from_str("exportDiff")).unwrap();

    let js = domain_replacer::handle_message(msg.into()).await.unwrap();
    let response: ReplaceResponse = serde_wasm_bindgen::from_value(js).unwrap();

    assert!(!response.ok);
    assert!(response.error.unwrap().contains("exportDiff"));
}
