#![cfg(target_arch = "wasm32")]

use glint_page_wasm::GlintPage;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn js(json: &str) -> JsValue {
    js_sys::JSON::parse(json).expect("valid JSON")
}

#[wasm_bindgen_test]
fn construct_with_default_config() {
    assert!(GlintPage::new(JsValue::UNDEFINED).is_ok());
}

#[wasm_bindgen_test]
fn modal_locks_scroll_through_the_json_api() {
    let mut page = GlintPage::new(JsValue::UNDEFINED).unwrap();
    page.step(
        0.016,
        js(r#"{ "ui": [ { "open_modal": { "kind": "trial_signup" } } ] }"#),
    )
    .unwrap();
    assert!(page.is_scroll_locked());

    page.step(
        0.016,
        js(r#"{ "ui": [ { "close_modal": { "via": "escape" } } ] }"#),
    )
    .unwrap();
    assert!(!page.is_scroll_locked());
}

#[wasm_bindgen_test]
fn open_chat_without_widget_reports_unavailable() {
    let mut page = GlintPage::new(JsValue::UNDEFINED).unwrap();
    page.set_chat_global(Some("$definitely.not.loaded".to_string()));
    let frame = page
        .step(0.016, js(r#"{ "ui": [ "open_chat" ] }"#))
        .unwrap();
    let text = js_sys::JSON::stringify(&frame)
        .unwrap()
        .as_string()
        .unwrap();
    assert!(text.contains("chat_unavailable"), "frame was: {text}");
}

#[wasm_bindgen_test]
fn counter_round_trips_through_page() {
    let mut page = GlintPage::new(JsValue::UNDEFINED).unwrap();
    let id = page
        .add_counter(
            js(r#"{ "target": 300.0, "suffix": "+" }"#),
            "about.stats.clients".to_string(),
        )
        .unwrap();
    let enter = format!(
        r#"{{ "motion": {{ "observations": [ {{ "target": {{ "counter": {id} }}, "entered": true }} ] }} }}"#
    );
    page.step(0.0, js(&enter)).unwrap();
    let mut saw_final = false;
    for _ in 0..60 {
        let frame = page.step(0.016, JsValue::UNDEFINED).unwrap();
        let text = js_sys::JSON::stringify(&frame)
            .unwrap()
            .as_string()
            .unwrap();
        if text.contains("300+") {
            saw_final = true;
        }
    }
    assert!(saw_final, "the final render should appear in a frame change");
}
