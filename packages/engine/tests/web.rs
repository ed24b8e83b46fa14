#![cfg(target_arch = "wasm32")]

use kinetic_engine::PhysicsEngine;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const BOX: &str = r#"{ "id": "box", "x": 0, "y": 0, "width": 10, "height": 10,
    "components": [{ "type": "rigidbody", "enabled": true }] }"#;

#[wasm_bindgen_test]
fn step_returns_id_and_position_objects() {
    let mut engine = PhysicsEngine::new();
    assert!(engine.add_body(BOX, None).unwrap());
    assert_eq!(engine.body_count(), 1);

    let frame = engine.step().unwrap();
    assert_eq!(frame.length(), 1);
    let entry = frame.get(0);
    let id = js_sys::Reflect::get(&entry, &JsValue::from_str("id")).unwrap();
    assert_eq!(id.as_string().as_deref(), Some("box"));
}

#[wasm_bindgen_test]
fn duplicate_and_malformed_input_are_errors() {
    let mut engine = PhysicsEngine::new();
    engine.add_body(BOX, None).unwrap();
    assert!(engine.add_body(BOX, None).is_err());
    assert!(engine.add_body("{ not json", None).is_err());

    engine.reset();
    assert_eq!(engine.body_count(), 0);
    assert_eq!(engine.step_json().unwrap(), "[]");
}

#[wasm_bindgen_test]
fn bounds_can_be_moved_and_cleared() {
    let mut engine = PhysicsEngine::new();
    engine.set_bounds(-1000.0, -1000.0);
    engine.add_body(BOX, None).unwrap();
    engine.step().unwrap();

    engine.clear_bounds();
    engine.reset();
    assert_eq!(engine.body_count(), 0);
}
