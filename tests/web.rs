//! Widget lifecycle tests, run in a headless browser via wasm-pack.

#![cfg(target_arch = "wasm32")]

use portfolio_visuals_backend::{GradientCycler, ParticleField};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn host_element() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element.dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn particle_field_mounts_a_canvas_into_the_container() {
    let host = host_element();
    let mut field = ParticleField::new(&host, Some(10), None);
    assert!(host.query_selector("canvas").unwrap().is_some());
    field.stop();
}

#[wasm_bindgen_test]
fn particle_field_teardown_is_idempotent() {
    let host = host_element();
    let mut field = ParticleField::new(&host, Some(10), None);
    field.stop();
    field.stop();
    assert!(host.query_selector("canvas").unwrap().is_none());
}

#[wasm_bindgen_test]
fn negative_particle_count_mounts_an_empty_field() {
    let host = host_element();
    let mut field = ParticleField::new(&host, Some(-50), None);
    assert!(host.query_selector("canvas").unwrap().is_some());
    field.stop();
}

#[wasm_bindgen_test]
fn gradient_cycler_writes_a_background_image() {
    let host = host_element();
    let mut cycler = GradientCycler::new(&host, Some(4000.0));
    let background = host
        .style()
        .get_property_value("background-image")
        .unwrap();
    assert!(background.starts_with("linear-gradient("));
    cycler.stop();
    cycler.stop();
}
