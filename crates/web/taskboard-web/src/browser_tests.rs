use crate::{BrowserHost, chart, config};
use std::time::Duration;
use taskboard_core::{DonutChart, Host, TaskStats};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_storage_round_trip() {
    let host = BrowserHost;
    host.storage_set("taskboard-test", "value").unwrap();
    assert_eq!(host.storage_get("taskboard-test").as_deref(), Some("value"));

    host.storage_remove("taskboard-test");
    assert_eq!(host.storage_get("taskboard-test"), None);
}

#[wasm_bindgen_test]
async fn test_sleep_completes() {
    BrowserHost.sleep(Duration::from_millis(5)).await;
}

#[wasm_bindgen_test]
fn test_meta_tag_overrides_api_base_url() {
    let document = gloo_utils::document();
    let meta = document.create_element("meta").unwrap();
    meta.set_attribute("name", config::API_BASE_URL_META).unwrap();
    meta.set_attribute("content", " https://tasks.example.com/api ")
        .unwrap();
    document.head().unwrap().append_child(&meta).unwrap();

    let loaded = config::load();
    meta.remove();

    assert_eq!(loaded.api_base_url, "https://tasks.example.com/api");
    assert_eq!(loaded.token_key, "token");
}

#[wasm_bindgen_test]
fn test_chart_paints_pending_segment() {
    let canvas: HtmlCanvasElement = gloo_utils::document()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(200);
    canvas.set_height(200);

    let stats = TaskStats {
        pending: 1,
        in_progress: 0,
        completed: 0,
        total: 1,
    };
    chart::draw(&canvas, &DonutChart::from_stats(&stats));

    let ctx: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    // Left side of the ring, well inside the pending segment
    let pixel = ctx.get_image_data(30.0, 100.0, 1.0, 1.0).unwrap().data();
    assert_eq!(&pixel[..3], &[0xf5, 0x9e, 0x0b]);
}
