#![cfg(target_arch = "wasm32")]

use missguided_core::{SEARCH_DELAY_MS, SHORTCUT_DELAY_MS};
use missguided_web::app::App;
use missguided_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};
use yew::Renderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("browser document")
}

/// Each test mounts its own app so earlier renders cannot leak into it.
fn fresh_app_root(id: &str) -> web_sys::Element {
    let doc = document();
    let root = doc.create_element("div").expect("create app root");
    root.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn shortcut(root: &str, key: &str) -> HtmlElement {
    document()
        .query_selector(&format!("#{root} button.shortcut[data-key='{key}']"))
        .expect("query shortcut")
        .expect("shortcut exists")
        .dyn_into::<HtmlElement>()
        .expect("button element")
}

fn text_of(root: &str, selector: &str) -> String {
    document()
        .query_selector(&format!("#{root} {selector}"))
        .expect("query selector")
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn shortcut_click_reveals_wrong_destination() {
    Renderer::<App>::with_root(fresh_app_root("single")).render();
    dom::sleep_ms(10).await.expect("initial render");

    shortcut("single", "tokyo").click();
    dom::sleep_ms(SHORTCUT_DELAY_MS + SEARCH_DELAY_MS + 200)
        .await
        .expect("wait for search");

    let card = text_of("single", ".result-card");
    assert!(card.contains("Paris, France"), "unexpected card: {card}");
    assert_eq!(text_of("single", ".stat-value"), "1");
}

#[wasm_bindgen_test]
async fn rapid_shortcut_clicks_count_as_one_search() {
    Renderer::<App>::with_root(fresh_app_root("rapid")).render();
    dom::sleep_ms(10).await.expect("initial render");

    shortcut("rapid", "tokyo").click();
    shortcut("rapid", "paris").click();
    dom::sleep_ms(SHORTCUT_DELAY_MS + SEARCH_DELAY_MS + 200)
        .await
        .expect("wait for search");

    assert_eq!(text_of("rapid", ".stat-value"), "1");
    let history = text_of("rapid", ".history-list");
    assert!(history.contains("Paris, France"), "unexpected history: {history}");
    assert!(!history.contains("Sydney, Australia"));
}
