use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{e:?}")
}

/// Typed element lookup by id; an absent or mistyped element is an init error.
pub fn require<T: JsCast>(document: &web::Document, element_id: &str) -> anyhow::Result<T> {
    let el = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{element_id}"))?;
    el.dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{element_id} has an unexpected element type"))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Top-left of an element's screen-space bounding box.
#[inline]
pub fn rect_origin(el: &web::Element) -> glam::Vec2 {
    let rect = el.get_bounding_client_rect();
    glam::Vec2::new(rect.left() as f32, rect.top() as f32)
}
