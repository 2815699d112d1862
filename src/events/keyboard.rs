use crate::editor::EditorCtx;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// True when the event originates from a text-entry control, where
/// Delete/Backspace must keep their editing meaning.
#[inline]
fn is_text_entry_target(tag_name: &str) -> bool {
    matches!(tag_name, "INPUT" | "TEXTAREA")
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, ctx: &EditorCtx) {
    let key = ev.key();
    if key != "Delete" && key != "Backspace" {
        return;
    }
    if let Some(target) = ev.target() {
        if let Some(el) = target.dyn_ref::<web::Element>() {
            if is_text_entry_target(&el.tag_name()) {
                return;
            }
        }
    }
    if ctx.store.borrow().selected().is_none() {
        return;
    }
    ev.prevent_default();
    ctx.delete_selected();
}

pub fn wire_global_keydown(ctx: &EditorCtx) {
    let ctx = ctx.clone();
    if let Some(wnd) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &ctx);
        }) as Box<dyn FnMut(_)>);
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
