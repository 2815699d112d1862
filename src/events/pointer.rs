use crate::editor::EditorCtx;
use crate::interaction::{self, Mode};
use crate::view;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn wire_pointer_handlers(ctx: &EditorCtx) {
    wire_pointermove(ctx);
    wire_pointerup(ctx);
    wire_viewport_pointerdown(ctx);
    wire_wheel_zoom(ctx);
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointermove(ctx: &EditorCtx) {
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mode = *ctx.mode.borrow();
        match mode {
            Mode::Idle => {}
            Mode::Panning { origin, scroll } => {
                let delta = client_pos(&ev) - origin;
                let target = view::pan_scroll(scroll, delta);
                ctx.viewport.set_scroll_left(target.x as i32);
                ctx.viewport.set_scroll_top(target.y as i32);
            }
            Mode::Dragging { id, grab } => {
                let pointer = ctx.pointer_logical(client_pos(&ev));
                let pos = interaction::drag_position(pointer, grab);
                {
                    let mut store = ctx.store.borrow_mut();
                    match store.get_mut(id) {
                        Some(marker) => marker.pos = pos,
                        None => return,
                    }
                }
                ctx.sync_marker_node(id);
            }
            Mode::Resizing {
                id,
                dir,
                start,
                origin,
            } => {
                // raw screen delta divided by scale, applied to the
                // starting rect on every move
                let delta = (client_pos(&ev) - origin) / ctx.scale();
                let kind = match ctx.store.borrow().get(id) {
                    Some(marker) => marker.kind,
                    None => return,
                };
                let rect = interaction::resize(kind, start, dir, delta);
                {
                    let mut store = ctx.store.borrow_mut();
                    if let Some(marker) = store.get_mut(id) {
                        marker.pos = rect.pos;
                        marker.size = rect.size;
                    }
                }
                ctx.sync_marker_node(id);
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(ctx: &EditorCtx) {
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        *ctx.mode.borrow_mut() = Mode::Idle;
        _ = ctx.viewport.class_list().remove_1("panning");
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Pointerdown on empty background starts a pan and clears the selection.
/// Marker/handle listeners stop propagation, so whichever mode is entered
/// first owns the pointer session.
fn wire_viewport_pointerdown(ctx: &EditorCtx) {
    let ctx = ctx.clone();
    let viewport = ctx.viewport.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let on_background = ev
            .target()
            .map(|t| {
                let t: JsValue = t.into();
                let vp: &JsValue = ctx.viewport.as_ref();
                let cv: &JsValue = ctx.canvas.as_ref();
                &t == vp || &t == cv
            })
            .unwrap_or(false);
        if !on_background {
            return;
        }
        *ctx.mode.borrow_mut() = Mode::Panning {
            origin: client_pos(&ev),
            scroll: Vec2::new(
                ctx.viewport.scroll_left() as f32,
                ctx.viewport.scroll_top() as f32,
            ),
        };
        _ = ctx.viewport.class_list().add_1("panning");
        ctx.select(None);
        log::info!("[pointer] begin pan");
    }) as Box<dyn FnMut(_)>);
    _ = viewport.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Modifier-qualified wheel zoom. Registered non-passive so the browser's
/// native scroll can be suppressed.
fn wire_wheel_zoom(ctx: &EditorCtx) {
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if !ev.ctrl_key() {
            return;
        }
        ev.prevent_default();
        let next = view::wheel_zoom(ctx.scale(), ev.delta_y());
        ctx.set_zoom(next);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
