use crate::constants::MARKER_COLOR;
use crate::dom;
use crate::editor::EditorCtx;
use crate::icons;
use crate::interaction::{self, Mode, Rect, ResizeDir};
use crate::model::{Marker, MarkerId, MarkerKind};
use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Builds the DOM node for a marker (content child + per-kind resize
/// handles), wires its pointer handlers, and appends it to the canvas.
pub fn spawn_marker_node(ctx: &EditorCtx, id: MarkerId) -> anyhow::Result<()> {
    let marker = ctx
        .store
        .borrow()
        .get(id)
        .cloned()
        .ok_or_else(|| anyhow!("unknown marker {id}"))?;

    let node = create_div(&ctx.document)?;
    node.set_class_name("canvas-element");
    _ = node.style().set_property("position", "absolute");

    let content = create_div(&ctx.document)?;
    match marker.kind {
        MarkerKind::Performer | MarkerKind::Microphone => {
            content.set_class_name("icon-element");
            if let Some(body) = icons::icon_body(marker.kind, MARKER_COLOR) {
                content.set_inner_html(&format!(
                    r#"<svg viewBox="0 0 100 100" width="100%" height="100%">{body}</svg>"#
                ));
            }
        }
        MarkerKind::LabeledBox => {
            content.set_class_name("square-element");
            _ = content.style().set_property("white-space", "pre");
        }
        MarkerKind::FreeText => {
            content.set_class_name("text-element");
            _ = content.style().set_property("white-space", "pre");
        }
    }
    node.append_child(&content).map_err(dom::js_err)?;

    for dir in interaction::handle_dirs(marker.kind) {
        let handle = create_div(&ctx.document)?;
        handle.set_class_name(&format!("resize-handle {}", dir.css_class()));
        wire_handle_pointerdown(ctx, &handle, id, *dir);
        node.append_child(&handle).map_err(dom::js_err)?;
    }

    wire_body_pointerdown(ctx, &node, id);
    sync_style(&node, &marker);

    ctx.canvas.append_child(&node).map_err(dom::js_err)?;
    ctx.nodes.borrow_mut().insert(id, node);
    Ok(())
}

/// Writes position, size, rotation, and text attributes as inline styles.
pub fn sync_style(node: &web::HtmlElement, marker: &Marker) {
    let style = node.style();
    _ = style.set_property("left", &format!("{}px", marker.pos.x));
    _ = style.set_property("top", &format!("{}px", marker.pos.y));
    _ = style.set_property("width", &format!("{}px", marker.size.x));
    _ = style.set_property("height", &format!("{}px", marker.size.y));
    // rotation is about the element's own center (CSS default origin)
    _ = style.set_property("transform", &format!("rotate({}deg)", marker.rotation_deg));

    if !marker.kind.is_textual() {
        return;
    }
    let Some(content) = node.first_element_child() else {
        return;
    };
    if let Some(content) = content.dyn_ref::<web::HtmlElement>() {
        _ = content
            .style()
            .set_property("font-size", &format!("{}px", marker.font_px));
        if content.text_content().as_deref() != Some(marker.text.as_str()) {
            content.set_text_content(Some(&marker.text));
        }
    }
}

fn create_div(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element("div")
        .map_err(dom::js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("div is not an HtmlElement"))
}

/// Pointerdown on the marker body enters `Dragging`, recording the
/// pointer-to-origin offset in logical space.
fn wire_body_pointerdown(ctx: &EditorCtx, node: &web::HtmlElement, id: MarkerId) {
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // a handle's listener runs first and stops propagation, but guard
        // anyway against re-entering from a stale event
        if matches!(*ctx.mode.borrow(), Mode::Resizing { .. }) {
            return;
        }
        let pointer = ctx.pointer_logical(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        let grab = match ctx.store.borrow().get(id) {
            Some(marker) => pointer - marker.pos,
            None => return,
        };
        *ctx.mode.borrow_mut() = Mode::Dragging { id, grab };
        ctx.select(Some(id));
        ev.stop_propagation();
        log::info!("[pointer] begin drag on marker {id}");
    }) as Box<dyn FnMut(_)>);
    _ = node.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Pointerdown on a resize handle enters `Resizing`, recording the handle
/// direction, the starting rect, and the raw screen position.
fn wire_handle_pointerdown(ctx: &EditorCtx, handle: &web::HtmlElement, id: MarkerId, dir: ResizeDir) {
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let start = match ctx.store.borrow().get(id) {
            Some(marker) => Rect {
                pos: marker.pos,
                size: marker.size,
            },
            None => return,
        };
        *ctx.mode.borrow_mut() = Mode::Resizing {
            id,
            dir,
            start,
            origin: Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        };
        ctx.select(Some(id));
        ev.stop_propagation();
        ev.prevent_default();
        log::info!("[pointer] begin resize {dir:?} on marker {id}");
    }) as Box<dyn FnMut(_)>);
    _ = handle.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
