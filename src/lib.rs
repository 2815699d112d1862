#![cfg(target_arch = "wasm32")]
use crate::editor::EditorCtx;
use crate::model::{MarkerKind, MarkerStore};
use crate::view::ViewState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod editor;
mod elements;
mod events;
mod export;
mod icons;
mod interaction;
mod model;
mod panel;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stageplot-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ctx = EditorCtx {
        canvas: dom::require(&document, "stage-canvas")?,
        zoom_container: dom::require(&document, "zoom-container")?,
        viewport: dom::require(&document, "viewport")?,
        store: Rc::new(RefCell::new(MarkerStore::default())),
        nodes: Rc::new(RefCell::new(Default::default())),
        view: Rc::new(RefCell::new(ViewState::default())),
        mode: Rc::new(RefCell::new(Default::default())),
        panel: panel::PanelRefs::from_document(&document)?,
        document,
    };

    wire_toolbar(&ctx);
    panel::wire_inputs(&ctx);
    events::wire_pointer_handlers(&ctx);
    events::wire_global_keydown(&ctx);
    export::wire_download_button(&ctx);

    center_viewport(&ctx.viewport);
    Ok(())
}

fn wire_toolbar(ctx: &EditorCtx) {
    let adders = [
        ("add-performer", MarkerKind::Performer),
        ("add-mic", MarkerKind::Microphone),
        ("add-box", MarkerKind::LabeledBox),
        ("add-text", MarkerKind::FreeText),
    ];
    for (id, kind) in adders {
        let ctx2 = ctx.clone();
        dom::add_click_listener(&ctx.document, id, move || ctx2.add_marker(kind));
    }

    let ctx2 = ctx.clone();
    dom::add_click_listener(&ctx.document, "zoom-in", move || {
        let next = ctx2.scale() + constants::ZOOM_STEP;
        ctx2.set_zoom(next);
    });
    let ctx2 = ctx.clone();
    dom::add_click_listener(&ctx.document, "zoom-out", move || {
        let next = ctx2.scale() - constants::ZOOM_STEP;
        ctx2.set_zoom(next);
    });
    let ctx2 = ctx.clone();
    dom::add_click_listener(&ctx.document, "zoom-reset", move || ctx2.set_zoom(1.0));

    let ctx2 = ctx.clone();
    dom::add_click_listener(&ctx.document, "delete-btn", move || ctx2.delete_selected());
}

// Start scrolled to the middle of the oversized stage.
fn center_viewport(viewport: &web::HtmlElement) {
    viewport.set_scroll_left((viewport.scroll_width() - viewport.client_width()) / 2);
    viewport.set_scroll_top((viewport.scroll_height() - viewport.client_height()) / 2);
}
