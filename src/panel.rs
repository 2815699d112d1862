use crate::dom;
use crate::editor::EditorCtx;
use crate::model::Marker;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Property panel controls, looked up once at init.
#[derive(Clone)]
pub struct PanelRefs {
    root: web::HtmlElement,
    rotate: web::HtmlInputElement,
    font_size: web::HtmlInputElement,
    content: web::HtmlTextAreaElement,
    font_group: web::HtmlElement,
    content_group: web::HtmlElement,
}

impl PanelRefs {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            root: dom::require(document, "properties")?,
            rotate: dom::require(document, "rotate-slider")?,
            font_size: dom::require(document, "font-size-input")?,
            content: dom::require(document, "content-input")?,
            font_group: dom::require(document, "font-size-group")?,
            content_group: dom::require(document, "content-group")?,
        })
    }

    /// Populates the panel for a marker; font/content groups only appear
    /// for text-bearing kinds.
    pub fn show_for(&self, marker: &Marker) {
        _ = self.root.class_list().remove_1("hidden");
        self.rotate
            .set_value(&format!("{}", marker.rotation_deg.round() as u32 % 360));

        let textual = marker.kind.is_textual();
        set_hidden(&self.font_group, !textual);
        set_hidden(&self.content_group, !textual);
        if textual {
            self.font_size.set_value(&format!("{}", marker.font_px));
            self.content.set_value(&marker.text);
        }
    }

    pub fn hide(&self) {
        _ = self.root.class_list().add_1("hidden");
    }
}

/// Panel edits apply immediately, and only to the selected marker; with
/// nothing selected they are silent no-ops.
pub fn wire_inputs(ctx: &EditorCtx) {
    {
        let ctx = ctx.clone();
        let rotate = ctx.panel.rotate.clone();
        let target = rotate.clone();
        add_input_listener(&target, move || {
            let value = rotate.value().parse::<f32>().unwrap_or(0.0);
            let id = {
                let mut store = ctx.store.borrow_mut();
                let id = store.selected();
                if let Some(marker) = store.selected_marker_mut() {
                    marker.set_rotation(value);
                }
                id
            };
            if let Some(id) = id {
                ctx.sync_marker_node(id);
            }
        });
    }
    {
        let ctx = ctx.clone();
        let font_size = ctx.panel.font_size.clone();
        let target = font_size.clone();
        add_input_listener(&target, move || {
            let Ok(value) = font_size.value().parse::<f32>() else {
                return;
            };
            if value <= 0.0 {
                return;
            }
            let id = {
                let mut store = ctx.store.borrow_mut();
                let id = store.selected();
                if let Some(marker) = store.selected_marker_mut().filter(|m| m.kind.is_textual()) {
                    marker.font_px = value;
                }
                id
            };
            if let Some(id) = id {
                ctx.sync_marker_node(id);
            }
        });
    }
    {
        let ctx = ctx.clone();
        let content = ctx.panel.content.clone();
        let target = content.clone();
        add_input_listener(&target, move || {
            let value = content.value();
            let id = {
                let mut store = ctx.store.borrow_mut();
                let id = store.selected();
                if let Some(marker) = store.selected_marker_mut().filter(|m| m.kind.is_textual()) {
                    marker.text = value;
                }
                id
            };
            if let Some(id) = id {
                ctx.sync_marker_node(id);
            }
        });
    }
}

fn add_input_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| handler()) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn set_hidden(el: &web::HtmlElement, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1("hidden");
    } else {
        _ = cl.remove_1("hidden");
    }
}
