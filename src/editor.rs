use crate::dom;
use crate::elements;
use crate::interaction::{self, Mode};
use crate::model::{Marker, MarkerId, MarkerKind, MarkerStore};
use crate::panel::PanelRefs;
use crate::view::ViewState;
use fnv::FnvHashMap;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles threaded through every event closure.
#[derive(Clone)]
pub struct EditorCtx {
    pub document: web::Document,
    pub canvas: web::HtmlElement,
    pub zoom_container: web::HtmlElement,
    pub viewport: web::HtmlElement,
    pub store: Rc<RefCell<MarkerStore>>,
    pub nodes: Rc<RefCell<FnvHashMap<MarkerId, web::HtmlElement>>>,
    pub view: Rc<RefCell<ViewState>>,
    pub mode: Rc<RefCell<Mode>>,
    pub panel: PanelRefs,
}

impl EditorCtx {
    #[inline]
    pub fn scale(&self) -> f32 {
        self.view.borrow().scale
    }

    #[inline]
    pub fn canvas_origin(&self) -> Vec2 {
        dom::rect_origin(&self.canvas)
    }

    /// Pointer client position to logical canvas coordinates.
    pub fn pointer_logical(&self, client: Vec2) -> Vec2 {
        interaction::to_logical(client, self.canvas_origin(), self.scale())
    }

    /// Visual center of the viewport in logical coordinates.
    pub fn viewport_center_logical(&self) -> Vec2 {
        let rect = self.viewport.get_bounding_client_rect();
        let center = Vec2::new(
            (rect.left() + rect.width() * 0.5) as f32,
            (rect.top() + rect.height() * 0.5) as f32,
        );
        interaction::to_logical(center, self.canvas_origin(), self.scale())
    }

    /// Creates a marker centered in the viewport, spawns its DOM node, and
    /// selects it.
    pub fn add_marker(&self, kind: MarkerKind) {
        let marker = Marker::new(kind, self.viewport_center_logical());
        let id = self.store.borrow_mut().insert(marker);
        if let Err(e) = elements::spawn_marker_node(self, id) {
            log::error!("[editor] failed to spawn marker node: {e:?}");
            self.store.borrow_mut().remove(id);
            return;
        }
        self.apply_selection();
        log::info!("[editor] added {kind:?} marker {id}");
    }

    pub fn select(&self, id: Option<MarkerId>) {
        self.store.borrow_mut().select(id);
        self.apply_selection();
    }

    /// Re-syncs selection classes and the property panel from the store.
    pub fn apply_selection(&self) {
        let store = self.store.borrow();
        let selected = store.selected();
        for (id, node) in self.nodes.borrow().iter() {
            let cl = node.class_list();
            if Some(*id) == selected {
                _ = cl.add_1("selected");
            } else {
                _ = cl.remove_1("selected");
            }
        }
        match store.selected_marker() {
            Some(marker) => self.panel.show_for(marker),
            None => self.panel.hide(),
        }
    }

    pub fn delete_selected(&self) {
        let removed = {
            let mut store = self.store.borrow_mut();
            let id = store.selected();
            id.and_then(|id| store.remove(id).map(|_| id))
        };
        if let Some(id) = removed {
            if let Some(node) = self.nodes.borrow_mut().remove(&id) {
                node.remove();
            }
            self.apply_selection();
            log::info!("[editor] deleted marker {id}");
        }
    }

    /// Clamps and applies the scale to the element layer.
    pub fn set_zoom(&self, zoom: f32) {
        let scale = {
            let mut view = self.view.borrow_mut();
            view.set_zoom(zoom);
            view.scale
        };
        _ = self
            .zoom_container
            .style()
            .set_property("transform", &format!("scale({scale})"));
        log::debug!("[editor] zoom {scale:.2}");
    }

    /// Pushes a marker's geometry/text attributes to its DOM node.
    pub fn sync_marker_node(&self, id: MarkerId) {
        let store = self.store.borrow();
        if let (Some(marker), Some(node)) = (store.get(id), self.nodes.borrow().get(&id)) {
            elements::sync_style(node, marker);
        }
    }
}
