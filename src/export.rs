use crate::constants::*;
use crate::dom::{self, js_err};
use crate::editor::EditorCtx;
use crate::icons;
use crate::model::{Marker, MarkerKind};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Wires the download trigger. The button is disabled for the duration of
/// an export as a re-entrancy guard; any failure aborts the whole export
/// and surfaces a single alert.
pub fn wire_download_button(ctx: &EditorCtx) {
    let document = ctx.document.clone();
    let ctx = ctx.clone();
    dom::add_click_listener(&document, "download-btn", move || {
        let ctx = ctx.clone();
        let button: Option<web::HtmlButtonElement> = ctx
            .document
            .get_element_by_id("download-btn")
            .and_then(|el| el.dyn_into().ok());
        if let Some(b) = &button {
            b.set_disabled(true);
        }
        wasm_bindgen_futures::spawn_local(async move {
            log::info!("[export] start ({} markers)", ctx.store.borrow().len());
            match export_png(&ctx).await {
                Ok(()) => log::info!("[export] done"),
                Err(e) => {
                    log::error!("[export] failed: {e:?}");
                    if let Some(w) = web::window() {
                        _ = w.alert_with_message(EXPORT_FAILURE_MESSAGE);
                    }
                }
            }
            if let Some(b) = &button {
                b.set_disabled(false);
            }
        });
    });
}

/// Replays the current marker set onto an offscreen canvas at
/// `EXPORT_SCALE`, background first, markers in creation order, then
/// triggers a timestamped client-side download.
async fn export_png(ctx: &EditorCtx) -> anyhow::Result<()> {
    let width = (STAGE_WIDTH * EXPORT_SCALE) as u32;
    let height = (STAGE_HEIGHT * EXPORT_SCALE) as u32;

    let canvas: web::HtmlCanvasElement = ctx
        .document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow!("canvas element has an unexpected type"))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let c2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("unexpected context type"))?;

    let background = load_image(BACKGROUND_SRC).await?;
    c2d.draw_image_with_html_image_element_and_dw_and_dh(
        &background,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )
    .map_err(js_err)?;

    // snapshot so borrows do not span awaits
    let markers: Vec<Marker> = ctx.store.borrow().iter().map(|(_, m)| m.clone()).collect();
    for marker in &markers {
        draw_marker(&c2d, marker).await?;
    }

    let blob = canvas_to_blob(&canvas).await?;
    trigger_download(&ctx.document, &blob)
}

/// Draws one marker rotated about its own center. Icon rasterization
/// awaits an image decode, so export latency is linear in marker count.
async fn draw_marker(c2d: &web::CanvasRenderingContext2d, marker: &Marker) -> anyhow::Result<()> {
    let s = EXPORT_SCALE;
    let center = marker.center() * s;
    let w = (marker.size.x * s) as f64;
    let h = (marker.size.y * s) as f64;

    c2d.save();
    c2d.translate(center.x as f64, center.y as f64)
        .map_err(js_err)?;
    c2d.rotate((marker.rotation_deg as f64).to_radians())
        .map_err(js_err)?;

    match marker.kind {
        MarkerKind::Performer | MarkerKind::Microphone => {
            let svg = icons::icon_svg(marker.kind, w as f32, h as f32, MARKER_COLOR)
                .ok_or_else(|| anyhow!("no icon for {:?}", marker.kind))?;
            let url = format!(
                "data:image/svg+xml;charset=utf-8,{}",
                js_sys::encode_uri_component(&svg)
            );
            let icon = load_image(&url).await?;
            c2d.draw_image_with_html_image_element_and_dw_and_dh(&icon, -w / 2.0, -h / 2.0, w, h)
                .map_err(js_err)?;
        }
        MarkerKind::LabeledBox => {
            c2d.set_stroke_style_str(MARKER_COLOR);
            c2d.set_line_width((BOX_STROKE_WIDTH * s) as f64);
            c2d.stroke_rect(-w / 2.0, -h / 2.0, w, h);

            c2d.set_fill_style_str(MARKER_COLOR);
            c2d.set_font(&format!("bold {}px sans-serif", marker.font_px * s));
            c2d.set_text_align("center");
            c2d.set_text_baseline("middle");
            let lines: Vec<&str> = marker.text.lines().collect();
            let line_h = (marker.font_px * TEXT_LINE_HEIGHT * s) as f64;
            for (i, line) in lines.iter().enumerate() {
                let y = (i as f64 - (lines.len() as f64 - 1.0) / 2.0) * line_h;
                c2d.fill_text(line, 0.0, y).map_err(js_err)?;
            }
        }
        MarkerKind::FreeText => {
            c2d.set_fill_style_str(MARKER_COLOR);
            c2d.set_font(&format!("bold {}px sans-serif", marker.font_px * s));
            c2d.set_text_align("left");
            c2d.set_text_baseline("top");
            let line_h = (marker.font_px * TEXT_LINE_HEIGHT * s) as f64;
            for (i, line) in marker.text.lines().enumerate() {
                c2d.fill_text(line, -w / 2.0, -h / 2.0 + i as f64 * line_h)
                    .map_err(js_err)?;
            }
        }
    }

    c2d.restore();
    Ok(())
}

async fn load_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(js_err)?;
    img.set_src(src);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow!("image decode failed: {e:?}"))?;
    Ok(img)
}

async fn canvas_to_blob(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::Blob> {
    let canvas = canvas.clone();
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reject_null = reject.clone();
        let cb = Closure::once_into_js(move |blob: JsValue| {
            if blob.is_null() {
                _ = reject_null.call1(
                    &JsValue::UNDEFINED,
                    &JsValue::from_str("toBlob returned null"),
                );
            } else {
                _ = resolve.call1(&JsValue::UNDEFINED, &blob);
            }
        });
        if let Err(e) = canvas.to_blob(cb.unchecked_ref()) {
            _ = reject.call1(&JsValue::UNDEFINED, &e);
        }
    });
    let value = JsFuture::from(promise).await.map_err(js_err)?;
    value
        .dyn_into::<web::Blob>()
        .map_err(|_| anyhow!("toBlob produced a non-blob value"))
}

fn trigger_download(document: &web::Document, blob: &web::Blob) -> anyhow::Result<()> {
    let url = web::Url::create_object_url_with_blob(blob).map_err(js_err)?;
    let anchor: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow!("anchor element has an unexpected type"))?;
    anchor.set_href(&url);
    anchor.set_download(&export_filename());
    anchor.click();
    _ = web::Url::revoke_object_url(&url);
    Ok(())
}

/// `stage-plot-<ISO timestamp>.png`, colons replaced for filesystem safety.
fn export_filename() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    format!("stage-plot-{}.png", iso.replace(':', "."))
}
