//! Pointer wiring for the range-map canvas.

use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::dom;
use crate::frame::FrameDriver;
use crate::net;
use crate::notify::{self, Progress, Severity};

/// Canvas-relative pointer position scaled from CSS pixels to backing pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Wire pointermove/pointerleave/click on the canvas to the scene.
pub fn wire_canvas_pointers(
    driver: &Rc<FrameDriver>,
    canvas: &web::HtmlCanvasElement,
    document: &web::Document,
    progress: Progress,
) {
    // pointermove
    {
        let driver_m = driver.clone();
        let canvas_m = canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = pointer_canvas_px(&ev, &canvas_m);
            if driver_m.scene.borrow_mut().pointer_moved(pos) {
                driver_m.wake();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerleave
    {
        let driver_l = driver.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web::PointerEvent| {
            if driver_l.scene.borrow_mut().pointer_left() {
                driver_l.wake();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // click -> first-match point dispatch + detail fetch
    {
        let driver_c = driver.clone();
        let canvas_c = canvas.clone();
        let document_c = document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let pos = pointer_canvas_px(&ev, &canvas_c);
            let now = driver_c.now_ms();
            let hit = driver_c.scene.borrow_mut().click(pos, now);
            let Some(point_id) = hit else {
                return;
            };
            driver_c.wake();
            notify::toast(
                &document_c,
                &format!("Loading analysis for point {point_id}..."),
                Severity::Info,
            );
            progress.show();
            let document_f = document_c.clone();
            let progress_f = progress.clone();
            spawn_local(async move {
                match net::fetch_point_detail(point_id).await {
                    Ok(detail) => {
                        show_point_detail(&document_f, &detail);
                        notify::toast(
                            &document_f,
                            "Analysis loaded successfully!",
                            Severity::Success,
                        );
                    }
                    Err(e) => {
                        log::error!("point detail fetch failed: {e:?}");
                        notify::toast(
                            &document_f,
                            "Failed to load analysis. Please try again.",
                            Severity::Danger,
                        );
                    }
                }
                progress_f.hide();
            });
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Populate and reveal the detail panel.
fn show_point_detail(document: &web::Document, detail: &app_core::PointDetail) {
    dom::set_text(document, "pointTitle", &detail.title);
    dom::set_text(document, "pointDescription", &detail.description);
    dom::set_image_src(document, "chartImage", &detail.chart_url);
    dom::show_block(document, "pointData");
}
