#![cfg(target_arch = "wasm32")]
//! Browser entry point for the range-map dashboard.
//!
//! One bundle serves both pages: element lookups that miss are skipped
//! silently, so the config page gets its form wiring and the dashboard gets
//! the canvas visualization from the same `start()`.

use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod endpoints;
mod events;
mod forms;
mod frame;
mod net;
mod notify;
mod render;

use notify::{Progress, Severity};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;

    // Config page
    forms::wire_config_form(
        &document,
        Progress::new(document.clone(), "loadingBarContainer"),
    );

    // Dashboard page
    let progress = Progress::new(document.clone(), "loadingBar");
    forms::wire_pdf_button(&document, progress.clone());
    if let Some(canvas) = dom::canvas_by_id(&document, "halfCircleCanvas") {
        boot_visualization(document, canvas, progress).await;
    }
    Ok(())
}

/// Fetch the dataset and stand up the animated scene. All failures surface
/// as toasts; the page stays interactive and nothing is drawn.
async fn boot_visualization(
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    progress: Progress,
) {
    progress.show();
    notify::toast(&document, "Fetching point data...", Severity::Info);

    let snapshot = match net::fetch_points().await {
        Ok(s) => s,
        Err(e) => {
            log::error!("points fetch failed: {e:?}");
            // Server-reported messages are shown verbatim; transport and
            // decode failures get the generic wording.
            let msg = match e.downcast_ref::<net::ServerError>() {
                Some(server) => server.to_string(),
                None => "Failed to load point data. Please try again.".to_owned(),
            };
            notify::toast(&document, &msg, Severity::Danger);
            progress.hide();
            return;
        }
    };
    notify::toast(&document, "Point data loaded successfully!", Severity::Success);
    progress.hide();

    let viewport =
        app_core::Viewport::for_canvas(canvas.width() as f32, canvas.height() as f32);
    let scene = match app_core::Scene::from_snapshot(&snapshot, viewport) {
        Ok(s) => s,
        Err(e) => {
            log::error!("scene build failed: {e}");
            notify::toast(&document, &e.to_string(), Severity::Danger);
            return;
        }
    };
    let surface = match render::CanvasSurface::new(canvas.clone()) {
        Ok(s) => s,
        Err(e) => {
            log::error!("canvas init failed: {e:?}");
            return;
        }
    };

    let driver = frame::FrameDriver::new(scene, surface);
    events::wire_canvas_pointers(&driver, &canvas, &document, progress);
    driver.wake();
}
