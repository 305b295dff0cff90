//! Config-form submission and the PDF export button.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::dom;
use crate::endpoints::{INDEX_URL, PDF_URL};
use crate::net;
use crate::notify::{self, Progress, Severity};

const REDIRECT_DELAY_MS: u32 = 2_000;

/// Wire `#analysisForm` to post its fields and redirect home on success.
/// Pages without the form are left untouched.
pub fn wire_config_form(document: &web::Document, progress: Progress) {
    let Some(form) = document
        .get_element_by_id("analysisForm")
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };

    let document_s = document.clone();
    let form_s = form.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        notify::toast(
            &document_s,
            "Running Analysis... Please wait.",
            Severity::Primary,
        );
        progress.show();

        let Ok(fields) = web::FormData::new_with_form(&form_s) else {
            notify::toast(
                &document_s,
                "An error occurred while running the analysis.",
                Severity::Danger,
            );
            progress.hide();
            return;
        };
        let document_f = document_s.clone();
        let progress_f = progress.clone();
        spawn_local(async move {
            match net::post_config(fields).await {
                Ok(true) => {
                    notify::toast(
                        &document_f,
                        "Analysis Complete! Redirecting...",
                        Severity::Success,
                    );
                    Timeout::new(REDIRECT_DELAY_MS, || dom::navigate_to(INDEX_URL)).forget();
                }
                Ok(false) => {
                    notify::toast(
                        &document_f,
                        "Analysis failed. Please check your inputs.",
                        Severity::Danger,
                    );
                }
                Err(e) => {
                    log::error!("config submit failed: {e:?}");
                    notify::toast(
                        &document_f,
                        "An error occurred while running the analysis.",
                        Severity::Danger,
                    );
                }
            }
            progress_f.hide();
        });
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Wire `#downloadPdfBtn`: probe the export endpoint, then navigate to it so
/// the browser picks the file up as a download.
pub fn wire_pdf_button(document: &web::Document, progress: Progress) {
    let document_b = document.clone();
    dom::add_click_listener(document, "downloadPdfBtn", move || {
        notify::toast(
            &document_b,
            "PDF download started. Please wait...",
            Severity::Primary,
        );
        progress.show();
        let document_f = document_b.clone();
        let progress_f = progress.clone();
        spawn_local(async move {
            match net::probe_pdf().await {
                Ok(true) => {
                    dom::navigate_to(PDF_URL);
                    notify::toast(&document_f, "PDF successfully downloaded!", Severity::Success);
                }
                Ok(false) => {
                    notify::toast(
                        &document_f,
                        "Failed to download PDF. Please try again.",
                        Severity::Danger,
                    );
                }
                Err(e) => {
                    log::error!("pdf probe failed: {e:?}");
                    notify::toast(
                        &document_f,
                        "An error occurred while downloading the PDF.",
                        Severity::Danger,
                    );
                }
            }
            progress_f.hide();
        });
    });
}
