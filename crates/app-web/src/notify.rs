//! Toast notifications and the loading-bar progress indicator.
//!
//! One shared module serving both pages; toasts ride on the Bootstrap styling
//! and `bootstrap.Toast` activation already present on the page.

use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    fn new(element: &web::Element) -> Toast;

    #[wasm_bindgen(method)]
    fn show(this: &Toast);
}

/// Severity levels understood by the toast styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Primary,
    Success,
    Danger,
}

impl Severity {
    /// Bootstrap contextual suffix (`text-bg-*`).
    pub fn css_suffix(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Primary => "primary",
            Severity::Success => "success",
            Severity::Danger => "danger",
        }
    }
}

/// Class list for the outer toast element.
pub fn toast_classes(severity: Severity) -> String {
    format!(
        "toast align-items-center text-bg-{} border-0 mb-2",
        severity.css_suffix()
    )
}

/// Inner markup: message body plus a dismiss button.
pub fn toast_markup(message: &str) -> String {
    format!(
        "<div class=\"d-flex\">\
         <div class=\"toast-body\">{message}</div>\
         <button type=\"button\" class=\"btn-close me-2 m-auto\" \
         data-bs-dismiss=\"toast\" aria-label=\"Close\"></button>\
         </div>"
    )
}

/// Append a dismissible toast to `#toastContainer` and show it.
/// Pages without a toast container simply get no notification.
pub fn toast(document: &web::Document, message: &str, severity: Severity) {
    let Some(container) = document.get_element_by_id("toastContainer") else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_id(&format!("toast-{}", js_sys::Date::now() as u64));
    el.set_class_name(&toast_classes(severity));
    let _ = el.set_attribute("role", "alert");
    let _ = el.set_attribute("aria-live", "assertive");
    let _ = el.set_attribute("aria-atomic", "true");
    el.set_inner_html(&toast_markup(message));
    let _ = container.append_child(&el);
    Toast::new(&el).show();
}

/// Binary show/hide of the page's loading bar.
///
/// The dashboard and config pages name their bar differently (`loadingBar`
/// vs `loadingBarContainer`), so the element id is fixed at the wiring site.
#[derive(Clone)]
pub struct Progress {
    document: web::Document,
    element_id: &'static str,
}

impl Progress {
    pub fn new(document: web::Document, element_id: &'static str) -> Self {
        Self {
            document,
            element_id,
        }
    }

    pub fn show(&self) {
        self.set_visible(true);
    }

    pub fn hide(&self) {
        self.set_visible(false);
    }

    fn set_visible(&self, visible: bool) {
        if let Some(el) = self.document.get_element_by_id(self.element_id) {
            let _ = el.set_attribute(
                "style",
                if visible {
                    "display:block"
                } else {
                    "display:none"
                },
            );
        }
    }
}
