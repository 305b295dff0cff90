use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn canvas_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_image_src(document: &web::Document, element_id: &str, src: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(img) = el.dyn_ref::<web::HtmlImageElement>() {
            img.set_src(src);
        }
    }
}

#[inline]
pub fn show_block(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.set_attribute("style", "display:block");
    }
}

/// Navigate the page; used for the post-config redirect and the PDF download.
pub fn navigate_to(url: &str) {
    if let Some(w) = web::window() {
        let _ = w.location().set_href(url);
    }
}
