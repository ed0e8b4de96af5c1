use crate::constants::{INNER_CLASS, OVERLAY_CSS, OVERLAY_ID, OVERLAY_Z_INDEX, STYLE_ID};
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The two overlay nodes: the outer circle that moves and deforms, and the
/// inner node that carries text, images and the counter-rotation.
pub struct OverlayNodes {
    pub outer: web::HtmlElement,
    pub inner: web::HtmlElement,
}

fn create_div(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element("div")
        .map_err(|e| anyhow!("createElement failed: {e:?}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("div is not an HtmlElement"))
}

fn ensure_stylesheet(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document
        .create_element("style")
        .map_err(|e| anyhow!("createElement failed: {e:?}"))?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(OVERLAY_CSS));
    let head = document.head().ok_or_else(|| anyhow!("no <head>"))?;
    head.append_child(&style)
        .map_err(|e| anyhow!("append <style> failed: {e:?}"))?;
    Ok(())
}

/// Create the overlay and attach it to `<body>`. Fails if the page already
/// has a `#cursor-overlay` this module does not own.
pub fn create(document: &web::Document) -> anyhow::Result<OverlayNodes> {
    if document.get_element_by_id(OVERLAY_ID).is_some() {
        return Err(anyhow!("#{OVERLAY_ID} already exists in the document"));
    }
    ensure_stylesheet(document)?;

    let outer = create_div(document)?;
    outer.set_id(OVERLAY_ID);
    _ = outer
        .style()
        .set_property("z-index", &OVERLAY_Z_INDEX.to_string());
    let inner = create_div(document)?;
    inner.set_class_name(INNER_CLASS);
    outer
        .append_child(&inner)
        .map_err(|e| anyhow!("append inner failed: {e:?}"))?;

    let body = document.body().ok_or_else(|| anyhow!("no <body>"))?;
    body.append_child(&outer)
        .map_err(|e| anyhow!("append overlay failed: {e:?}"))?;
    Ok(OverlayNodes { outer, inner })
}

/// Detach the overlay and the stylesheet.
pub fn remove(document: &web::Document, nodes: &OverlayNodes) {
    nodes.outer.remove();
    if let Some(style) = document.get_element_by_id(STYLE_ID) {
        style.remove();
    }
}
