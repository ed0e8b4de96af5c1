use crate::constants::VAR_REVEAL;
use crate::events::{pointer, Listener};
use crate::frame::{self, FrameLoop};
use crate::overlay::OverlayNodes;
use crate::style::{css_number, css_url, style_target, translate, Unit};
use cursor_core::{
    CursorEvent, DrawCommand, Fill, Host, Node, Property, Setter, ZoneCategory, ZoneId,
};
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Routes DOM callbacks back into the mounted cursor.
pub type Dispatch = Rc<dyn Fn(CursorEvent)>;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    if let Err(e) = el.style().set_property(name, value) {
        log::debug!("style {name}={value} rejected: {e:?}");
    }
}

/// [`Host`] over the live document.
pub struct WebHost {
    document: web::Document,
    nodes: OverlayNodes,
    dispatch: Dispatch,
}

impl WebHost {
    pub fn new(document: web::Document, nodes: OverlayNodes, dispatch: Dispatch) -> Self {
        Self {
            document,
            nodes,
            dispatch,
        }
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    pub fn nodes(&self) -> &OverlayNodes {
        &self.nodes
    }

    fn node(&self, node: Node) -> &web::HtmlElement {
        match node {
            Node::Outer => &self.nodes.outer,
            Node::Inner => &self.nodes.inner,
        }
    }
}

impl Host for WebHost {
    type Element = web::Element;
    type Registration = Listener;
    type FrameSubscription = FrameLoop;

    fn query_zones(&self, marker: &str) -> Vec<web::Element> {
        let list = match self.document.query_selector_all(&format!("[{marker}]")) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("querySelectorAll([{marker}]) failed: {e:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect()
    }

    fn attribute(&self, element: &web::Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn center_of(&self, element: &web::Element) -> Option<Vec2> {
        let rect = element.get_bounding_client_rect();
        let center = Vec2::new(
            (rect.left() + rect.width() / 2.0) as f32,
            (rect.top() + rect.height() / 2.0) as f32,
        );
        center.is_finite().then_some(center)
    }

    fn find_child(&self, element: &web::Element, selector: &str) -> Option<web::Element> {
        element.query_selector(selector).ok().flatten()
    }

    fn listen_zone(
        &mut self,
        zone: ZoneId,
        element: &web::Element,
        category: ZoneCategory,
    ) -> Listener {
        pointer::wire_zone(element, zone, category, self.dispatch.clone())
    }

    fn listen_pointer(&mut self) -> Listener {
        pointer::wire_pointermove(self.document.clone().into(), self.dispatch.clone())
    }

    fn remove_listener(&mut self, registration: Listener) {
        registration.detach();
    }

    fn subscribe_frames(&mut self) -> FrameLoop {
        frame::start_loop(self.dispatch.clone())
    }

    fn unsubscribe_frames(&mut self, subscription: FrameLoop) {
        subscription.cancel();
    }

    fn setter(&self, node: Node, property: Property) -> Setter {
        let el = self.node(node).clone();
        let (name, unit) = style_target(property);
        Box::new(move |v| set_style(&el, name, &css_number(v, unit)))
    }

    fn draw(&mut self, command: DrawCommand<'_, web::Element>) {
        let (outer, inner) = (&self.nodes.outer, &self.nodes.inner);
        match command {
            DrawCommand::BackgroundColor(c) => set_style(outer, "background-color", &c.to_css()),
            DrawCommand::Size(s) => {
                let px = css_number(s, Unit::Px);
                set_style(outer, "width", &px);
                set_style(outer, "height", &px);
            }
            DrawCommand::BlendMode(m) => set_style(outer, "mix-blend-mode", m.as_css()),
            DrawCommand::InnerText(t) => inner.set_text_content(Some(t)),
            DrawCommand::InnerReveal { scale, opacity } => {
                set_style(inner, VAR_REVEAL, &css_number(scale, Unit::None));
                set_style(inner, "opacity", &css_number(opacity, Unit::None));
            }
            DrawCommand::InnerFill(Fill::Color(c)) => {
                set_style(inner, "background-image", "none");
                set_style(inner, "background-color", &c.to_css());
            }
            DrawCommand::InnerFill(Fill::Image(src)) => {
                set_style(inner, "background-image", &css_url(src));
            }
            DrawCommand::ElementOffset { element, offset } => {
                match element.dyn_ref::<web::HtmlElement>() {
                    Some(el) => set_style(el, "transform", &translate(offset)),
                    None => log::debug!("zone element has no style; offset skipped"),
                }
            }
        }
    }
}
