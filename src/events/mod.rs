pub mod pointer;

use smallvec::SmallVec;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

/// Every DOM listener added for one registration. Detaching removes the
/// exact closures that were added and then drops them.
pub struct Listener {
    target: web::EventTarget,
    bindings: SmallVec<[(&'static str, Handler); 3]>,
}

impl Listener {
    pub fn new(target: web::EventTarget) -> Self {
        Self {
            target,
            bindings: SmallVec::new(),
        }
    }

    pub fn on(mut self, event: &'static str, handler: impl FnMut(web::Event) + 'static) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) = self
            .target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("addEventListener({event}) failed: {e:?}");
            return self;
        }
        self.bindings.push((event, closure));
        self
    }

    pub fn detach(self) {
        for (event, closure) in &self.bindings {
            _ = self
                .target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}
