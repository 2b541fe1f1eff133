// Browser side of swipe detection: DOM touch listeners and the Yew hook wrapping them.
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlElement, TouchEvent};
use yew::prelude::*;

use super::binding::{SwipeBinding, TouchSurface};
use super::swipe::SwipeRecognizer;
use crate::model::{Bounds, GestureConfig, GestureResult, TouchSample};
use crate::util::now_millis;

type TouchHandler = Closure<dyn FnMut(TouchEvent)>;

/// An element plus the touchstart/touchend closures registered on it.
pub struct DomSurface {
    element: HtmlElement,
    on_start: TouchHandler,
    on_end: TouchHandler,
}

impl DomSurface {
    pub fn new(element: HtmlElement, recognizer: Rc<RefCell<SwipeRecognizer>>) -> Self {
        let on_start = {
            let element = element.clone();
            let recognizer = recognizer.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let Some(sample) = first_contact(&e) else {
                    return;
                };
                let bounds = element_bounds(&element);
                recognizer.borrow_mut().on_touch_start(sample, bounds);
            }) as Box<dyn FnMut(_)>)
        };
        let on_end = Closure::wrap(Box::new(move |e: TouchEvent| {
            let Some(sample) = first_contact(&e) else {
                return;
            };
            recognizer.borrow_mut().on_touch_end(sample);
        }) as Box<dyn FnMut(_)>);
        Self { element, on_start, on_end }
    }
}

impl TouchSurface for DomSurface {
    fn listen(&self) {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        for (kind, cb) in [("touchstart", &self.on_start), ("touchend", &self.on_end)] {
            let _ = self
                .element
                .add_event_listener_with_callback_and_add_event_listener_options(
                    kind,
                    cb.as_ref().unchecked_ref(),
                    &opts,
                );
        }
    }

    fn unlisten(&self) {
        let _ = self
            .element
            .remove_event_listener_with_callback("touchstart", self.on_start.as_ref().unchecked_ref());
        let _ = self
            .element
            .remove_event_listener_with_callback("touchend", self.on_end.as_ref().unchecked_ref());
    }
}

/// First changed contact in page coordinates, stamped with the delivery time.
fn first_contact(e: &TouchEvent) -> Option<TouchSample> {
    let t = e.changed_touches().item(0)?;
    Some(TouchSample::new(t.page_x() as f64, t.page_y() as f64, now_millis()))
}

/// Viewport rect shifted into page coordinates. `None` once the element leaves the document.
fn element_bounds(element: &HtmlElement) -> Option<Bounds> {
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    let (sx, sy) = web_sys::window()
        .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
        .unwrap_or((0.0, 0.0));
    Some(Bounds {
        left: rect.left() + sx,
        top: rect.top() + sy,
        width: rect.width(),
        height: rect.height(),
    })
}

/// Latest gesture plus how many have resolved, so repeated identical swipes still
/// register as changes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeFeed {
    pub resolved: u64,
    pub last: GestureResult,
}

impl Reducible for SwipeFeed {
    type Action = GestureResult;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(SwipeFeed {
            resolved: self.resolved.wrapping_add(1),
            last: action,
        })
    }
}

#[derive(Clone, PartialEq)]
pub struct SwipeHandle {
    pub feed: SwipeFeed,
    /// Whether listeners are currently registered, as reported by the binding.
    pub attached: bool,
    pub attach: Callback<()>,
    pub detach: Callback<()>,
    pub toggle: Callback<()>,
}

/// Recognizes swipes on the element behind `node`. Listeners are attached on mount and
/// released on unmount or when `node`/`config` change.
#[hook]
pub fn use_swipe_gesture(node: NodeRef, config: GestureConfig) -> SwipeHandle {
    let feed = use_reducer(SwipeFeed::default);
    let binding = use_mut_ref(|| SwipeBinding::<DomSurface>::new(None));
    let attached = use_state(|| false);

    {
        let binding = binding.clone();
        let attached = attached.clone();
        let dispatcher = feed.dispatcher();
        use_effect_with((node, config), move |(node, config)| {
            let recognizer = Rc::new(RefCell::new(SwipeRecognizer::new(*config)));
            recognizer
                .borrow_mut()
                .subscribe(move |r: &GestureResult| dispatcher.dispatch(*r));
            let surface = node
                .cast::<HtmlElement>()
                .map(|el| DomSurface::new(el, recognizer));
            {
                let mut b = binding.borrow_mut();
                b.replace_surface(surface);
                b.attach();
                if !b.is_attached() {
                    log::debug!("swipe surface not mounted yet");
                }
                attached.set(b.is_attached());
            }
            move || binding.borrow_mut().detach()
        });
    }

    let attach = {
        let binding = binding.clone();
        let attached = attached.clone();
        Callback::from(move |_| {
            let mut b = binding.borrow_mut();
            b.attach();
            attached.set(b.is_attached());
        })
    };
    let detach = {
        let binding = binding.clone();
        let attached = attached.clone();
        Callback::from(move |_| {
            let mut b = binding.borrow_mut();
            b.detach();
            attached.set(b.is_attached());
        })
    };
    let toggle = {
        let attached = attached.clone();
        Callback::from(move |_| {
            let now = binding.borrow_mut().toggle();
            attached.set(now);
        })
    };

    SwipeHandle {
        feed: *feed,
        attached: *attached,
        attach,
        detach,
        toggle,
    }
}
