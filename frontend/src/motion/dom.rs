//! Browser side of the motion core: DOM targets and the frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};

use super::controller::MotionSpec;
use super::stage::{SectionKey, Stage};
use super::state::VisualState;
use super::target::MotionTarget;

#[derive(Clone, Debug, PartialEq)]
pub struct DomTarget {
    element: HtmlElement,
    /// Set for stat counters, which also render `count` as text.
    counter_suffix: Option<Rc<str>>,
}

impl DomTarget {
    pub fn new(element: HtmlElement) -> Self {
        Self {
            element,
            counter_suffix: None,
        }
    }

    pub fn counter(element: HtmlElement, suffix: &str) -> Self {
        Self {
            element,
            counter_suffix: Some(Rc::from(suffix)),
        }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl MotionTarget for DomTarget {
    fn is_attached(&self) -> bool {
        self.element.is_connected()
    }

    fn viewport_top(&self) -> Option<f64> {
        Some(self.element.get_bounding_client_rect().top())
    }

    fn apply(&self, state: &VisualState) {
        let style = self.element.style();
        let written = style
            .set_property("transform", &state.transform_css())
            .and_then(|_| style.set_property("opacity", &state.opacity_css()));
        if let Err(e) = written {
            if first_style_failure() {
                warn!("style write failed, animations may not show: {:?}", e);
            }
        }
        if let Some(suffix) = &self.counter_suffix {
            self.element
                .set_text_content(Some(&format_count(state.count, suffix)));
        }
    }

    fn is_revealed(&self) -> bool {
        self.element.has_attribute(REVEALED_ATTR)
    }

    fn mark_revealed(&self) {
        if let Err(e) = self.element.set_attribute(REVEALED_ATTR, "true") {
            debug!("could not mark element revealed: {:?}", e);
        }
    }
}

/// True only for the first failed style write on this thread.
fn first_style_failure() -> bool {
    !STYLE_WRITE_FAILED.with(|failed| failed.replace(true))
}

/// Set on elements whose play-once reveal has finished.
const REVEALED_ATTR: &str = "data-revealed";

pub fn format_count(value: f64, suffix: &str) -> String {
    format!("{}{}", value.max(0.0).round() as u64, suffix)
}

/// All elements under `root` matching `selector`, in document order.
pub fn select(root: &Element, selector: &str) -> Vec<DomTarget> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        warn!("invalid selector {}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(DomTarget::new)
        .collect()
}

pub fn first(root: &Element, selector: &str) -> Option<DomTarget> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map(DomTarget::new)
}

/// The section root itself, for sections that trigger on their own edge.
pub fn root(root: &Element) -> Option<DomTarget> {
    root.clone().dyn_into::<HtmlElement>().ok().map(DomTarget::new)
}

thread_local! {
    /// Only the first failed style write is logged.
    static STYLE_WRITE_FAILED: Cell<bool> = Cell::new(false);
    static STAGE: RefCell<Stage<DomTarget>> = RefCell::new(Stage::new());
    static TICKER: Ticker = Ticker::new();
}

/// The single requestAnimationFrame callback. Created on first use and
/// never dropped; only the pending request is armed and cancelled.
struct Ticker {
    callback: Closure<dyn FnMut(f64)>,
    pending: Cell<Option<i32>>,
}

impl Ticker {
    fn new() -> Self {
        Self {
            callback: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>),
            pending: Cell::new(None),
        }
    }

    fn arm(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = window() else { return };
        match window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => warn!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn disarm(&self) {
        if let (Some(id), Some(window)) = (self.pending.take(), window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

fn on_frame(timestamp: f64) {
    TICKER.with(|ticker| ticker.pending.set(None));
    let viewport = viewport_height();
    let busy = STAGE.with(|stage| {
        let mut stage = stage.borrow_mut();
        stage.frame(timestamp / 1000.0, viewport);
        stage.has_sections()
    });
    if busy {
        TICKER.with(Ticker::arm);
    }
}

fn viewport_height() -> f64 {
    window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// Seconds on the same clock as requestAnimationFrame timestamps.
pub fn now() -> f64 {
    window()
        .and_then(|window| window.performance())
        .map_or(0.0, |performance| performance.now() / 1000.0)
}

pub fn mount_section(name: &str, specs: Vec<MotionSpec<DomTarget>>) -> SectionKey {
    let key = STAGE.with(|stage| stage.borrow_mut().mount(name, specs, now()));
    TICKER.with(Ticker::arm);
    key
}

pub fn unmount_section(key: SectionKey) {
    let idle = STAGE.with(|stage| {
        let mut stage = stage.borrow_mut();
        stage.unmount(key);
        log::debug!(
            "stage: {} watch(es), {} tween(s), {} loop(s) left",
            stage.active_bindings(),
            stage.running_tweens(),
            stage.running_loops()
        );
        !stage.has_sections()
    });
    if idle {
        TICKER.with(Ticker::disarm);
    }
}

#[cfg(test)]
mod tests {
    use super::{first_style_failure, format_count};

    #[test]
    fn style_failures_are_reported_once() {
        assert!(first_style_failure());
        assert!(!first_style_failure());
        assert!(!first_style_failure());
    }

    #[test]
    fn counters_render_whole_numbers() {
        assert_eq!(format_count(0.0, "+"), "0+");
        assert_eq!(format_count(249.6, "+"), "250+");
        assert_eq!(format_count(98.2, "%"), "98%");
        assert_eq!(format_count(-3.0, ""), "0");
    }
}
