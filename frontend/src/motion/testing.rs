use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::state::VisualState;
use super::target::MotionTarget;

/// Recording stand-in for a DOM element.
#[derive(Clone)]
pub struct Probe(Rc<ProbeInner>);

struct ProbeInner {
    attached: Cell<bool>,
    top: Cell<f64>,
    revealed: Cell<bool>,
    writes: RefCell<Vec<VisualState>>,
}

impl Probe {
    pub fn at(top: f64) -> Self {
        Probe(Rc::new(ProbeInner {
            attached: Cell::new(true),
            top: Cell::new(top),
            revealed: Cell::new(false),
            writes: RefCell::new(Vec::new()),
        }))
    }

    pub fn detached() -> Self {
        let probe = Probe::at(0.0);
        probe.set_attached(false);
        probe
    }

    pub fn scroll_to(&self, top: f64) {
        self.0.top.set(top);
    }

    pub fn set_attached(&self, attached: bool) {
        self.0.attached.set(attached);
    }

    pub fn last(&self) -> Option<VisualState> {
        self.0.writes.borrow().last().copied()
    }

    pub fn write_count(&self) -> usize {
        self.0.writes.borrow().len()
    }

    pub fn writes(&self) -> Vec<VisualState> {
        self.0.writes.borrow().clone()
    }
}

impl MotionTarget for Probe {
    fn is_attached(&self) -> bool {
        self.0.attached.get()
    }

    fn viewport_top(&self) -> Option<f64> {
        self.is_attached().then(|| self.0.top.get())
    }

    fn apply(&self, state: &VisualState) {
        self.0.writes.borrow_mut().push(*state);
    }

    fn is_revealed(&self) -> bool {
        self.0.revealed.get()
    }

    fn mark_revealed(&self) {
        self.0.revealed.set(true);
    }
}

pub fn probes(n: usize, top: f64) -> Vec<Probe> {
    (0..n).map(|_| Probe::at(top)).collect()
}
