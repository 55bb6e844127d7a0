//! Viewport threshold watches.
//!
//! A watch fires when its element's top edge crosses a horizontal line placed
//! at a percentage of the viewport height, measured from the top. `80.0`
//! fires once the element has scrolled up to 80% of the way down the screen.

use log::debug;
use slotmap::{new_key_type, SlotMap};

use super::error::MotionError;
use super::target::MotionTarget;

new_key_type! {
    pub struct WatchHandle;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    Entering,
    Leaving,
}

pub type TriggerCallback = Box<dyn FnMut(Crossing)>;

struct Watch<T> {
    element: T,
    threshold: f64,
    inside: bool,
    callback: TriggerCallback,
}

pub struct TriggerSource<T> {
    watches: SlotMap<WatchHandle, Watch<T>>,
}

impl<T> Default for TriggerSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TriggerSource<T> {
    pub fn new() -> Self {
        Self {
            watches: SlotMap::with_key(),
        }
    }

    /// Safe to call with a stale handle or more than once.
    pub fn unobserve(&mut self, handle: WatchHandle) -> bool {
        self.watches.remove(handle).is_some()
    }

    #[cfg(test)]
    pub fn contains(&self, handle: WatchHandle) -> bool {
        self.watches.contains_key(handle)
    }

    pub fn len(&self) -> usize {
        self.watches.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }
}

impl<T: MotionTarget> TriggerSource<T> {
    /// Start watching `element`.
    ///
    /// Returns `Ok(None)` without registering anything when there is no
    /// element yet, or it is not in the document.
    pub fn observe<F>(
        &mut self,
        element: Option<&T>,
        threshold_percent: f64,
        callback: F,
    ) -> Result<Option<WatchHandle>, MotionError>
    where
        F: FnMut(Crossing) + 'static,
    {
        if !(0.0..=100.0).contains(&threshold_percent) {
            return Err(MotionError::InvalidThreshold(threshold_percent));
        }
        let Some(element) = element.filter(|element| element.is_attached()) else {
            debug!("observe: nothing mounted to watch yet");
            return Ok(None);
        };
        Ok(Some(self.watches.insert(Watch {
            element: element.clone(),
            threshold: threshold_percent / 100.0,
            inside: false,
            callback: Box::new(callback),
        })))
    }

    /// Re-measure every watch and fire callbacks for threshold crossings.
    /// Returns how many callbacks ran.
    pub fn refresh(&mut self, viewport_height: f64) -> usize {
        let mut fired = 0;
        for watch in self.watches.values_mut() {
            if !watch.element.is_attached() {
                continue;
            }
            let Some(top) = watch.element.viewport_top() else {
                continue;
            };
            let inside = top <= viewport_height * watch.threshold;
            if inside == watch.inside {
                continue;
            }
            watch.inside = inside;
            (watch.callback)(if inside {
                Crossing::Entering
            } else {
                Crossing::Leaving
            });
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::Probe;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<Crossing>>>, impl FnMut(Crossing) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |crossing| sink.borrow_mut().push(crossing))
    }

    #[test]
    fn fires_on_each_crossing() {
        let element = Probe::at(900.0);
        let (seen, callback) = recorder();
        let mut source = TriggerSource::new();
        source.observe(Some(&element), 80.0, callback).unwrap().unwrap();

        assert_eq!(source.refresh(1000.0), 0);
        element.scroll_to(700.0);
        assert_eq!(source.refresh(1000.0), 1);
        assert_eq!(source.refresh(1000.0), 0);
        element.scroll_to(850.0);
        source.refresh(1000.0);
        element.scroll_to(-300.0);
        source.refresh(1000.0);

        assert_eq!(
            *seen.borrow(),
            vec![Crossing::Entering, Crossing::Leaving, Crossing::Entering]
        );
    }

    #[test]
    fn element_already_past_line_enters_on_first_refresh() {
        let element = Probe::at(100.0);
        let (seen, callback) = recorder();
        let mut source = TriggerSource::new();
        source.observe(Some(&element), 80.0, callback).unwrap();
        source.refresh(800.0);
        assert_eq!(*seen.borrow(), vec![Crossing::Entering]);
    }

    #[test]
    fn missing_or_detached_element_is_a_silent_no_op() {
        let mut source: TriggerSource<Probe> = TriggerSource::new();
        assert_eq!(source.observe(None, 50.0, |_| {}), Ok(None));
        assert_eq!(source.observe(Some(&Probe::detached()), 50.0, |_| {}), Ok(None));
        assert!(source.is_empty());
    }

    #[test]
    fn threshold_must_be_a_percentage() {
        let element = Probe::at(0.0);
        let mut source = TriggerSource::new();
        assert_eq!(
            source.observe(Some(&element), 120.0, |_| {}),
            Err(MotionError::InvalidThreshold(120.0))
        );
        assert!(source.observe(Some(&element), f64::NAN, |_| {}).is_err());
        assert!(source.observe(Some(&element), 0.0, |_| {}).unwrap().is_some());
        assert!(source.observe(Some(&element), 100.0, |_| {}).unwrap().is_some());
    }

    #[test]
    fn unobserve_is_idempotent() {
        let element = Probe::at(0.0);
        let (seen, callback) = recorder();
        let mut source = TriggerSource::new();
        let handle = source.observe(Some(&element), 50.0, callback).unwrap().unwrap();

        assert!(source.unobserve(handle));
        assert!(!source.unobserve(handle));
        assert!(!source.contains(handle));
        source.refresh(1000.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn detached_elements_are_skipped() {
        let element = Probe::at(0.0);
        let (seen, callback) = recorder();
        let mut source = TriggerSource::new();
        source.observe(Some(&element), 50.0, callback).unwrap();
        element.set_attached(false);
        assert_eq!(source.refresh(1000.0), 0);
        assert!(seen.borrow().is_empty());
    }
}
