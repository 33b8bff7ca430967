//! Scroll-triggered reveal of page sections.
//!
//! [`RevealTracker`] holds the bookkeeping: which targets are registered and
//! which have already been revealed. [`RevealScheduler`] binds it to a single
//! shared `IntersectionObserver` and adds the `animate-in` class the first
//! time a target becomes visible. Dropping the scheduler disconnects the
//! observer.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of a target that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Targets start revealing slightly before they scroll into view.
pub const REVEAL_ROOT_MARGIN: &str = "50px";
/// Class that runs the one-shot transition in the page stylesheet.
pub const REVEALED_CLASS: &str = "animate-in";

const TARGET_ATTR: &str = "data-reveal-id";

pub type TargetId = u32;

// Ids are unique across schedulers so an element that outlived one page
// mount is never mistaken for a target of the next one.
static NEXT_TARGET_ID: AtomicU32 = AtomicU32::new(0);

fn next_target_id() -> TargetId {
    NEXT_TARGET_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    // target -> revealed
    targets: BTreeMap<TargetId, bool>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the target was already registered.
    pub fn register(&mut self, id: TargetId) -> bool {
        if self.targets.contains_key(&id) {
            return false;
        }
        self.targets.insert(id, false);
        true
    }

    pub fn unregister(&mut self, id: TargetId) -> bool {
        self.targets.remove(&id).is_some()
    }

    pub fn is_registered(&self, id: TargetId) -> bool {
        self.targets.contains_key(&id)
    }

    pub fn is_revealed(&self, id: TargetId) -> bool {
        self.targets.get(&id).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Feeds one intersection report. Returns true only when this report is
    /// the one that reveals the target.
    pub fn observe(&mut self, id: TargetId, visible_fraction: f64, intersecting: bool) -> bool {
        if !intersecting || visible_fraction < REVEAL_THRESHOLD {
            return false;
        }
        self.force_reveal(id)
    }

    /// Reveals a target regardless of visibility. Unknown and already revealed
    /// targets are left alone.
    pub fn force_reveal(&mut self, id: TargetId) -> bool {
        match self.targets.get_mut(&id) {
            Some(revealed) if !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    /// Reveals every registered target and returns the ones that changed.
    pub fn reveal_all(&mut self) -> Vec<TargetId> {
        self.targets
            .iter_mut()
            .filter(|(_, revealed)| !**revealed)
            .map(|(id, revealed)| {
                *revealed = true;
                *id
            })
            .collect()
    }

    pub fn pending(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.targets
            .iter()
            .filter(|(_, revealed)| !**revealed)
            .map(|(id, _)| *id)
    }

    /// Drops every target that has not been revealed yet. Revealed targets
    /// stay known so their state can still be queried.
    pub fn forget_pending(&mut self) {
        self.targets.retain(|_, revealed| *revealed);
    }
}

#[derive(Default)]
struct SchedulerState {
    tracker: RevealTracker,
    elements: HashMap<TargetId, Element>,
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Owns the page's intersection observer for as long as the page is mounted.
pub struct RevealScheduler {
    state: Rc<RefCell<SchedulerState>>,
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

impl RevealScheduler {
    /// Creates the shared observer. When the host has no
    /// `IntersectionObserver` the scheduler still works, but every target is
    /// revealed as soon as it registers.
    pub fn mount() -> Self {
        let state = Rc::new(RefCell::new(SchedulerState::default()));
        match create_observer(state.clone()) {
            Ok((observer, callback)) => Self {
                state,
                observer: Some(observer),
                _callback: Some(callback),
            },
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, revealing content immediately: {:?}", err);
                Self {
                    state,
                    observer: None,
                    _callback: None,
                }
            }
        }
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    pub fn register(&self, element: &Element) {
        // Revealed by an earlier mount, nothing left to animate
        if element.class_list().contains(REVEALED_CLASS) {
            return;
        }
        let mut state = self.state.borrow_mut();
        if let Some(id) = target_id(element) {
            if state.elements.contains_key(&id) {
                return;
            }
        }
        let id = next_target_id();
        if let Err(err) = element.set_attribute(TARGET_ATTR, &id.to_string()) {
            log::warn!("Failed to tag reveal target: {:?}", err);
            mark_revealed(element);
            return;
        }
        state.tracker.register(id);
        state.elements.insert(id, element.clone());
        match &self.observer {
            Some(observer) => observer.observe(element),
            None => {
                if state.tracker.force_reveal(id) {
                    mark_revealed(element);
                }
            }
        }
    }

    pub fn unregister(&self, element: &Element) {
        let Some(id) = target_id(element) else {
            return;
        };
        let mut state = self.state.borrow_mut();
        if state.elements.remove(&id).is_some() {
            state.tracker.unregister(id);
            if let Some(observer) = &self.observer {
                observer.unobserve(element);
            }
        }
    }

    /// Reveals everything still pending, e.g. when observation is abandoned.
    pub fn reveal_all(&self) {
        let mut state = self.state.borrow_mut();
        let SchedulerState { tracker, elements } = &mut *state;
        for id in tracker.reveal_all() {
            if let Some(element) = elements.get(&id) {
                if let Some(observer) = &self.observer {
                    observer.unobserve(element);
                }
                mark_revealed(element);
            }
        }
    }

    pub fn is_revealed(&self, element: &Element) -> bool {
        target_id(element)
            .map(|id| self.state.borrow().tracker.is_revealed(id))
            .unwrap_or(false)
    }

    /// Stops observing every target. Pending targets are forgotten, revealed
    /// ones keep answering `is_revealed`.
    pub fn disconnect_all(&self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        let mut state = self.state.borrow_mut();
        state.tracker.forget_pending();
        state.elements.clear();
    }
}

impl Drop for RevealScheduler {
    fn drop(&mut self) {
        self.disconnect_all();
    }
}

fn create_observer(
    state: Rc<RefCell<SchedulerState>>,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
        return Err(JsValue::from_str("IntersectionObserver is not supported"));
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut state = state.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = target_id(&target) else {
                    continue;
                };
                if state
                    .tracker
                    .observe(id, entry.intersection_ratio(), entry.is_intersecting())
                {
                    mark_revealed(&target);
                    // No hide events once revealed
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    Ok((observer, callback))
}

fn target_id(element: &Element) -> Option<TargetId> {
    element.get_attribute(TARGET_ATTR)?.parse().ok()
}

fn mark_revealed(element: &Element) {
    if let Err(err) = element.class_list().add_1(REVEALED_CLASS) {
        log::warn!("Failed to reveal element: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_when_visible_enough() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.register(7));
        assert!(!tracker.is_revealed(7));

        assert!(!tracker.observe(7, 0.05, true));
        assert!(!tracker.is_revealed(7));

        assert!(tracker.observe(7, REVEAL_THRESHOLD, true));
        assert!(tracker.is_revealed(7));
    }

    #[test]
    fn scroll_out_and_back_does_not_reveal_again() {
        let mut tracker = RevealTracker::new();
        tracker.register(1);

        assert!(tracker.observe(1, 1.0, true));
        assert!(!tracker.observe(1, 0.0, false));
        assert!(tracker.is_revealed(1));
        assert!(!tracker.observe(1, 1.0, true));
        assert!(tracker.is_revealed(1));
    }

    #[test]
    fn double_registration_is_a_single_target() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.register(3));
        assert!(!tracker.register(3));
        assert_eq!(tracker.len(), 1);

        let reveals = [tracker.observe(3, 0.5, true), tracker.observe(3, 0.5, true)];
        assert_eq!(reveals.iter().filter(|r| **r).count(), 1);
    }

    #[test]
    fn not_intersecting_is_ignored_even_with_a_ratio() {
        let mut tracker = RevealTracker::new();
        tracker.register(2);
        assert!(!tracker.observe(2, 0.5, false));
        assert_eq!(tracker.pending().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn unknown_targets_are_never_revealed() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe(42, 1.0, true));
        assert!(!tracker.force_reveal(42));
        assert!(!tracker.is_revealed(42));
    }

    #[test]
    fn reveal_all_only_returns_pending_targets() {
        let mut tracker = RevealTracker::new();
        for id in 0..4 {
            tracker.register(id);
        }
        tracker.observe(1, 1.0, true);

        assert_eq!(tracker.reveal_all(), vec![0, 2, 3]);
        assert!(tracker.reveal_all().is_empty());
        assert_eq!(tracker.pending().count(), 0);
    }

    #[test]
    fn unregister_is_idempotent() {
        let mut tracker = RevealTracker::new();
        tracker.register(5);
        assert!(tracker.unregister(5));
        assert!(!tracker.unregister(5));
        assert!(!tracker.is_registered(5));
        assert!(tracker.is_empty());
    }

    #[test]
    fn forgetting_pending_targets_keeps_revealed_ones() {
        let mut tracker = RevealTracker::new();
        for id in 0..3 {
            tracker.register(id);
        }
        tracker.observe(1, 0.5, true);

        tracker.forget_pending();
        assert_eq!(tracker.len(), 1);
        assert!(tracker.is_revealed(1));
        assert!(!tracker.is_registered(0));
        assert!(!tracker.is_registered(2));
        assert!(!tracker.observe(0, 1.0, true));
    }

    #[test]
    fn revealed_never_reverts_across_any_report_sequence() {
        let reports = [
            (0.0, false),
            (0.09, true),
            (0.3, true),
            (0.0, false),
            (1.0, true),
            (0.05, true),
        ];
        let mut tracker = RevealTracker::new();
        tracker.register(0);
        let mut seen_revealed = false;
        let mut transitions = 0;
        for (ratio, intersecting) in reports {
            if tracker.observe(0, ratio, intersecting) {
                transitions += 1;
            }
            if seen_revealed {
                assert!(tracker.is_revealed(0));
            }
            seen_revealed |= tracker.is_revealed(0);
        }
        assert_eq!(transitions, 1);
    }
}
