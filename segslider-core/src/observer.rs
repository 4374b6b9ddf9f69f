//! Change notification seam.
//!
//! Observers run synchronously, in subscription order, after every
//! accepted change (including the initial seed and no-op drags).

use std::cell::RefCell;
use std::rc::Rc;

/// Receives `(green, amber)` after each change.
pub trait PointObserver {
    fn points_changed(&mut self, green: f64, amber: f64);
}

impl<F> PointObserver for F
where
    F: FnMut(f64, f64),
{
    fn points_changed(&mut self, green: f64, amber: f64) {
        self(green, amber)
    }
}

/// Observer that keeps every notification.
///
/// Clones share one log, so a host can hand one clone to the slider and
/// read the history through another.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    log: Rc<RefCell<Vec<(f64, f64)>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<(f64, f64)> {
        self.log.borrow().clone()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.log.borrow().last().copied()
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl PointObserver for RecordingObserver {
    fn points_changed(&mut self, green: f64, amber: f64) {
        self.log.borrow_mut().push((green, amber));
    }
}
