//! Feedback bindings: actions fired by the presence or absence of a status.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::foundation::StatusCode;

/// When a feedback binding fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Fire when the status is in the result.
    #[default]
    Present,
    /// Fire when the status is not in the result.
    Absent,
}

impl Polarity {
    /// Returns true if a binding for `status` with this polarity fires for `statuses`.
    #[must_use]
    pub fn fires(self, status: StatusCode, statuses: &[StatusCode]) -> bool {
        statuses.contains(&status) == (self == Self::Present)
    }
}

impl From<bool> for Polarity {
    /// `true` is [`Polarity::Present`], `false` is [`Polarity::Absent`].
    fn from(present: bool) -> Self {
        if present { Self::Present } else { Self::Absent }
    }
}

/// A feedback action. Actions run on the evaluating thread, one after another.
pub type FeedbackAction = Box<dyn FnMut()>;

/// Bindings from (status, polarity) to an action.
///
/// Binding again for the same pair replaces the action but keeps the pair's
/// original position in dispatch order.
#[derive(Default)]
pub struct FeedbackRegistry {
    bindings: IndexMap<(StatusCode, Polarity), FeedbackAction>,
}

impl FeedbackRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` for `(status, polarity)`. Returns true if a previous
    /// action was replaced.
    pub fn bind(
        &mut self,
        status: StatusCode,
        polarity: Polarity,
        action: impl FnMut() + 'static,
    ) -> bool {
        self.bindings
            .insert((status, polarity), Box::new(action))
            .is_some()
    }

    /// Fires every binding that matches `statuses`, in registration order.
    ///
    /// Returns the number of actions fired.
    pub fn dispatch(&mut self, statuses: &[StatusCode]) -> usize {
        let mut fired = 0;
        for ((status, polarity), action) in &mut self.bindings {
            if polarity.fires(*status, statuses) {
                action();
                fired += 1;
            }
        }
        fired
    }

    #[must_use]
    pub fn contains(&self, status: StatusCode, polarity: Polarity) -> bool {
        self.bindings.contains_key(&(status, polarity))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

impl fmt::Debug for FeedbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.bindings.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_polarity_from_bool() {
        assert_eq!(Polarity::from(true), Polarity::Present);
        assert_eq!(Polarity::from(false), Polarity::Absent);
        assert_eq!(Polarity::default(), Polarity::Present);
    }

    #[test]
    fn test_polarity_fires() {
        let statuses = [StatusCode::TooShort];
        assert!(Polarity::Present.fires(StatusCode::TooShort, &statuses));
        assert!(!Polarity::Absent.fires(StatusCode::TooShort, &statuses));
        assert!(Polarity::Absent.fires(StatusCode::Ok, &statuses));
        assert!(!Polarity::Present.fires(StatusCode::Ok, &statuses));
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = FeedbackRegistry::new();

        let l = Rc::clone(&log);
        registry.bind(StatusCode::Ok, Polarity::Absent, move || l.borrow_mut().push("not ok"));
        let l = Rc::clone(&log);
        registry.bind(StatusCode::TooShort, Polarity::Present, move || {
            l.borrow_mut().push("short");
        });
        let l = Rc::clone(&log);
        registry.bind(StatusCode::TooLong, Polarity::Present, move || l.borrow_mut().push("long"));

        let fired = registry.dispatch(&[StatusCode::TooShort]);
        assert_eq!(fired, 2);
        assert_eq!(*log.borrow(), ["not ok", "short"]);
    }

    #[test]
    fn test_rebinding_replaces_and_keeps_position() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = FeedbackRegistry::new();

        let l = Rc::clone(&log);
        assert!(!registry.bind(StatusCode::TooShort, Polarity::Present, move || {
            l.borrow_mut().push("first");
        }));
        let l = Rc::clone(&log);
        registry.bind(StatusCode::TooLong, Polarity::Absent, move || l.borrow_mut().push("other"));
        let l = Rc::clone(&log);
        assert!(registry.bind(StatusCode::TooShort, Polarity::Present, move || {
            l.borrow_mut().push("second");
        }));

        assert_eq!(registry.len(), 2);
        registry.dispatch(&[StatusCode::TooShort]);
        assert_eq!(*log.borrow(), ["second", "other"]);
    }

    #[test]
    fn test_both_polarities_coexist() {
        let mut registry = FeedbackRegistry::new();
        registry.bind(StatusCode::Ok, Polarity::Present, || {});
        registry.bind(StatusCode::Ok, Polarity::Absent, || {});
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.dispatch(&[StatusCode::Ok]), 1);
        assert_eq!(registry.dispatch(&[StatusCode::NotAlpha]), 1);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_contains_is_per_polarity() {
        let mut registry = FeedbackRegistry::new();
        registry.bind(StatusCode::TooLong, Polarity::Absent, || {});
        assert!(registry.contains(StatusCode::TooLong, Polarity::Absent));
        assert!(!registry.contains(StatusCode::TooLong, Polarity::Present));
        assert!(!registry.contains(StatusCode::TooShort, Polarity::Absent));
    }
}
