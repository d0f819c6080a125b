//! The per-target validation machine.

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::feedback::{FeedbackRegistry, Polarity};
use crate::foundation::{RuleKind, StatusCode, Statuses, Validate, is_passing};
use crate::rule::{Arg, Rule};

/// The rules and accumulated statuses for one validation target.
///
/// Holds at most one rule per [`RuleKind`]; registering a kind again replaces
/// its arguments and keeps the kind's original evaluation slot. Rules run in
/// the order their kinds were first registered.
///
/// The target itself is not stored: its current text is passed to
/// [`validate`](Self::validate) and [`feedback`](Self::feedback).
///
/// # Examples
///
/// ```rust
/// use sentinel_validator::prelude::*;
///
/// let mut rules = RuleSet::new();
/// rules.add(Rule::min_length(3)).add_kind(RuleKind::SpecialChar);
///
/// assert_eq!(
///     rules.validate("ab").as_slice(),
///     &[StatusCode::TooShort, StatusCode::NoSpecChar]
/// );
/// assert_eq!(rules.validate("abc!").as_slice(), &[StatusCode::Ok]);
/// ```
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: IndexMap<RuleKind, Vec<Arg>>,
    feedback: FeedbackRegistry,
    statuses: Statuses,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Stores the rule for `kind` with untyped arguments, replacing any
    /// previous rule of that kind.
    ///
    /// Arguments are not checked here; a wrong shape surfaces as the kind's
    /// `Bad*Args` status when the set is evaluated.
    pub fn add_rule<I>(&mut self, kind: RuleKind, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
        self.insert(kind, args);
        self
    }

    /// Stores the rule for `kind` without arguments.
    pub fn add_kind(&mut self, kind: RuleKind) -> &mut Self {
        self.insert(kind, Vec::new());
        self
    }

    /// Stores a typed rule, replacing any previous rule of the same kind.
    pub fn add(&mut self, rule: Rule) -> &mut Self {
        let (kind, args) = rule.into_parts();
        self.insert(kind, args);
        self
    }

    fn insert(&mut self, kind: RuleKind, args: Vec<Arg>) {
        let arg_count = args.len();
        if self.rules.insert(kind, args).is_some() {
            debug!(rule = %kind, args = arg_count, "replaced rule");
        } else {
            trace!(rule = %kind, args = arg_count, "added rule");
        }
    }

    /// Removes the rule for `kind`, returning its arguments.
    pub fn remove_rule(&mut self, kind: RuleKind) -> Option<Vec<Arg>> {
        self.rules.shift_remove(&kind)
    }

    /// The arguments registered for `kind`.
    #[must_use]
    pub fn args(&self, kind: RuleKind) -> Option<&[Arg]> {
        self.rules.get(&kind).map(Vec::as_slice)
    }

    /// Registered kinds in evaluation order.
    pub fn kinds(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.rules.keys().copied()
    }

    #[must_use]
    pub fn contains(&self, kind: RuleKind) -> bool {
        self.rules.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // ------------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------------

    /// Runs every rule against `text` and returns the resulting statuses.
    ///
    /// The previous statuses are discarded first. The result is `[Ok]` when no
    /// rule reported anything and never contains `Ok` otherwise. It is also
    /// kept on the set and available through [`statuses`](Self::statuses).
    pub fn validate(&mut self, text: &str) -> Statuses {
        self.statuses.clear();

        for (kind, args) in &self.rules {
            trace!(rule = %kind, "evaluating rule");
            match Rule::resolve(*kind, args) {
                Ok(rule) => rule.report(text, &mut self.statuses),
                Err(status) => {
                    warn!(
                        rule = %kind,
                        %status,
                        shapes = ?args.iter().map(Arg::shape).collect::<Vec<_>>(),
                        "rule arguments have the wrong shape"
                    );
                    self.statuses.push(status);
                }
            }
        }

        if self.statuses.is_empty() {
            self.statuses.push(StatusCode::Ok);
        }

        debug!(rules = self.rules.len(), statuses = ?self.statuses, "validated");
        self.statuses.clone()
    }

    /// Statuses from the most recent evaluation; empty before the first one.
    #[must_use]
    pub fn statuses(&self) -> &[StatusCode] {
        &self.statuses
    }

    /// Returns true if the most recent evaluation produced exactly `[Ok]`.
    #[must_use]
    pub fn passed(&self) -> bool {
        is_passing(&self.statuses)
    }

    // ------------------------------------------------------------------------
    // Feedback
    // ------------------------------------------------------------------------

    /// Binds `action` to fire after [`feedback`](Self::feedback) when `status`
    /// is present (`Polarity::Present`, or `true`) or absent (`Polarity::Absent`,
    /// or `false`). The last binding for a (status, polarity) pair wins.
    pub fn add_feedback(
        &mut self,
        status: StatusCode,
        polarity: impl Into<Polarity>,
        action: impl FnMut() + 'static,
    ) -> &mut Self {
        let polarity = polarity.into();
        if self.feedback.bind(status, polarity, action) {
            debug!(%status, ?polarity, "replaced feedback binding");
        }
        self
    }

    /// Validates `text`, then fires every matching feedback binding.
    pub fn feedback(&mut self, text: &str) -> Statuses {
        let statuses = self.validate(text);
        let fired = self.feedback.dispatch(&statuses);
        debug!(fired, bindings = self.feedback.len(), "dispatched feedback");
        statuses
    }

    #[must_use]
    pub fn feedback_len(&self) -> usize {
        self.feedback.len()
    }

    /// Removes every feedback binding.
    pub fn clear_feedback(&mut self) {
        self.feedback.clear();
    }
}
