//! A keyed collection of rule sets.

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::{Equivalent, IndexMap};
use tracing::{debug, info};

use crate::feedback::Polarity;
use crate::foundation::{Error, Result, RuleKind, StatusCode, Statuses, is_passing};
use crate::rule::{Arg, Rule};
use crate::rule_set::RuleSet;
use crate::source::TextSource;

/// Maps validation targets to their [`RuleSet`]s.
///
/// Targets are identified by a caller-chosen key. A target's rule set is
/// created the first time a rule or a feedback binding is registered for it,
/// and targets are evaluated in that order.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use sentinel_validator::prelude::*;
///
/// let mut registry = Registry::new();
/// registry
///     .add("username", Rule::min_length(3))
///     .add("password", Rule::special_char());
///
/// let form = HashMap::from([("username", "al"), ("password", "hunter2!")]);
/// let report = registry.validate_all(&form, false).unwrap();
///
/// assert_eq!(report[0], ("username", smallvec::smallvec![StatusCode::TooShort]));
/// assert_eq!(report[1], ("password", smallvec::smallvec![StatusCode::Ok]));
/// ```
#[derive(Debug)]
pub struct Registry<K = String> {
    machines: IndexMap<K, RuleSet>,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self {
            machines: IndexMap::new(),
        }
    }
}

impl<K> Registry<K>
where
    K: Eq + Hash + Clone + Debug,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule set for `target`, created empty if it does not exist yet.
    pub fn rule_set_or_default(&mut self, target: K) -> &mut RuleSet {
        match self.machines.entry(target) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!(key = ?entry.key(), "created rule set");
                entry.insert(RuleSet::new())
            }
        }
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Stores the rule for `kind` on `target` with untyped arguments.
    ///
    /// See [`RuleSet::add_rule`].
    pub fn add_rule<I>(&mut self, target: K, kind: RuleKind, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.rule_set_or_default(target).add_rule(kind, args);
        self
    }

    /// Stores the argument-less rule for `kind` on `target`.
    pub fn add_kind(&mut self, target: K, kind: RuleKind) -> &mut Self {
        self.rule_set_or_default(target).add_kind(kind);
        self
    }

    /// Stores a typed rule on `target`.
    pub fn add(&mut self, target: K, rule: Rule) -> &mut Self {
        self.rule_set_or_default(target).add(rule);
        self
    }

    /// Binds a feedback action on `target`, creating its rule set if needed.
    ///
    /// See [`RuleSet::add_feedback`].
    pub fn add_feedback(
        &mut self,
        target: K,
        status: StatusCode,
        polarity: impl Into<Polarity>,
        action: impl FnMut() + 'static,
    ) -> &mut Self {
        self.rule_set_or_default(target)
            .add_feedback(status, polarity, action);
        self
    }

    // ------------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------------

    /// Evaluates every target against its current text from `source`.
    ///
    /// Results come back in target registration order. With `with_feedback`
    /// set, each target's feedback bindings fire after its rules run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TargetUnavailable`] if `source` has no text for a
    /// registered target. Texts are gathered before anything is evaluated, so
    /// in that case no rule runs and no feedback fires.
    pub fn validate_all<S>(&mut self, source: &S, with_feedback: bool) -> Result<Vec<(K, Statuses)>>
    where
        S: TextSource<K> + ?Sized,
    {
        let texts = self
            .machines
            .keys()
            .map(|key| source.text(key).ok_or_else(|| Error::unavailable(key)))
            .collect::<Result<Vec<Cow<'_, str>>>>()?;

        let report: Vec<(K, Statuses)> = self
            .machines
            .iter_mut()
            .zip(&texts)
            .map(|((key, rules), text)| (key.clone(), run(rules, text, with_feedback)))
            .collect();

        let failed = report.iter().filter(|(_, s)| !is_passing(s)).count();
        info!(targets = report.len(), failed, with_feedback, "validated all targets");
        Ok(report)
    }

    /// Evaluates a single target against its current text from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTarget`] if `target` has no rule set, or
    /// [`Error::TargetUnavailable`] if `source` has no text for it.
    pub fn validate<Q, S>(
        &mut self,
        target: &Q,
        source: &S,
        with_feedback: bool,
    ) -> Result<Statuses>
    where
        Q: Equivalent<K> + Hash + Debug + ?Sized,
        S: TextSource<K> + ?Sized,
    {
        let (_, key, rules) = self
            .machines
            .get_full_mut(target)
            .ok_or_else(|| Error::unknown(&target))?;
        let text = source.text(key).ok_or_else(|| Error::unavailable(key))?;
        Ok(run(rules, &text, with_feedback))
    }

    // ------------------------------------------------------------------------
    // Access
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn rule_set<Q>(&self, target: &Q) -> Option<&RuleSet>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.machines.get(target)
    }

    pub fn rule_set_mut<Q>(&mut self, target: &Q) -> Option<&mut RuleSet>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.machines.get_mut(target)
    }

    /// Removes `target` and its rule set, keeping the order of the others.
    pub fn remove_target<Q>(&mut self, target: &Q) -> Option<RuleSet>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.machines.shift_remove(target)
    }

    #[must_use]
    pub fn contains<Q>(&self, target: &Q) -> bool
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.machines.contains_key(target)
    }

    /// Target keys in evaluation order.
    pub fn targets(&self) -> impl Iterator<Item = &K> {
        self.machines.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &RuleSet)> {
        self.machines.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.machines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}

fn run(rules: &mut RuleSet, text: &str, with_feedback: bool) -> Statuses {
    if with_feedback {
        rules.feedback(text)
    } else {
        rules.validate(text)
    }
}
