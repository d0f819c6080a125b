//! Where target texts come from.
//!
//! A [`Registry`](crate::Registry) never owns the texts it validates. At
//! evaluation time it asks a [`TextSource`] for the current text of each
//! target key, so the same rules can run against form fields, parsed config
//! values or anything else that can be looked up by key.

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// Supplies the current text of a validation target.
pub trait TextSource<K: ?Sized> {
    /// The text for `target`, or `None` when the target has no text right now.
    fn text(&self, target: &K) -> Option<Cow<'_, str>>;
}

impl<K: ?Sized, T: TextSource<K> + ?Sized> TextSource<K> for &T {
    fn text(&self, target: &K) -> Option<Cow<'_, str>> {
        (**self).text(target)
    }
}

impl<K, Q, V, S> TextSource<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn text(&self, target: &Q) -> Option<Cow<'_, str>> {
        self.get(target).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<K, Q, V> TextSource<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
    V: AsRef<str>,
{
    fn text(&self, target: &Q) -> Option<Cow<'_, str>> {
        self.get(target).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<K, Q, V, S> TextSource<Q> for IndexMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn text(&self, target: &Q) -> Option<Cow<'_, str>> {
        self.get(target).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

// ============================================================================
// CLOSURE SOURCES
// ============================================================================

/// A [`TextSource`] backed by a closure. Built with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnSource<F>(F);

/// Wraps a lookup closure as a [`TextSource`].
///
/// ```rust
/// use sentinel_validator::source::{TextSource, from_fn};
///
/// let source = from_fn(|key: &str| (key == "user").then(|| "alice".to_string()));
/// assert_eq!(source.text("user").as_deref(), Some("alice"));
/// assert_eq!(source.text("pass"), None);
/// ```
pub fn from_fn<F>(f: F) -> FnSource<F> {
    FnSource(f)
}

impl<K, F, T> TextSource<K> for FnSource<F>
where
    K: ?Sized,
    F: Fn(&K) -> Option<T>,
    T: Into<String>,
{
    fn text(&self, target: &K) -> Option<Cow<'_, str>> {
        (self.0)(target).map(|text| Cow::Owned(text.into()))
    }
}

impl<F> std::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnSource(..)")
    }
}
