//! Resolve/reject event-name selection.
//!
//! The adapter accepts "no names", "one name", or "several names" for each
//! side of an invocation. [`Trigger`] makes that an explicit tagged variant
//! instead of a shape-polymorphic parameter, and [`Trigger::normalize`]
//! reduces every shape to the one form the core operates on: an ordered,
//! deduplicated list of non-empty names.

use serde::{Deserialize, Serialize};

/// Event names designated to settle one side of an invocation.
///
/// A one-element [`Many`](Trigger::Many) and a [`Single`](Trigger::Single)
/// are equivalent: both normalize to exactly one name. There is no
/// length-based special-casing.
///
/// # Example
///
/// ```
/// use evow::Trigger;
///
/// let single: Trigger = "done".into();
/// let many: Trigger = vec!["done"].into();
/// assert_eq!(single.normalize(), many.normalize());
///
/// assert!(Trigger::None.normalize().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Trigger {
    /// No names on this side.
    #[default]
    None,
    /// Exactly one name.
    Single(String),
    /// A set of names, any one of which fires this side.
    Many(Vec<String>),
}

impl Trigger {
    /// Reduces the trigger to an ordered, deduplicated list of names.
    ///
    /// Empty names are discarded. Duplicates are dropped, first occurrence
    /// wins, so registration order follows the caller's order.
    #[must_use]
    pub fn normalize(&self) -> Vec<String> {
        let candidates: &[String] = match self {
            Trigger::None => &[],
            Trigger::Single(name) => std::slice::from_ref(name),
            Trigger::Many(names) => names.as_slice(),
        };

        let mut normalized = Vec::with_capacity(candidates.len());
        for name in candidates {
            if !name.is_empty() && !normalized.contains(name) {
                normalized.push(name.clone());
            }
        }
        normalized
    }

    /// Returns `true` if normalization yields no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Trigger::None => true,
            Trigger::Single(name) => name.is_empty(),
            Trigger::Many(names) => names.iter().all(String::is_empty),
        }
    }
}

impl From<&str> for Trigger {
    fn from(name: &str) -> Self {
        Trigger::Single(name.to_string())
    }
}

impl From<String> for Trigger {
    fn from(name: String) -> Self {
        Trigger::Single(name)
    }
}

impl From<Vec<String>> for Trigger {
    fn from(names: Vec<String>) -> Self {
        Trigger::Many(names)
    }
}

impl From<Vec<&str>> for Trigger {
    fn from(names: Vec<&str>) -> Self {
        Trigger::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Trigger {
    fn from(names: [&str; N]) -> Self {
        Trigger::Many(names.iter().map(|name| name.to_string()).collect())
    }
}

impl<T: Into<Trigger>> From<Option<T>> for Trigger {
    fn from(value: Option<T>) -> Self {
        value.map_or(Trigger::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_normalizes_to_empty() {
        assert!(Trigger::None.normalize().is_empty());
        assert!(Trigger::None.is_empty());
    }

    #[test]
    fn single_normalizes_to_one_name() {
        let trigger = Trigger::from("done");
        assert_eq!(trigger.normalize(), vec!["done"]);
        assert!(!trigger.is_empty());
    }

    #[test]
    fn one_element_many_equals_single() {
        let single = Trigger::from("done");
        let many = Trigger::from(vec!["done"]);
        assert_eq!(single.normalize(), many.normalize());
    }

    #[test]
    fn empty_names_are_discarded() {
        let trigger = Trigger::Many(vec![String::new(), "ok".into(), String::new()]);
        assert_eq!(trigger.normalize(), vec!["ok"]);

        assert!(Trigger::Single(String::new()).is_empty());
        assert!(Trigger::Many(vec![String::new()]).is_empty());
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let trigger = Trigger::from(vec!["a", "b", "a", "c", "b"]);
        assert_eq!(trigger.normalize(), vec!["a", "b", "c"]);
    }

    #[test]
    fn order_is_preserved() {
        let trigger = Trigger::from(["z", "a", "m"]);
        assert_eq!(trigger.normalize(), vec!["z", "a", "m"]);
    }

    #[test]
    fn option_conversions() {
        let none: Trigger = Option::<&str>::None.into();
        assert_eq!(none, Trigger::None);

        let some: Trigger = Some("done").into();
        assert_eq!(some, Trigger::Single("done".into()));
    }
}
