//! A legacy string-keyed property store with chained defaults.
//!
//! [`Properties`] holds values that are usually text but may be of another
//! kind ([`PropertyValue`]). Lookups come in two flavours, and the merge
//! operation in this module's parent relies on the difference:
//!
//! - [`Properties::get`] returns the raw value from this table only.
//! - [`Properties::get_property`] returns text only, and falls back to the
//!   defaults chain when this table has no text value for the name.
//!
//! # Examples
//!
//! ```rust
//! use nullsafe_collections::adapt::{Properties, PropertyValue};
//!
//! let mut defaults = Properties::new();
//! defaults.set_property("alg", "HS256");
//!
//! let mut header = Properties::with_defaults(defaults);
//! header.insert("exp", 1_700_000_000_i64);
//!
//! assert_eq!(header.get_property("alg"), Some("HS256"));
//! assert_eq!(header.get("alg"), None);
//! assert_eq!(header.get("exp"), Some(&PropertyValue::Integer(1_700_000_000)));
//! assert_eq!(header.get_property("exp"), None);
//! ```

use std::collections::{BTreeSet, HashMap, btree_set};
use std::fmt;
use std::iter::FromIterator;

use super::enumeration::{IteratorEnumeration, enumerate};
use crate::ReferenceCounter;
use crate::capability::CollectionLength;

/// A value held by [`Properties`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A text value, the only kind [`Properties::get_property`] returns.
    Text(String),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A flag.
    Boolean(bool),
}

impl PropertyValue {
    /// Returns the text if this is a [`PropertyValue::Text`].
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => formatter.write_str(text),
            Self::Integer(integer) => write!(formatter, "{integer}"),
            Self::Float(float) => write!(formatter, "{float}"),
            Self::Boolean(boolean) => write!(formatter, "{boolean}"),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<i64> for PropertyValue {
    fn from(integer: i64) -> Self {
        Self::Integer(integer)
    }
}

impl From<f64> for PropertyValue {
    fn from(float: f64) -> Self {
        Self::Float(float)
    }
}

impl From<bool> for PropertyValue {
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

/// Enumeration over property names, returned by [`Properties::property_names`].
pub type PropertyNames<'a> = IteratorEnumeration<btree_set::IntoIter<&'a str>>;

/// A string-keyed table of [`PropertyValue`]s with an optional defaults table.
///
/// Cloning shares the defaults chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: HashMap<String, PropertyValue>,
    defaults: Option<ReferenceCounter<Properties>>,
}

impl Properties {
    /// Creates an empty table with no defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table that falls back to `defaults` for text lookups.
    #[must_use]
    pub fn with_defaults(defaults: Self) -> Self {
        Self {
            entries: HashMap::new(),
            defaults: Some(ReferenceCounter::new(defaults)),
        }
    }

    /// Returns the defaults table, if any.
    #[must_use]
    pub fn defaults(&self) -> Option<&Self> {
        self.defaults.as_deref()
    }

    /// Returns the number of entries in this table, excluding defaults.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this table, excluding defaults, has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores a text value, returning the previous value for `name`.
    pub fn set_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<PropertyValue> {
        self.insert(name, PropertyValue::Text(value.into()))
    }

    /// Stores a value of any kind, returning the previous value for `name`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Returns the raw value stored in this table. Defaults are not consulted.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries.get(name)
    }

    /// Returns the text value for `name`.
    ///
    /// A non-text value in this table is treated as missing, and the
    /// lookup continues in the defaults chain.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(PropertyValue::as_text)
            .or_else(|| self.defaults()?.get_property(name))
    }

    /// Returns the text value for `name`, or `fallback` when there is none.
    #[must_use]
    pub fn get_property_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.get_property(name).unwrap_or(fallback)
    }

    /// Returns an iterator over the entries of this table, excluding defaults.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Enumerates every distinct name in this table and its defaults chain.
    ///
    /// Names are produced in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullsafe_collections::adapt::{enumeration_to_vec, Properties};
    ///
    /// let mut defaults = Properties::new();
    /// defaults.set_property("typ", "JWT");
    /// defaults.set_property("alg", "none");
    ///
    /// let mut header = Properties::with_defaults(defaults);
    /// header.set_property("alg", "HS256");
    ///
    /// assert_eq!(enumeration_to_vec(Some(header.property_names())), vec!["alg", "typ"]);
    /// ```
    #[must_use]
    pub fn property_names(&self) -> PropertyNames<'_> {
        let mut names = BTreeSet::new();
        self.collect_names(&mut names);
        enumerate(names)
    }

    fn collect_names<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        if let Some(defaults) = self.defaults() {
            defaults.collect_names(names);
        }
        names.extend(self.entries.keys().map(String::as_str));
    }
}

impl<N, V> FromIterator<(N, V)> for Properties
where
    N: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            defaults: None,
        }
    }
}

impl CollectionLength for Properties {
    #[inline]
    fn collection_len(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapt::Enumeration;
    use rstest::rstest;

    fn layered() -> Properties {
        let mut root = Properties::new();
        root.set_property("depth", "root");
        root.set_property("root_only", "r");

        let mut middle = Properties::with_defaults(root);
        middle.insert("depth", 1_i64);
        middle.set_property("middle_only", "m");

        let mut top = Properties::with_defaults(middle);
        top.insert("flag", true);
        top
    }

    #[rstest]
    fn test_get_property_walks_whole_chain() {
        let properties = layered();
        assert_eq!(properties.get_property("root_only"), Some("r"));
        assert_eq!(properties.get_property("middle_only"), Some("m"));
        assert_eq!(properties.get_property("depth"), Some("root"));
    }

    #[rstest]
    fn test_get_only_reads_primary_table() {
        let properties = layered();
        assert_eq!(properties.get("flag"), Some(&PropertyValue::Boolean(true)));
        assert_eq!(properties.get("middle_only"), None);
    }

    #[rstest]
    fn test_non_text_value_is_not_a_property() {
        let properties = layered();
        assert_eq!(properties.get_property("flag"), None);
        assert_eq!(properties.get_property_or("flag", "off"), "off");
    }

    #[rstest]
    fn test_property_names_are_distinct_and_ordered() {
        let properties = layered();
        let mut names = properties.property_names();
        let mut collected = Vec::new();
        while names.has_more_elements() {
            if let Some(name) = names.next_element() {
                collected.push(name);
            }
        }
        assert_eq!(
            collected,
            vec!["depth", "flag", "middle_only", "root_only"]
        );
    }

    #[rstest]
    fn test_len_excludes_defaults() {
        let properties = layered();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties.collection_len(), 1);
        assert!(Properties::with_defaults(layered()).is_empty());
    }

    #[rstest]
    fn test_clone_shares_defaults() {
        let properties = layered();
        let copy = properties.clone();
        let (Some(left), Some(right)) = (&properties.defaults, &copy.defaults) else {
            panic!("layered properties must have defaults");
        };
        assert!(ReferenceCounter::ptr_eq(left, right));
    }

    #[rstest]
    #[case(PropertyValue::from("x"), "x")]
    #[case(PropertyValue::from(42_i64), "42")]
    #[case(PropertyValue::from(false), "false")]
    #[case(PropertyValue::from(0.5_f64), "0.5")]
    fn test_display(#[case] value: PropertyValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_from_iterator() {
        let properties: Properties = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(properties.get_property("b"), Some("2"));
        assert!(properties.defaults().is_none());
    }
}
