//! Draining foreign sources into caller-supplied mutable targets.
//!
//! Both operations check their target before touching anything: an absent
//! target is reported as [`CollectionError::InvalidArgument`] and no
//! element is written. An absent source is not an error.

use crate::CollectionError;
use crate::capability::{MutableCollection, MutableMapping};

use super::enumeration::Enumeration;
use super::properties::{Properties, PropertyValue};

/// Appends every element of `array` to `collection`, in array order.
///
/// # Errors
///
/// - [`CollectionError::InvalidArgument`] if `collection` is `None`.
/// - Any error from the target's [`MutableCollection::try_add_all`], e.g.
///   [`CollectionError::UnsupportedOperation`] for an immutable view.
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::adapt::merge_array_into;
///
/// let mut target = vec![0];
/// merge_array_into(Some(&[1, 2]), Some(&mut target)).unwrap();
/// assert_eq!(target, vec![0, 1, 2]);
///
/// merge_array_into::<i32, [i32], _>(None, Some(&mut target)).unwrap();
/// assert_eq!(target, vec![0, 1, 2]);
///
/// assert!(merge_array_into::<i32, _, Vec<i32>>(Some(&[1]), None).is_err());
/// ```
pub fn merge_array_into<T, A, C>(
    array: Option<&A>,
    collection: Option<&mut C>,
) -> Result<(), CollectionError>
where
    T: Clone,
    A: AsRef<[T]> + ?Sized,
    C: MutableCollection<T>,
{
    let collection = collection.ok_or(CollectionError::invalid_argument("collection"))?;
    let elements: &[T] = array.map_or(&[][..], <A as AsRef<[T]>>::as_ref);
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    let changed = collection.try_add_all(elements.iter().cloned())?;
    crate::trace_event!(
        offered = elements.len(),
        changed,
        "merged array into collection"
    );
    Ok(())
}

/// Copies every property, including inherited defaults, into `map`.
///
/// For each name in [`Properties::property_names`] the text lookup through
/// the defaults chain is used. When it yields no text, the raw value from
/// the primary table is used instead. A name that only carries a non-text
/// value somewhere in the defaults chain has neither, and is skipped.
///
/// # Errors
///
/// - [`CollectionError::InvalidArgument`] if `map` is `None`.
/// - Any error from the target's [`MutableMapping::try_put`].
///
/// # Examples
///
/// ```rust
/// use nullsafe_collections::adapt::{merge_properties_into, Properties, PropertyValue};
/// use std::collections::HashMap;
///
/// let mut defaults = Properties::new();
/// defaults.set_property("typ", "JWT");
/// let mut header = Properties::with_defaults(defaults);
/// header.insert("exp", 60_i64);
///
/// let mut target: HashMap<String, PropertyValue> = HashMap::new();
/// merge_properties_into(Some(&header), Some(&mut target)).unwrap();
///
/// assert_eq!(target.get("typ"), Some(&PropertyValue::from("JWT")));
/// assert_eq!(target.get("exp"), Some(&PropertyValue::Integer(60)));
/// ```
pub fn merge_properties_into<M>(
    properties: Option<&Properties>,
    map: Option<&mut M>,
) -> Result<(), CollectionError>
where
    M: MutableMapping<String, PropertyValue>,
{
    let map = map.ok_or(CollectionError::invalid_argument("map"))?;
    let Some(properties) = properties else {
        return Ok(());
    };

    let mut names = properties.property_names();
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables, unused_assignments))]
    let (mut copied, mut skipped) = (0_usize, 0_usize);
    while let Some(name) = names.next_element() {
        let value = properties
            .get_property(name)
            .map(PropertyValue::from)
            .or_else(|| properties.get(name).cloned());
        match value {
            Some(value) => {
                map.try_put(name.to_owned(), value)?;
                copied += 1;
            }
            None => skipped += 1,
        }
    }
    crate::trace_event!(copied, skipped, "merged properties into map");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::{BTreeMap, HashSet};

    #[rstest]
    fn test_merge_array_into_set_deduplicates() {
        let letters: Vec<char> = "abca".chars().collect();
        let mut target: HashSet<char> = HashSet::new();
        merge_array_into(Some(&letters), Some(&mut target)).unwrap();
        assert_eq!(target.len(), 3);
    }

    #[rstest]
    fn test_merge_array_into_absent_target_is_invalid() {
        let result = merge_array_into::<i32, _, Vec<i32>>(Some(&[1, 2]), None);
        assert_eq!(result, Err(CollectionError::invalid_argument("collection")));
    }

    #[rstest]
    fn test_merge_properties_into_absent_target_is_invalid() {
        let properties = Properties::new();
        let result = merge_properties_into::<BTreeMap<String, PropertyValue>>(Some(&properties), None);
        assert_eq!(result, Err(CollectionError::invalid_argument("map")));
    }

    #[rstest]
    fn test_merge_properties_into_absent_source_is_noop() {
        let mut target = BTreeMap::new();
        target.insert("kept".to_string(), PropertyValue::from(true));
        merge_properties_into(None, Some(&mut target)).unwrap();
        assert_eq!(target.len(), 1);
    }

    #[rstest]
    fn test_merge_properties_prefers_text_through_defaults() {
        let mut defaults = Properties::new();
        defaults.set_property("alg", "none");
        let mut header = Properties::with_defaults(defaults);
        header.insert("alg", 256_i64);

        let mut target = BTreeMap::new();
        merge_properties_into(Some(&header), Some(&mut target)).unwrap();
        assert_eq!(target.get("alg"), Some(&PropertyValue::from("none")));
    }

    #[rstest]
    fn test_merge_properties_falls_back_to_primary_raw_value() {
        let mut header = Properties::new();
        header.insert("exp", 256_i64);

        let mut target = BTreeMap::new();
        merge_properties_into(Some(&header), Some(&mut target)).unwrap();
        assert_eq!(target.get("exp"), Some(&PropertyValue::Integer(256)));
    }

    #[rstest]
    fn test_merge_properties_skips_non_text_default() {
        let mut defaults = Properties::new();
        defaults.insert("exp", 60_i64);
        defaults.set_property("typ", "JWT");
        let header = Properties::with_defaults(defaults);

        let mut target = BTreeMap::new();
        merge_properties_into(Some(&header), Some(&mut target)).unwrap();
        assert_eq!(target.len(), 1);
        assert_eq!(target.get("typ"), Some(&PropertyValue::from("JWT")));
        assert!(!target.contains_key("exp"));
    }
}
