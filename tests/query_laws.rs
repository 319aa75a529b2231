#![cfg(feature = "query")]
//! Property-based tests for query algorithm laws.
//!
//! Each algorithm is checked against a straightforward reference
//! computation over plain standard collections.

use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::rc::Rc;

use nullsafe_collections::query::{
    contains, contains_any, find_common_element_type, find_first_match, find_value_of_type,
    has_unique_object,
};
use proptest::prelude::*;

// =============================================================================
// Contains Law
// Description: contains agrees with a linear scan
// =============================================================================

proptest! {
    #[test]
    fn prop_contains_law(
        elements in prop::collection::vec(prop::option::of(-5..5_i32), 0..20),
        probe in prop::option::of(-5..5_i32)
    ) {
        prop_assert_eq!(
            contains(Some(&elements), &probe),
            elements.iter().any(|element| *element == probe)
        );
    }
}

// =============================================================================
// Contains-Any Symmetry Law
// Description: Two collections intersect regardless of which one is the source
// =============================================================================

proptest! {
    #[test]
    fn prop_contains_any_symmetry_law(
        left in prop::collection::hash_set(-20..20_i32, 0..10),
        right in prop::collection::hash_set(-20..20_i32, 0..10)
    ) {
        let left_first = contains_any(Some(&left), Some(right.iter().copied()));
        let right_first = contains_any(Some(&right), Some(left.iter().copied()));
        prop_assert_eq!(left_first, right_first);
        prop_assert_eq!(left_first, !left.is_disjoint(&right));
    }
}

// =============================================================================
// First-Match Law
// Description: The first match is the earliest candidate contained in the source
// =============================================================================

proptest! {
    #[test]
    fn prop_find_first_match_law(
        source in prop::collection::hash_set(-20..20_i32, 0..10),
        candidates in prop::collection::vec(-20..20_i32, 0..10)
    ) {
        let expected = candidates.iter().copied().find(|candidate| source.contains(candidate));
        prop_assert_eq!(find_first_match(Some(&source), Some(candidates)), expected);
    }
}

// =============================================================================
// Absent Source Law
// Description: An absent source never matches any candidate
// =============================================================================

proptest! {
    #[test]
    fn prop_absent_source_law(candidates in prop::collection::vec(any::<i32>(), 0..10)) {
        prop_assert!(!contains_any::<HashSet<i32>, i32, _>(None, Some(candidates)));
    }
}

// =============================================================================
// Unique Object Law
// Description: Clones of one pointer are one object; fresh allocations are not
// =============================================================================

proptest! {
    #[test]
    fn prop_unique_object_law(count in 1..10_usize, value: i64) {
        let shared = Rc::new(value);
        let clones: Vec<Rc<i64>> = std::iter::repeat_with(|| Rc::clone(&shared)).take(count).collect();
        prop_assert!(has_unique_object(Some(clones)));

        let fresh: Vec<Rc<i64>> = std::iter::repeat_with(|| Rc::new(value)).take(count).collect();
        prop_assert_eq!(has_unique_object(Some(fresh)), count == 1);
    }
}

// =============================================================================
// Common Type Law
// Description: A homogeneous collection has exactly its element type in common
// =============================================================================

proptest! {
    #[test]
    fn prop_common_type_law(
        values in prop::collection::vec(any::<u32>(), 1..10),
        nulls in 0..5_usize
    ) {
        let mut elements: Vec<Option<Box<dyn Any>>> = values
            .iter()
            .map(|value| Some(Box::new(*value) as Box<dyn Any>))
            .collect();
        elements.extend(std::iter::repeat_with(|| None).take(nulls));
        prop_assert_eq!(find_common_element_type(Some(&elements)), Some(TypeId::of::<u32>()));

        elements.push(Some(Box::new(String::new())));
        prop_assert_eq!(find_common_element_type(Some(&elements)), None);
    }
}

// =============================================================================
// Unique Value Law
// Description: A typed value is found only when exactly one element has that type
// =============================================================================

proptest! {
    #[test]
    fn prop_unique_value_law(
        integers in prop::collection::vec(any::<i8>(), 0..4),
        text in "[a-z]{0,8}"
    ) {
        let mut elements: Vec<Box<dyn Any>> = vec![Box::new(text.clone())];
        elements.extend(integers.iter().map(|integer| Box::new(*integer) as Box<dyn Any>));

        prop_assert_eq!(find_value_of_type::<String, _, _>(Some(&elements)), Some(&text));
        let expected = (integers.len() == 1).then(|| &integers[0]);
        prop_assert_eq!(find_value_of_type::<i8, _, _>(Some(&elements)), expected);
    }
}
