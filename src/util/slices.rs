//! Order-preserving set operations over slices.
//!
//! Every operation keeps the order of its first argument and returns a
//! fresh `Vec`. Empty inputs give empty outputs.

use std::collections::HashSet;
use std::hash::Hash;

/// Elements of `a` that also occur in `b`, duplicates of `a` included.
pub fn intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let other: HashSet<&T> = b.iter().collect();
    a.iter().filter(|x| other.contains(x)).cloned().collect()
}

/// Each distinct element once, in order of first occurrence.
pub fn remove_duplicates<T: Eq + Hash + Clone>(a: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(a.len());
    a.iter().filter(|x| seen.insert(*x)).cloned().collect()
}

/// Elements of `a` that do not occur in `b`.
pub fn diff<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let other: HashSet<&T> = b.iter().collect();
    a.iter().filter(|x| !other.contains(x)).cloned().collect()
}

/// Copy of `a` without the first occurrence of `value`.
pub fn remove_one<T: PartialEq + Clone>(value: &T, a: &[T]) -> Vec<T> {
    let mut out = a.to_vec();
    if let Some(pos) = out.iter().position(|x| x == value) {
        out.remove(pos);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_intersection() {
        let a = strings(&["abc", "def", "ghi"]);

        assert!(intersection(&a, &strings(&["jkl"])).is_empty());
        assert_eq!(intersection(&a, &strings(&["def"])), strings(&["def"]));
    }

    #[test]
    fn test_intersection_keeps_order_and_duplicates() {
        let a = strings(&["c", "a", "b", "a"]);
        let b = strings(&["a", "c"]);
        assert_eq!(intersection(&a, &b), strings(&["c", "a", "a"]));
    }

    #[test]
    fn test_remove_duplicates() {
        let a = strings(&["a", "b", "a", "a", "b", "c", "a"]);
        let result = remove_duplicates(&a);

        assert_eq!(result.len(), 3);
        assert_eq!(result, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_diff() {
        let a = strings(&["one", "two", "three", "four", "five", "six"]);
        let b = strings(&["two", "seven", "four", "six"]);
        assert_eq!(diff(&a, &b), strings(&["one", "three", "five"]));
    }

    #[test]
    fn test_remove_one() {
        let a = strings(&["one", "two", "three", "four", "five", "six"]);
        assert_eq!(
            remove_one(&"four".to_string(), &a),
            strings(&["one", "two", "three", "five", "six"])
        );
    }

    #[test]
    fn test_remove_one_first_occurrence_only() {
        let a = strings(&["x", "y", "x"]);
        assert_eq!(remove_one(&"x".to_string(), &a), strings(&["y", "x"]));
        assert_eq!(remove_one(&"z".to_string(), &a), a);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Vec<String> = Vec::new();
        let a = strings(&["a"]);

        assert!(intersection(&empty, &a).is_empty());
        assert!(intersection(&a, &empty).is_empty());
        assert!(remove_duplicates(&empty).is_empty());
        assert_eq!(diff(&a, &empty), a);
        assert!(diff(&empty, &a).is_empty());
        assert!(remove_one(&"a".to_string(), &empty).is_empty());
    }
}
