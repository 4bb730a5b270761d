// src/core/count_dictionary.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prime factor → exponent, iterated in ascending prime order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountDictionary(BTreeMap<i64, u32>);

impl CountDictionary {
    pub fn new() -> Self {
        CountDictionary(BTreeMap::new())
    }

    pub fn add(&mut self, key: i64) {
        self.add_safe(key, 1);
    }

    fn add_safe(&mut self, key: i64, value: u32) {
        let entry = self.0.entry(key).or_insert(0);
        *entry += value;
    }

    pub fn combine(&mut self, other: &CountDictionary) {
        for (&key, &value) in &other.0 {
            self.add_safe(key, value);
        }
    }

    pub fn get(&self, key: i64) -> Option<u32> {
        self.0.get(&key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        self.0.iter().map(|(&key, &value)| (key, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Product of `key^value` over all entries.
    pub fn product(&self) -> i64 {
        self.iter().map(|(key, value)| key.pow(value)).product()
    }

    pub fn format_string_as_factorization(&self) -> String {
        let factors: Vec<String> = self.0.iter().map(|(key, value)| format!("{}^{}", key, value)).collect();
        format!(" -> {{\t{}\t}};", factors.join(" * "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_counts_multiplicity() {
        let mut dict = CountDictionary::new();
        dict.add(3);
        dict.add(2);
        dict.add(3);
        assert_eq!(dict.get(3), Some(2));
        assert_eq!(dict.get(2), Some(1));
        assert_eq!(dict.get(5), None);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec![(2, 1), (3, 2)]);
    }

    #[test]
    fn test_combine_and_product() {
        let mut left = CountDictionary::new();
        left.add(2);
        let mut right = CountDictionary::new();
        right.add(2);
        right.add(5);
        left.combine(&right);
        assert_eq!(left.product(), 20);
        assert_eq!(CountDictionary::new().product(), 1);
    }

    #[test]
    fn test_format_string_as_factorization() {
        let mut dict = CountDictionary::new();
        dict.add(2);
        dict.add(2);
        dict.add(7);
        assert_eq!(dict.format_string_as_factorization(), " -> {\t2^2 * 7^1\t};");
    }
}
