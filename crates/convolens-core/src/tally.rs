//! Insertion-ordered category counting and rounding helpers

use std::collections::HashMap;

/// Label -> count, remembering the order labels were first seen
#[derive(Debug, Clone, Default)]
pub struct Tally {
    order: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.order[i].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.order.len());
                self.order.push((label.to_string(), 1));
            }
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.index.get(label).map(|&i| self.order[i].1).unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.order.iter().map(|(_, c)| c).sum()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// The first label to reach the maximum count
    pub fn leader(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (label, count) in self.iter() {
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((label, count));
            }
        }
        best
    }

    /// Entries sorted descending by count; ties keep first-occurrence order
    pub fn ranked(&self) -> Vec<(String, usize)> {
        let mut entries = self.order.clone();
        entries.sort_by_key(|(_, c)| std::cmp::Reverse(*c));
        entries
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for label in iter {
            tally.add(label);
        }
        tally
    }
}

/// `part / whole * 100`, rounded to one decimal. `None` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(round_to(part as f64 / whole as f64 * 100.0, 1))
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_in_order() {
        let tally: Tally = ["b", "a", "b", "c", "a", "b"].into_iter().collect();
        let entries: Vec<_> = tally.iter().collect();
        assert_eq!(entries, vec![("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(tally.total(), 6);
        assert_eq!(tally.get("a"), 2);
        assert_eq!(tally.get("missing"), 0);
    }

    #[test]
    fn test_ranked_is_stable() {
        let tally: Tally = ["x", "y", "z", "z"].into_iter().collect();
        let ranked = tally.ranked();
        assert_eq!(ranked[0], ("z".to_string(), 2));
        assert_eq!(ranked[1], ("x".to_string(), 1));
        assert_eq!(ranked[2], ("y".to_string(), 1));
    }

    #[test]
    fn test_leader_first_to_max() {
        let tally: Tally = ["a", "b", "b", "a"].into_iter().collect();
        assert_eq!(tally.leader(), Some(("a", 2)));
        assert_eq!(Tally::new().leader(), None);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(2, 3), Some(66.7));
        assert_eq!(percentage(1, 8), Some(12.5));
        assert_eq!(percentage(0, 5), Some(0.0));
        assert_eq!(percentage(1, 0), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.499, 2), 2.5);
        assert_eq!(round_to(66.666, 1), 66.7);
    }
}
