//! Fuzzy completion: edit-distance filtering over prefix walks

use serde::Serialize;

use crate::tree::{RadixTree, Walk};

/// A fuzzy completion candidate
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    /// Edit distance from the query that produced it
    pub distance: usize,
}

/// Classic dynamic-programming edit distance
///
/// Insertion, deletion, and substitution each cost 1, computed over a
/// full `(len(a)+1) × (len(b)+1)` table of unit-level comparisons. Pure
/// function, O(n·m) time and space.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = table[i - 1][j - 1] + usize::from(a[i - 1] != b[j - 1]);
            let deletion = table[i - 1][j] + 1;
            let insertion = table[i][j - 1] + 1;
            table[i][j] = substitution.min(deletion).min(insertion);
        }
    }

    table[a.len()][b.len()]
}

/// Fuzzy lookup over a radix tree
///
/// Walks the subtree of keys sharing the query as a prefix and keeps
/// those within a caller-chosen edit distance, stopping as soon as the
/// requested number of matches has been collected.
pub struct FuzzyMatcher<'a, V> {
    tree: &'a RadixTree<V>,
}

impl<'a, V> FuzzyMatcher<'a, V> {
    /// Create a matcher over the given tree
    pub fn new(tree: &'a RadixTree<V>) -> Self {
        FuzzyMatcher { tree }
    }

    /// Up to `limit` keys starting with `query` whose edit distance to it
    /// is at most `max_distance`, in walk (lexicographic) order
    pub fn suggest(&self, query: &str, max_distance: usize, limit: usize) -> Vec<Suggestion> {
        let mut results = Vec::new();
        if limit == 0 {
            return results;
        }

        self.tree.walk_prefix(query, |key, _| {
            let distance = edit_distance(query, key);
            if distance <= max_distance {
                results.push(Suggestion {
                    word: key.to_string(),
                    distance,
                });
            }
            if results.len() >= limit {
                Walk::Stop
            } else {
                Walk::Continue
            }
        });

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identity() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn test_distance_against_empty() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
    }

    #[test]
    fn test_distance_symmetry() {
        for (a, b) in [("kitten", "sitting"), ("flaw", "lawn"), ("", "x")] {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
        }
    }

    #[test]
    fn test_distance_known_values() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("cat", "cart"), 1);
        assert_eq!(edit_distance("cat", "dog"), 3);
    }

    #[test]
    fn test_distance_is_unit_level() {
        // One substituted unit, not a byte count
        assert_eq!(edit_distance("grün", "gros"), 2);
    }

    fn sample_tree() -> RadixTree<u32> {
        let mut tree = RadixTree::new();
        for (i, word) in ["apple", "apples", "applied", "apply", "banana"]
            .iter()
            .enumerate()
        {
            tree.insert(word, i as u32);
        }
        tree
    }

    #[test]
    fn test_suggest_filters_by_distance() {
        let tree = sample_tree();
        let matcher = FuzzyMatcher::new(&tree);

        let suggestions = matcher.suggest("appl", 2, 10);
        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        // "applied" is distance 3, everything else under "appl" qualifies
        assert_eq!(words, ["apple", "apples", "apply"]);
    }

    #[test]
    fn test_suggest_is_prefix_bounded() {
        let tree = sample_tree();
        let matcher = FuzzyMatcher::new(&tree);

        // "aple" is distance 1 from "apple" but shares no stored prefix
        assert!(matcher.suggest("aple", 3, 10).is_empty());
    }

    #[test]
    fn test_suggest_stops_at_limit() {
        let tree = sample_tree();
        let matcher = FuzzyMatcher::new(&tree);

        let suggestions = matcher.suggest("appl", 3, 2);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].word, "apple");
        assert_eq!(suggestions[1].word, "apples");

        assert!(matcher.suggest("appl", 3, 0).is_empty());
    }

    #[test]
    fn test_suggest_reports_distance() {
        let tree = sample_tree();
        let matcher = FuzzyMatcher::new(&tree);

        let suggestions = matcher.suggest("apple", 1, 10);
        assert_eq!(
            suggestions,
            [
                Suggestion {
                    word: "apple".to_string(),
                    distance: 0
                },
                Suggestion {
                    word: "apples".to_string(),
                    distance: 1
                },
            ]
        );
    }
}
