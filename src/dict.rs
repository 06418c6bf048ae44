//! Word-list loading for the autocomplete tree

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::tree::RadixTree;
use crate::Result;

/// Build a radix tree from a newline-delimited word list
///
/// Each non-blank line becomes one key, stored with the word itself as
/// the value; surrounding whitespace is trimmed. Duplicate lines
/// overwrite silently.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<RadixTree<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut tree = RadixTree::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        tree.insert(word, word.to_string());
    }

    Ok(tree)
}
