//! Shannon-Fano code construction.
//!
//! The frequency list is sorted by descending count and split recursively
//! into two contiguous windows of near-equal weight. Every symbol in the
//! left window gets a `0` appended to its code, every symbol in the right
//! window a `1`.
//!
//! ## Split rule
//!
//! The left window greedily takes the longest prefix whose weight does not
//! exceed half the window weight (integer halving). If that prefix is empty
//! it is widened to one entry; if it covers the whole window it is narrowed
//! by one entry. Both windows are therefore non-empty and strictly smaller
//! than their parent, which bounds the recursion depth (and the longest
//! code) by the number of symbols minus one.
//!
//! ## Ties
//!
//! The sort is stable: symbols with equal counts stay in first-seen order.
//! The decoder never re-runs this construction, it reads the table stored
//! in the archive, so the tie order only affects which of two equally
//! frequent symbols gets the shorter code.

use crate::code::CodeTable;
use crate::frequency::{FrequencyEntry, FrequencyTable};
use std::ops::Range;

/// Build the Shannon-Fano code table for `frequencies`.
///
/// The table has exactly one entry per distinct symbol. With at most one
/// distinct symbol the lone entry gets the empty code.
pub fn build_code_table(frequencies: &FrequencyTable) -> CodeTable {
    let sorted = frequencies.sorted_desc();
    let mut table = CodeTable::new();
    for entry in &sorted {
        table.entry(entry.symbol);
    }

    if sorted.len() > 1 {
        let total = sorted.iter().map(|e| e.count).sum();
        split(&sorted, 0..sorted.len(), total, &mut table);
    }

    log::debug!(
        "built Shannon-Fano table: {} symbols, {} input bytes",
        table.len(),
        frequencies.total()
    );
    table
}

/// Assign the next bit to every symbol in `range` and recurse.
fn split(sorted: &[FrequencyEntry], range: Range<usize>, weight: u64, table: &mut CodeTable) {
    let window = &sorted[range.clone()];
    if window.len() <= 1 {
        return;
    }

    let at = split_point(window, weight);
    let left_weight: u64 = window[..at].iter().map(|e| e.count).sum();

    for entry in &window[..at] {
        table.entry(entry.symbol).push(false);
    }
    for entry in &window[at..] {
        table.entry(entry.symbol).push(true);
    }

    let mid = range.start + at;
    split(sorted, range.start..mid, left_weight, table);
    split(sorted, mid..range.end, weight - left_weight, table);
}

/// Index of the first entry of the right window.
fn split_point(window: &[FrequencyEntry], weight: u64) -> usize {
    let half = weight / 2;
    let mut running = 0u64;
    let mut at = 0;
    while at < window.len() && running + window[at].count <= half {
        running += window[at].count;
        at += 1;
    }
    at.clamp(1, window.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(table: &CodeTable, symbol: u8) -> String {
        table.get(symbol).map(|c| c.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_empty_frequencies() {
        let table = build_code_table(&FrequencyTable::new());
        assert!(table.is_empty());
    }

    #[test]
    fn test_single_symbol_gets_empty_code() {
        let table = build_code_table(&FrequencyTable::from_bytes(&[0x41; 1000]));
        assert_eq!(table.len(), 1);
        assert!(table.get(0x41).unwrap().is_empty());
        assert_eq!(table.single_symbol(), Some(0x41));
    }

    #[test]
    fn test_two_symbols() {
        let table = build_code_table(&FrequencyTable::from_bytes(b"aaab"));
        assert_eq!(bits(&table, b'a'), "0");
        assert_eq!(bits(&table, b'b'), "1");
    }

    #[test]
    fn test_known_split() {
        let freq = FrequencyTable::from_counts([
            (b'A', 15),
            (b'B', 7),
            (b'C', 6),
            (b'D', 6),
            (b'E', 5),
        ]);
        let table = build_code_table(&freq);
        assert_eq!(bits(&table, b'A'), "0");
        assert_eq!(bits(&table, b'B'), "10");
        assert_eq!(bits(&table, b'C'), "110");
        assert_eq!(bits(&table, b'D'), "1110");
        assert_eq!(bits(&table, b'E'), "1111");
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_equal_counts_follow_first_seen_order() {
        let table = build_code_table(&FrequencyTable::from_bytes(b"ba"));
        assert_eq!(bits(&table, b'b'), "0");
        assert_eq!(bits(&table, b'a'), "1");
    }

    #[test]
    fn test_uniform_256_is_balanced() {
        let data: Vec<u8> = (0..=255).collect();
        let table = build_code_table(&FrequencyTable::from_bytes(&data));
        assert_eq!(table.len(), 256);
        assert!(table.iter().all(|(_, code)| code.len() == 8));
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_skewed_depth_is_bounded() {
        // 1, 1, 2, 4, ... forces a one-entry left window at every level.
        let mut counts = vec![(0u8, 1u64)];
        for i in 0..40u8 {
            counts.push((i + 1, 1u64 << i));
        }
        let table = build_code_table(&FrequencyTable::from_counts(counts));
        assert_eq!(table.len(), 41);
        let longest = table.iter().map(|(_, c)| c.len()).max().unwrap();
        assert_eq!(longest, 40);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_split_point_corrections() {
        let entries = |counts: &[u64]| -> Vec<FrequencyEntry> {
            counts
                .iter()
                .enumerate()
                .map(|(i, &count)| FrequencyEntry {
                    symbol: i as u8,
                    count,
                })
                .collect()
        };
        // First entry alone is past half: widened to one.
        assert_eq!(split_point(&entries(&[10, 1, 1]), 12), 1);
        // Everything fits under half: narrowed by one.
        assert_eq!(split_point(&entries(&[0, 0, 0]), 0), 2);
        assert_eq!(split_point(&entries(&[4, 3, 3, 2]), 12), 1);
        assert_eq!(split_point(&entries(&[3, 3, 3, 3]), 12), 2);
    }
}
