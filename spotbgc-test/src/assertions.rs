//! Custom assertions for testing
//!
//! Assertions over the single-line FASTA written by the filter and the
//! tab-separated target databases.

use std::collections::HashSet;

/// Header lines of a FASTA text, in order
pub fn headers(content: &str) -> Vec<&str> {
    content.lines().filter(|l| l.starts_with('>')).collect()
}

/// Assert that every header is followed by exactly one sequence line
pub fn assert_single_line_fasta(content: &str) {
    let lines: Vec<&str> = content.lines().collect();
    assert!(
        lines.len() % 2 == 0,
        "Expected header/sequence line pairs, got {} lines",
        lines.len()
    );

    for pair in lines.chunks(2) {
        assert!(pair[0].starts_with('>'), "Expected header line, got {:?}", pair[0]);
        assert!(
            !pair[1].starts_with('>'),
            "Header {:?} is missing its sequence line",
            pair[0]
        );
    }
}

/// Assert that `subset` headers appear in `full` and in the same relative order
pub fn assert_ordered_subsequence(subset: &str, full: &str) {
    let mut full_headers = headers(full).into_iter();
    for header in headers(subset) {
        assert!(
            full_headers.any(|h| h == header),
            "Header {:?} is missing or out of order",
            header
        );
    }
}

/// Assert that a tab-separated table has `expected_columns` fields on every row
pub fn assert_tsv_shape(content: &str, expected_columns: usize) {
    for (i, line) in content.lines().enumerate() {
        let columns = line.split('\t').count();
        assert_eq!(
            columns,
            expected_columns,
            "Row {} has {} columns, expected {}",
            i + 1,
            columns,
            expected_columns
        );
    }
}

/// Assert that no header appears twice
pub fn assert_unique_headers(content: &str) {
    let all = headers(content);
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(all.len(), unique.len(), "Found duplicate headers");
}
