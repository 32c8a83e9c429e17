// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Nalu Probing Table through the public API.

use mauka_wordfreq_lib::data_structures::nalu_probing_table::{
    NaluProbingTable, NaluProbingTableConfig, ProbingMethod,
};
use mauka_wordfreq_lib::pipeline::{count_words, write_output, OutputOptions};
use mauka_wordfreq_lib::config::report::ReportFormat;
use mauka_wordfreq_lib::utils::next_prime;

const TEXT: &str = "It was the best of times, it was the worst of times, \
                    it was the age of wisdom, it was the age of foolishness";

fn counted(method: ProbingMethod, capacity: usize) -> NaluProbingTable {
    let config = NaluProbingTableConfig::new()
        .with_capacity(capacity)
        .with_method(method);
    let mut table = NaluProbingTable::with_config(&config).unwrap();
    count_words(&mut table, TEXT.as_bytes()).unwrap();
    table
}

#[test]
fn test_frequencies_agree_across_methods() {
    let linear = counted(ProbingMethod::Linear, 113);
    let double = counted(ProbingMethod::Double, 113);

    for word in ["it", "was", "the", "of", "times", "age", "best", "wisdom"] {
        assert_eq!(linear.search(word), double.search(word), "{word}");
    }
    assert_eq!(linear.search("it"), 4);
    assert_eq!(linear.search("times"), 2);
    assert_eq!(linear.search("dickens"), 0);
    assert_eq!(linear.len(), double.len());
}

#[test]
fn test_frequency_listing_covers_every_word() {
    let table = counted(ProbingMethod::Double, 31);
    let options = OutputOptions {
        print_table: false,
        print_stats: false,
        snapshots: 10,
        format: ReportFormat::Table,
    };

    let (mut out, mut diag) = (Vec::new(), Vec::new());
    write_output(&table, &options, &mut out, &mut diag).unwrap();
    let text = String::from_utf8(out).unwrap();

    let total: usize = text
        .lines()
        .map(|line| {
            let (frequency, word) = line.split_once("    ").unwrap();
            assert_eq!(table.search(word), frequency.parse::<usize>().unwrap());
            table.search(word)
        })
        .sum();
    assert_eq!(total, TEXT.split_whitespace().count());
    assert_eq!(text.lines().count(), table.len());
}

#[test]
fn test_stats_report_rows() {
    // 10 distinct words in 13 slots: the 90% and 100% levels are never reached.
    let table = counted(ProbingMethod::Linear, next_prime(12).unwrap());
    assert_eq!(table.capacity(), 13);
    assert_eq!(table.len(), 10);

    let mut out = Vec::new();
    table.print_stats(&mut out, 10).unwrap();
    let text = String::from_utf8(out).unwrap();

    let rows: Vec<&str> = text
        .lines()
        .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .collect();
    let levels: Vec<usize> = rows
        .iter()
        .map(|row| row.split_whitespace().next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(levels, vec![10, 20, 30, 40, 50, 60, 70, 80]);
}
