mod common;

use common::record;
use repo_stats::aggregator::{aggregate, language_distribution, sort_by_stars, summarize};
use repo_stats::models::RepositoryRecord;

fn example_records() -> Vec<RepositoryRecord> {
    vec![
        record("a", Some("Go"), 5),
        record("b", Some("Go"), 10),
        record("c", None, 10),
    ]
}

#[test]
fn test_aggregate_example() {
    let aggregation = aggregate(example_records());

    let order: Vec<(&str, u32)> = aggregation
        .repositories
        .iter()
        .map(|r| (r.name.as_str(), r.stars))
        .collect();
    assert_eq!(order, vec![("b", 10), ("c", 10), ("a", 5)]);

    assert_eq!(aggregation.summary.total_repositories, 3);
    assert_eq!(aggregation.summary.total_stars, 25);
    assert!((aggregation.summary.average_stars - 25.0 / 3.0).abs() < 1e-12);

    assert_eq!(aggregation.languages.count("Go"), 2);
    assert_eq!(aggregation.languages.count("None"), 1);
    assert_eq!(format!("{:.2}", aggregation.languages.percentage("Go")), "66.67");
    assert_eq!(format!("{:.2}", aggregation.languages.percentage("None")), "33.33");
}

#[test]
fn test_sort_is_stable_for_equal_stars() {
    let records = vec![
        record("first", Some("Rust"), 3),
        record("second", Some("Go"), 7),
        record("third", Some("C"), 3),
        record("fourth", Some("Zig"), 7),
        record("fifth", Some("Rust"), 3),
    ];

    let sorted = sort_by_stars(records.clone());
    let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["second", "fourth", "first", "third", "fifth"]);

    // Permutation of the input
    assert_eq!(sorted.len(), records.len());
    for original in &records {
        assert!(sorted.contains(original));
    }
    assert!(sorted.windows(2).all(|w| w[0].stars >= w[1].stars));
}

#[test]
fn test_no_alphabetical_tie_break() {
    let sorted = sort_by_stars(vec![record("zeta", None, 1), record("alpha", None, 1)]);
    assert_eq!(sorted[0].name, "zeta");
    assert_eq!(sorted[1].name, "alpha");
}

#[test]
fn test_totals_do_not_depend_on_order() {
    let records = example_records();
    let mut reversed = records.clone();
    reversed.reverse();

    assert_eq!(summarize(&records), summarize(&reversed));
    assert_eq!(summarize(&sort_by_stars(records.clone())).total_stars, 25);
}

#[test]
fn test_empty_collection_has_zero_average() {
    let aggregation = aggregate(Vec::new());

    assert!(aggregation.repositories.is_empty());
    assert_eq!(aggregation.summary.total_repositories, 0);
    assert_eq!(aggregation.summary.total_stars, 0);
    assert_eq!(aggregation.summary.average_stars, 0.0);
    assert!(aggregation.languages.shares().is_empty());
    assert_eq!(aggregation.languages.percentage("Rust"), 0.0);
}

#[test]
fn test_average_times_count_matches_total() {
    let records: Vec<RepositoryRecord> = (0..7)
        .map(|i| record(&format!("repo-{}", i), Some("Rust"), i * 13 + 1))
        .collect();
    let summary = summarize(&records);

    let expected: u64 = records.iter().map(|r| u64::from(r.stars)).sum();
    assert_eq!(summary.total_stars, expected);
    assert!((summary.average_stars * summary.total_repositories as f64 - expected as f64).abs() < 1e-9);
}

#[test]
fn test_total_stars_does_not_overflow() {
    let records = vec![record("huge", None, u32::MAX), record("huger", None, u32::MAX)];
    assert_eq!(summarize(&records).total_stars, 2 * u64::from(u32::MAX));
}

#[test]
fn test_language_counts_and_percentages_add_up() {
    let records = vec![
        record("a", Some("Rust"), 1),
        record("b", Some("Go"), 2),
        record("c", Some("Rust"), 3),
        record("d", None, 4),
        record("e", Some("Python"), 5),
        record("f", Some("Rust"), 6),
    ];
    let languages = language_distribution(&records);

    let shares = languages.shares();
    let total_count: usize = shares.iter().map(|s| s.count).sum();
    let total_percentage: f64 = shares.iter().map(|s| s.percentage).sum();

    assert_eq!(total_count, records.len());
    assert!((total_percentage - 100.0).abs() < 1e-9);
    assert_eq!(shares.len(), 4);
    assert_eq!(shares[0].language, "Rust");
    assert_eq!(shares[0].count, 3);
}

#[test]
fn test_language_grouping_is_exact() {
    let records = vec![record("a", Some("rust"), 1), record("b", Some("Rust"), 1)];
    let languages = language_distribution(&records);

    assert_eq!(languages.count("rust"), 1);
    assert_eq!(languages.count("Rust"), 1);
    assert_eq!(languages.percentage("Rust"), 50.0);
}
