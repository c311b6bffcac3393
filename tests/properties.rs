//! Property-based tests for the report pipeline.
//!
//! Uses proptest to check filtering, ordering, aggregation and redaction
//! across many generated inputs.

use proptest::prelude::*;
use rust_decimal::Decimal;

use salary_reporter::models::EmployeeRecord;
use salary_reporter::pipeline::{
    SortDirection, build_table, filter_active, redact_text, sort_by_last_name, total_pay,
};
use salary_reporter::render::render_csv;

// ============================================================================
// Generators
// ============================================================================

fn ssn() -> impl Strategy<Value = String> {
    (0u32..1000, 0u32..100, 0u32..10000)
        .prop_map(|(a, b, c)| format!("{:03}-{:02}-{:04}", a, b, c))
}

fn amount() -> impl Strategy<Value = Decimal> {
    // Cents up to ten million, positive or negative.
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn record() -> impl Strategy<Value = EmployeeRecord> {
    (
        "[A-Za-z]{1,8}",
        // A small surname alphabet makes ties common.
        "[A-D][a-c]{0,2}",
        any::<bool>(),
        ssn(),
        prop::collection::vec(amount(), 0..6),
    )
        .prop_map(
            |(first_name, last_name, active, social_security, pay)| EmployeeRecord {
                first_name,
                last_name,
                active,
                social_security,
                pay,
            },
        )
}

fn records() -> impl Strategy<Value = Vec<EmployeeRecord>> {
    prop::collection::vec(record(), 0..25)
}

/// Free text with SSN-shaped tokens mixed into ordinary words.
fn text_with_ssns() -> impl Strategy<Value = (String, Vec<String>)> {
    prop::collection::vec(
        prop_oneof![
            ssn().prop_map(|s| (s.clone(), Some(s))),
            "[a-z ,.:\"{}]{1,10}".prop_map(|w| (w, None)),
            "[0-9]{1,6}".prop_map(|w| (w, None)),
        ],
        0..12,
    )
    .prop_map(|tokens| {
        let ssns = tokens.iter().filter_map(|(_, s)| s.clone()).collect();
        let text = tokens
            .into_iter()
            .map(|(token, _)| token)
            .collect::<Vec<_>>()
            .join(" ");
        (text, ssns)
    })
}

// ============================================================================
// Filter properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Filter keeps exactly the active records, in their original order.
    #[test]
    fn filter_is_ordered_active_subset(input in records()) {
        let expected: Vec<EmployeeRecord> =
            input.iter().filter(|r| r.active).cloned().collect();
        let filtered = filter_active(input);

        prop_assert!(filtered.iter().all(|r| r.active));
        prop_assert_eq!(filtered, expected);
    }
}

// ============================================================================
// Sort properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Ascending output is non-decreasing by surname.
    #[test]
    fn ascending_sort_is_non_decreasing(input in records()) {
        let sorted = sort_by_last_name(input, SortDirection::Ascending);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].last_name <= pair[1].last_name);
        }
    }

    /// Descending output is non-increasing by surname.
    #[test]
    fn descending_sort_is_non_increasing(input in records()) {
        let sorted = sort_by_last_name(input, SortDirection::Descending);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].last_name >= pair[1].last_name);
        }
    }

    /// Records with equal surnames keep their input order in both directions.
    #[test]
    fn sort_is_stable(input in records()) {
        // Tag each record with its input position through the first name.
        let tagged: Vec<EmployeeRecord> = input
            .into_iter()
            .enumerate()
            .map(|(i, mut r)| { r.first_name = format!("{:04}", i); r })
            .collect();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort_by_last_name(tagged.clone(), direction);
            for pair in sorted.windows(2) {
                if pair[0].last_name == pair[1].last_name {
                    prop_assert!(pair[0].first_name < pair[1].first_name);
                }
            }
        }
    }

    /// Sorting is a permutation of the input.
    #[test]
    fn sort_preserves_records(input in records()) {
        let mut expected: Vec<String> = input.iter().map(|r| format!("{:?}", r)).collect();
        let mut actual: Vec<String> = sort_by_last_name(input, SortDirection::Ascending)
            .iter()
            .map(|r| format!("{:?}", r))
            .collect();
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }
}

// ============================================================================
// Aggregation properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// total_pay equals a plain fold over the amounts.
    #[test]
    fn total_pay_is_sum(pay in prop::collection::vec(amount(), 0..20)) {
        let expected = pay.iter().fold(Decimal::ZERO, |acc, x| acc + *x);
        prop_assert_eq!(total_pay(&pay), Some(expected));
    }

    /// Splitting the pay periods does not change the total.
    #[test]
    fn total_pay_is_additive(
        a in prop::collection::vec(amount(), 0..10),
        b in prop::collection::vec(amount(), 0..10),
    ) {
        let joined: Vec<Decimal> = a.iter().chain(b.iter()).copied().collect();
        let split = total_pay(&a).zip(total_pay(&b)).map(|(x, y)| x + y);
        prop_assert_eq!(total_pay(&joined), split);
    }
}

// ============================================================================
// Redaction properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Redaction is idempotent on arbitrary text.
    #[test]
    fn redaction_is_idempotent(text in "[0-9x -]{0,40}") {
        let once = redact_text(&text).into_owned();
        let twice = redact_text(&once).into_owned();
        prop_assert_eq!(twice, once);
    }

    /// Every SSN loses its first five digits and keeps its last four.
    #[test]
    fn redaction_masks_first_five_keeps_last_four((text, ssns) in text_with_ssns()) {
        let redacted = redact_text(&text).into_owned();
        for ssn in &ssns {
            prop_assert!(!redacted.contains(ssn.as_str()));
            let masked = format!("xxx-xx-{}", &ssn[7..]);
            prop_assert!(redacted.contains(&masked), "{} missing from {}", masked, redacted);
        }
    }

    /// Redaction never changes text without an SSN-shaped substring.
    #[test]
    fn redaction_leaves_plain_text_alone(text in "[A-Za-z0-9 ,.]{0,40}") {
        prop_assert_eq!(redact_text(&text).into_owned(), text);
    }
}

// ============================================================================
// Table properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every row is as wide as the header and carries a masked SSN.
    #[test]
    fn table_rows_are_uniform_and_redacted(input in records()) {
        let active = sort_by_last_name(filter_active(input.clone()), SortDirection::Ascending);
        let table = build_table(&active).unwrap();

        prop_assert_eq!(table.len(), input.iter().filter(|r| r.active).count());
        for row in table.rows() {
            prop_assert_eq!(row.len(), table.header().len());
            let ssn = row[3].to_string();
            prop_assert!(ssn.starts_with("xxx-xx-") && ssn.len() == 11, "bad ssn {}", ssn);
        }
        prop_assert_eq!(render_csv(&table).lines().count(), table.len() + 1);
    }
}
