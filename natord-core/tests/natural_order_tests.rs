//! Integration tests for natural order comparison through the public API

use natord_core::{
    Config, FoldingCollator, NaturalOrderComparator, NumericProfile, Strength,
};
use std::cmp::Ordering;
use std::sync::Arc;

fn english() -> NaturalOrderComparator {
    NaturalOrderComparator::for_locale("en").unwrap()
}

#[test]
fn test_humbug_ordering() {
    let comparator = english();
    let mut items = vec!["humbug 11", "humbug 1", "humbug 12", "humbug 2"];
    comparator.sort(&mut items);
    assert_eq!(items, vec!["humbug 1", "humbug 2", "humbug 11", "humbug 12"]);
}

#[test]
fn test_file_names() {
    let comparator = english();
    let mut files = vec![
        "chapter10.txt",
        "Chapter2.txt",
        "chapter1.txt",
        "chapter 1.5.txt",
        "appendix.txt",
    ];
    comparator.sort(&mut files);
    assert_eq!(
        files,
        vec![
            "appendix.txt",
            "chapter1.txt",
            "chapter 1.5.txt",
            "Chapter2.txt",
            "chapter10.txt",
        ]
    );
}

#[test]
fn test_grouped_and_ungrouped_are_equal() {
    let comparator = english();
    assert_eq!(
        comparator.compare("item 1,000,000", "item 1000000"),
        Ordering::Equal
    );
    assert_eq!(
        comparator.normalize("item 1,000,000"),
        comparator.normalize("item 1000000")
    );
}

#[test]
fn test_whitespace_tolerance() {
    let comparator = english();
    assert_eq!(comparator.compare("a   1", "a 1"), Ordering::Equal);
    assert_eq!(comparator.compare("\ta 1\n", "a 1"), Ordering::Equal);
    assert_eq!(comparator.normalize("  a   1  b "), "a 1 b");
}

#[test]
fn test_case_insensitive_normalization() {
    let comparator = english();
    assert_eq!(comparator.normalize("ABC 5"), comparator.normalize("abc 5"));
    assert_eq!(
        comparator.normalize_for_lookup("ABC 5"),
        comparator.normalize_for_lookup("abc 5")
    );
}

#[test]
fn test_numbers_beyond_machine_integers() {
    let comparator = english();
    let huge = "id 123456789012345678901234567890";
    let bigger = "id 123456789012345678901234567891";
    assert_eq!(comparator.compare(huge, bigger), Ordering::Less);
    assert_eq!(
        comparator.compare("x 0.1000000000000000000001", "x 0.1"),
        Ordering::Greater
    );
}

#[test]
fn test_inputs_without_numbers() {
    let comparator = english();
    assert_eq!(comparator.compare("apple", "Banana"), Ordering::Less);
    assert_eq!(comparator.compare("", ""), Ordering::Equal);
    assert_eq!(comparator.compare("", "0"), Ordering::Less);
    assert_eq!(comparator.normalize("Plain Text"), "plain text");
}

#[test]
fn test_only_numbers() {
    let comparator = english();
    let mut values = vec!["10", "-2", "1.5", "0", "-10.25"];
    comparator.sort(&mut values);
    assert_eq!(values, vec!["-10.25", "-2", "0", "1.5", "10"]);
}

#[test]
fn test_prefix_text_outranks_number() {
    let comparator = english();
    assert_eq!(comparator.compare("b 1", "a 1000"), Ordering::Greater);
    assert_eq!(comparator.compare("x", "x 1"), Ordering::Less);
}

#[test]
fn test_malformed_profile_does_not_panic() {
    // Every numeric symbol is the same dash
    let comparator = NaturalOrderComparator::with_profile(
        NumericProfile::new(Some('-'), Some('-'), Some('-')),
        Arc::new(FoldingCollator::default()),
    )
    .unwrap();

    let inputs = ["a -5", "a -5-5", "-", "a 5-", "5--5", ""];
    for lhs in inputs {
        for rhs in inputs {
            let forward = comparator.compare(lhs, rhs);
            assert_eq!(forward, comparator.compare(rhs, lhs).reverse());
            let _ = comparator.normalize(lhs);
            let _ = comparator.normalize_for_lookup(lhs);
        }
    }
}

#[test]
fn test_strength_levels() {
    let with = |strength| {
        let config = Config::builder()
            .locale("en")
            .strength(strength)
            .build()
            .unwrap();
        NaturalOrderComparator::with_config(&config).unwrap()
    };

    let primary = with(Strength::Primary);
    assert_eq!(primary.compare("Résumé 1", "resume 1"), Ordering::Equal);

    let secondary = with(Strength::Secondary);
    assert_eq!(secondary.compare("RESUME 1", "resume 1"), Ordering::Equal);
    assert_ne!(secondary.compare("résumé 1", "resume 1"), Ordering::Equal);

    let tertiary = with(Strength::Tertiary);
    assert_ne!(tertiary.compare("Resume 1", "resume 1"), Ordering::Equal);

    // Precomposed and decomposed forms
    let identical = with(Strength::Identical);
    assert_eq!(tertiary.compare("caf\u{e9} 1", "cafe\u{301} 1"), Ordering::Equal);
    assert_ne!(
        identical.compare("caf\u{e9} 1", "cafe\u{301} 1"),
        Ordering::Equal
    );
}

#[test]
fn test_unique_lines() {
    let comparator = english();
    let mut lines = vec!["v 1.0", "V 1", "v 01", "v 2", "v 1.5"];
    comparator.sort(&mut lines);
    comparator.dedup_sorted(&mut lines);
    assert_eq!(lines, vec!["v 1.0", "v 1.5", "v 2"]);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_sort_is_stable() {
    let comparator = english();
    let mut lines: Vec<String> = (0..2000)
        .map(|i| {
            if i % 2 == 0 {
                format!("row {}", i % 100)
            } else {
                format!("ROW {}", i % 100)
            }
        })
        .collect();
    let mut expected = lines.clone();
    comparator.sort(&mut expected);
    comparator.par_sort(&mut lines);
    assert_eq!(lines, expected);
}

#[test]
fn test_shared_across_threads() {
    let comparator = Arc::new(english());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let comparator = Arc::clone(&comparator);
            std::thread::spawn(move || {
                let lhs = format!("job {i}");
                let rhs = format!("job {}", i + 10);
                comparator.compare(&lhs, &rhs)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ordering::Less);
    }
}
