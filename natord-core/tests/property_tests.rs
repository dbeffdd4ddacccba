//! Property-based tests for the comparator's algebraic guarantees

use natord_core::locale::{get_locale, list_available_locales};
use natord_core::{Config, NaturalOrderComparator, Strength};
use proptest::prelude::*;
use std::cmp::Ordering;

fn comparator(code: &str, strength: Strength) -> NaturalOrderComparator {
    let config = Config::builder()
        .locale(code)
        .strength(strength)
        .build()
        .unwrap();
    NaturalOrderComparator::with_config(&config).unwrap()
}

fn any_strength() -> impl Strategy<Value = Strength> {
    prop::sample::select(Strength::ALL.to_vec())
}

fn any_locale() -> impl Strategy<Value = &'static str> {
    prop::sample::select(list_available_locales())
}

/// Short strings dense in digits, separators and case variants
fn numeric_text() -> impl Strategy<Value = String> {
    "[aAbB1-3 ,.\u{2212}\u{00A0}-]{0,10}"
}

/// Variation of `(word, number)` pairs that must compare equal
fn spelled(parts: &[(String, u32)], shout: bool, pad: usize, zeros: usize) -> String {
    let gap = " ".repeat(pad + 1);
    let mut out = " ".repeat(pad);
    for (word, number) in parts {
        let word = if shout {
            word.to_uppercase()
        } else {
            word.clone()
        };
        out.push_str(&word);
        out.push_str(&gap);
        out.push_str(&"0".repeat(zeros));
        out.push_str(&number.to_string());
        out.push_str(&gap);
    }
    out
}

proptest! {
    #[test]
    fn compare_is_reflexive(
        text in any::<String>(),
        code in any_locale(),
        strength in any_strength(),
    ) {
        let cmp = comparator(code, strength);
        prop_assert_eq!(cmp.compare(&text, &text), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(
        lhs in numeric_text(),
        rhs in numeric_text(),
        code in any_locale(),
        strength in any_strength(),
    ) {
        let cmp = comparator(code, strength);
        prop_assert_eq!(cmp.compare(&lhs, &rhs), cmp.compare(&rhs, &lhs).reverse());
    }

    #[test]
    fn equal_pairs_share_normal_forms(
        lhs in numeric_text(),
        rhs in numeric_text(),
        code in any_locale(),
        strength in any_strength(),
    ) {
        let cmp = comparator(code, strength);
        if cmp.compare(&lhs, &rhs) == Ordering::Equal {
            prop_assert_eq!(cmp.normalize(&lhs), cmp.normalize(&rhs));
            prop_assert_eq!(cmp.normalize_for_lookup(&lhs), cmp.normalize_for_lookup(&rhs));
        }
    }

    #[test]
    fn spelling_variants_are_equal(
        parts in prop::collection::vec(("[a-z]{1,5}", 0u32..100_000), 1..4),
        pad in 0usize..3,
        zeros in 0usize..3,
    ) {
        let cmp = comparator("en", Strength::Secondary);
        let plain = spelled(&parts, false, 0, 0);
        let variant = spelled(&parts, true, pad, zeros);

        prop_assert_eq!(cmp.compare(&plain, &variant), Ordering::Equal);
        prop_assert_eq!(cmp.normalize(&plain), cmp.normalize(&variant));
        prop_assert_eq!(cmp.lookup_hash(&plain), cmp.lookup_hash(&variant));
    }

    #[test]
    fn numbers_compare_by_value(
        a in -1_000_000_000i64..1_000_000_000,
        b in -1_000_000_000i64..1_000_000_000,
        code in any_locale(),
    ) {
        let config = get_locale(code).unwrap();
        let profile = config.profile().unwrap();
        let cmp = NaturalOrderComparator::from_locale_config(config).unwrap();

        let render = |value: i64| {
            let digits = value.unsigned_abs().to_string();
            let mut out = String::from("row ");
            if value < 0 {
                out.push(profile.minus_sign.unwrap_or('-'));
            }
            out.push_str(&digits);
            out.push_str(" end");
            out
        };

        prop_assert_eq!(cmp.compare(&render(a), &render(b)), a.cmp(&b));
    }

    #[test]
    fn sort_agrees_with_compare(
        mut items in prop::collection::vec("[abAB]{1,2} [0-9]{1,4}( [abAB])?", 0..20),
    ) {
        let cmp = comparator("en", Strength::Secondary);
        cmp.sort(&mut items);
        for pair in items.windows(2) {
            prop_assert_ne!(cmp.compare(&pair[0], &pair[1]), Ordering::Greater);
        }
    }
}
