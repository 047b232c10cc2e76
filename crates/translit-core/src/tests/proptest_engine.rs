//! Property-based tests for the engine facade.

use proptest::prelude::*;

use super::engine;
use crate::matcher::normalize;
use crate::Script;

fn arb_script() -> impl Strategy<Value = Script> {
    prop::sample::select(Script::ALL.to_vec())
}

fn arb_latin_text() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,40}"
}

fn arb_noisy_text() -> impl Strategy<Value = String> {
    "[a-z0-9!?., ]{0,40}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn transliterate_is_deterministic(text in arb_latin_text(), script in arb_script()) {
        let e = engine();
        prop_assert_eq!(e.transliterate(&text, script), e.transliterate(&text, script));
    }

    #[test]
    fn transliterate_ignores_case(text in arb_latin_text(), script in arb_script()) {
        let e = engine();
        prop_assert_eq!(
            e.transliterate(&text.to_uppercase(), script),
            e.transliterate(&text.to_lowercase(), script)
        );
    }

    #[test]
    fn word_count_is_preserved(text in arb_latin_text(), script in arb_script()) {
        let out = engine().transliterate(&text, script);
        let words = normalize(&text).split_whitespace().count();
        if words == 0 {
            prop_assert_eq!(out, "");
        } else {
            prop_assert_eq!(out.split(' ').count(), words);
            prop_assert!(out.split(' ').all(|w| !w.is_empty()));
        }
    }

    #[test]
    fn output_has_no_uppercase_ascii(text in arb_latin_text(), script in arb_script()) {
        let out = engine().transliterate(&text, script);
        prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn unmapped_symbols_are_never_dropped(text in arb_noisy_text(), script in arb_script()) {
        let out = engine().transliterate(&text, script);
        for sym in "0123456789!?.,".chars() {
            prop_assert_eq!(
                out.chars().filter(|&c| c == sym).count(),
                text.chars().filter(|&c| c == sym).count(),
                "symbol {:?} in {:?} -> {:?}", sym, text, out
            );
        }
    }

    #[test]
    fn suggestions_extend_the_prefix(
        partial in "[a-zA-Z]{0,3}",
        script in arb_script(),
        limit in 0usize..8,
    ) {
        let got = engine().suggestions(&partial, script, limit);
        let prefix = partial.to_lowercase();
        prop_assert!(got.len() <= limit);
        for key in &got {
            prop_assert!(key.starts_with(&prefix));
            prop_assert!(key.len() > prefix.len());
        }
    }
}
