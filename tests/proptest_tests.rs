//! Property-based tests for the validation predicates and query assembly.

use std::sync::OnceLock;

use kvk_api::*;
use proptest::prelude::*;

fn client() -> &'static KvkClient {
    static CLIENT: OnceLock<KvkClient> = OnceLock::new();
    CLIENT.get_or_init(|| {
        KvkClient::builder("test-key")
            .base_url("https://api.kvk.test/api/v1")
            .build()
            .unwrap()
    })
}

// ── Strategies ──────────────────────────────────────────────────────────────

/// Printable ASCII, any length up to 16.
fn arb_ascii() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ -~]{0,16}").unwrap()
}

/// Exactly `len` decimal digits.
fn arb_digits(len: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[0-9]{{{len}}}")).unwrap()
}

// ── Identifier predicates ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn eight_digit_strings_are_valid_kvk_nummers(s in arb_digits(8)) {
        prop_assert!(is_valid_kvk_nummer(&s));
    }

    #[test]
    fn wrong_length_is_never_a_valid_kvk_nummer(s in arb_ascii()) {
        prop_assume!(s.len() != 8);
        prop_assert!(!is_valid_kvk_nummer(&s));
    }

    #[test]
    fn any_non_digit_invalidates_a_kvk_nummer(
        s in arb_digits(8),
        idx in 0usize..8,
        c in proptest::char::any(),
    ) {
        prop_assume!(!c.is_ascii_digit());
        let mut chars: Vec<char> = s.chars().collect();
        chars[idx] = c;
        let mutated: String = chars.into_iter().collect();
        prop_assert!(!is_valid_kvk_nummer(&mutated));
    }

    #[test]
    fn twelve_digit_strings_are_valid_vestigingsnummers(s in arb_digits(12)) {
        prop_assert!(is_valid_vestigingsnummer(&s));
    }

    #[test]
    fn wrong_length_is_never_a_valid_vestigingsnummer(s in arb_ascii()) {
        prop_assume!(s.len() != 12);
        prop_assert!(!is_valid_vestigingsnummer(&s));
    }
}

// ── Paging and pairing predicates ───────────────────────────────────────────

proptest! {
    #[test]
    fn pagina_valid_iff_within_bounds(n in 0u32..5000) {
        prop_assert_eq!(is_valid_pagina(n), (1..=1000).contains(&n));
    }

    #[test]
    fn aantal_valid_iff_within_bounds(n in 0u32..500) {
        prop_assert_eq!(is_valid_aantal(n), (1..=100).contains(&n));
    }

    #[test]
    fn address_pair_valid_iff_both_or_neither(
        postcode in proptest::option::of(Just("1014BA".to_string())),
        huisnummer in proptest::option::of(Just("12".to_string())),
    ) {
        prop_assert_eq!(
            is_valid_address_pair(postcode.as_deref(), huisnummer.as_deref()),
            postcode.is_some() == huisnummer.is_some()
        );
    }
}

// ── Query assembly ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn optional_filters_appear_iff_present(
        handelsnaam in proptest::option::of("[a-zA-Z ]{1,12}"),
        plaats in proptest::option::of("[a-zA-Z]{1,12}"),
    ) {
        let request = client()
            .zoeken_request(&SearchParams {
                handelsnaam: handelsnaam.clone(),
                plaats: plaats.clone(),
                ..SearchParams::default()
            })
            .unwrap();
        let query = request.url().query().unwrap().to_owned();
        prop_assert_eq!(query.contains("handelsnaam="), handelsnaam.is_some());
        prop_assert_eq!(query.contains("plaats="), plaats.is_some());
    }

    #[test]
    fn paging_is_always_serialized(pagina in 1u32..=1000, aantal in 1u32..=100) {
        let request = client()
            .zoeken_request(&SearchParams {
                pagina,
                aantal,
                ..SearchParams::default()
            })
            .unwrap();
        let query = request.url().query().unwrap().to_owned();
        let pagina_needle = format!("pagina={}", pagina);
        let aantal_needle = format!("aantal={}", aantal);
        prop_assert!(query.contains(&pagina_needle));
        prop_assert!(query.contains(&aantal_needle));
    }

    #[test]
    fn valid_identifiers_always_build(kvk in arb_digits(8), vestiging in arb_digits(12)) {
        let client = client();
        prop_assert!(client.basisprofiel_request(&kvk, None).is_ok());
        prop_assert!(client.naamgeving_request(&kvk).is_ok());
        prop_assert!(client.vestigingsprofiel_request(&vestiging, Some(true)).is_ok());
    }
}
