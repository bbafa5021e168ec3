//! Property-based tests using `proptest`.
//!
//! These tests verify that validators and the masker never panic on
//! arbitrary input, that masking is stable under re-masking, and that
//! valid-by-construction documents validate.

use proptest::prelude::*;
use pixkey::engine::validator::{
    validate_cnpj, validate_cpf, validate_email, validate_mobile,
};
use pixkey::utils::digits_only;
use pixkey::{apply_mask, KeyType};

fn masked_kind() -> impl Strategy<Value = KeyType> {
    prop_oneof![
        Just(KeyType::Cpf),
        Just(KeyType::Cnpj),
        Just(KeyType::Celular),
    ]
}

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    let r = sum % 11;
    if r < 2 {
        0
    } else {
        (11 - r) as u8
    }
}

fn to_string(digits: &[u8]) -> String {
    digits.iter().map(|v| char::from(b'0' + v)).collect()
}

fn all_same(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().all(|&b| b == bytes[0])
}

// ---------- Never-panic properties ----------

proptest! {
    #[test]
    fn cpf_never_panics(s in "\\PC*") {
        let _ = validate_cpf(&s);
    }

    #[test]
    fn cnpj_never_panics(s in "\\PC*") {
        let _ = validate_cnpj(&s);
    }

    #[test]
    fn mobile_never_panics(s in "\\PC*") {
        let _ = validate_mobile(&s);
    }

    #[test]
    fn email_never_panics(s in "\\PC*") {
        let _ = validate_email(&s);
    }

    #[test]
    fn mask_never_panics(s in "\\PC*", kind in masked_kind()) {
        let _ = apply_mask(&s, kind);
    }
}

// ---------- Masking ----------

proptest! {
    #[test]
    fn remasking_is_stable(s in "\\PC{0,40}", kind in masked_kind()) {
        let masked = apply_mask(&s, kind);
        prop_assert_eq!(apply_mask(&digits_only(&masked), kind), masked.clone());
        prop_assert_eq!(apply_mask(&masked, kind), masked);
    }

    #[test]
    fn short_input_is_bare_digits(digits in "[0-9]{0,10}", kind in masked_kind()) {
        prop_assert_eq!(apply_mask(&digits, kind), digits);
    }

    #[test]
    fn masking_preserves_digits(digits in "[0-9]{14}") {
        let masked = apply_mask(&digits, KeyType::Cnpj);
        prop_assert_eq!(digits_only(&masked), digits);
    }

    #[test]
    fn free_form_is_untouched(s in "\\PC*") {
        prop_assert_eq!(apply_mask(&s, KeyType::Email), s.clone());
        prop_assert_eq!(apply_mask(&s, KeyType::Aleatoria), s);
    }
}

// ---------- Round-trip: valid documents must validate ----------

/// Generate a valid CPF string (digits only, 11 chars).
fn valid_cpf_strategy() -> impl Strategy<Value = String> {
    prop::array::uniform9(0u8..10u8)
        .prop_map(|digits| {
            let mut d = digits.to_vec();
            d.push(check_digit(&d, &[10, 9, 8, 7, 6, 5, 4, 3, 2]));
            d.push(check_digit(&d, &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2]));
            to_string(&d)
        })
        .prop_filter("reject all-same-digit CPFs", |cpf| !all_same(cpf))
}

/// Generate a valid CNPJ string (digits only, 14 chars).
fn valid_cnpj_strategy() -> impl Strategy<Value = String> {
    prop::array::uniform12(0u8..10u8)
        .prop_map(|digits| {
            let mut d = digits.to_vec();
            d.push(check_digit(&d, &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]));
            d.push(check_digit(&d, &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]));
            to_string(&d)
        })
        .prop_filter("reject all-same-digit CNPJs", |cnpj| !all_same(cnpj))
}

proptest! {
    #[test]
    fn valid_cpf_roundtrip(cpf in valid_cpf_strategy()) {
        prop_assert!(validate_cpf(&cpf), "Generated CPF should validate: {}", cpf);
        let masked = apply_mask(&cpf, KeyType::Cpf);
        prop_assert!(validate_cpf(&masked), "Masked CPF should validate: {}", masked);
    }

    #[test]
    fn valid_cnpj_roundtrip(cnpj in valid_cnpj_strategy()) {
        prop_assert!(validate_cnpj(&cnpj), "Generated CNPJ should validate: {}", cnpj);
        let masked = apply_mask(&cnpj, KeyType::Cnpj);
        prop_assert!(validate_cnpj(&masked), "Masked CNPJ should validate: {}", masked);
    }

    #[test]
    fn corrupted_cpf_check_digit_fails(cpf in valid_cpf_strategy(), bump in 1u8..10u8) {
        let mut bytes = cpf.into_bytes();
        bytes[10] = b'0' + (bytes[10] - b'0' + bump) % 10;
        let corrupted = String::from_utf8(bytes).unwrap();
        prop_assert!(!validate_cpf(&corrupted), "Corrupted CPF validated: {}", corrupted);
    }
}
