use regex::Regex;
use std::sync::LazyLock;

use crate::utils::{digit_values, digits_only};

const CPF_WEIGHTS_1: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_WEIGHTS_2: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").expect("email regex")
});

/// Módulo 11 check digit over `digits` with the given weights.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(&d, &w)| d * w).sum();
    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        11 - rem
    }
}

/// Shared shape of CPF and CNPJ: fixed length, two trailing check digits.
fn validate_mod11(value: &str, len: usize, weights1: &[u32], weights2: &[u32]) -> bool {
    let digits = digit_values(value);

    if digits.len() != len {
        return false;
    }

    // Reject all-same digits (e.g. 111.111.111-11)
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..len - 2], weights1) == digits[len - 2]
        && check_digit(&digits[..len - 1], weights2) == digits[len - 1]
}

// --- CPF ---

/// Validate a CPF, formatted or not, using Módulo 11.
#[must_use]
pub fn validate_cpf(cpf: &str) -> bool {
    validate_mod11(cpf, 11, &CPF_WEIGHTS_1, &CPF_WEIGHTS_2)
}

// --- CNPJ ---

/// Validate a CNPJ, formatted or not, using Módulo 11.
#[must_use]
pub fn validate_cnpj(cnpj: &str) -> bool {
    validate_mod11(cnpj, 14, &CNPJ_WEIGHTS_1, &CNPJ_WEIGHTS_2)
}

// --- Celular ---

/// Area code plus an 8 or 9 digit number. Letters are never part of a phone number.
#[must_use]
pub fn validate_mobile(phone: &str) -> bool {
    if phone.chars().any(char::is_alphabetic) {
        return false;
    }
    matches!(digits_only(phone).len(), 10 | 11)
}

// --- E-mail ---

#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

// --- Aleatória ---

/// Random keys are issued by the bank; their format is not checked here.
#[must_use]
pub fn validate_random(_token: &str) -> bool {
    true
}
