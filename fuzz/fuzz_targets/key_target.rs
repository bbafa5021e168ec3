#![no_main]

use libfuzzer_sys::fuzz_target;
use pixkey::engine::validator::{validate_cnpj, validate_cpf, validate_email, validate_mobile};
use pixkey::{apply_mask, KeyType};

fuzz_target!(|data: &[u8]| {
    // Masking and validation must accept any UTF-8 input
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = validate_cpf(text);
        let _ = validate_cnpj(text);
        let _ = validate_mobile(text);
        let _ = validate_email(text);

        for kind in KeyType::ALL {
            let masked = apply_mask(text, kind);
            assert_eq!(apply_mask(&masked, kind), masked);
        }
    }
});
