use crate::domain::{KeyType, KeyTypeConfig, MASK_SLOT};
use crate::engine::registry::config_for;
use crate::utils::digits_only;

/// Format `raw` for display with the mask of `kind`.
///
/// Free-form types are returned unchanged. While fewer digits than mask slots
/// have been typed the bare digits are returned, so separators only appear once
/// the value is complete.
#[must_use]
pub fn apply_mask(raw: &str, kind: KeyType) -> String {
    apply_mask_with(raw, config_for(kind))
}

/// Same as [`apply_mask`] for an explicit configuration.
#[must_use]
pub fn apply_mask_with(raw: &str, config: &KeyTypeConfig) -> String {
    let Some(mask) = config.mask else {
        return raw.to_string();
    };

    let digits = digits_only(raw);
    if digits.len() < config.slot_count() {
        return digits;
    }

    let mut remaining = digits.chars();
    let mut masked = String::with_capacity(mask.len());
    for ch in mask.chars() {
        if ch == MASK_SLOT {
            if let Some(d) = remaining.next() {
                masked.push(d);
            }
        } else {
            masked.push(ch);
        }
    }
    masked
}
