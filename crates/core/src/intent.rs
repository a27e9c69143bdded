use crate::models::Intent;

/// Lookup key for a disease name: lowercased, otherwise untouched.
pub fn normalize_disease_name(input: &str) -> String {
    input.to_lowercase()
}

/// Maps a label produced by the upstream classifier onto an [`Intent`].
/// Only the exact snake_case tags are recognized; anything else, including an
/// absent label or a differently cased one, is `Unknown`.
pub fn parse_intent_label(label: Option<&str>) -> Intent {
    let Some(label) = label else {
        return Intent::Unknown;
    };

    Intent::RECOGNIZED
        .into_iter()
        .find(|intent| intent.as_label() == label)
        .unwrap_or(Intent::Unknown)
}
