//! High level operations composed from repositories and stores.

pub mod account;
pub mod company;
pub mod employee;

/// Trim an optional form value and treat blank input as absent.
pub(crate) fn trim_optional(value: &mut Option<String>) {
    *value = value
        .take()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
}

/// Trim an optional value, keeping blank input so it fails validation.
pub(crate) fn trim_present(value: &mut Option<String>) {
    if let Some(v) = value {
        *v = v.trim().to_string();
    }
}
