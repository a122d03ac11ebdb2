//! Component and declaration name handling.

use pipestep_common::config::NamePolicy;
use pipestep_common::constants::SANITIZE_REPLACEMENT;
use pipestep_common::error::{PipestepError, Result};

/// Applies `policy` to `name`, returning the name to register.
///
/// # Errors
///
/// Returns [`PipestepError::InvalidName`] when `policy` is
/// [`NamePolicy::Validate`] and `name` is not an identifier, or when
/// sanitizing an empty name.
pub fn apply(policy: NamePolicy, name: &str) -> Result<String> {
    match policy {
        NamePolicy::Verbatim => Ok(name.to_string()),
        NamePolicy::Validate => {
            if is_identifier(name) {
                Ok(name.to_string())
            } else {
                Err(invalid(name, "expected [A-Za-z_][A-Za-z0-9_]*"))
            }
        }
        NamePolicy::Sanitize => sanitize(name),
    }
}

/// Whether `name` matches `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn sanitize(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(invalid(name, "name is empty"));
    }
    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                SANITIZE_REPLACEMENT
            }
        })
        .collect();
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, SANITIZE_REPLACEMENT);
    }
    if out != name {
        tracing::debug!(name, sanitized = %out, "sanitized name");
    }
    Ok(out)
}

fn invalid(name: &str, reason: &str) -> PipestepError {
    PipestepError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
