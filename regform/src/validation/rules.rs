//! The rule predicates, one per server-side requirement.
//!
//! Every rule returns `true` when **violated**. The empty string violates
//! nothing: required-ness is the server's call, and flagging a field the
//! user has not touched yet punishes them for loading the page.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z-]*$").expect("name pattern"));

static PASSWORD_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]*$").expect("password charset pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));

/// Email must look like `local@domain.tld`: something before the `@`,
/// something after it, a literal dot, something after the dot, and no
/// whitespace anywhere.
pub fn email_format(value: &str) -> bool {
    !value.is_empty() && !EMAIL_RE.is_match(value)
}

/// Names allow Latin letters and hyphens only.
pub fn name_charset(value: &str) -> bool {
    !value.is_empty() && !NAME_RE.is_match(value)
}

/// Passwords must be at least 8 characters.
pub fn password_length(value: &str) -> bool {
    !value.is_empty() && value.chars().count() < 8
}

/// Strict deployments forbid anything outside Latin letters and digits.
pub fn password_charset(value: &str) -> bool {
    !value.is_empty() && !PASSWORD_CHARSET_RE.is_match(value)
}

/// Passwords must mix at least one Latin letter with at least one digit.
pub fn password_latin_mix(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    !(has_letter && has_digit)
}

/// The confirmation must equal the current password value.
pub fn confirm_match(password: &str, confirm: &str) -> bool {
    !confirm.is_empty() && confirm != password
}

/// Phone numbers are exactly ten digits.
pub fn phone_number(value: &str) -> bool {
    !value.is_empty() && !PHONE_RE.is_match(value)
}
