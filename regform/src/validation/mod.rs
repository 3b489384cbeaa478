//! Client-side mirror of the registration form's validation rules.
//!
//! The server stays the source of truth; everything here exists only so the
//! user sees feedback without a round trip. Rules are pure predicates over
//! the current field text, each bound to one error container whose
//! visibility tracks the rule's violated state. A field carries the
//! `is-invalid` class exactly while at least one of its rules is violated
//! and its value is non-empty, so untouched fields are never flagged.
//!
//! # Example
//!
//! ```ignore
//! use regform::validation::{FieldValidator, PasswordPolicy};
//!
//! let validator = FieldValidator::mount(&page, PasswordPolicy::Strict)?;
//! // From here on, blurring a bound field re-evaluates its rules and
//! // synchronizes error visibility; nothing is ever returned to the caller.
//! ```

mod error_display;
mod policy;
mod rules;
mod validator;

pub use error_display::ErrorDisplay;
pub use policy::{PasswordPolicy, PolicyParseError, POLICY_ATTR};
pub use rules::{
    confirm_match, email_format, name_charset, password_charset, password_latin_mix,
    password_length, phone_number,
};
pub use validator::{
    CONFIRM_ERROR_ID, CONFIRM_ID, EMAIL_ERROR_ID, EMAIL_ID, FieldBinding, FieldValidator,
    INVALID_CLASS, NAME_ERROR_ID, NAME_ID, PASSWORD_CHARSET_ERROR_ID, PASSWORD_ID,
    PASSWORD_LATIN_ERROR_ID, PASSWORD_LENGTH_ERROR_ID, PHONE_ERROR_ID, PHONE_ID,
};
