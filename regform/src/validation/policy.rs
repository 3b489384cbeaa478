//! Password strictness policies.
//!
//! The guest and host registration pages share one validation engine but
//! disagree on password strictness: the host deployment additionally rejects
//! anything outside Latin letters and digits, with its own error message.
//! That difference is a policy chosen once at mount, never a second engine.

use std::str::FromStr;

use formdom::Element;
use log::{debug, warn};
use thiserror::Error;

/// Attribute on the password element that names the deployed policy.
pub const POLICY_ATTR: &str = "data-password-policy";

/// Which password rule set a deployment runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordPolicy {
    /// Length and letter/digit mix.
    #[default]
    Standard,
    /// Length, letter/digit mix, and an alphanumeric-only charset check
    /// with a dedicated "special characters not allowed" message.
    Strict,
}

impl PasswordPolicy {
    /// Read the policy from the password element's `data-password-policy`
    /// attribute. Absent means standard; an unknown value logs a warning and
    /// falls back to standard rather than refusing to mount.
    pub fn from_element(password: &Element) -> Self {
        match password.attr_value(POLICY_ATTR) {
            None => Self::Standard,
            Some(raw) => match raw.parse() {
                Ok(policy) => {
                    debug!("password policy `{raw}` selected");
                    policy
                }
                Err(PolicyParseError(_)) => {
                    warn!("unknown password policy `{raw}`, using standard rules");
                    Self::Standard
                }
            },
        }
    }

    /// Whether the alphanumeric-only charset rule is part of this policy.
    pub fn checks_charset(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// An unrecognized policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown password policy `{0}`")]
pub struct PolicyParseError(pub String);

impl FromStr for PasswordPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "strict" => Ok(Self::Strict),
            other => Err(PolicyParseError(other.to_string())),
        }
    }
}
