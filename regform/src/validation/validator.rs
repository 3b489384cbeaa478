//! Field binding and blur-time rule evaluation.

use std::sync::Arc;

use formdom::{Element, EventKind, Page, PageError};
use log::{debug, warn};

use super::error_display::ErrorDisplay;
use super::policy::PasswordPolicy;
use super::rules;

/// Class carried by a field while at least one of its rules is violated.
pub const INVALID_CLASS: &str = "is-invalid";

// The element contract: field inputs and their error containers, by id.
pub const EMAIL_ID: &str = "id_email";
pub const NAME_ID: &str = "id_first_name";
pub const PASSWORD_ID: &str = "id_password";
pub const CONFIRM_ID: &str = "id_confirm_password";
pub const PHONE_ID: &str = "id_phone_number";

pub const EMAIL_ERROR_ID: &str = "emailError";
pub const NAME_ERROR_ID: &str = "nameError";
pub const PASSWORD_LENGTH_ERROR_ID: &str = "passwordErrorLength";
pub const PASSWORD_CHARSET_ERROR_ID: &str = "passwordErrorCharset";
pub const PASSWORD_LATIN_ERROR_ID: &str = "passwordErrorLatin";
pub const CONFIRM_ERROR_ID: &str = "confirmError";
pub const PHONE_ERROR_ID: &str = "phoneError";

/// One rule bound to its error display.
enum Check {
    /// A predicate over the field's own value.
    Value {
        violated: fn(&str) -> bool,
        display: ErrorDisplay,
    },
    /// The confirm-password rule, which also reads the password field.
    Match { peer: Element, display: ErrorDisplay },
}

impl Check {
    fn evaluate(&self, value: &str) -> bool {
        match self {
            Check::Value { violated, .. } => violated(value),
            Check::Match { peer, .. } => rules::confirm_match(&peer.value(), value),
        }
    }

    fn display(&self) -> &ErrorDisplay {
        match self {
            Check::Value { display, .. } | Check::Match { display, .. } => display,
        }
    }
}

/// A field together with its bound rules.
///
/// `Clone` shares the binding; event handlers hold clones of the same
/// binding the validator keeps.
#[derive(Clone)]
pub struct FieldBinding {
    field: Element,
    checks: Arc<Vec<Check>>,
}

impl FieldBinding {
    fn new(field: Element, checks: Vec<Check>) -> Self {
        Self {
            field,
            checks: Arc::new(checks),
        }
    }

    /// The id of the bound input element.
    pub fn field_id(&self) -> String {
        self.field.id()
    }

    /// Evaluate every rule and synchronize the visible state.
    ///
    /// Each error display is shown iff its rule is violated. The field
    /// carries [`INVALID_CLASS`] iff any rule is violated and the value is
    /// non-empty; otherwise the class is removed. Running twice with an
    /// unchanged value reproduces the same state.
    pub fn run(&self) {
        let value = self.field.value();
        let mut any_violated = false;
        for check in self.checks.iter() {
            let violated = check.evaluate(&value);
            check.display().sync(violated);
            any_violated |= violated;
        }
        if any_violated && !value.is_empty() {
            self.field.add_class(INVALID_CLASS);
        } else {
            self.field.remove_class(INVALID_CLASS);
        }
    }
}

/// The per-field rule engine, wired to blur (and password input) events.
///
/// Mounting attaches listeners for whichever contract elements the page
/// actually contains; absent fields are skipped without error. The engine
/// only toggles error visibility and the invalid class. It never blocks
/// anything, and the server re-checks everything.
pub struct FieldValidator {
    policy: PasswordPolicy,
    bindings: Vec<FieldBinding>,
}

impl FieldValidator {
    /// Mount with the policy read from the password element's
    /// `data-password-policy` attribute (standard when absent or unknown).
    pub fn mount(page: &Page) -> Result<Self, PageError> {
        let policy = page
            .get(PASSWORD_ID)
            .map(|el| PasswordPolicy::from_element(&el))
            .unwrap_or_default();
        Self::mount_with_policy(page, policy)
    }

    /// Mount with an explicitly chosen password policy.
    pub fn mount_with_policy(page: &Page, policy: PasswordPolicy) -> Result<Self, PageError> {
        let mut bindings = Vec::new();

        if let Some(binding) =
            bind_value_field(page, EMAIL_ID, &[(rules::email_format, EMAIL_ERROR_ID)])?
        {
            bindings.push(binding);
        }

        if let Some(binding) =
            bind_value_field(page, NAME_ID, &[(rules::name_charset, NAME_ERROR_ID)])?
        {
            bindings.push(binding);
        }

        if let Some(binding) =
            bind_value_field(page, PHONE_ID, &[(rules::phone_number, PHONE_ERROR_ID)])?
        {
            bindings.push(binding);
        }

        let mut password_rules: Vec<(fn(&str) -> bool, &str)> =
            vec![(rules::password_length, PASSWORD_LENGTH_ERROR_ID)];
        if policy.checks_charset() {
            password_rules.push((rules::password_charset, PASSWORD_CHARSET_ERROR_ID));
        }
        password_rules.push((rules::password_latin_mix, PASSWORD_LATIN_ERROR_ID));
        if let Some(binding) = bind_value_field(page, PASSWORD_ID, &password_rules)? {
            bindings.push(binding);
        }

        if let Some(binding) = bind_confirm_field(page)? {
            bindings.push(binding);
        }

        Ok(Self { policy, bindings })
    }

    /// The password policy this deployment runs.
    pub fn policy(&self) -> PasswordPolicy {
        self.policy
    }

    /// Ids of the fields that were actually bound.
    pub fn bound_fields(&self) -> Vec<String> {
        self.bindings.iter().map(FieldBinding::field_id).collect()
    }
}

/// Bind value-only rules to a field's blur event, if the field exists.
fn bind_value_field(
    page: &Page,
    field_id: &str,
    rule_set: &[(fn(&str) -> bool, &str)],
) -> Result<Option<FieldBinding>, PageError> {
    let Some(field) = page.get(field_id) else {
        debug!("`{field_id}` not on this page, skipping");
        return Ok(None);
    };

    let mut checks = Vec::new();
    for (rule, error_id) in rule_set {
        match page.get(error_id) {
            Some(container) => checks.push(Check::Value {
                violated: *rule,
                display: ErrorDisplay::new(container),
            }),
            None => warn!("error container `{error_id}` missing, rule skipped for `{field_id}`"),
        }
    }
    if checks.is_empty() {
        return Ok(None);
    }

    let binding = FieldBinding::new(field, checks);
    let handler = binding.clone();
    page.add_listener(field_id, EventKind::Blur, move |_| handler.run())?;
    debug!("bound blur validation for `{field_id}`");
    Ok(Some(binding))
}

/// Bind the confirm-password match rule: blur on the confirm field, plus a
/// live re-check on every password input event once the confirm field holds
/// a value. Typing the password first never flags the untouched confirm
/// field.
fn bind_confirm_field(page: &Page) -> Result<Option<FieldBinding>, PageError> {
    let Some(confirm) = page.get(CONFIRM_ID) else {
        debug!("`{CONFIRM_ID}` not on this page, skipping");
        return Ok(None);
    };
    let Some(password) = page.get(PASSWORD_ID) else {
        warn!("`{CONFIRM_ID}` present without `{PASSWORD_ID}`, match rule not bound");
        return Ok(None);
    };
    let Some(container) = page.get(CONFIRM_ERROR_ID) else {
        warn!("error container `{CONFIRM_ERROR_ID}` missing, match rule not bound");
        return Ok(None);
    };

    let binding = FieldBinding::new(
        confirm.clone(),
        vec![Check::Match {
            peer: password,
            display: ErrorDisplay::new(container),
        }],
    );

    let handler = binding.clone();
    page.add_listener(CONFIRM_ID, EventKind::Blur, move |_| handler.run())?;

    let handler = binding.clone();
    page.add_listener(PASSWORD_ID, EventKind::Input, move |_| {
        if !confirm.value().is_empty() {
            handler.run();
        }
    })?;

    debug!("bound confirm-password match validation");
    Ok(Some(binding))
}
