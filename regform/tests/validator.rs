use formdom::{Element, Page};
use regform::validation::{
    FieldValidator, PasswordPolicy, CONFIRM_ERROR_ID, CONFIRM_ID, EMAIL_ERROR_ID, EMAIL_ID,
    INVALID_CLASS, NAME_ERROR_ID, NAME_ID, PASSWORD_CHARSET_ERROR_ID, PASSWORD_ID,
    PASSWORD_LATIN_ERROR_ID, PASSWORD_LENGTH_ERROR_ID, PHONE_ERROR_ID, PHONE_ID, POLICY_ATTR,
};

/// Build the full registration page, optionally naming a password policy
/// through the password element's attribute.
fn registration_page(policy_attr: Option<&str>) -> Page {
    let page = Page::new();
    let mut password = Element::input(PASSWORD_ID).class("form-control");
    if let Some(policy) = policy_attr {
        password = password.attr(POLICY_ATTR, policy);
    }

    page.adopt(Element::input(EMAIL_ID).class("form-control")).unwrap();
    page.adopt(Element::block(EMAIL_ERROR_ID).hidden()).unwrap();
    page.adopt(Element::input(NAME_ID).class("form-control")).unwrap();
    page.adopt(Element::block(NAME_ERROR_ID).hidden()).unwrap();
    page.adopt(password).unwrap();
    page.adopt(Element::block(PASSWORD_LENGTH_ERROR_ID).hidden()).unwrap();
    page.adopt(Element::block(PASSWORD_CHARSET_ERROR_ID).hidden()).unwrap();
    page.adopt(Element::block(PASSWORD_LATIN_ERROR_ID).hidden()).unwrap();
    page.adopt(Element::input(CONFIRM_ID).class("form-control")).unwrap();
    page.adopt(Element::block(CONFIRM_ERROR_ID).hidden()).unwrap();
    page.adopt(Element::input(PHONE_ID).class("form-control")).unwrap();
    page.adopt(Element::block(PHONE_ERROR_ID).hidden()).unwrap();
    page
}

/// Focus a field, type a value, then blur it.
fn enter(page: &Page, id: &str, value: &str) {
    page.focus(id);
    page.input(id, value);
    page.blur(id);
}

fn shown(page: &Page, id: &str) -> bool {
    page.get(id).unwrap().is_visible()
}

fn flagged(page: &Page, id: &str) -> bool {
    page.get(id).unwrap().has_class(INVALID_CLASS)
}

#[test]
fn test_email_error_follows_blur_validation() {
    let page = registration_page(None);
    FieldValidator::mount(&page).unwrap();

    enter(&page, EMAIL_ID, "bob@example");
    assert!(shown(&page, EMAIL_ERROR_ID));
    assert!(flagged(&page, EMAIL_ID));

    enter(&page, EMAIL_ID, "bob@example.com");
    assert!(!shown(&page, EMAIL_ERROR_ID));
    assert!(!flagged(&page, EMAIL_ID));
}

#[test]
fn test_empty_value_never_flags_the_field() {
    let page = registration_page(None);
    FieldValidator::mount(&page).unwrap();

    enter(&page, EMAIL_ID, "not-an-email");
    assert!(flagged(&page, EMAIL_ID));

    // Clearing the field clears both the error and the marker.
    enter(&page, EMAIL_ID, "");
    assert!(!shown(&page, EMAIL_ERROR_ID));
    assert!(!flagged(&page, EMAIL_ID));

    // An untouched password is never flagged either.
    enter(&page, PASSWORD_ID, "");
    assert!(!shown(&page, PASSWORD_LENGTH_ERROR_ID));
    assert!(!shown(&page, PASSWORD_LATIN_ERROR_ID));
    assert!(!flagged(&page, PASSWORD_ID));
}

#[test]
fn test_blur_validation_is_idempotent() {
    let page = registration_page(None);
    FieldValidator::mount(&page).unwrap();

    page.focus(EMAIL_ID);
    page.input(EMAIL_ID, "bob@example");
    page.blur(EMAIL_ID);
    let first = (shown(&page, EMAIL_ERROR_ID), flagged(&page, EMAIL_ID));

    page.focus(EMAIL_ID);
    page.blur(EMAIL_ID);
    let second = (shown(&page, EMAIL_ERROR_ID), flagged(&page, EMAIL_ID));

    assert_eq!(first, second);
    assert_eq!(first, (true, true));
}

#[test]
fn test_name_charset_on_blur() {
    let page = registration_page(None);
    FieldValidator::mount(&page).unwrap();

    enter(&page, NAME_ID, "Anna Maria");
    assert!(shown(&page, NAME_ERROR_ID));
    assert!(flagged(&page, NAME_ID));

    enter(&page, NAME_ID, "Anna-Maria");
    assert!(!shown(&page, NAME_ERROR_ID));
    assert!(!flagged(&page, NAME_ID));
}

#[test]
fn test_password_letters_and_digits_passes() {
    let page = registration_page(None);
    FieldValidator::mount(&page).unwrap();

    enter(&page, PASSWORD_ID, "abc123de");
    assert!(!shown(&page, PASSWORD_LENGTH_ERROR_ID));
    assert!(!shown(&page, PASSWORD_LATIN_ERROR_ID));
    assert!(!flagged(&page, PASSWORD_ID));
}

#[test]
fn test_password_missing_digit_shows_latin_error() {
    let page = registration_page(Some("strict"));
    FieldValidator::mount(&page).unwrap();

    enter(&page, PASSWORD_ID, "abcdefgh");
    assert!(!shown(&page, PASSWORD_LENGTH_ERROR_ID));
    assert!(!shown(&page, PASSWORD_CHARSET_ERROR_ID));
    assert!(shown(&page, PASSWORD_LATIN_ERROR_ID));
    assert!(flagged(&page, PASSWORD_ID));
}

#[test]
fn test_strict_policy_rejects_special_characters() {
    let page = registration_page(Some("strict"));
    let validator = FieldValidator::mount(&page).unwrap();
    assert_eq!(validator.policy(), PasswordPolicy::Strict);

    enter(&page, PASSWORD_ID, "abcdef!1");
    assert!(!shown(&page, PASSWORD_LENGTH_ERROR_ID));
    assert!(shown(&page, PASSWORD_CHARSET_ERROR_ID));
    assert!(!shown(&page, PASSWORD_LATIN_ERROR_ID));
    assert!(flagged(&page, PASSWORD_ID));
}

#[test]
fn test_standard_policy_ignores_special_characters() {
    let page = registration_page(None);
    let validator = FieldValidator::mount(&page).unwrap();
    assert_eq!(validator.policy(), PasswordPolicy::Standard);

    enter(&page, PASSWORD_ID, "abcdef!1");
    assert!(!shown(&page, PASSWORD_LENGTH_ERROR_ID));
    assert!(!shown(&page, PASSWORD_CHARSET_ERROR_ID));
    assert!(!shown(&page, PASSWORD_LATIN_ERROR_ID));
    assert!(!flagged(&page, PASSWORD_ID));
}

#[test]
fn test_unknown_policy_attribute_falls_back_to_standard() {
    let page = registration_page(Some("paranoid"));
    let validator = FieldValidator::mount(&page).unwrap();
    assert_eq!(validator.policy(), PasswordPolicy::Standard);
}

#[test]
fn test_confirm_mismatch_shows_error_on_blur() {
    let page = registration_page(None);
    FieldValidator::mount(&page).unwrap();

    enter(&page, PASSWORD_ID, "abc123");
    enter(&page, CONFIRM_ID, "abc124");
    assert!(shown(&page, CONFIRM_ERROR_ID));
    assert!(flagged(&page, CONFIRM_ID));
}

#[test]
fn test_password_typing_recheck_waits_for_confirm() {
    let page = registration_page(None);
    FieldValidator::mount(&page).unwrap();

    // Typing the password with an untouched confirm field flags nothing.
    page.focus(PASSWORD_ID);
    page.input(PASSWORD_ID, "abc123de");
    assert!(!shown(&page, CONFIRM_ERROR_ID));
    assert!(!flagged(&page, CONFIRM_ID));

    // Once confirm holds a value, every password keystroke re-checks it.
    enter(&page, CONFIRM_ID, "abc123de");
    assert!(!shown(&page, CONFIRM_ERROR_ID));

    page.focus(PASSWORD_ID);
    page.input(PASSWORD_ID, "abc123def");
    assert!(shown(&page, CONFIRM_ERROR_ID));
    assert!(flagged(&page, CONFIRM_ID));

    // Typing back to a match clears it live, before any blur.
    page.input(PASSWORD_ID, "abc123de");
    assert!(!shown(&page, CONFIRM_ERROR_ID));
    assert!(!flagged(&page, CONFIRM_ID));
}

#[test]
fn test_phone_number_on_blur() {
    let page = registration_page(None);
    FieldValidator::mount(&page).unwrap();

    enter(&page, PHONE_ID, "06712345");
    assert!(shown(&page, PHONE_ERROR_ID));
    assert!(flagged(&page, PHONE_ID));

    enter(&page, PHONE_ID, "0671234567");
    assert!(!shown(&page, PHONE_ERROR_ID));
    assert!(!flagged(&page, PHONE_ID));
}

#[test]
fn test_absent_fields_are_skipped() {
    // A login-style page: email and password only.
    let page = Page::new();
    page.adopt(Element::input(EMAIL_ID)).unwrap();
    page.adopt(Element::block(EMAIL_ERROR_ID).hidden()).unwrap();
    page.adopt(Element::input(PASSWORD_ID)).unwrap();
    page.adopt(Element::block(PASSWORD_LENGTH_ERROR_ID).hidden()).unwrap();
    page.adopt(Element::block(PASSWORD_LATIN_ERROR_ID).hidden()).unwrap();

    let validator = FieldValidator::mount(&page).unwrap();
    let bound = validator.bound_fields();
    assert!(bound.contains(&EMAIL_ID.to_string()));
    assert!(bound.contains(&PASSWORD_ID.to_string()));
    assert!(!bound.contains(&NAME_ID.to_string()));
    assert!(!bound.contains(&CONFIRM_ID.to_string()));
    assert!(!bound.contains(&PHONE_ID.to_string()));

    // The bound fields still validate normally.
    enter(&page, EMAIL_ID, "nope");
    assert!(shown(&page, EMAIL_ERROR_ID));
}

#[test]
fn test_missing_error_container_skips_only_that_rule() {
    let page = Page::new();
    page.adopt(Element::input(PASSWORD_ID)).unwrap();
    page.adopt(Element::block(PASSWORD_LENGTH_ERROR_ID).hidden()).unwrap();
    // No latin-mix container on this page.

    FieldValidator::mount(&page).unwrap();
    enter(&page, PASSWORD_ID, "abcdefgh");
    // Length is fine and the latin rule could not be bound, so no marker.
    assert!(!shown(&page, PASSWORD_LENGTH_ERROR_ID));
    assert!(!flagged(&page, PASSWORD_ID));

    enter(&page, PASSWORD_ID, "a1");
    assert!(shown(&page, PASSWORD_LENGTH_ERROR_ID));
    assert!(flagged(&page, PASSWORD_ID));
}
