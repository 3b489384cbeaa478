//! Registration Page Example
//!
//! Builds the registration page headless and scripts a user session through
//! it:
//! - blur validation with error containers and the `is-invalid` class
//! - the strict password policy selected through the page attribute
//! - live confirm-password re-checking while typing the password
//! - the region dropdown: prefix narrowing, selection, outside-click

use std::fs::File;

use log::LevelFilter;
use regform::prelude::*;
use regform::validation::{
    CONFIRM_ERROR_ID, CONFIRM_ID, EMAIL_ERROR_ID, EMAIL_ID, PASSWORD_CHARSET_ERROR_ID,
    PASSWORD_ID, PASSWORD_LATIN_ERROR_ID, PASSWORD_LENGTH_ERROR_ID, POLICY_ATTR,
};
use regform::widgets::filter_select::{INPUT_ID, LIST_ID, WRAPPER_ID};
use simplelog::{Config, WriteLogger};

const REGIONS: &[&str] = &[
    "Вінницька область",
    "Волинська область",
    "Дніпропетровська область",
    "Донецька область",
    "Житомирська область",
    "Закарпатська область",
    "Запорізька область",
    "Івано-Франківська область",
    "Київ (місто)",
    "Київська область",
    "Кіровоградська область",
    "Львівська область",
    "Миколаївська область",
    "Одеська область",
    "Полтавська область",
    "Рівненська область",
    "Сумська область",
    "Тернопільська область",
    "Харківська область",
    "Херсонська область",
    "Хмельницька область",
    "Черкаська область",
    "Чернівецька область",
    "Чернігівська область",
];

fn build_page() -> Page {
    let page = Page::new();
    page.adopt(Element::input(EMAIL_ID).class("form-control")).unwrap();
    page.adopt(Element::block(EMAIL_ERROR_ID).hidden()).unwrap();
    page.adopt(
        Element::input(PASSWORD_ID)
            .class("form-control")
            .attr(POLICY_ATTR, "strict")
            .attr(TOOLTIP_ATTR, TOOLTIP_VALUE),
    )
    .unwrap();
    page.adopt(Element::block(PASSWORD_LENGTH_ERROR_ID).hidden()).unwrap();
    page.adopt(Element::block(PASSWORD_CHARSET_ERROR_ID).hidden()).unwrap();
    page.adopt(Element::block(PASSWORD_LATIN_ERROR_ID).hidden()).unwrap();
    page.adopt(Element::input(CONFIRM_ID).class("form-control")).unwrap();
    page.adopt(Element::block(CONFIRM_ERROR_ID).hidden()).unwrap();

    let list = Element::block(LIST_ID).children_from(
        REGIONS
            .iter()
            .enumerate()
            .map(|(index, label)| Element::item(format!("region-{index}"), *label)),
    );
    page.adopt(
        Element::block(WRAPPER_ID)
            .child(Element::input(INPUT_ID).class("form-control"))
            .child(list),
    )
    .unwrap();
    page
}

fn report(page: &Page, label: &str) {
    let email_error = page.get(EMAIL_ERROR_ID).unwrap().is_visible();
    let email_flagged = page.get(EMAIL_ID).unwrap().has_class(INVALID_CLASS);
    println!("{label}: email error shown={email_error}, field flagged={email_flagged}");
}

fn main() {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("register-demo.log").unwrap(),
    )
    .unwrap();

    let page = build_page();
    let mounted = RegisterPage::mount_with(&page, |element| {
        println!("tooltip attached on `{}`", element.id());
    })
    .unwrap();
    println!("password policy: {:?}", mounted.validator().policy());

    // Email: typo, then fix.
    page.focus(EMAIL_ID);
    page.input(EMAIL_ID, "olena@example");
    page.blur(EMAIL_ID);
    report(&page, "after typo");
    page.focus(EMAIL_ID);
    page.input(EMAIL_ID, "olena@example.com");
    page.blur(EMAIL_ID);
    report(&page, "after fix");

    // Strict policy: a special character is rejected client-side.
    page.focus(PASSWORD_ID);
    page.input(PASSWORD_ID, "traveler!1");
    page.blur(PASSWORD_ID);
    println!(
        "special characters rejected: {}",
        page.get(PASSWORD_CHARSET_ERROR_ID).unwrap().is_visible()
    );
    page.focus(PASSWORD_ID);
    page.input(PASSWORD_ID, "traveler1");
    page.blur(PASSWORD_ID);

    // Confirm, then watch the live re-check while editing the password.
    page.focus(CONFIRM_ID);
    page.input(CONFIRM_ID, "traveler1");
    page.blur(CONFIRM_ID);
    page.focus(PASSWORD_ID);
    page.input(PASSWORD_ID, "traveler12");
    println!(
        "mismatch caught while typing: {}",
        page.get(CONFIRM_ERROR_ID).unwrap().is_visible()
    );
    page.input(PASSWORD_ID, "traveler1");

    // Region dropdown.
    let select = mounted.region_select().unwrap();
    page.focus(INPUT_ID);
    page.input(INPUT_ID, "ки");
    println!("regions matching `ки`: {:?}", select.visible_labels());
    page.click("region-9");
    println!(
        "selected region: {} (dropdown open: {})",
        page.get(INPUT_ID).unwrap().value(),
        select.is_open()
    );
}
