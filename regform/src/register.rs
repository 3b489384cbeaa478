//! The page-ready entry point.
//!
//! One mount call wires everything the page actually contains: tooltip
//! triggers, the field validation engine, and the region dropdown. There is
//! no per-field configuration; which listeners get attached is read
//! implicitly from which contract elements exist, so the same entry point
//! serves the guest registration page, the host registration page, and the
//! login page (which has no dropdown and no confirm field).

use formdom::{Element, Page, PageError};

use crate::tooltip::attach_tooltips;
use crate::validation::FieldValidator;
use crate::widgets::FilterSelect;

/// Everything mounted on one registration page.
pub struct RegisterPage {
    validator: FieldValidator,
    region_select: Option<FilterSelect>,
}

impl RegisterPage {
    /// Mount against a page, without a tooltip presenter.
    pub fn mount(page: &Page) -> Result<Self, PageError> {
        Self::mount_with(page, |_| {})
    }

    /// Mount against a page, handing tooltip triggers to `presenter`.
    pub fn mount_with(
        page: &Page,
        presenter: impl Fn(&Element),
    ) -> Result<Self, PageError> {
        attach_tooltips(page, presenter);
        let validator = FieldValidator::mount(page)?;
        let region_select = FilterSelect::mount(page)?;
        Ok(Self {
            validator,
            region_select,
        })
    }

    /// The mounted field validation engine.
    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    /// The region dropdown, if the page carries all of its elements.
    pub fn region_select(&self) -> Option<&FilterSelect> {
        self.region_select.as_ref()
    }
}
