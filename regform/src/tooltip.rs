//! Tooltip trigger pass-through.
//!
//! Elements flagged with `data-bs-toggle="tooltip"` are handed to an
//! external presenter at mount time. Presentation is entirely the
//! collaborator's business; nothing here carries validation semantics.

use formdom::{Element, Page};
use log::debug;

/// Attribute marking an element as a tooltip trigger.
pub const TOOLTIP_ATTR: &str = "data-bs-toggle";
/// Attribute value marking an element as a tooltip trigger.
pub const TOOLTIP_VALUE: &str = "tooltip";

/// Hand every tooltip-flagged element to the presenter. Returns how many
/// triggers were attached.
pub fn attach_tooltips(page: &Page, presenter: impl Fn(&Element)) -> usize {
    let mut attached = 0;
    for element in page.elements() {
        if element.attr_value(TOOLTIP_ATTR).as_deref() == Some(TOOLTIP_VALUE) {
            presenter(&element);
            attached += 1;
        }
    }
    debug!("attached {attached} tooltip triggers");
    attached
}
