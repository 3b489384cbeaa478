//! Dropdown state: the open flag, the option list, and filtering.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use formdom::{Element, ElementKind};
use log::trace;

use super::filter::prefix_filter;

/// Class carried by the wrapper while the overlay is open.
pub const ACTIVE_CLASS: &str = "active";

// The element contract: text input, wrapping container, option list.
pub const INPUT_ID: &str = "regionInput";
pub const WRAPPER_ID: &str = "regionWrapper";
pub const LIST_ID: &str = "regionList";

/// A filterable single-select dropdown bound onto three page elements.
///
/// `Clone` shares the widget; event handlers hold clones of the same state.
#[derive(Clone)]
pub struct FilterSelect {
    pub(super) input: Element,
    pub(super) wrapper: Element,
    pub(super) list: Element,
    open: Arc<AtomicBool>,
}

impl FilterSelect {
    pub(super) fn new(input: Element, wrapper: Element, list: Element) -> Self {
        Self {
            input,
            wrapper,
            list,
            open: Arc::new(AtomicBool::new(false)),
        }
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Open the overlay, mirroring the state onto the wrapper class.
    pub(super) fn open(&self) {
        if !self.open.swap(true, Ordering::SeqCst) {
            self.wrapper.add_class(ACTIVE_CLASS);
        }
    }

    /// Close the overlay. Option visibility is left as-is; the next focus
    /// or filter change recomputes it.
    pub(super) fn close(&self) {
        if self.open.swap(false, Ordering::SeqCst) {
            self.wrapper.remove_class(ACTIVE_CLASS);
        }
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    /// Handles to the option items in list order.
    pub fn options(&self) -> Vec<Element> {
        self.list
            .child_elements()
            .into_iter()
            .filter(|child| child.kind() == ElementKind::Item)
            .collect()
    }

    /// Labels of the currently visible options, in list order.
    pub fn visible_labels(&self) -> Vec<String> {
        self.options()
            .iter()
            .filter(|option| option.is_visible())
            .map(|option| option.text())
            .collect()
    }

    /// Make every option visible again.
    pub(super) fn show_all(&self) {
        for option in self.options() {
            option.set_visible(true);
        }
    }

    /// Recompute option visibility from the input's current text.
    pub(super) fn refilter(&self) {
        let filter = self.input.value();
        let options = self.options();
        let labels: Vec<String> = options.iter().map(Element::text).collect();
        let visible = prefix_filter(&filter, &labels);
        for (index, option) in options.iter().enumerate() {
            option.set_visible(visible.contains(&index));
        }
        trace!(
            "filter `{filter}` leaves {}/{} options visible",
            visible.len(),
            options.len()
        );
    }
}
