//! Event wiring for the filterable dropdown.

use formdom::{contains, Event, EventKind, Page, PageError};
use log::{debug, warn};

use super::state::{FilterSelect, INPUT_ID, LIST_ID, WRAPPER_ID};

impl FilterSelect {
    /// Bind the widget onto the page's dropdown elements.
    ///
    /// All three contract elements must exist; if any one is missing the
    /// widget stays disabled and nothing is bound. There is no partial
    /// activation.
    pub fn mount(page: &Page) -> Result<Option<Self>, PageError> {
        let found = (
            page.get(INPUT_ID),
            page.get(WRAPPER_ID),
            page.get(LIST_ID),
        );
        let (Some(input), Some(wrapper), Some(list)) = found else {
            for id in [INPUT_ID, WRAPPER_ID, LIST_ID] {
                if page.get(id).is_none() {
                    warn!("dropdown disabled: `{id}` not on this page");
                }
            }
            return Ok(None);
        };

        let select = Self::new(input, wrapper, list);

        let handler = select.clone();
        page.add_listener(INPUT_ID, EventKind::Focus, move |_| handler.on_focus())?;

        let handler = select.clone();
        page.add_listener(INPUT_ID, EventKind::Input, move |_| handler.on_input())?;

        let handler = select.clone();
        page.add_listener(LIST_ID, EventKind::Click, move |event| {
            handler.on_list_click(event);
        })?;

        let handler = select.clone();
        page.add_document_listener(EventKind::Click, move |event| {
            handler.on_document_click(event);
        });

        debug!("dropdown bound with {} options", select.options().len());
        Ok(Some(select))
    }

    /// Focus opens the overlay and shows everything again, whatever filter
    /// text is left over in the input.
    pub(super) fn on_focus(&self) {
        self.open();
        self.show_all();
    }

    /// Each input event opens the overlay and narrows the options to the
    /// current prefix.
    pub(super) fn on_input(&self) {
        self.open();
        self.refilter();
    }

    /// A click on a visible option commits its exact label into the input
    /// and closes the overlay.
    pub(super) fn on_list_click(&self, event: &Event) {
        let Some(target) = event.target() else {
            return;
        };
        let Some(option) = self
            .options()
            .into_iter()
            .find(|option| option.id() == target)
        else {
            return;
        };
        if option.is_visible() {
            self.input.set_value(option.text());
            self.close();
        }
    }

    /// A click outside the wrapper while open dismisses the overlay,
    /// leaving option visibility untouched.
    pub(super) fn on_document_click(&self, event: &Event) {
        if !self.is_open() {
            return;
        }
        let inside = match event.target() {
            Some(target) => contains(&self.wrapper, target),
            None => false,
        };
        if !inside {
            self.close();
        }
    }
}
