//! Error container visibility, bound 1:1 to a rule.

use formdom::Element;

/// The visibility flag for one rule's error message container.
///
/// A display is shown exactly while its rule is violated. It owns no text;
/// the message itself lives in the page element.
#[derive(Debug, Clone)]
pub struct ErrorDisplay {
    container: Element,
}

impl ErrorDisplay {
    pub fn new(container: Element) -> Self {
        Self { container }
    }

    /// Synchronize visibility with the rule's current violated state.
    pub fn sync(&self, violated: bool) {
        self.container.set_visible(violated);
    }

    /// Whether the error message is currently shown.
    pub fn is_shown(&self) -> bool {
        self.container.is_visible()
    }
}
