//! User events with element targeting.

/// Which family of event a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Focus,
    Blur,
    Input,
    Click,
}

/// A user event, targeted at an element by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An element gained focus.
    Focus { target: String },
    /// An element lost focus.
    Blur { target: String },
    /// The value of an input changed through user typing.
    Input { target: String },
    /// Mouse click. `None` means the click landed on bare document
    /// background, outside every registered element.
    Click { target: Option<String> },
}

impl Event {
    /// The event's kind, for listener routing.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Focus { .. } => EventKind::Focus,
            Event::Blur { .. } => EventKind::Blur,
            Event::Input { .. } => EventKind::Input,
            Event::Click { .. } => EventKind::Click,
        }
    }

    /// The id of the element the event originated on, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Focus { target } | Event::Blur { target } | Event::Input { target } => {
                Some(target)
            }
            Event::Click { target } => target.as_deref(),
        }
    }
}
