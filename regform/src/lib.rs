pub mod prelude;
pub mod register;
pub mod tooltip;
pub mod validation;
pub mod widgets;

pub use register::RegisterPage;

// The page model is part of the public mounting API.
pub use formdom::{Element, ElementKind, Event, EventKind, Page, PageError};
