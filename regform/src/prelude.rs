//! Prelude module for convenient imports.
//!
//! ```ignore
//! use regform::prelude::*;
//! ```

pub use crate::register::RegisterPage;
pub use crate::tooltip::{attach_tooltips, TOOLTIP_ATTR, TOOLTIP_VALUE};
pub use crate::validation::{FieldValidator, PasswordPolicy, INVALID_CLASS};
pub use crate::widgets::filter_select::{FilterSelect, ACTIVE_CLASS};

pub use formdom::{Element, ElementKind, Event, EventKind, Page, PageError};
