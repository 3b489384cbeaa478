//! Filterable single-select dropdown.
//!
//! A text input backed by a fixed option list in an overlay container.
//! Typing narrows the visible options by case-insensitive prefix match;
//! clicking a visible option commits its exact label into the input and
//! closes the overlay; clicking anywhere outside the wrapper dismisses it.
//! Whether the committed (or free-typed) text is actually a valid option is
//! deliberately not checked here; the server enforces that.
//!
//! # Example
//!
//! ```ignore
//! use regform::widgets::FilterSelect;
//!
//! // Binds to `regionInput` / `regionWrapper` / `regionList`; yields None
//! // (and binds nothing) unless all three exist.
//! let select = FilterSelect::mount(&page)?;
//! ```

mod events;
mod filter;
mod state;

pub use filter::prefix_filter;
pub use state::{ACTIVE_CLASS, FilterSelect, INPUT_ID, LIST_ID, WRAPPER_ID};
