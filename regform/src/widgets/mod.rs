//! Interactive widgets bound onto page elements.

pub mod filter_select;

pub use filter_select::FilterSelect;
