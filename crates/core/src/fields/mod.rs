//! Amount input fields - formatting, parsing and entry restrictions.

mod fields_model;


pub use fields_model::{AmountField, EmptyBehavior, FieldConfig};
