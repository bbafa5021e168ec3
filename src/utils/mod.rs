mod strings;

pub use strings::{digit_values, digits_only, escape_html};
