mod binding;
mod canonical;
mod field;
mod masker;
pub mod registry;
pub mod validator;

pub use binding::{KeyInput, Select, TextInput, TypeSelector};
pub use canonical::canonical_form;
pub use field::{FieldState, KeyField};
pub use masker::{apply_mask, apply_mask_with};
