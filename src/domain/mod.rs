mod key_type;
mod payee;

pub use key_type::{KeyType, KeyTypeConfig, MASK_SLOT};
pub use payee::Payee;
