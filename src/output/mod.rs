mod qr;
mod receipt;

pub use qr::{QrEncoder, SvgQrEncoder};
pub use receipt::{format_amount, ReceiptGenerator};
