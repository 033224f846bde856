pub mod cursor;
pub use cursor::{check_range, ByteCursor};
pub mod encoding;
pub use encoding::TextEncoding;
