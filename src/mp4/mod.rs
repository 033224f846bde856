pub mod r#box;
pub use r#box::{make_box, read_box, read_box_header, write_box_header, BoxHeader, BoxType};
pub mod vttc;
pub use vttc::parse_vttc_box;

#[cfg(test)]
mod box_test;
