#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod artifacts;
pub mod source;

pub use artifacts::GeneratedStore;
pub use source::{ContentSource, DEFAULT_LANGUAGES};
