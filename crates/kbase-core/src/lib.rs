#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod category;
pub mod config;
pub mod error;
pub mod excerpt;
pub mod frontmatter;
pub mod normalize;
pub mod slug;
pub mod traits;
pub mod types;
