//! Input handling module

pub mod glob_resolver;
pub mod keyword_list;

pub use glob_resolver::resolve_patterns;
pub use keyword_list::{load_keywords, parse_keywords};
