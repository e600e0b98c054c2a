//! Request-level helpers shared by controllers and services.

pub mod extract;
pub mod hyperlink;
pub mod parse;
pub mod validate;
