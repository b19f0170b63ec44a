//! Shell command implementations.

pub mod parse;
pub mod render;
pub mod shell;
