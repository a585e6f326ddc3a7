//! HTML presentation: askama templates, markup assembly and the document shell.

pub mod assemble;
pub mod document;
pub mod escape;
pub mod styles;
pub mod views;
