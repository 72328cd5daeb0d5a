//! Width, kana and case conversion for Japanese text.
//!
//! The tables in [`tables`] and the classifier in [`unicode`] work on single
//! [`Codepoint`]s; [`engine`] runs chained [`ConversionRequest`]s over
//! UTF-16/UTF-8 buffers, and [`UcsStr`] wraps the same machinery for `&str`.

pub mod codec;
mod codepoint;
pub mod engine;
pub mod settings;
pub mod tables;
mod target;
mod text;
pub mod unicode;

pub use codepoint::Codepoint;
pub use engine::{ConversionRequest, ConvertError, Transform};
pub use target::ConvertTarget;
pub use text::{CharExt, UcsStr};
