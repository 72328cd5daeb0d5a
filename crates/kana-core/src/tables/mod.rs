//! Static per-codepoint mapping tables.
//!
//! All tables are read-only. The width table is indexed lazily on first use
//! through a `OnceLock`; kana and case are fixed offsets over known ranges.

pub mod case;
pub mod kana;
pub mod width;

pub use width::{Mark, MappingEntry, NarrowResult, WideResult, WidthTable};
