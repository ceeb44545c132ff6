//! Password scoring sections
//!
//! Each section scores one aspect of a password. Sections are independent
//! and their points accumulate.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

/// Points awarded by a single section.
pub type SectionScore = u8;
