//! Utility modules.

pub mod de;
pub mod fs;
