//! Shared CLI constants.

/// Rows shown at once in a selection list before it scrolls.
pub const VISIBLE_ITEMS: usize = 10;

/// Replacement shown wherever a password would be printed.
pub const PASSWORD_MASK: &str = "********";
