use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, FromRepr};

/// How the summary screen was entered.
///
/// The numeric tags are part of the host ABI and must never change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, FromRepr,
)]
#[repr(u32)]
pub enum SummaryScreenStyle {
    /// The player's own party: members can be reordered and items moved.
    Party = 0,
    /// Inspection only, nothing about the party may change.
    ReadOnly = 1,
}

impl SummaryScreenStyle {
    /// The integer tag used across the C boundary.
    pub const fn tag(self) -> u32 {
        self as u32
    }

    pub const fn allows_mutation(self) -> bool {
        matches!(self, SummaryScreenStyle::Party)
    }
}

/// A style tag outside the two declared variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStyleTag(pub u32);

impl fmt::Display for InvalidStyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid summary screen style tag: {}", self.0)
    }
}

impl std::error::Error for InvalidStyleTag {}

impl TryFrom<u32> for SummaryScreenStyle {
    type Error = InvalidStyleTag;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        SummaryScreenStyle::from_repr(tag).ok_or(InvalidStyleTag(tag))
    }
}

impl From<SummaryScreenStyle> for u32 {
    fn from(style: SummaryScreenStyle) -> Self {
        style.tag()
    }
}
