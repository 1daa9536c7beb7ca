use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Key mask as the host reports it, one bit per hardware button.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Buttons: u16 {
        const A = 1 << 0;
        const B = 1 << 1;
        const SELECT = 1 << 2;
        const START = 1 << 3;
        const RIGHT = 1 << 4;
        const LEFT = 1 << 5;
        const UP = 1 << 6;
        const DOWN = 1 << 7;
        const R = 1 << 8;
        const L = 1 << 9;
    }
}

impl Buttons {
    /// Build a mask from the raw host value, dropping bits with no button.
    pub const fn from_raw(raw: u16) -> Self {
        Buttons::from_bits_truncate(raw)
    }
}
