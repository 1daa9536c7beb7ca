use serde::{Deserialize, Serialize};

/// Number of slots in a party.
pub const PARTY_SIZE: usize = 6;

/// Nickname capacity in encoded characters, terminator included when shorter.
pub const NICKNAME_LEN: usize = 12;

// Status bitfield as stored in the record.
pub const STATUS_SLEEP: u32 = 0x7;
pub const STATUS_POISON: u32 = 1 << 3;
pub const STATUS_BURN: u32 = 1 << 4;
pub const STATUS_FREEZE: u32 = 1 << 5;
pub const STATUS_PARALYSIS: u32 = 1 << 6;
pub const STATUS_TOXIC_POISON: u32 = 1 << 7;

pub const FLAG_EGG: u8 = 1 << 0;
pub const FLAG_SHINY: u8 = 1 << 1;

/// One party member, laid out exactly as the host stores it.
///
/// The host hands the screen a pointer to a contiguous array of these
/// records. Both sides must agree on this layout; the size and alignment are
/// pinned by the assertions below.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pokemon {
    pub personality: u32,
    pub status: u32,
    pub species: u16,
    pub held_item: u16,
    pub hp: u16,
    pub max_hp: u16,
    pub nickname: [u8; NICKNAME_LEN],
    pub level: u8,
    pub tera_type: u8,
    pub flags: u8,
    pub reserved: u8,
}

const _: () = assert!(std::mem::size_of::<Pokemon>() == 32);
const _: () = assert!(std::mem::align_of::<Pokemon>() == 4);

/// Status icon shown on a party slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Ailment {
    None = 0,
    Poison = 1,
    Paralysis = 2,
    Sleep = 3,
    Freeze = 4,
    Burn = 5,
    Fainted = 7,
}

impl Ailment {
    /// Derive the icon from a status bitfield. Fainting is handled by the caller.
    pub const fn from_status(status: u32) -> Self {
        if status & (STATUS_POISON | STATUS_TOXIC_POISON) != 0 {
            Ailment::Poison
        } else if status & STATUS_PARALYSIS != 0 {
            Ailment::Paralysis
        } else if status & STATUS_SLEEP != 0 {
            Ailment::Sleep
        } else if status & STATUS_FREEZE != 0 {
            Ailment::Freeze
        } else if status & STATUS_BURN != 0 {
            Ailment::Burn
        } else {
            Ailment::None
        }
    }
}

impl Pokemon {
    pub const fn is_egg(&self) -> bool {
        self.flags & FLAG_EGG != 0
    }

    pub const fn is_shiny(&self) -> bool {
        self.flags & FLAG_SHINY != 0
    }

    pub const fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub const fn held_item(&self) -> Option<u16> {
        match self.held_item {
            0 => None,
            item => Some(item),
        }
    }

    /// Set the held item; 0 clears it.
    pub fn set_held_item(&mut self, item: u16) {
        self.held_item = item;
    }

    pub const fn ailment(&self) -> Ailment {
        if self.is_fainted() {
            return Ailment::Fainted;
        }
        Ailment::from_status(self.status)
    }
}
