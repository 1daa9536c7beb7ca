use schema::{Pokemon, SummaryScreenStyle};
use serde::{Deserialize, Serialize};

/// Entries of the per-member action menu.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PartyAction {
    Summary = 1,
    Switch = 2,
    GiveItem = 3,
    TakeItem = 4,
}

impl PartyAction {
    pub const fn label(self) -> &'static str {
        match self {
            PartyAction::Summary => "Summary",
            PartyAction::Switch => "Switch",
            PartyAction::GiveItem => "Give Item",
            PartyAction::TakeItem => "Take Item",
        }
    }

    /// Menu offered for one member.
    ///
    /// Read-only screens offer only the summary pages. Eggs cannot hold items.
    pub fn available(style: SummaryScreenStyle, mon: &Pokemon) -> Vec<PartyAction> {
        if !style.allows_mutation() {
            return vec![PartyAction::Summary];
        }
        if mon.is_egg() {
            return vec![PartyAction::Summary, PartyAction::Switch];
        }
        vec![
            PartyAction::Summary,
            PartyAction::Switch,
            PartyAction::GiveItem,
            PartyAction::TakeItem,
        ]
    }
}

/// Where the screen is waiting while another engine screen runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suspension {
    Detail,
    Bag { slot: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Slots are revealed one per frame.
    Loading { next_slot: u8 },
    Browsing,
    ActionMenu { actions: Vec<PartyAction>, cursor: u8 },
    /// Picking the slot to trade places with `origin`.
    ChoosingSwitch { origin: u8 },
    Swapping { from: u8, to: u8, frame: i16 },
    Suspended(Suspension),
    Closed,
}

impl Phase {
    /// Phases in which the screen owns the display.
    pub fn is_presenting(&self) -> bool {
        !matches!(self, Phase::Suspended(_) | Phase::Closed)
    }
}
