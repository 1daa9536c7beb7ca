use crate::screen::PartyAction;
use schema::SummaryScreenStyle;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    // Lifecycle
    Opened {
        style: SummaryScreenStyle,
        party_size: usize,
    },
    SlotRevealed {
        slot: u8,
    },
    Resumed {
        focus: u8,
    },
    Closed,

    // Browsing
    FocusChanged {
        from: u8,
        to: u8,
    },

    // Action menu
    ActionMenuOpened {
        slot: u8,
        actions: Vec<PartyAction>,
    },
    ActionMenuCancelled {
        slot: u8,
    },
    ActionSelected {
        slot: u8,
        action: PartyAction,
    },

    // Switching
    SwitchStarted {
        origin: u8,
    },
    SwitchCancelled {
        origin: u8,
    },
    PokemonSwapped {
        from: u8,
        to: u8,
    },

    // Held items
    ItemTaken {
        slot: u8,
        item: u16,
    },
    BagFull {
        slot: u8,
        item: u16,
    },
    /// Neither the member nor the bag could keep the item.
    ItemLost {
        slot: u8,
        item: u16,
    },
    BagOpened {
        slot: u8,
    },
    ItemGiven {
        slot: u8,
        item: u16,
        previous: Option<u16>,
    },
    GiveCancelled {
        slot: u8,
    },

    // Detail pages
    DetailSummaryOpened {
        slot: u8,
    },
}

impl ScreenEvent {
    /// Formats the event into a human-readable line.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            ScreenEvent::Opened { style, party_size } => Some(format!(
                "Opened the {} screen with {} Pokemon",
                style, party_size
            )),
            ScreenEvent::SlotRevealed { .. } => None,
            ScreenEvent::Resumed { focus } => Some(format!("Returned to slot {}", focus + 1)),
            ScreenEvent::Closed => Some("Closed the party screen".to_string()),
            ScreenEvent::FocusChanged { .. } => None,
            ScreenEvent::ActionMenuOpened { .. } => None,
            ScreenEvent::ActionMenuCancelled { .. } => None,
            ScreenEvent::ActionSelected { slot, action } => {
                Some(format!("Chose {} for slot {}", action.label(), slot + 1))
            }
            ScreenEvent::SwitchStarted { origin } => {
                Some(format!("Move slot {} to where?", origin + 1))
            }
            ScreenEvent::SwitchCancelled { .. } => None,
            ScreenEvent::PokemonSwapped { from, to } => {
                Some(format!("Swapped slots {} and {}", from + 1, to + 1))
            }
            ScreenEvent::ItemTaken { slot, item } => {
                Some(format!("Took item {} from slot {}", item, slot + 1))
            }
            ScreenEvent::BagFull { item, .. } => {
                Some(format!("The bag has no room for item {}", item))
            }
            ScreenEvent::ItemLost { item, .. } => {
                Some(format!("Item {} could not be returned to the bag", item))
            }
            ScreenEvent::BagOpened { .. } => None,
            ScreenEvent::ItemGiven {
                slot,
                item,
                previous: Some(previous),
            } => Some(format!(
                "Slot {} now holds item {} (item {} returned to the bag)",
                slot + 1,
                item,
                previous
            )),
            ScreenEvent::ItemGiven {
                slot,
                item,
                previous: None,
            } => Some(format!("Slot {} now holds item {}", slot + 1, item)),
            ScreenEvent::GiveCancelled { .. } => None,
            ScreenEvent::DetailSummaryOpened { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<ScreenEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: ScreenEvent) {
        tracing::trace!(?event, "screen event");
        self.events.push(event);
    }

    pub fn events(&self) -> &[ScreenEvent] {
        &self.events
    }

    /// Take every recorded event, leaving the bus empty.
    pub fn drain(&mut self) -> Vec<ScreenEvent> {
        std::mem::take(&mut self.events)
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_debug();
    }

    /// Print all events using their formatted text, skipping silent ones.
    pub fn print_formatted(&self) {
        for line in self.events.iter().filter_map(ScreenEvent::format) {
            println!("  {}", line);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "EventBus ({} events):", self.events.len())?;
        for (i, event) in self.events.iter().enumerate() {
            writeln!(f, "  {}: {:?}", i, event)?;
        }
        Ok(())
    }
}
