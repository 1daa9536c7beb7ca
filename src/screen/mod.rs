//! The party summary screen.
//!
//! A [`SummaryScreen`] is opened once by the entry point and then advanced
//! one frame at a time with [`SummaryScreen::tick`]. Each phase reads the
//! frame's new key presses, decides the next phase and, while the screen owns
//! the display, presents a [`Scene`]. Leaving for the host's detailed summary
//! pages or the bag suspends the screen until the matching resume call.

mod phase;

#[cfg(test)]
pub(crate) mod tests;

pub use phase::{PartyAction, Phase, Suspension};

use crate::config::ScreenConfig;
use crate::errors::{ScreenError, ScreenResult};
use crate::events::{EventBus, ScreenEvent};
use crate::host::{DetailSummaryRequest, Host, MainCallback};
use crate::layout::{lerp, next_focus, BackgroundStyle, Direction, Vec2D};
use crate::party::PartyHandle;
use crate::scene::{MenuView, Scene, SlotView};
use schema::{Buttons, Pokemon, SummaryScreenStyle};
use std::cmp::min;
use tracing::{debug, info, warn};

pub struct SummaryScreen {
    callback: MainCallback,
    style: SummaryScreenStyle,
    party: PartyHandle,
    config: ScreenConfig,
    focus: u8,
    phase: Phase,
    events: EventBus,
}

impl SummaryScreen {
    /// Take over the frame loop and start loading the party.
    ///
    /// `callback` is where control goes when the player backs out.
    pub fn open<H: Host + ?Sized>(
        host: &mut H,
        callback: MainCallback,
        style: SummaryScreenStyle,
        party: PartyHandle,
        config: ScreenConfig,
    ) -> SummaryScreen {
        info!(%style, party_size = party.len(), "opening summary screen");
        let mut events = EventBus::new();
        events.push(ScreenEvent::Opened {
            style,
            party_size: party.len(),
        });
        host.enter_frame_loop();
        SummaryScreen {
            callback,
            style,
            party,
            config,
            focus: 0,
            phase: Phase::Loading { next_slot: 0 },
            events,
        }
    }

    pub fn style(&self) -> SummaryScreenStyle {
        self.style
    }

    pub fn callback(&self) -> MainCallback {
        self.callback
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn focus(&self) -> u8 {
        self.focus
    }

    pub fn party(&self) -> &PartyHandle {
        &self.party
    }

    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<ScreenEvent> {
        self.events.drain()
    }

    /// Advance one frame.
    pub fn tick<H: Host + ?Sized>(&mut self, host: &mut H) {
        let pressed = host.new_keys();
        let phase = std::mem::replace(&mut self.phase, Phase::Closed);
        self.phase = match phase {
            Phase::Loading { next_slot } => self.load(next_slot),
            Phase::Browsing => self.browse(host, pressed),
            Phase::ActionMenu { actions, cursor } => {
                self.choose_action(host, pressed, actions, cursor)
            }
            Phase::ChoosingSwitch { origin } => self.choose_switch(pressed, origin),
            Phase::Swapping { from, to, frame } => self.animate_swap(from, to, frame + 1),
            suspended @ Phase::Suspended(_) => {
                debug!("tick while suspended ignored");
                suspended
            }
            Phase::Closed => Phase::Closed,
        };
        if self.phase.is_presenting() {
            host.present(&self.scene());
        }
    }

    fn load(&mut self, next_slot: u8) -> Phase {
        if next_slot as usize >= self.party.len() {
            return Phase::Browsing;
        }
        self.events.push(ScreenEvent::SlotRevealed { slot: next_slot });
        let next_slot = next_slot + 1;
        if next_slot as usize >= self.party.len() {
            debug!(party_size = self.party.len(), "party loaded");
            Phase::Browsing
        } else {
            Phase::Loading { next_slot }
        }
    }

    fn move_focus(&mut self, pressed: Buttons) -> bool {
        let Some(direction) = Direction::from_buttons(pressed) else {
            return false;
        };
        let next = next_focus(self.focus, self.party.len(), direction);
        if next == self.focus {
            return false;
        }
        debug!(from = self.focus, to = next, "focus moved");
        self.events.push(ScreenEvent::FocusChanged {
            from: self.focus,
            to: next,
        });
        self.focus = next;
        true
    }

    fn browse<H: Host + ?Sized>(&mut self, host: &mut H, pressed: Buttons) -> Phase {
        if pressed.contains(Buttons::B) {
            return self.close(host);
        }
        if self.move_focus(pressed) {
            return Phase::Browsing;
        }
        if pressed.contains(Buttons::A) {
            if let Some(mon) = self.party.get(self.focus as usize) {
                let actions = PartyAction::available(self.style, mon);
                self.events.push(ScreenEvent::ActionMenuOpened {
                    slot: self.focus,
                    actions: actions.clone(),
                });
                return Phase::ActionMenu { actions, cursor: 0 };
            }
        }
        Phase::Browsing
    }

    fn close<H: Host + ?Sized>(&mut self, host: &mut H) -> Phase {
        info!("closing summary screen");
        self.events.push(ScreenEvent::Closed);
        host.return_to(self.callback);
        Phase::Closed
    }

    fn choose_action<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        pressed: Buttons,
        actions: Vec<PartyAction>,
        cursor: u8,
    ) -> Phase {
        if pressed.contains(Buttons::B) {
            self.events
                .push(ScreenEvent::ActionMenuCancelled { slot: self.focus });
            return Phase::Browsing;
        }
        if pressed.contains(Buttons::A) {
            if let Some(&action) = actions.get(cursor as usize) {
                self.events.push(ScreenEvent::ActionSelected {
                    slot: self.focus,
                    action,
                });
                return self.perform(host, action);
            }
        }
        let last = actions.len().saturating_sub(1) as u8;
        let cursor = if pressed.contains(Buttons::UP) {
            cursor.saturating_sub(1)
        } else if pressed.contains(Buttons::DOWN) {
            min(cursor + 1, last)
        } else {
            cursor
        };
        Phase::ActionMenu { actions, cursor }
    }

    fn perform<H: Host + ?Sized>(&mut self, host: &mut H, action: PartyAction) -> Phase {
        match action {
            PartyAction::Summary => {
                let request = DetailSummaryRequest {
                    style: self.style,
                    party: self.party.as_ptr(),
                    index: self.focus,
                    last_index: self.party.len().saturating_sub(1) as u8,
                };
                info!(slot = self.focus, "opening detail summary");
                self.events
                    .push(ScreenEvent::DetailSummaryOpened { slot: self.focus });
                host.open_detail_summary(request);
                Phase::Suspended(Suspension::Detail)
            }
            PartyAction::Switch => {
                self.events
                    .push(ScreenEvent::SwitchStarted { origin: self.focus });
                Phase::ChoosingSwitch { origin: self.focus }
            }
            PartyAction::GiveItem => {
                info!(slot = self.focus, "opening bag to give an item");
                self.events.push(ScreenEvent::BagOpened { slot: self.focus });
                host.open_bag_for_give();
                Phase::Suspended(Suspension::Bag { slot: self.focus })
            }
            PartyAction::TakeItem => {
                self.take_item(host);
                Phase::Browsing
            }
        }
    }

    fn take_item<H: Host + ?Sized>(&mut self, host: &mut H) {
        let slot = self.focus;
        let Some(item) = self.party.get(slot as usize).and_then(Pokemon::held_item) else {
            return;
        };
        if !host.add_bag_item(item, 1) {
            warn!(slot, item, "bag full, item stays held");
            self.events.push(ScreenEvent::BagFull { slot, item });
            return;
        }
        if let Ok(mon) = self.party.get_mut(slot as usize) {
            mon.set_held_item(0);
        }
        info!(slot, item, "took held item");
        self.events.push(ScreenEvent::ItemTaken { slot, item });
    }

    fn choose_switch(&mut self, pressed: Buttons, origin: u8) -> Phase {
        if pressed.contains(Buttons::B) {
            self.events.push(ScreenEvent::SwitchCancelled { origin });
            return Phase::Browsing;
        }
        if pressed.contains(Buttons::A) {
            if self.focus == origin {
                self.events.push(ScreenEvent::SwitchCancelled { origin });
                return Phase::Browsing;
            }
            return Phase::Swapping {
                from: origin,
                to: self.focus,
                frame: 0,
            };
        }
        self.move_focus(pressed);
        Phase::ChoosingSwitch { origin }
    }

    fn animate_swap(&mut self, from: u8, to: u8, frame: i16) -> Phase {
        if frame < self.config.swap_frames {
            return Phase::Swapping { from, to, frame };
        }
        match self.party.swap(from as usize, to as usize) {
            Ok(()) => {
                info!(from, to, "swapped party members");
                self.events.push(ScreenEvent::PokemonSwapped { from, to });
            }
            Err(err) => warn!(%err, "swap abandoned"),
        }
        Phase::Browsing
    }

    /// Continue after the host's detailed summary pages close.
    pub fn resume_from_detail<H: Host + ?Sized>(&mut self, host: &mut H) -> ScreenResult<()> {
        if self.phase != Phase::Suspended(Suspension::Detail) {
            return Err(ScreenError::NotSuspended {
                expected: "detail summary",
            });
        }
        let last_viewed = host.last_viewed_mon_index();
        let last_slot = self.party.len().saturating_sub(1) as u8;
        self.focus = min(last_viewed, last_slot);
        self.reload(host);
        Ok(())
    }

    /// Continue after the bag closes, giving the chosen item to the member
    /// the bag was opened for.
    pub fn resume_from_bag<H: Host + ?Sized>(&mut self, host: &mut H) -> ScreenResult<()> {
        let Phase::Suspended(Suspension::Bag { slot }) = self.phase else {
            return Err(ScreenError::NotSuspended { expected: "bag" });
        };
        match host.chosen_bag_item() {
            0 => self.events.push(ScreenEvent::GiveCancelled { slot }),
            item => self.give_item(host, slot, item)?,
        }
        self.focus = slot;
        self.reload(host);
        Ok(())
    }

    fn give_item<H: Host + ?Sized>(&mut self, host: &mut H, slot: u8, item: u16) -> ScreenResult<()> {
        let mon = self.party.get_mut(slot as usize)?;
        let previous = mon.held_item();
        if !host.remove_bag_item(item, 1) {
            warn!(slot, item, "chosen item is not in the bag");
            self.events.push(ScreenEvent::GiveCancelled { slot });
            return Ok(());
        }
        if let Some(previous) = previous {
            if !host.add_bag_item(previous, 1) {
                warn!(slot, item = previous, "bag full, previous item stays held");
                if !host.add_bag_item(item, 1) {
                    warn!(slot, item, "bag refused the chosen item back, it is lost");
                    self.events.push(ScreenEvent::ItemLost { slot, item });
                }
                self.events.push(ScreenEvent::BagFull {
                    slot,
                    item: previous,
                });
                return Ok(());
            }
        }
        mon.set_held_item(item);
        info!(slot, item, ?previous, "gave held item");
        self.events.push(ScreenEvent::ItemGiven {
            slot,
            item,
            previous,
        });
        Ok(())
    }

    fn reload<H: Host + ?Sized>(&mut self, host: &mut H) {
        info!(focus = self.focus, "resuming summary screen");
        self.events.push(ScreenEvent::Resumed { focus: self.focus });
        self.phase = Phase::Loading { next_slot: 0 };
        host.enter_frame_loop();
    }

    fn background_for(&self, slot: u8) -> BackgroundStyle {
        let focused = slot == self.focus;
        match self.phase {
            Phase::ChoosingSwitch { origin } if focused || slot == origin => {
                if focused {
                    BackgroundStyle::SwitchFocused
                } else {
                    BackgroundStyle::SwitchUnfocused
                }
            }
            Phase::Swapping { from, to, .. } if slot == to || slot == from => {
                if slot == to {
                    BackgroundStyle::SwitchFocused
                } else {
                    BackgroundStyle::SwitchUnfocused
                }
            }
            _ if focused => BackgroundStyle::Focused,
            _ => BackgroundStyle::Unfocused,
        }
    }

    fn home(&self, slot: u8) -> Vec2D<i16> {
        self.config.slot_origin(slot as usize).tile_to_pixel()
    }

    /// What the host should draw for the current phase.
    pub fn scene(&self) -> Scene {
        let visible = match self.phase {
            Phase::Loading { next_slot } => next_slot as usize,
            _ => self.party.len(),
        };
        let frames = self.config.swap_frames;
        let slots = self
            .party
            .members()
            .iter()
            .take(visible)
            .enumerate()
            .map(|(index, mon)| {
                let slot = index as u8;
                let (origin, show_text) = match self.phase {
                    Phase::Swapping { from, to, frame } if slot == from => {
                        (lerp(self.home(from), self.home(to), frame, frames), false)
                    }
                    Phase::Swapping { from, to, frame } if slot == to => {
                        (lerp(self.home(to), self.home(from), frame, frames), false)
                    }
                    _ => (self.home(slot), true),
                };
                SlotView::build(
                    slot,
                    mon,
                    origin,
                    self.background_for(slot),
                    show_text,
                    &self.config,
                )
            })
            .collect();
        let menu = match &self.phase {
            Phase::ActionMenu { actions, cursor } => Some(MenuView {
                actions: actions.clone(),
                cursor: *cursor,
            }),
            _ => None,
        };
        Scene { slots, menu }
    }
}
