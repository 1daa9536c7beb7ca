//! Description of one frame of the party screen.
//!
//! The screen never touches tiles or sprites itself. Each frame it hands the
//! host a [`Scene`] and the host draws it with its own graphics routines.

use crate::charmap::PkString;
use crate::config::ScreenConfig;
use crate::layout::{BackgroundStyle, HpBar, Vec2D};
use crate::screen::PartyAction;
use schema::{Ailment, Pokemon};
use serde::Serialize;

pub const NAME_CAP: usize = 13;
pub const LEVEL_CAP: usize = 6;
pub const HP_CAP: usize = 11;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub slots: Vec<SlotView>,
    pub menu: Option<MenuView>,
}

impl Scene {
    pub fn slot(&self, slot: u8) -> Option<&SlotView> {
        self.slots.iter().find(|view| view.slot == slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub actions: Vec<PartyAction>,
    pub cursor: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpritePositions {
    pub pokemon: Vec2D<i16>,
    pub item: Vec2D<i16>,
    pub tera: Vec2D<i16>,
    pub status: Vec2D<i16>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    pub slot: u8,
    /// Pixel position of the slot's top-left corner.
    pub origin: Vec2D<i16>,
    pub background: BackgroundStyle,
    pub species: u16,
    pub personality: u32,
    pub shiny: bool,
    pub egg: bool,
    pub held_item: Option<u16>,
    pub ailment: Ailment,
    /// Eggs have no tera icon.
    pub tera_type: Option<u8>,
    pub sprites: SpritePositions,
    /// Hidden while the slot is being swapped.
    pub text: Option<SlotText>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotText {
    pub name: PkString<NAME_CAP>,
    /// Eggs only show their name.
    pub stats: Option<SlotStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotStats {
    pub level: PkString<LEVEL_CAP>,
    pub hp: PkString<HP_CAP>,
    pub hp_bar: HpBar,
}

impl SlotStats {
    fn for_member(mon: &Pokemon, config: &ScreenConfig) -> SlotStats {
        SlotStats {
            level: PkString::encode(&format!("Lv{}", mon.level)),
            hp: PkString::encode(&format!("{:<3}/{:<3}", mon.hp, mon.max_hp)),
            hp_bar: HpBar::new(mon.hp, mon.max_hp, &config.hp_bar),
        }
    }
}

impl SlotView {
    pub fn build(
        slot: u8,
        mon: &Pokemon,
        origin: Vec2D<i16>,
        background: BackgroundStyle,
        show_text: bool,
        config: &ScreenConfig,
    ) -> SlotView {
        let offsets = &config.sprite_offsets;
        let egg = mon.is_egg();
        let text = show_text.then(|| SlotText {
            name: PkString::from_raw(&mon.nickname),
            stats: (!egg).then(|| SlotStats::for_member(mon, config)),
        });
        SlotView {
            slot,
            origin,
            background: background.resolve(mon.is_fainted()),
            species: mon.species,
            personality: mon.personality,
            shiny: mon.is_shiny(),
            egg,
            held_item: mon.held_item(),
            ailment: mon.ailment(),
            tera_type: (!egg).then_some(mon.tera_type),
            sprites: SpritePositions {
                pokemon: origin + offsets.pokemon(),
                item: origin + offsets.item(),
                tera: origin + offsets.tera(),
                status: origin + offsets.status(),
            },
            text,
        }
    }
}
