use crate::config::HpBarConfig;
use schema::{Buttons, PARTY_SIZE};
use serde::{Deserialize, Serialize};
use std::cmp::min;
use std::ops::Add;

/// Pixels per tile edge.
pub const TILE_SIZE: i16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vec2D<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2D<T> {
    pub const fn new(x: T, y: T) -> Self {
        Vec2D { x, y }
    }
}

impl<T> From<(T, T)> for Vec2D<T> {
    fn from((x, y): (T, T)) -> Self {
        Vec2D { x, y }
    }
}

impl Vec2D<u8> {
    pub fn tile_to_pixel(self) -> Vec2D<i16> {
        Vec2D {
            x: self.x as i16 * TILE_SIZE,
            y: self.y as i16 * TILE_SIZE,
        }
    }
}

impl<T: Add<Output = T>> Add for Vec2D<T> {
    type Output = Vec2D<T>;
    fn add(self, rhs: Self) -> Self::Output {
        Vec2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Position `frame` steps of `frames` along the way from `from` to `to`.
pub fn lerp(from: Vec2D<i16>, to: Vec2D<i16>, frame: i16, frames: i16) -> Vec2D<i16> {
    if frames <= 0 {
        return to;
    }
    // Widened so long animations cannot overflow.
    let axis = |a: i16, b: i16| {
        let (a, b, frame, frames) = (a as i32, b as i32, frame as i32, frames as i32);
        (b * frame / frames + a * (frames - frame) / frames) as i16
    };
    Vec2D::new(axis(from.x, to.x), axis(from.y, to.y))
}

/// Direction read from one frame of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Vertical,
}

impl Direction {
    /// Right wins over Left, which wins over Up/Down.
    pub fn from_buttons(pressed: Buttons) -> Option<Direction> {
        if pressed.contains(Buttons::RIGHT) {
            Some(Direction::Right)
        } else if pressed.contains(Buttons::LEFT) {
            Some(Direction::Left)
        } else if pressed.intersects(Buttons::UP | Buttons::DOWN) {
            Some(Direction::Vertical)
        } else {
            None
        }
    }
}

/// Move focus across a grid of `len` filled slots.
///
/// The grid holds two rows of three. Left/right walk the filled slots in
/// order and wrap; up/down jump to the other row, landing on the last filled
/// slot when the target is empty.
pub fn next_focus(current: u8, len: usize, direction: Direction) -> u8 {
    if len == 0 {
        return current;
    }
    let len = len as i16;
    let current = current as i16;
    let next = match direction {
        Direction::Right => (current + 1).rem_euclid(len),
        Direction::Left => (current - 1).rem_euclid(len),
        Direction::Vertical => min(len - 1, (current - 3).rem_euclid(PARTY_SIZE as i16)),
    };
    next as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackgroundStyle {
    Focused,
    Unfocused,
    SwitchFocused,
    SwitchUnfocused,
    KoFocused,
    KoUnfocused,
}

impl BackgroundStyle {
    pub const fn palette_index(self) -> u8 {
        match self {
            BackgroundStyle::Focused => 0,
            BackgroundStyle::Unfocused => 1,
            BackgroundStyle::SwitchFocused => 2,
            BackgroundStyle::SwitchUnfocused => 3,
            BackgroundStyle::KoFocused => 4,
            BackgroundStyle::KoUnfocused => 5,
        }
    }

    /// Fainted members use the KO palettes outside of switching.
    pub const fn resolve(self, fainted: bool) -> BackgroundStyle {
        match self {
            BackgroundStyle::Focused if fainted => BackgroundStyle::KoFocused,
            BackgroundStyle::Unfocused if fainted => BackgroundStyle::KoUnfocused,
            style => style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HpBarColor {
    Green,
    Yellow,
    Red,
}

impl HpBarColor {
    /// Host palette colours for the bar's top and bottom rows.
    pub const fn palette_pair(self) -> (u8, u8) {
        match self {
            HpBarColor::Red => (15, 14),
            HpBarColor::Yellow => (11, 10),
            HpBarColor::Green => (13, 12),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpBar {
    pub width: u16,
    pub color: HpBarColor,
}

impl HpBar {
    pub fn new(hp: u16, max_hp: u16, config: &HpBarConfig) -> HpBar {
        let width = if max_hp == 0 {
            0
        } else {
            let scaled = hp as u32 * config.width as u32 / max_hp as u32;
            scaled.min(config.width as u32) as u16
        };
        let color = if width < config.red_below {
            HpBarColor::Red
        } else if width < config.yellow_below {
            HpBarColor::Yellow
        } else {
            HpBarColor::Green
        };
        HpBar { width, color }
    }
}
