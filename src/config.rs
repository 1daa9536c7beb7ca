use crate::errors::{ConfigError, ConfigResult};
use crate::layout::Vec2D;
use schema::PARTY_SIZE;
use serde::{Deserialize, Serialize};

/// Layout and timing of the party screen.
///
/// Every field has a default, so a RON file only needs to name the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Frames the switch animation runs for.
    pub swap_frames: i16,
    /// Top-left tile of each party slot.
    pub slot_origins: [(u8, u8); PARTY_SIZE],
    pub sprite_offsets: SpriteOffsets,
    pub hp_bar: HpBarConfig,
}

/// Pixel offsets of a slot's sprites from the slot origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteOffsets {
    pub pokemon: (i16, i16),
    pub item: (i16, i16),
    pub tera: (i16, i16),
    pub status: (i16, i16),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HpBarConfig {
    /// Width of a full bar in pixels.
    pub width: u16,
    /// Bars narrower than this are drawn red.
    pub red_below: u16,
    /// Bars narrower than this (and not red) are drawn yellow.
    pub yellow_below: u16,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            swap_frames: 20,
            slot_origins: [(1, 1), (11, 1), (21, 1), (1, 10), (11, 10), (21, 10)],
            sprite_offsets: SpriteOffsets::default(),
            hp_bar: HpBarConfig::default(),
        }
    }
}

impl Default for SpriteOffsets {
    fn default() -> Self {
        SpriteOffsets {
            pokemon: (36, 32),
            item: (62, 52),
            tera: (62, 20),
            status: (12, 44),
        }
    }
}

impl Default for HpBarConfig {
    fn default() -> Self {
        HpBarConfig {
            width: 48,
            red_below: 12,
            yellow_below: 24,
        }
    }
}

impl ScreenConfig {
    /// Parse a RON document and validate it.
    pub fn from_ron(source: &str) -> ConfigResult<ScreenConfig> {
        let config: ScreenConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.swap_frames < 1 {
            return Err(ConfigError::Invalid(format!(
                "swap_frames must be at least 1, got {}",
                self.swap_frames
            )));
        }
        let bar = &self.hp_bar;
        if bar.red_below > bar.yellow_below || bar.yellow_below > bar.width {
            return Err(ConfigError::Invalid(format!(
                "hp bar thresholds must satisfy red_below <= yellow_below <= width, got {} / {} / {}",
                bar.red_below, bar.yellow_below, bar.width
            )));
        }
        let offsets = [
            self.sprite_offsets.pokemon,
            self.sprite_offsets.item,
            self.sprite_offsets.tera,
            self.sprite_offsets.status,
        ];
        for slot in 0..PARTY_SIZE {
            let origin = self.slot_origin(slot).tile_to_pixel();
            for (dx, dy) in offsets {
                if origin.x.checked_add(dx).is_none() || origin.y.checked_add(dy).is_none() {
                    return Err(ConfigError::Invalid(format!(
                        "sprite offset ({}, {}) from slot {} leaves the screen coordinate range",
                        dx, dy, slot
                    )));
                }
            }
        }
        Ok(())
    }

    /// Tile origin of a slot. Indices past the party wrap onto the grid.
    pub fn slot_origin(&self, slot: usize) -> Vec2D<u8> {
        let (x, y) = self.slot_origins[slot % PARTY_SIZE];
        Vec2D::new(x, y)
    }
}

impl SpriteOffsets {
    pub fn pokemon(&self) -> Vec2D<i16> {
        Vec2D::from(self.pokemon)
    }

    pub fn item(&self) -> Vec2D<i16> {
        Vec2D::from(self.item)
    }

    pub fn tera(&self) -> Vec2D<i16> {
        Vec2D::from(self.tera)
    }

    pub fn status(&self) -> Vec2D<i16> {
        Vec2D::from(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = ScreenConfig::from_ron("()").unwrap();
        assert_eq!(config, ScreenConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ScreenConfig::from_ron("(swap_frames: 8, hp_bar: (width: 64))").unwrap();
        assert_eq!(config.swap_frames, 8);
        assert_eq!(config.hp_bar.width, 64);
        assert_eq!(config.hp_bar.red_below, 12);
        assert_eq!(config.slot_origin(3), Vec2D::new(1, 10));
    }

    #[test]
    fn test_zero_swap_frames_rejected() {
        let err = ScreenConfig::from_ron("(swap_frames: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let err = ScreenConfig::from_ron("(hp_bar: (red_below: 30, yellow_below: 20))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_offset_past_coordinate_range_rejected() {
        let err = ScreenConfig::from_ron(
            "(slot_origins: ((255, 255), (11, 1), (21, 1), (1, 10), (11, 10), (21, 10)), \
             sprite_offsets: (pokemon: (32000, 0)))",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = ScreenConfig::from_ron("(sprite_offsets: (status: (0, 32767)))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_far_but_representable_offsets_accepted() {
        let config = ScreenConfig::from_ron(
            "(slot_origins: ((255, 255), (11, 1), (21, 1), (1, 10), (11, 10), (21, 10)), \
             sprite_offsets: (pokemon: (30000, -30000)))",
        )
        .unwrap();
        assert_eq!(config.sprite_offsets.pokemon, (30000, -30000));
    }

    #[test]
    fn test_malformed_source() {
        let err = ScreenConfig::from_ron("(swap_frames: \"fast\")").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }
}
