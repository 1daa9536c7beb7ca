use crate::charmap::PkString;
use crate::config::ScreenConfig;
use crate::host::{DetailSummaryRequest, Host, MainCallback};
use crate::party::PartyHandle;
use crate::scene::Scene;
use crate::screen::{Phase, SummaryScreen};
use schema::{Buttons, Pokemon, SummaryScreenStyle, FLAG_EGG, NICKNAME_LEN};
use std::collections::HashMap;

/// A builder for creating test party records with common defaults.
///
/// # Example
/// ```
/// let mon = TestPokemonBuilder::new(25, 12)
///     .with_nickname("Sparky")
///     .with_item(13)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    mon: Pokemon,
}

impl TestPokemonBuilder {
    /// Creates a builder for a healthy member of the given species and level.
    pub fn new(species: u16, level: u8) -> Self {
        let max_hp = level as u16 * 3 + 10;
        Self {
            mon: Pokemon {
                species,
                level,
                hp: max_hp,
                max_hp,
                personality: species as u32 * 7919,
                ..Default::default()
            },
        }
        .with_nickname("Mon")
    }

    pub fn with_nickname(mut self, name: &str) -> Self {
        let encoded = PkString::<{ NICKNAME_LEN + 1 }>::encode(name);
        self.mon.nickname = encoded.to_array::<NICKNAME_LEN>();
        self
    }

    pub fn with_hp(mut self, hp: u16) -> Self {
        self.mon.hp = hp;
        self
    }

    pub fn with_item(mut self, item: u16) -> Self {
        self.mon.held_item = item;
        self
    }

    pub fn with_status(mut self, status: u32) -> Self {
        self.mon.status = status;
        self
    }

    pub fn egg(mut self) -> Self {
        self.mon.flags |= FLAG_EGG;
        self
    }

    pub fn build(self) -> Pokemon {
        self.mon
    }
}

/// Six healthy members with distinct species 1..=6.
pub fn full_party() -> Vec<Pokemon> {
    (1..=6)
        .map(|species| TestPokemonBuilder::new(species, 10 + species as u8).build())
        .collect()
}

pub unsafe extern "C" fn test_callback() {}

pub const TEST_CALLBACK: MainCallback = Some(test_callback);

/// In-memory host recording every call the screen makes.
#[derive(Default)]
pub struct MockHost {
    pub pressed: Buttons,
    pub scenes: Vec<Scene>,
    pub frame_loop_entries: usize,
    pub returned_to: Vec<MainCallback>,
    pub bag: HashMap<u16, u16>,
    /// Maximum number of distinct items the bag holds.
    pub bag_capacity: usize,
    pub detail_requests: Vec<DetailSummaryRequest>,
    pub bag_openings: usize,
    pub last_viewed: u8,
    pub chosen_item: u16,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            bag_capacity: 30,
            ..Default::default()
        }
    }

    pub fn with_bag(mut self, items: &[(u16, u16)]) -> Self {
        self.bag.extend(items.iter().copied());
        self
    }

    pub fn last_scene(&self) -> &Scene {
        self.scenes.last().expect("no scene presented yet")
    }

    pub fn bag_count(&self, item: u16) -> u16 {
        self.bag.get(&item).copied().unwrap_or(0)
    }
}

impl Host for MockHost {
    fn new_keys(&self) -> Buttons {
        self.pressed
    }

    fn present(&mut self, scene: &Scene) {
        self.scenes.push(scene.clone());
    }

    fn enter_frame_loop(&mut self) {
        self.frame_loop_entries += 1;
    }

    fn return_to(&mut self, callback: MainCallback) {
        self.returned_to.push(callback);
    }

    fn add_bag_item(&mut self, item: u16, quantity: u16) -> bool {
        if !self.bag.contains_key(&item) && self.bag.len() >= self.bag_capacity {
            return false;
        }
        *self.bag.entry(item).or_insert(0) += quantity;
        true
    }

    fn remove_bag_item(&mut self, item: u16, quantity: u16) -> bool {
        match self.bag.get_mut(&item) {
            Some(count) if *count >= quantity => {
                *count -= quantity;
                if *count == 0 {
                    self.bag.remove(&item);
                }
                true
            }
            _ => false,
        }
    }

    fn open_detail_summary(&mut self, request: DetailSummaryRequest) {
        self.detail_requests.push(request);
    }

    fn open_bag_for_give(&mut self) {
        self.bag_openings += 1;
    }

    fn last_viewed_mon_index(&self) -> u8 {
        self.last_viewed
    }

    fn chosen_bag_item(&self) -> u16 {
        self.chosen_item
    }
}

/// Open a screen over `mons`. The vector must outlive the screen and stay
/// untouched while it is open.
pub fn open_screen(
    host: &mut MockHost,
    mons: &mut [Pokemon],
    style: SummaryScreenStyle,
) -> SummaryScreen {
    open_screen_with_config(host, mons, style, ScreenConfig::default())
}

pub fn open_screen_with_config(
    host: &mut MockHost,
    mons: &mut [Pokemon],
    style: SummaryScreenStyle,
    config: ScreenConfig,
) -> SummaryScreen {
    let party = unsafe { PartyHandle::from_raw(mons.as_mut_ptr(), mons.len() as u32) }
        .expect("test party should be valid");
    SummaryScreen::open(host, TEST_CALLBACK, style, party, config)
}

/// Run one frame with `buttons` newly pressed.
pub fn press(screen: &mut SummaryScreen, host: &mut MockHost, buttons: Buttons) {
    host.pressed = buttons;
    screen.tick(host);
    host.pressed = Buttons::empty();
}

/// Tick with no input until every slot is on screen.
pub fn finish_loading(screen: &mut SummaryScreen, host: &mut MockHost) {
    for _ in 0..=schema::PARTY_SIZE {
        if !matches!(screen.phase(), Phase::Loading { .. }) {
            break;
        }
        press(screen, host, Buttons::empty());
    }
    assert_eq!(screen.phase(), &Phase::Browsing, "screen should finish loading");
}

/// Open a fully loaded Party-style screen.
pub fn browsing_screen(host: &mut MockHost, mons: &mut [Pokemon]) -> SummaryScreen {
    let mut screen = open_screen(host, mons, SummaryScreenStyle::Party);
    finish_loading(&mut screen, host);
    screen
}
