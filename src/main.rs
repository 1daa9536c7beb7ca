//! Scripted walk through the party screen against an in-memory host.
//!
//! Usage: `summary-screen-demo [config.ron]`. Set `RUST_LOG=debug` to see the
//! screen's own logging.

use std::collections::HashMap;
use std::env;
use std::fs;

use summary_screen::charmap::PkString;
use summary_screen::{
    Buttons, DetailSummaryRequest, Host, MainCallback, PartyHandle, Pokemon, Scene, ScreenConfig,
    SummaryScreen, SummaryScreenStyle,
};
use tracing_subscriber::EnvFilter;

const ORAN_BERRY: u16 = 139;
const LEFTOVERS: u16 = 200;

unsafe extern "C" fn overworld() {}

#[derive(Default)]
struct DemoHost {
    pressed: Buttons,
    frames: usize,
    bag: HashMap<u16, u16>,
    returned: bool,
    detail_open: bool,
    bag_open: bool,
}

impl Host for DemoHost {
    fn new_keys(&self) -> Buttons {
        self.pressed
    }

    fn present(&mut self, scene: &Scene) {
        self.frames += 1;
        if !self.pressed.is_empty() {
            print_scene(scene);
        }
    }

    fn enter_frame_loop(&mut self) {}

    fn return_to(&mut self, _callback: MainCallback) {
        self.returned = true;
    }

    fn add_bag_item(&mut self, item: u16, quantity: u16) -> bool {
        *self.bag.entry(item).or_insert(0) += quantity;
        true
    }

    fn remove_bag_item(&mut self, item: u16, quantity: u16) -> bool {
        match self.bag.get_mut(&item) {
            Some(count) if *count >= quantity => {
                *count -= quantity;
                true
            }
            _ => false,
        }
    }

    fn open_detail_summary(&mut self, request: DetailSummaryRequest) {
        println!("  -> detailed summary of member {}", request.index + 1);
        self.detail_open = true;
    }

    fn open_bag_for_give(&mut self) {
        println!("  -> bag opened");
        self.bag_open = true;
    }

    fn last_viewed_mon_index(&self) -> u8 {
        2
    }

    fn chosen_bag_item(&self) -> u16 {
        LEFTOVERS
    }
}

fn print_scene(scene: &Scene) {
    for view in &scene.slots {
        let name = view
            .text
            .as_ref()
            .map(|t| t.name.decode())
            .unwrap_or_default();
        let stats = view
            .text
            .as_ref()
            .and_then(|t| t.stats.as_ref())
            .map(|s| format!("{} {}", s.level, s.hp))
            .unwrap_or_default();
        println!(
            "  [{}] {:<10} {:<14} {:?} item={:?}",
            view.slot, name, stats, view.background, view.held_item
        );
    }
    if let Some(menu) = &scene.menu {
        let labels: Vec<String> = menu
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let marker = if i == menu.cursor as usize { '>' } else { ' ' };
                format!("{marker}{}", action.label())
            })
            .collect();
        println!("  menu: {}", labels.join(" "));
    }
}

fn member(species: u16, name: &str, level: u8, hp: u16, max_hp: u16, item: u16) -> Pokemon {
    Pokemon {
        species,
        level,
        hp,
        max_hp,
        held_item: item,
        personality: species as u32 * 104_729,
        nickname: PkString::<13>::encode(name).to_array(),
        ..Default::default()
    }
}

fn load_config() -> ScreenConfig {
    let Some(path) = env::args().nth(1) else {
        return ScreenConfig::default();
    };
    match fs::read_to_string(&path).map_err(|e| e.to_string()).and_then(|source| {
        ScreenConfig::from_ron(&source).map_err(|e| e.to_string())
    }) {
        Ok(config) => config,
        Err(e) => {
            println!("Error loading {}: {}", path, e);
            ScreenConfig::default()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config();
    let mut mons = vec![
        member(25, "PIKACHU", 12, 31, 34, ORAN_BERRY),
        member(1, "BULBASAUR", 10, 6, 30, 0),
        member(7, "SQUIRTLE", 11, 0, 32, 0),
    ];
    let party = match unsafe { PartyHandle::from_raw(mons.as_mut_ptr(), mons.len() as u32) } {
        Ok(party) => party,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    let mut host = DemoHost::default();
    host.bag.insert(LEFTOVERS, 1);
    let mut screen = SummaryScreen::open(
        &mut host,
        Some(overworld),
        SummaryScreenStyle::Party,
        party,
        config,
    );

    let script = [
        ("move right", Buttons::RIGHT),
        ("open menu", Buttons::A),
        ("give item", Buttons::DOWN),
        ("", Buttons::DOWN),
        ("confirm", Buttons::A),
        ("open menu", Buttons::A),
        ("switch", Buttons::DOWN),
        ("confirm", Buttons::A),
        ("pick first", Buttons::LEFT),
        ("swap", Buttons::A),
        ("open menu", Buttons::A),
        ("summary", Buttons::A),
        ("back out", Buttons::B),
    ];

    for (label, buttons) in script {
        while !matches!(
            screen.phase(),
            summary_screen::Phase::Browsing
                | summary_screen::Phase::ActionMenu { .. }
                | summary_screen::Phase::ChoosingSwitch { .. }
        ) && !screen.is_closed()
        {
            host.pressed = Buttons::empty();
            screen.tick(&mut host);
            if host.bag_open {
                host.bag_open = false;
                if let Err(e) = screen.resume_from_bag(&mut host) {
                    println!("Error: {}", e);
                }
            }
            if host.detail_open {
                host.detail_open = false;
                if let Err(e) = screen.resume_from_detail(&mut host) {
                    println!("Error: {}", e);
                }
            }
        }
        if screen.is_closed() {
            break;
        }
        if !label.is_empty() {
            println!("{label}:");
        }
        host.pressed = buttons;
        screen.tick(&mut host);
    }

    println!();
    screen.events().print_formatted();
    println!(
        "{} frames drawn, returned to overworld: {}",
        host.frames, host.returned
    );
}
