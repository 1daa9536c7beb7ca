//! Host function table supplied by the C engine.

use super::{SummaryScreen_MainCallback, SummaryScreen_ReturnFromBag, SummaryScreen_ReturnFromDetail};
use crate::errors::{BindingError, BindingResult};
use crate::host::{DetailSummaryRequest, Host, MainCallback};
use crate::scene::{Scene, SlotView, HP_CAP, LEVEL_CAP, NAME_CAP};
use schema::{Buttons, Pokemon};

/// `tera_type` value meaning "no icon".
pub const NO_TERA_TYPE: u8 = 0xFF;

pub const TEXT_NAME: u8 = 1 << 0;
pub const TEXT_STATS: u8 = 1 << 1;

/// Functions the engine exports to the screen. Every entry is required.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct HostVTable {
    pub new_keys: Option<unsafe extern "C" fn() -> u16>,
    /// Start a frame showing `slot_count` slots.
    pub begin_scene: Option<unsafe extern "C" fn(slot_count: u8)>,
    pub present_slot: Option<unsafe extern "C" fn(slot: *const SlotRender)>,
    /// `count == 0` hides the action menu.
    pub present_menu: Option<unsafe extern "C" fn(actions: *const u8, count: u8, cursor: u8)>,
    pub set_main_callback: Option<unsafe extern "C" fn(callback: MainCallback)>,
    pub add_bag_item: Option<unsafe extern "C" fn(item: u16, quantity: u16) -> bool>,
    pub remove_bag_item: Option<unsafe extern "C" fn(item: u16, quantity: u16) -> bool>,
    pub show_summary_pages: Option<
        unsafe extern "C" fn(
            style: u32,
            mons: *mut Pokemon,
            index: u8,
            last_index: u8,
            return_to: MainCallback,
        ),
    >,
    pub open_bag: Option<unsafe extern "C" fn(return_to: MainCallback)>,
    pub last_viewed_mon_index: Option<unsafe extern "C" fn() -> u8>,
    pub chosen_bag_item: Option<unsafe extern "C" fn() -> u16>,
}

/// One party slot flattened for C.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRender {
    pub personality: u32,
    pub origin_x: i16,
    pub origin_y: i16,
    pub pokemon_x: i16,
    pub pokemon_y: i16,
    pub item_x: i16,
    pub item_y: i16,
    pub tera_x: i16,
    pub tera_y: i16,
    pub status_x: i16,
    pub status_y: i16,
    pub species: u16,
    /// 0 when nothing is held.
    pub held_item: u16,
    pub hp_bar_width: u16,
    pub slot: u8,
    pub background_palette: u8,
    pub ailment: u8,
    pub tera_type: u8,
    pub is_shiny: u8,
    pub is_egg: u8,
    /// `TEXT_NAME` and `TEXT_STATS` bits.
    pub text_flags: u8,
    pub hp_bar_top_color: u8,
    pub hp_bar_bottom_color: u8,
    pub name: [u8; NAME_CAP],
    pub level: [u8; LEVEL_CAP],
    pub hp: [u8; HP_CAP],
}

impl From<&SlotView> for SlotRender {
    fn from(view: &SlotView) -> Self {
        let text = view.text.as_ref();
        let stats = text.and_then(|t| t.stats.as_ref());
        let mut text_flags = 0;
        if text.is_some() {
            text_flags |= TEXT_NAME;
        }
        if stats.is_some() {
            text_flags |= TEXT_STATS;
        }
        let (top, bottom) = stats
            .map(|s| s.hp_bar.color.palette_pair())
            .unwrap_or((0, 0));
        SlotRender {
            personality: view.personality,
            origin_x: view.origin.x,
            origin_y: view.origin.y,
            pokemon_x: view.sprites.pokemon.x,
            pokemon_y: view.sprites.pokemon.y,
            item_x: view.sprites.item.x,
            item_y: view.sprites.item.y,
            tera_x: view.sprites.tera.x,
            tera_y: view.sprites.tera.y,
            status_x: view.sprites.status.x,
            status_y: view.sprites.status.y,
            species: view.species,
            held_item: view.held_item.unwrap_or(0),
            hp_bar_width: stats.map(|s| s.hp_bar.width).unwrap_or(0),
            slot: view.slot,
            background_palette: view.background.palette_index(),
            ailment: view.ailment as u8,
            tera_type: view.tera_type.unwrap_or(NO_TERA_TYPE),
            is_shiny: view.shiny as u8,
            is_egg: view.egg as u8,
            text_flags,
            hp_bar_top_color: top,
            hp_bar_bottom_color: bottom,
            name: text.map(|t| t.name.to_array()).unwrap_or([crate::charmap::EOS; NAME_CAP]),
            level: stats
                .map(|s| s.level.to_array())
                .unwrap_or([crate::charmap::EOS; LEVEL_CAP]),
            hp: stats
                .map(|s| s.hp.to_array())
                .unwrap_or([crate::charmap::EOS; HP_CAP]),
        }
    }
}

type Keys = unsafe extern "C" fn() -> u16;
type BeginScene = unsafe extern "C" fn(u8);
type PresentSlot = unsafe extern "C" fn(*const SlotRender);
type PresentMenu = unsafe extern "C" fn(*const u8, u8, u8);
type SetMainCallback = unsafe extern "C" fn(MainCallback);
type BagOp = unsafe extern "C" fn(u16, u16) -> bool;
type ShowSummaryPages = unsafe extern "C" fn(u32, *mut Pokemon, u8, u8, MainCallback);
type OpenBag = unsafe extern "C" fn(MainCallback);
type ReadU8 = unsafe extern "C" fn() -> u8;
type ReadU16 = unsafe extern "C" fn() -> u16;

/// [`Host`] backed by a validated [`HostVTable`].
#[derive(Debug, Clone, Copy)]
pub struct VTableHost {
    new_keys: Keys,
    begin_scene: BeginScene,
    present_slot: PresentSlot,
    present_menu: PresentMenu,
    set_main_callback: SetMainCallback,
    add_bag_item: BagOp,
    remove_bag_item: BagOp,
    show_summary_pages: ShowSummaryPages,
    open_bag: OpenBag,
    last_viewed_mon_index: ReadU8,
    chosen_bag_item: ReadU16,
}

impl VTableHost {
    /// Copy the table out of host memory, rejecting null or missing entries.
    ///
    /// # Safety
    /// `vtable` must be null or point to a readable `HostVTable` whose
    /// entries are safe to call from the host's main loop.
    pub unsafe fn from_raw(vtable: *const HostVTable) -> BindingResult<VTableHost> {
        let table = vtable.as_ref().ok_or(BindingError::NoHost)?;
        VTableHost::new(table)
    }

    pub fn new(table: &HostVTable) -> BindingResult<VTableHost> {
        let missing = BindingError::IncompleteHost;
        Ok(VTableHost {
            new_keys: table.new_keys.ok_or(missing.clone())?,
            begin_scene: table.begin_scene.ok_or(missing.clone())?,
            present_slot: table.present_slot.ok_or(missing.clone())?,
            present_menu: table.present_menu.ok_or(missing.clone())?,
            set_main_callback: table.set_main_callback.ok_or(missing.clone())?,
            add_bag_item: table.add_bag_item.ok_or(missing.clone())?,
            remove_bag_item: table.remove_bag_item.ok_or(missing.clone())?,
            show_summary_pages: table.show_summary_pages.ok_or(missing.clone())?,
            open_bag: table.open_bag.ok_or(missing.clone())?,
            last_viewed_mon_index: table.last_viewed_mon_index.ok_or(missing.clone())?,
            chosen_bag_item: table.chosen_bag_item.ok_or(missing)?,
        })
    }
}

// Every call below goes to a table entry validated in `VTableHost::new`; the
// host guaranteed their safety when registering the table.
impl Host for VTableHost {
    fn new_keys(&self) -> Buttons {
        Buttons::from_raw(unsafe { (self.new_keys)() })
    }

    fn present(&mut self, scene: &Scene) {
        unsafe { (self.begin_scene)(scene.slots.len() as u8) };
        for view in &scene.slots {
            let render = SlotRender::from(view);
            unsafe { (self.present_slot)(&render) };
        }
        match &scene.menu {
            Some(menu) => {
                let actions: Vec<u8> = menu.actions.iter().map(|a| *a as u8).collect();
                unsafe { (self.present_menu)(actions.as_ptr(), actions.len() as u8, menu.cursor) };
            }
            None => unsafe { (self.present_menu)(std::ptr::null(), 0, 0) },
        }
    }

    fn enter_frame_loop(&mut self) {
        unsafe { (self.set_main_callback)(Some(SummaryScreen_MainCallback)) };
    }

    fn return_to(&mut self, callback: MainCallback) {
        unsafe { (self.set_main_callback)(callback) };
    }

    fn add_bag_item(&mut self, item: u16, quantity: u16) -> bool {
        unsafe { (self.add_bag_item)(item, quantity) }
    }

    fn remove_bag_item(&mut self, item: u16, quantity: u16) -> bool {
        unsafe { (self.remove_bag_item)(item, quantity) }
    }

    fn open_detail_summary(&mut self, request: DetailSummaryRequest) {
        unsafe {
            (self.show_summary_pages)(
                request.style.tag(),
                request.party,
                request.index,
                request.last_index,
                Some(SummaryScreen_ReturnFromDetail),
            )
        };
    }

    fn open_bag_for_give(&mut self) {
        unsafe { (self.open_bag)(Some(SummaryScreen_ReturnFromBag)) };
    }

    fn last_viewed_mon_index(&self) -> u8 {
        unsafe { (self.last_viewed_mon_index)() }
    }

    fn chosen_bag_item(&self) -> u16 {
        unsafe { (self.chosen_bag_item)() }
    }
}
