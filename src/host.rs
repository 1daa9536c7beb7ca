//! The engine seam.
//!
//! Everything the screen needs from the game engine goes through [`Host`]:
//! input, drawing, bag access and the hand-offs to other engine screens. The
//! screen holds no engine globals of its own, so any implementation (the C
//! engine behind a function table, a test double, the demo) can drive it.

use crate::scene::Scene;
use schema::{Buttons, Pokemon, SummaryScreenStyle};

/// Host callback run once per frame after control is handed back.
///
/// Opaque to the screen: it is stored and passed back, never called or inspected.
pub type MainCallback = Option<unsafe extern "C" fn()>;

/// Everything the host needs to open its detailed summary pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSummaryRequest {
    pub style: SummaryScreenStyle,
    pub party: *mut Pokemon,
    /// Member to show first.
    pub index: u8,
    /// Last member the pages may scroll to.
    pub last_index: u8,
}

pub trait Host {
    /// Buttons newly pressed this frame.
    fn new_keys(&self) -> Buttons;

    /// Draw this frame.
    fn present(&mut self, scene: &Scene);

    /// Route the following main-callback ticks to the summary screen.
    fn enter_frame_loop(&mut self);

    /// Hand control back to a host callback.
    fn return_to(&mut self, callback: MainCallback);

    /// Returns false when the bag has no room.
    fn add_bag_item(&mut self, item: u16, quantity: u16) -> bool;

    /// Returns false when the bag does not hold enough.
    fn remove_bag_item(&mut self, item: u16, quantity: u16) -> bool;

    /// Leave for the detailed summary pages. The host reports back through
    /// the screen's detail resume path.
    fn open_detail_summary(&mut self, request: DetailSummaryRequest);

    /// Leave for the bag to pick an item to hold. The host reports back
    /// through the screen's bag resume path.
    fn open_bag_for_give(&mut self);

    /// Member the detailed summary pages were showing when they closed.
    fn last_viewed_mon_index(&self) -> u8;

    /// Item chosen in the bag, 0 when the player backed out.
    fn chosen_bag_item(&self) -> u16;
}
