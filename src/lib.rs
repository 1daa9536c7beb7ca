//! Party Summary Screen
//!
//! The party screen a game engine opens to browse, reorder and manage the
//! held items of its party. The engine links the static library, registers a
//! function table and calls `InitFullSummaryScreen`; everything after that
//! runs one frame per main-callback tick.

// --- MODULE DECLARATIONS ---
pub mod binding;
pub mod charmap;
pub mod config;
pub mod errors;
pub mod events;
pub mod host;
pub mod layout;
pub mod party;
pub mod scene;
pub mod screen;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// The records and enums shared with the engine.
pub use schema::{Ailment, Buttons, InvalidStyleTag, Pokemon, SummaryScreenStyle, PARTY_SIZE};

// --- From this crate's modules (`src/`) ---

// C entry points and the function table they drive.
pub use binding::{
    init_full_summary_screen, HostVTable, InitFullSummaryScreen, SlotRender,
    SummaryScreen_Configure, SummaryScreen_MainCallback, SummaryScreen_RegisterHost,
    SummaryScreen_ReturnFromBag, SummaryScreen_ReturnFromDetail, VTableHost,
};

// The screen state machine and the seam it runs against.
pub use host::{DetailSummaryRequest, Host, MainCallback};
pub use party::PartyHandle;
pub use screen::{PartyAction, Phase, SummaryScreen, Suspension};

// What the host draws each frame.
pub use config::ScreenConfig;
pub use events::{EventBus, ScreenEvent};
pub use scene::{MenuView, Scene, SlotView};

// Crate-specific error and result types.
pub use errors::{
    BindingError, BindingResult, ConfigError, ConfigResult, ScreenError, ScreenResult,
    SummaryScreenError, SummaryScreenResult,
};
