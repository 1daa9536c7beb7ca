// Summary Screen Schema - boundary type definitions
// This crate holds every type whose layout or numeric value is shared with
// the host engine: the style tag handed to the entry point, the party record
// layout and the key mask read each frame.

pub use buttons::*;
pub use record::*;
pub use style::*;

pub mod buttons;
pub mod record;
pub mod style;
