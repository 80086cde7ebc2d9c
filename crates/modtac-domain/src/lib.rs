pub mod cursor;
pub mod frame;
pub mod grid;
pub mod hud;
pub mod intro;
pub mod item;
pub mod layout;
pub mod rng;
pub mod session;
pub mod strip;
pub mod telemetry;
pub mod typewriter;

pub use cursor::{CursorLayer, PointerKind, PointerMove};
pub use frame::FrameGate;
pub use grid::{column_score, max_columns_for_width, pick_columns};
pub use hud::{hud_lines, HudLine};
pub use intro::{IntroPhase, IntroSequencer, IntroTimings};
pub use item::{Item, Lane, PlacedItem, Viewport};
pub use layout::{generate_layout, loop_span_for, tile_layout, Zone};
pub use rng::Mulberry32;
pub use session::{FrameOutcome, ScrollSession};
pub use strip::{hover_motion, marquee_cards, MarqueeCard, TileMotion};
pub use telemetry::{ScrollTracker, Telemetry};
pub use typewriter::{TypePhase, TypeTimings, Typewriter};
