//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven one frame at a time by the host's clock
//! - Seeded RNG only
//! - Stable iteration order (spawn/registry order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod frame;
pub mod score;
pub mod state;

pub use collision::{Hit, find_hits};
pub use frame::{ControllerState, FrameInput, frame};
pub use score::ScoreCounter;
pub use state::{FrameEvent, GameState, Projectile, SoundCue, Target, TargetPhase};
