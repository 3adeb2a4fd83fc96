//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, injected into every random decision
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::{Difficulty, drive_opponent};
pub use collision::{out_of_bounds, paddle_hit, resolve_paddle_hits};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Side, Snapshot};
pub use tick::{ControlEvent, tick};
