//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_paddle, circle_hits_rect, resolve_block_hit};
pub use rect::Aabb;
pub use state::{Ball, Block, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
