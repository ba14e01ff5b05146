//! Game state and core simulation types
//!
//! Everything here is deterministic and serializable; no rendering or
//! platform dependencies.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Aabb;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Scene is drawn but frozen, waiting for the start input
    Idle,
    /// Simulation advancing
    Running,
    /// All blocks destroyed
    Cleared,
    /// Ball fell past the bottom boundary
    GameOver,
}

/// Events emitted by the simulation, drained once per frame by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Idle -> Running transition fired
    Started,
    /// Ball reflected off the left, right or top wall
    WallBounce,
    /// Ball reflected off the paddle
    PaddleHit,
    /// Block at `index` in the registry was destroyed
    BlockDestroyed { index: usize },
    /// No live blocks remain
    LevelCleared,
    /// Loss condition observed; the host should request exit
    BallLost,
}

/// The ball: a circle with velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: BALL_START_POS,
            vel: BALL_START_VEL,
            radius: BALL_RADIUS,
        }
    }

    /// Integrate one step and reflect off the left, right and top walls.
    ///
    /// On wall penetration the corresponding velocity component is negated
    /// and the ball is repositioned exactly tangent to the wall, so no
    /// penetration survives the step. The bottom is open: falling through
    /// it is the loss condition, checked by the driver, not here.
    ///
    /// Returns true if any wall was hit.
    pub fn advance(&mut self, dt: f32) -> bool {
        let mut next = self.pos + self.vel * dt;
        let mut bounced = false;

        if next.x - self.radius < LEFT_WALL {
            self.vel.x = -self.vel.x;
            next.x = LEFT_WALL + self.radius;
            bounced = true;
        }
        if next.x + self.radius > RIGHT_WALL {
            self.vel.x = -self.vel.x;
            next.x = RIGHT_WALL - self.radius;
            bounced = true;
        }
        if next.y + self.radius > TOP_WALL {
            self.vel.y = -self.vel.y;
            next.y = TOP_WALL - self.radius;
            bounced = true;
        }

        self.pos = next;
        bounced
    }

    /// The one launch step: integrate with the velocity scaled element-wise
    /// by `direction`. Called exactly once, on the first tick after start.
    pub fn launch_step(&mut self, direction: Vec2, dt: f32) {
        self.pos += self.vel * direction * dt;
    }

    /// Bounding box of the ball (used by the paddle overlap test)
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.radius * 2.0, self.radius * 2.0)
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's paddle, confined to the playfield's horizontal range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position; `y` stays fixed near the bottom wall
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal speed in scene units per second
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(0.0, PADDLE_Y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }
}

impl Paddle {
    pub fn move_left(&mut self, dt: f32) {
        self.pos.x -= self.speed * dt;
        self.clamp_to_walls();
    }

    pub fn move_right(&mut self, dt: f32) {
        self.pos.x += self.speed * dt;
        self.clamp_to_walls();
    }

    /// Keep the whole paddle body inside [LEFT_WALL, RIGHT_WALL]
    fn clamp_to_walls(&mut self) {
        let half = self.width / 2.0;
        self.pos.x = self.pos.x.clamp(LEFT_WALL + half, RIGHT_WALL - half);
    }

    /// Collision body of the paddle
    pub fn body(&self) -> Aabb {
        Aabb::new(self.pos, self.width, self.height)
    }
}

/// A block in the grid. Geometry is immutable after construction; a hit
/// clears `alive` and the slot stays in the registry as a tombstone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub body: Aabb,
    /// Row color, assigned at level start
    pub color: [f32; 3],
    pub alive: bool,
}

impl Block {
    pub fn new(center: Vec2, width: f32, height: f32, color: [f32; 3]) -> Self {
        Self {
            body: Aabb::new(center, width, height),
            color,
            alive: true,
        }
    }

    /// Circle-vs-block hit test (closest-point, see `collision`)
    pub fn hit_by(&self, ball: &Ball) -> bool {
        super::collision::circle_hits_rect(ball.pos, ball.radius, &self.body)
    }
}

/// Complete game session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed (row colors)
    pub seed: u64,
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Persistent block registry; destroyed blocks keep their slot with
    /// `alive = false`, never rebuilt from the layout
    pub blocks: Vec<Block>,
    /// One-shot flag: the next Running tick uses the launch step
    pub launch_pending: bool,
    /// Events since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session with the block grid laid out from `config`
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let row_colors = row_colors(seed, config.rows);
        let mut blocks = Vec::with_capacity(config.block_count());
        for row in 0..config.rows {
            for col in 0..config.cols {
                blocks.push(Block::new(
                    config.block_center(row, col),
                    config.block_width,
                    config.block_height,
                    row_colors[row as usize],
                ));
            }
        }

        Self {
            seed,
            config,
            phase: GamePhase::Idle,
            ticks: 0,
            paddle: Paddle::default(),
            ball: Ball::new(),
            blocks,
            launch_pending: false,
            events: Vec::new(),
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of blocks still alive
    pub fn live_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.alive).count()
    }
}

/// One random color per row, deterministic for a given seed
fn row_colors(seed: u64, rows: u32) -> Vec<[f32; 3]> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..rows)
        .map(|_| [rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>()])
        .collect()
}
