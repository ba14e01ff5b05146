//! Fixed timestep simulation tick
//!
//! Advances the session deterministically. The host runs this from an
//! accumulator loop so presentation frame rate never changes physics.

use super::collision::{ball_hits_paddle, circle_hits_rect, resolve_block_hit};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::LAUNCH_DIRECTION;

/// Input sampled for a single tick (current key state, not events)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
    /// Start key edge (one-shot, cleared by the host after the tick)
    pub start: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Idle => {
            // Frozen scene; only the start edge does anything
            if input.start {
                state.phase = GamePhase::Running;
                state.launch_pending = true;
                state.push_event(GameEvent::Started);
                log::info!("game started, seed {}", state.seed);
            }
            return;
        }
        GamePhase::Cleared | GamePhase::GameOver => return,
        GamePhase::Running => {}
    }

    state.ticks += 1;

    // Paddle movement for held keys
    if input.left {
        state.paddle.move_left(dt);
    }
    if input.right {
        state.paddle.move_right(dt);
    }

    // Ball motion: the first Running tick is the launch step, every
    // subsequent tick integrates and reflects off the walls
    if state.launch_pending {
        state.ball.launch_step(LAUNCH_DIRECTION, dt);
        state.launch_pending = false;
    } else if state.ball.advance(dt) {
        state.push_event(GameEvent::WallBounce);
    }

    // Loss condition, observed exactly once: the phase transition stops
    // further ticks from re-reporting it
    if state.ball.pos.y < crate::consts::BOTTOM_BOUND {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::BallLost);
        log::info!("ball lost after {} ticks", state.ticks);
        return;
    }

    // At most one block collision resolved per tick
    let mut destroyed = None;
    for (index, block) in state.blocks.iter_mut().enumerate() {
        if !block.alive {
            continue;
        }
        if circle_hits_rect(state.ball.pos, state.ball.radius, &block.body) {
            resolve_block_hit(&mut state.ball, &block.body);
            block.alive = false;
            destroyed = Some(index);
            break;
        }
    }
    if let Some(index) = destroyed {
        state.push_event(GameEvent::BlockDestroyed { index });
        if state.live_blocks() == 0 {
            state.phase = GamePhase::Cleared;
            state.push_event(GameEvent::LevelCleared);
            log::info!("level cleared after {} ticks", state.ticks);
        }
    }

    // Paddle bounce: reflect the vertical component upward on overlap
    if state.ball.vel.y < 0.0 && ball_hits_paddle(&state.ball, &state.paddle.body()) {
        state.ball.vel.y = -state.ball.vel.y;
        state.push_event(GameEvent::PaddleHit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::*;
    use glam::Vec2;

    fn running_state() -> GameState {
        let mut state = GameState::new(12345, GameConfig::default());
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, SIM_DT);
        state
    }

    #[test]
    fn test_idle_is_frozen() {
        let mut state = GameState::new(1, GameConfig::default());
        let ball_before = state.ball;
        let paddle_before = state.paddle;

        let held = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &held, SIM_DT);
        }

        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.ball, ball_before);
        assert_eq!(state.paddle, paddle_before);
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_start_transition_and_launch() {
        let mut state = GameState::new(1, GameConfig::default());
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, SIM_DT);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.launch_pending);
        assert!(state.drain_events().contains(&GameEvent::Started));

        // First Running tick consumes the launch step
        let before = state.ball.pos;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(!state.launch_pending);
        let expected = before + BALL_START_VEL * LAUNCH_DIRECTION * SIM_DT;
        assert!((state.ball.pos - expected).length() < 1e-6);
    }

    #[test]
    fn test_paddle_input_moves_only_when_running() {
        let mut state = running_state();
        let x0 = state.paddle.pos.x;
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right, SIM_DT);
        assert!(state.paddle.pos.x > x0);
    }

    /// Scenario A: ball launched up-right from (0, 0.85) reaches the top
    /// wall, reflects, and sits exactly tangent to it.
    #[test]
    fn test_top_wall_clamp_scenario() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(0.0, 0.85);
        state.ball.vel = Vec2::new(0.5, 0.5);
        // Clear the grid so no block interferes with the climb
        for block in &mut state.blocks {
            block.alive = false;
        }
        state.phase = GamePhase::Running;

        let mut clamped = false;
        for _ in 0..50 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            if state.ball.vel.y < 0.0 {
                clamped = true;
                assert!((state.ball.pos.y - (TOP_WALL - state.ball.radius)).abs() < 1e-6);
                break;
            }
        }
        assert!(clamped, "ball never reached the top wall");
    }

    /// Scenario B: the loss condition is reported exactly once, on the
    /// first tick that observes it.
    #[test]
    fn test_ball_lost_reported_once() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(0.0, -0.999);
        state.ball.vel = Vec2::new(0.0, -1.0);
        state.drain_events();

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        let events = state.drain_events();
        assert_eq!(
            events.iter().filter(|e| **e == GameEvent::BallLost).count(),
            1
        );

        // Further ticks are inert and emit nothing
        for _ in 0..5 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.drain_events().is_empty());
    }

    /// Scenario C: with the ball overlapping exactly one block in the 5x8
    /// grid, only that block is resolved that tick.
    #[test]
    fn test_one_block_per_tick() {
        let mut state = running_state();
        state.drain_events();
        tick(&mut state, &TickInput::default(), SIM_DT); // Consume launch step

        // Park the ball just under block 12's bottom edge, moving up into it
        let target = state.blocks[12].body;
        state.ball.pos = Vec2::new(target.center.x, target.min().y - state.ball.radius * 0.5);
        state.ball.vel = Vec2::new(0.0, 0.5);
        state.drain_events();

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(!state.blocks[12].alive);
        assert_eq!(state.live_blocks(), state.blocks.len() - 1);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::BlockDestroyed { index: 12 }));
        // Reflected downward and pushed out below the block
        assert!(state.ball.vel.y < 0.0);
        assert!(state.ball.pos.y <= target.min().y - state.ball.radius + 1e-6);
    }

    #[test]
    fn test_dead_blocks_do_not_collide() {
        let mut state = running_state();
        tick(&mut state, &TickInput::default(), SIM_DT);

        let target = state.blocks[20].body;
        state.blocks[20].alive = false;
        state.ball.pos = target.center;
        state.ball.vel = Vec2::new(0.0, 0.5);
        let vel_before = state.ball.vel;
        state.drain_events();

        tick(&mut state, &TickInput::default(), SIM_DT);
        let events = state.drain_events();
        assert!(!events.iter().any(|e| matches!(e, GameEvent::BlockDestroyed { .. })));
        assert_eq!(state.ball.vel, vel_before);
    }

    #[test]
    fn test_level_cleared() {
        let mut state = running_state();
        tick(&mut state, &TickInput::default(), SIM_DT);

        // Leave a single live block and drive the ball into it
        for block in &mut state.blocks {
            block.alive = false;
        }
        state.blocks[0].alive = true;
        let target = state.blocks[0].body;
        state.ball.pos = Vec2::new(target.center.x, target.min().y - state.ball.radius * 0.5);
        state.ball.vel = Vec2::new(0.0, 0.5);
        state.drain_events();

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Cleared);
        assert!(state.drain_events().contains(&GameEvent::LevelCleared));
    }

    #[test]
    fn test_paddle_bounce_reflects_upward() {
        let mut state = running_state();
        tick(&mut state, &TickInput::default(), SIM_DT);

        state.ball.pos = Vec2::new(state.paddle.pos.x, state.paddle.pos.y + 0.01);
        state.ball.vel = Vec2::new(0.2, -0.5);
        state.drain_events();

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.ball.vel.y > 0.0);
        assert!(state.drain_events().contains(&GameEvent::PaddleHit));
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999, GameConfig::default());
        let mut b = GameState::new(99999, GameConfig::default());

        let script = [
            TickInput {
                start: true,
                ..Default::default()
            },
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in script.iter().cycle().take(200) {
            tick(&mut a, input, SIM_DT);
            tick(&mut b, input, SIM_DT);
        }

        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.paddle, b.paddle);
        assert_eq!(a.live_blocks(), b.live_blocks());
    }
}
