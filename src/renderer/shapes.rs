//! Shape generation for 2D primitives
//!
//! Local-space meshes are built once, at scene creation, and translated by
//! entity position when the frame's vertex list is assembled. Entity
//! geometry is never rebuilt per draw call.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::{BOTTOM_BOUND, LEFT_WALL, RIGHT_WALL, TOP_WALL};
use crate::sim::GameState;

/// Triangle-fan segments for the ball disc
const BALL_SEGMENTS: u32 = 30;
/// Wall outline thickness in scene units
const WALL_THICKNESS: f32 = 0.01;

/// Generate vertices for a filled disc centered at the origin
pub fn disc(radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(0.0, 0.0, color));
        vertices.push(Vertex::new(radius * theta1.cos(), radius * theta1.sin(), color));
        vertices.push(Vertex::new(radius * theta2.cos(), radius * theta2.sin(), color));
    }

    vertices
}

/// Generate vertices for a filled rectangle centered at the origin
pub fn quad(width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let hw = width / 2.0;
    let hh = height / 2.0;

    vec![
        Vertex::new(-hw, -hh, color),
        Vertex::new(hw, -hh, color),
        Vertex::new(hw, hh, color),
        Vertex::new(hw, hh, color),
        Vertex::new(-hw, hh, color),
        Vertex::new(-hw, -hh, color),
    ]
}

/// A filled rectangle spanning two corners (world space, for the outline)
fn quad_corners(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, min.y, color),
    ]
}

/// The playfield contour: left wall, top wall, right wall. The bottom is
/// open (loss line).
pub fn playfield_outline() -> Vec<Vertex> {
    let t = WALL_THICKNESS;
    let mut vertices = Vec::with_capacity(18);
    vertices.extend(quad_corners(
        Vec2::new(LEFT_WALL - t, BOTTOM_BOUND),
        Vec2::new(LEFT_WALL, TOP_WALL + t),
        colors::WALL,
    ));
    vertices.extend(quad_corners(
        Vec2::new(LEFT_WALL - t, TOP_WALL),
        Vec2::new(RIGHT_WALL + t, TOP_WALL + t),
        colors::WALL,
    ));
    vertices.extend(quad_corners(
        Vec2::new(RIGHT_WALL, BOTTOM_BOUND),
        Vec2::new(RIGHT_WALL + t, TOP_WALL + t),
        colors::WALL,
    ));
    vertices
}

/// Local-space meshes built once per session
pub struct SceneMeshes {
    ball: Vec<Vertex>,
    paddle: Vec<Vertex>,
    /// One quad per row, carrying the row color
    block_rows: Vec<Vec<Vertex>>,
    outline: Vec<Vertex>,
    /// Columns per row, to map block index -> row mesh
    cols: usize,
}

impl SceneMeshes {
    pub fn new(state: &GameState) -> Self {
        let config = &state.config;
        let block_rows = (0..config.rows)
            .map(|row| {
                let idx = (row * config.cols) as usize;
                let [r, g, b] = state.blocks[idx].color;
                quad(config.block_width, config.block_height, [r, g, b, 1.0])
            })
            .collect();

        Self {
            ball: disc(state.ball.radius, colors::BALL, BALL_SEGMENTS),
            paddle: quad(state.paddle.width, state.paddle.height, colors::PADDLE),
            block_rows,
            outline: playfield_outline(),
            cols: config.cols as usize,
        }
    }

    /// Assemble the frame's vertex list: each mesh translated by its
    /// entity's current position, dead blocks skipped.
    pub fn frame_vertices(&self, state: &GameState) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(
            self.outline.len()
                + self.paddle.len()
                + self.ball.len()
                + state.live_blocks() * 6,
        );

        vertices.extend_from_slice(&self.outline);
        extend_translated(&mut vertices, &self.paddle, state.paddle.pos);

        for (index, block) in state.blocks.iter().enumerate() {
            if !block.alive {
                continue;
            }
            let row_mesh = &self.block_rows[index / self.cols];
            extend_translated(&mut vertices, row_mesh, block.body.center);
        }

        extend_translated(&mut vertices, &self.ball, state.ball.pos);
        vertices
    }
}

fn extend_translated(out: &mut Vec<Vertex>, mesh: &[Vertex], offset: Vec2) {
    out.extend(mesh.iter().map(|v| {
        Vertex::new(v.position[0] + offset.x, v.position[1] + offset.y, v.color)
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_disc_vertex_count() {
        assert_eq!(disc(0.02, colors::BALL, 30).len(), 90);
    }

    #[test]
    fn test_frame_skips_dead_blocks() {
        let mut state = GameState::new(5, GameConfig::default());
        let meshes = SceneMeshes::new(&state);
        let full = meshes.frame_vertices(&state).len();

        state.blocks[3].alive = false;
        let fewer = meshes.frame_vertices(&state).len();
        assert_eq!(full - fewer, 6);
    }

    #[test]
    fn test_frame_follows_ball() {
        let mut state = GameState::new(5, GameConfig::default());
        let meshes = SceneMeshes::new(&state);

        state.ball.pos.x += 0.1;
        let vertices = meshes.frame_vertices(&state);
        // Ball fan center is the first vertex of the last mesh appended
        let ball_center = vertices[vertices.len() - 90].position;
        assert!((ball_center[0] - state.ball.pos.x).abs() < 1e-6);
        assert!((ball_center[1] - state.ball.pos.y).abs() < 1e-6);
    }
}
