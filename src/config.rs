//! Session and level configuration
//!
//! Everything the original demos kept as file-level globals (grid shape,
//! block sizes, timestep) lives here and is threaded through `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Compiled-in game configuration, carried explicitly by the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Simulation tick length in seconds
    pub tick_dt: f32,
    /// Block grid rows
    pub rows: u32,
    /// Block grid columns
    pub cols: u32,
    /// Block width in scene units
    pub block_width: f32,
    /// Block height in scene units
    pub block_height: f32,
    /// Gap between neighboring blocks
    pub gap: f32,
    /// Center of the top-left block
    pub grid_origin: Vec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_dt: crate::consts::SIM_DT,
            rows: 5,
            cols: 8,
            block_width: 0.15,
            block_height: 0.1,
            gap: 0.02,
            grid_origin: Vec2::new(-0.65, 0.8),
        }
    }
}

impl GameConfig {
    /// Center position of the block at the given grid cell
    pub fn block_center(&self, row: u32, col: u32) -> Vec2 {
        Vec2::new(
            self.grid_origin.x + col as f32 * (self.block_width + self.gap),
            self.grid_origin.y - row as f32 * (self.block_height + self.gap),
        )
    }

    /// Total number of grid cells
    pub fn block_count(&self) -> usize {
        (self.rows * self.cols) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let config = GameConfig::default();
        assert_eq!(config.block_count(), 40);
        assert_eq!(config.block_center(0, 0), Vec2::new(-0.65, 0.8));
    }

    #[test]
    fn test_block_center_spacing() {
        let config = GameConfig::default();
        let a = config.block_center(0, 0);
        let b = config.block_center(0, 1);
        let c = config.block_center(1, 0);
        assert!((b.x - a.x - 0.17).abs() < 1e-6);
        assert!((a.y - c.y - 0.12).abs() < 1e-6);
    }
}
