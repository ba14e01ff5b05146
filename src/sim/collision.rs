//! Collision detection and response
//!
//! Pure functions over (ball, rectangle) pairs. The block test is the
//! closest-point circle/AABB test: clamp the circle center into the box,
//! then compare squared distance against the radius. A plain box-overlap
//! test would report hits at the corners where the curved ball edge does
//! not actually reach.

use glam::Vec2;

use super::rect::Aabb;
use super::state::Ball;

/// Circle-vs-AABB hit test (clamp-then-distance)
pub fn circle_hits_rect(center: Vec2, radius: f32, rect: &Aabb) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}

/// Resolve a confirmed ball/block intersection by closest-edge reflection.
///
/// The ball center is compared against the block's bounds: sitting past a
/// vertical edge negates `vel.x`, past a horizontal edge negates `vel.y`
/// (a corner hit negates both). The ball is then pushed to the nearest
/// non-overlapping point, `edge ± radius`, so the same block cannot hit
/// again next tick. Applied to an already-separated pair this moves the
/// ball at most to the minimum separating distance.
pub fn resolve_block_hit(ball: &mut Ball, rect: &Aabb) {
    let min = rect.min();
    let max = rect.max();

    let past_left = ball.pos.x < min.x;
    let past_right = ball.pos.x > max.x;
    let past_bottom = ball.pos.y < min.y;
    let past_top = ball.pos.y > max.y;

    if past_left || past_right {
        ball.vel.x = -ball.vel.x;
    }
    if past_bottom || past_top {
        ball.vel.y = -ball.vel.y;
    }

    if past_left {
        ball.pos.x = min.x - ball.radius;
    } else if past_right {
        ball.pos.x = max.x + ball.radius;
    }

    if past_bottom {
        ball.pos.y = min.y - ball.radius;
    } else if past_top {
        ball.pos.y = max.y + ball.radius;
    }
}

/// Ball-vs-paddle overlap, box against box as in the classic form
pub fn ball_hits_paddle(ball: &Ball, paddle: &Aabb) -> bool {
    let b = ball.bounds();
    let (bmin, bmax) = (b.min(), b.max());
    let (pmin, pmax) = (paddle.min(), paddle.max());

    bmax.x > pmin.x && bmin.x < pmax.x && bmax.y > pmin.y && bmin.y < pmax.y
}
