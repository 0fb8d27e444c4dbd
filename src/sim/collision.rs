//! Collection overlap test between the diver and a toy
//!
//! A single distance comparison: the toy counts as reachable when the
//! diver's center is within (diver half-width + toy radius) of the toy's
//! center.

use glam::Vec2;

/// Check whether the diver overlaps a toy
pub fn diver_overlaps_toy(
    diver_center: Vec2,
    diver_half_width: f32,
    toy_center: Vec2,
    toy_radius: f32,
) -> bool {
    diver_center.distance(toy_center) < diver_half_width + toy_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_when_touching() {
        let diver = Vec2::new(100.0, 100.0);
        // Toy center 40px away, reach = 25 + 30 = 55
        assert!(diver_overlaps_toy(diver, 25.0, Vec2::new(140.0, 100.0), 30.0));
    }

    #[test]
    fn test_miss_when_apart() {
        let diver = Vec2::new(100.0, 100.0);
        // Toy center 60px away, reach = 25 + 30 = 55
        assert!(!diver_overlaps_toy(diver, 25.0, Vec2::new(160.0, 100.0), 30.0));
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let diver = Vec2::ZERO;
        // Exactly at reach distance: strict less-than, so no hit
        assert!(!diver_overlaps_toy(diver, 25.0, Vec2::new(55.0, 0.0), 30.0));
        assert!(diver_overlaps_toy(diver, 25.0, Vec2::new(54.9, 0.0), 30.0));
    }

    #[test]
    fn test_diagonal_distance() {
        let diver = Vec2::new(0.0, 0.0);
        // 3-4-5 triangle scaled: center at (30, 40) is 50 away
        assert!(diver_overlaps_toy(diver, 25.0, Vec2::new(30.0, 40.0), 30.0));
        assert!(!diver_overlaps_toy(diver, 25.0, Vec2::new(60.0, 80.0), 15.0));
    }
}
