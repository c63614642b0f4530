use serde::{Deserialize, Serialize};

use crate::constants::{LANDING_BUFFER_DEG, MAX_BUFFER_FRACTION, MIN_FULL_SPINS};
use crate::geometry::WheelSegment;
use crate::prize::PrizeCatalog;

/// An option paired with the running weight total up to and including it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CumulativeOption {
    pub name: String,
    pub weight: f64,
    pub cumulative_weight: f64,
}

pub fn cumulative_weights(catalog: &PrizeCatalog) -> Vec<CumulativeOption> {
    let mut running = 0.0;
    catalog
        .options()
        .iter()
        .map(|option| {
            running += option.weight;
            CumulativeOption {
                name: option.name.clone(),
                weight: option.weight,
                cumulative_weight: running,
            }
        })
        .collect()
}

/// Index of the first option whose cumulative weight exceeds `draw`.
///
/// A draw that clears every bucket (rounding at the top end, or NaN) lands
/// on the last option.
pub fn select_index(cumulative: &[CumulativeOption], draw: f64) -> usize {
    cumulative
        .iter()
        .position(|option| draw < option.cumulative_weight)
        .unwrap_or_else(|| cumulative.len().saturating_sub(1))
}

/// Edge inset used for a segment of the given span.
pub fn landing_buffer(span: f64) -> f64 {
    LANDING_BUFFER_DEG.min(span * MAX_BUFFER_FRACTION)
}

/// Picks a landing angle inside `segment`, kept off its boundary lines.
/// `unit` is expected in `[0, 1)`.
pub fn landing_angle(segment: &WheelSegment, unit: f64) -> f64 {
    let span = segment.end_angle - segment.start_angle;
    let buffer = landing_buffer(span);
    let min_landing = segment.start_angle + buffer;
    let max_landing = segment.end_angle - buffer;
    min_landing + unit.clamp(0.0, 1.0) * (max_landing - min_landing)
}

/// Forward-only turn, in `[0, 360)`, that brings `landing_angle` under the
/// pointer at 0° from the wheel's current orientation.
pub fn forward_delta(current_rotation: f64, landing_angle: f64) -> f64 {
    let target_stop = (360.0 - landing_angle).rem_euclid(360.0);
    let current_effective = current_rotation.rem_euclid(360.0);

    let mut delta = target_stop - current_effective;
    if delta < 0.0 {
        delta += 360.0;
    }
    // -1e-14 + 360 rounds to 360
    if delta >= 360.0 {
        delta -= 360.0;
    }
    delta
}

pub fn target_rotation(current_rotation: f64, landing_angle: f64) -> f64 {
    current_rotation
        + f64::from(MIN_FULL_SPINS) * 360.0
        + forward_delta(current_rotation, landing_angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::layout_segments;
    use crate::prize::PrizeOption;

    fn abc() -> PrizeCatalog {
        PrizeCatalog::new(vec![
            PrizeOption::new("A", 1.0),
            PrizeOption::new("B", 1.0),
            PrizeOption::new("C", 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_cumulative_weights_running_sum() {
        let cumulative = cumulative_weights(&abc());
        let sums: Vec<f64> = cumulative.iter().map(|c| c.cumulative_weight).collect();
        assert_eq!(sums, vec![1.0, 2.0, 4.0]);
        assert_eq!(cumulative[2].name, "C");
    }

    #[test]
    fn test_select_index_examples() {
        let cumulative = cumulative_weights(&abc());
        assert_eq!(select_index(&cumulative, 0.5), 0);
        assert_eq!(select_index(&cumulative, 1.5), 1);
        assert_eq!(select_index(&cumulative, 3.0), 2);
    }

    #[test]
    fn test_select_index_bounds() {
        let cumulative = cumulative_weights(&abc());
        assert_eq!(select_index(&cumulative, 0.0), 0);
        assert_eq!(select_index(&cumulative, 4.0 - 1e-9), 2);
        // boundary value belongs to the next bucket
        assert_eq!(select_index(&cumulative, 1.0), 1);
    }

    #[test]
    fn test_select_index_falls_back_to_last() {
        let cumulative = cumulative_weights(&abc());
        assert_eq!(select_index(&cumulative, 4.0), 2);
        assert_eq!(select_index(&cumulative, f64::NAN), 2);
    }

    #[test]
    fn test_landing_angle_respects_buffer() {
        let segments = layout_segments(&abc());
        let segment = &segments[0]; // 0..90
        assert!((landing_angle(segment, 0.0) - 2.5).abs() < 1e-12);
        let high = landing_angle(segment, 1.0 - f64::EPSILON);
        assert!(high <= 87.5 && high > 87.4);
    }

    #[test]
    fn test_narrow_segment_landing_stays_inside() {
        let catalog = PrizeCatalog::new(vec![
            PrizeOption::new("Wide", 999.0),
            PrizeOption::new("Sliver", 1.0),
        ])
        .unwrap();
        let segments = layout_segments(&catalog);
        let sliver = &segments[1];
        assert!(sliver.angle < 5.0);
        for unit in [0.0, 0.25, 0.5, 0.999_999] {
            let angle = landing_angle(sliver, unit);
            assert!(angle > sliver.start_angle, "{} not after {}", angle, sliver.start_angle);
            assert!(angle < sliver.end_angle, "{} not before {}", angle, sliver.end_angle);
        }
    }

    #[test]
    fn test_landing_buffer_clamps_to_fraction_of_span() {
        assert_eq!(landing_buffer(90.0), 2.5);
        assert!((landing_buffer(4.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_forward_delta_range() {
        for current in [0.0, 45.0, 359.9, 3600.0, 12345.6] {
            for landing in [0.1, 45.0, 90.0, 180.0, 270.0, 359.9] {
                let delta = forward_delta(current, landing);
                assert!((0.0..360.0).contains(&delta), "delta {} out of range", delta);
            }
        }
    }

    #[test]
    fn test_forward_delta_aligns_landing_with_pointer() {
        let current = 1234.5;
        let landing = 100.0;
        let delta = forward_delta(current, landing);
        let resting = (current + delta + landing).rem_euclid(360.0);
        assert!(resting < 1e-9 || (360.0 - resting) < 1e-9);
    }

    #[test]
    fn test_forward_delta_wraps_when_target_is_behind() {
        // target stop 270, current 300 -> 330 forward
        assert!((forward_delta(300.0, 90.0) - 330.0).abs() < 1e-9);
        assert!((forward_delta(0.0, 90.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_rotation_adds_full_spins() {
        let total = target_rotation(0.0, 90.0);
        assert!((total - (3600.0 + 270.0)).abs() < 1e-9);
        assert!(target_rotation(total, 45.0) > total);
    }
}
