use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Largest f64 strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Supplier of uniform values in `[0, 1)` for the draw and the landing angle.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Entropy-seeded generator used by the live widget.
#[derive(Debug, Clone)]
pub struct ThreadRandom {
    rng: SmallRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of unit values, wrapping around at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, BELOW_ONE) })
            .collect();
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_cycles() {
        let mut source = ScriptedSource::new(vec![0.1, 0.2]);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.2);
        assert_eq!(source.next_unit(), 0.1);
    }

    #[test]
    fn test_scripted_source_clamps_into_unit_range() {
        let mut source = ScriptedSource::new(vec![-3.0, 1.0, f64::NAN]);
        assert_eq!(source.next_unit(), 0.0);
        let high = source.next_unit();
        assert!(high < 1.0 && high > 0.999);
        assert_eq!(source.next_unit(), 0.0);
    }

    #[test]
    fn test_empty_script_yields_zero() {
        let mut source = ScriptedSource::new(vec![]);
        assert_eq!(source.next_unit(), 0.0);
    }

    #[test]
    fn test_thread_random_stays_in_unit_range() {
        let mut source = ThreadRandom::new();
        for _ in 0..1000 {
            let value = source.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = ThreadRandom::seeded(42);
        let mut b = ThreadRandom::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }
}
