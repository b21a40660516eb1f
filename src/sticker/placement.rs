use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Closed interval on one canvas axis, in percent of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, axis: &'static str) -> Result<()> {
        // The span must be finite too, or uniform sampling overflows.
        let span = self.max - self.min;
        if self.min.is_finite() && self.max.is_finite() && span.is_finite() && span >= 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                axis,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Where spawned copies may land on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementRange {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl PlacementRange {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    pub fn validate(&self) -> Result<()> {
        self.x.validate("x")?;
        self.y.validate("y")
    }
}

impl Default for PlacementRange {
    fn default() -> Self {
        Self {
            x: AxisRange::new(10.0, 90.0),
            y: AxisRange::new(10.0, 80.0),
        }
    }
}

/// Picks canvas coordinates for a newly spawned sticker.
///
/// Any `Fn(&PlacementRange) -> (f64, f64)` closure is a placement, which is
/// how tests pin coordinates.
pub trait Placement: Send + Sync {
    fn place(&self, range: &PlacementRange) -> (f64, f64);
}

impl<F> Placement for F
where
    F: Fn(&PlacementRange) -> (f64, f64) + Send + Sync,
{
    fn place(&self, range: &PlacementRange) -> (f64, f64) {
        self(range)
    }
}

/// Independent uniform draws on each axis.
pub struct RandomPlacement {
    rng: Mutex<StdRng>,
}

impl RandomPlacement {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence of positions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self::new()
    }
}

fn draw(rng: &mut StdRng, axis: &AxisRange) -> f64 {
    if axis.min < axis.max {
        rng.gen_range(axis.min..axis.max)
    } else {
        axis.min
    }
}

impl Placement for RandomPlacement {
    fn place(&self, range: &PlacementRange) -> (f64, f64) {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let x = draw(&mut rng, &range.x);
        let y = draw(&mut rng, &range.y);
        (x, y)
    }
}

/// Always lands at the same spot, clamped into the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPlacement {
    pub x: f64,
    pub y: f64,
}

impl FixedPlacement {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Placement for FixedPlacement {
    fn place(&self, range: &PlacementRange) -> (f64, f64) {
        (
            self.x.clamp(range.x.min, range.x.max),
            self.y.clamp(range.y.min, range.y.max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_draws_stay_in_range() {
        let placement = RandomPlacement::seeded(42);
        let range = PlacementRange::default();

        for _ in 0..500 {
            let (x, y) = placement.place(&range);
            assert!(range.contains(x, y), "({x}, {y}) escaped the canvas range");
        }
    }

    #[test]
    fn seeded_placement_is_reproducible() {
        let range = PlacementRange::default();
        let a = RandomPlacement::seeded(7);
        let b = RandomPlacement::seeded(7);

        for _ in 0..10 {
            assert_eq!(a.place(&range), b.place(&range));
        }
    }

    #[test]
    fn degenerate_axis_returns_its_bound() {
        let range = PlacementRange {
            x: AxisRange::new(50.0, 50.0),
            y: AxisRange::new(10.0, 80.0),
        };

        let (x, _) = RandomPlacement::seeded(1).place(&range);
        assert_eq!(x, 50.0);
    }

    #[test]
    fn fixed_placement_clamps() {
        let placement = FixedPlacement::new(0.0, 95.0);

        assert_eq!(placement.place(&PlacementRange::default()), (10.0, 80.0));
    }

    #[test]
    fn closures_are_placements() {
        let corner = |range: &PlacementRange| (range.x.max, range.y.min);

        assert_eq!(corner.place(&PlacementRange::default()), (90.0, 10.0));
    }

    #[test]
    fn validate_rejects_inverted_and_nan_ranges() {
        let inverted = PlacementRange {
            x: AxisRange::new(90.0, 10.0),
            ..PlacementRange::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(ConfigError::InvalidRange { axis: "x", .. })
        ));

        let nan = PlacementRange {
            y: AxisRange::new(f64::NAN, 80.0),
            ..PlacementRange::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::InvalidRange { axis: "y", .. })
        ));
    }

    #[test]
    fn validate_rejects_span_that_overflows() {
        let huge = PlacementRange {
            x: AxisRange::new(-1.0e308, 1.0e308),
            ..PlacementRange::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(ConfigError::InvalidRange { axis: "x", .. })
        ));

        let wide = PlacementRange {
            x: AxisRange::new(-1.0e307, 1.0e307),
            ..PlacementRange::default()
        };
        assert!(wide.validate().is_ok());
        let (x, _) = RandomPlacement::seeded(5).place(&wide);
        assert!(wide.x.contains(x));
    }
}
