/// A closed range of ray parameters or scalar values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Every strictly positive ray parameter.
    pub const POSITIVE: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };

    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Positive ray parameters up to (and excluding) `max`.
    ///
    /// Used for shadow rays, where anything at or beyond the light is ignored.
    pub fn up_to(max: f32) -> Self {
        Self::new(0.0, max)
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));
        assert!(interval.surrounds(5.0));
        assert!(!interval.surrounds(-0.1));
    }

    #[test]
    fn test_up_to_excludes_the_light() {
        let range = Interval::up_to(4.0);
        assert!(range.surrounds(3.999));
        assert!(!range.surrounds(4.0));
        assert_eq!(range.min, 0.0);
    }

    #[test]
    fn test_positive_is_unbounded() {
        assert!(Interval::POSITIVE.surrounds(1e30));
        assert!(!Interval::POSITIVE.surrounds(0.0));
    }
}
