use serde::{Serialize, Serializer};

/// A rating rounded to half-star granularity, always in `0.0..=5.0`.
///
/// Stored as a count of half stars so the value is exact and can be split into
/// full stars and an optional trailing half star without float arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedRating {
    half_stars: u8,
}

impl WeightedRating {
    pub const ZERO: Self = Self { half_stars: 0 };
    pub const MAX: Self = Self { half_stars: 10 };

    pub const fn from_half_stars(half_stars: u8) -> Option<Self> {
        if half_stars <= Self::MAX.half_stars {
            Some(Self { half_stars })
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        f64::from(self.half_stars) / 2.0
    }

    pub fn full_stars(self) -> u32 {
        u32::from(self.half_stars / 2)
    }

    pub fn has_half_star(self) -> bool {
        self.half_stars % 2 == 1
    }
}

impl Serialize for WeightedRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// Half-open `[min, max)` ranges and the half-star count they map to.
const BUCKETS: [(f64, f64, u8); 8] = [
    (0.0, 1.2, 2),
    (1.2, 1.7, 3),
    (1.7, 2.2, 4),
    (2.2, 2.7, 5),
    (2.7, 3.2, 6),
    (3.2, 3.7, 7),
    (3.7, 4.2, 8),
    (4.2, 4.5, 9),
];

/// Maps a continuous rating to the weighted rating rendered as stars.
///
/// Anything above 4.5 is five stars. A rating of exactly 4.5, a negative
/// rating or NaN fall into no bucket and yield [`WeightedRating::ZERO`].
pub fn quantize(rating: f64) -> WeightedRating {
    if rating > 4.5 {
        return WeightedRating::MAX;
    }

    BUCKETS
        .iter()
        .find(|(min, max, _)| rating >= *min && rating < *max)
        .and_then(|&(_, _, half_stars)| WeightedRating::from_half_stars(half_stars))
        .unwrap_or(WeightedRating::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_fidelity() {
        assert_eq!(quantize(0.0).value(), 1.0);
        assert_eq!(quantize(1.19).value(), 1.0);
        assert_eq!(quantize(1.2).value(), 1.5);
        assert_eq!(quantize(1.7).value(), 2.0);
        assert_eq!(quantize(2.69).value(), 2.5);
        assert_eq!(quantize(3.0).value(), 3.0);
        assert_eq!(quantize(3.4).value(), 3.5);
        assert_eq!(quantize(4.19).value(), 4.0);
        assert_eq!(quantize(4.2).value(), 4.5);
        assert_eq!(quantize(4.6).value(), 5.0);
        assert_eq!(quantize(5.0).value(), 5.0);
    }

    #[test]
    fn test_exactly_four_and_a_half_matches_no_bucket() {
        assert_eq!(quantize(4.5), WeightedRating::ZERO);
    }

    #[test]
    fn test_out_of_domain_inputs() {
        assert_eq!(quantize(-0.1), WeightedRating::ZERO);
        assert_eq!(quantize(f64::NAN), WeightedRating::ZERO);
        assert_eq!(quantize(f64::INFINITY), WeightedRating::MAX);
    }

    #[test]
    fn test_total_and_deterministic_over_domain() {
        for hundredths in 0..=500 {
            let rating = f64::from(hundredths) / 100.0;
            let weighted = quantize(rating);

            let value = weighted.value();
            assert!((0.0..=5.0).contains(&value), "{rating} -> {value}");
            assert_eq!((value * 2.0).fract(), 0.0, "{rating} -> {value}");
            assert_eq!(quantize(rating), weighted);
        }
    }

    #[test]
    fn test_monotonic_except_at_four_and_a_half() {
        let mut previous = WeightedRating::ZERO;
        for hundredths in 0..=500 {
            if hundredths == 450 {
                continue;
            }
            let weighted = quantize(f64::from(hundredths) / 100.0);
            assert!(weighted >= previous);
            previous = weighted;
        }
    }

    #[test]
    fn test_star_split() {
        let weighted = quantize(3.4);
        assert_eq!(weighted.full_stars(), 3);
        assert!(weighted.has_half_star());

        let weighted = quantize(4.9);
        assert_eq!(weighted.full_stars(), 5);
        assert!(!weighted.has_half_star());
    }

    #[test]
    fn test_rejects_more_than_five_stars() {
        assert!(WeightedRating::from_half_stars(11).is_none());
        assert_eq!(WeightedRating::from_half_stars(10), Some(WeightedRating::MAX));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&quantize(3.4)).unwrap();
        assert_eq!(json, "3.5");
    }
}
