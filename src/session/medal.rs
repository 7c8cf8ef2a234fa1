//! Medal tiers awarded at session end.

use serde::{Deserialize, Serialize};

/// Medal tier, from worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Stone,
    Bronze,
    Iron,
    Silicon,
}

/// Minimum win percentage for each tier above stone, best first.
pub const MEDAL_THRESHOLDS: [(f64, Medal); 3] = [
    (76.0, Medal::Silicon),
    (51.0, Medal::Iron),
    (26.0, Medal::Bronze),
];

impl Medal {
    /// Medal for a win percentage. Anything below the bronze threshold is
    /// stone, so every value in `[0, 100]` maps to a tier.
    ///
    /// ```
    /// use rust_arcade::session::Medal;
    ///
    /// assert_eq!(Medal::for_percentage(25.0), Medal::Stone);
    /// assert_eq!(Medal::for_percentage(26.0), Medal::Bronze);
    /// assert_eq!(Medal::for_percentage(100.0), Medal::Silicon);
    /// ```
    #[must_use]
    pub fn for_percentage(percentage: f64) -> Medal {
        MEDAL_THRESHOLDS
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map_or(Medal::Stone, |(_, medal)| *medal)
    }

    /// Lowercase tier name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Medal::Stone => "stone",
            Medal::Bronze => "bronze",
            Medal::Iron => "iron",
            Medal::Silicon => "silicon",
        }
    }

    /// Image resource for this medal.
    #[must_use]
    pub fn image_path(self) -> String {
        format!("images/medal_{}.svg", self.name())
    }

    /// Caption shown under the medal.
    #[must_use]
    pub fn caption(self) -> String {
        format!("You win the {} medal.", self.name())
    }
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Medal::for_percentage(0.0), Medal::Stone);
        assert_eq!(Medal::for_percentage(25.0), Medal::Stone);
        assert_eq!(Medal::for_percentage(25.5), Medal::Stone);
        assert_eq!(Medal::for_percentage(26.0), Medal::Bronze);
        assert_eq!(Medal::for_percentage(50.0), Medal::Bronze);
        assert_eq!(Medal::for_percentage(51.0), Medal::Iron);
        assert_eq!(Medal::for_percentage(75.0), Medal::Iron);
        assert_eq!(Medal::for_percentage(76.0), Medal::Silicon);
        assert_eq!(Medal::for_percentage(100.0), Medal::Silicon);
    }

    #[test]
    fn test_medal_resources() {
        assert_eq!(Medal::Silicon.image_path(), "images/medal_silicon.svg");
        assert_eq!(Medal::Stone.caption(), "You win the stone medal.");
        assert_eq!(Medal::Iron.to_string(), "iron");
    }

    proptest! {
        #[test]
        fn prop_medal_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Medal::for_percentage(lo) <= Medal::for_percentage(hi));
        }

        #[test]
        fn prop_integer_percentages_follow_table(p in 0u32..=100) {
            let expected = match p {
                0..=25 => Medal::Stone,
                26..=50 => Medal::Bronze,
                51..=75 => Medal::Iron,
                _ => Medal::Silicon,
            };
            prop_assert_eq!(Medal::for_percentage(f64::from(p)), expected);
        }
    }
}
