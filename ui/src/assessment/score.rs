//! Colour banding for the overall score.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreTier {
    NeedsAttention,
    Fair,
    Good,
    Excellent,
}

impl ScoreTier {
    /// Bands over the 0–50 scale: `<20`, `20..30`, `30..40`, `>=40`.
    pub fn for_score(score: f64) -> Self {
        if score >= 40.0 {
            Self::Excellent
        } else if score >= 30.0 {
            Self::Good
        } else if score >= 20.0 {
            Self::Fair
        } else {
            Self::NeedsAttention
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsAttention => "Needs attention",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#22c55e",
            Self::Good => "#3b82f6",
            Self::Fair => "#eab308",
            Self::NeedsAttention => "#ef4444",
        }
    }

    /// CSS modifier, e.g. `score--excellent`.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Excellent => "score--excellent",
            Self::Good => "score--good",
            Self::Fair => "score--fair",
            Self::NeedsAttention => "score--attention",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_fall_into_the_upper_band() {
        assert_eq!(ScoreTier::for_score(0.0), ScoreTier::NeedsAttention);
        assert_eq!(ScoreTier::for_score(19.9), ScoreTier::NeedsAttention);
        assert_eq!(ScoreTier::for_score(20.0), ScoreTier::Fair);
        assert_eq!(ScoreTier::for_score(29.0), ScoreTier::Fair);
        assert_eq!(ScoreTier::for_score(30.0), ScoreTier::Good);
        assert_eq!(ScoreTier::for_score(39.5), ScoreTier::Good);
        assert_eq!(ScoreTier::for_score(40.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::for_score(50.0), ScoreTier::Excellent);
    }

    #[test]
    fn tier_never_drops_as_score_rises() {
        let mut previous = ScoreTier::for_score(0.0);
        for step in 0..=100 {
            let tier = ScoreTier::for_score(step as f64 * 0.5);
            assert!(tier >= previous, "tier dropped at {}", step as f64 * 0.5);
            previous = tier;
        }
    }

    #[test]
    fn each_tier_has_its_own_class() {
        let classes = [
            ScoreTier::NeedsAttention.css_class(),
            ScoreTier::Fair.css_class(),
            ScoreTier::Good.css_class(),
            ScoreTier::Excellent.css_class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
