/// Coarse grade shown on the summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Strong,
    Fair,
    Low,
}

impl ScoreBand {
    /// `Strong` at 80% and up, `Fair` at 50% and up, `Low` below that.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 0.8 {
            Self::Strong
        } else if ratio >= 0.5 {
            Self::Fair
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Fair => "fair",
            Self::Low => "low",
        }
    }
}

/// Correct answers out of the dataset length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        Self { correct, total }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction correct, clamped to `[0, 1]`; zero for an empty total.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.correct as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    /// Percentage rounded to the nearest whole number.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u8 {
        (self.ratio() * 100.0).round() as u8
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_ratio(self.ratio())
    }
}
