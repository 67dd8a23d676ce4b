//! Validated inspection scores.

use crate::error::{ScError, ScResult};
use core::fmt;

/// A single parameter score in `0..=10`.
///
/// Construction goes through [`Score::new`], so a held value is always in
/// range. Zero is a real score: "scored 0" and "not yet scored" are
/// different states, and the latter is represented by key absence in the
/// record, never by a zero here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Score(u8);

impl Score {
    /// Highest score a parameter can receive.
    pub const MAX_VALUE: u8 = 10;

    /// Maximum as a [`Score`], handy for totals.
    pub const MAX: Score = Score(Self::MAX_VALUE);

    pub fn new(value: u8) -> ScResult<Self> {
        if value > Self::MAX_VALUE {
            return Err(ScError::ScoreOutOfRange { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Display band for this score's magnitude. Rendering only; no scoring
    /// logic keys off the band.
    pub fn band(self) -> ScoreBand {
        match self.0 {
            8..=10 => ScoreBand::High,
            6..=7 => ScoreBand::Mid,
            4..=5 => ScoreBand::Low,
            _ => ScoreBand::Poor,
        }
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Score {
    type Error = ScError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> u32 {
        u32::from(score.0)
    }
}

/// Magnitude tiers used for color banding in the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Mid,
    Low,
    Poor,
}

impl ScoreBand {
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Mid => "mid",
            ScoreBand::Low => "low",
            ScoreBand::Poor => "poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for v in 0..=10 {
            assert_eq!(Score::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Score::new(11),
            Err(ScError::ScoreOutOfRange { value: 11 })
        );
    }

    #[test]
    fn zero_is_a_real_score() {
        let zero = Score::new(0).unwrap();
        assert_eq!(zero.value(), 0);
        assert_eq!(zero.band(), ScoreBand::Poor);
    }

    #[test]
    fn band_tiers_match_display_contract() {
        let bands: Vec<ScoreBand> = (0..=10)
            .map(|v| Score::new(v).unwrap().band())
            .collect();
        assert_eq!(&bands[0..=3], &[ScoreBand::Poor; 4]);
        assert_eq!(&bands[4..=5], &[ScoreBand::Low; 2]);
        assert_eq!(&bands[6..=7], &[ScoreBand::Mid; 2]);
        assert_eq!(&bands[8..=10], &[ScoreBand::High; 3]);
    }
}
