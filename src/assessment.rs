//! Assessment scales: turning raw field observations into criterion scores.
//!
//! Each criterion is assessed on one of two scales. Range criteria (prices,
//! ratings, road quality grades) map a raw measurement through ordered score
//! bands; checklist criteria (public facilities) score as the number of items
//! present at the site. The resulting per-criterion scores feed
//! [`Alternative::criteria_values`](crate::saw::Alternative).

use crate::error::EngineError;

/// One band of a range scale: raw values in `[min, max]` earn `score`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBand {
    /// Display label ("Cheap", "Good", …).
    pub label: String,
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive.
    pub max: f64,
    /// Score earned by measurements inside the band.
    pub score: f64,
}

impl ScoreBand {
    /// Creates a band.
    pub fn new(label: impl Into<String>, min: f64, max: f64, score: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            score,
        }
    }

    /// Whether `value` falls inside this band (both bounds inclusive).
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// How a criterion's raw observation becomes a score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AssessmentScale {
    /// Measurement mapped through score bands; the first band containing the
    /// value wins. Bands are checked in the order given.
    Range(Vec<ScoreBand>),
    /// The observation is a count of items present, used as the score
    /// directly.
    Checklist,
}

impl AssessmentScale {
    /// Scores a raw observation.
    ///
    /// For [`AssessmentScale::Range`], the observation is a measurement and
    /// the result is the score of the first matching band, or `None` when no
    /// band contains it. For [`AssessmentScale::Checklist`], the observation
    /// is the item count and passes through unchanged.
    pub fn score_for(&self, observation: f64) -> Option<f64> {
        match self {
            AssessmentScale::Range(bands) => bands
                .iter()
                .find(|b| b.contains(observation))
                .map(|b| b.score),
            AssessmentScale::Checklist => Some(observation),
        }
    }
}

/// Scores one observation per criterion, producing a criteria-values vector.
///
/// Observations falling outside every band score 0, which downstream SAW
/// normalization treats as "no data" rather than "best cost". Returns
/// [`EngineError::DimensionMismatch`] when the two slices disagree in length.
pub fn score_observations(
    scales: &[AssessmentScale],
    observations: &[f64],
) -> Result<Vec<f64>, EngineError> {
    if scales.len() != observations.len() {
        return Err(EngineError::DimensionMismatch {
            context: "observations",
            expected: scales.len(),
            actual: observations.len(),
        });
    }
    Ok(scales
        .iter()
        .zip(observations)
        .map(|(scale, &obs)| scale.score_for(obs).unwrap_or(0.0))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price_bands() -> AssessmentScale {
        AssessmentScale::Range(vec![
            ScoreBand::new("Cheap", 0.0, 10_000.0, 5.0),
            ScoreBand::new("Moderate", 10_001.0, 25_000.0, 3.0),
            ScoreBand::new("Expensive", 25_001.0, f64::MAX, 1.0),
        ])
    }

    #[test]
    fn test_range_picks_matching_band() {
        let scale = price_bands();
        assert_eq!(scale.score_for(5_000.0), Some(5.0));
        assert_eq!(scale.score_for(15_000.0), Some(3.0));
        assert_eq!(scale.score_for(100_000.0), Some(1.0));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let scale = price_bands();
        assert_eq!(scale.score_for(0.0), Some(5.0));
        assert_eq!(scale.score_for(10_000.0), Some(5.0));
        assert_eq!(scale.score_for(10_001.0), Some(3.0));
    }

    #[test]
    fn test_range_no_matching_band() {
        let scale = AssessmentScale::Range(vec![ScoreBand::new("Low", 1.0, 2.0, 1.0)]);
        assert_eq!(scale.score_for(3.0), None);
    }

    #[test]
    fn test_first_matching_band_wins_on_overlap() {
        let scale = AssessmentScale::Range(vec![
            ScoreBand::new("A", 0.0, 10.0, 1.0),
            ScoreBand::new("B", 5.0, 15.0, 2.0),
        ]);
        assert_eq!(scale.score_for(7.0), Some(1.0));
    }

    #[test]
    fn test_checklist_counts_items() {
        let scale = AssessmentScale::Checklist;
        assert_eq!(scale.score_for(4.0), Some(4.0));
        assert_eq!(scale.score_for(0.0), Some(0.0));
    }

    #[test]
    fn test_score_observations_builds_criteria_values() {
        let scales = vec![price_bands(), AssessmentScale::Checklist];
        let values = score_observations(&scales, &[15_000.0, 6.0]).unwrap();
        assert_eq!(values, vec![3.0, 6.0]);
    }

    #[test]
    fn test_score_observations_unmatched_scores_zero() {
        let scales = vec![AssessmentScale::Range(vec![ScoreBand::new(
            "Only", 1.0, 2.0, 9.0,
        )])];
        let values = score_observations(&scales, &[50.0]).unwrap();
        assert_eq!(values, vec![0.0]);
    }

    #[test]
    fn test_score_observations_length_mismatch() {
        let scales = vec![AssessmentScale::Checklist];
        let err = score_observations(&scales, &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::DimensionMismatch {
                expected: 1,
                actual: 2,
                ..
            }
        ));
    }
}
