//! Additive suitability scoring for one (card, preferences) pair.

pub(crate) mod keywords;
mod rubric;
mod rules;

pub use rubric::ScoringRubric;

use crate::catalog::CardRecord;
use crate::preferences::PreferenceRecord;
use serde::Serialize;

/// Reason reported for a pair whose scoring failed internally.
pub const SCORE_ERROR_REASON: &str = "Error in calculating score";

/// Rationale shown when no criterion contributed.
pub const NO_BENEFITS_RATIONALE: &str = "No specific benefits found";

/// Criteria in the order they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    SpendingCategory,
    Repayment,
    AnnualFee,
    CreditLimit,
    International,
    Emi,
    BankingChannel,
}

/// Contribution of one criterion, kept so a score can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub criterion: Criterion,
    pub tenths: u16,
    pub reason: String,
}

/// Score for one pair plus its justification trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    tenths: u16,
    components: Vec<ScoreComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ScoreResult {
    /// Zero score carrying the sentinel reason.
    pub fn failed(error: &ScoreError) -> Self {
        Self {
            tenths: 0,
            components: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// Total rounded to one decimal place.
    pub fn score(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    pub fn tenths(&self) -> u16 {
        self.tenths
    }

    pub fn components(&self) -> &[ScoreComponent] {
        &self.components
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// One reason per contributing criterion, in evaluation order.
    pub fn reasons(&self) -> Vec<String> {
        if self.error.is_some() {
            return vec![SCORE_ERROR_REASON.to_string()];
        }
        self.components
            .iter()
            .map(|component| component.reason.clone())
            .collect()
    }

    /// Reasons joined with `"; "`.
    pub fn rationale(&self) -> String {
        let reasons = self.reasons();
        if reasons.is_empty() {
            NO_BENEFITS_RATIONALE.to_string()
        } else {
            reasons.join("; ")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("score overflowed while adding {criterion:?} points")]
    PointOverflow { criterion: Criterion },
}

/// Stateless scorer applying a rubric to card/preference pairs.
#[derive(Debug, Clone, Default)]
pub struct CardScorer {
    rubric: ScoringRubric,
}

impl CardScorer {
    pub fn new(rubric: ScoringRubric) -> Self {
        Self { rubric }
    }

    /// Highest score this scorer can produce.
    pub fn max_score(&self) -> f64 {
        self.rubric.ceiling()
    }

    pub fn score(
        &self,
        card: &CardRecord,
        preferences: &PreferenceRecord,
    ) -> Result<ScoreResult, ScoreError> {
        let (components, tenths) = rules::score_card(card, preferences, &self.rubric)?;
        Ok(ScoreResult {
            tenths,
            components,
            error: None,
        })
    }
}
