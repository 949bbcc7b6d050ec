//! Ordering the catalog for one set of preferences.

mod shortlist;

pub use shortlist::{FilterPass, Shortlist};

use crate::catalog::{CardCatalog, CardRecord};
use crate::config::DEFAULT_RECOMMENDATION_LIMIT;
use crate::preferences::PreferenceRecord;
use crate::scoring::{CardScorer, ScoreResult, ScoringRubric};
use std::cmp::Reverse;
use tracing::{debug, warn};

/// A scored catalog entry borrowed from the catalog it was ranked from.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCard<'a> {
    pub card: &'a CardRecord,
    pub result: ScoreResult,
}

impl RankedCard<'_> {
    pub fn score(&self) -> f64 {
        self.result.score()
    }
}

/// Top cards for one preference record, best first.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    pub entries: Vec<RankedCard<'a>>,
    /// Cards that went through the scorer.
    pub scored: usize,
    /// Cards left out because they could not be identified.
    pub skipped: usize,
    pub max_score: f64,
}

impl Ranking<'_> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Applies a [`CardScorer`] to the whole catalog.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    scorer: CardScorer,
}

impl Ranker {
    pub fn new(rubric: ScoringRubric) -> Self {
        Self {
            scorer: CardScorer::new(rubric),
        }
    }

    pub fn scorer(&self) -> &CardScorer {
        &self.scorer
    }

    /// Score every card and keep the best `limit` (0 means the default of 5).
    ///
    /// Equal scores keep catalog order. A card whose scoring fails stays in the batch with a
    /// zero score and the error reason.
    pub fn rank<'a>(
        &self,
        catalog: &'a CardCatalog,
        preferences: &PreferenceRecord,
        limit: usize,
    ) -> Ranking<'a> {
        let limit = effective_size(limit);
        let mut skipped = 0;
        let mut entries = Vec::with_capacity(catalog.len());

        for card in catalog.cards() {
            if !card.has_identity() {
                warn!(
                    position = card.position,
                    "skipping card without bank name or variant"
                );
                skipped += 1;
                continue;
            }

            let result = match self.scorer.score(card, preferences) {
                Ok(result) => result,
                Err(err) => {
                    warn!(card = %card.display_name(), error = %err, "card scoring failed");
                    ScoreResult::failed(&err)
                }
            };
            entries.push(RankedCard { card, result });
        }

        let scored = entries.len();
        entries.sort_by_key(|entry| Reverse(entry.result.tenths()));
        entries.truncate(limit);

        debug!(scored, skipped, returned = entries.len(), "catalog ranked");

        Ranking {
            entries,
            scored,
            skipped,
            max_score: self.scorer.max_score(),
        }
    }

    /// Two-pass filter of the catalog against the user's hard constraints. See [`Shortlist`].
    pub fn shortlist<'a>(
        &self,
        catalog: &'a CardCatalog,
        preferences: &PreferenceRecord,
        size: usize,
    ) -> Shortlist<'a> {
        shortlist::build(catalog, preferences, effective_size(size))
    }
}

fn effective_size(requested: usize) -> usize {
    if requested == 0 {
        DEFAULT_RECOMMENDATION_LIMIT
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardFields;
    use crate::preferences::{BankingChannel, RepaymentBehavior, RewardType, SpendingCategory};
    use crate::scoring::SCORE_ERROR_REASON;

    fn preferences() -> PreferenceRecord {
        PreferenceRecord {
            spending_category: SpendingCategory::Fuel,
            repayment: RepaymentBehavior::Delay,
            fee_comfort: 500.0,
            reward_type: RewardType::Cashback,
            min_credit_limit: 50000.0,
            international_usage: false,
            wants_emi: false,
            banking_channel: BankingChannel::Digital,
        }
    }

    fn named(bank: &str, fee: &str, cashback: Option<&str>) -> CardFields {
        CardFields {
            bank_name: Some(bank.to_string()),
            card_variant: Some("Classic".to_string()),
            annual_fee: Some(fee.to_string()),
            credit_limit: Some("10000".to_string()),
            cashback: cashback.map(str::to_string),
            ..CardFields::default()
        }
    }

    #[test]
    fn orders_by_score_and_keeps_catalog_order_on_ties() {
        let catalog = CardCatalog::from_fields(vec![
            named("Tie One", "5000", None),
            named("Best", "0", Some("fuel cashback")),
            named("Tie Two", "5000", None),
            named("Middle", "0", None),
        ]);

        let ranking = Ranker::default().rank(&catalog, &preferences(), 10);
        let banks: Vec<_> = ranking
            .entries
            .iter()
            .map(|entry| entry.card.bank_name.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(banks, vec!["Best", "Middle", "Tie One", "Tie Two"]);
        assert_eq!(ranking.entries[0].score(), 3.5);
        assert_eq!(ranking.max_score, 8.0);
    }

    #[test]
    fn truncates_to_limit_and_defaults_zero_to_five() {
        let catalog = CardCatalog::from_fields(
            (0..8).map(|index| named(&format!("Bank {index}"), "0", None)),
        );
        let ranker = Ranker::default();

        assert_eq!(ranker.rank(&catalog, &preferences(), 3).len(), 3);
        assert_eq!(ranker.rank(&catalog, &preferences(), 0).len(), 5);
        assert_eq!(ranker.rank(&catalog, &preferences(), 20).len(), 8);
    }

    #[test]
    fn cards_without_identity_are_skipped() {
        let catalog = CardCatalog::from_fields(vec![
            CardFields {
                cashback: Some("fuel cashback".to_string()),
                ..CardFields::default()
            },
            named("Known", "0", None),
        ]);

        let ranking = Ranker::default().rank(&catalog, &preferences(), 5);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.scored, 1);
        assert_eq!(ranking.skipped, 1);
    }

    #[test]
    fn scoring_failure_yields_sentinel_entry() {
        let rubric = ScoringRubric {
            category_tiers: [u16::MAX, 1, 1],
            ..ScoringRubric::standard()
        };
        let catalog = CardCatalog::from_fields(vec![
            named("Overflowing", "0", Some("fuel cashback")),
            named("Plain", "0", None),
        ]);

        let ranking = Ranker::new(rubric).rank(&catalog, &preferences(), 5);
        assert_eq!(ranking.len(), 2);
        let failed = &ranking.entries[1];
        assert_eq!(failed.card.bank_name.as_deref(), Some("Overflowing"));
        assert_eq!(failed.score(), 0.0);
        assert_eq!(failed.result.reasons(), vec![SCORE_ERROR_REASON]);
    }

    #[test]
    fn empty_catalog_ranks_to_nothing() {
        let catalog = CardCatalog::default();
        let ranking = Ranker::default().rank(&catalog, &preferences(), 5);
        assert!(ranking.is_empty());
    }
}
