use crate::catalog::{AmountRange, CardRecord};
use crate::ranking::{FilterPass, RankedCard, Shortlist};
use serde::Serialize;

/// Display features of one card, kept as structured fields rather than rendered text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CardFeatures {
    pub annual_fee: Option<String>,
    pub credit_limit: Option<String>,
    pub cashback: Option<String>,
    pub rewards: Option<String>,
    pub interest_rates: Option<String>,
    pub loyalty_program: Option<String>,
    pub bank_type: Option<String>,
}

impl CardFeatures {
    pub fn of(card: &CardRecord) -> Self {
        Self {
            annual_fee: card.annual_fee_text.clone(),
            credit_limit: card.credit_limit_text.clone(),
            cashback: card.cashback.clone(),
            rewards: card.rewards.clone(),
            interest_rates: card.intro_rate.clone(),
            loyalty_program: card.loyalty.clone(),
            bank_type: card.bank_type.clone(),
        }
    }

    /// Present features with their display labels, in presentation order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Annual Fee", &self.annual_fee),
            ("Credit Limit", &self.credit_limit),
            ("Cashback", &self.cashback),
            ("Rewards", &self.rewards),
            ("Interest Rates", &self.interest_rates),
            ("Loyalty Program", &self.loyalty_program),
            ("Bank Type", &self.bank_type),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|value| (label, value)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub name: String,
    pub bank: Option<String>,
    pub card_variant: Option<String>,
    pub score: f64,
    pub max_score: f64,
    pub reasons: Vec<String>,
    pub rationale: String,
    pub features: CardFeatures,
}

impl RecommendationView {
    pub(crate) fn from_ranked(rank: usize, entry: &RankedCard<'_>, max_score: f64) -> Self {
        Self {
            rank,
            name: entry.card.display_name(),
            bank: entry.card.bank_name.clone(),
            card_variant: entry.card.card_variant.clone(),
            score: entry.score(),
            max_score,
            reasons: entry.result.reasons(),
            rationale: entry.result.rationale(),
            features: CardFeatures::of(entry.card),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortlistCardView {
    pub name: String,
    pub bank: Option<String>,
    pub card_variant: Option<String>,
    pub fee_range: AmountRange,
    pub credit_limit_range: AmountRange,
    pub features: CardFeatures,
}

impl ShortlistCardView {
    fn of(card: &CardRecord) -> Self {
        Self {
            name: card.display_name(),
            bank: card.bank_name.clone(),
            card_variant: card.card_variant.clone(),
            fee_range: card.fee_range,
            credit_limit_range: card.credit_limit_range,
            features: CardFeatures::of(card),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortlistView {
    pub pass: FilterPass,
    pub strict_matches: usize,
    pub cards: Vec<ShortlistCardView>,
}

impl From<&Shortlist<'_>> for ShortlistView {
    fn from(shortlist: &Shortlist<'_>) -> Self {
        Self {
            pass: shortlist.pass,
            strict_matches: shortlist.strict_matches,
            cards: shortlist
                .cards
                .iter()
                .map(|card| ShortlistCardView::of(card))
                .collect(),
        }
    }
}
