use crate::catalog::{BankSector, CardCatalog, CardRecord};
use crate::preferences::{BankingChannel, PreferenceRecord, RepaymentBehavior};
use crate::scoring::keywords::{
    first_match, lowered, reward_terms, INTERNATIONAL_TERMS, ZERO_PERCENT_MARKER,
};
use serde::Serialize;
use tracing::{debug, info};

/// Which filter pass produced a shortlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPass {
    Strict,
    Relaxed,
}

/// Cards that satisfy the user's hard constraints, by credit-limit floor then fee ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortlist<'a> {
    pub pass: FilterPass,
    /// Survivors of the strict pass, before truncation.
    pub strict_matches: usize,
    pub cards: Vec<&'a CardRecord>,
}

pub(super) fn build<'a>(
    catalog: &'a CardCatalog,
    preferences: &PreferenceRecord,
    size: usize,
) -> Shortlist<'a> {
    let eligible: Vec<&CardRecord> = catalog
        .cards()
        .iter()
        .filter(|card| card.has_identity())
        .filter(|card| within_hard_limits(card, preferences))
        .filter(|card| offers_reward(card, preferences))
        .collect();

    let strict: Vec<&CardRecord> = eligible
        .iter()
        .copied()
        .filter(|card| meets_strict_preferences(card, preferences))
        .collect();
    let strict_matches = strict.len();

    let (pass, mut cards) = if strict_matches < size {
        debug!(
            strict_matches,
            relaxed_matches = eligible.len(),
            "too few strict matches; using relaxed filter"
        );
        (FilterPass::Relaxed, eligible)
    } else {
        (FilterPass::Strict, strict)
    };

    // Same bounds as the pre-filter: guaranteed limit first, worst-case fee second.
    cards.sort_by(|left, right| {
        right
            .credit_limit_range
            .min
            .total_cmp(&left.credit_limit_range.min)
            .then(left.fee_range.max.total_cmp(&right.fee_range.max))
    });
    cards.truncate(size);

    info!(?pass, strict_matches, returned = cards.len(), "shortlist built");

    Shortlist {
        pass,
        strict_matches,
        cards,
    }
}

/// The card's highest fee stays within budget and its lowest limit meets the requested minimum.
fn within_hard_limits(card: &CardRecord, preferences: &PreferenceRecord) -> bool {
    card.fee_range.max <= preferences.fee_comfort
        && card.credit_limit_range.min >= preferences.min_credit_limit
}

fn benefit_text(card: &CardRecord) -> String {
    [
        card.cashback.as_deref(),
        card.rewards.as_deref(),
        card.loyalty.as_deref(),
    ]
    .into_iter()
    .map(lowered)
    .collect::<Vec<_>>()
    .join(" | ")
}

fn offers_reward(card: &CardRecord, preferences: &PreferenceRecord) -> bool {
    first_match(&benefit_text(card), reward_terms(preferences.reward_type)).is_some()
}

fn meets_strict_preferences(card: &CardRecord, preferences: &PreferenceRecord) -> bool {
    if preferences.international_usage
        && first_match(&benefit_text(card), INTERNATIONAL_TERMS).is_none()
    {
        return false;
    }

    if preferences.repayment == RepaymentBehavior::Delay
        && !lowered(card.intro_rate.as_deref()).contains(ZERO_PERCENT_MARKER)
    {
        return false;
    }

    let wanted = match preferences.banking_channel {
        BankingChannel::Digital => BankSector::Private,
        BankingChannel::Branch => BankSector::Public,
    };
    card.bank_sector() == wanted
}
