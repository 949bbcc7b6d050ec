/// Invariants of parsing, scoring and ranking that must hold for any input.
use card_advisor::catalog::{parse_amount, parse_range, CardCatalog, CardFields, CardRecord};
use card_advisor::preferences::{
    BankingChannel, PreferenceRecord, RepaymentBehavior, RewardType, SpendingCategory,
};
use card_advisor::ranking::{FilterPass, Ranker};
use card_advisor::scoring::CardScorer;
use proptest::prelude::*;

/// Benefit-like text mixing keywords the scorer looks for with noise.
fn benefit_text() -> impl Strategy<Value = Option<String>> {
    let words = prop::sample::select(vec![
        "fuel", "cashback", "reward", "International", "EMI", "0%", "travel", "dining",
        "grocery", "shopping", "lounge", "forex", "points", "Private", "Public", "₹500", "-",
    ]);
    prop::option::of(
        prop::collection::vec(words, 0..8).prop_map(|words| words.join(" ")),
    )
}

fn amount_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        "\\PC*",
        (0u32..2_000_000).prop_map(|value| format!("₹{value}")),
        (0u32..100_000, 0u32..2_000_000).prop_map(|(low, high)| format!("₹{low} - ₹{high}")),
    ])
}

fn card_fields() -> impl Strategy<Value = CardFields> {
    (
        prop::option::of("[A-Z][a-z]{2,8} Bank"),
        amount_text(),
        amount_text(),
        benefit_text(),
        benefit_text(),
        benefit_text(),
        benefit_text(),
        benefit_text(),
    )
        .prop_map(
            |(bank_name, annual_fee, credit_limit, cashback, rewards, loyalty, intro_rate, bank_type)| {
                CardFields {
                    bank_name,
                    card_variant: Some("Card".to_string()),
                    annual_fee,
                    credit_limit,
                    cashback,
                    rewards,
                    loyalty,
                    intro_rate,
                    bank_type,
                }
            },
        )
}

fn preferences() -> impl Strategy<Value = PreferenceRecord> {
    (
        prop::sample::select(vec![
            SpendingCategory::Groceries,
            SpendingCategory::Shopping,
            SpendingCategory::Travel,
            SpendingCategory::Dining,
            SpendingCategory::Fuel,
        ]),
        prop::sample::select(vec![RepaymentBehavior::OnTime, RepaymentBehavior::Delay]),
        0.0f64..10_000.0,
        prop::sample::select(vec![
            RewardType::Cashback,
            RewardType::Travel,
            RewardType::Shopping,
        ]),
        0.0f64..2_000_000.0,
        any::<bool>(),
        any::<bool>(),
        prop::sample::select(vec![BankingChannel::Digital, BankingChannel::Branch]),
    )
        .prop_map(
            |(
                spending_category,
                repayment,
                fee_comfort,
                reward_type,
                min_credit_limit,
                international_usage,
                wants_emi,
                banking_channel,
            )| PreferenceRecord {
                spending_category,
                repayment,
                fee_comfort,
                reward_type,
                min_credit_limit,
                international_usage,
                wants_emi,
                banking_channel,
            },
        )
}

proptest! {
    #[test]
    fn amounts_are_never_negative(raw in "\\PC*") {
        let amount = parse_amount(&raw);
        prop_assert!(amount.is_finite() && amount >= 0.0);

        let range = parse_range(&raw);
        prop_assert!(range.min >= 0.0 && range.min <= range.max && range.max.is_finite());
    }

    #[test]
    fn scores_stay_within_ceiling(fields in card_fields(), prefs in preferences()) {
        let scorer = CardScorer::default();
        let card = CardRecord::from_fields(0, fields);
        let result = scorer.score(&card, &prefs).expect("standard rubric cannot overflow");

        prop_assert!(result.score() >= 0.0);
        prop_assert!(result.score() <= scorer.max_score());
        prop_assert_eq!(result.reasons().len(), result.components().len());
    }

    #[test]
    fn ranking_returns_min_of_limit_and_catalog(
        rows in prop::collection::vec(card_fields(), 0..15),
        prefs in preferences(),
        limit in 1usize..20,
    ) {
        let catalog = CardCatalog::from_fields(rows);
        let identified = catalog.cards().iter().filter(|card| card.has_identity()).count();
        let ranking = Ranker::default().rank(&catalog, &prefs, limit);

        prop_assert_eq!(ranking.len(), limit.min(identified));
        prop_assert!(ranking
            .entries
            .windows(2)
            .all(|pair| pair[0].result.tenths() >= pair[1].result.tenths()));
    }

    #[test]
    fn equal_scores_keep_catalog_order(
        fields in card_fields(),
        copies in 1usize..10,
        prefs in preferences(),
    ) {
        let catalog = CardCatalog::from_fields(std::iter::repeat(fields).take(copies));
        let ranking = Ranker::default().rank(&catalog, &prefs, copies);
        let positions: Vec<_> = ranking.entries.iter().map(|entry| entry.card.position).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        prop_assert_eq!(positions, sorted);
    }

    #[test]
    fn relaxed_pass_never_returns_fewer_cards(
        rows in prop::collection::vec(card_fields(), 0..15),
        prefs in preferences(),
        size in 1usize..8,
    ) {
        let catalog = CardCatalog::from_fields(rows);
        let shortlist = Ranker::default().shortlist(&catalog, &prefs, size);

        prop_assert!(shortlist.cards.len() <= size);
        prop_assert!(shortlist.cards.len() >= shortlist.strict_matches.min(size));
        if shortlist.pass == FilterPass::Strict {
            prop_assert_eq!(shortlist.cards.len(), size);
        }
    }
}
