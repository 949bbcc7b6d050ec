use super::keywords::{
    category_terms, first_match, lowered, INTERNATIONAL_KEYWORD, ZERO_PERCENT_MARKER,
};
use super::rubric::ScoringRubric;
use super::{Criterion, ScoreComponent, ScoreError};
use crate::catalog::CardRecord;
use crate::preferences::{BankingChannel, PreferenceRecord, RepaymentBehavior};

/// Running total for one card. Contributions are added in evaluation order.
struct Tally {
    components: Vec<ScoreComponent>,
    tenths: u16,
}

impl Tally {
    fn award(
        &mut self,
        criterion: Criterion,
        tenths: u16,
        reason: impl Into<String>,
    ) -> Result<(), ScoreError> {
        if tenths == 0 {
            return Ok(());
        }
        self.tenths = self
            .tenths
            .checked_add(tenths)
            .ok_or(ScoreError::PointOverflow { criterion })?;
        self.components.push(ScoreComponent {
            criterion,
            tenths,
            reason: reason.into(),
        });
        Ok(())
    }
}

/// Lowercased benefit text of one card, computed once per scoring pass.
struct BenefitText {
    cashback: String,
    rewards: String,
    loyalty: String,
    intro_rate: String,
    bank_type: String,
}

impl BenefitText {
    fn of(card: &CardRecord) -> Self {
        Self {
            cashback: lowered(card.cashback.as_deref()),
            rewards: lowered(card.rewards.as_deref()),
            loyalty: lowered(card.loyalty.as_deref()),
            intro_rate: lowered(card.intro_rate.as_deref()),
            bank_type: lowered(card.bank_type.as_deref()),
        }
    }
}

pub(crate) fn score_card(
    card: &CardRecord,
    preferences: &PreferenceRecord,
    rubric: &ScoringRubric,
) -> Result<(Vec<ScoreComponent>, u16), ScoreError> {
    let text = BenefitText::of(card);
    let mut tally = Tally {
        components: Vec::new(),
        tenths: 0,
    };

    spending_category(&mut tally, &text, preferences, rubric)?;
    repayment(&mut tally, &text, preferences, rubric)?;
    annual_fee(&mut tally, card, preferences, rubric)?;
    credit_limit(&mut tally, card, preferences, rubric)?;
    international(&mut tally, &text, preferences, rubric)?;
    emi(&mut tally, &text, preferences, rubric)?;
    banking_channel(&mut tally, &text, preferences, rubric)?;

    Ok((tally.components, tally.tenths))
}

fn spending_category(
    tally: &mut Tally,
    text: &BenefitText,
    preferences: &PreferenceRecord,
    rubric: &ScoringRubric,
) -> Result<(), ScoreError> {
    let category = preferences.spending_category;
    let terms = category_terms(category);
    let [cashback_points, rewards_points, loyalty_points] = rubric.category_tiers;

    let tiers = [
        (&text.cashback, cashback_points, "Excellent", "cashback"),
        (&text.rewards, rewards_points, "Good", "rewards"),
        (&text.loyalty, loyalty_points, "Basic", "benefits"),
    ];

    for (haystack, points, quality, source) in tiers {
        if let Some(term) = first_match(haystack, terms) {
            return tally.award(
                Criterion::SpendingCategory,
                points,
                format!("{quality} match for your {category} spending with {term} {source}."),
            );
        }
    }

    Ok(())
}

fn repayment(
    tally: &mut Tally,
    text: &BenefitText,
    preferences: &PreferenceRecord,
    rubric: &ScoringRubric,
) -> Result<(), ScoreError> {
    match preferences.repayment {
        RepaymentBehavior::Delay if text.intro_rate.contains(ZERO_PERCENT_MARKER) => tally.award(
            Criterion::Repayment,
            rubric.repayment_delay_intro_offer,
            "Offers 0% introductory interest rate.",
        ),
        RepaymentBehavior::OnTime if text.rewards.contains("reward") => tally.award(
            Criterion::Repayment,
            rubric.repayment_on_time_rewards,
            "Good rewards for full payment behavior.",
        ),
        _ => Ok(()),
    }
}

fn annual_fee(
    tally: &mut Tally,
    card: &CardRecord,
    preferences: &PreferenceRecord,
    rubric: &ScoringRubric,
) -> Result<(), ScoreError> {
    let fee = card.annual_fee;
    let comfort = preferences.fee_comfort;
    if !fee.is_finite() || !comfort.is_finite() {
        return Ok(());
    }

    if fee <= comfort {
        tally.award(
            Criterion::AnnualFee,
            rubric.fee_within_budget,
            "Annual fee within your budget.",
        )
    } else if fee <= comfort * f64::from(rubric.fee_tolerance_pct) / 100.0 {
        tally.award(
            Criterion::AnnualFee,
            rubric.fee_near_budget,
            "Annual fee slightly above your budget.",
        )
    } else {
        Ok(())
    }
}

fn credit_limit(
    tally: &mut Tally,
    card: &CardRecord,
    preferences: &PreferenceRecord,
    rubric: &ScoringRubric,
) -> Result<(), ScoreError> {
    let limit = card.credit_limit;
    let minimum = preferences.min_credit_limit;
    if !limit.is_finite() || !minimum.is_finite() {
        return Ok(());
    }

    if limit >= minimum {
        tally.award(
            Criterion::CreditLimit,
            rubric.limit_meets_minimum,
            "Meets your credit limit requirement.",
        )
    } else if limit >= minimum * f64::from(rubric.limit_tolerance_pct) / 100.0 {
        tally.award(
            Criterion::CreditLimit,
            rubric.limit_near_minimum,
            "Credit limit slightly below your requirement but still substantial.",
        )
    } else {
        Ok(())
    }
}

fn international(
    tally: &mut Tally,
    text: &BenefitText,
    preferences: &PreferenceRecord,
    rubric: &ScoringRubric,
) -> Result<(), ScoreError> {
    if !preferences.international_usage {
        return Ok(());
    }

    if text.cashback.contains(INTERNATIONAL_KEYWORD) {
        tally.award(
            Criterion::International,
            rubric.international_cashback,
            "Good for international transactions.",
        )
    } else if text.loyalty.contains(INTERNATIONAL_KEYWORD) {
        tally.award(
            Criterion::International,
            rubric.international_loyalty,
            "Offers some international benefits.",
        )
    } else {
        Ok(())
    }
}

fn emi(
    tally: &mut Tally,
    text: &BenefitText,
    preferences: &PreferenceRecord,
    rubric: &ScoringRubric,
) -> Result<(), ScoreError> {
    if preferences.wants_emi && (text.intro_rate.contains("emi") || text.loyalty.contains("emi")) {
        tally.award(
            Criterion::Emi,
            rubric.emi_conversion,
            "Offers EMI conversion facility.",
        )
    } else {
        Ok(())
    }
}

fn banking_channel(
    tally: &mut Tally,
    text: &BenefitText,
    preferences: &PreferenceRecord,
    rubric: &ScoringRubric,
) -> Result<(), ScoreError> {
    match preferences.banking_channel {
        BankingChannel::Digital if text.bank_type.contains("private") => tally.award(
            Criterion::BankingChannel,
            rubric.banking_channel,
            "Private sector bank with good digital features.",
        ),
        BankingChannel::Branch if text.bank_type.contains("public") => tally.award(
            Criterion::BankingChannel,
            rubric.banking_channel,
            "Public sector bank with extensive branch network.",
        ),
        _ => Ok(()),
    }
}
