/// Points awarded per criterion, in tenths of a point so accumulation stays exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRubric {
    /// Spending-category match found in cashback, rewards and loyalty text respectively.
    pub category_tiers: [u16; 3],
    pub repayment_delay_intro_offer: u16,
    pub repayment_on_time_rewards: u16,
    pub fee_within_budget: u16,
    pub fee_near_budget: u16,
    /// Fee still counts as "near" up to this percentage of the user's comfort level.
    pub fee_tolerance_pct: u16,
    pub limit_meets_minimum: u16,
    pub limit_near_minimum: u16,
    /// Limit still counts as "near" down to this percentage of the requested minimum.
    pub limit_tolerance_pct: u16,
    pub international_cashback: u16,
    pub international_loyalty: u16,
    pub emi_conversion: u16,
    pub banking_channel: u16,
}

impl ScoringRubric {
    /// Hand-tuned weights with an 8.0 ceiling.
    pub const fn standard() -> Self {
        Self {
            category_tiers: [20, 15, 10],
            repayment_delay_intro_offer: 10,
            repayment_on_time_rewards: 5,
            fee_within_budget: 15,
            fee_near_budget: 5,
            fee_tolerance_pct: 120,
            limit_meets_minimum: 15,
            limit_near_minimum: 5,
            limit_tolerance_pct: 90,
            international_cashback: 10,
            international_loyalty: 5,
            emi_conversion: 5,
            banking_channel: 5,
        }
    }

    /// Highest total a single card can reach, in tenths.
    pub fn ceiling_tenths(&self) -> u32 {
        let tier_max = self.category_tiers.iter().copied().max().unwrap_or(0);
        [
            tier_max,
            self.repayment_delay_intro_offer
                .max(self.repayment_on_time_rewards),
            self.fee_within_budget.max(self.fee_near_budget),
            self.limit_meets_minimum.max(self.limit_near_minimum),
            self.international_cashback.max(self.international_loyalty),
            self.emi_conversion,
            self.banking_channel,
        ]
        .iter()
        .map(|points| u32::from(*points))
        .sum()
    }

    /// Highest total a single card can reach.
    pub fn ceiling(&self) -> f64 {
        f64::from(self.ceiling_tenths()) / 10.0
    }
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_ceiling_is_eight_points() {
        assert_eq!(ScoringRubric::standard().ceiling_tenths(), 80);
        assert_eq!(ScoringRubric::standard().ceiling(), 8.0);
    }

    #[test]
    fn ceiling_uses_best_tier_of_each_criterion() {
        let rubric = ScoringRubric {
            category_tiers: [5, 30, 10],
            repayment_on_time_rewards: 12,
            ..ScoringRubric::standard()
        };
        assert_eq!(rubric.ceiling_tenths(), 80 - 20 + 30 - 10 + 12);
    }
}
