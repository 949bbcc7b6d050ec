use crate::preferences::{RewardType, SpendingCategory};

/// Synonyms searched in benefit text for each spending category, in reporting priority.
pub(crate) fn category_terms(category: SpendingCategory) -> &'static [&'static str] {
    match category {
        SpendingCategory::Fuel => &["fuel", "petrol", "diesel", "gas station", "surcharge waiver"],
        SpendingCategory::Shopping => &["shopping", "retail", "merchant", "store"],
        SpendingCategory::Travel => &["travel", "air", "flight", "hotel", "holiday"],
        SpendingCategory::Dining => &["dining", "restaurant", "food", "culinary"],
        SpendingCategory::Groceries => &["grocery", "groceries", "supermarket", "mart"],
    }
}

/// Terms that show a card pays out in the user's preferred reward form.
pub(crate) fn reward_terms(reward: RewardType) -> &'static [&'static str] {
    match reward {
        RewardType::Cashback => &["cashback", "cash back"],
        RewardType::Travel => &["travel", "air", "flight", "miles", "lounge", "hotel"],
        RewardType::Shopping => &["shopping", "retail", "online", "merchant", "store"],
    }
}

pub(crate) const INTERNATIONAL_KEYWORD: &str = "international";
pub(crate) const INTERNATIONAL_TERMS: &[&str] = &[INTERNATIONAL_KEYWORD, "forex", "foreign"];
pub(crate) const ZERO_PERCENT_MARKER: &str = "0%";

/// Lowercased copy of an optional cell, empty when absent.
pub(crate) fn lowered(text: Option<&str>) -> String {
    text.map(str::to_lowercase).unwrap_or_default()
}

/// First term of `terms` found in an already lowercased haystack.
pub(crate) fn first_match(haystack: &str, terms: &'static [&'static str]) -> Option<&'static str> {
    terms.iter().copied().find(|term| haystack.contains(term))
}
