//! Questionnaire answers and their validation.
//!
//! Every enum parses case-insensitively and rejects anything outside its option list. Numbers
//! must be finite and non-negative; text is never coerced into a number.

mod form;

pub use form::{FieldError, PreferenceForm, PreferenceFormError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Single-field validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    #[error("'{value}' is not a valid {field}; expected one of: {}", expected.join(", "))]
    UnknownOption {
        field: &'static str,
        value: String,
        expected: &'static [&'static str],
    },
    #[error("'{value}' is not a valid {field}; enter a non-negative number")]
    InvalidNumber { field: &'static str, value: String },
}

impl PreferenceError {
    /// Question the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::UnknownOption { field, .. } | Self::InvalidNumber { field, .. } => field,
        }
    }
}

/// Declares a questionnaire enum together with its accepted spellings.
macro_rules! preference_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, [$($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const FIELD: &'static str = $field;
            pub const OPTIONS: &'static [&'static str] = &[$($label),+];

            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = PreferenceError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($label $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(PreferenceError::UnknownOption {
                        field: Self::FIELD,
                        value: value.trim().to_string(),
                        expected: Self::OPTIONS,
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

preference_enum!(
    /// Where the user spends the most.
    SpendingCategory, "spending category", [
        Groceries => "groceries" | "grocery",
        Shopping => "shopping",
        Travel => "travel",
        Dining => "dining",
        Fuel => "fuel",
    ]
);

preference_enum!(
    /// Whether bills are paid in full on time or carried over.
    RepaymentBehavior, "repayment behavior", [
        OnTime => "on-time" | "ontime" | "on time",
        Delay => "delay",
    ]
);

preference_enum!(
    /// Preferred form of reward.
    RewardType, "reward type", [
        Cashback => "cashback" | "cash back",
        Travel => "travel",
        Shopping => "shopping",
    ]
);

preference_enum!(
    /// Digital-first issuer or one with branch access.
    BankingChannel, "banking preference", [
        Digital => "digital",
        Branch => "branch",
    ]
);

/// One user's validated answers. Built fresh for each request and never mutated while scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub spending_category: SpendingCategory,
    pub repayment: RepaymentBehavior,
    /// Highest acceptable annual fee.
    pub fee_comfort: f64,
    pub reward_type: RewardType,
    /// Lowest acceptable credit limit.
    pub min_credit_limit: f64,
    pub international_usage: bool,
    pub wants_emi: bool,
    pub banking_channel: BankingChannel,
}

impl PreferenceRecord {
    /// Re-checks the numeric invariants for records built in code rather than through
    /// [`PreferenceForm`].
    pub fn validate(&self) -> Result<(), PreferenceError> {
        check_amount("fee comfort", self.fee_comfort)?;
        check_amount("minimum credit limit", self.min_credit_limit)?;
        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<f64, PreferenceError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PreferenceError::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }
}

/// Parse a non-negative amount such as `2000` or `1500.50`.
pub fn parse_amount_answer(field: &'static str, raw: &str) -> Result<f64, PreferenceError> {
    let trimmed = raw.trim();
    let invalid = || PreferenceError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    };
    // Reject "inf", "NaN" and exponents that f64 parsing would otherwise accept.
    if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
        return Err(invalid());
    }
    let value = trimmed.parse::<f64>().map_err(|_| invalid())?;
    check_amount(field, value).map_err(|_| invalid())
}

pub const YES_NO_OPTIONS: &[&str] = &["yes", "no"];

/// Parse a yes/no answer.
pub fn parse_yes_no(field: &'static str, raw: &str) -> Result<bool, PreferenceError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err(PreferenceError::UnknownOption {
            field,
            value: raw.trim().to_string(),
            expected: YES_NO_OPTIONS,
        }),
    }
}
