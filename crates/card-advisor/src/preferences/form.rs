use super::{
    parse_amount_answer, parse_yes_no, BankingChannel, PreferenceError, PreferenceRecord,
    RepaymentBehavior, RewardType, SpendingCategory,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw key-value questionnaire submission, as collected by a form or prompt.
///
/// Every answer is optional text so that missing and malformed answers can be reported together
/// instead of failing on the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceForm {
    #[serde(default)]
    pub spending_category: Option<String>,
    #[serde(default, alias = "repayment")]
    pub repayment_behavior: Option<String>,
    #[serde(default, deserialize_with = "text_or_scalar")]
    pub fee_comfort: Option<String>,
    #[serde(default)]
    pub reward_type: Option<String>,
    #[serde(default, deserialize_with = "text_or_scalar")]
    pub min_credit_limit: Option<String>,
    #[serde(default, alias = "international_usage", deserialize_with = "text_or_scalar")]
    pub intl: Option<String>,
    #[serde(default, alias = "wants_emi", deserialize_with = "text_or_scalar")]
    pub emi: Option<String>,
    #[serde(default, alias = "banking_channel")]
    pub digital_pref: Option<String>,
}

/// Problem with one form answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All problems found in a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceFormError {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for PreferenceFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = self
            .errors
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid preferences: {details}")
    }
}

impl std::error::Error for PreferenceFormError {}

impl PreferenceForm {
    /// Validate every answer, returning the typed record or every field error found.
    pub fn validate(&self) -> Result<PreferenceRecord, PreferenceFormError> {
        let mut errors = Vec::new();

        let spending_category = field(
            &mut errors,
            "spending_category",
            &self.spending_category,
            SpendingCategory::from_str,
        );
        let repayment = field(
            &mut errors,
            "repayment_behavior",
            &self.repayment_behavior,
            RepaymentBehavior::from_str,
        );
        let fee_comfort = field(&mut errors, "fee_comfort", &self.fee_comfort, |raw| {
            parse_amount_answer("fee comfort", raw)
        });
        let reward_type = field(
            &mut errors,
            "reward_type",
            &self.reward_type,
            RewardType::from_str,
        );
        let min_credit_limit = field(
            &mut errors,
            "min_credit_limit",
            &self.min_credit_limit,
            |raw| parse_amount_answer("minimum credit limit", raw),
        );
        let international_usage = field(&mut errors, "intl", &self.intl, |raw| {
            parse_yes_no("international usage", raw)
        });
        let wants_emi = field(&mut errors, "emi", &self.emi, |raw| {
            parse_yes_no("EMI preference", raw)
        });
        let banking_channel = field(
            &mut errors,
            "digital_pref",
            &self.digital_pref,
            BankingChannel::from_str,
        );

        match (
            spending_category,
            repayment,
            fee_comfort,
            reward_type,
            min_credit_limit,
            international_usage,
            wants_emi,
            banking_channel,
        ) {
            (
                Some(spending_category),
                Some(repayment),
                Some(fee_comfort),
                Some(reward_type),
                Some(min_credit_limit),
                Some(international_usage),
                Some(wants_emi),
                Some(banking_channel),
            ) if errors.is_empty() => Ok(PreferenceRecord {
                spending_category,
                repayment,
                fee_comfort,
                reward_type,
                min_credit_limit,
                international_usage,
                wants_emi,
                banking_channel,
            }),
            _ => Err(PreferenceFormError { errors }),
        }
    }
}

impl From<&PreferenceRecord> for PreferenceForm {
    fn from(record: &PreferenceRecord) -> Self {
        let yes_no = |flag: bool| if flag { "yes" } else { "no" }.to_string();
        Self {
            spending_category: Some(record.spending_category.label().to_string()),
            repayment_behavior: Some(record.repayment.label().to_string()),
            fee_comfort: Some(record.fee_comfort.to_string()),
            reward_type: Some(record.reward_type.label().to_string()),
            min_credit_limit: Some(record.min_credit_limit.to_string()),
            intl: Some(yes_no(record.international_usage)),
            emi: Some(yes_no(record.wants_emi)),
            digital_pref: Some(record.banking_channel.label().to_string()),
        }
    }
}

fn field<T, F>(
    errors: &mut Vec<FieldError>,
    name: &'static str,
    raw: &Option<String>,
    parse: F,
) -> Option<T>
where
    F: FnOnce(&str) -> Result<T, PreferenceError>,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push(FieldError {
                field: name,
                message: "this question must be answered".to_string(),
            });
            None
        }
        Some(value) => match parse(value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                errors.push(FieldError {
                    field: name,
                    message: err.to_string(),
                });
                None
            }
        },
    }
}

/// HTML forms send text while JSON clients often send numbers and booleans; accept both as text.
fn text_or_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(u64),
        Signed(i64),
        Float(f64),
        Flag(bool),
    }

    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(number) => number.to_string(),
        Scalar::Signed(number) => number.to_string(),
        Scalar::Float(number) => number.to_string(),
        Scalar::Flag(true) => "yes".to_string(),
        Scalar::Flag(false) => "no".to_string(),
    }))
}
