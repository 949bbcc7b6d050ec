use super::normalizer::{normalize_header, normalize_text};
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

/// Raw text columns of one catalog row, exactly as the dataset provides them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CardFields {
    #[serde(rename = "Bank Name", default)]
    pub bank_name: Option<String>,
    #[serde(
        rename = "Card Variant",
        alias = "Card Name",
        alias = "BankName-CardVariant",
        default
    )]
    pub card_variant: Option<String>,
    #[serde(rename = "Annual Fee Range", default)]
    pub annual_fee: Option<String>,
    #[serde(rename = "Credit Limit Range", default)]
    pub credit_limit: Option<String>,
    #[serde(rename = "Cash Back", alias = "Cashback", default)]
    pub cashback: Option<String>,
    #[serde(rename = "Rewards", default)]
    pub rewards: Option<String>,
    #[serde(rename = "Loyalty Points/Rewards", alias = "Loyalty Program", default)]
    pub loyalty: Option<String>,
    #[serde(rename = "Introductory Interest Rates", default)]
    pub intro_rate: Option<String>,
    #[serde(rename = "Bank Type", default)]
    pub bank_type: Option<String>,
}

impl CardFields {
    fn normalized(self) -> Self {
        Self {
            bank_name: normalize_text(self.bank_name),
            card_variant: normalize_text(self.card_variant),
            annual_fee: normalize_text(self.annual_fee),
            credit_limit: normalize_text(self.credit_limit),
            cashback: normalize_text(self.cashback),
            rewards: normalize_text(self.rewards),
            loyalty: normalize_text(self.loyalty),
            intro_rate: normalize_text(self.intro_rate),
            bank_type: normalize_text(self.bank_type),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ParsedRows {
    pub(crate) rows: Vec<CardFields>,
    pub(crate) skipped: usize,
}

/// Decode every row that can be decoded. Only an unreadable header fails the whole parse.
///
/// Rows shorter than the header are padded with empty cells, so their missing columns are
/// absent rather than fatal. Cells beyond the header are ignored.
pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<ParsedRows, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    csv_reader.set_headers(headers.clone());

    let mut parsed = ParsedRows::default();
    for (index, record) in csv_reader.records().enumerate() {
        // Header is line 1, so data rows start at 2.
        let line = index + 2;
        let fields = record.and_then(|record| {
            padded(record, headers.len()).deserialize::<CardFields>(Some(&headers))
        });
        match fields {
            Ok(fields) => parsed.rows.push(fields.normalized()),
            Err(err) => {
                warn!(line, error = %err, "skipping malformed catalog row");
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

fn padded(mut record: csv::StringRecord, width: usize) -> csv::StringRecord {
    while record.len() < width {
        record.push_field("");
    }
    record
}
