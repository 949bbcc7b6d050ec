//! In-memory card catalog loaded once from the static CSV dataset.

mod normalizer;
mod parser;
pub mod range;

pub use parser::CardFields;
pub use range::{parse_amount, parse_range, AmountRange};

use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Error raised while loading the catalog. Only header-level problems are fatal; individual
/// rows that cannot be decoded are skipped.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("card dataset not found at {}; set CARD_DATASET_PATH or pass --dataset", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read card dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid card dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// Ownership category of the issuing bank, read from the free-text bank type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BankSector {
    Private,
    Public,
    Other,
}

impl BankSector {
    pub fn from_bank_type(bank_type: Option<&str>) -> Self {
        let Some(text) = bank_type else {
            return Self::Other;
        };
        let lowered = text.to_lowercase();
        if lowered.contains("private") {
            Self::Private
        } else if lowered.contains("public") {
            Self::Public
        } else {
            Self::Other
        }
    }
}

/// One catalog row with its numeric fields derived at load time.
///
/// Derived amounts are always present and non-negative; unparseable source text yields zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardRecord {
    /// Zero-based order of the row in the dataset, used for stable tie-breaking.
    pub position: usize,
    pub bank_name: Option<String>,
    pub card_variant: Option<String>,
    pub annual_fee_text: Option<String>,
    pub credit_limit_text: Option<String>,
    pub cashback: Option<String>,
    pub rewards: Option<String>,
    pub loyalty: Option<String>,
    pub intro_rate: Option<String>,
    pub bank_type: Option<String>,
    pub annual_fee: f64,
    pub fee_range: AmountRange,
    pub credit_limit: f64,
    pub credit_limit_range: AmountRange,
}

impl CardRecord {
    pub fn from_fields(position: usize, fields: CardFields) -> Self {
        let fee_range = fields
            .annual_fee
            .as_deref()
            .map(parse_range)
            .unwrap_or(AmountRange::ZERO);
        let credit_limit_range = fields
            .credit_limit
            .as_deref()
            .map(parse_range)
            .unwrap_or(AmountRange::ZERO);

        Self {
            position,
            bank_name: fields.bank_name,
            card_variant: fields.card_variant,
            annual_fee_text: fields.annual_fee,
            credit_limit_text: fields.credit_limit,
            cashback: fields.cashback,
            rewards: fields.rewards,
            loyalty: fields.loyalty,
            intro_rate: fields.intro_rate,
            bank_type: fields.bank_type,
            annual_fee: fee_range.midpoint(),
            fee_range,
            credit_limit: credit_limit_range.midpoint(),
            credit_limit_range,
        }
    }

    /// A record with neither bank nor variant cannot be presented to a user.
    pub fn has_identity(&self) -> bool {
        self.bank_name.is_some() || self.card_variant.is_some()
    }

    /// Bank and variant joined for display, e.g. `HDFC Bank Millennia`.
    pub fn display_name(&self) -> String {
        match (self.bank_name.as_deref(), self.card_variant.as_deref()) {
            (Some(bank), Some(variant)) => format!("{bank} {variant}"),
            (Some(bank), None) => bank.to_string(),
            (None, Some(variant)) => variant.to_string(),
            (None, None) => format!("card #{}", self.position + 1),
        }
    }

    pub fn bank_sector(&self) -> BankSector {
        BankSector::from_bank_type(self.bank_type.as_deref())
    }
}

/// Read-only ordered sequence of cards. Share it as `Arc<CardCatalog>`; nothing mutates it
/// after load.
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    cards: Vec<CardRecord>,
    skipped_rows: usize,
}

impl CardCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => CatalogError::NotFound {
                path: path.to_path_buf(),
            },
            _ => CatalogError::Io(err),
        })?;
        let catalog = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            cards = catalog.len(),
            skipped = catalog.skipped_rows,
            "card catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let parsed = parser::parse_rows(reader)?;
        let cards = parsed
            .rows
            .into_iter()
            .enumerate()
            .map(|(position, fields)| CardRecord::from_fields(position, fields))
            .collect();

        Ok(Self {
            cards,
            skipped_rows: parsed.skipped,
        })
    }

    pub fn from_fields<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = CardFields>,
    {
        let cards = rows
            .into_iter()
            .enumerate()
            .map(|(position, fields)| CardRecord::from_fields(position, fields))
            .collect();
        Self {
            cards,
            skipped_rows: 0,
        }
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Rows dropped at load time because they could not be decoded.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}
