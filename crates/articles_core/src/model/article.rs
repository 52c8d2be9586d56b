//! Article domain model.
//!
//! # Responsibility
//! - Define the named record shape for inventory articles.
//! - Validate caller input before it reaches persistence.
//!
//! # Invariants
//! - `id` is assigned by the store, strictly increasing and never reused.
//! - `designation` is never empty for a stored record.
//! - `purchase_price` and `install_time` are finite and non-negative.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned article identifier (SQLite rowid).
pub type ArticleId = i64;

/// Inventory article as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Immutable identifier, also the display/sort key.
    pub id: ArticleId,
    /// Human-readable name of the article.
    pub designation: String,
    /// Unit purchase price, tax excluded.
    pub purchase_price: f64,
    /// Installation labor time in team-hours.
    pub install_time: f64,
}

impl Article {
    /// Returns the `"{id} - {designation}"` label used by selection lists.
    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.designation)
    }

    /// Returns the mutable fields of this article as a draft.
    ///
    /// Used by edit flows that start from the stored values and override
    /// only what the operator changed.
    pub fn to_draft(&self) -> ArticleDraft {
        ArticleDraft {
            designation: self.designation.clone(),
            purchase_price: self.purchase_price,
            install_time: self.install_time,
        }
    }

    /// Validates a record read back from storage.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        validate_fields(&self.designation, self.purchase_price, self.install_time)
    }
}

/// Mutable article fields, used by both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub designation: String,
    #[serde(default)]
    pub purchase_price: f64,
    #[serde(default)]
    pub install_time: f64,
}

impl ArticleDraft {
    /// Creates a draft with price and time defaulted to `0.0`.
    pub fn new(designation: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            purchase_price: 0.0,
            install_time: 0.0,
        }
    }

    pub fn with_purchase_price(mut self, purchase_price: f64) -> Self {
        self.purchase_price = purchase_price;
        self
    }

    pub fn with_install_time(mut self, install_time: f64) -> Self {
        self.install_time = install_time;
        self
    }

    /// Checks the draft against article invariants.
    ///
    /// # Errors
    /// - `EmptyDesignation` when the designation is empty or whitespace only.
    /// - `NonFiniteValue` when price or time is NaN or infinite.
    /// - `NegativeValue` when price or time is below zero.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        validate_fields(&self.designation, self.purchase_price, self.install_time)
    }
}

/// Numeric article field named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleField {
    PurchasePrice,
    InstallTime,
}

impl ArticleField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PurchasePrice => "purchase_price",
            Self::InstallTime => "install_time",
        }
    }
}

/// Validation failure for article input.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleValidationError {
    EmptyDesignation,
    NegativeValue { field: ArticleField, value: f64 },
    NonFiniteValue { field: ArticleField },
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDesignation => write!(f, "designation must not be empty"),
            Self::NegativeValue { field, value } => {
                write!(f, "{} must be >= 0, got {value}", field.as_str())
            }
            Self::NonFiniteValue { field } => {
                write!(f, "{} must be a finite number", field.as_str())
            }
        }
    }
}

impl Error for ArticleValidationError {}

fn validate_fields(
    designation: &str,
    purchase_price: f64,
    install_time: f64,
) -> Result<(), ArticleValidationError> {
    if designation.trim().is_empty() {
        return Err(ArticleValidationError::EmptyDesignation);
    }
    validate_amount(ArticleField::PurchasePrice, purchase_price)?;
    validate_amount(ArticleField::InstallTime, install_time)?;
    Ok(())
}

fn validate_amount(field: ArticleField, value: f64) -> Result<(), ArticleValidationError> {
    if !value.is_finite() {
        return Err(ArticleValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ArticleValidationError::NegativeValue { field, value });
    }
    Ok(())
}
