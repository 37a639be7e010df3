use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How risky a product is allowed to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Broad product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Deposit,
    Bonds,
    Fund,
}

impl ProductKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Deposit => "bank deposit",
            ProductKind::Bonds => "bonds",
            ProductKind::Fund => "fund",
        }
    }
}

/// A single catalog entry. The catalog is read-only for the process
/// lifetime; recommendations only ever borrow from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProduct {
    pub id: String,
    pub name: String,
    pub kind: ProductKind,
    pub risk: RiskTier,
    /// Annual interest rate, percent.
    pub interest_rate: f64,
    pub min_amount: f64,
    #[serde(default)]
    pub max_amount: Option<f64>,
    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub replenishable: bool,
    #[serde(default)]
    pub withdrawable: bool,
    pub issuer: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a catalog from a JSON file (an array of products).
pub fn load_from_file(path: &Path) -> Result<Vec<FinancialProduct>, CatalogError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Built-in demo catalog, used when no catalog file is configured.
pub fn default_catalog() -> Vec<FinancialProduct> {
    vec![
        FinancialProduct {
            id: "1".to_string(),
            name: "Reliable Savings Deposit".to_string(),
            kind: ProductKind::Deposit,
            risk: RiskTier::Low,
            interest_rate: 5.5,
            min_amount: 10_000.0,
            max_amount: None,
            duration_days: Some(365),
            replenishable: true,
            withdrawable: false,
            issuer: "Sberbank".to_string(),
        },
        FinancialProduct {
            id: "2".to_string(),
            name: "Government Bonds".to_string(),
            kind: ProductKind::Bonds,
            risk: RiskTier::Low,
            interest_rate: 7.2,
            min_amount: 1_000.0,
            max_amount: None,
            duration_days: Some(730),
            replenishable: false,
            withdrawable: false,
            issuer: "Ministry of Finance".to_string(),
        },
        FinancialProduct {
            id: "3".to_string(),
            name: "Gold ETF".to_string(),
            kind: ProductKind::Fund,
            risk: RiskTier::Medium,
            interest_rate: 9.1,
            min_amount: 5_000.0,
            max_amount: None,
            duration_days: None,
            replenishable: false,
            withdrawable: true,
            issuer: "Tinkoff".to_string(),
        },
    ]
}
