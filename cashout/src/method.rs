use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Payout catalog is empty")]
    Empty,

    #[error("Payout method has an empty display name")]
    EmptyName,

    #[error("Invalid bounds for {method}: min {min} exceeds max {max}")]
    InvalidBounds { method: String, min: f64, max: f64 },

    #[error("Invalid fee for {method}: {fee}% (must be a percentage >= 0)")]
    InvalidFee { method: String, fee: f64 },

    #[error("Duplicate payout method: {0:?}")]
    Duplicate(PayoutMethodId),
}

/// Fixed set of settlement channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMethodId {
    Upi,
    Card,
    NetBanking,
    Crypto,
}

/// A catalog entry: one way to settle a cashout.
///
/// Entries are configuration data — loaded once, immutable for the session.
/// Bounds and fees can therefore change without a rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutMethod {
    pub id: PayoutMethodId,
    pub name: String,
    pub description: String,
    /// Smallest amount this channel accepts, in NLOV.
    pub min_amount: f64,
    /// Largest amount this channel accepts, in NLOV.
    pub max_amount: f64,
    /// Processing fee as a percentage of the requested amount (2.0 = 2%).
    pub processing_fee: f64,
    /// Free-text settlement estimate shown to the user.
    pub estimated_time: String,
}

/// Ordered list of payout methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutCatalog {
    pub methods: Vec<PayoutMethod>,
}

impl Default for PayoutCatalog {
    fn default() -> Self {
        Self {
            methods: vec![
                PayoutMethod {
                    id: PayoutMethodId::Upi,
                    name: "UPI Transfer".to_string(),
                    description: "Instant transfer to your UPI ID".to_string(),
                    min_amount: 100.0,
                    max_amount: 10_000.0,
                    processing_fee: 0.0,
                    estimated_time: "2-5 minutes".to_string(),
                },
                PayoutMethod {
                    id: PayoutMethodId::Card,
                    name: "Card Transfer".to_string(),
                    description: "Transfer to your debit/credit card".to_string(),
                    min_amount: 500.0,
                    max_amount: 50_000.0,
                    processing_fee: 2.0,
                    estimated_time: "30-60 minutes".to_string(),
                },
                PayoutMethod {
                    id: PayoutMethodId::NetBanking,
                    name: "Bank Transfer".to_string(),
                    description: "Direct transfer to your bank account".to_string(),
                    min_amount: 1_000.0,
                    max_amount: 100_000.0,
                    processing_fee: 1.0,
                    estimated_time: "1-2 business days".to_string(),
                },
                PayoutMethod {
                    id: PayoutMethodId::Crypto,
                    name: "Crypto Transfer".to_string(),
                    description: "Convert to ETH, SOL, or BTC".to_string(),
                    min_amount: 50.0,
                    max_amount: 1_000_000.0,
                    processing_fee: 0.5,
                    estimated_time: "10-15 minutes".to_string(),
                },
            ],
        }
    }
}

impl PayoutCatalog {
    /// Look up a method by identifier.
    pub fn get(&self, id: PayoutMethodId) -> Option<&PayoutMethod> {
        self.methods.iter().find(|m| m.id == id)
    }

    /// Check the catalog is usable: non-empty, named entries, sane bounds
    /// and fees, no duplicate identifiers.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.methods.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = Vec::new();
        for m in &self.methods {
            if m.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !(m.min_amount <= m.max_amount) || m.min_amount < 0.0 {
                return Err(CatalogError::InvalidBounds {
                    method: m.name.clone(),
                    min: m.min_amount,
                    max: m.max_amount,
                });
            }
            if !(m.processing_fee >= 0.0) || !m.processing_fee.is_finite() {
                return Err(CatalogError::InvalidFee {
                    method: m.name.clone(),
                    fee: m.processing_fee,
                });
            }
            if seen.contains(&m.id) {
                return Err(CatalogError::Duplicate(m.id));
            }
            seen.push(m.id);
        }
        Ok(())
    }
}
