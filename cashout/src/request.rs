use chrono::{DateTime, Utc};
use rand::Rng;

use crate::method::PayoutMethod;

/// Length of a generated transaction identifier.
const TRANSACTION_ID_LEN: usize = 13;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One in-flight cashout: the chosen method and the requested amount.
///
/// Fee and net are methods, not fields — always recomputed from
/// `(amount, method.processing_fee)` so the three can never diverge.
/// Exists only for the lifetime of one dialog session.
#[derive(Debug, Clone, PartialEq)]
pub struct CashoutRequest {
    pub method: PayoutMethod,
    pub amount: f64,
}

impl CashoutRequest {
    pub fn new(method: PayoutMethod, amount: f64) -> Self {
        Self { method, amount }
    }

    /// Processing fee in NLOV.
    pub fn fee(&self) -> f64 {
        self.amount * self.method.processing_fee / 100.0
    }

    /// What the user actually receives: amount minus the processing fee.
    pub fn net(&self) -> f64 {
        self.amount - self.fee()
    }
}

/// The outcome of a completed cashout. Never persisted; discarded when the
/// dialog closes.
#[derive(Debug, Clone, PartialEq)]
pub struct CashoutReceipt {
    /// Opaque random token, for display only — this is a simulated receipt,
    /// not a settlement record.
    pub transaction_id: String,
    pub request: CashoutRequest,
    pub completed_at: DateTime<Utc>,
}

impl CashoutReceipt {
    /// Stamp a receipt for a processed request.
    pub fn issue(request: CashoutRequest) -> Self {
        Self {
            transaction_id: generate_transaction_id(),
            request,
            completed_at: Utc::now(),
        }
    }
}

/// Generate an opaque base-36 transaction identifier.
///
/// Not cryptographically significant — display purposes only.
pub fn generate_transaction_id() -> String {
    let mut rng = rand::thread_rng();
    (0..TRANSACTION_ID_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::{PayoutCatalog, PayoutMethodId};

    fn method(id: PayoutMethodId) -> PayoutMethod {
        PayoutCatalog::default().get(id).unwrap().clone()
    }

    #[test]
    fn test_zero_fee_method_pays_out_in_full() {
        let req = CashoutRequest::new(method(PayoutMethodId::Upi), 500.0);
        assert_eq!(req.fee(), 0.0);
        assert_eq!(req.net(), 500.0);
    }

    #[test]
    fn test_card_fee_arithmetic() {
        // Card charges 2%: 500 NLOV -> 10 fee, 490 net
        let req = CashoutRequest::new(method(PayoutMethodId::Card), 500.0);
        assert_eq!(req.fee(), 10.0);
        assert_eq!(req.net(), 490.0);
    }

    #[test]
    fn test_fractional_fee_arithmetic() {
        // Crypto charges 0.5%
        let req = CashoutRequest::new(method(PayoutMethodId::Crypto), 200.0);
        assert_eq!(req.fee(), 1.0);
        assert_eq!(req.net(), 199.0);
    }

    #[test]
    fn test_transaction_id_shape() {
        let id = generate_transaction_id();
        assert_eq!(id.len(), 13);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_transaction_ids_are_unique_enough() {
        // Two draws colliding would mean a broken generator, not bad luck.
        assert_ne!(generate_transaction_id(), generate_transaction_id());
    }

    #[test]
    fn test_receipt_carries_request() {
        let req = CashoutRequest::new(method(PayoutMethodId::Upi), 500.0);
        let receipt = CashoutReceipt::issue(req.clone());
        assert!(!receipt.transaction_id.is_empty());
        assert_eq!(receipt.request, req);
        assert_eq!(receipt.request.net(), 500.0);
    }
}
