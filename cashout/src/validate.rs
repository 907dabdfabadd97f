use thiserror::Error;

use crate::method::PayoutMethod;
use crate::request::CashoutRequest;

/// A rejected cashout attempt. Every variant is a user-correctable input
/// problem; the Display string is shown verbatim in the dialog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CashoutError {
    #[error("Please select a payment method")]
    NoMethodSelected,

    #[error("Please enter a valid number")]
    InvalidAmount,

    #[error("Minimum cashout amount for {method} is {min} NLOV")]
    BelowMinimum { method: String, min: f64 },

    #[error("Maximum cashout amount for {method} is {max} NLOV")]
    AboveMaximum { method: String, max: f64 },

    #[error("Insufficient balance")]
    InsufficientBalance,
}

/// Validate a raw cashout form: selected method, amount as typed, available
/// balance. Rules run in a fixed order and the first failure wins.
///
/// Returns the ready-to-process [`CashoutRequest`] on success.
pub fn validate(
    method: Option<&PayoutMethod>,
    amount_input: &str,
    balance: f64,
) -> Result<CashoutRequest, CashoutError> {
    let method = method.ok_or(CashoutError::NoMethodSelected)?;
    let amount: f64 = amount_input
        .trim()
        .parse()
        .map_err(|_| CashoutError::InvalidAmount)?;
    validate_amount(method, amount, balance)?;
    Ok(CashoutRequest::new(method.clone(), amount))
}

/// Check an already-parsed amount against method bounds and balance.
///
/// Shared by the dialog and by the service task, which re-checks every
/// submission before processing it.
pub fn validate_amount(
    method: &PayoutMethod,
    amount: f64,
    balance: f64,
) -> Result<(), CashoutError> {
    if !amount.is_finite() {
        return Err(CashoutError::InvalidAmount);
    }
    if amount < method.min_amount {
        return Err(CashoutError::BelowMinimum {
            method: method.name.clone(),
            min: method.min_amount,
        });
    }
    if amount > method.max_amount {
        return Err(CashoutError::AboveMaximum {
            method: method.name.clone(),
            max: method.max_amount,
        });
    }
    if amount > balance {
        return Err(CashoutError::InsufficientBalance);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::{PayoutCatalog, PayoutMethodId};

    fn upi() -> PayoutMethod {
        PayoutCatalog::default()
            .get(PayoutMethodId::Upi)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_no_method_selected_wins_over_everything() {
        // Short-circuit: even with garbage input, the missing method is
        // reported first.
        let err = validate(None, "abc", 1000.0).unwrap_err();
        assert_eq!(err, CashoutError::NoMethodSelected);
    }

    #[test]
    fn test_non_numeric_amount() {
        let method = upi();
        let err = validate(Some(&method), "abc", 1000.0).unwrap_err();
        assert_eq!(err, CashoutError::InvalidAmount);
        assert_eq!(err.to_string(), "Please enter a valid number");
    }

    #[test]
    fn test_non_finite_amounts_rejected() {
        let method = upi();
        // "1e999" parses as +inf, "NaN" parses as NaN — both invalid
        assert_eq!(
            validate(Some(&method), "1e999", 1e300).unwrap_err(),
            CashoutError::InvalidAmount
        );
        assert_eq!(
            validate(Some(&method), "NaN", 1000.0).unwrap_err(),
            CashoutError::InvalidAmount
        );
    }

    #[test]
    fn test_below_minimum_names_method_and_bound() {
        let method = upi();
        let err = validate(Some(&method), "50", 1000.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Minimum cashout amount for UPI Transfer is 100 NLOV"
        );
    }

    #[test]
    fn test_above_maximum_names_method_and_bound() {
        let method = upi();
        let err = validate(Some(&method), "20000", 50_000.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Maximum cashout amount for UPI Transfer is 10000 NLOV"
        );
    }

    #[test]
    fn test_insufficient_balance_even_within_bounds() {
        let method = upi();
        let err = validate(Some(&method), "500", 200.0).unwrap_err();
        assert_eq!(err, CashoutError::InsufficientBalance);
        assert_eq!(err.to_string(), "Insufficient balance");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let method = upi();
        assert!(validate(Some(&method), "100", 1000.0).is_ok());
        assert!(validate(Some(&method), "10000", 10_000.0).is_ok());
        // Spending the entire balance is allowed
        assert!(validate(Some(&method), "1000", 1000.0).is_ok());
    }

    #[test]
    fn test_negative_amount_hits_minimum_rule() {
        let method = upi();
        assert!(matches!(
            validate(Some(&method), "-5", 1000.0).unwrap_err(),
            CashoutError::BelowMinimum { .. }
        ));
    }

    #[test]
    fn test_happy_path_builds_request() {
        let method = upi();
        let req = validate(Some(&method), " 500 ", 1000.0).unwrap();
        assert_eq!(req.amount, 500.0);
        assert_eq!(req.method.id, PayoutMethodId::Upi);
        assert_eq!(req.fee(), 0.0);
        assert_eq!(req.net(), 500.0);
    }
}
