//! Application state — plain data, no async, no Arc.
//!
//! `AppState` holds everything the UI needs to render. The service task sends
//! `ServiceEvent`s which are applied via [`AppState::apply`]. The UI reads
//! fields directly — no locking, no channels.

use cashout::{CashoutReceipt, CashoutRequest, PayoutCatalog, PayoutMethod, PayoutMethodId};

use crate::config::EarningsStats;
use crate::events::{Screen, ServiceEvent};

/// Steps of the cashout wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CashoutStep {
    #[default]
    Select,
    Confirm,
    Success,
}

/// One cashout dialog session. Reset wholesale whenever the dialog opens so
/// nothing leaks between sessions.
#[derive(Debug, Default)]
pub struct CashoutState {
    pub open: bool,
    pub step: CashoutStep,
    pub selected: Option<PayoutMethodId>,
    pub amount_input: String,
    pub error: Option<String>,
    /// True while the service is running the simulated processing delay.
    /// Gates every dialog action.
    pub processing: bool,
    pub receipt: Option<CashoutReceipt>,
}

/// All application state needed for rendering.
#[derive(Debug)]
pub struct AppState {
    // -- Navigation --
    pub screen: Screen,

    // -- Earnings --
    pub stats: EarningsStats,
    /// Balance available for cashout, in NLOV. Owned by the service task;
    /// this is the display mirror updated via `BalanceUpdated`.
    pub balance: f64,

    // -- Cashout --
    pub catalog: PayoutCatalog,
    pub cashout: CashoutState,

    // -- Transient messages outside the dialog --
    pub error: Option<String>,
}

impl AppState {
    pub fn new(catalog: PayoutCatalog) -> Self {
        Self {
            screen: Screen::Earnings,
            stats: EarningsStats {
                total_earned: 0.0,
                daily_rate: 0.0,
                uptime: 0.0,
                next_payout_hours: 0.0,
            },
            balance: 0.0,
            catalog,
            cashout: CashoutState::default(),
            error: None,
        }
    }

    /// The catalog entry for the currently selected method, if any.
    pub fn selected_method(&self) -> Option<&PayoutMethod> {
        self.cashout.selected.and_then(|id| self.catalog.get(id))
    }

    /// The request described by the current form inputs, when they parse.
    /// Fee/net are derived from it fresh on every render.
    pub fn current_request(&self) -> Option<CashoutRequest> {
        let method = self.selected_method()?;
        let amount: f64 = self.cashout.amount_input.trim().parse().ok()?;
        if !amount.is_finite() {
            return None;
        }
        Some(CashoutRequest::new(method.clone(), amount))
    }

    /// Open the cashout dialog with a fresh session.
    pub fn open_cashout(&mut self) {
        self.cashout = CashoutState {
            open: true,
            ..CashoutState::default()
        };
    }

    /// Close the dialog, discarding the session. Returns true if a cashout
    /// was still processing — the caller must send [`UiEvent::CancelCashout`]
    /// so the service drops its pending timer.
    ///
    /// [`UiEvent::CancelCashout`]: crate::events::UiEvent::CancelCashout
    pub fn close_cashout(&mut self) -> bool {
        let was_processing = self.cashout.processing;
        self.cashout = CashoutState::default();
        was_processing
    }

    /// Copy the available balance verbatim into the amount field (not net of
    /// any fee) and clear any existing error.
    pub fn cashout_use_max(&mut self) {
        self.cashout.amount_input = format!("{}", self.balance);
        self.cashout.error = None;
    }

    /// Attempt the select → confirm transition. On validation failure the
    /// step stays at Select and the message is surfaced.
    pub fn cashout_continue(&mut self) {
        match cashout::validate(
            self.selected_method(),
            &self.cashout.amount_input,
            self.balance,
        ) {
            Ok(_) => {
                self.cashout.error = None;
                self.cashout.step = CashoutStep::Confirm;
            }
            Err(e) => {
                self.cashout.error = Some(e.to_string());
            }
        }
    }

    /// Attempt the confirm → processing transition. Validation runs again
    /// here; on failure the wizard drops back to Select with the message.
    /// On success, returns the request for the caller to submit.
    pub fn cashout_confirm(&mut self) -> Option<CashoutRequest> {
        match cashout::validate(
            self.selected_method(),
            &self.cashout.amount_input,
            self.balance,
        ) {
            Ok(request) => {
                self.cashout.error = None;
                self.cashout.processing = true;
                Some(request)
            }
            Err(e) => {
                self.cashout.error = Some(e.to_string());
                self.cashout.step = CashoutStep::Select;
                None
            }
        }
    }

    /// Apply a service event to update state. Pure state-machine transition.
    pub fn apply(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::StatsLoaded(stats) => {
                self.stats = stats;
            }

            ServiceEvent::BalanceUpdated(balance) => {
                self.balance = balance;
            }

            ServiceEvent::CashoutCompleted(receipt) => {
                // A completion for a dismissed dialog can race the cancel
                // event; the balance update already happened service-side,
                // so there is nothing left to show.
                if self.cashout.open && self.cashout.processing {
                    self.cashout.processing = false;
                    self.cashout.receipt = Some(receipt);
                    self.cashout.step = CashoutStep::Success;
                }
            }

            ServiceEvent::Error(msg) => {
                if self.cashout.open {
                    self.cashout.processing = false;
                    self.cashout.step = CashoutStep::Select;
                    self.cashout.error = Some(msg);
                } else {
                    self.error = Some(msg);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashout::CashoutError;

    fn state_with_balance(balance: f64) -> AppState {
        let mut state = AppState::new(PayoutCatalog::default());
        state.apply(ServiceEvent::BalanceUpdated(balance));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new(PayoutCatalog::default());
        assert_eq!(state.screen, Screen::Earnings);
        assert!(!state.cashout.open);
        assert_eq!(state.balance, 0.0);
    }

    #[test]
    fn test_open_resets_previous_session() {
        let mut state = state_with_balance(1000.0);
        state.open_cashout();
        state.cashout.selected = Some(PayoutMethodId::Upi);
        state.cashout.amount_input = "500".to_string();
        state.cashout_continue();
        assert_eq!(state.cashout.step, CashoutStep::Confirm);

        state.close_cashout();
        state.open_cashout();
        assert_eq!(state.cashout.step, CashoutStep::Select);
        assert!(state.cashout.selected.is_none());
        assert!(state.cashout.amount_input.is_empty());
        assert!(state.cashout.error.is_none());
    }

    #[test]
    fn test_use_max_copies_balance_and_clears_error() {
        let mut state = state_with_balance(1000.0);
        state.open_cashout();
        state.cashout.error = Some("Insufficient balance".to_string());

        state.cashout_use_max();
        assert_eq!(state.cashout.amount_input, "1000");
        assert!(state.cashout.error.is_none());

        // Fractional balances are copied verbatim too
        state.apply(ServiceEvent::BalanceUpdated(1250.5));
        state.cashout_use_max();
        assert_eq!(state.cashout.amount_input, "1250.5");
    }

    #[test]
    fn test_continue_blocked_without_method() {
        let mut state = state_with_balance(1000.0);
        state.open_cashout();
        state.cashout.amount_input = "500".to_string();

        state.cashout_continue();
        assert_eq!(state.cashout.step, CashoutStep::Select);
        assert_eq!(
            state.cashout.error.as_deref(),
            Some("Please select a payment method")
        );
    }

    #[test]
    fn test_continue_blocked_on_non_numeric_amount() {
        let mut state = state_with_balance(1000.0);
        state.open_cashout();
        state.cashout.selected = Some(PayoutMethodId::Upi);
        state.cashout.amount_input = "abc".to_string();

        state.cashout_continue();
        assert_eq!(state.cashout.step, CashoutStep::Select);
        assert_eq!(
            state.cashout.error.as_deref(),
            Some(CashoutError::InvalidAmount.to_string().as_str())
        );
    }

    #[test]
    fn test_full_upi_flow() {
        // balance=1000, UPI (min 100, max 10000, fee 0%), amount 500
        let mut state = state_with_balance(1000.0);
        state.open_cashout();
        state.cashout.selected = Some(PayoutMethodId::Upi);
        state.cashout.amount_input = "500".to_string();

        state.cashout_continue();
        assert_eq!(state.cashout.step, CashoutStep::Confirm);

        let request = state.current_request().unwrap();
        assert_eq!(request.amount, 500.0);
        assert_eq!(request.fee(), 0.0);
        assert_eq!(request.net(), 500.0);

        let submitted = state.cashout_confirm().unwrap();
        assert!(state.cashout.processing);
        assert_eq!(submitted.amount, 500.0);

        // Service completes: receipt arrives, then the balance deduction
        let receipt = CashoutReceipt::issue(submitted);
        state.apply(ServiceEvent::BalanceUpdated(500.0));
        state.apply(ServiceEvent::CashoutCompleted(receipt));

        assert_eq!(state.cashout.step, CashoutStep::Success);
        assert!(!state.cashout.processing);
        assert_eq!(state.balance, 500.0);
        let receipt = state.cashout.receipt.as_ref().unwrap();
        assert!(!receipt.transaction_id.is_empty());
        assert_eq!(receipt.request.net(), 500.0);
    }

    #[test]
    fn test_card_fee_shown_at_confirm() {
        // balance=1000, Card (fee 2%), amount 500 -> net 490
        let mut state = state_with_balance(1000.0);
        state.open_cashout();
        state.cashout.selected = Some(PayoutMethodId::Card);
        state.cashout.amount_input = "500".to_string();

        state.cashout_continue();
        assert_eq!(state.cashout.step, CashoutStep::Confirm);

        let request = state.current_request().unwrap();
        assert_eq!(request.fee(), 10.0);
        assert_eq!(request.net(), 490.0);
    }

    #[test]
    fn test_back_keeps_inputs() {
        let mut state = state_with_balance(1000.0);
        state.open_cashout();
        state.cashout.selected = Some(PayoutMethodId::Upi);
        state.cashout.amount_input = "500".to_string();
        state.cashout_continue();

        // "Back" is a plain step change in the view; inputs persist
        state.cashout.step = CashoutStep::Select;
        assert_eq!(state.cashout.amount_input, "500");
        assert_eq!(state.cashout.selected, Some(PayoutMethodId::Upi));
    }

    #[test]
    fn test_confirm_revalidates_against_current_balance() {
        let mut state = state_with_balance(1000.0);
        state.open_cashout();
        state.cashout.selected = Some(PayoutMethodId::Upi);
        state.cashout.amount_input = "800".to_string();
        state.cashout_continue();
        assert_eq!(state.cashout.step, CashoutStep::Confirm);

        // Balance dropped between steps; the confirm must catch it
        state.apply(ServiceEvent::BalanceUpdated(300.0));
        assert!(state.cashout_confirm().is_none());
        assert_eq!(state.cashout.step, CashoutStep::Select);
        assert_eq!(state.cashout.error.as_deref(), Some("Insufficient balance"));
        assert!(!state.cashout.processing);
    }

    #[test]
    fn test_close_while_processing_requests_cancel() {
        let mut state = state_with_balance(1000.0);
        state.open_cashout();
        state.cashout.selected = Some(PayoutMethodId::Upi);
        state.cashout.amount_input = "500".to_string();
        state.cashout_continue();
        state.cashout_confirm();
        assert!(state.cashout.processing);

        assert!(state.close_cashout());
        assert!(!state.cashout.open);

        // A straggling completion after dismissal must not reopen anything
        let receipt = CashoutReceipt::issue(
            cashout::validate(
                PayoutCatalog::default().get(PayoutMethodId::Upi),
                "500",
                1000.0,
            )
            .unwrap(),
        );
        state.apply(ServiceEvent::CashoutCompleted(receipt));
        assert!(!state.cashout.open);
        assert!(state.cashout.receipt.is_none());
    }

    #[test]
    fn test_error_outside_dialog_goes_to_app_error() {
        let mut state = state_with_balance(1000.0);
        state.apply(ServiceEvent::Error("service unavailable".to_string()));
        assert_eq!(state.error.as_deref(), Some("service unavailable"));
    }

    #[test]
    fn test_stats_loaded() {
        let mut state = AppState::new(PayoutCatalog::default());
        state.apply(ServiceEvent::StatsLoaded(EarningsStats::default()));
        assert_eq!(state.stats.total_earned, 1250.5);
        assert_eq!(state.stats.uptime, 97.5);
    }
}
