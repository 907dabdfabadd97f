//! Event types for communication between UI and service task.
//!
//! These two enums are the *only* interface between the synchronous egui
//! render loop and the asynchronous service task. No shared state, no Arc,
//! no Mutex.

use cashout::{CashoutReceipt, PayoutMethodId};

use crate::config::EarningsStats;

// ============================================================================
// UI → Service
// ============================================================================

/// Commands sent from the UI thread to the background service task.
#[derive(Debug)]
pub enum UiEvent {
    /// Submit a validated cashout for (simulated) processing.
    SubmitCashout {
        method_id: PayoutMethodId,
        amount: f64,
    },

    /// The dialog was dismissed mid-processing — drop the pending cashout
    /// so no completion fires after dismissal.
    CancelCashout,

    /// The user navigated to a new screen.
    NavigatedTo(Screen),
}

/// Screens the console can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Earnings,
    Models,
    Compute,
}

impl Screen {
    /// Sidebar label for this screen.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Earnings => "Earnings",
            Screen::Models => "AI Models",
            Screen::Compute => "Compute",
        }
    }
}

// ============================================================================
// Service → UI
// ============================================================================

/// Events sent from the service task back to the UI thread.
#[derive(Debug)]
pub enum ServiceEvent {
    /// Earnings statistics for the overview screen.
    StatsLoaded(EarningsStats),

    /// The available cashout balance changed.
    BalanceUpdated(f64),

    /// A submitted cashout finished its simulated processing.
    CashoutCompleted(CashoutReceipt),

    /// Non-fatal error to display in the UI.
    Error(String),
}
