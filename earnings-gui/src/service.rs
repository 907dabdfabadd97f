//! Background service task — single `select!` loop.
//!
//! The service owns the canonical cashout balance and the simulated
//! processing delay. It receives [`UiEvent`]s from the UI thread, re-checks
//! every submission against the catalog and balance, and sends
//! [`ServiceEvent`]s back. A pending cashout is just a deadline held in the
//! loop; dropping it is cancellation.

use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use cashout::{CashoutReceipt, CashoutRequest, PayoutCatalog};

use crate::config::Config;
use crate::events::{ServiceEvent, UiEvent};

/// A submitted cashout waiting out its simulated processing delay.
struct PendingCashout {
    request: CashoutRequest,
    deadline: Instant,
}

/// Run the service loop until the cancellation token fires.
///
/// This is the **only** `tokio::spawn`ed task in the application.
pub async fn run(
    token: CancellationToken,
    mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    svc_tx: mpsc::UnboundedSender<ServiceEvent>,
    config: Config,
) {
    let catalog: PayoutCatalog = config.catalog();
    let delay = std::time::Duration::from_millis(config.processing_delay_ms);
    let mut balance = config.starting_balance;
    let mut pending: Option<PendingCashout> = None;

    // Hand the UI its initial data
    let _ = svc_tx.send(ServiceEvent::StatsLoaded(config.stats.clone()));
    let _ = svc_tx.send(ServiceEvent::BalanceUpdated(balance));

    log::info!(
        "🚀 Service loop started ({} payout methods, {} NLOV available)",
        catalog.methods.len(),
        balance
    );

    loop {
        tokio::select! {
            _ = token.cancelled() => {
                log::info!("🛑 Service loop shutting down");
                break;
            }

            // The simulated processing delay elapses
            _ = async {
                match pending.as_ref() {
                    Some(p) => tokio::time::sleep_until(p.deadline).await,
                    None => std::future::pending().await,
                }
            }, if pending.is_some() => {
                if let Some(p) = pending.take() {
                    let receipt = CashoutReceipt::issue(p.request);
                    balance -= receipt.request.amount;
                    log::info!(
                        "💸 Cashout complete: txid={} amount={} net={} via {}",
                        receipt.transaction_id,
                        receipt.request.amount,
                        receipt.request.net(),
                        receipt.request.method.name
                    );
                    let _ = svc_tx.send(ServiceEvent::BalanceUpdated(balance));
                    let _ = svc_tx.send(ServiceEvent::CashoutCompleted(receipt));
                }
            }

            Some(event) = ui_rx.recv() => {
                match event {
                    UiEvent::SubmitCashout { method_id, amount } => {
                        if pending.is_some() {
                            let _ = svc_tx.send(ServiceEvent::Error(
                                "A cashout is already being processed".to_string(),
                            ));
                            continue;
                        }
                        // The dialog validated already; the service owns the
                        // catalog and balance, so every submission is
                        // re-checked here before processing.
                        match catalog.get(method_id) {
                            Some(method) => {
                                match cashout::validate_amount(method, amount, balance) {
                                    Ok(()) => {
                                        log::info!(
                                            "Processing cashout of {} NLOV via {}",
                                            amount,
                                            method.name
                                        );
                                        pending = Some(PendingCashout {
                                            request: CashoutRequest::new(method.clone(), amount),
                                            deadline: Instant::now() + delay,
                                        });
                                    }
                                    Err(e) => {
                                        log::warn!("Rejected cashout submission: {}", e);
                                        let _ = svc_tx.send(ServiceEvent::Error(e.to_string()));
                                    }
                                }
                            }
                            None => {
                                let _ = svc_tx.send(ServiceEvent::Error(
                                    "Please select a payment method".to_string(),
                                ));
                            }
                        }
                    }

                    UiEvent::CancelCashout => {
                        if let Some(p) = pending.take() {
                            log::info!(
                                "Pending cashout of {} NLOV cancelled",
                                p.request.amount
                            );
                        }
                    }

                    UiEvent::NavigatedTo(screen) => {
                        log::debug!("Navigated to {:?}", screen);
                    }
                }
            }
        }
    }

    log::info!("👋 Service loop exited");
}
