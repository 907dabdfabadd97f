//! Cashout dialog — the three-step wizard (select → confirm → success).
//!
//! Rendered as a floating window over the active screen. All state lives in
//! [`CashoutState`]; this module only draws and forwards user actions.
//!
//! [`CashoutState`]: crate::state::CashoutState

use eframe::egui;
use tokio::sync::mpsc;

use crate::events::UiEvent;
use crate::state::{AppState, CashoutStep};
use crate::ui_components::{detail_row, labeled_input};

/// Render the cashout dialog. Call only while `state.cashout.open`.
pub fn show(ctx: &egui::Context, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    let mut window_open = true;
    let mut close_requested = false;

    egui::Window::new("Cashout NLOV Tokens")
        .open(&mut window_open)
        .collapsible(false)
        .resizable(false)
        .default_width(520.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            let subtitle = match state.cashout.step {
                CashoutStep::Select => "Choose your preferred cashout method",
                CashoutStep::Confirm => "Review your transaction details",
                CashoutStep::Success => "Transaction Complete",
            };
            ui.label(egui::RichText::new(subtitle).color(egui::Color32::GRAY));
            ui.add_space(8.0);

            match state.cashout.step {
                CashoutStep::Select => show_select(ui, state),
                CashoutStep::Confirm => show_confirm(ui, state),
                CashoutStep::Success => show_success(ui, state),
            }

            ui.add_space(8.0);
            ui.separator();

            match state.cashout.step {
                CashoutStep::Select => {
                    let can_continue = !state.cashout.amount_input.is_empty()
                        && state.cashout.selected.is_some()
                        && !state.cashout.processing;
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            close_requested = true;
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui
                                    .add_enabled(can_continue, egui::Button::new("Continue ➡"))
                                    .clicked()
                                {
                                    state.cashout_continue();
                                }
                            },
                        );
                    });
                }

                CashoutStep::Confirm => {
                    ui.horizontal(|ui| {
                        if ui
                            .add_enabled(!state.cashout.processing, egui::Button::new("Back"))
                            .clicked()
                        {
                            state.cashout.step = CashoutStep::Select;
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if state.cashout.processing {
                                    ui.spinner();
                                    ui.label("Processing");
                                } else if ui.button("Confirm Cashout ➡").clicked() {
                                    if let Some(request) = state.cashout_confirm() {
                                        let _ = ui_tx.send(UiEvent::SubmitCashout {
                                            method_id: request.method.id,
                                            amount: request.amount,
                                        });
                                    }
                                }
                            },
                        );
                    });
                }

                CashoutStep::Success => {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Done").clicked() {
                            close_requested = true;
                        }
                    });
                }
            }
        });

    if close_requested || !window_open {
        if state.close_cashout() {
            // Dismissed mid-processing — drop the pending timer service-side
            let _ = ui_tx.send(UiEvent::CancelCashout);
        }
    }
}

/// Step 1: pick a payout method and enter an amount.
fn show_select(ui: &mut egui::Ui, state: &mut AppState) {
    // Available balance card
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Available Balance")
                        .size(12.0)
                        .color(egui::Color32::GRAY),
                );
                ui.label(
                    egui::RichText::new(format!("{} NLOV", state.balance))
                        .size(24.0)
                        .strong(),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new("👛").size(24.0));
            });
        });
    });

    ui.add_space(8.0);

    // Method cards
    let methods = state.catalog.methods.clone();
    for method in &methods {
        let is_selected = state.cashout.selected == Some(method.id);
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            if ui
                .radio(is_selected, egui::RichText::new(&method.name).strong())
                .clicked()
            {
                state.cashout.selected = Some(method.id);
            }
            ui.label(
                egui::RichText::new(&method.description)
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
            ui.label(
                egui::RichText::new(format!(
                    "Min: {} NLOV · Max: {} NLOV · Fee: {}% · {}",
                    method.min_amount,
                    method.max_amount,
                    method.processing_fee,
                    method.estimated_time
                ))
                .size(11.0)
                .color(egui::Color32::GRAY),
            );
        });
    }

    if state.cashout.selected.is_none() {
        return;
    }

    ui.add_space(8.0);

    // Amount entry
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui
            .add_enabled(!state.cashout.processing, egui::Button::new("Max").small())
            .clicked()
        {
            state.cashout_use_max();
        }
    });
    let response = labeled_input(
        ui,
        "Cashout Amount",
        &mut state.cashout.amount_input,
        "Enter amount",
        !state.cashout.processing,
        state.cashout.error.as_deref(),
    );
    if response.changed() {
        // Optimistic: clear on edit, re-validate on the next transition
        state.cashout.error = None;
    }

    // Live breakdown, derived fresh from the current inputs
    if state.cashout.error.is_none() && !state.cashout.amount_input.is_empty() {
        if let Some(request) = state.current_request() {
            ui.add_space(8.0);
            ui.group(|ui| {
                ui.set_min_width(ui.available_width());
                detail_row(ui, "Amount:", format!("{} NLOV", request.amount));
                detail_row(
                    ui,
                    &format!("Processing Fee ({}%):", request.method.processing_fee),
                    format!("{} NLOV", request.fee()),
                );
                detail_row(
                    ui,
                    "You'll Receive:",
                    egui::RichText::new(format!("{} NLOV", request.net())).strong(),
                );
            });
        }
    }
}

/// Step 2: review the transaction details.
fn show_confirm(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("✔").size(36.0).color(egui::Color32::LIGHT_BLUE));
        ui.label(egui::RichText::new("Confirm Your Cashout").size(16.0).strong());
        ui.label(
            egui::RichText::new("Please review the transaction details")
                .color(egui::Color32::GRAY),
        );
    });

    ui.add_space(8.0);

    if let Some(request) = state.current_request() {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            detail_row(ui, "Payment Method", request.method.name.clone());
            detail_row(ui, "Amount", format!("{} NLOV", request.amount));
            detail_row(ui, "Processing Fee", format!("{} NLOV", request.fee()));
            detail_row(
                ui,
                "You'll Receive",
                egui::RichText::new(format!("{} NLOV", request.net())).strong(),
            );
            detail_row(ui, "Estimated Time", request.method.estimated_time.clone());
        });
    }
}

/// Step 3: the simulated receipt.
fn show_success(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("✅").size(40.0).color(egui::Color32::GREEN));
        ui.label(egui::RichText::new("Cashout Successful!").size(16.0).strong());
        ui.label(
            egui::RichText::new("Your transaction has been processed")
                .color(egui::Color32::GRAY),
        );
    });

    ui.add_space(8.0);

    if let Some(receipt) = &state.cashout.receipt {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            detail_row(
                ui,
                "Transaction ID",
                egui::RichText::new(&receipt.transaction_id).monospace(),
            );
            detail_row(
                ui,
                "Amount",
                format!("{} NLOV", receipt.request.net()),
            );
            detail_row(ui, "Payment Method", receipt.request.method.name.clone());
            detail_row(
                ui,
                "Estimated Arrival",
                receipt.request.method.estimated_time.clone(),
            );
        });
    }
}
