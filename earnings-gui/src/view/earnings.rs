//! Earnings overview screen — statistics display and the cashout entry point.

use egui::Ui;
use tokio::sync::mpsc;

use crate::events::UiEvent;
use crate::state::AppState;
use crate::ui_components::stat_tile;

/// Render the earnings screen.
pub fn show(ui: &mut Ui, state: &mut AppState, _ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    ui.horizontal(|ui| {
        ui.heading("Earnings Overview");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new("Active")
                    .monospace()
                    .color(egui::Color32::GREEN),
            );
        });
    });

    ui.separator();
    ui.add_space(10.0);

    // Available balance card
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new("Available Balance")
                    .size(14.0)
                    .color(egui::Color32::GRAY),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!("{} NLOV", state.balance))
                    .size(32.0)
                    .strong(),
            );
        });
    });

    ui.add_space(15.0);

    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            stat_tile(ui, "🪙 Total Earned", state.stats.total_earned, "NLOV");
            ui.add_space(30.0);
            stat_tile(ui, "📈 Daily Rate", state.stats.daily_rate, "NLOV/day");
            ui.add_space(30.0);
            stat_tile(ui, "⏱ Next Payout", state.stats.next_payout_hours, "hours");
        });

        ui.add_space(10.0);

        // Uptime toward the payout eligibility target
        ui.add(egui::ProgressBar::new((state.stats.uptime / 100.0) as f32));
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("Uptime: {}%", state.stats.uptime))
                    .size(11.0)
                    .color(egui::Color32::GRAY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new("Target: 95%")
                        .size(11.0)
                        .color(egui::Color32::GRAY),
                );
            });
        });
    });

    ui.add_space(15.0);

    if ui
        .add(
            egui::Button::new(egui::RichText::new("🪙 Cashout Now ↗").size(16.0))
                .min_size(egui::vec2(200.0, 36.0)),
        )
        .clicked()
    {
        state.open_cashout();
    }

    // Status messages
    if let Some(ref err) = state.error {
        ui.add_space(10.0);
        ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
    }
}
