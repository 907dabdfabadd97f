//! Placeholder screen for product sections that are not built yet.

use egui::Ui;
use tokio::sync::mpsc;

use crate::events::{Screen, UiEvent};
use crate::state::AppState;

/// Render the coming-soon screen for the active section.
pub fn show(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    let section = state.screen.title();

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);

        ui.label(egui::RichText::new("🚧").size(64.0));
        ui.add_space(10.0);
        ui.heading(egui::RichText::new("Under construction!").size(26.0).strong());
        ui.add_space(8.0);

        ui.label(
            egui::RichText::new("🚀 Now in Beta - Empowering the Future of AI")
                .strong(),
        );
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(format!(
                "{} is on the horizon for our official release.\n\
                 Our platform empowers enterprises with computational resources\n\
                 and readily available AI models. Stay tuned!",
                section
            ))
            .color(egui::Color32::GRAY),
        );

        ui.add_space(24.0);

        if ui
            .add(
                egui::Button::new(egui::RichText::new("Back to Earnings").size(15.0))
                    .min_size(egui::vec2(180.0, 34.0)),
            )
            .clicked()
        {
            state.screen = Screen::Earnings;
            let _ = ui_tx.send(UiEvent::NavigatedTo(Screen::Earnings));
        }
    });
}
