//! Shared UI helpers used across screens.

use eframe::egui;

/// A labeled single-line text input with an optional error line underneath.
/// Returns the field's response so callers can react to edits.
pub fn labeled_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    enabled: bool,
    error: Option<&str>,
) -> egui::Response {
    let label_color = if error.is_some() {
        egui::Color32::from_rgb(200, 50, 50)
    } else {
        egui::Color32::GRAY
    };
    ui.label(egui::RichText::new(label).size(12.0).color(label_color));

    let response = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(ui.available_width()),
    );

    if let Some(msg) = error {
        ui.colored_label(
            egui::Color32::from_rgb(200, 50, 50),
            format!("⚠ {}", msg),
        );
    }

    response
}

/// A label/value line used by the confirm and success summaries.
pub fn detail_row(ui: &mut egui::Ui, label: &str, value: impl Into<egui::WidgetText>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(egui::Color32::GRAY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}

/// One earnings statistic: small caption, big value, unit suffix.
pub fn stat_tile(ui: &mut egui::Ui, caption: &str, value: f64, unit: &str) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(caption)
                .size(12.0)
                .color(egui::Color32::GRAY),
        );
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("{}", value)).size(26.0).strong());
            ui.label(
                egui::RichText::new(unit)
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
        });
    });
}
