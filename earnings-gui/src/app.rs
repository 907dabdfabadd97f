//! Application struct — the eframe::App implementation.
//!
//! Thin wrapper: drains service events, dispatches to view modules.
//! No async, no business logic.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::events::{Screen, ServiceEvent, UiEvent};
use crate::state::AppState;
use crate::view;

/// The earnings console application.
pub struct App {
    pub state: AppState,
    pub ui_tx: mpsc::UnboundedSender<UiEvent>,
    svc_rx: mpsc::UnboundedReceiver<ServiceEvent>,
    shutdown_token: CancellationToken,
}

impl App {
    /// Create a new App, spawning the background service task.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (svc_tx, svc_rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();

        let state = AppState::new(config.catalog());

        // Spawn the single background service task
        let svc_token = token.clone();
        tokio::spawn(crate::service::run(svc_token, ui_rx, svc_tx, config));

        Self {
            state,
            ui_tx,
            svc_rx,
            shutdown_token: token,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown_token.cancel();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Repaint regularly so the processing delay's completion is picked up
        // even without input events
        ctx.request_repaint_after(std::time::Duration::from_millis(250));

        // 1. Drain all pending service events (non-blocking)
        while let Ok(event) = self.svc_rx.try_recv() {
            self.state.apply(event);
            ctx.request_repaint();
        }

        // 2. Navigation sidebar
        egui::SidePanel::left("nav").show(ctx, |ui| {
            ui.add_space(10.0);
            ui.label(egui::RichText::new("NLOV Earn").size(18.0).strong());
            ui.label(
                egui::RichText::new("Connect to Earn")
                    .size(11.0)
                    .color(egui::Color32::GRAY),
            );
            ui.separator();
            ui.add_space(5.0);

            nav_button(ui, &mut self.state, "💰 Earnings", Screen::Earnings, &self.ui_tx);
            nav_button(ui, &mut self.state, "🧠 AI Models", Screen::Models, &self.ui_tx);
            nav_button(ui, &mut self.state, "🖥 Compute", Screen::Compute, &self.ui_tx);
        });

        // 3. Central panel — route to the active view
        egui::CentralPanel::default().show(ctx, |ui| match self.state.screen {
            Screen::Earnings => {
                view::earnings::show(ui, &mut self.state, &self.ui_tx);
            }
            Screen::Models | Screen::Compute => {
                view::coming_soon::show(ui, &mut self.state, &self.ui_tx);
            }
        });

        // 4. The cashout dialog floats above whatever screen is active
        if self.state.cashout.open {
            view::cashout::show(ctx, &mut self.state, &self.ui_tx);
        }
    }
}

/// Render a navigation button, highlighting the active screen.
fn nav_button(
    ui: &mut egui::Ui,
    state: &mut AppState,
    label: &str,
    screen: Screen,
    ui_tx: &mpsc::UnboundedSender<UiEvent>,
) {
    let is_active = state.screen == screen;
    let button = egui::Button::new(egui::RichText::new(label).size(14.0))
        .selected(is_active)
        .min_size(egui::vec2(140.0, 28.0));

    if ui.add(button).clicked() && !is_active {
        state.screen = screen;
        let _ = ui_tx.send(UiEvent::NavigatedTo(screen));
    }
}
