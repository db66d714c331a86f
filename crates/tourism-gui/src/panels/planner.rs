use std::sync::mpsc::{channel, Receiver, Sender};

use eframe::egui;
use tokio::runtime::Handle;
use tourism_core::copy::{
    quoted, CLEAR_LABEL, EXAMPLES_HEADING, EXAMPLES_INTRO, EXAMPLE_QUERIES, INPUT_HINT,
    RESPONSE_HEADING,
};
use tourism_core::{
    FormView, Generation, Key, Panel, PendingRequest, RequestError, SubmitOutcome, TourismClient,
    TourismResponse,
};
use tracing::info;

type Reply = (Generation, Result<TourismResponse, RequestError>);

const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(231, 76, 60);
const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(250, 219, 216);
const RESPONSE_FILL: egui::Color32 = egui::Color32::from_rgb(232, 244, 248);
const RESPONSE_STROKE: egui::Color32 = egui::Color32::from_rgb(52, 152, 219);
const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(127, 140, 141);

/// User input gathered while laying out one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormAction {
    Input(String),
    Enter,
    Submit,
    Clear,
}

/// Query form. Requests run on the tokio runtime; replies come back over a channel
/// drained at the start of each frame.
pub struct PlannerPanel {
    form: FormView,
    client: TourismClient,
    runtime: Handle,
    reply_tx: Sender<Reply>,
    reply_rx: Receiver<Reply>,
}

impl PlannerPanel {
    pub fn new(runtime: Handle) -> Self {
        Self::with_client(runtime, TourismClient::default())
    }

    fn with_client(runtime: Handle, client: TourismClient) -> Self {
        let (reply_tx, reply_rx) = channel();
        Self {
            form: FormView::new(),
            client,
            runtime,
            reply_tx,
            reply_rx,
        }
    }

    fn poll(&mut self) {
        while let Ok((generation, result)) = self.reply_rx.try_recv() {
            self.form.complete(generation, result);
        }
    }

    /// Applies a frame's actions in order. Every accepted submit is dispatched
    /// before the next action runs.
    fn apply(&mut self, actions: Vec<FormAction>, ctx: &egui::Context) {
        for action in actions {
            let outcome = match action {
                FormAction::Input(text) => {
                    self.form.input_changed(text);
                    None
                }
                FormAction::Enter => self.form.key_pressed(Key::Enter),
                FormAction::Submit => Some(self.form.submit()),
                FormAction::Clear => {
                    self.form.clear();
                    None
                }
            };

            if let Some(SubmitOutcome::Send(pending)) = outcome {
                self.dispatch(pending, ctx);
            }
        }
    }

    fn dispatch(&self, pending: PendingRequest, ctx: &egui::Context) {
        info!(place = %pending.payload.place, "Dispatching tourism request");
        let client = self.client.clone();
        let tx = self.reply_tx.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let reply = client.send(pending).await;
            let _ = tx.send(reply);
            ctx.request_repaint();
        });
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.poll();

        let controls = self.form.controls();
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            let mut query = self.form.query().to_string();
            let width = ui.available_width() - 180.0;
            let input = ui.add_enabled(
                controls.input_enabled,
                egui::TextEdit::singleline(&mut query)
                    .hint_text(INPUT_HINT)
                    .desired_width(width),
            );

            if input.changed() {
                actions.push(FormAction::Input(query));
            }
            if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                actions.push(FormAction::Enter);
            }

            let submit = egui::Button::new(controls.submit_label);
            if ui.add_enabled(controls.submit_enabled, submit).clicked() {
                actions.push(FormAction::Submit);
            }

            let clear = egui::Button::new(CLEAR_LABEL);
            if ui.add_enabled(controls.clear_enabled, clear).clicked() {
                actions.push(FormAction::Clear);
            }
        });

        let ctx = ui.ctx().clone();
        self.apply(actions, &ctx);

        ui.add_space(20.0);
        self.render_panel(ui);
    }

    fn render_panel(&self, ui: &mut egui::Ui) {
        match self.form.render() {
            Panel::Error(message) => {
                egui::Frame::none()
                    .fill(ERROR_FILL)
                    .rounding(5.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.colored_label(ERROR_TEXT, message);
                    });
            }
            Panel::Answer(answer) => {
                egui::Frame::none()
                    .fill(RESPONSE_FILL)
                    .stroke(egui::Stroke::new(1.0, RESPONSE_STROKE))
                    .rounding(5.0)
                    .inner_margin(20.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.heading(RESPONSE_HEADING);
                        ui.add_space(8.0);
                        ui.label(answer);
                    });
            }
            Panel::Examples => {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(egui::RichText::new(EXAMPLES_INTRO).italics().color(MUTED_TEXT));
                    ui.label(egui::RichText::new(EXAMPLES_HEADING).italics().color(MUTED_TEXT));
                    for example in EXAMPLE_QUERIES {
                        ui.label(egui::RichText::new(quoted(example)).italics().color(MUTED_TEXT));
                    }
                });
            }
            Panel::Waiting => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(ctx: &egui::Context, panel: &mut PlannerPanel) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| panel.ui(ui));
        });
    }

    #[test]
    fn test_enter_and_click_in_one_frame_still_sends() {
        use axum::{routing::post, Json, Router};
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;
        use std::time::Duration;

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        let app = Router::new().route(
            "/tourism",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(TourismResponse {
                        answer: "Louvre".to_string(),
                    })
                }
            }),
        );
        let endpoint = runtime.block_on(async {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });
            format!("http://{}/tourism", addr)
        });

        let mut panel =
            PlannerPanel::with_client(runtime.handle().clone(), TourismClient::new(endpoint));
        let ctx = egui::Context::default();

        panel.apply(
            vec![
                FormAction::Input("Paris".to_string()),
                FormAction::Enter,
                FormAction::Submit,
            ],
            &ctx,
        );
        assert!(panel.form.is_loading());

        let (generation, result) = panel
            .reply_rx
            .recv_timeout(Duration::from_secs(10))
            .expect("request was never dispatched");
        panel.form.complete(generation, result);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!panel.form.is_loading());
        assert_eq!(panel.form.render(), Panel::Answer("Louvre"));
    }

    #[test]
    fn test_clear_then_submit_in_one_frame_is_rejected() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut panel = PlannerPanel::new(runtime.handle().clone());
        let ctx = egui::Context::default();

        panel.apply(
            vec![
                FormAction::Input("Paris".to_string()),
                FormAction::Clear,
                FormAction::Submit,
            ],
            &ctx,
        );

        assert!(!panel.form.is_loading());
        assert_eq!(panel.form.render(), Panel::Error("Please enter a place name"));
    }

    #[test]
    fn test_reply_is_applied_on_next_frame() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut panel = PlannerPanel::new(runtime.handle().clone());

        panel.form.input_changed("Bangalore");
        let SubmitOutcome::Send(pending) = panel.form.submit() else {
            panic!("expected a request");
        };

        panel
            .reply_tx
            .send((
                pending.generation,
                Ok(TourismResponse {
                    answer: "Bangalore is 28°C".to_string(),
                }),
            ))
            .unwrap();

        let ctx = egui::Context::default();
        run_frame(&ctx, &mut panel);

        assert_eq!(panel.form.render(), Panel::Answer("Bangalore is 28°C"));
        assert_eq!(panel.form.controls().submit_label, "Submit");
    }

    #[test]
    fn test_frames_render_in_every_phase() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut panel = PlannerPanel::new(runtime.handle().clone());
        let ctx = egui::Context::default();

        run_frame(&ctx, &mut panel);
        assert_eq!(panel.form.render(), Panel::Examples);

        panel.form.input_changed(" ");
        panel.form.submit();
        run_frame(&ctx, &mut panel);
        assert_eq!(panel.form.render(), Panel::Error("Please enter a place name"));

        panel.form.input_changed("Paris");
        let SubmitOutcome::Send(pending) = panel.form.submit() else {
            panic!("expected a request");
        };
        run_frame(&ctx, &mut panel);
        assert_eq!(panel.form.render(), Panel::Waiting);

        panel
            .reply_tx
            .send((pending.generation, Err(RequestError::Status(500))))
            .unwrap();
        run_frame(&ctx, &mut panel);
        assert_eq!(
            panel.form.render(),
            Panel::Error("Failed to get response. Make sure the backend server is running.")
        );
    }
}
