use eframe::egui;
use tokio::runtime::Handle;
use tourism_core::copy::TITLE;

use crate::panels::planner::PlannerPanel;

pub struct TourismApp {
    planner: PlannerPanel,
}

impl TourismApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, runtime: Handle) -> Self {
        Self {
            planner: PlannerPanel::new(runtime),
        }
    }
}

impl eframe::App for TourismApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(
                    egui::RichText::new(TITLE)
                        .heading()
                        .color(egui::Color32::from_rgb(44, 62, 80)),
                );
            });
            ui.add_space(20.0);

            ui.group(|ui| {
                self.planner.ui(ui);
            });
        });
    }
}
