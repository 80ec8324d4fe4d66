use eframe::egui;
use egui_sidepanel::{PanelHeading, PanelModel, PanelView, PanelVariant, TransitionState};

pub struct App {
    model: PanelModel,
}

impl App {
    pub fn new(ctx: &egui::Context) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        ctx.set_fonts(fonts);

        Self {
            model: PanelModel::new(egui::Id::new("basic_panel")),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP), |ui| {
                let state = self.model.transition_state();
                let expanded =
                    matches!(state, TransitionState::Expanded | TransitionState::Expanding);

                let panel = PanelView::new(&mut self.model)
                    .variant(PanelVariant::Alternate)
                    .heading(PanelHeading::new("Tasks").hidden(!expanded));
                ui.add(panel);

                ui.centered_and_justified(|ui| {
                    ui.label("Example content");
                });
            });
        });
    }
}

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 400.0])
            .with_min_inner_size([480.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "basic_example",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx)))),
    )
}
