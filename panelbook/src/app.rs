use crate::direction::Direction;
use crate::ui::gallery::{gallery_rows, PanelExample};
use eframe::{egui, NativeOptions};
use egui::{FontDefinitions, Id};
use egui_sidepanel::PanelModel;
use egui_theme_switch::global_theme_switch;

pub struct Panelbook {
    pub direction: Direction,
    pub rows: Vec<Vec<(PanelExample, PanelModel)>>,
}

impl Panelbook {
    fn new() -> Self {
        let rows = gallery_rows()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|example| {
                        let model = PanelModel::new(Id::new(example.label));
                        (example, model)
                    })
                    .collect()
            })
            .collect();

        Self {
            direction: Direction::default(),
            rows,
        }
    }

    pub fn start(options: NativeOptions) -> eframe::Result<()> {
        eframe::run_native(
            "Panelbook",
            options,
            Box::new(|cc| {
                catppuccin_egui::set_theme(&cc.egui_ctx, catppuccin_egui::FRAPPE);
                set_font(&cc.egui_ctx);
                cc.egui_ctx
                    .options_mut(|opt| opt.zoom_with_keyboard = false);
                Ok(Box::new(Panelbook::new()))
            }),
        )
    }
}

impl eframe::App for Panelbook {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("main_top_panel").show(ctx, |ui| {
            self.menubar(ui);
        });
        egui::TopBottomPanel::bottom("main_bottom_panel").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                global_theme_switch(ui);
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.gallery(ui);
        });
    }
}

fn set_font(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}
