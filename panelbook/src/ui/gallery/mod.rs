mod example;

pub use example::{heading_visible, PanelExample};

use crate::app::Panelbook;
use crate::theme::{space, HeadingPadding};
use egui::{vec2, Align, Ui};
use egui_sidepanel::PanelVariant;

const TITLE: &str = "SidePanel Heading Padding Examples";

/// The gallery's configuration table: five rows of two examples each,
/// all constants from the canonical preset set.
pub fn gallery_rows() -> Vec<Vec<PanelExample>> {
    vec![
        vec![
            PanelExample::new("No Padding", HeadingPadding::None),
            PanelExample::new("Extra Small (xs)", HeadingPadding::Xs),
        ],
        vec![
            PanelExample::new("Small (sm)", HeadingPadding::Sm),
            PanelExample::new("Medium (md)", HeadingPadding::Md),
        ],
        vec![
            PanelExample::new("Large (lg)", HeadingPadding::Lg),
            PanelExample::new("Extra Large (xl)", HeadingPadding::Xl),
        ],
        vec![
            PanelExample::new("Asymmetric Padding", HeadingPadding::Asymmetric),
            PanelExample::new("Medium (Baseline)", HeadingPadding::Md),
        ],
        vec![
            PanelExample::new("Standard Variant (md)", HeadingPadding::Md)
                .variant(PanelVariant::Standard),
            PanelExample::new("Alternate Variant (md)", HeadingPadding::Md)
                .variant(PanelVariant::Alternate),
        ],
    ]
}

impl Panelbook {
    pub fn gallery(&mut self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing =
                    vec2(f32::from(space::SM), f32::from(space::MD));
                self.header(ui);

                let direction = self.direction;
                for row in &mut self.rows {
                    ui.with_layout(direction.row_layout(), |ui| {
                        let gap = ui.spacing().item_spacing.x;
                        let column_width = (ui.available_width() - gap) / 2.0;
                        for (example, model) in row.iter_mut() {
                            example::show(ui, column_width, direction, example, model);
                        }
                    });
                }
            });
    }

    fn header(&mut self, ui: &mut Ui) {
        ui.with_layout(self.direction.row_layout().with_cross_align(Align::Center), |ui| {
            ui.heading(TITLE);
            ui.with_layout(self.direction.trailing_layout(), |ui| {
                let toggle_btn = format!("Direction: {}", self.direction.label());
                if ui.button(toggle_btn).clicked() {
                    self.direction.toggle();
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_five_rows_of_two() {
        let rows = gallery_rows();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 2));
    }

    #[test]
    fn medium_entry_renders_alternate_with_default_widths() {
        let rows = gallery_rows();
        let example = rows
            .iter()
            .flatten()
            .find(|example| example.label == "Medium (md)")
            .unwrap();
        assert_eq!(example.variant, PanelVariant::Alternate);
        assert_eq!(example.expanded_width, 320.0);
        assert_eq!(example.collapsed_width, 80.0);
    }

    #[test]
    fn variant_row_pins_both_variants() {
        let rows = gallery_rows();
        let variants: Vec<_> = rows[4].iter().map(|example| example.variant).collect();
        assert_eq!(variants, [PanelVariant::Standard, PanelVariant::Alternate]);
    }

    #[test]
    fn labels_are_unique() {
        let rows = gallery_rows();
        let mut labels: Vec<_> = rows.iter().flatten().map(|example| example.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 10);
    }
}
