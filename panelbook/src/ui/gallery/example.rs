use crate::direction::Direction;
use crate::theme::{self, HeadingPadding};
use egui::{vec2, RichText, Ui};
use egui_sidepanel::{PanelHeading, PanelModel, PanelVariant, PanelView, TransitionState};

/// Configuration of one rendered example. Built literally in the gallery
/// table and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelExample {
    pub label: &'static str,
    pub heading_padding: HeadingPadding,
    pub variant: PanelVariant,
    pub expanded_width: f32,
    pub collapsed_width: f32,
}

impl PanelExample {
    pub fn new(label: &'static str, heading_padding: HeadingPadding) -> Self {
        Self {
            label,
            heading_padding,
            variant: PanelVariant::default(),
            expanded_width: PanelView::DEFAULT_EXPANDED_WIDTH,
            collapsed_width: PanelView::DEFAULT_COLLAPSED_WIDTH,
        }
    }

    pub fn variant(mut self, variant: PanelVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn expanded_width(mut self, width: f32) -> Self {
        self.expanded_width = width;
        self
    }

    pub fn collapsed_width(mut self, width: f32) -> Self {
        self.collapsed_width = width;
        self
    }
}

/// True when the panel should show its full heading.
pub fn heading_visible(state: TransitionState) -> bool {
    matches!(
        state,
        TransitionState::Expanded | TransitionState::Expanding
    )
}

/// One example column: label, then a fixed-height viewport holding the
/// panel and a content placeholder.
pub(super) fn show(
    ui: &mut Ui,
    width: f32,
    direction: Direction,
    example: &PanelExample,
    model: &mut PanelModel,
) {
    ui.allocate_ui_with_layout(
        vec2(width, ui.available_height()),
        direction.column_layout(),
        |ui| {
            ui.spacing_mut().item_spacing.y = f32::from(theme::space::SM);
            ui.label(
                RichText::new(example.label)
                    .size(theme::font_size::BODY_SMALL)
                    .strong(),
            );
            theme::viewport_frame(ui).show(ui, |ui| {
                ui.set_min_size(vec2(ui.available_width(), theme::VIEWPORT_HEIGHT));
                ui.set_max_height(theme::VIEWPORT_HEIGHT);
                ui.with_layout(direction.row_layout(), |ui| {
                    let visible = heading_visible(model.transition_state());
                    let panel = PanelView::new(model)
                        .variant(example.variant)
                        .expanded_width(example.expanded_width)
                        .collapsed_width(example.collapsed_width)
                        .heading(
                            PanelHeading::new(example.label)
                                .hidden(!visible)
                                .frame(example.heading_padding.frame()),
                        );
                    ui.add(panel);
                    ui.centered_and_justified(|ui| {
                        ui.label("Example content");
                    });
                });
            });
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_alternate_variant_and_canonical_widths() {
        let example = PanelExample::new("Medium (md)", HeadingPadding::Md);
        assert_eq!(example.variant, PanelVariant::Alternate);
        assert_eq!(example.expanded_width, 320.0);
        assert_eq!(example.collapsed_width, 80.0);
    }

    #[test]
    fn explicit_standard_variant_is_kept() {
        let example =
            PanelExample::new("Standard Variant (md)", HeadingPadding::Md).variant(PanelVariant::Standard);
        assert_eq!(example.variant, PanelVariant::Standard);
    }

    #[test]
    fn heading_visible_only_while_expanded_or_expanding() {
        assert!(heading_visible(TransitionState::Expanded));
        assert!(heading_visible(TransitionState::Expanding));
        assert!(!heading_visible(TransitionState::Collapsed));
        assert!(!heading_visible(TransitionState::Collapsing));
    }
}
