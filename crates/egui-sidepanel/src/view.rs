use crate::model::{PanelModel, PanelVariant};
use egui::{
    lerp, vec2, Align, Button, CornerRadius, Frame, Layout, Response, RichText, Sense, Ui,
    UiBuilder, Widget,
};
use egui_phosphor::regular::{CARET_DOUBLE_LEFT, CARET_DOUBLE_RIGHT};

/// Duration of the expand/collapse width transition, in seconds.
pub const TRANSITION_TIME: f32 = 0.2;

/// Heading sub-element of a panel: display text plus a hidden flag and an
/// opaque style reference supplied by the caller.
pub struct PanelHeading {
    text: String,
    hidden: bool,
    frame: Frame,
}

impl PanelHeading {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hidden: false,
            frame: Frame::new(),
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }
}

/// A collapsible side panel whose width animates between a collapsed and
/// an expanded bound.
///
/// The panel reads its flow direction from the surrounding horizontal
/// layout, so placing it in a right-to-left row mirrors the toggle caret
/// and the divider edge. The toggle caret requires the phosphor icon font
/// to be installed via [`egui_phosphor::add_to_fonts`].
pub struct PanelView<'a> {
    model: &'a mut PanelModel,
    variant: PanelVariant,
    expanded_width: f32,
    collapsed_width: f32,
    heading: Option<PanelHeading>,
}

impl<'a> PanelView<'a> {
    pub const DEFAULT_EXPANDED_WIDTH: f32 = 320.0;
    pub const DEFAULT_COLLAPSED_WIDTH: f32 = 80.0;

    const INNER_PADDING: f32 = 8.0;

    pub fn new(model: &'a mut PanelModel) -> Self {
        Self {
            model,
            variant: PanelVariant::default(),
            expanded_width: Self::DEFAULT_EXPANDED_WIDTH,
            collapsed_width: Self::DEFAULT_COLLAPSED_WIDTH,
            heading: None,
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

    pub fn heading(mut self, heading: PanelHeading) -> Self {
        self.heading = Some(heading);
        self
    }
}

impl Widget for PanelView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let PanelView {
            model,
            variant,
            expanded_width,
            collapsed_width,
            heading,
        } = self;

        let progress =
            ui.ctx()
                .animate_bool_with_time(model.id(), model.is_open(), TRANSITION_TIME);
        model.set_progress(progress);

        let rtl = ui.layout().main_dir == egui::Direction::RightToLeft;
        let width = lerp(collapsed_width..=expanded_width, progress);
        let (response, painter) =
            ui.allocate_painter(vec2(width, ui.available_height()), Sense::hover());
        let rect = response.rect;

        let fill = match variant {
            PanelVariant::Alternate => ui.visuals().faint_bg_color,
            PanelVariant::Standard => ui.visuals().panel_fill,
        };
        painter.rect_filled(rect, CornerRadius::ZERO, fill);
        // divider on the trailing edge
        let divider_x = if rtl { rect.left() } else { rect.right() };
        painter.vline(divider_x, rect.y_range(), ui.visuals().window_stroke());

        let cross_align = if rtl { Align::Max } else { Align::Min };
        let mut content = ui.new_child(
            UiBuilder::new()
                .max_rect(rect.shrink(Self::INNER_PADDING))
                .layout(Layout::top_down(cross_align)),
        );
        content.set_clip_rect(rect);

        // toggle control sits on the trailing edge
        let toggle_layout = if rtl {
            Layout::left_to_right(Align::Min)
        } else {
            Layout::right_to_left(Align::Min)
        };
        let mut toggled = false;
        content.with_layout(toggle_layout, |ui| {
            let caret = match (model.is_open(), rtl) {
                (true, false) | (false, true) => CARET_DOUBLE_LEFT,
                (true, true) | (false, false) => CARET_DOUBLE_RIGHT,
            };
            let toggle_btn = Button::new(RichText::new(caret).size(16.0)).frame(false);
            if ui.add(toggle_btn).clicked() {
                toggled = true;
            }
        });
        if toggled {
            model.toggle();
        }

        if let Some(heading) = heading {
            if !heading.hidden {
                heading.frame.show(&mut content, |ui| {
                    ui.label(RichText::new(heading.text).size(16.0).strong());
                });
            }
        }

        response
    }
}
