//! Design tokens and style presets for the gallery chrome.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke, Ui};

/// T-shirt size mapping for the 4px-base spacing scale.
pub mod space {
    pub const XS: i8 = 4;
    pub const SM: i8 = 8;
    pub const MD: i8 = 16;
    pub const LG: i8 = 24;
    pub const XL: i8 = 32;
    pub const XXL: i8 = 40;
}

pub mod font_size {
    pub const BODY_SMALL: f32 = 14.0;
}

/// Corner radius of the example viewports.
pub const VIEWPORT_RADIUS: u8 = 8;

/// Fixed height of every example viewport.
pub const VIEWPORT_HEIGHT: f32 = 280.0;

/// Outline marking the heading container in every example.
pub const HEADING_OUTLINE: Stroke = Stroke {
    width: 2.0,
    color: Color32::RED,
};

/// The fixed set of heading padding presets shown by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingPadding {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Asymmetric,
}

impl HeadingPadding {
    pub fn margin(&self) -> Margin {
        match self {
            HeadingPadding::None => Margin::ZERO,
            HeadingPadding::Xs => Margin::same(space::XS),
            HeadingPadding::Sm => Margin::same(space::SM),
            HeadingPadding::Md => Margin::same(space::MD),
            HeadingPadding::Lg => Margin::same(space::LG),
            HeadingPadding::Xl => Margin::same(space::XL),
            HeadingPadding::Asymmetric => Margin {
                left: space::XL,
                right: space::XS,
                top: space::XS,
                bottom: space::LG,
            },
        }
    }

    /// Style reference handed to the panel heading: the preset padding
    /// inside the outlined heading container.
    pub fn frame(&self) -> Frame {
        Frame::new()
            .inner_margin(self.margin())
            .stroke(HEADING_OUTLINE)
    }
}

/// Frame of the fixed-height viewport wrapping each example.
pub fn viewport_frame(ui: &Ui) -> Frame {
    Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().window_stroke())
        .corner_radius(CornerRadius::same(VIEWPORT_RADIUS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_4px_base() {
        assert_eq!(space::XS, 4);
        assert_eq!(space::SM, 8);
        assert_eq!(space::MD, 16);
        assert_eq!(space::LG, 24);
        assert_eq!(space::XL, 32);
        assert_eq!(space::XXL, 40);
    }

    #[test]
    fn uniform_presets_pad_all_sides_equally() {
        assert_eq!(HeadingPadding::None.margin(), Margin::ZERO);
        assert_eq!(HeadingPadding::Md.margin(), Margin::same(space::MD));
        assert_eq!(HeadingPadding::Xl.margin(), Margin::same(space::XL));
    }

    #[test]
    fn asymmetric_preset_matches_token_table() {
        let margin = HeadingPadding::Asymmetric.margin();
        assert_eq!(margin.top, space::XS);
        assert_eq!(margin.bottom, space::LG);
        assert_eq!(margin.left, space::XL);
        assert_eq!(margin.right, space::XS);
    }
}
