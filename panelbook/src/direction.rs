use egui::{Align, Layout};

/// Text layout orientation of the gallery, toggled for RTL verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn toggle(&mut self) {
        *self = match self {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        };
    }

    /// Layout for a gallery row, content flowing from the leading edge.
    pub fn row_layout(&self) -> Layout {
        match self {
            Direction::Ltr => Layout::left_to_right(Align::TOP),
            Direction::Rtl => Layout::right_to_left(Align::TOP),
        }
    }

    /// Layout packing row content against the trailing edge.
    pub fn trailing_layout(&self) -> Layout {
        match self {
            Direction::Ltr => Layout::right_to_left(Align::Center),
            Direction::Rtl => Layout::left_to_right(Align::Center),
        }
    }

    /// Layout for a column whose content aligns with the leading edge.
    pub fn column_layout(&self) -> Layout {
        match self {
            Direction::Ltr => Layout::top_down(Align::Min),
            Direction::Rtl => Layout::top_down(Align::Max),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Ltr => "LTR",
            Direction::Rtl => "RTL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_direction_is_ltr() {
        assert_eq!(Direction::default(), Direction::Ltr);
    }

    #[test]
    fn single_toggle_flips() {
        let mut direction = Direction::default();
        direction.toggle();
        assert_eq!(direction, Direction::Rtl);
    }

    #[test]
    fn even_toggles_restore_odd_toggles_flip() {
        let mut direction = Direction::default();
        for _ in 0..4 {
            direction.toggle();
        }
        assert_eq!(direction, Direction::Ltr);
        for _ in 0..3 {
            direction.toggle();
        }
        assert_eq!(direction, Direction::Rtl);
    }

    #[test]
    fn toggle_flips_row_layout_direction() {
        let mut direction = Direction::default();
        assert_eq!(direction.row_layout().main_dir, egui::Direction::LeftToRight);
        direction.toggle();
        assert_eq!(direction.row_layout().main_dir, egui::Direction::RightToLeft);
    }

    #[test]
    fn labels_are_uppercase() {
        assert_eq!(Direction::Ltr.label(), "LTR");
        assert_eq!(Direction::Rtl.label(), "RTL");
    }
}
