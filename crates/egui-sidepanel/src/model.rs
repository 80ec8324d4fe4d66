use egui::Id;

/// Animation/display state of a panel as observed on the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Expanded,
    Expanding,
    Collapsed,
    Collapsing,
}

/// Visual treatment of the panel surface.
///
/// `Alternate` paints a raised surface with a divider on the trailing
/// edge, `Standard` blends into the surrounding window fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVariant {
    Standard,
    #[default]
    Alternate,
}

/// Open/close state of a single panel.
///
/// The view writes `progress` on every frame from the egui animation
/// clock; everything else only reads it through [`transition_state`].
///
/// [`transition_state`]: PanelModel::transition_state
#[derive(Debug, Clone)]
pub struct PanelModel {
    id: Id,
    open: bool,
    progress: f32,
}

impl PanelModel {
    /// A fresh panel starts fully expanded.
    pub fn new(id: Id) -> Self {
        Self {
            id,
            open: true,
            progress: 1.0,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Width transition progress in `[0, 1]`, 1 meaning fully expanded.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub(crate) fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    pub fn transition_state(&self) -> TransitionState {
        match (self.open, self.progress) {
            (true, p) if p >= 1.0 => TransitionState::Expanded,
            (true, _) => TransitionState::Expanding,
            (false, p) if p <= 0.0 => TransitionState::Collapsed,
            (false, _) => TransitionState::Collapsing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> PanelModel {
        PanelModel::new(Id::new("test_panel"))
    }

    #[test]
    fn fresh_model_is_expanded() {
        let model = model();
        assert!(model.is_open());
        assert_eq!(model.transition_state(), TransitionState::Expanded);
    }

    #[test]
    fn toggle_flips_open_flag() {
        let mut model = model();
        model.toggle();
        assert!(!model.is_open());
        model.toggle();
        assert!(model.is_open());
    }

    #[test]
    fn transition_state_tracks_progress_while_open() {
        let mut model = model();
        model.set_progress(0.5);
        assert_eq!(model.transition_state(), TransitionState::Expanding);
        model.set_progress(1.0);
        assert_eq!(model.transition_state(), TransitionState::Expanded);
    }

    #[test]
    fn transition_state_tracks_progress_while_closed() {
        let mut model = model();
        model.toggle();
        model.set_progress(0.5);
        assert_eq!(model.transition_state(), TransitionState::Collapsing);
        model.set_progress(0.0);
        assert_eq!(model.transition_state(), TransitionState::Collapsed);
    }

    #[test]
    fn default_variant_is_alternate() {
        assert_eq!(PanelVariant::default(), PanelVariant::Alternate);
    }
}
