mod model;
mod view;

pub use model::{PanelModel, PanelVariant, TransitionState};
pub use view::{PanelHeading, PanelView, TRANSITION_TIME};
