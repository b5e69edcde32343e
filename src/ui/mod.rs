//! UI components for Jekyll Compose

pub mod forms;
pub mod picker;
pub mod preview;
pub mod sidebar;
pub mod status;
