//! UI panels: part directory, text overlay controls, status bar.

pub mod overlay_panel;
pub mod part_list;
pub mod status_bar;
