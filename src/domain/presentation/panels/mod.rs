pub mod diagnostics_panel;
pub mod help_panel;

pub use diagnostics_panel::show_diagnostics_panel;
pub use help_panel::show_help_panel;
