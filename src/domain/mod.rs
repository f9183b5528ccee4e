//! Domain modules split by discipline so teams can work independently.
//! - `shell`: screen mode, menu selection, and the transitions between them.
//! - `controls`: keyboard/gamepad mapping into menu inputs, overlay toggles.
//! - `assets`: background image and font loading.
//! - `presentation`: menu screen, game screen, and egui overlays.
//! - `catalog`: ship, base, and faction records. Not wired into the shell yet.

pub mod assets;
pub mod catalog;
pub mod controls;
pub mod presentation;
pub mod shell;

pub use assets::AssetsPlugin;
pub use controls::InputPlugin;
pub use presentation::UiPlugin;
pub use shell::{ShellConfig, ShellPlugin};
