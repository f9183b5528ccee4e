use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin};

use crate::domain::controls::Keybinds;
use crate::domain::shell::{MenuController, Screen, ShellSet};

pub mod game_screen;
pub mod menu_screen;
pub mod panels;

#[derive(Resource, Default, Debug, Clone)]
pub struct OverlaySettings {
    pub show_help: bool,
    pub show_diagnostics: bool,
}

pub struct UiPlugin;
impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<OverlaySettings>()
            .add_systems(OnEnter(Screen::Menu), menu_screen::spawn_menu)
            .add_systems(OnEnter(Screen::InGame), game_screen::spawn_game_scene)
            .add_systems(
                Update,
                (
                    menu_screen::highlight_selection
                        .run_if(in_state(Screen::Menu))
                        .run_if(resource_changed::<MenuController>),
                    game_screen::spin_placeholder.run_if(in_state(Screen::InGame)),
                    overlay_system,
                )
                    .after(ShellSet::ApplyInput),
            );
    }
}

fn overlay_system(
    mut contexts: EguiContexts,
    overlays: Res<OverlaySettings>,
    keybinds: Res<Keybinds>,
    diagnostics: Res<DiagnosticsStore>,
    controller: Res<MenuController>,
) {
    panels::show_help_panel(contexts.ctx_mut(), &overlays, &keybinds);
    panels::show_diagnostics_panel(contexts.ctx_mut(), &diagnostics, &overlays, &controller);
}
