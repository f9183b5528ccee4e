use bevy_egui::egui;

use crate::domain::controls::Keybinds;
use crate::domain::presentation::OverlaySettings;

pub fn show_help_panel(ctx: &mut egui::Context, overlays: &OverlaySettings, keybinds: &Keybinds) {
    if overlays.show_help {
        egui::Window::new("Help").show(ctx, |ui| {
            ui.label(format!("{:?}/{:?}: Move Selection", keybinds.up, keybinds.down));
            ui.label(format!("{:?}: Select", keybinds.confirm));
            ui.label(format!("{:?}: Back to Menu", keybinds.cancel));
            ui.label(format!("{:?}: Toggle Help", keybinds.help));
            ui.label(format!("{:?}: Toggle Diagnostics", keybinds.diagnostics));
            ui.label("Gamepad: D-Pad, South/Start, East/Select");
        });
    }
}
