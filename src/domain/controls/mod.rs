use crate::domain::presentation::OverlaySettings;
use crate::domain::shell::{MenuInput, ShellSet};
use bevy::input::gamepad::{GamepadButtonInput, GamepadConnection, GamepadEvent};
use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;

#[derive(Resource, Clone, Debug)]
pub struct Keybinds {
    pub up: KeyCode,
    pub down: KeyCode,
    pub confirm: KeyCode,
    pub cancel: KeyCode,
    pub help: KeyCode,
    pub diagnostics: KeyCode,
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            confirm: KeyCode::Enter,
            cancel: KeyCode::Escape,
            help: KeyCode::KeyH,
            diagnostics: KeyCode::F3,
        }
    }
}

impl Keybinds {
    pub fn menu_input(&self, key: KeyCode) -> Option<MenuInput> {
        if key == self.up {
            Some(MenuInput::Up)
        } else if key == self.down {
            Some(MenuInput::Down)
        } else if key == self.confirm {
            Some(MenuInput::Confirm)
        } else if key == self.cancel {
            Some(MenuInput::Cancel)
        } else {
            None
        }
    }
}

pub fn gamepad_menu_input(button: GamepadButtonType) -> Option<MenuInput> {
    match button {
        GamepadButtonType::DPadUp => Some(MenuInput::Up),
        GamepadButtonType::DPadDown => Some(MenuInput::Down),
        GamepadButtonType::South | GamepadButtonType::Start => Some(MenuInput::Confirm),
        GamepadButtonType::East | GamepadButtonType::Select => Some(MenuInput::Cancel),
        _ => None,
    }
}

#[derive(Resource)]
struct MyGamepad(Gamepad);

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Keybinds>().add_systems(
            Update,
            (
                gamepad_connections,
                keyboard_menu_input,
                gamepad_buttons,
                help_toggle,
                diagnostics_toggle,
            )
                .in_set(ShellSet::ReadInput),
        );
    }
}

fn keyboard_menu_input(
    mut evr_kbd: EventReader<KeyboardInput>,
    keybinds: Res<Keybinds>,
    mut ev_input: EventWriter<MenuInput>,
) {
    // key-down events in arrival order, auto-repeat included
    for ev in evr_kbd.read() {
        if ev.state != ButtonState::Pressed {
            continue;
        }
        if let Some(input) = keybinds.menu_input(ev.key_code) {
            ev_input.send(input);
        }
    }
}

fn gamepad_buttons(
    my_gamepad: Option<Res<MyGamepad>>,
    mut evr_buttons: EventReader<GamepadButtonInput>,
    mut ev_input: EventWriter<MenuInput>,
) {
    let Some(&MyGamepad(gamepad)) = my_gamepad.as_deref() else {
        evr_buttons.clear();
        return;
    };

    for ev in evr_buttons.read() {
        if ev.state != ButtonState::Pressed || ev.button.gamepad != gamepad {
            continue;
        }
        if let Some(input) = gamepad_menu_input(ev.button.button_type) {
            ev_input.send(input);
        }
    }
}

fn help_toggle(
    mut overlays: ResMut<OverlaySettings>,
    keys: Res<ButtonInput<KeyCode>>,
    keybinds: Res<Keybinds>,
) {
    if keys.just_pressed(keybinds.help) {
        overlays.show_help = !overlays.show_help;
    }
}

fn diagnostics_toggle(
    mut overlays: ResMut<OverlaySettings>,
    keys: Res<ButtonInput<KeyCode>>,
    keybinds: Res<Keybinds>,
) {
    if keys.just_pressed(keybinds.diagnostics) {
        overlays.show_diagnostics = !overlays.show_diagnostics;
    }
}

fn gamepad_connections(
    mut commands: Commands,
    my_gamepad: Option<Res<MyGamepad>>,
    mut evr_gamepad: EventReader<GamepadEvent>,
) {
    for ev in evr_gamepad.read() {
        let GamepadEvent::Connection(ev_conn) = ev else {
            continue;
        };
        match &ev_conn.connection {
            GamepadConnection::Connected(info) => {
                debug!(
                    "New gamepad connected: {:?}, name: {}",
                    ev_conn.gamepad, info.name,
                );
                // first connected pad drives the menu
                if my_gamepad.is_none() {
                    commands.insert_resource(MyGamepad(ev_conn.gamepad));
                }
            }
            GamepadConnection::Disconnected => {
                debug!("Lost connection with gamepad: {:?}", ev_conn.gamepad);
                if let Some(MyGamepad(old_id)) = my_gamepad.as_deref() {
                    if *old_id == ev_conn.gamepad {
                        commands.remove_resource::<MyGamepad>();
                    }
                }
            }
        }
    }
}
