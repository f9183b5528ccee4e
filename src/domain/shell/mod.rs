//! Screen mode and menu selection, applied once per frame from `MenuInput` events.

mod controller;

pub use controller::{ControllerError, MenuController, MenuInput, MenuItem, Mode, Transition};

use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    InGame,
}

impl From<Mode> for Screen {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Menu => Screen::Menu,
            Mode::InGame => Screen::InGame,
        }
    }
}

/// Inputs are mapped to `MenuInput` in `ReadInput` and consumed in `ApplyInput`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShellSet {
    ReadInput,
    ApplyInput,
}

#[derive(Resource, Clone, Debug)]
pub struct ShellConfig {
    pub title: String,
    pub resolution: (f32, f32),
    pub background_path: String,
    pub font_path: String,
    pub font_size: f32,
    pub text_color: Color,
    pub highlight_color: Color,
    pub menu_items: Vec<MenuItem>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Space Combat Simulator".into(),
            resolution: (800.0, 600.0),
            background_path: "menu-bg.png".into(),
            font_path: "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".into(),
            font_size: 32.0,
            text_color: Color::WHITE,
            highlight_color: Color::srgb_u8(255, 215, 0),
            menu_items: MenuItem::default_list(),
        }
    }
}

pub struct ShellPlugin;
impl Plugin for ShellPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world_mut()
            .get_resource_or_insert_with(ShellConfig::default)
            .clone();

        let controller = match MenuController::new(config.menu_items) {
            Ok(controller) => controller,
            Err(err) => {
                error!("Invalid menu configuration: {err}; using default menu");
                MenuController::default()
            }
        };

        app.insert_resource(controller)
            .add_event::<MenuInput>()
            .init_state::<Screen>()
            .enable_state_scoped_entities::<Screen>()
            .configure_sets(Update, (ShellSet::ReadInput, ShellSet::ApplyInput).chain())
            .add_systems(Update, apply_menu_input.in_set(ShellSet::ApplyInput));
    }
}

fn apply_menu_input(
    mut inputs: EventReader<MenuInput>,
    mut controller: ResMut<MenuController>,
    screen: Res<State<Screen>>,
    mut next_screen: ResMut<NextState<Screen>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    // Write through ResMut only on a real transition; menu highlighting
    // runs on change detection.
    for input in inputs.read() {
        let mut next = controller.clone();
        match next.apply(*input) {
            Transition::None => continue,
            Transition::Navigated { from, to } => {
                debug!("Menu selection {} -> {}", from, to);
            }
            Transition::EnteredGame => info!("Entering game"),
            Transition::ReturnedToMenu => info!("Returning to menu"),
            Transition::QuitRequested => {
                info!("Quit selected from menu");
                ev_exit.send(AppExit::Success);
            }
        }
        *controller = next;
    }

    let target = Screen::from(controller.mode());
    if *screen.get() != target {
        next_screen.set(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin).add_plugins(ShellPlugin);
        app.update();
        app
    }

    fn send(app: &mut App, inputs: &[MenuInput]) {
        for input in inputs {
            app.world_mut().send_event(*input);
        }
        app.update();
        // NextState is applied on the following frame's transition.
        app.update();
    }

    fn screen(app: &App) -> Screen {
        *app.world().resource::<State<Screen>>().get()
    }

    fn exit_requested(app: &App) -> bool {
        let events = app.world().resource::<Events<AppExit>>();
        let mut reader = events.get_reader();
        reader.read(events).any(|e| matches!(e, AppExit::Success))
    }

    #[test]
    fn starts_on_menu_screen() {
        let app = test_app();
        assert_eq!(screen(&app), Screen::Menu);
        assert_eq!(app.world().resource::<MenuController>().selection(), 0);
    }

    #[test]
    fn confirm_switches_screen_and_cancel_returns() {
        let mut app = test_app();

        send(&mut app, &[MenuInput::Confirm]);
        assert_eq!(screen(&app), Screen::InGame);

        send(&mut app, &[MenuInput::Cancel]);
        assert_eq!(screen(&app), Screen::Menu);
    }

    #[test]
    fn inputs_in_one_frame_apply_in_order() {
        let mut app = test_app();

        send(&mut app, &[MenuInput::Down, MenuInput::Down, MenuInput::Confirm]);
        let controller = app.world().resource::<MenuController>();
        assert_eq!(controller.mode(), Mode::Menu);
        assert_eq!(controller.selection(), 2);
        assert_eq!(screen(&app), Screen::Menu);
        assert!(!exit_requested(&app));
    }

    #[test]
    fn quit_item_requests_app_exit() {
        let mut app = test_app();

        send(&mut app, &[MenuInput::Up, MenuInput::Confirm]);
        assert!(exit_requested(&app));
        assert_eq!(screen(&app), Screen::Menu);
    }

    #[test]
    fn empty_configured_menu_falls_back_to_default() {
        let mut app = App::new();
        app.insert_resource(ShellConfig {
            menu_items: vec![],
            ..default()
        });
        app.add_plugins(StatesPlugin).add_plugins(ShellPlugin);

        let controller = app.world().resource::<MenuController>();
        assert_eq!(controller.items(), MenuItem::default_list().as_slice());
    }
}
