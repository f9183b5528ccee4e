use bevy::prelude::*;
use thiserror::Error;

/// Which screen the shell is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    #[default]
    Menu,
    InGame,
}

#[derive(Event, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuInput {
    Up,
    Down,
    Confirm,
    Cancel,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuItem {
    NewGame,
    LoadGame,
    Options,
    Quit,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::NewGame => "New Game",
            MenuItem::LoadGame => "Load Game",
            MenuItem::Options => "Options",
            MenuItem::Quit => "Quit",
        }
    }

    pub fn default_list() -> Vec<MenuItem> {
        vec![
            MenuItem::NewGame,
            MenuItem::LoadGame,
            MenuItem::Options,
            MenuItem::Quit,
        ]
    }
}

/// What a single input did to the controller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    None,
    Navigated { from: usize, to: usize },
    EnteredGame,
    ReturnedToMenu,
    QuitRequested,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ControllerError {
    #[error("menu must contain at least one item")]
    EmptyMenu,
}

/// Screen mode and menu highlight. `selection` always indexes into `items`.
#[derive(Resource, Debug, Clone)]
pub struct MenuController {
    mode: Mode,
    selection: usize,
    items: Vec<MenuItem>,
}

impl Default for MenuController {
    fn default() -> Self {
        Self {
            mode: Mode::Menu,
            selection: 0,
            items: MenuItem::default_list(),
        }
    }
}

impl MenuController {
    pub fn new(items: Vec<MenuItem>) -> Result<Self, ControllerError> {
        if items.is_empty() {
            return Err(ControllerError::EmptyMenu);
        }
        Ok(Self {
            mode: Mode::Menu,
            selection: 0,
            items,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected_item(&self) -> MenuItem {
        self.items[self.selection]
    }

    pub fn apply(&mut self, input: MenuInput) -> Transition {
        let n = self.items.len();
        match (self.mode, input) {
            (Mode::Menu, MenuInput::Up) => {
                let from = self.selection;
                self.selection = (self.selection + n - 1) % n;
                Transition::Navigated {
                    from,
                    to: self.selection,
                }
            }
            (Mode::Menu, MenuInput::Down) => {
                let from = self.selection;
                self.selection = (self.selection + 1) % n;
                Transition::Navigated {
                    from,
                    to: self.selection,
                }
            }
            (Mode::Menu, MenuInput::Confirm) => match self.selected_item() {
                MenuItem::NewGame => {
                    self.mode = Mode::InGame;
                    Transition::EnteredGame
                }
                MenuItem::Quit => Transition::QuitRequested,
                // Load Game and Options have no screens yet.
                MenuItem::LoadGame | MenuItem::Options => Transition::None,
            },
            (Mode::InGame, MenuInput::Cancel) => {
                self.mode = Mode::Menu;
                Transition::ReturnedToMenu
            }
            _ => Transition::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn run(controller: &mut MenuController, inputs: &[MenuInput]) -> Vec<Transition> {
        inputs.iter().map(|i| controller.apply(*i)).collect()
    }

    #[test]
    fn starts_in_menu_at_first_item() {
        let c = MenuController::default();
        assert_eq!(c.mode(), Mode::Menu);
        assert_eq!(c.selection(), 0);
        assert_eq!(c.selected_item(), MenuItem::NewGame);
        assert_eq!(c.items().len(), 4);
    }

    #[test]
    fn empty_menu_is_rejected() {
        assert_eq!(MenuController::new(vec![]).unwrap_err(), ControllerError::EmptyMenu);
    }

    #[test]
    fn down_wraps_modulo_item_count() {
        for n in 1..=6 {
            let items = vec![MenuItem::Options; n];
            for k in 0..20 {
                let mut c = MenuController::new(items.clone()).unwrap();
                for _ in 0..k {
                    c.apply(MenuInput::Down);
                }
                assert_eq!(c.selection(), k % n, "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn up_wraps_modulo_item_count() {
        for n in 1..=6 {
            let items = vec![MenuItem::Options; n];
            for k in 0..20 {
                let mut c = MenuController::new(items.clone()).unwrap();
                for _ in 0..k {
                    c.apply(MenuInput::Up);
                }
                assert_eq!(c.selection(), (n - k % n) % n, "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn confirm_on_options_is_noop() {
        let mut c = MenuController::default();
        let t = run(&mut c, &[MenuInput::Down, MenuInput::Down, MenuInput::Confirm]);
        assert_eq!(t[2], Transition::None);
        assert_eq!(c.mode(), Mode::Menu);
        assert_eq!(c.selection(), 2);
    }

    #[test]
    fn confirm_on_new_game_enters_game() {
        let mut c = MenuController::default();
        assert_eq!(c.apply(MenuInput::Confirm), Transition::EnteredGame);
        assert_eq!(c.mode(), Mode::InGame);

        // Further confirms in game do nothing.
        assert_eq!(c.apply(MenuInput::Confirm), Transition::None);
        assert_eq!(c.mode(), Mode::InGame);
    }

    #[test]
    fn confirm_on_quit_requests_exit() {
        let mut c = MenuController::default();
        c.apply(MenuInput::Up);
        assert_eq!(c.selected_item(), MenuItem::Quit);
        assert_eq!(c.apply(MenuInput::Confirm), Transition::QuitRequested);
        assert_eq!(c.mode(), Mode::Menu);
        assert_eq!(c.selection(), 3);
    }

    #[test]
    fn navigation_ignored_in_game() {
        let mut c = MenuController::default();
        c.apply(MenuInput::Confirm);
        assert_eq!(c.apply(MenuInput::Down), Transition::None);
        assert_eq!(c.apply(MenuInput::Up), Transition::None);
        assert_eq!(c.selection(), 0);
    }

    #[test]
    fn cancel_returns_to_menu_keeping_selection() {
        let items = vec![MenuItem::Options, MenuItem::NewGame, MenuItem::Quit];
        let mut c = MenuController::new(items).unwrap();
        c.apply(MenuInput::Down);
        c.apply(MenuInput::Confirm);
        assert_eq!(c.mode(), Mode::InGame);

        assert_eq!(c.apply(MenuInput::Cancel), Transition::ReturnedToMenu);
        assert_eq!(c.mode(), Mode::Menu);
        assert_eq!(c.selection(), 1);
    }

    #[test]
    fn cancel_in_menu_is_noop() {
        let mut c = MenuController::default();
        c.apply(MenuInput::Down);
        assert_eq!(c.apply(MenuInput::Cancel), Transition::None);
        assert_eq!(c.mode(), Mode::Menu);
        assert_eq!(c.selection(), 1);
    }

    #[test]
    fn navigation_reports_endpoints() {
        let mut c = MenuController::default();
        assert_eq!(c.apply(MenuInput::Up), Transition::Navigated { from: 0, to: 3 });
        assert_eq!(c.apply(MenuInput::Down), Transition::Navigated { from: 3, to: 0 });
    }

    #[test]
    fn random_sequences_keep_selection_in_bounds() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
        let inputs = [
            MenuInput::Up,
            MenuInput::Down,
            MenuInput::Confirm,
            MenuInput::Cancel,
        ];

        for _ in 0..200 {
            let mut c = MenuController::default();
            for _ in 0..50 {
                let input = inputs[rng.gen_range(0..inputs.len())];
                let before = c.clone();
                let t = c.apply(input);
                assert!(c.selection() < c.items().len());
                match t {
                    Transition::EnteredGame => {
                        assert_eq!(before.mode(), Mode::Menu);
                        assert_eq!(before.selected_item(), MenuItem::NewGame);
                    }
                    Transition::ReturnedToMenu => {
                        assert_eq!(before.selection(), c.selection());
                    }
                    Transition::None | Transition::QuitRequested => {
                        assert_eq!(before.mode(), c.mode());
                        assert_eq!(before.selection(), c.selection());
                    }
                    Transition::Navigated { from, to } => {
                        assert_eq!(from, before.selection());
                        assert_eq!(to, c.selection());
                    }
                }
            }
        }
    }
}
