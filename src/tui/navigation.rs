//! # Navigation
//!
//! Owns the active screen and the list widget showing it. Key events go
//! through the key bindings first; quit and confirm are turned into core
//! actions, everything else falls through to the list.
//!
//! A screen change always builds a brand new list, sized to the last
//! known terminal, so no cursor or filter state leaks between screens.

use crossterm::event::KeyEvent;
use log::debug;

use crate::core::action::{Action, Effect, update};
use crate::core::menu::{Item, Screen};
use crate::core::state::App;
use crate::tui::components::MenuList;
use crate::tui::event::TuiEvent;
use crate::tui::keymap::{KeyAction, KeyBindings};
use crate::tui::theme::{Inset, Theme};

pub struct Navigator {
    app: App,
    list: MenuList<Item>,
    keys: KeyBindings,
    width: u16,
    height: u16,
    inset: Inset,
    show_help: bool,
}

impl Navigator {
    pub fn new(theme: &Theme) -> Self {
        let app = App::new();
        let keys = KeyBindings::default();
        let list = new_list(app.screen, &keys, theme.show_help, theme.list_inset, 0, 0);
        Self {
            app,
            list,
            keys,
            width: 0,
            height: 0,
            inset: theme.list_inset,
            show_help: theme.show_help,
        }
    }

    pub fn screen(&self) -> Screen {
        self.app.screen
    }

    pub fn list(&self) -> &MenuList<Item> {
        &self.list
    }

    /// Last terminal size seen through a resize event.
    pub fn terminal_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn handle_event(&mut self, event: TuiEvent) -> Effect {
        match event {
            TuiEvent::Resize { width, height } => {
                self.resize(width, height);
                Effect::None
            }
            TuiEvent::Key(key) => self.handle_key(key),
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let (list_width, list_height) = list_size(self.inset, width, height);
        self.list.resize(list_width, list_height);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Effect {
        let action = self.keys.resolve(&key);
        match action {
            Some(KeyAction::Quit) => update(&mut self.app, Action::Quit),
            Some(KeyAction::Confirm) => {
                let selected = self.list.selected_item().map(|item| item.id);
                let effect = update(&mut self.app, Action::Confirm(selected));
                match effect {
                    Effect::LoadScreen(screen) => self.load_screen(screen),
                    Effect::None => self.list.handle_key(&key, action),
                    Effect::Quit => {}
                }
                effect
            }
            _ => {
                self.list.handle_key(&key, action);
                Effect::None
            }
        }
    }

    fn load_screen(&mut self, screen: Screen) {
        debug!("Loading {:?} at terminal size {}x{}", screen, self.width, self.height);
        self.list = new_list(
            screen,
            &self.keys,
            self.show_help,
            self.inset,
            self.width,
            self.height,
        );
    }
}

fn list_size(inset: Inset, width: u16, height: u16) -> (i32, i32) {
    (i32::from(width) - inset.width, i32::from(height) - inset.height)
}

fn new_list(
    screen: Screen,
    keys: &KeyBindings,
    show_help: bool,
    inset: Inset,
    width: u16,
    height: u16,
) -> MenuList<Item> {
    let (list_width, list_height) = list_size(inset, width, height);
    let help = if show_help { keys.short_help() } else { Vec::new() };
    MenuList::new(screen.title(), screen.items(), list_width, list_height).with_help(help)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::MenuItem;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> TuiEvent {
        TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn sized() -> Navigator {
        let mut nav = Navigator::new(&Theme::default());
        nav.handle_event(TuiEvent::Resize { width: 80, height: 24 });
        nav
    }

    #[test]
    fn test_starts_on_main_menu() {
        let nav = Navigator::new(&Theme::default());
        assert_eq!(nav.screen(), Screen::MainMenu);
        assert_eq!(nav.list().items(), Screen::MainMenu.items().as_slice());
        assert_eq!(nav.list().cursor(), Some(0));
        assert_eq!(nav.terminal_size(), (0, 0));
    }

    #[test]
    fn test_resize_subtracts_frame_inset() {
        let nav = sized();
        assert_eq!(nav.terminal_size(), (80, 24));
        assert_eq!(nav.list().size(), (76, 18));
    }

    #[test]
    fn test_resize_smaller_than_inset_clamps() {
        let mut nav = sized();
        nav.handle_event(TuiEvent::Resize { width: 3, height: 2 });
        assert_eq!(nav.list().size(), (0, 0));
    }

    #[test]
    fn test_confirm_start_coding_loads_sub_menu() {
        let mut nav = sized();
        assert_eq!(nav.list().title(), "CozyCode");
        let effect = nav.handle_event(press(KeyCode::Enter));
        assert_eq!(effect, Effect::LoadScreen(Screen::SubMenu));
        assert_eq!(nav.screen(), Screen::SubMenu);
        assert_eq!(nav.list().title(), Screen::SubMenu.title());
        assert_eq!(nav.list().items(), Screen::SubMenu.items().as_slice());
        assert_eq!(nav.list().cursor(), Some(0));
        // New list is sized from the stored terminal size right away
        assert_eq!(nav.list().size(), (76, 18));
    }

    #[test]
    fn test_confirm_add_api_keys_loads_sub_menu() {
        let mut nav = sized();
        nav.handle_event(press(KeyCode::Char('j')));
        let effect = nav.handle_event(press(KeyCode::Enter));
        assert_eq!(effect, Effect::LoadScreen(Screen::SubMenu));
        assert_eq!(nav.list().selected_item().map(|item| item.id), Some(MenuItem::GroqLlm));
    }

    #[test]
    fn test_confirm_exit_quits() {
        let mut nav = sized();
        nav.handle_event(press(KeyCode::Down));
        nav.handle_event(press(KeyCode::Down));
        assert_eq!(nav.list().selected_item().map(|item| item.id), Some(MenuItem::Exit));
        assert_eq!(nav.handle_event(press(KeyCode::Enter)), Effect::Quit);
    }

    #[test]
    fn test_confirm_on_sub_menu_is_noop() {
        let mut nav = sized();
        nav.handle_event(press(KeyCode::Enter));
        assert_eq!(nav.handle_event(press(KeyCode::Enter)), Effect::None);
        assert_eq!(nav.screen(), Screen::SubMenu);
    }

    #[test]
    fn test_quit_keys_from_both_screens() {
        for quit in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut nav = sized();
            assert_eq!(nav.handle_event(TuiEvent::Key(quit)), Effect::Quit);

            let mut nav = sized();
            nav.handle_event(press(KeyCode::Enter));
            assert_eq!(nav.screen(), Screen::SubMenu);
            assert_eq!(nav.handle_event(TuiEvent::Key(quit)), Effect::Quit);
        }
    }

    #[test]
    fn test_transition_discards_filter() {
        let mut nav = sized();
        for c in "/api".chars() {
            nav.handle_event(press(KeyCode::Char(c)));
        }
        assert_eq!(nav.list().filter_text(), Some("api"));
        assert_eq!(
            nav.list().selected_item().map(|item| item.id),
            Some(MenuItem::AddApiKeys)
        );

        nav.handle_event(press(KeyCode::Enter));
        assert_eq!(nav.screen(), Screen::SubMenu);
        assert_eq!(nav.list().filter_text(), None);
    }

    #[test]
    fn test_quit_while_typing_filter() {
        let mut nav = sized();
        nav.handle_event(press(KeyCode::Char('/')));
        assert_eq!(nav.handle_event(press(KeyCode::Char('e'))), Effect::None);
        assert!(nav.list().is_editing_filter());
        assert_eq!(nav.list().filter_text(), Some("e"));

        assert_eq!(nav.handle_event(press(KeyCode::Char('q'))), Effect::Quit);
        // The quit key never reaches the filter
        assert_eq!(nav.list().filter_text(), Some("e"));
    }

    #[test]
    fn test_unmatched_filter_confirm_commits_filter() {
        let mut nav = sized();
        for c in "/xyz".chars() {
            nav.handle_event(press(KeyCode::Char(c)));
        }
        assert_eq!(nav.list().selected_item(), None);
        assert_eq!(nav.handle_event(press(KeyCode::Enter)), Effect::None);
        assert_eq!(nav.screen(), Screen::MainMenu);
        assert!(!nav.list().is_editing_filter());
    }

    #[test]
    fn test_reserved_add_key_does_nothing() {
        let mut nav = sized();
        assert_eq!(nav.handle_event(press(KeyCode::Char('a'))), Effect::None);
        assert_eq!(nav.screen(), Screen::MainMenu);
        assert_eq!(nav.list().cursor(), Some(0));
    }

    #[test]
    fn test_help_can_be_hidden() {
        let theme = Theme {
            show_help: false,
            ..Theme::default()
        };
        let mut nav = Navigator::new(&theme);
        nav.handle_event(TuiEvent::Resize { width: 80, height: 24 });
        assert!(!nav.list().render_text(&theme).contains("quit"));
        assert!(sized().list().render_text(&Theme::default()).contains("q quit"));
    }
}
