use crate::game::Game;
use crate::menu::SettingsMenu;
use crate::options::TickInterval;
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    state: AppState,
}

impl App {
    pub(crate) fn new(tick_interval: TickInterval) -> App {
        let state = AppState::Settings(SettingsMenu::new(tick_interval));
        App { state }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.state {
            AppState::Settings(ref menu) => {
                terminal.draw(|frame| menu.draw(frame))?;
            }
            AppState::Game(ref mut game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            AppState::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        let next = match self.state {
            AppState::Settings(ref mut menu) => menu.process_input()?,
            AppState::Game(ref mut game) => game.process_input()?,
            AppState::Quit => None,
        };
        if let Some(state) = next {
            log::debug!("Switching to {} screen", state.name());
            self.state = state;
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.state, AppState::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum AppState {
    Settings(SettingsMenu),
    Game(Game),
    Quit,
}

impl AppState {
    fn name(&self) -> &'static str {
        match self {
            AppState::Settings(_) => "settings",
            AppState::Game(_) => "game",
            AppState::Quit => "quit",
        }
    }
}
