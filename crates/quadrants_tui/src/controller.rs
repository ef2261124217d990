//! Controller - the state machine driving the multi-screen TUI.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::history::HistoryStore;
use crate::screen::{Screen, ScreenTransition};
use crate::screens::{
    HistoryViewScreen, HowToPlayScreen, InGameScreen, MainMenuScreen, NameEntryScreen,
};

/// Active screen in the TUI state machine.
#[derive(Debug)]
enum ActiveScreen {
    MainMenu(MainMenuScreen),
    NameEntry(NameEntryScreen),
    InGame(InGameScreen),
    HowToPlay(HowToPlayScreen),
    History(HistoryViewScreen),
}

/// Controller that drives the screen state machine.
///
/// Call [`Controller::run`] to start the event loop.
#[derive(Debug)]
pub struct Controller {
    history: HistoryStore,
}

impl Controller {
    /// Creates a new controller around a loaded history store.
    #[instrument(skip(history))]
    pub fn new(history: HistoryStore) -> Self {
        info!("Creating controller");
        Self { history }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        let mut screen = ActiveScreen::MainMenu(MainMenuScreen::new());

        loop {
            terminal.draw(|frame| match &screen {
                ActiveScreen::MainMenu(s) => s.render(frame, &self.history),
                ActiveScreen::NameEntry(s) => s.render(frame, &self.history),
                ActiveScreen::InGame(s) => s.render(frame, &self.history),
                ActiveScreen::HowToPlay(s) => s.render(frame, &self.history),
                ActiveScreen::History(s) => s.render(frame, &self.history),
            })?;

            // Poll with a short timeout to keep the loop responsive.
            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::MainMenu(s) => s.handle_key(key, &mut self.history),
                    ActiveScreen::NameEntry(s) => s.handle_key(key, &mut self.history),
                    ActiveScreen::InGame(s) => s.handle_key(key, &mut self.history),
                    ActiveScreen::HowToPlay(s) => s.handle_key(key, &mut self.history),
                    ActiveScreen::History(s) => s.handle_key(key, &mut self.history),
                };

                screen = match Self::apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("Quitting");
                        return Ok(());
                    }
                };
            }
        }
    }

    /// Applies a screen transition, returning the next screen or `None`
    /// to quit.
    fn apply_transition(transition: ScreenTransition, current: ActiveScreen) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),
            ScreenTransition::GoToMainMenu => Some(ActiveScreen::MainMenu(MainMenuScreen::new())),
            ScreenTransition::GoToNameEntry => {
                Some(ActiveScreen::NameEntry(NameEntryScreen::new()))
            }
            ScreenTransition::GoToHowToPlay => {
                Some(ActiveScreen::HowToPlay(HowToPlayScreen::new()))
            }
            ScreenTransition::GoToHistory => Some(ActiveScreen::History(HistoryViewScreen::new())),
            ScreenTransition::StartGame { player_a, player_b } => {
                info!(%player_a, %player_b, "Starting game");
                Some(ActiveScreen::InGame(InGameScreen::new(player_a, player_b)))
            }
            ScreenTransition::Quit => None,
        }
    }
}
