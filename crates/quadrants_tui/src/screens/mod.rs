//! Screens of the TUI state machine.

mod history_view;
mod how_to_play;
mod in_game;
mod main_menu;
mod name_entry;

pub use history_view::HistoryViewScreen;
pub use how_to_play::HowToPlayScreen;
pub use in_game::InGameScreen;
pub use main_menu::MainMenuScreen;
pub use name_entry::NameEntryScreen;
