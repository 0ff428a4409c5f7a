//! Widgets drawn by the folder picker

mod footer;
mod help_overlay;
mod item_list;
mod search_bar;

pub use footer::{Footer, FooterText};
pub use help_overlay::HelpOverlay;
pub use item_list::ItemList;
pub use search_bar::SearchBar;
