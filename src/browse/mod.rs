pub mod categories;
pub mod commands;
pub mod state;

pub use categories::{quick_categories, QuickCategory};
pub use state::BrowseState;
