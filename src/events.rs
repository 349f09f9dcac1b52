mod page;
mod rail;

pub use page::{wire_hover_items, wire_page_inputs};
pub use rail::wire_journal_rail;
