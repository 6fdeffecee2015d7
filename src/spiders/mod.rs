pub mod population;
pub mod title;

pub use population::{PopulationSpider, TableReport};
pub use title::{extract_titles, TitleRecord, TitleSpider};
