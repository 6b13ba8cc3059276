pub mod table;

pub use table::SectionDisplay;
