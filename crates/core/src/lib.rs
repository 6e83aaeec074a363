pub mod catalog;
pub mod filter;
pub mod model;
pub mod progress;

pub use catalog::Catalog;
