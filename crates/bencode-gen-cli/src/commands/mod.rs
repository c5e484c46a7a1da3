pub mod check;
pub mod dump;
pub mod generate;
pub mod output;
pub mod schema_loader;
