pub mod cli;
pub mod io;
pub mod patient;
pub mod schema;
pub mod score;
pub mod store;
pub mod study;
