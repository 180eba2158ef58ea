pub mod agenda;
pub mod datetime;
pub mod event;
pub mod grid;
pub mod store;
