pub mod client;
pub mod collector;
pub mod error;
pub mod sensor;
pub mod store;
