pub mod products;
pub mod store;
