pub mod auth;
pub mod clients;
pub mod inventory;
pub mod pages;
pub mod products;
