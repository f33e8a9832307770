pub mod user_repo;
pub use user_repo::UserRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
