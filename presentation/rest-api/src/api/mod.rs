pub mod error;
pub mod favorite;
pub mod health;
pub mod ingredient;
pub mod links;
pub mod recipe;
pub mod relation;
pub mod security;
pub mod shopping_cart;
pub mod subscription;
pub mod tag;
pub mod tags;
pub mod user;
