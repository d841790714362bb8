pub mod admin;
pub mod auth;
pub mod cart;
pub mod health;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod user;

mod router;
pub use router::get_router;

#[cfg(test)]
mod tests;
