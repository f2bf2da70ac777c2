pub mod feedback;
pub mod health;
pub mod recipe;
pub mod recognition;
pub mod server;
