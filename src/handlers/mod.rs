pub mod app;
pub mod echo;
pub mod health;
pub mod metrics;
pub mod users;
