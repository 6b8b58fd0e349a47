pub mod config;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod state;

pub use state::AppState;
