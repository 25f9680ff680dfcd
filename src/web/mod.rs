//! Web module - page layout, callback routing and the HTTP server

mod callbacks;
mod layout;
mod page;
mod server;

pub use server::{router, AppState};
