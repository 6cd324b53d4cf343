pub mod api;
pub mod config;
pub mod console;
pub mod controller;
pub mod entities;
pub mod error;
pub mod event_loop;
pub mod external;

#[cfg(test)]
mod testing;
