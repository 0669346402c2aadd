#![deny(clippy::all)]
#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod error;
mod providers;
mod route;
mod screens;
mod state;
#[cfg(test)]
mod testing;
mod utils;

pub use app::{App, Provider, PROVIDER_ORDER};
pub use config::Config;
pub use error::Error;
pub use route::{Access, Chrome, Route};
