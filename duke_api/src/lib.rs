//! Client library for the Duke demographic data API.
//!
//! Log in once with [`Client::connect`], then list states, measures and
//! measure years, or run a [`CubeQuery`] for demographic rows.

mod client;
pub mod config;
mod errors;
mod query;
mod session;
pub mod types;
pub use self::client::Client;
pub use self::config::Config;
pub use self::errors::Error;
pub use self::query::{CubeQuery, MeasureYearsQuery, Query};
