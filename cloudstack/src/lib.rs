//! Client for the Apache CloudStack management API.
//!
//! Commands are typed parameter structs implementing [`api::Command`]. The
//! [`Client`] signs them, sends reads as GET and mutations as POST, waits
//! for asynchronous jobs when running in async mode and decodes the result.
//!
//! ```no_run
//! use cloudstack::api::account::ListAccounts;
//! use cloudstack::Client;
//!
//! # async fn run() -> Result<(), cloudstack::ApiError> {
//! let client = Client::new("https://cloud.example.com/client/api", "key", "secret")?;
//! let accounts = client.account().list_accounts(&ListAccounts::default()).await?;
//! println!("{} accounts", accounts.count);
//! # Ok(())
//! # }
//! ```

pub mod api;

pub use api::{ApiError, Client, ClientConfig};
