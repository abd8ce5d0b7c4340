//! CloudStack API client and services

pub mod account;
pub mod async_job;
pub mod client;
pub mod command;
pub mod common;
pub mod error;
pub mod kubernetes;
pub mod ldap;
pub mod load_balancer;
pub mod lookup;
pub mod options;
pub mod params;
pub mod response;
pub mod signer;
pub mod transport;
pub mod user;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use async_job::JobStatus;
pub use client::{Client, ClientConfig};
pub use command::Command;
pub use common::{JobResponse, SuccessResponse};
pub use error::ApiError;
pub use lookup::{ListCommand, NamedEntity};
pub use options::RequestHook;
pub use params::{split_list, MapEncoding, Params};
pub use signer::{HmacSigner, RequestSigner};
pub use transport::TransportConfig;
