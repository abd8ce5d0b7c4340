//! Static description of a CloudStack command

use serde::de::DeserializeOwned;

use super::params::Params;

/// A single API command: its name, how it travels and what it returns.
pub trait Command {
    /// Command name as sent in the `command` parameter
    const NAME: &'static str;

    /// Mutating commands are sent as a POST form, everything else as GET.
    const MUTATING: bool;

    /// The server answers with a job id and finishes the work in the
    /// background.
    const ASYNC: bool = false;

    /// The payload sits one level deeper than the envelope, under a single
    /// entity key such as `account`. For async commands this applies to the
    /// job result.
    const UNWRAP_RAW: bool = false;

    type Response: DeserializeOwned;

    /// Encode only the parameters that are set.
    fn to_params(&self) -> Params;
}
