use super::{Lookup, XenosError};
use tonic::{Code, Status};

/// The result of a single RPC, classified by the status codes that lookups treat specially.
#[derive(Debug)]
pub(crate) enum Outcome<T> {
    Found(T),
    NotFound,
    Unavailable(Status),
    Failed(Status),
}

impl<T> From<Result<T, Status>> for Outcome<T> {
    fn from(result: Result<T, Status>) -> Self {
        match result {
            Ok(value) => Outcome::Found(value),
            Err(status) => match status.code() {
                Code::NotFound => Outcome::NotFound,
                Code::Unavailable => Outcome::Unavailable(status),
                _ => Outcome::Failed(status),
            },
        }
    }
}

impl<T> Outcome<T> {
    /// Applies the lookup contract: not found is an absent value, unavailability is fatal and
    /// every other status is passed through unchanged.
    pub(crate) fn into_lookup(self, lookup: Lookup) -> Result<Option<T>, XenosError> {
        match self {
            Outcome::Found(value) => Ok(Some(value)),
            Outcome::NotFound => Ok(None),
            Outcome::Unavailable(status) => Err(XenosError::Unavailable { lookup, status }),
            Outcome::Failed(status) => Err(XenosError::Status(status)),
        }
    }
}
