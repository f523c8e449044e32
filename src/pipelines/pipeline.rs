//! Pipeline trait.
use crate::error::Error;

/// Implemented by every pipeline.
///
/// Generic over the return type so that a pipeline can report
/// what it did (see [super::Summary]).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
