//! Errors.
use snafu::prelude::*;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Expected {expected} components, found {actual}"))]
    LengthMismatch { expected: usize, actual: usize },
}
