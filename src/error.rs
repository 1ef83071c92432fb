// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// User specified an option that no registered option matches.
    ///
    /// This includes the degenerate forms `-` and `--`.
    #[error("unknown option")]
    UnknownOpt,

    /// User specified a non-option argument where an option was expected.
    #[error("positional arguments not allowed")]
    NoPosnArgs,

    /// Option argument was not specified for an option that requires one.
    #[error("missing option argument")]
    MissingOptArg,

    //------------------------------
    // Caller errors
    //------------------------------
    /// An option callback rejected its option.
    #[error("handler error: {0}")]
    HandlerError(String),

    /// Failed to write the usage statement.
    #[error("failed to write usage: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
