//! Error types.

use std::{io, path};

use thiserror::Error;

use crate::shader::Kind;

/// Failure to produce a usable [`Program`].
///
/// [`Program`]: ../program/struct.Program.html
#[derive(Debug, Error)]
pub enum Error {
    /// A shader source file is missing, unreadable or not UTF-8.
    #[error("failed to read shader source `{}`", .path.display())]
    Read {
        /// The file that could not be read.
        path: path::PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A shader source file exceeds the size sanity bound.
    #[error("shader source `{}` is {len} bytes, over the {max} byte limit", .path.display())]
    TooLarge {
        /// The offending file.
        path: path::PathBuf,

        /// The size of the file in bytes.
        len: u64,

        /// The limit it exceeded.
        max: u64,
    },

    /// Shader source contains an interior NUL byte.
    #[error("{kind} shader source contains an interior NUL byte")]
    Nul {
        /// The stage the source was meant for.
        kind: Kind,
    },

    /// A shader stage failed to compile.
    #[error("{kind} shader failed to compile: {log}")]
    Compile {
        /// The stage that failed.
        kind: Kind,

        /// The driver's info log.
        log: String,
    },

    /// The program failed to link.
    #[error("program failed to link: {log}")]
    Link {
        /// The driver's info log.
        log: String,
    },
}

impl Error {
    /// Returns `true` if the error occurred while loading a source file,
    /// before any driver call was made.
    pub fn is_load(&self) -> bool {
        match *self {
            Error::Read { .. } | Error::TooLarge { .. } => true,
            _ => false,
        }
    }
}
