use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The output verbosity level, from least to most verbose.
///
/// The [`Display`] value is a valid `RUST_LOG` filter.
///
/// ```rust
/// use strchive::Verbosity;
///
/// assert_eq!(Verbosity::default().to_string(), "info");
/// assert_eq!(Verbosity::Debug.to_string(), "debug");
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, ValueEnum)]
pub enum Verbosity {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let filter = match self {
            Verbosity::Error => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        };
        write!(f, "{filter}")
    }
}
