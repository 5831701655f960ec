//! Fatal error types.
//!
//! The error model is fatal-only: a malformed invocation, unreadable or
//! unparsable machine-code file, or an unsupported instruction terminates
//! the run. There are no recoverable paths once simulation has started.

use thiserror::Error;

/// Errors raised while reading a machine-code file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("can't open file {path}: {source}")]
    Open {
        /// Path as given on the command line.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line failed to parse as a hexadecimal 32-bit word.
    #[error("error in reading address {0}")]
    BadWord(usize),

    /// Failure writing the instruction-memory listing.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("can't read config file {path}: {source}")]
    Read {
        /// Path as given on the command line.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Fatal errors raised during simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program counter left the addressable instruction memory.
    #[error("pc {0} is outside instruction memory (limit {1})")]
    PcOutOfRange(i32, usize),

    /// A load or store address left the addressable data memory.
    #[error("data address {0} is outside data memory (limit {1})")]
    AddressOutOfRange(i32, usize),

    /// A `jalr` instruction reached the decode stage. The pipelined core
    /// does not implement register-indirect jumps; failing loudly here is
    /// preferred over guessing a silent behavior.
    #[error("jalr (word 0x{0:08X}) is not implemented by the pipelined core")]
    UnsupportedJalr(u32),

    /// Failure writing the state trace.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
