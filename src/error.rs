use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the simulator
#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("{0}")]
    LoadError(#[from] LoadError),

    #[error("{0}")]
    ExecutionError(#[from] ExecutionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors related to reading the machine-code file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("can't open file {0}: {1}")]
    FileOpenError(PathBuf, #[source] std::io::Error),

    #[error("error in reading address {address}: {line:?} is not an integer")]
    ParseError { address: usize, line: String },

    #[error("program of {0} words does not fit in {1} words of memory")]
    ProgramTooLarge(usize, usize),
}

/// Errors raised while the pipeline is running
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("data memory access out of bounds: address {address} (cycle {cycle})")]
    DataOutOfBounds { address: i32, cycle: u32 },
}

/// Type alias for Result with SimulatorError
pub type SimulatorResult<T> = Result<T, SimulatorError>;
