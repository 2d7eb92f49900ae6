//! Utility functions for preparing the machine for execution

use std::fs;
use std::path::Path;

use tracing::info;

use crate::cpu::MachineState;
use crate::error::LoadError;
use crate::error::SimulatorResult;

/// Parses machine code: one decimal word per line, starting at address 0
pub fn parse_machine_code(content: &str) -> Result<Vec<i32>, LoadError> {
    content
        .lines()
        .enumerate()
        .map(|(address, line)| {
            line.trim().parse::<i32>().map_err(|_| LoadError::ParseError {
                address,
                line: line.to_owned(),
            })
        })
        .collect()
}

/// Reads a machine-code file
pub fn read_machine_code(path: &Path) -> SimulatorResult<Vec<i32>> {
    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::FileOpenError(path.to_owned(), e))?;
    let program = parse_machine_code(&content)?;
    info!(path = %path.display(), words = program.len(), "loaded machine code");
    Ok(program)
}

/// Reset machine state holding the program in `path`
pub fn load_machine(path: &Path) -> SimulatorResult<MachineState> {
    let program = read_machine_code(path)?;
    Ok(MachineState::with_program(&program)?)
}
