//! LC-2K machine state

use std::sync::Arc;

use crate::error::LoadError;
use crate::instruction::NUM_REGS;
use crate::memory::WordMemory;
use crate::memory::NUM_MEMORY;
use crate::pipelined::pipeline::PipelineState;

/// Snapshot of the whole machine at a cycle boundary
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineState {
    /// Program counter
    pub pc: i32,
    /// Instruction memory, never written after loading
    pub instr_mem: Arc<WordMemory>,
    /// Data memory
    pub data_mem: WordMemory,
    /// Number of words loaded from the machine-code file
    pub num_memory: usize,
    /// General purpose registers
    pub reg: [Register; NUM_REGS],
    /// Pipeline registers
    pub pipeline: PipelineState,
    /// Cycles run so far
    pub cycles: u32,
    /// Run statistics
    pub history: CPUHistory,
}

impl MachineState {
    /// Reset state with `program` loaded into both memories
    pub fn with_program(program: &[i32]) -> Result<Self, LoadError> {
        let too_large = || LoadError::ProgramTooLarge(program.len(), NUM_MEMORY);
        let instr_mem = WordMemory::with_image(program).ok_or_else(too_large)?;
        let data_mem = instr_mem.clone();
        Ok(Self {
            pc: 0,
            instr_mem: Arc::new(instr_mem),
            data_mem,
            num_memory: program.len(),
            reg: [Register::default(); NUM_REGS],
            pipeline: PipelineState::default(),
            cycles: 0,
            history: CPUHistory::default(),
        })
    }

    /// Register values as plain integers
    pub fn registers(&self) -> [i32; NUM_REGS] {
        self.reg.map(|r| r.read())
    }

    /// The loaded portion of data memory
    pub fn data_words(&self) -> &[i32] {
        self.data_mem.prefix(self.num_memory)
    }
}

/// Register file simulation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Register {
    /// Current data in the register
    data: i32,
}

impl Register {
    /// Reads the register
    pub fn read(&self) -> i32 {
        self.data
    }

    /// Writes to register
    pub fn write(&mut self, value: i32) {
        self.data = value;
    }
}

/// Simulator policy
#[derive(Clone, Copy, Debug, Default)]
pub struct CPUPolicy {
    pub verbose: bool,
    pub history: bool,
}

/// History module
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CPUHistory {
    /// Instructions that left the writeback stage, bubbles excluded
    pub inst_count: u32,
    /// Load-use bubbles inserted
    pub stall_count: u32,
    /// Taken branches that flushed the pipeline
    pub squash_count: u32,
}

impl CPUHistory {
    /// Cycles per retired instruction
    pub fn cpi(&self, cycles: u32) -> f64 {
        if self.inst_count == 0 {
            return 0.;
        }
        cycles as f64 / self.inst_count as f64
    }
}
