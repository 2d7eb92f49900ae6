//! Pipelined implementation

use std::io::Write;

use tracing::info;
use tracing::trace;

use crate::cpu::MachineState;
use crate::error::SimulatorResult;
use crate::instruction::Opcode;
use crate::report;

pub mod pipeline;
pub mod stages;

/// Computes the state after one clock cycle.
/// `current` is left untouched; all stages observe only pre-cycle values.
pub fn step(current: &MachineState) -> SimulatorResult<MachineState> {
    let mut next = current.clone();
    next.cycles = next.cycles.wrapping_add(1);

    stages::instruction_fetch(current, &mut next);
    stages::instruction_decode(current, &mut next);
    stages::execute(current, &mut next);
    // MEM runs after IF/ID/EX so that a taken branch overrides them
    stages::memory_access(current, &mut next)?;
    stages::write_back(current, &mut next);

    Ok(next)
}

/// Whether a halt has reached the MEM/WB register
pub fn halted(state: &MachineState) -> bool {
    state.pipeline.mem_wb.inst.is(Opcode::Halt)
}

/// Runs until halt, reporting every state before it is advanced.
/// Returns the final state.
pub fn run(
    mut state: MachineState,
    out: &mut impl Write,
) -> SimulatorResult<MachineState> {
    while !halted(&state) {
        report::write_state(out, &state)?;
        trace!(cycle = state.cycles, pc = state.pc, "new cycle");
        state = step(&state)?;
    }

    info!(cycles = state.cycles, "machine halted");
    report::write_halt(out, &state)?;
    Ok(state)
}
