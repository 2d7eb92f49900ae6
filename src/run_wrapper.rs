//! A simulator wrapper

use std::io::Write;
use std::path::Path;

use crate::cpu::CPUPolicy;
use crate::cpu::MachineState;
use crate::error::SimulatorResult;
use crate::loader;
use crate::pipelined;
use crate::report;

/// Run simulation on the given machine-code file, writing the trace to
/// `out`, and return the final state
pub fn run(
    path: &Path,
    policy: CPUPolicy,
    out: &mut impl Write,
) -> SimulatorResult<MachineState> {
    let state = loader::load_machine(path)?;
    report::write_program(out, state.data_words())?;

    let state = pipelined::run(state, out)?;

    if policy.history {
        let history = &state.history;
        eprintln!("[HISTORY] # cycles = {}", state.cycles);
        eprintln!("[HISTORY] # instructions = {}", history.inst_count);
        eprintln!(
            "[HISTORY] # load-use stalls = {}, # branch squashes = {}",
            history.stall_count, history.squash_count
        );
        eprintln!("[HISTORY] CPI = {:.2}", history.cpi(state.cycles));
    }

    Ok(state)
}
