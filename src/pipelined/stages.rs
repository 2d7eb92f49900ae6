//! 5 stages of the pipeline.
//! Every stage reads only from `current` and writes only into `next`.

use tracing::debug;
use tracing::trace;

use super::pipeline::WBENDRegister;
use crate::alu::alu;
use crate::cpu::MachineState;
use crate::error::ExecutionError;
use crate::error::SimulatorResult;
use crate::instruction::Instruction;
use crate::instruction::Opcode;
use crate::instruction::NOOP;

/// IF stage.
/// A pc outside memory fetches a noop; only a halt's shadow can get there,
/// and those words never retire.
pub fn instruction_fetch(current: &MachineState, next: &mut MachineState) {
    let pc = current.pc;
    let raw_inst = current.instr_mem.get(pc).unwrap_or_else(|| {
        trace!(pc, "fetch outside memory");
        NOOP.raw()
    });
    let inst = Instruction::new(raw_inst);

    trace!(pc, %inst, "fetch");

    next.pipeline.if_id.inst = inst;
    next.pipeline.if_id.pc_plus_1 = pc.wrapping_add(1);
    next.pc = pc.wrapping_add(1);
}

/// ID stage
pub fn instruction_decode(current: &MachineState, next: &mut MachineState) {
    let pipeline = &current.pipeline;
    let inst = pipeline.if_id.inst;

    next.pipeline.id_ex.inst = inst;
    next.pipeline.id_ex.pc_plus_1 = pipeline.if_id.pc_plus_1;

    if pipeline.load_hazard() {
        // Insert a bubble and replay this fetch next cycle.
        // A taken branch in MEM squashes the bubble before it counts.
        debug!(
            cycle = current.cycles,
            load = %pipeline.id_ex.inst,
            %inst,
            "load-use stall"
        );
        next.pipeline.id_ex.inst = NOOP;
        next.pipeline.if_id = pipeline.if_id;
        next.pc = current.pc;
        if !pipeline.branch_taken() {
            next.history.stall_count = next.history.stall_count.wrapping_add(1);
        }
        return;
    }

    next.pipeline.id_ex.val_a = current.reg[inst.field0()].read();
    next.pipeline.id_ex.val_b = current.reg[inst.field1()].read();
    next.pipeline.id_ex.offset = inst.offset();
}

/// EX stage
pub fn execute(current: &MachineState, next: &mut MachineState) {
    let id_ex = &current.pipeline.id_ex;
    let inst = id_ex.inst;
    let operands = current.pipeline.forward_operands();

    if let Some(source) = operands.source_a {
        debug!(cycle = current.cycles, %inst, ?source, value = operands.val_a, "forward regA");
    }
    if let Some(source) = operands.source_b {
        debug!(cycle = current.cycles, %inst, ?source, value = operands.val_b, "forward regB");
    }

    let ex_mem = &mut next.pipeline.ex_mem;
    ex_mem.inst = inst;
    if let Some(result) =
        alu(inst.opcode(), operands.val_a, operands.val_b, id_ex.offset)
    {
        ex_mem.alu_result = result;
    }
    if !inst.is(Opcode::Noop) {
        ex_mem.val_b = operands.val_b;
    }
    ex_mem.branch_target = id_ex.pc_plus_1.wrapping_add(id_ex.offset);
    ex_mem.eq = operands.val_a == operands.val_b;
}

/// MEM stage
pub fn memory_access(
    current: &MachineState,
    next: &mut MachineState,
) -> SimulatorResult<()> {
    let ex_mem = &current.pipeline.ex_mem;
    let inst = ex_mem.inst;
    let address = ex_mem.alu_result;
    let out_of_bounds =
        || ExecutionError::DataOutOfBounds { address, cycle: current.cycles };

    next.pipeline.mem_wb.inst = inst;

    use Opcode::*;
    match inst.opcode() {
        Some(Lw) => {
            next.pipeline.mem_wb.write_data =
                current.data_mem.get(address).ok_or_else(out_of_bounds)?;
        }
        Some(Sw) => {
            next.data_mem
                .set(address, ex_mem.val_b)
                .ok_or_else(out_of_bounds)?;
            debug!(cycle = current.cycles, address, value = ex_mem.val_b, "store");
        }
        Some(Beq) => {
            if current.pipeline.branch_taken() {
                // Taken: flush everything younger than the branch
                debug!(
                    cycle = current.cycles,
                    target = ex_mem.branch_target,
                    "branch taken, squashing"
                );
                next.pc = ex_mem.branch_target;
                next.pipeline.if_id.inst = NOOP;
                next.pipeline.id_ex.inst = NOOP;
                next.pipeline.ex_mem.inst = NOOP;
                next.history.squash_count = next.history.squash_count.wrapping_add(1);
            }
        }
        Some(Noop | Halt) => {}
        _ => next.pipeline.mem_wb.write_data = ex_mem.alu_result,
    }

    Ok(())
}

/// WB stage
pub fn write_back(current: &MachineState, next: &mut MachineState) {
    let mem_wb = current.pipeline.mem_wb;

    next.pipeline.wb_end =
        WBENDRegister { inst: mem_wb.inst, write_data: mem_wb.write_data };

    if let Some(dest) = mem_wb.inst.dest_reg() {
        debug!(cycle = current.cycles, dest, value = mem_wb.write_data, "write back");
        next.reg[dest].write(mem_wb.write_data);
    }

    if !mem_wb.inst.is(Opcode::Noop) {
        next.history.inst_count = next.history.inst_count.wrapping_add(1);
    }
}
