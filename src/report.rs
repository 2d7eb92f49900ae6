//! Fixed-format state dump, written before every cycle and after halting.
//! Fields that mean nothing for the opcode in flight are tagged
//! `(Don't Care)`.

use std::io;
use std::io::Write;

use crate::cpu::MachineState;
use crate::instruction::Instruction;
use crate::instruction::Opcode;

const DONT_CARE: &str = " (Don't Care)";

fn tag(dont_care: bool) -> &'static str {
    if dont_care {
        DONT_CARE
    } else {
        ""
    }
}

/// One `instrMem` line per loaded word
pub fn write_program(out: &mut impl Write, program: &[i32]) -> io::Result<()> {
    writeln!(out, "instruction memory:")?;
    for (address, &word) in program.iter().enumerate() {
        writeln!(
            out,
            "\tinstrMem[ {} ]\t= 0x{:08x}\t= {}\t= {}",
            address,
            word as u32,
            word,
            Instruction::new(word)
        )?;
    }
    Ok(())
}

fn write_instruction(out: &mut impl Write, inst: Instruction) -> io::Result<()> {
    writeln!(out, "\t\tinstruction = {} ( {} )", inst.raw(), inst)
}

/// Dumps the whole machine state
pub fn write_state(out: &mut impl Write, state: &MachineState) -> io::Result<()> {
    use Opcode::*;

    writeln!(out, "\n@@@")?;
    writeln!(out, "state before cycle {} starts:", state.cycles)?;
    writeln!(out, "\tpc = {}", state.pc)?;

    writeln!(out, "\tdata memory:")?;
    for (address, value) in state.data_words().iter().enumerate() {
        writeln!(out, "\t\tdataMem[ {} ] = {}", address, value)?;
    }
    writeln!(out, "\tregisters:")?;
    for (index, value) in state.registers().iter().enumerate() {
        writeln!(out, "\t\treg[ {} ] = {}", index, value)?;
    }

    let pipeline = &state.pipeline;

    let if_id = &pipeline.if_id;
    writeln!(out, "\tIF/ID pipeline register:")?;
    write_instruction(out, if_id.inst)?;
    writeln!(
        out,
        "\t\tpcPlus1 = {}{}",
        if_id.pc_plus_1,
        tag(if_id.inst.is(Noop))
    )?;

    let id_ex = &pipeline.id_ex;
    let op = id_ex.inst.opcode();
    writeln!(out, "\tID/EX pipeline register:")?;
    write_instruction(out, id_ex.inst)?;
    writeln!(out, "\t\tpcPlus1 = {}{}", id_ex.pc_plus_1, tag(op == Some(Noop)))?;
    writeln!(
        out,
        "\t\treadRegA = {}{}",
        id_ex.val_a,
        tag(!matches!(op, Some(Add | Nor | Lw | Sw | Beq | Jalr)))
    )?;
    writeln!(
        out,
        "\t\treadRegB = {}{}",
        id_ex.val_b,
        tag(!matches!(op, Some(Add | Nor | Sw | Beq)))
    )?;
    writeln!(
        out,
        "\t\toffset = {}{}",
        id_ex.offset,
        tag(!matches!(op, Some(Lw | Sw | Beq)))
    )?;

    let ex_mem = &pipeline.ex_mem;
    let op = ex_mem.inst.opcode();
    writeln!(out, "\tEX/MEM pipeline register:")?;
    write_instruction(out, ex_mem.inst)?;
    writeln!(
        out,
        "\t\tbranchTarget {}{}",
        ex_mem.branch_target,
        tag(op != Some(Beq))
    )?;
    writeln!(
        out,
        "\t\teq ? {}{}",
        if ex_mem.eq { "True" } else { "False" },
        tag(op != Some(Beq))
    )?;
    writeln!(
        out,
        "\t\taluResult = {}{}",
        ex_mem.alu_result,
        tag(!matches!(op, Some(Add | Nor | Lw | Sw)))
    )?;
    writeln!(out, "\t\treadRegB = {}{}", ex_mem.val_b, tag(op != Some(Sw)))?;

    let mem_wb = &pipeline.mem_wb;
    writeln!(out, "\tMEM/WB pipeline register:")?;
    write_instruction(out, mem_wb.inst)?;
    writeln!(
        out,
        "\t\twriteData = {}{}",
        mem_wb.write_data,
        tag(!matches!(mem_wb.inst.opcode(), Some(Add | Nor | Lw)))
    )?;

    let wb_end = &pipeline.wb_end;
    writeln!(out, "\tWB/END pipeline register:")?;
    write_instruction(out, wb_end.inst)?;
    writeln!(
        out,
        "\t\twriteData = {}{}",
        wb_end.write_data,
        tag(!matches!(wb_end.inst.opcode(), Some(Add | Nor | Lw)))
    )?;

    writeln!(out, "end state")
}

/// Summary and final state after halting
pub fn write_halt(out: &mut impl Write, state: &MachineState) -> io::Result<()> {
    writeln!(out, "Machine halted")?;
    writeln!(out, "Total of {} cycles executed", state.cycles)?;
    writeln!(out, "Final state of machine:")?;
    write_state(out, state)
}
