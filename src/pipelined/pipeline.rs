//! Pipeline state, hazard detection and forwarding
use crate::instruction::Instruction;
use crate::instruction::Opcode;

/// Pipeline state = 5 pipeline registers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineState {
    pub if_id: IFIDRegister,
    pub id_ex: IDEXRegister,
    pub ex_mem: EXMEMRegister,
    pub mem_wb: MEMWBRegister,
    pub wb_end: WBENDRegister,
}

/// Pipeline register a forwarded value comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardSource {
    ExMem,
    MemWb,
    WbEnd,
}

/// ALU operands after forwarding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operands {
    pub val_a: i32,
    pub val_b: i32,
    /// Where `val_a` was forwarded from, if it was
    pub source_a: Option<ForwardSource>,
    /// Where `val_b` was forwarded from, if it was
    pub source_b: Option<ForwardSource>,
}

impl PipelineState {
    /// Load-use hazard:
    /// the instruction in ID/EX is a lw whose destination is read by the
    /// instruction waiting in IF/ID.
    pub fn load_hazard(&self) -> bool {
        let load = self.id_ex.inst;
        load.is(Opcode::Lw) && self.if_id.inst.reads(load.field1())
    }

    /// A beq in EX/MEM that compared equal; MEM redirects and squashes
    pub fn branch_taken(&self) -> bool {
        self.ex_mem.inst.is(Opcode::Beq) && self.ex_mem.eq
    }

    /// Operands for the instruction in ID/EX, with values still in flight
    /// in EX/MEM, MEM/WB and WB/END overriding the register reads.
    /// Producers are applied farthest first so the nearest one wins.
    pub fn forward_operands(&self) -> Operands {
        use ForwardSource::*;

        let consumer = self.id_ex.inst;
        let mut operands = Operands {
            val_a: self.id_ex.val_a,
            val_b: self.id_ex.val_b,
            source_a: None,
            source_b: None,
        };

        let producers = [
            (WbEnd, self.wb_end.inst, self.wb_end.write_data),
            (MemWb, self.mem_wb.inst, self.mem_wb.write_data),
            // MEM has not run yet for this one
            (ExMem, self.ex_mem.inst, self.ex_mem.alu_result),
        ];
        for (source, producer, value) in producers {
            let Some(dest) = producer.dest_reg() else {
                continue;
            };
            if consumer.field0() == dest {
                operands.val_a = value;
                operands.source_a = Some(source);
            }
            if consumer.field1() == dest {
                operands.val_b = value;
                operands.source_b = Some(source);
            }
        }

        operands
    }
}

/// IF/ID register
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IFIDRegister {
    /// Fetched instruction
    pub inst: Instruction,
    /// Address of the next instruction
    pub pc_plus_1: i32,
}

/// ID/EX register
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IDEXRegister {
    pub inst: Instruction,
    pub pc_plus_1: i32,
    /// Value read for field0
    pub val_a: i32,
    /// Value read for field1
    pub val_b: i32,
    /// Sign-extended field2
    pub offset: i32,
}

/// EX/MEM register
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EXMEMRegister {
    pub inst: Instruction,
    /// PC if branch is taken
    pub branch_target: i32,
    /// Operands compared equal
    pub eq: bool,
    pub alu_result: i32,
    /// Operand B, kept for sw
    pub val_b: i32,
}

/// MEM/WB register
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MEMWBRegister {
    pub inst: Instruction,
    /// Value to write back
    pub write_data: i32,
}

/// WB/END register
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WBENDRegister {
    pub inst: Instruction,
    pub write_data: i32,
}
