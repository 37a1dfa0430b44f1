/*!
dispatch - Orchestrator for a single 6502 CPU step (interrupts / fetch / execute)

Overview
========
Coordinates one call to `Cpu::step`:
1. Services the highest-priority pending interrupt (7-cycle entry) instead
   of executing an instruction.
2. Otherwise fetches the opcode, decodes it through the 256-entry table and
   resolves its operand.
3. Runs the instruction's family handler via one exhaustive match on the
   mnemonic, so a new mnemonic cannot compile without a handler.
4. Computes the cycle cost from the table entry plus page-cross / branch
   adjustments.

Family handlers
===============
- `load_store`:   LDA LDX LDY STA STX STY
- `logical`:      AND ORA EOR BIT
- `arithmetic`:   ADC SBC
- `compare`:      CMP CPX CPY
- `branches`:     conditional relative branches
- `rmw`:          ASL LSR ROL ROR INC DEC
- `control_flow`: JMP JSR RTS RTI BRK
- `misc`:         transfers, register INC/DEC, stack, flag opcodes
- `unofficial`:   undocumented opcodes

Handlers never compute timing and never see the interrupt controller.

Jams
====
A KIL opcode leaves PC on the opcode and returns `CpuError::Jammed`. The
facade keeps the CPU jammed until a reset is serviced.
*/

use log::{debug, trace};

use crate::bus::Bus;
use crate::cpu::addressing::{fetch_byte, resolve, Operand, Resolved};
use crate::cpu::cycles::instruction_cycles;
use crate::cpu::interrupt::{service, InterruptController};
use crate::cpu::regs::CpuRegs;
use crate::cpu::status::Status;
use crate::cpu::table::{decode, Mnemonic};
use crate::error::CpuError;

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;
pub(crate) mod unofficial;

use misc::Reg;

/// Execute one step (interrupt entry or one instruction) and return its cycles.
pub(crate) fn step<C: CpuRegs, B: Bus>(
    cpu: &mut C,
    interrupts: &mut InterruptController,
    bus: &mut B,
) -> Result<u32, CpuError> {
    if let Some(kind) = interrupts.poll(cpu.flag(Status::IRQ_DISABLE)) {
        debug!("servicing {:?} at PC=${:04X}", kind, cpu.pc());
        interrupts.acknowledge(kind);
        return Ok(service(kind, cpu, bus));
    }
    interrupts.resume();

    let pc = cpu.pc();
    let opcode = fetch_byte(cpu, bus);
    let instr = decode(opcode);
    if instr.is_jam() {
        cpu.set_pc(pc);
        return Err(CpuError::Jammed { opcode, pc });
    }

    let resolved = resolve(instr.mode, cpu, bus);
    // Registers as they were before the instruction ran, nestest style.
    let (a, x, y, p, sp) = (cpu.a(), cpu.x(), cpu.y(), cpu.status().bits(), cpu.sp());

    let branch_taken = execute(instr.mnemonic, resolved, cpu, bus);
    let cycles = instruction_cycles(instr, resolved.page_crossed, branch_taken);
    trace!(
        "{pc:04X}  {opcode:02X}  {} {}  cyc:{cycles}  A:{a:02X} X:{x:02X} Y:{y:02X} P:{p:02X} SP:{sp:02X}",
        instr.mnemonic,
        instr.mode,
    );
    Ok(cycles)
}

/// Run the semantics of `mnemonic`. Returns true only for a taken branch.
fn execute<C: CpuRegs, B: Bus>(mnemonic: Mnemonic, resolved: Resolved, cpu: &mut C, bus: &mut B) -> bool {
    use Mnemonic::*;

    let operand = resolved.operand;
    let crossed = resolved.page_crossed;
    let p = cpu.status();

    match mnemonic {
        // Loads / stores
        Lda => load_store::lda(cpu, bus, operand),
        Ldx => load_store::ldx(cpu, bus, operand),
        Ldy => load_store::ldy(cpu, bus, operand),
        Sta => load_store::sta(cpu, bus, operand),
        Stx => load_store::stx(cpu, bus, operand),
        Sty => load_store::sty(cpu, bus, operand),

        // Logic / arithmetic / compare
        And => logical::and(cpu, bus, operand),
        Ora => logical::ora(cpu, bus, operand),
        Eor => logical::eor(cpu, bus, operand),
        Bit => logical::bit(cpu, bus, operand),
        Adc => arithmetic::adc(cpu, bus, operand),
        Sbc => arithmetic::sbc(cpu, bus, operand),
        Cmp => compare::cmp(cpu, bus, operand),
        Cpx => compare::cpx(cpu, bus, operand),
        Cpy => compare::cpy(cpu, bus, operand),

        // Branches
        Bpl => return branches::branch(cpu, operand, !p.contains(Status::NEGATIVE)),
        Bmi => return branches::branch(cpu, operand, p.contains(Status::NEGATIVE)),
        Bvc => return branches::branch(cpu, operand, !p.contains(Status::OVERFLOW)),
        Bvs => return branches::branch(cpu, operand, p.contains(Status::OVERFLOW)),
        Bcc => return branches::branch(cpu, operand, !p.contains(Status::CARRY)),
        Bcs => return branches::branch(cpu, operand, p.contains(Status::CARRY)),
        Bne => return branches::branch(cpu, operand, !p.contains(Status::ZERO)),
        Beq => return branches::branch(cpu, operand, p.contains(Status::ZERO)),

        // Read-modify-write
        Asl => rmw::asl(cpu, bus, operand),
        Lsr => rmw::lsr(cpu, bus, operand),
        Rol => rmw::rol(cpu, bus, operand),
        Ror => rmw::ror(cpu, bus, operand),
        Inc => rmw::inc(cpu, bus, operand),
        Dec => rmw::dec(cpu, bus, operand),

        // Control flow
        Jmp => control_flow::jmp(cpu, operand),
        Jsr => control_flow::jsr(cpu, bus, operand),
        Rts => control_flow::rts(cpu, bus),
        Rti => control_flow::rti(cpu, bus),
        Brk => control_flow::brk(cpu, bus),

        // Transfers / register steps
        Tax => misc::transfer(cpu, Reg::A, Reg::X),
        Tay => misc::transfer(cpu, Reg::A, Reg::Y),
        Txa => misc::transfer(cpu, Reg::X, Reg::A),
        Tya => misc::transfer(cpu, Reg::Y, Reg::A),
        Tsx => misc::transfer(cpu, Reg::Sp, Reg::X),
        Txs => misc::transfer(cpu, Reg::X, Reg::Sp),
        Inx => misc::step_reg(cpu, Reg::X, 1),
        Iny => misc::step_reg(cpu, Reg::Y, 1),
        Dex => misc::step_reg(cpu, Reg::X, -1),
        Dey => misc::step_reg(cpu, Reg::Y, -1),

        // Stack
        Pha => misc::pha(cpu, bus),
        Pla => misc::pla(cpu, bus),
        Php => misc::php(cpu, bus),
        Plp => misc::plp(cpu, bus),

        // Flags
        Clc => misc::set_flag(cpu, Status::CARRY, false),
        Sec => misc::set_flag(cpu, Status::CARRY, true),
        Cli => misc::set_flag(cpu, Status::IRQ_DISABLE, false),
        Sei => misc::set_flag(cpu, Status::IRQ_DISABLE, true),
        Cld => misc::set_flag(cpu, Status::DECIMAL, false),
        Sed => misc::set_flag(cpu, Status::DECIMAL, true),
        Clv => misc::set_flag(cpu, Status::OVERFLOW, false),

        Nop => {
            // Memory forms still perform their read.
            if let Operand::Memory(addr) = operand {
                bus.read(addr);
            }
        }

        // Undocumented
        Slo => unofficial::slo(cpu, bus, operand),
        Rla => unofficial::rla(cpu, bus, operand),
        Sre => unofficial::sre(cpu, bus, operand),
        Rra => unofficial::rra(cpu, bus, operand),
        Dcp => unofficial::dcp(cpu, bus, operand),
        Isc => unofficial::isc(cpu, bus, operand),
        Lax => unofficial::lax(cpu, bus, operand),
        Sax => unofficial::sax(cpu, bus, operand),
        Anc => unofficial::anc(cpu, bus, operand),
        Alr => unofficial::alr(cpu, bus, operand),
        Arr => unofficial::arr(cpu, bus, operand),
        Xaa => unofficial::xaa(cpu, bus, operand),
        Axs => unofficial::axs(cpu, bus, operand),
        Las => unofficial::las(cpu, bus, operand),
        Shy => unofficial::shy(cpu, bus, operand, crossed),
        Shx => unofficial::shx(cpu, bus, operand, crossed),
        Ahx => unofficial::ahx(cpu, bus, operand, crossed),
        Tas => unofficial::tas(cpu, bus, operand, crossed),

        // Filtered out in `step` before operand resolution.
        Kil => {}
    }
    false
}
