//! `CB`-prefixed opcode table: rotates/shifts/swap and the BIT/RES/SET grids,
//! all built on the same `r8` indexing `decode.rs` uses for the main table.

use super::Cpu;
use crate::bus::Bus;
use crate::error::CpuResult;

fn read_r8(cpu: &mut Cpu, bus: &mut Bus, idx: u8) -> u8 {
    match idx {
        0 => cpu.b,
        1 => cpu.c,
        2 => cpu.d,
        3 => cpu.e,
        4 => cpu.h,
        5 => cpu.l,
        6 => bus.read_byte(cpu.get_hl()),
        _ => cpu.a,
    }
}

fn write_r8(cpu: &mut Cpu, bus: &mut Bus, idx: u8, value: u8) {
    match idx {
        0 => cpu.b = value,
        1 => cpu.c = value,
        2 => cpu.d = value,
        3 => cpu.e = value,
        4 => cpu.h = value,
        5 => cpu.l = value,
        6 => bus.write_byte(cpu.get_hl(), value),
        _ => cpu.a = value,
    }
}

pub fn execute(cpu: &mut Cpu, bus: &mut Bus, opcode: u8, _pc: u16) -> CpuResult<u16> {
    let idx = opcode & 0x07;
    let group = opcode >> 6;
    let bit = (opcode >> 3) & 0x07;
    let base_cycles = if idx == 6 { 16 } else { 8 };

    match group {
        0 => {
            // rotate/shift/swap, selected by `bit` acting as the sub-opcode
            let v = read_r8(cpu, bus, idx);
            let r = match bit {
                0 => cpu.rlc(v),
                1 => cpu.rrc(v),
                2 => cpu.rl(v),
                3 => cpu.rr(v),
                4 => cpu.sla(v),
                5 => cpu.sra(v),
                6 => cpu.swap(v),
                _ => cpu.srl(v),
            };
            write_r8(cpu, bus, idx, r);
            Ok(base_cycles)
        }
        1 => {
            // BIT n,r — (HL) form does not write back, and costs 12 not 16
            let v = read_r8(cpu, bus, idx);
            cpu.op_bit(bit, v);
            Ok(if idx == 6 { 12 } else { 8 })
        }
        2 => {
            let v = read_r8(cpu, bus, idx);
            write_r8(cpu, bus, idx, v & !(1 << bit));
            Ok(base_cycles)
        }
        _ => {
            let v = read_r8(cpu, bus, idx);
            write_r8(cpu, bus, idx, v | (1 << bit));
            Ok(base_cycles)
        }
    }
}
