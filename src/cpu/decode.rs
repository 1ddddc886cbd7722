//! Main (non-`CB`) opcode table, decoded with a `match` over the raw byte
//! rather than the teacher's function-pointer array — the same fetch/flag
//! semantics, grouped by instruction shape instead of one named function per
//! opcode, since the 8x8 `LD r,r'` and ALU grids collapse cleanly into a
//! shared `r8` index.

use super::constants::*;
use super::decode_cb;
use super::{Cpu, illegal};
use crate::bus::Bus;
use crate::error::CpuResult;

/// Register-index convention shared with the CB table: 0=B 1=C 2=D 3=E 4=H
/// 5=L 6=(HL) 7=A.
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

fn condition(cpu: &Cpu, code: u8) -> bool {
    match code {
        0 => cpu.f & FLAG_Z == 0, // NZ
        1 => cpu.f & FLAG_Z != 0, // Z
        2 => cpu.f & FLAG_C == 0, // NC
        _ => cpu.f & FLAG_C != 0, // C
    }
}

pub fn execute(cpu: &mut Cpu, bus: &mut Bus, opcode: u8, pc: u16) -> CpuResult<u16> {
    match opcode {
        0x00 => Ok(4), // NOP

        // --- 16-bit loads: LD rr,d16 ---
        0x01 => {
            let v = cpu.fetch_word(bus);
            cpu.set_bc(v);
            Ok(12)
        }
        0x11 => {
            let v = cpu.fetch_word(bus);
            cpu.set_de(v);
            Ok(12)
        }
        0x21 => {
            let v = cpu.fetch_word(bus);
            cpu.set_hl(v);
            Ok(12)
        }
        0x31 => {
            cpu.sp = cpu.fetch_word(bus);
            Ok(12)
        }

        // LD (rr),A / LD A,(rr)
        0x02 => {
            bus.write_byte(cpu.get_bc(), cpu.a);
            Ok(8)
        }
        0x12 => {
            bus.write_byte(cpu.get_de(), cpu.a);
            Ok(8)
        }
        0x22 => {
            let addr = cpu.get_hl();
            bus.write_byte(addr, cpu.a);
            cpu.set_hl(addr.wrapping_add(1));
            Ok(8)
        }
        0x32 => {
            let addr = cpu.get_hl();
            bus.write_byte(addr, cpu.a);
            cpu.set_hl(addr.wrapping_sub(1));
            Ok(8)
        }
        0x0A => {
            cpu.a = bus.read_byte(cpu.get_bc());
            Ok(8)
        }
        0x1A => {
            cpu.a = bus.read_byte(cpu.get_de());
            Ok(8)
        }
        0x2A => {
            let addr = cpu.get_hl();
            cpu.a = bus.read_byte(addr);
            cpu.set_hl(addr.wrapping_add(1));
            Ok(8)
        }
        0x3A => {
            let addr = cpu.get_hl();
            cpu.a = bus.read_byte(addr);
            cpu.set_hl(addr.wrapping_sub(1));
            Ok(8)
        }

        // LD (a16),SP
        0x08 => {
            let addr = cpu.fetch_word(bus);
            bus.write_byte(addr, cpu.sp as u8);
            bus.write_byte(addr.wrapping_add(1), (cpu.sp >> 8) as u8);
            Ok(20)
        }

        // INC/DEC rr
        0x03 => {
            cpu.set_bc(cpu.get_bc().wrapping_add(1));
            Ok(8)
        }
        0x13 => {
            cpu.set_de(cpu.get_de().wrapping_add(1));
            Ok(8)
        }
        0x23 => {
            cpu.set_hl(cpu.get_hl().wrapping_add(1));
            Ok(8)
        }
        0x33 => {
            cpu.sp = cpu.sp.wrapping_add(1);
            Ok(8)
        }
        0x0B => {
            cpu.set_bc(cpu.get_bc().wrapping_sub(1));
            Ok(8)
        }
        0x1B => {
            cpu.set_de(cpu.get_de().wrapping_sub(1));
            Ok(8)
        }
        0x2B => {
            cpu.set_hl(cpu.get_hl().wrapping_sub(1));
            Ok(8)
        }
        0x3B => {
            cpu.sp = cpu.sp.wrapping_sub(1);
            Ok(8)
        }

        // ADD HL,rr
        0x09 => {
            cpu.add_hl(cpu.get_bc());
            Ok(8)
        }
        0x19 => {
            cpu.add_hl(cpu.get_de());
            Ok(8)
        }
        0x29 => {
            cpu.add_hl(cpu.get_hl());
            Ok(8)
        }
        0x39 => {
            cpu.add_hl(cpu.sp);
            Ok(8)
        }

        // INC/DEC r8 (includes (HL))
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
            let idx = (opcode >> 3) & 0x07;
            let v = read_r8(cpu, bus, idx);
            let r = cpu.inc_u8(v);
            write_r8(cpu, bus, idx, r);
            Ok(if idx == 6 { 12 } else { 4 })
        }
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
            let idx = (opcode >> 3) & 0x07;
            let v = read_r8(cpu, bus, idx);
            let r = cpu.dec_u8(v);
            write_r8(cpu, bus, idx, r);
            Ok(if idx == 6 { 12 } else { 4 })
        }

        // LD r,d8 (includes (HL),d8)
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
            let idx = (opcode >> 3) & 0x07;
            let v = cpu.fetch_byte(bus);
            write_r8(cpu, bus, idx, v);
            Ok(if idx == 6 { 12 } else { 8 })
        }

        // Rotates on A (unconditionally clear Z unlike the CB forms)
        0x07 => {
            cpu.a = cpu.rlc(cpu.a);
            cpu.set_flag(FLAG_Z, false);
            Ok(4)
        }
        0x0F => {
            cpu.a = cpu.rrc(cpu.a);
            cpu.set_flag(FLAG_Z, false);
            Ok(4)
        }
        0x17 => {
            cpu.a = cpu.rl(cpu.a);
            cpu.set_flag(FLAG_Z, false);
            Ok(4)
        }
        0x1F => {
            cpu.a = cpu.rr(cpu.a);
            cpu.set_flag(FLAG_Z, false);
            Ok(4)
        }

        0x10 => {
            cpu.halted = true; // STOP: approximated as halt (no CGB speed switch in scope)
            cpu.fetch_byte(bus); // STOP is followed by a padding byte
            Ok(4)
        }

        0x18 => {
            let off = cpu.fetch_byte(bus) as i8;
            cpu.pc = cpu.pc.wrapping_add_signed(off as i16);
            Ok(12)
        }
        0x20 | 0x28 | 0x30 | 0x38 => {
            let cc = (opcode >> 3) & 0x03;
            let off = cpu.fetch_byte(bus) as i8;
            if condition(cpu, cc) {
                cpu.pc = cpu.pc.wrapping_add_signed(off as i16);
                Ok(12)
            } else {
                Ok(8)
            }
        }

        0x27 => {
            cpu.daa();
            Ok(4)
        }
        0x2F => {
            cpu.a = !cpu.a;
            cpu.set_flag(FLAG_N, true);
            cpu.set_flag(FLAG_H, true);
            Ok(4)
        }
        0x37 => {
            cpu.set_flag(FLAG_N, false);
            cpu.set_flag(FLAG_H, false);
            cpu.set_flag(FLAG_C, true);
            Ok(4)
        }
        0x3F => {
            let c = cpu.f & FLAG_C != 0;
            cpu.set_flag(FLAG_N, false);
            cpu.set_flag(FLAG_H, false);
            cpu.set_flag(FLAG_C, !c);
            Ok(4)
        }

        0x76 => {
            cpu.halted = true;
            Ok(4)
        }

        // LD r,r' grid (0x40-0x7F minus 0x76)
        0x40..=0x7F => {
            let dst = (opcode >> 3) & 0x07;
            let src = opcode & 0x07;
            let v = read_r8(cpu, bus, src);
            write_r8(cpu, bus, dst, v);
            Ok(if dst == 6 || src == 6 { 8 } else { 4 })
        }

        // ALU A,r grid (0x80-0xBF)
        0x80..=0xBF => {
            let op = (opcode >> 3) & 0x07;
            let idx = opcode & 0x07;
            let v = read_r8(cpu, bus, idx);
            alu_op(cpu, op, v);
            Ok(if idx == 6 { 8 } else { 4 })
        }

        // POP rr
        0xC1 => {
            let v = cpu.pop_word(bus);
            cpu.set_bc(v);
            Ok(12)
        }
        0xD1 => {
            let v = cpu.pop_word(bus);
            cpu.set_de(v);
            Ok(12)
        }
        0xE1 => {
            let v = cpu.pop_word(bus);
            cpu.set_hl(v);
            Ok(12)
        }
        0xF1 => {
            let v = cpu.pop_word(bus);
            cpu.set_af(v);
            Ok(12)
        }
        // PUSH rr
        0xC5 => {
            cpu.push_word(bus, cpu.get_bc());
            Ok(16)
        }
        0xD5 => {
            cpu.push_word(bus, cpu.get_de());
            Ok(16)
        }
        0xE5 => {
            cpu.push_word(bus, cpu.get_hl());
            Ok(16)
        }
        0xF5 => {
            cpu.push_word(bus, cpu.get_af());
            Ok(16)
        }

        // ALU A,d8
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
            let op = (opcode >> 3) & 0x07;
            let v = cpu.fetch_byte(bus);
            alu_op(cpu, op, v);
            Ok(8)
        }

        // RST n
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            let vector = (opcode & 0x38) as u16;
            cpu.push_word(bus, cpu.pc);
            cpu.pc = vector;
            Ok(16)
        }

        // Conditional / unconditional RET
        0xC0 | 0xD0 | 0xC8 | 0xD8 => {
            let cc = (opcode >> 3) & 0x03;
            if condition(cpu, cc) {
                cpu.pc = cpu.pop_word(bus);
                Ok(20)
            } else {
                Ok(8)
            }
        }
        0xC9 => {
            cpu.pc = cpu.pop_word(bus);
            Ok(16)
        }
        0xD9 => {
            cpu.pc = cpu.pop_word(bus);
            cpu.ime = true;
            Ok(16)
        }

        // Conditional / unconditional JP a16
        0xC2 | 0xD2 | 0xCA | 0xDA => {
            let cc = (opcode >> 3) & 0x03;
            let addr = cpu.fetch_word(bus);
            if condition(cpu, cc) {
                cpu.pc = addr;
                Ok(16)
            } else {
                Ok(12)
            }
        }
        0xC3 => {
            cpu.pc = cpu.fetch_word(bus);
            Ok(16)
        }
        0xE9 => {
            cpu.pc = cpu.get_hl();
            Ok(4)
        }

        // Conditional / unconditional CALL
        0xC4 | 0xD4 | 0xCC | 0xDC => {
            let cc = (opcode >> 3) & 0x03;
            let addr = cpu.fetch_word(bus);
            if condition(cpu, cc) {
                cpu.push_word(bus, cpu.pc);
                cpu.pc = addr;
                Ok(24)
            } else {
                Ok(12)
            }
        }
        0xCD => {
            let addr = cpu.fetch_word(bus);
            cpu.push_word(bus, cpu.pc);
            cpu.pc = addr;
            Ok(24)
        }

        0xCB => {
            let cb_opcode = cpu.fetch_byte(bus);
            decode_cb::execute(cpu, bus, cb_opcode, pc)
        }

        // I/O and stack-pointer arithmetic
        0xE0 => {
            let off = cpu.fetch_byte(bus);
            bus.write_byte(0xFF00 + off as u16, cpu.a);
            Ok(12)
        }
        0xF0 => {
            let off = cpu.fetch_byte(bus);
            cpu.a = bus.read_byte(0xFF00 + off as u16);
            Ok(12)
        }
        0xE2 => {
            bus.write_byte(0xFF00 + cpu.c as u16, cpu.a);
            Ok(8)
        }
        0xF2 => {
            cpu.a = bus.read_byte(0xFF00 + cpu.c as u16);
            Ok(8)
        }
        0xEA => {
            let addr = cpu.fetch_word(bus);
            bus.write_byte(addr, cpu.a);
            Ok(16)
        }
        0xFA => {
            let addr = cpu.fetch_word(bus);
            cpu.a = bus.read_byte(addr);
            Ok(16)
        }

        0xE8 => {
            let off = cpu.fetch_byte(bus);
            cpu.sp = cpu.add_sp_signed(off);
            Ok(16)
        }
        0xF8 => {
            let off = cpu.fetch_byte(bus);
            let result = cpu.add_sp_signed(off);
            cpu.set_hl(result);
            Ok(12)
        }
        0xF9 => {
            cpu.sp = cpu.get_hl();
            Ok(8)
        }

        0xF3 => {
            cpu.schedule_di();
            Ok(4)
        }
        0xFB => {
            cpu.schedule_ei();
            Ok(4)
        }

        _ => Err(illegal(pc, opcode)),
    }
}

fn alu_op(cpu: &mut Cpu, op: u8, value: u8) {
    match op {
        0 => cpu.add_a(value, false),
        1 => cpu.add_a(value, true),
        2 => {
            let r = cpu.sub_a(value, false);
            cpu.a = r;
        }
        3 => {
            let r = cpu.sub_a(value, true);
            cpu.a = r;
        }
        4 => cpu.and_a(value),
        5 => cpu.xor_a(value),
        6 => cpu.or_a(value),
        _ => cpu.cp_a(value),
    }
}
