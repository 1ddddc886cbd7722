//! Core Game Boy emulation: CPU, bus, cartridge, timer, PPU, interrupts and
//! joypad, wired together by [`GameBoy`] per the scheduler in spec §5.

pub mod apu;
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod error;
pub mod interrupts;
pub mod joypad;
pub mod memory_map;
pub mod ppu;
pub mod timer;

use bus::Bus;
use cartridge::Cartridge;
use cpu::Cpu;
use error::EmuResult;

/// Machine cycles budgeted per video frame (spec's frame-budget constant,
/// ~4.194 MHz / 59.7 Hz; not the cycle-exact `154 * 456` scanline product).
pub const CYCLES_PER_FRAME: u32 = 69905;

pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: Bus,
}

impl GameBoy {
    pub fn new(rom_data: &[u8]) -> EmuResult<Self> {
        let cartridge = Cartridge::load(rom_data)?;
        Ok(GameBoy {
            cpu: Cpu::new(),
            bus: Bus::new(cartridge),
        })
    }

    /// Runs one fetch-decode-execute step, advances the timer and PPU by its
    /// cycle count, then dispatches any pending interrupt. Mirrors spec §5's
    /// scheduler exactly: the dispatch's own 20-cycle cost is not folded back
    /// into the per-instruction total the frame budget accumulates.
    pub fn step_instruction(&mut self) -> EmuResult<u16> {
        let cycles = self.cpu.step(&mut self.bus)?;
        self.bus.tick(cycles);
        interrupts::dispatch(&mut self.cpu, self.bus.raw_mem());
        Ok(cycles)
    }

    /// Runs instructions until at least one frame's worth of cycles has
    /// elapsed, then returns. Mirrors spec §5's `present_frame` loop.
    pub fn run_frame(&mut self) -> EmuResult<()> {
        let mut cycles_this_frame: u32 = 0;
        while cycles_this_frame < CYCLES_PER_FRAME {
            cycles_this_frame += self.step_instruction()? as u32;
        }
        Ok(())
    }

    pub fn frame_buffer(&self) -> &[u8; ppu::FRAME_BUFFER_SIZE] {
        self.bus.ppu.frame_buffer()
    }

    pub fn key_pressed(&mut self, key: u8) {
        self.bus.key_pressed(key);
    }

    pub fn key_released(&mut self, key: u8) {
        self.bus.key_released(key);
    }

    /// Re-samples VRAM tile data and returns the debug view buffer (one
    /// shade index 0-3 per pixel, laid out as a tile sheet). For frontend
    /// inspection only; not part of the timing-critical hot path.
    pub fn vram_debug_buffer(&mut self) -> &[u8; ppu::VRAM_DEBUG_BUFFER_SIZE] {
        self.bus.refresh_vram_debug();
        self.bus.ppu.vram_debug_buffer()
    }

    /// Renders a one-line disassembly of the instruction at the current PC,
    /// for the `--debug` frontend pane.
    pub fn disassemble_current(&self) -> String {
        self.cpu.disassemble_current(&self.bus)
    }
}
