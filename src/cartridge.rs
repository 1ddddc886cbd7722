//! Cartridge ROM/RAM storage and the MBC1/MBC2 bank-switching logic.
//!
//! Grounded on the bank-register bookkeeping in the teacher's
//! `memory_bus.rs` (`update_mbc1_rom_bank`/`update_mbc1_ram_bank`), narrowed
//! to the two controllers this core supports and rewritten to the
//! quiet-hardware error model: unsupported headers log a warning and fall
//! back to `None` rather than panicking.

use crate::error::EmuError;
use crate::memory_map::{EXT_RAM_SIZE, ROM_BANK_0_SIZE, ROM_BANK_N_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbcKind {
    None,
    Mbc1,
    Mbc2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BankingMode {
    Rom,
    Ram,
}

pub struct Cartridge {
    rom: Vec<u8>,
    ram: Vec<u8>,
    kind: MbcKind,
    has_battery: bool,
    num_rom_banks: usize,
    num_ram_banks: usize,

    ram_enabled: bool,
    rom_bank_lower: u8,
    bank_upper: u8,
    mode: BankingMode,
}

impl Cartridge {
    pub fn load(rom_data: &[u8]) -> Result<Self, EmuError> {
        if rom_data.len() < 0x150 {
            return Err(EmuError::Cartridge(
                "ROM is too small to contain a valid header".into(),
            ));
        }

        let cartridge_type_code = rom_data[0x0147];
        let rom_size_code = rom_data[0x0148];
        let ram_size_code = rom_data[0x0149];

        let (kind, has_battery) = match cartridge_type_code {
            0x00 => (MbcKind::None, false),
            0x01 | 0x02 => (MbcKind::Mbc1, false),
            0x03 => (MbcKind::Mbc1, true),
            0x05 => (MbcKind::Mbc2, false),
            0x06 => (MbcKind::Mbc2, true),
            0x08 | 0x09 => (MbcKind::None, cartridge_type_code == 0x09),
            other => {
                log::warn!(
                    "unsupported cartridge type {:#04x}, treating as no-MBC",
                    other
                );
                (MbcKind::None, false)
            }
        };

        let num_rom_banks = match rom_size_code {
            0x00..=0x08 => 2usize << rom_size_code,
            other => {
                log::warn!("unsupported ROM size code {:#04x}, assuming 2 banks", other);
                2
            }
        };

        let num_ram_banks = match kind {
            MbcKind::Mbc2 => 1, // MBC2's 512x4-bit RAM is modeled as one pseudo-bank.
            _ => match ram_size_code {
                0x00 => 0,
                0x01 => 1, // 2 KiB, addressed within a single 8 KiB window
                0x02 => 1,
                0x03 => 4,
                0x04 => 16,
                0x05 => 8,
                other => {
                    log::warn!("unsupported RAM size code {:#04x}, assuming no RAM", other);
                    0
                }
            },
        };

        let mut rom = rom_data.to_vec();
        let expected_len = num_rom_banks * ROM_BANK_N_SIZE;
        if rom.len() < expected_len {
            log::warn!(
                "ROM file ({} bytes) smaller than header-declared size ({} bytes), padding with 0xFF",
                rom.len(),
                expected_len
            );
            rom.resize(expected_len, 0xFF);
        }

        let ram_len = match kind {
            MbcKind::Mbc2 => 512, // 4 bits per address, stored one nibble per byte
            _ => num_ram_banks * EXT_RAM_SIZE,
        };

        Ok(Cartridge {
            rom,
            ram: vec![0u8; ram_len],
            kind,
            has_battery,
            num_rom_banks,
            num_ram_banks,
            ram_enabled: false,
            rom_bank_lower: 1,
            bank_upper: 0,
            mode: BankingMode::Rom,
        })
    }

    pub fn kind(&self) -> MbcKind {
        self.kind
    }

    pub fn has_battery(&self) -> bool {
        self.has_battery
    }

    fn rom_bank_high(&self) -> usize {
        let mut bank = self.rom_bank_lower as usize;
        if self.kind == MbcKind::Mbc1 && self.mode == BankingMode::Rom {
            bank |= (self.bank_upper as usize) << 5;
        }
        if matches!(bank, 0 | 0x20 | 0x40 | 0x60) {
            bank += 1;
        }
        bank % self.num_rom_banks.max(1)
    }

    fn ram_bank(&self) -> usize {
        if self.kind == MbcKind::Mbc1 && self.mode == BankingMode::Ram && self.num_ram_banks > 0 {
            (self.bank_upper as usize) % self.num_ram_banks
        } else {
            0
        }
    }

    pub fn read_rom_low(&self, addr: u16) -> u8 {
        let offset = addr as usize;
        self.rom.get(offset).copied().unwrap_or(0xFF)
    }

    pub fn read_rom_high(&self, addr: u16) -> u8 {
        let offset = self.rom_bank_high() * ROM_BANK_N_SIZE + (addr - 0x4000) as usize;
        self.rom.get(offset).copied().unwrap_or(0xFF)
    }

    pub fn read_ram(&self, addr: u16) -> u8 {
        if !self.ram_enabled {
            return 0xFF;
        }
        match self.kind {
            MbcKind::Mbc2 => {
                let idx = (addr & 0x01FF) as usize;
                self.ram.get(idx).map(|b| b | 0xF0).unwrap_or(0xFF)
            }
            _ => {
                if self.ram.is_empty() {
                    return 0xFF;
                }
                let offset = self.ram_bank() * EXT_RAM_SIZE + (addr - 0xA000) as usize;
                self.ram.get(offset).copied().unwrap_or(0xFF)
            }
        }
    }

    pub fn write_ram(&mut self, addr: u16, value: u8) {
        if !self.ram_enabled {
            return;
        }
        match self.kind {
            MbcKind::Mbc2 => {
                let idx = (addr & 0x01FF) as usize;
                if let Some(slot) = self.ram.get_mut(idx) {
                    *slot = value & 0x0F;
                }
            }
            _ => {
                if self.ram.is_empty() {
                    return;
                }
                let offset = self.ram_bank() * EXT_RAM_SIZE + (addr - 0xA000) as usize;
                if let Some(slot) = self.ram.get_mut(offset) {
                    *slot = value;
                }
            }
        }
    }

    /// Handles a write anywhere in 0x0000-0x7FFF, the MBC control region.
    pub fn write_control(&mut self, addr: u16, value: u8) {
        match self.kind {
            MbcKind::None => {}
            MbcKind::Mbc1 => match addr {
                0x0000..=0x1FFF => self.ram_enabled = value & 0x0F == 0x0A,
                0x2000..=0x3FFF => {
                    let low = value & 0x1F;
                    self.rom_bank_lower = if low == 0 { 1 } else { low };
                }
                0x4000..=0x5FFF => self.bank_upper = value & 0x03,
                0x6000..=0x7FFF => {
                    self.mode = if value & 0x01 == 0 {
                        BankingMode::Rom
                    } else {
                        BankingMode::Ram
                    };
                }
                _ => {}
            },
            MbcKind::Mbc2 => match addr {
                0x0000..=0x3FFF => {
                    // Bit 8 of the address selects RAM-enable vs ROM-bank-number behavior.
                    if addr & 0x0100 == 0 {
                        self.ram_enabled = value & 0x0F == 0x0A;
                    } else {
                        let bank = value & 0x0F;
                        self.rom_bank_lower = if bank == 0 { 1 } else { bank };
                    }
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rom_of(banks: usize, cartridge_type: u8) -> Vec<u8> {
        let mut rom = vec![0u8; banks * ROM_BANK_N_SIZE];
        let rom_size_code = (banks / 2).trailing_zeros() as u8;
        rom[0x0147] = cartridge_type;
        rom[0x0148] = rom_size_code;
        rom[0x0149] = 0x02;
        for (bank, chunk) in rom.chunks_mut(ROM_BANK_N_SIZE).enumerate() {
            chunk[0] = bank as u8;
        }
        rom
    }

    #[test]
    fn mbc1_rom_bank_switch_never_lands_on_bank_zero() {
        let rom = rom_of(8, 0x01);
        let mut cart = Cartridge::load(&rom).unwrap();
        cart.write_control(0x2000, 0x00);
        assert_eq!(cart.read_rom_high(0x4000), 1);
        cart.write_control(0x2000, 0x05);
        assert_eq!(cart.read_rom_high(0x4000), 5);
    }

    #[test]
    fn mbc1_ram_gated_by_enable_register() {
        let rom = rom_of(2, 0x03);
        let mut cart = Cartridge::load(&rom).unwrap();
        cart.write_ram(0xA000, 0x42);
        assert_eq!(cart.read_ram(0xA000), 0xFF);
        cart.write_control(0x0000, 0x0A);
        cart.write_ram(0xA000, 0x42);
        assert_eq!(cart.read_ram(0xA000), 0x42);
        cart.write_control(0x0000, 0x00);
        assert_eq!(cart.read_ram(0xA000), 0xFF);
    }

    #[test]
    fn mbc2_ram_reads_only_low_nibble_set() {
        let rom = rom_of(2, 0x05);
        let mut cart = Cartridge::load(&rom).unwrap();
        cart.write_control(0x0000, 0x0A);
        cart.write_ram(0xA000, 0xFF);
        assert_eq!(cart.read_ram(0xA000), 0xFF);
        cart.write_ram(0xA000, 0x03);
        assert_eq!(cart.read_ram(0xA000), 0xF3);
    }

    #[test]
    fn mbc2_address_bit_8_selects_enable_vs_bank() {
        let rom = rom_of(4, 0x05);
        let mut cart = Cartridge::load(&rom).unwrap();
        cart.write_control(0x0100, 0x02); // bit 8 set -> rom bank register
        assert_eq!(cart.read_rom_high(0x4000), 2);
        cart.write_control(0x0000, 0x0A); // bit 8 clear -> ram enable
        cart.write_ram(0xA000, 0x05);
        assert_eq!(cart.read_ram(0xA000), 0xF5);
    }
}
