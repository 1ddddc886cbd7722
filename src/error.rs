//! Error types for the emulation core.
//!
//! Hardware itself is quiet: invalid writes are clamped or ignored rather than
//! raised. The one real failure mode is an opcode the CPU has no handler for.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpuError {
    IllegalOpcode { pc: u16, opcode: u8 },
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::IllegalOpcode { pc, opcode } => {
                write!(f, "illegal opcode {:#04x} at {:#06x}", opcode, pc)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmuError {
    Cpu(CpuError),
    Cartridge(String),
}

impl fmt::Display for EmuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmuError::Cpu(e) => write!(f, "{}", e),
            EmuError::Cartridge(msg) => write!(f, "cartridge error: {}", msg),
        }
    }
}

impl std::error::Error for EmuError {}

impl From<CpuError> for EmuError {
    fn from(e: CpuError) -> Self {
        EmuError::Cpu(e)
    }
}

pub type CpuResult<T> = Result<T, CpuError>;
pub type EmuResult<T> = Result<T, EmuError>;
