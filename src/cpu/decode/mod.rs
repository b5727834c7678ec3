//! Instruction decoding: ModR/M byte parsing and effective-address
//! computation.

pub mod modrm;

pub use modrm::{decode as decode_modrm, ModRm, RmType};
