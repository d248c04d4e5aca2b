//! Core module: Fixed-Point Codec dengan Dense Lookup Table
//!
//! Prinsip desain:
//! - Fixed-Point: Nilai desimal di-scale 10^4 menjadi integer 16-bit
//! - Build-Once: Decode table dibangun sekali, read-only setelahnya
//! - No-Allocation: Tidak ada alokasi setelah inisialisasi table

mod scale;
mod table;

pub use scale::{EncodeError, CODE_SPACE, MAX_SCALED, SCALE};
pub use table::Codec;

/// Kode 16-bit hasil encode (two's complement dari scaled value)
pub type Code = u16;
