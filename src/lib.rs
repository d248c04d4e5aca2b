//! FixCast - Fixed-Point Float Codec dengan Addressed Broadcast Packets
//!
//! Arsitektur:
//! - Fixed-Point Codec: Desimal 4-digit <-> kode 16-bit, range-checked
//! - Dense Table: Decode via direct array index, dibangun sekali
//! - 8-Byte Packet: Tiga kode + 1 byte address tag, bit-packing eksplisit
//! - Admission Control: Listener menerima packet hanya jika address cocok

pub mod core;
pub mod protocol;
