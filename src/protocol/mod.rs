//! Protocol Layer: 8-Byte Addressed Packet
//!
//! Prinsip desain:
//! - Fixed-size: Setiap packet tepat 8 byte di wire
//! - Bit-Packing: Tiga kode 16-bit di satu field 64-bit, shift/mask eksplisit
//! - Admission Control: Address tag equality sebagai satu-satunya filter

mod packet;

pub use packet::{Packet, PACKET_SIZE};
