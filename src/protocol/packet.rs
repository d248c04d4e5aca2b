//! Packet Layout (Fixed 8 Bytes)
//!
//! Layout wire (big-endian):
//! ┌─────────┬──────────┬─────────┬─────────┬─────────┐
//! │ byte 0  │ byte 1   │ 2..4    │ 4..6    │ 6..8    │
//! │ address │ 0 (pad)  │ code x  │ code y  │ code z  │
//! └─────────┴──────────┴─────────┴─────────┴─────────┘
//!
//! In-memory, tiga kode ditempatkan dalam satu field u64:
//! x di bits [47:32], y di [31:16], z di [15:0]; bits [63:48] selalu nol.

use crate::core::{Code, Codec, EncodeError};

/// Ukuran packet di wire: 1 byte address + 7 byte packed codes
pub const PACKET_SIZE: usize = 8;

const CODE_MASK: u64 = 0xFFFF;
const FIELD_MASK: u64 = 0x0000_FFFF_FFFF_FFFF;

/// Packet broadcast: address tag + tiga kode 16-bit.
///
/// Value type, immutable setelah konstruksi. Satu-satunya decision
/// point adalah branch accept/reject di [`Packet::unpack_if_addressed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet {
    /// Channel tag untuk admission control (0-255)
    pub address: u8,
    /// Tiga kode 16-bit, packed; top 16 bits selalu nol
    pub field: u64,
}

impl Packet {
    /// Encode triple (x, y, z) dan compose packet untuk address tertentu.
    ///
    /// Gagal dengan [`EncodeError`] jika salah satu nilai di luar
    /// representable range codec.
    #[inline(always)]
    pub fn pack(codec: &Codec, x: f32, y: f32, z: f32, address: u8) -> Result<Self, EncodeError> {
        let cx = codec.encode(x)? as u64;
        let cy = codec.encode(y)? as u64;
        let cz = codec.encode(z)? as u64;

        Ok(Self {
            address,
            field: (cx << 32) | (cy << 16) | cz,
        })
    }

    /// Decode triple jika address cocok dengan receiver.
    ///
    /// Mismatch -> `None` tanpa ada decode (silent rejection, bukan
    /// error). Match -> extract tiga kode via shift/mask lalu decode
    /// masing-masing. Kode unknown di dalam packet yang diterima
    /// (hanya mungkin dari wire bytes hand-crafted berisi `0x8000`)
    /// juga menghasilkan `None`.
    #[inline(always)]
    pub fn unpack_if_addressed(&self, codec: &Codec, receiver: u8) -> Option<(f32, f32, f32)> {
        if self.address != receiver {
            return None;
        }

        let x = codec.decode(((self.field >> 32) & CODE_MASK) as Code)?;
        let y = codec.decode(((self.field >> 16) & CODE_MASK) as Code)?;
        let z = codec.decode((self.field & CODE_MASK) as Code)?;

        Some((x, y, z))
    }

    /// Serialize ke wire form: tepat 8 byte, big-endian.
    #[inline(always)]
    pub fn to_bytes(&self) -> [u8; PACKET_SIZE] {
        let mut buf = [0u8; PACKET_SIZE];
        buf[0] = self.address;
        // Low 56 bits dari field, big-endian di bytes 1..8
        buf[1..8].copy_from_slice(&self.field.to_be_bytes()[1..8]);
        buf
    }

    /// Parse packet dari wire bytes.
    ///
    /// Returns `None` jika buffer terlalu pendek.
    #[inline(always)]
    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < PACKET_SIZE {
            return None;
        }

        let mut raw = [0u8; 8];
        raw[1..8].copy_from_slice(&buf[1..8]);

        Some(Self {
            address: buf[0],
            field: u64::from_be_bytes(raw) & FIELD_MASK,
        })
    }
}
