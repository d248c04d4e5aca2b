//! Dense Decode Table (Direct-Indexed, Build-Once)
//!
//! Layout:
//! ┌──────────────────────────────────────────────────────┐
//! │ entries: 65_536 x f32, diindeks langsung oleh kode   │
//! │ slot vacant = NaN sentinel (hanya 0x8000)            │
//! └──────────────────────────────────────────────────────┘
//!
//! Table dibangun sekali saat startup dan read-only setelahnya.
//! Decode adalah satu array index: tanpa hashing, tanpa collision
//! bookkeeping. Sharing antar thread aman via `&Codec` karena tidak
//! pernah ada writer setelah build.

use super::scale::{from_scaled, to_scaled, EncodeError, CODE_SPACE, MAX_SCALED};
use super::Code;

/// Codec fixed-point: mapping deterministik dan reversible antara
/// nilai desimal 4-digit dan kode 16-bit.
///
/// Encode adalah aritmatika murni (scale + range check); decode
/// adalah satu lookup ke table yang dibangun sekali oleh [`Codec::build`].
pub struct Codec {
    /// Decode table: `entries[code] = value`, NaN untuk slot vacant
    entries: Box<[f32]>,
}

impl Default for Codec {
    fn default() -> Self {
        Self::build()
    }
}

impl Codec {
    /// Membangun decode table. Satu-satunya fase yang mengalokasi.
    ///
    /// Enumerasi scaled integer `-32_767..=32_767`, setiap nilai
    /// direkam ke slot kodenya (two's complement low 16 bits).
    /// Slot `0x8000` tidak pernah terisi: encode yang range-checked
    /// tidak pernah menghasilkan kode itu.
    pub fn build() -> Self {
        let mut entries = vec![f32::NAN; CODE_SPACE].into_boxed_slice();

        for scaled in -MAX_SCALED..=MAX_SCALED {
            let code = (scaled as i16) as u16;
            entries[code as usize] = from_scaled(scaled);
        }

        Self { entries }
    }

    /// Encode nilai desimal ke kode 16-bit.
    ///
    /// Range-checked: input dengan magnitude > 3.2767 ditolak dengan
    /// [`EncodeError::UnrepresentableValue`]. Kebijakan ini membuat
    /// encode/decode bijective dalam range, menggantikan perilaku
    /// truncate-and-wrap yang menyebabkan aliasing.
    #[inline(always)]
    pub fn encode(&self, value: f32) -> Result<Code, EncodeError> {
        let scaled = to_scaled(value)?;
        Ok((scaled as i16) as u16)
    }

    /// Decode kode 16-bit kembali ke nilai desimal.
    ///
    /// Returns `None` untuk kode tanpa entry (unknown code sentinel).
    /// Dengan table penuh, satu-satunya kode vacant adalah `0x8000`.
    #[inline(always)]
    pub fn decode(&self, code: Code) -> Option<f32> {
        let value = self.entries[code as usize];
        if value.is_nan() {
            return None;
        }
        Some(value)
    }

    /// Jumlah kode yang punya entry di table
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|v| !v.is_nan()).count()
    }

    /// Cek apakah table kosong (tidak pernah true setelah build)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
