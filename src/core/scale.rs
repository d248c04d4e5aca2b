//! Scaling Contract: Desimal 4-Digit <-> Scaled Integer
//!
//! Nilai desimal diasumsikan membawa tepat 4 digit fraksional,
//! sehingga `value * 10_000` adalah integer. Scaled integer harus
//! muat dalam signed 16-bit: di luar itu encode ditolak, BUKAN
//! di-truncate (truncate-and-wrap menyebabkan aliasing antar nilai).

use std::error::Error;
use std::fmt;

/// Faktor scaling untuk presisi 4 digit fraksional
pub const SCALE: f64 = 10_000.0;

/// Magnitude maksimum scaled value yang muat dalam 16-bit signed.
/// Batas simetris: representable range adalah ±3.2767.
pub const MAX_SCALED: i32 = 32_767;

/// Jumlah kode 16-bit yang mungkin
pub const CODE_SPACE: usize = 65_536;

/// Error dari encode yang range-checked
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EncodeError {
    /// Magnitude input melebihi ±3.2767 (scaled value tidak muat 16-bit)
    UnrepresentableValue(f32),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrepresentableValue(v) => write!(
                f,
                "value {:.4} exceeds representable range ±{:.4}",
                v,
                MAX_SCALED as f64 / SCALE
            ),
        }
    }
}

impl Error for EncodeError {}

/// Konversi nilai desimal ke scaled integer, dengan range check.
///
/// Rounding dilakukan dalam f64 supaya scaled integer eksak untuk
/// semua nilai `n / 10_000` dengan `|n| <= 32_767`.
#[inline(always)]
pub fn to_scaled(value: f32) -> Result<i32, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::UnrepresentableValue(value));
    }
    let scaled = (value as f64 * SCALE).round() as i64;
    if scaled.unsigned_abs() > MAX_SCALED as u64 {
        return Err(EncodeError::UnrepresentableValue(value));
    }
    Ok(scaled as i32)
}

/// Konversi scaled integer kembali ke nilai desimal
#[inline(always)]
pub fn from_scaled(scaled: i32) -> f32 {
    scaled as f32 / SCALE as f32
}
