//! Lossy compression of bounded floats.

use glam::Vec3;

use crate::proto::EofError;
use crate::stream::{BitReader, BitWriter};

/// Quantizes floats in `min..=max` to a fixed number of bits.
///
/// Values outside of the range are clamped before they are written. The error of a decoded value
/// is bounded by [`max_error`].
///
/// [`max_error`]: Self::max_error
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FloatCompressor {
    min: f32,
    max: f32,
    bits: u32,
}

impl FloatCompressor {
    /// Creates a new `FloatCompressor` for values in `min..=max` using `bits` bits per value.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is not in `1..=32` or if `min` is not less than `max`.
    pub const fn new(min: f32, max: f32, bits: u32) -> Self {
        assert!(bits >= 1 && bits <= 32, "bits must be in 1..=32");
        assert!(min < max, "min must be less than max");

        Self { min, max, bits }
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Returns the largest difference between a value in range and its decoded value.
    #[inline]
    pub fn max_error(&self) -> f32 {
        ((f64::from(self.max) - f64::from(self.min)) / self.max_bit_value()) as f32
    }

    #[inline]
    fn max_bit_value(&self) -> f64 {
        ((1u64 << self.bits) - 1) as f64
    }

    /// Returns the quantized representation of `value`.
    ///
    /// `NaN` is mapped to `min`.
    pub fn quantize(&self, value: f32) -> u32 {
        let min = f64::from(self.min);
        let max = f64::from(self.max);

        let value = f64::from(value).clamp(min, max);
        let ratio = (value - min) / (max - min);

        // `as` saturates and maps NaN to 0.
        (ratio * self.max_bit_value()).round() as u32
    }

    /// Returns the value in range represented by `bits`.
    pub fn dequantize(&self, bits: u32) -> f32 {
        let min = f64::from(self.min);
        let max = f64::from(self.max);

        let ratio = f64::from(bits) / self.max_bit_value();
        (min + ratio * (max - min)) as f32
    }

    #[inline]
    pub fn write(&self, value: f32, writer: &mut BitWriter) {
        writer.append_u32(self.quantize(value), self.bits);
    }

    #[inline]
    pub fn read(&self, reader: &mut BitReader) -> Result<f32, EofError> {
        reader.read_u32(self.bits).map(|bits| self.dequantize(bits))
    }

    /// Writes the x, y and z components of `value` in order.
    pub fn write_vec3(&self, value: Vec3, writer: &mut BitWriter) {
        self.write(value.x, writer);
        self.write(value.y, writer);
        self.write(value.z, writer);
    }

    pub fn read_vec3(&self, reader: &mut BitReader) -> Result<Vec3, EofError> {
        let x = self.read(reader)?;
        let y = self.read(reader)?;
        let z = self.read(reader)?;
        Ok(Vec3::new(x, y, z))
    }
}
