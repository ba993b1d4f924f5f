use bytes::Bytes;

use crate::proto::{EofError, Error, InvalidEnumValue, WireEnum};

use super::HEADER_SIZE;

/// Sequentially consumes a message produced by [`BitWriter::pack`].
///
/// Values must be read in the same order and with the same widths as they were written; the
/// stream itself carries no type information.
///
/// [`BitWriter::pack`]: super::BitWriter::pack
#[derive(Clone, Debug)]
pub struct BitReader {
    payload: Bytes,
    /// Number of valid bits in `payload`, as declared by the header.
    bit_len: usize,
    cursor: usize,
}

impl BitReader {
    /// Creates a new `BitReader` over a packed message.
    ///
    /// Bytes after the declared bit length are ignored.
    ///
    /// # Errors
    ///
    /// Returns an [`EofError`] if the header is missing or declares more bits than the payload
    /// contains.
    pub fn new(buf: Bytes) -> Result<Self, EofError> {
        if buf.len() < HEADER_SIZE {
            return Err(EofError {
                expected: HEADER_SIZE * 8,
                found: buf.len() * 8,
            });
        }

        let mut header = [0; HEADER_SIZE];
        header.copy_from_slice(&buf[..HEADER_SIZE]);
        let bit_len = u32::from_le_bytes(header) as usize;

        let payload = buf.slice(HEADER_SIZE..);
        if payload.len() * 8 < bit_len {
            return Err(EofError {
                expected: bit_len,
                found: payload.len() * 8,
            });
        }

        Ok(Self {
            payload,
            bit_len,
            cursor: 0,
        })
    }

    /// Returns the number of payload bits declared by the header.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Returns the number of bits left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bit_len - self.cursor
    }

    /// Returns `true` if every declared bit has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor == self.bit_len
    }

    #[inline]
    fn ensure(&self, bits: usize) -> Result<(), EofError> {
        if self.remaining() < bits {
            Err(EofError {
                expected: bits,
                found: self.remaining(),
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, EofError> {
        self.read_u32(1).map(|v| v != 0)
    }

    /// Reads a `bits` wide unsigned integer, least significant bit first.
    ///
    /// # Errors
    ///
    /// Returns an [`EofError`] if fewer than `bits` bits remain. The cursor is not advanced.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is greater than 32.
    pub fn read_u32(&mut self, bits: u32) -> Result<u32, EofError> {
        assert!(bits <= u32::BITS, "cannot read {} bits into a u32", bits);

        self.ensure(bits as usize)?;

        let mut value = 0u32;
        let mut shift = 0;
        let mut remaining = bits;

        while remaining > 0 {
            let offset = (self.cursor % 8) as u32;
            let n = (8 - offset).min(remaining);

            let byte = self.payload[self.cursor / 8];
            let chunk = u32::from(byte >> offset) & ((1 << n) - 1);
            value |= chunk << shift;

            shift += n;
            remaining -= n;
            self.cursor += n as usize;
        }

        Ok(value)
    }

    /// Reads an enum tag written by [`BitWriter::append_enum`].
    ///
    /// # Errors
    ///
    /// Returns an error if the stream ends or the ordinal has no case in `E`.
    ///
    /// [`BitWriter::append_enum`]: super::BitWriter::append_enum
    pub fn read_enum<E>(&mut self) -> Result<E, Error>
    where
        E: WireEnum,
    {
        let ordinal = self.read_u32(E::BITS)?;
        E::from_ordinal(ordinal).ok_or_else(|| {
            InvalidEnumValue {
                name: E::NAME,
                value: ordinal,
            }
            .into()
        })
    }

    #[inline]
    pub fn read_f32(&mut self) -> Result<f32, EofError> {
        self.read_u32(32).map(f32::from_bits)
    }

    pub fn read_f64(&mut self) -> Result<f64, EofError> {
        let bytes = self.read_bytes(8)?;

        let mut buf = [0; 8];
        buf.copy_from_slice(&bytes);
        Ok(f64::from_le_bytes(buf))
    }

    /// Reads `len` raw bytes, starting at the next byte boundary.
    ///
    /// # Errors
    ///
    /// Returns an [`EofError`] if fewer than `len` bytes remain after alignment.
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes, EofError> {
        self.align()?;
        self.ensure(len.saturating_mul(8))?;

        let start = self.cursor / 8;
        let bytes = self.payload.slice(start..start + len);
        self.cursor += len * 8;
        Ok(bytes)
    }

    /// Reads length-prefixed data written by [`BitWriter::append_data`].
    ///
    /// # Errors
    ///
    /// Returns an [`EofError`] if the length prefix or the data itself is cut off.
    ///
    /// [`BitWriter::append_data`]: super::BitWriter::append_data
    pub fn read_data(&mut self) -> Result<Bytes, EofError> {
        self.align()?;
        let len = self.read_u32(32)?;
        self.read_bytes(len as usize)
    }

    /// Skips to the next byte boundary.
    ///
    /// # Errors
    ///
    /// Returns an [`EofError`] if the boundary lies beyond the declared bit length.
    pub fn align(&mut self) -> Result<(), EofError> {
        let padding = (8 - self.cursor % 8) % 8;
        self.ensure(padding)?;
        self.cursor += padding;
        Ok(())
    }
}
