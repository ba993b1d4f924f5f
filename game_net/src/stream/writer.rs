use bytes::{BufMut, Bytes, BytesMut};

use crate::proto::WireEnum;

use super::HEADER_SIZE;

/// Accumulates a bit-packed payload.
///
/// Writing never fails. Once all values are appended, [`pack`] produces the framed message.
///
/// [`pack`]: Self::pack
#[derive(Clone, Debug, Default)]
pub struct BitWriter {
    bytes: BytesMut,
    /// Number of bits written, including alignment padding.
    bit_len: usize,
}

impl BitWriter {
    #[inline]
    pub fn new() -> Self {
        Self {
            bytes: BytesMut::new(),
            bit_len: 0,
        }
    }

    #[inline]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: BytesMut::with_capacity(bytes),
            bit_len: 0,
        }
    }

    /// Returns the number of payload bits written so far.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    #[inline]
    pub fn append_bool(&mut self, value: bool) {
        self.append_u32(u32::from(value), 1);
    }

    /// Appends the lowest `bits` bits of `value`, least significant bit first.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is greater than 32.
    pub fn append_u32(&mut self, value: u32, bits: u32) {
        assert!(bits <= u32::BITS, "cannot write {} bits of a u32", bits);

        let mut value = if bits >= u32::BITS {
            value
        } else {
            value & ((1 << bits) - 1)
        };
        let mut remaining = bits;

        while remaining > 0 {
            let offset = (self.bit_len % 8) as u32;
            if offset == 0 {
                self.bytes.put_u8(0);
            }

            let n = (8 - offset).min(remaining);
            let chunk = (value & ((1 << n) - 1)) as u8;

            let last = self.bytes.len() - 1;
            self.bytes[last] |= chunk << offset;

            value >>= n;
            remaining -= n;
            self.bit_len += n as usize;
        }
    }

    /// Appends the ordinal of `value` using the minimal width for its case table.
    #[inline]
    pub fn append_enum<E>(&mut self, value: E)
    where
        E: WireEnum,
    {
        self.append_u32(value.ordinal(), E::BITS);
    }

    #[inline]
    pub fn append_f32(&mut self, value: f32) {
        self.append_u32(value.to_bits(), 32);
    }

    /// Appends the 8 little-endian bytes of `value`, starting at the next byte boundary.
    #[inline]
    pub fn append_f64(&mut self, value: f64) {
        self.append_bytes(&value.to_le_bytes());
    }

    /// Appends `bytes` verbatim, starting at the next byte boundary.
    ///
    /// No length is written; the reader must know how many bytes to expect.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.align();
        self.bytes.put_slice(bytes);
        self.bit_len += bytes.len() * 8;
    }

    /// Appends `bytes` prefixed with their length as a 32-bit count, starting at the next byte
    /// boundary.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is longer than `u32::MAX`.
    pub fn append_data(&mut self, bytes: &[u8]) {
        let len = u32::try_from(bytes.len()).expect("data exceeds u32::MAX bytes");

        self.align();
        self.append_u32(len, 32);
        self.append_bytes(bytes);
    }

    /// Skips to the next byte boundary. The skipped bits are zero.
    #[inline]
    pub fn align(&mut self) {
        self.bit_len = self.bytes.len() * 8;
    }

    /// Consumes the writer and returns the framed message.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` bits were written.
    pub fn pack(self) -> Bytes {
        let bit_len = u32::try_from(self.bit_len).expect("message exceeds u32::MAX bits");

        let mut buf = BytesMut::with_capacity(HEADER_SIZE + self.bytes.len());
        buf.put_u32_le(bit_len);
        buf.put_slice(&self.bytes);
        buf.freeze()
    }
}
