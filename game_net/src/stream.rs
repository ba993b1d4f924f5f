//! Bit-level streams
//!
//! A packed message is laid out as follows:
//!
//! | Offset | Size              | Description                               |
//! | ------ | ----------------- | ----------------------------------------- |
//! | 0      | 4 bytes           | Number of valid payload bits (u32, LE)    |
//! | 4      | `ceil(bits / 8)`  | Payload                                   |
//!
//! Bits are packed least significant bit first, both within a single value and within every
//! byte. A 32-bit value written at a byte boundary therefore ends up in little-endian byte order.
//!
//! Scalars (bools, enum tags, quantized floats) are packed without any padding. Byte-oriented
//! data (`f64`, raw bytes and length-prefixed data) always starts at a byte boundary; the skipped
//! bits are zero and count towards the declared bit length.

mod reader;
mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

/// The size of the bit length header in bytes.
pub const HEADER_SIZE: usize = 4;
