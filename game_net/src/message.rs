//! Framing of whole messages.
//!
//! A message is a single top-level value packed into one frame. Decoding a message fails unless
//! the value consumes exactly the bits declared by the frame header.

use bytes::Bytes;
use game_tracing::trace_span;

use crate::proto::{Decode, Encode, Error, TrailingBits};
use crate::stream::{BitReader, BitWriter};

/// Encodes `value` into a packed message.
pub fn encode_message<T>(value: &T) -> Bytes
where
    T: Encode,
{
    let _span = trace_span!("encode_message").entered();

    let mut writer = BitWriter::new();
    value.encode(&mut writer);

    #[cfg(feature = "tracing")]
    tracing::trace!("encoded message with {} bits", writer.bit_len());

    writer.pack()
}

/// Decodes a packed message containing exactly one `T`.
///
/// # Errors
///
/// Returns an error if the message is truncated, contains an unknown enum case or invalid
/// UTF-8, or if bits remain after `T` was decoded.
pub fn decode_message<T>(buf: Bytes) -> Result<T, Error>
where
    T: Decode,
    Error: From<T::Error>,
{
    let _span = trace_span!("decode_message").entered();

    let mut reader = BitReader::new(buf)?;
    let value = T::decode(&mut reader)?;

    if !reader.is_at_end() {
        return Err(TrailingBits {
            remaining: reader.remaining(),
        }
        .into());
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("decoded message with {} bits", reader.bit_len());

    Ok(value)
}
