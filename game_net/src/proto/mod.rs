//! The peer-to-peer game protocol
//!
//! Every value that is sent between peers implements [`Encode`] and [`Decode`]. The format is not
//! self-describing: a value must be decoded with exactly the same sequence of reads that encoded
//! it.
//!
//! # Enum tags
//!
//! Enums are transmitted as the ordinal of their case followed by the payload of that case, if
//! any. The ordinal uses the minimal number of bits required for the number of cases of the enum
//! (see [`bits_required`]). The case tables are defined once with the `wire_enum!` macro and
//! are append-only: reordering or removing a case changes the wire format.
//!
//! # Floats
//!
//! `f32` values are transmitted losslessly as their 32-bit pattern. Values with a known range can
//! instead be quantized with a [`FloatCompressor`].
//!
//! [`FloatCompressor`]: crate::compress::FloatCompressor

macro_rules! wire_enum {
    ($name:ident { $($variant:ident = $ordinal:literal),+ $(,)? }) => {
        impl $crate::proto::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const CASES: &'static [Self] = &[$($name::$variant),+];

            #[inline]
            fn ordinal(&self) -> u32 {
                match self {
                    $($name::$variant => $ordinal,)+
                }
            }

            #[inline]
            fn from_ordinal(ordinal: u32) -> Option<Self> {
                match ordinal {
                    $($ordinal => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl $crate::proto::Encode for $name {
            #[inline]
            fn encode(&self, writer: &mut $crate::stream::BitWriter) {
                writer.append_enum(*self);
            }
        }

        impl $crate::proto::Decode for $name {
            type Error = $crate::proto::Error;

            #[inline]
            fn decode(reader: &mut $crate::stream::BitReader) -> Result<Self, Self::Error> {
                reader.read_enum()
            }
        }
    };
}

pub mod action;
pub mod board;
pub mod math;
pub mod missile;
pub mod movement;
pub mod ship;

use bytes::Bytes;
use thiserror::Error;

use crate::stream::{BitReader, BitWriter};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error(transparent)]
pub enum Error {
    UnexpectedEndOfStream(#[from] EofError),
    InvalidEnumValue(#[from] InvalidEnumValue),
    InvalidUtf8(#[from] InvalidUtf8),
    TrailingBits(#[from] TrailingBits),
}

/// A read would consume bits past the declared end of the message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("unexpected end of stream: expected {expected} bits, found {found}")]
pub struct EofError {
    pub expected: usize,
    pub found: usize,
}

/// A decoded enum ordinal has no corresponding case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("invalid {name} value: {value}")]
pub struct InvalidEnumValue {
    pub name: &'static str,
    pub value: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("invalid utf-8 string: invalid byte at offset {valid_up_to}")]
pub struct InvalidUtf8 {
    pub valid_up_to: usize,
}

/// A message was decoded without consuming every declared bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{remaining} trailing bits after message")]
pub struct TrailingBits {
    pub remaining: usize,
}

pub trait Encode {
    fn encode(&self, writer: &mut BitWriter);
}

pub trait Decode: Sized {
    type Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error>;
}

/// A fieldless enum with a fixed, ordered case table.
pub trait WireEnum: Sized + Copy + 'static {
    /// The name of the enum, used in error messages.
    const NAME: &'static str;

    /// All cases in ordinal order.
    const CASES: &'static [Self];

    /// The width of the tag in bits.
    const BITS: u32 = bits_required(Self::CASES.len());

    fn ordinal(&self) -> u32;

    fn from_ordinal(ordinal: u32) -> Option<Self>;
}

/// Returns the number of bits required to represent every value in `0..cases`.
///
/// An enum with a single case needs no bits at all.
pub const fn bits_required(cases: usize) -> u32 {
    if cases <= 1 {
        0
    } else {
        usize::BITS - (cases - 1).leading_zeros()
    }
}

impl Encode for bool {
    #[inline]
    fn encode(&self, writer: &mut BitWriter) {
        writer.append_bool(*self);
    }
}

impl Decode for bool {
    type Error = EofError;

    #[inline]
    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        reader.read_bool()
    }
}

impl Encode for u32 {
    #[inline]
    fn encode(&self, writer: &mut BitWriter) {
        writer.append_u32(*self, u32::BITS);
    }
}

impl Decode for u32 {
    type Error = EofError;

    #[inline]
    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        reader.read_u32(u32::BITS)
    }
}

impl Encode for f32 {
    #[inline]
    fn encode(&self, writer: &mut BitWriter) {
        writer.append_f32(*self);
    }
}

impl Decode for f32 {
    type Error = EofError;

    #[inline]
    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        reader.read_f32()
    }
}

impl Encode for f64 {
    #[inline]
    fn encode(&self, writer: &mut BitWriter) {
        writer.append_f64(*self);
    }
}

impl Decode for f64 {
    type Error = EofError;

    #[inline]
    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        reader.read_f64()
    }
}

impl Encode for Bytes {
    #[inline]
    fn encode(&self, writer: &mut BitWriter) {
        writer.append_data(self);
    }
}

impl Decode for Bytes {
    type Error = EofError;

    #[inline]
    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        reader.read_data()
    }
}

impl Encode for String {
    #[inline]
    fn encode(&self, writer: &mut BitWriter) {
        writer.append_data(self.as_bytes());
    }
}

impl Decode for String {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let bytes = reader.read_data()?;

        match std::str::from_utf8(&bytes) {
            Ok(s) => Ok(s.to_owned()),
            Err(err) => Err(InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            }
            .into()),
        }
    }
}

impl<T> Encode for Option<T>
where
    T: Encode,
{
    fn encode(&self, writer: &mut BitWriter) {
        match self {
            Some(value) => {
                writer.append_bool(true);
                value.encode(writer);
            }
            None => writer.append_bool(false),
        }
    }
}

impl<T> Decode for Option<T>
where
    T: Decode,
    Error: From<T::Error>,
{
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        if reader.read_bool()? {
            Ok(Some(T::decode(reader)?))
        } else {
            Ok(None)
        }
    }
}

impl<T> Encode for Vec<T>
where
    T: Encode,
{
    /// # Panics
    ///
    /// Panics if the `Vec` has more than `u32::MAX` elements.
    fn encode(&self, writer: &mut BitWriter) {
        let len = u32::try_from(self.len()).expect("list exceeds u32::MAX elements");
        writer.append_u32(len, u32::BITS);

        for elem in self {
            elem.encode(writer);
        }
    }
}

impl<T> Decode for Vec<T>
where
    T: Decode,
    Error: From<T::Error>,
{
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let len = reader.read_u32(u32::BITS)? as usize;

        // Don't trust the count for the allocation. Every element takes at
        // least one bit, so the remaining bits are an upper bound.
        let mut elems = Vec::with_capacity(len.min(reader.remaining()));
        for _ in 0..len {
            elems.push(T::decode(reader)?);
        }

        Ok(elems)
    }
}
