//! Impls for glam types
//!
//! All components are transmitted losslessly as `f32`.

use glam::{Mat4, Quat, Vec3, Vec4};

use crate::stream::{BitReader, BitWriter};

use super::{Decode, Encode, EofError};

impl Encode for Vec3 {
    #[inline]
    fn encode(&self, writer: &mut BitWriter) {
        self.x.encode(writer);
        self.y.encode(writer);
        self.z.encode(writer);
    }
}

impl Decode for Vec3 {
    type Error = EofError;

    #[inline]
    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let x = f32::decode(reader)?;
        let y = f32::decode(reader)?;
        let z = f32::decode(reader)?;
        Ok(Self { x, y, z })
    }
}

impl Encode for Vec4 {
    #[inline]
    fn encode(&self, writer: &mut BitWriter) {
        self.x.encode(writer);
        self.y.encode(writer);
        self.z.encode(writer);
        self.w.encode(writer);
    }
}

impl Decode for Vec4 {
    type Error = EofError;

    #[inline]
    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let x = f32::decode(reader)?;
        let y = f32::decode(reader)?;
        let z = f32::decode(reader)?;
        let w = f32::decode(reader)?;
        Ok(Self::new(x, y, z, w))
    }
}

/// The imaginary parts `x`, `y` and `z` followed by the real part `w`.
impl Encode for Quat {
    #[inline]
    fn encode(&self, writer: &mut BitWriter) {
        self.x.encode(writer);
        self.y.encode(writer);
        self.z.encode(writer);
        self.w.encode(writer);
    }
}

impl Decode for Quat {
    type Error = EofError;

    #[inline]
    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let x = f32::decode(reader)?;
        let y = f32::decode(reader)?;
        let z = f32::decode(reader)?;
        let w = f32::decode(reader)?;
        Ok(Self::from_xyzw(x, y, z, w))
    }
}

/// The four columns in order.
impl Encode for Mat4 {
    fn encode(&self, writer: &mut BitWriter) {
        self.x_axis.encode(writer);
        self.y_axis.encode(writer);
        self.z_axis.encode(writer);
        self.w_axis.encode(writer);
    }
}

impl Decode for Mat4 {
    type Error = EofError;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let x_axis = Vec4::decode(reader)?;
        let y_axis = Vec4::decode(reader)?;
        let z_axis = Vec4::decode(reader)?;
        let w_axis = Vec4::decode(reader)?;
        Ok(Self::from_cols(x_axis, y_axis, z_axis, w_axis))
    }
}
