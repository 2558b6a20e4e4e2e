//! Numeric payloads with remembered width, signedness, and float-kind.
//!
//! A [`Number`] stores the value exactly as it was assigned — an `i16` stays
//! an `i16`, a `f32` stays a `f32`. Conversion to another arithmetic type
//! happens only at read time, through [`Number::get`], using Rust `as` cast
//! semantics (truncating int↔int, saturating float→int). Nothing is ever
//! converted at write time, so cloning a number preserves the exact original
//! bit pattern and kind.

use std::fmt;

/// A number tagged with its concrete source representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    F32(f32),
    F64(f64),
}

/// The representation tag of a [`Number`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F32,
    F64,
}

impl Number {
    /// The representation this number was assigned from.
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::I8(_) => NumberKind::I8,
            Number::I16(_) => NumberKind::I16,
            Number::I32(_) => NumberKind::I32,
            Number::I64(_) => NumberKind::I64,
            Number::I128(_) => NumberKind::I128,
            Number::U8(_) => NumberKind::U8,
            Number::U16(_) => NumberKind::U16,
            Number::U32(_) => NumberKind::U32,
            Number::U64(_) => NumberKind::U64,
            Number::U128(_) => NumberKind::U128,
            Number::F32(_) => NumberKind::F32,
            Number::F64(_) => NumberKind::F64,
        }
    }

    /// Read the stored value as `T`, converting with `as` cast semantics.
    ///
    /// ```
    /// use nodal_core::Number;
    ///
    /// let n = Number::from(3.9_f64);
    /// assert_eq!(n.get::<i32>(), 3);
    /// assert_eq!(n.get::<f32>(), 3.9_f32);
    /// ```
    pub fn get<T: NumberCast>(&self) -> T {
        T::cast_from(self)
    }

    /// True for the float representations (`f32`/`f64`).
    pub fn is_float(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumberKind::I8 => "i8",
            NumberKind::I16 => "i16",
            NumberKind::I32 => "i32",
            NumberKind::I64 => "i64",
            NumberKind::I128 => "i128",
            NumberKind::U8 => "u8",
            NumberKind::U16 => "u16",
            NumberKind::U32 => "u32",
            NumberKind::U64 => "u64",
            NumberKind::U128 => "u128",
            NumberKind::F32 => "f32",
            NumberKind::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// Emits the stored primitive's native textual form, e.g. `-7`, `3.25`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(v) => write!(f, "{v}"),
            Number::I16(v) => write!(f, "{v}"),
            Number::I32(v) => write!(f, "{v}"),
            Number::I64(v) => write!(f, "{v}"),
            Number::I128(v) => write!(f, "{v}"),
            Number::U8(v) => write!(f, "{v}"),
            Number::U16(v) => write!(f, "{v}"),
            Number::U32(v) => write!(f, "{v}"),
            Number::U64(v) => write!(f, "{v}"),
            Number::U128(v) => write!(f, "{v}"),
            Number::F32(v) => write!(f, "{v}"),
            Number::F64(v) => write!(f, "{v}"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Arithmetic types a [`Number`] can be read back as.
///
/// Implemented for the twelve fixed-width primitives; sealed so the cast
/// table stays total.
pub trait NumberCast: sealed::Sealed + Sized {
    fn cast_from(n: &Number) -> Self;
}

macro_rules! impl_number_cast {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl NumberCast for $ty {
            fn cast_from(n: &Number) -> Self {
                match *n {
                    Number::I8(v) => v as $ty,
                    Number::I16(v) => v as $ty,
                    Number::I32(v) => v as $ty,
                    Number::I64(v) => v as $ty,
                    Number::I128(v) => v as $ty,
                    Number::U8(v) => v as $ty,
                    Number::U16(v) => v as $ty,
                    Number::U32(v) => v as $ty,
                    Number::U64(v) => v as $ty,
                    Number::U128(v) => v as $ty,
                    Number::F32(v) => v as $ty,
                    Number::F64(v) => v as $ty,
                }
            }
        }
    )*};
}

impl_number_cast!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl From<$ty> for Number {
            fn from(v: $ty) -> Self {
                Number::$variant(v)
            }
        }
    )*};
}

impl_from_primitive! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    f32 => F32,
    f64 => F64,
}
