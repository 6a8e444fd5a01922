//! Typed value tokens given on the command line, e.g. `i32:7` or `hex:0a0b@1+1`.

use std::str::FromStr;

use bytefeed_corelib::{Funnel, PrimitiveSink, PutError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("value '{0}' has no type prefix (expected TYPE:VALUE)")]
    MissingType(String),
    #[error("unknown value type '{0}'")]
    UnknownType(String),
    #[error("cannot parse '{text}' as {ty}")]
    Malformed { ty: &'static str, text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    U8(u8),
    I16(i16),
    I32(i32),
    I64(i64),
    Char(char),
    Bool(bool),
    F32(f32),
    F64(f64),
    Str(String),
    Chars(String),
    Hex(Vec<u8>),
    HexRange { bytes: Vec<u8>, off: usize, len: usize },
}

fn malformed(ty: &'static str, text: &str) -> ValueError {
    ValueError::Malformed {
        ty,
        text: text.to_owned(),
    }
}

/// Decimal, or `0x` hex read as the raw two's-complement bits of a `bits`-wide integer.
fn parse_signed(ty: &'static str, text: &str, bits: u32) -> Result<i64, ValueError> {
    let shift = 64 - bits;
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        let raw = u64::from_str_radix(digits, 16).map_err(|_| malformed(ty, text))?;
        if bits < 64 && raw >> bits != 0 {
            return Err(malformed(ty, text));
        }
        return Ok(((raw << shift) as i64) >> shift);
    }
    let v = i64::from_str(text).map_err(|_| malformed(ty, text))?;
    if ((v << shift) >> shift) != v {
        return Err(malformed(ty, text));
    }
    Ok(v)
}

fn parse_hex(ty: &'static str, text: &str) -> Result<Value, ValueError> {
    let Some((digits, window)) = text.split_once('@') else {
        return hex::decode(text)
            .map(Value::Hex)
            .map_err(|_| malformed(ty, text));
    };
    let bytes = hex::decode(digits).map_err(|_| malformed(ty, text))?;
    let (off, len) = window.split_once('+').ok_or_else(|| malformed(ty, text))?;
    let off = usize::from_str(off).map_err(|_| malformed(ty, text))?;
    let len = usize::from_str(len).map_err(|_| malformed(ty, text))?;
    Ok(Value::HexRange { bytes, off, len })
}

impl FromStr for Value {
    type Err = ValueError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (ty, text) = token
            .split_once(':')
            .ok_or_else(|| ValueError::MissingType(token.to_owned()))?;
        let value = match ty {
            "u8" => Value::U8(parse_signed("u8", text, 9).and_then(|v| {
                u8::try_from(v).map_err(|_| malformed("u8", text))
            })?),
            "i16" => Value::I16(parse_signed("i16", text, 16)? as i16),
            "i32" => Value::I32(parse_signed("i32", text, 32)? as i32),
            "i64" => Value::I64(parse_signed("i64", text, 64)?),
            "char" => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Value::Char(c),
                    _ => return Err(malformed("char", text)),
                }
            }
            "bool" => Value::Bool(bool::from_str(text).map_err(|_| malformed("bool", text))?),
            "f32" => Value::F32(f32::from_str(text).map_err(|_| malformed("f32", text))?),
            "f64" => Value::F64(f64::from_str(text).map_err(|_| malformed("f64", text))?),
            "str" => Value::Str(text.to_owned()),
            "chars" => Value::Chars(text.to_owned()),
            "hex" => parse_hex("hex", text)?,
            other => return Err(ValueError::UnknownType(other.to_owned())),
        };
        Ok(value)
    }
}

/// Feeds a [`Value`] through the put-call matching its type.
pub struct ValueFunnel;

impl Funnel<Value> for ValueFunnel {
    fn funnel<S: PrimitiveSink + ?Sized>(
        &self,
        from: &Value,
        into: &mut S,
    ) -> Result<(), PutError> {
        match from {
            Value::U8(b) => {
                into.put_byte(*b);
            }
            Value::I16(s) => {
                into.put_short(*s);
            }
            Value::I32(i) => {
                into.put_int(*i);
            }
            Value::I64(l) => {
                into.put_long(*l);
            }
            Value::Char(c) => {
                into.put_char(*c);
            }
            Value::Bool(b) => {
                into.put_bool(*b);
            }
            Value::F32(f) => {
                into.put_f32(*f);
            }
            Value::F64(d) => {
                into.put_f64(*d);
            }
            Value::Str(s) => {
                into.put_str(s);
            }
            Value::Chars(s) => {
                into.put_unencoded_chars(s);
            }
            Value::Hex(bytes) => {
                into.put_bytes(bytes);
            }
            Value::HexRange { bytes, off, len } => {
                into.put_bytes_range(bytes, *off, *len)?;
            }
        }
        Ok(())
    }
}
