use byteorder::{LittleEndian, ReadBytesExt};

use crate::depth_tracking::DepthTracker;
use crate::error::{Error, Result, VarIntFault};
use crate::tag::{Tag, WireKind};
use crate::varint::{self, VarInt};

/// The value half of a field, as read straight off the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Varint(u64),
    Fixed64(u64),
    Bytes(&'a [u8]),
    /// Everything between a start-group tag and its matching end-group tag.
    Group(&'a [u8]),
    Fixed32(u32),
}

impl<'a> FieldValue<'a> {
    pub fn kind(&self) -> WireKind {
        match self {
            FieldValue::Varint(_) => WireKind::Varint,
            FieldValue::Fixed64(_) => WireKind::Fixed64,
            FieldValue::Bytes(_) => WireKind::LengthDelimited,
            FieldValue::Group(_) => WireKind::StartGroup,
            FieldValue::Fixed32(_) => WireKind::Fixed32,
        }
    }
}

/// One decoded field: a field number and its raw value. Byte values borrow from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field<'a> {
    number: u32,
    value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn new(number: u32, value: FieldValue<'a>) -> Self {
        Self { number, value }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn value(&self) -> &FieldValue<'a> {
        &self.value
    }

    pub fn kind(&self) -> WireKind {
        self.value.kind()
    }

    fn wrong_kind(&self, expected: WireKind) -> Error {
        Error::WrongWireKind {
            field: self.number,
            expected,
            actual: self.kind(),
        }
    }

    pub fn as_u64(&self) -> Result<u64> {
        match self.value {
            FieldValue::Varint(v) => Ok(v),
            _ => Err(self.wrong_kind(WireKind::Varint)),
        }
    }

    /// Signed integers are the plain two's-complement bit pattern, not zig-zag.
    pub fn as_i64(&self) -> Result<i64> {
        self.as_u64().map(|v| v as i64)
    }

    /// Enum values are 32 bits wide; higher bits are dropped.
    pub fn as_i32(&self) -> Result<i32> {
        self.as_u64().map(|v| v as i32)
    }

    pub fn as_bool(&self) -> Result<bool> {
        self.as_u64().map(|v| v != 0)
    }

    pub fn as_bytes(&self) -> Result<&'a [u8]> {
        match self.value {
            FieldValue::Bytes(v) => Ok(v),
            _ => Err(self.wrong_kind(WireKind::LengthDelimited)),
        }
    }

    pub fn as_str(&self) -> Result<&'a str> {
        let bytes = self.as_bytes()?;
        std::str::from_utf8(bytes)
            .map_err(|e| Error::BadEncode(format!("Field {} isn't UTF-8: {}", self.number, e)))
    }
}

/// Serialize a field onto a byte vector. Doesn't check whether the field makes sense for any
/// particular message, just writes it out. Panics on a field number
/// [`Tag::new`] rejects.
pub fn serialize_field(buf: &mut Vec<u8>, number: u32, value: FieldValue) {
    match value {
        FieldValue::Varint(v) => {
            Tag::new(number, WireKind::Varint).write(buf);
            VarInt::from_u64(v).write(buf);
        }
        FieldValue::Fixed64(v) => {
            Tag::new(number, WireKind::Fixed64).write(buf);
            buf.extend_from_slice(&v.to_le_bytes());
        }
        FieldValue::Bytes(v) => {
            Tag::new(number, WireKind::LengthDelimited).write(buf);
            varint::write_len_delimited(buf, v);
        }
        FieldValue::Group(v) => {
            Tag::new(number, WireKind::StartGroup).write(buf);
            buf.extend_from_slice(v);
            Tag::new(number, WireKind::EndGroup).write(buf);
        }
        FieldValue::Fixed32(v) => {
            Tag::new(number, WireKind::Fixed32).write(buf);
            buf.extend_from_slice(&v.to_le_bytes());
        }
    }
}

/// Forward-only reader of the fields in one message.
///
/// A top-level parser reports running out of bytes as [`Error::TruncatedInput`] or
/// [`Error::TruncatedPayload`]. A parser over a nested message's contents reports it as
/// [`Error::UnexpectedEndOfMessage`], since the envelope's length already told us where the
/// message had to end. After the first error, the parser yields nothing more.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    data: &'a [u8],
    depth: DepthTracker,
    enveloped: bool,
    errored: bool,
}

impl<'a> Parser<'a> {
    pub fn new(data: &'a [u8], depth: DepthTracker) -> Parser<'a> {
        Self {
            data,
            depth,
            enveloped: false,
            errored: false,
        }
    }

    /// Parser over the contents of a length-delimited nested message.
    pub fn nested(data: &'a [u8], depth: DepthTracker) -> Parser<'a> {
        Self {
            data,
            depth,
            enveloped: true,
            errored: false,
        }
    }

    pub fn depth(&self) -> DepthTracker {
        self.depth
    }

    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    fn ran_out(&self, step: &'static str, expected: usize) -> Error {
        if self.enveloped {
            Error::UnexpectedEndOfMessage {
                step,
                actual: self.data.len(),
                expected,
            }
        } else {
            Error::TruncatedInput { step }
        }
    }

    fn read_varint(&mut self, step: &'static str) -> Result<u64> {
        match VarInt::read(&mut self.data) {
            Ok(v) => Ok(v.to_u64()),
            Err(Error::MalformedVarint(VarIntFault::Truncated)) => {
                Err(self.ran_out(step, self.data.len() + 1))
            }
            Err(e) => Err(e),
        }
    }

    fn read_tag(&mut self) -> Result<Tag> {
        let raw = self.read_varint("decode tag")?;
        Tag::from_u64(raw)
    }

    fn read_bytes(&mut self) -> Result<&'a [u8]> {
        match varint::read_len_delimited(&mut self.data) {
            Ok(v) => Ok(v),
            Err(Error::MalformedVarint(VarIntFault::Truncated)) => {
                Err(self.ran_out("decode length", self.data.len() + 1))
            }
            Err(Error::TruncatedPayload {
                step,
                actual,
                expected,
            }) if self.enveloped => Err(Error::UnexpectedEndOfMessage {
                step,
                actual,
                expected,
            }),
            Err(e) => Err(e),
        }
    }

    // Given a tag, read the value that follows it. Groups are consumed whole, including any
    // groups nested inside them.
    fn parse_value(&mut self, tag: Tag, depth: DepthTracker) -> Result<FieldValue<'a>> {
        let value = match tag.kind() {
            WireKind::Varint => FieldValue::Varint(self.read_varint("decode varint value")?),
            WireKind::Fixed64 => {
                let v = self
                    .data
                    .read_u64::<LittleEndian>()
                    .map_err(|_| self.ran_out("decode fixed64 value", 8))?;
                FieldValue::Fixed64(v)
            }
            WireKind::LengthDelimited => FieldValue::Bytes(self.read_bytes()?),
            WireKind::StartGroup => {
                let inner = depth.descend()?;
                FieldValue::Group(self.read_group(tag.number(), inner)?)
            }
            WireKind::EndGroup => {
                return Err(Error::BadEncode(format!(
                    "Got end-group tag for field {} without a matching start",
                    tag.number()
                )))
            }
            WireKind::Fixed32 => {
                let v = self
                    .data
                    .read_u32::<LittleEndian>()
                    .map_err(|_| self.ran_out("decode fixed32 value", 4))?;
                FieldValue::Fixed32(v)
            }
        };
        Ok(value)
    }

    fn read_group(&mut self, number: u32, depth: DepthTracker) -> Result<&'a [u8]> {
        let start = self.data;
        loop {
            let before = self.data.len();
            if before == 0 {
                return Err(self.ran_out("find end of group", 1));
            }
            let tag = self.read_tag()?;
            match tag.kind() {
                WireKind::EndGroup if tag.number() == number => {
                    return Ok(&start[..start.len() - before]);
                }
                WireKind::EndGroup => {
                    return Err(Error::BadEncode(format!(
                        "Group for field {} was closed by an end-group tag for field {}",
                        number,
                        tag.number()
                    )))
                }
                _ => {
                    self.parse_value(tag, depth)?;
                }
            }
        }
    }

    fn parse_field(&mut self) -> Result<Field<'a>> {
        let tag = self.read_tag()?;
        let value = self.parse_value(tag, self.depth)?;
        Ok(Field::new(tag.number(), value))
    }
}

impl<'a> std::iter::Iterator for Parser<'a> {
    type Item = Result<Field<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.errored || self.data.is_empty() {
            return None;
        }
        let result = self.parse_field();
        if result.is_err() {
            self.errored = true;
        }
        Some(result)
    }
}
