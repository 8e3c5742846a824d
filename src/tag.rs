use crate::error::{Error, Result};
use crate::varint::VarInt;

/// The largest field number a tag can carry.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Wire kinds. These say how many bytes a value takes, not what the value means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireKind {
    /// Bools, enums, signed & unsigned integers.
    Varint,
    /// Eight little-endian bytes.
    Fixed64,
    /// Strings, nested messages, packed repeated scalars.
    LengthDelimited,
    StartGroup,
    EndGroup,
    /// Four little-endian bytes.
    Fixed32,
}

impl WireKind {
    /// Convert from the low 3 bits of a tag. Returns `None` for the two reserved values.
    pub fn from_u8(v: u8) -> Option<WireKind> {
        match v {
            0 => Some(WireKind::Varint),
            1 => Some(WireKind::Fixed64),
            2 => Some(WireKind::LengthDelimited),
            3 => Some(WireKind::StartGroup),
            4 => Some(WireKind::EndGroup),
            5 => Some(WireKind::Fixed32),
            _ => None,
        }
    }

    pub fn into_u8(self) -> u8 {
        match self {
            WireKind::Varint => 0,
            WireKind::Fixed64 => 1,
            WireKind::LengthDelimited => 2,
            WireKind::StartGroup => 3,
            WireKind::EndGroup => 4,
            WireKind::Fixed32 => 5,
        }
    }
}

impl From<WireKind> for u8 {
    fn from(val: WireKind) -> u8 {
        val.into_u8()
    }
}

/// A field number paired with its wire kind. Encoded as the varint `(number << 3) | kind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag {
    number: u32,
    kind: WireKind,
}

impl Tag {
    /// Panics if `number` is 0 or above [`MAX_FIELD_NUMBER`], since no decoder would accept the
    /// resulting tag.
    pub fn new(number: u32, kind: WireKind) -> Tag {
        assert!(
            (1..=MAX_FIELD_NUMBER).contains(&number),
            "Field number {} is outside 1..={}",
            number,
            MAX_FIELD_NUMBER
        );
        Tag { number, kind }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn kind(&self) -> WireKind {
        self.kind
    }

    pub fn into_u64(self) -> u64 {
        ((self.number as u64) << 3) | (self.kind.into_u8() as u64)
    }

    /// Unpack a raw tag value.
    pub fn from_u64(v: u64) -> Result<Tag> {
        let kind = (v & 0x7) as u8;
        let kind = WireKind::from_u8(kind)
            .ok_or_else(|| Error::BadEncode(format!("Got reserved wire kind {}", kind)))?;
        let number = v >> 3;
        if number == 0 {
            return Err(Error::BadEncode(String::from("Got field number 0")));
        }
        if number > MAX_FIELD_NUMBER as u64 {
            return Err(Error::BadEncode(format!(
                "Got field number {}, larger than the maximum of {}",
                number, MAX_FIELD_NUMBER
            )));
        }
        Ok(Tag {
            number: number as u32,
            kind,
        })
    }

    pub fn write(&self, buf: &mut Vec<u8>) {
        VarInt::from_u64(self.into_u64()).write(buf);
    }

    /// Read a tag off the front of `buf`, advancing it.
    pub fn read(buf: &mut &[u8]) -> Result<Tag> {
        let v = VarInt::read(buf)?;
        Tag::from_u64(v.to_u64())
    }
}
