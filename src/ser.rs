//! Serialization.
//!
//! Fields are written as a tag followed by the value. Zero scalars, absent options and empty
//! sequences write nothing at all; a decoder treats a missing field as its default, so there is
//! no way to tell "set to zero" from "never set" once encoded.
//!
//! Nested messages are length-delimited. The encoder writes the body in place after a one-byte
//! length placeholder and widens the length afterwards if the body is 128 bytes or more.

use tracing::debug;

use crate::field::{serialize_field, FieldValue};
use crate::message::{Message, ProtoEnum};
use crate::tag::{Tag, WireKind};
use crate::varint::VarInt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Write repeated integers as a single length-delimited run instead of one tagged value per
    /// element. Decoders accept either form.
    pub packed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Encoder {
    options: EncodeOptions,
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(options: EncodeOptions) -> Self {
        Self {
            options,
            buf: Vec::new(),
        }
    }

    pub fn options(&self) -> EncodeOptions {
        self.options
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Get everything written so far.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Write out a whole message and return the bytes.
    pub fn encode<M: Message>(mut self, msg: &M) -> Vec<u8> {
        msg.encode_fields(&mut self);
        debug!(bytes = self.buf.len(), "encoded message");
        self.buf
    }

    /// Write a field exactly as given, default or not. Panics if `number` is 0 or above
    /// [`MAX_FIELD_NUMBER`](crate::tag::MAX_FIELD_NUMBER).
    pub fn raw(&mut self, number: u32, value: FieldValue) {
        serialize_field(&mut self.buf, number, value);
    }

    pub fn uint64(&mut self, number: u32, v: u64) {
        if v != 0 {
            self.raw(number, FieldValue::Varint(v));
        }
    }

    /// Signed integers are written as the two's-complement bit pattern, so negative numbers
    /// always take 10 bytes.
    pub fn int64(&mut self, number: u32, v: i64) {
        if v != 0 {
            self.raw(number, FieldValue::Varint(v as u64));
        }
    }

    pub fn bool(&mut self, number: u32, v: bool) {
        if v {
            self.raw(number, FieldValue::Varint(1));
        }
    }

    pub fn optional_bool(&mut self, number: u32, v: Option<bool>) {
        if let Some(v) = v {
            self.raw(number, FieldValue::Varint(v as u64));
        }
    }

    pub fn enumeration<E: ProtoEnum>(&mut self, number: u32, v: E) {
        let v = v.to_i32();
        if v != 0 {
            self.raw(number, FieldValue::Varint(v as i64 as u64));
        }
    }

    pub fn optional_enumeration<E: ProtoEnum>(&mut self, number: u32, v: Option<E>) {
        if let Some(v) = v {
            self.raw(number, FieldValue::Varint(v.to_i32() as i64 as u64));
        }
    }

    /// An empty string is still written; only `None` is left out.
    pub fn string(&mut self, number: u32, v: Option<&str>) {
        if let Some(v) = v {
            self.raw(number, FieldValue::Bytes(v.as_bytes()));
        }
    }

    pub fn strings(&mut self, number: u32, v: &[String]) {
        for s in v {
            self.raw(number, FieldValue::Bytes(s.as_bytes()));
        }
    }

    /// A present message is always written, even when all of its own fields are defaults.
    pub fn message<M: Message>(&mut self, number: u32, v: Option<&M>) {
        if let Some(v) = v {
            self.delimited(number, |enc| v.encode_fields(enc));
        }
    }

    pub fn messages<M: Message>(&mut self, number: u32, v: &[M]) {
        for m in v {
            self.delimited(number, |enc| m.encode_fields(enc));
        }
    }

    pub fn uint64s(&mut self, number: u32, v: &[u64]) {
        if v.is_empty() {
            return;
        }
        if self.options.packed {
            self.delimited(number, |enc| {
                for x in v {
                    VarInt::from_u64(*x).write(&mut enc.buf);
                }
            });
        } else {
            for x in v {
                self.raw(number, FieldValue::Varint(*x));
            }
        }
    }

    fn delimited<F: FnOnce(&mut Self)>(&mut self, number: u32, f: F) {
        Tag::new(number, WireKind::LengthDelimited).write(&mut self.buf);
        let len_at = self.buf.len();
        self.buf.push(0);
        f(self);
        let len = VarInt::from_u64((self.buf.len() - len_at - 1) as u64);
        if len.len() == 1 {
            self.buf[len_at] = len.as_bytes()[0];
        } else {
            self.buf
                .splice(len_at..len_at + 1, len.as_bytes().iter().copied());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::depth_tracking::DepthTracker;
    use crate::error::Result;
    use crate::field::Field;

    #[derive(Debug, Default, PartialEq)]
    struct Blob {
        name: Option<String>,
        count: u64,
        children: Vec<Blob>,
        values: Vec<u64>,
    }

    impl Message for Blob {
        fn encode_fields(&self, enc: &mut Encoder) {
            enc.string(1, self.name.as_deref());
            enc.uint64(2, self.count);
            enc.messages(3, &self.children);
            enc.uint64s(4, &self.values);
        }

        fn merge_field(&mut self, _field: Field<'_>, _depth: DepthTracker) -> Result<()> {
            unimplemented!("encode-only test message")
        }
    }

    #[test]
    #[should_panic(expected = "Field number 0")]
    fn raw_field_zero_is_refused() {
        let mut enc = Encoder::new();
        enc.raw(0, FieldValue::Varint(1));
    }

    #[test]
    fn defaults_write_nothing() {
        let mut enc = Encoder::new();
        enc.uint64(1, 0);
        enc.int64(2, 0);
        enc.bool(3, false);
        enc.optional_bool(4, None);
        enc.string(5, None);
        enc.strings(6, &[]);
        enc.uint64s(7, &[]);
        enc.message::<Blob>(8, None);
        enc.messages::<Blob>(9, &[]);
        assert!(enc.is_empty());
    }

    #[test]
    fn present_defaults_are_written() {
        let mut enc = Encoder::new();
        enc.optional_bool(1, Some(false));
        enc.string(2, Some(""));
        enc.message(3, Some(&Blob::default()));
        assert_eq!(enc.into_bytes(), vec![0x08, 0x00, 0x12, 0x00, 0x1a, 0x00]);
    }

    #[test]
    fn negative_int64() {
        let mut enc = Encoder::new();
        enc.int64(7, -1);
        assert_eq!(
            enc.into_bytes(),
            vec![0x38, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]
        );
    }

    #[test]
    fn unpacked_and_packed() {
        let blob = Blob {
            values: vec![1, 300],
            ..Default::default()
        };
        let enc = Encoder::new().encode(&blob);
        assert_eq!(enc, vec![0x20, 0x01, 0x20, 0xac, 0x02]);

        let enc = Encoder::with_params(EncodeOptions { packed: true }).encode(&blob);
        assert_eq!(enc, vec![0x22, 0x03, 0x01, 0xac, 0x02]);
    }

    #[test]
    fn nested_lengths() {
        let blob = Blob {
            name: Some("top".into()),
            children: vec![
                Blob {
                    count: 5,
                    ..Default::default()
                },
                Blob {
                    name: Some("x".repeat(200)),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let enc = Encoder::new().encode(&blob);

        let mut expected = vec![0x0a, 0x03, b't', b'o', b'p'];
        expected.extend_from_slice(&[0x1a, 0x02, 0x10, 0x05]);
        // 3 bytes of tag & length for the string, plus the string itself.
        expected.extend_from_slice(&[0x1a, 0xcb, 0x01, 0x0a, 0xc8, 0x01]);
        expected.extend(std::iter::repeat(b'x').take(200));
        assert_eq!(enc, expected);
    }
}
