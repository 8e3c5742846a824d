//! Deserialization.
//!
//! Decoding is a single forward pass. Each field is routed by number to the message being built;
//! unknown numbers are skipped using their wire kind. Scalars and unions take the last value
//! seen, repeated fields append, and a singular nested message that appears more than once is
//! merged field-by-field into what was already decoded.

use tracing::{debug, trace};

use crate::depth_tracking::DepthTracker;
use crate::error::{Error, Result, VarIntFault};
use crate::field::{Field, FieldValue, Parser};
use crate::message::Message;
use crate::tag::WireKind;
use crate::varint::VarInt;
use crate::MAX_DEPTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// How many nested messages and groups deep decoding may go.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Decode a complete top-level message. Missing fields are left at their defaults.
    pub fn decode<M: Message>(&self, buf: &[u8]) -> Result<M> {
        let mut msg = M::default();
        merge_fields(
            &mut msg,
            Parser::new(buf, DepthTracker::new(self.options.max_depth)),
        )?;
        debug!(bytes = buf.len(), "decoded message");
        Ok(msg)
    }
}

fn merge_fields<M: Message>(msg: &mut M, parser: Parser) -> Result<()> {
    let depth = parser.depth();
    for field in parser {
        msg.merge_field(field?, depth)?;
    }
    Ok(())
}

/// Merge a length-delimited field into a message that may already hold earlier fields. `depth`
/// is the nesting level of the message the field was found in.
pub fn merge_message<M: Message>(msg: &mut M, field: &Field, depth: DepthTracker) -> Result<()> {
    let bytes = field.as_bytes()?;
    let depth = depth.descend()?;
    merge_fields(msg, Parser::nested(bytes, depth))
}

/// Decode a length-delimited field as a fresh message.
pub fn decode_message<M: Message>(field: &Field, depth: DepthTracker) -> Result<M> {
    let mut msg = M::default();
    merge_message(&mut msg, field, depth)?;
    Ok(msg)
}

/// Append one occurrence of a repeated integer field. Takes both a single varint and a packed,
/// length-delimited run of varints.
pub fn push_uint64s(values: &mut Vec<u64>, field: &Field) -> Result<()> {
    match field.value() {
        FieldValue::Varint(v) => values.push(*v),
        FieldValue::Bytes(bytes) => {
            let mut data: &[u8] = bytes;
            while !data.is_empty() {
                match VarInt::read(&mut data) {
                    Ok(v) => values.push(v.to_u64()),
                    Err(Error::MalformedVarint(VarIntFault::Truncated)) => {
                        return Err(Error::UnexpectedEndOfMessage {
                            step: "decode packed varint",
                            actual: data.len(),
                            expected: data.len() + 1,
                        })
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        _ => {
            return Err(Error::WrongWireKind {
                field: field.number(),
                expected: WireKind::Varint,
                actual: field.kind(),
            })
        }
    }
    Ok(())
}

/// Drop a field the message doesn't know about.
pub fn skip_field(message: &'static str, field: &Field) -> Result<()> {
    trace!(
        message,
        field = field.number(),
        kind = ?field.kind(),
        "skipping unknown field"
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ser::Encoder;

    #[derive(Debug, Default, PartialEq)]
    struct Counter {
        label: Option<String>,
        total: u64,
        values: Vec<u64>,
        inner: Option<Box<Counter>>,
    }

    impl Message for Counter {
        fn encode_fields(&self, enc: &mut Encoder) {
            enc.string(1, self.label.as_deref());
            enc.uint64(2, self.total);
            enc.uint64s(3, &self.values);
            enc.message(4, self.inner.as_deref());
        }

        fn merge_field(&mut self, field: Field<'_>, depth: DepthTracker) -> Result<()> {
            match field.number() {
                1 => self.label = Some(field.as_str()?.to_owned()),
                2 => self.total = field.as_u64()?,
                3 => push_uint64s(&mut self.values, &field)?,
                4 => merge_message(
                    &mut **self.inner.get_or_insert_with(Default::default),
                    &field,
                    depth,
                )?,
                _ => return skip_field("Counter", &field),
            }
            Ok(())
        }
    }

    fn decode(buf: &[u8]) -> Result<Counter> {
        Decoder::new().decode(buf)
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode(&[]).unwrap(), Counter::default());
    }

    #[test]
    fn mixed_packed_and_unpacked() {
        let mut enc = Encoder::new();
        enc.raw(3, FieldValue::Varint(1));
        enc.raw(3, FieldValue::Bytes(&[0x02, 0xac, 0x02]));
        enc.raw(3, FieldValue::Varint(4));
        let counter = decode(&enc.into_bytes()).unwrap();
        assert_eq!(counter.values, vec![1, 2, 300, 4]);
    }

    #[test]
    fn packed_run_cut_short() {
        let mut enc = Encoder::new();
        enc.raw(3, FieldValue::Bytes(&[0x02, 0xac]));
        assert!(matches!(
            decode(&enc.into_bytes()),
            Err(Error::UnexpectedEndOfMessage { .. })
        ));
    }

    #[test]
    fn scalars_last_write_wins() {
        let mut enc = Encoder::new();
        enc.uint64(2, 5);
        enc.string(1, Some("a"));
        enc.uint64(2, 9);
        enc.string(1, Some("b"));
        let counter = decode(&enc.into_bytes()).unwrap();
        assert_eq!(counter.total, 9);
        assert_eq!(counter.label.as_deref(), Some("b"));
    }

    #[test]
    fn repeated_nested_message_merges() {
        let mut enc = Encoder::new();
        enc.message(
            4,
            Some(&Counter {
                label: Some("first".into()),
                values: vec![1],
                ..Default::default()
            }),
        );
        enc.message(
            4,
            Some(&Counter {
                total: 3,
                values: vec![2],
                ..Default::default()
            }),
        );
        let counter = decode(&enc.into_bytes()).unwrap();
        let inner = counter.inner.unwrap();
        assert_eq!(inner.label.as_deref(), Some("first"));
        assert_eq!(inner.total, 3);
        assert_eq!(inner.values, vec![1, 2]);
    }

    #[test]
    fn unknown_fields_of_every_kind() {
        let mut enc = Encoder::new();
        enc.raw(100, FieldValue::Varint(7));
        enc.raw(101, FieldValue::Fixed64(7));
        enc.raw(2, FieldValue::Varint(42));
        enc.raw(102, FieldValue::Bytes(b"ignored"));
        enc.raw(103, FieldValue::Group(&[0x08, 0x01, 0x12, 0x00]));
        enc.raw(104, FieldValue::Fixed32(7));
        let counter = decode(&enc.into_bytes()).unwrap();
        assert_eq!(
            counter,
            Counter {
                total: 42,
                ..Default::default()
            }
        );
    }

    #[test]
    fn wrong_wire_kind() {
        let mut enc = Encoder::new();
        enc.raw(2, FieldValue::Bytes(b"not a number"));
        assert_eq!(
            decode(&enc.into_bytes()),
            Err(Error::WrongWireKind {
                field: 2,
                expected: WireKind::Varint,
                actual: WireKind::LengthDelimited,
            })
        );
    }

    #[test]
    fn nested_overrun() {
        // Field 4 holds 3 bytes, but the string inside claims 5.
        let buf = [0x22, 0x03, 0x0a, 0x05, b'a'];
        assert!(matches!(
            decode(&buf),
            Err(Error::UnexpectedEndOfMessage { expected: 5, actual: 1, .. })
        ));
    }

    #[test]
    fn depth_limit() {
        let mut counter = Counter::default();
        for _ in 0..5 {
            counter = Counter {
                inner: Some(Box::new(counter)),
                ..Default::default()
            };
        }
        let buf = Encoder::new().encode(&counter);

        let shallow = Decoder::with_params(DecodeOptions { max_depth: 4 });
        assert!(matches!(
            shallow.decode::<Counter>(&buf),
            Err(Error::ParseLimit(_))
        ));
        let deep = Decoder::with_params(DecodeOptions { max_depth: 5 });
        assert_eq!(deep.decode::<Counter>(&buf).unwrap(), counter);
    }
}
