//! long-proto is a tagged, length-prefixed binary codec together with the schema of one large,
//! deeply nested message graph.
//!
//! The wire format is the one protocol buffers use:
//!
//! - Every field is a tag (field number and wire kind, packed into a varint) followed by its
//!     value
//! - Integers, bools and enums are varints. Signed integers use their two's-complement bit
//!     pattern
//! - Strings, nested messages and packed integer lists are length-delimited
//! - Fields that are absent, zero, or empty are not written at all
//! - Field numbers the reader doesn't know are skipped, whatever their wire kind
//!
//! The codec itself is schema-agnostic: any type implementing [`Message`] can be encoded and
//! decoded. The [`schema`] module holds the message graph, and [`check`] holds the sanity checks
//! a caller is expected to run on a decoded graph. See [`format`] for the full wire contract.
//!
//! ```
//! use long_proto::schema::{Attribution, Root};
//!
//! let root = Root::new(7, Some(Attribution::new(Some("me".into()), None)), None, None, None, None, None, -1);
//! let bytes = long_proto::encode(&root);
//! let back: Root = long_proto::decode(&bytes).unwrap();
//! assert_eq!(back, root);
//! ```

mod depth_tracking;
mod error;
mod message;

pub mod check;
pub mod de;
pub mod field;
pub mod format;
pub mod schema;
pub mod ser;
pub mod tag;
pub mod varint;

pub use self::de::{DecodeOptions, Decoder};
pub use self::depth_tracking::DepthTracker;
pub use self::error::{Error, Result, VarIntFault};
pub use self::field::{Field, FieldValue};
pub use self::message::{Message, ProtoEnum, UnknownValue};
pub use self::ser::{EncodeOptions, Encoder};
pub use self::tag::{Tag, WireKind};

/// Default limit on how deeply messages and groups may nest while decoding.
pub const MAX_DEPTH: usize = 100;

/// Encode a message with the default options.
pub fn encode<M: Message>(msg: &M) -> Vec<u8> {
    Encoder::new().encode(msg)
}

pub fn encode_with<M: Message>(msg: &M, options: EncodeOptions) -> Vec<u8> {
    Encoder::with_params(options).encode(msg)
}

/// Decode a message with the default options.
pub fn decode<M: Message>(buf: &[u8]) -> Result<M> {
    Decoder::new().decode(buf)
}

pub fn decode_with<M: Message>(buf: &[u8], options: DecodeOptions) -> Result<M> {
    Decoder::with_params(options).decode(buf)
}
