use std::fmt;

use crate::tag::WireKind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a varint failed to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarIntFault {
    /// Input ran out while the continuation bit was still set.
    Truncated,
    /// More than 10 bytes, or the 10th byte carries bits beyond 64.
    Overlong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Occurs when a varint is too long to fit in 64 bits, or when the standalone varint decoder
    /// runs out of input. The message parser reports running out of input as one of the
    /// truncation errors instead.
    MalformedVarint(VarIntFault),
    /// The top-level stream ended in the middle of a tag or a value.
    TruncatedInput { step: &'static str },
    /// A top-level length-delimited field declared more bytes than remain in the stream.
    TruncatedPayload {
        step: &'static str,
        actual: usize,
        expected: usize,
    },
    /// A field inside a nested message ran past the end of the message's envelope.
    UnexpectedEndOfMessage {
        step: &'static str,
        actual: usize,
        expected: usize,
    },
    /// A known field number arrived with a wire kind that field can't be read from.
    WrongWireKind {
        field: u32,
        expected: WireKind,
        actual: WireKind,
    },
    /// Basic encoding failure: reserved wire kinds, field number zero, invalid UTF-8, and the
    /// like.
    BadEncode(String),
    /// Decoding hit some parsing limit.
    ParseLimit(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MalformedVarint(VarIntFault::Truncated) => {
                f.write_str("Malformed varint: input ended mid-sequence")
            }
            Error::MalformedVarint(VarIntFault::Overlong) => {
                f.write_str("Malformed varint: longer than 64 bits")
            }
            Error::TruncatedInput { step } => {
                write!(f, "Input ended early on step [{}]", step)
            }
            Error::TruncatedPayload {
                step,
                actual,
                expected,
            } => write!(
                f,
                "Expected payload length {}, but only {} bytes remain on step [{}]",
                expected, actual, step
            ),
            Error::UnexpectedEndOfMessage {
                step,
                actual,
                expected,
            } => write!(
                f,
                "Nested message ended early: needed {} bytes, but only {} remain on step [{}]",
                expected, actual, step
            ),
            Error::WrongWireKind {
                field,
                expected,
                actual,
            } => write!(
                f,
                "Field {} should use wire kind {:?}, but got {:?}",
                field, expected, actual
            ),
            Error::BadEncode(ref err) => write!(f, "Basic data encoding failure: {}", err),
            Error::ParseLimit(ref err) => write!(f, "Hit parsing limit: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// True for the errors that mean "the input stopped too soon", as opposed to input that is
    /// malformed.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            Error::TruncatedInput { .. }
                | Error::TruncatedPayload { .. }
                | Error::UnexpectedEndOfMessage { .. }
        )
    }
}
