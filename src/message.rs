use crate::depth_tracking::DepthTracker;
use crate::error::Result;
use crate::field::Field;
use crate::ser::Encoder;

/// A record with a fixed set of numbered fields.
///
/// Implementations write their fields through the [`Encoder`] helpers, which leave out absent and
/// default values, and read fields back one at a time. Field numbers not in the record's schema
/// go to [`skip_field`](crate::de::skip_field).
pub trait Message: Default {
    /// Write every present field, in ascending field-number order.
    fn encode_fields(&self, enc: &mut Encoder);

    /// Fold one decoded field into `self`. `depth` is the nesting level of `self`.
    fn merge_field(&mut self, field: Field<'_>, depth: DepthTracker) -> Result<()>;
}

/// An enum whose wire form is its 32-bit number. Every number maps to some value, so a number
/// this side doesn't know about survives a decode and re-encode.
pub trait ProtoEnum: Copy {
    fn from_i32(v: i32) -> Self;
    fn to_i32(self) -> i32;
}

/// An enum number with no named variant. Only [`ProtoEnum::from_i32`] implementations in this
/// crate build one, so it never holds a number a named variant already uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnknownValue(i32);

impl UnknownValue {
    pub(crate) fn new(v: i32) -> Self {
        Self(v)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}
