use serde::{Deserialize, Serialize};

use crate::de::{decode_message, skip_field};
use crate::schema::Classified;
use crate::{DepthTracker, Encoder, Field, Message, Result};

/// Either a payload, an error description, or nothing.
///
/// On the wire this is a message with the payload under field 1 and the error under field 2.
/// Nothing stops a writer from sending both; the decoder keeps whichever branch arrived last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataOrError<T> {
    Empty,
    Data(T),
    Error(Classified),
}

impl<T> Default for DataOrError<T> {
    fn default() -> Self {
        DataOrError::Empty
    }
}

impl<T> DataOrError<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            DataOrError::Data(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Classified> {
        match self {
            DataOrError::Error(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DataOrError::Empty)
    }
}

impl<T: Message> Message for DataOrError<T> {
    fn encode_fields(&self, enc: &mut Encoder) {
        match self {
            DataOrError::Empty => (),
            DataOrError::Data(v) => enc.message(1, Some(v)),
            DataOrError::Error(v) => enc.message(2, Some(v)),
        }
    }

    fn merge_field(&mut self, field: Field<'_>, depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => *self = DataOrError::Data(decode_message(&field, depth)?),
            2 => *self = DataOrError::Error(decode_message(&field, depth)?),
            _ => return skip_field("DataOrError", &field),
        }
        Ok(())
    }
}
