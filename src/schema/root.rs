use serde::{Deserialize, Serialize};

use crate::de::{merge_message, skip_field};
use crate::schema::{Attribution, Classified, Container, DataOrError, Grouping, Labeled};
use crate::{DepthTracker, Encoder, Field, Message, Result};

/// The top of the graph.
///
/// Field numbers don't follow the field names: p6 is field 8, p7 is field 6, and p8 is field 7.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    p1: u64,
    p2: Option<Attribution>,
    p3: Option<Labeled>,
    p4: Option<DataOrError<Grouping>>,
    p5: Option<Labeled>,
    p6: Option<DataOrError<Container>>,
    p7: Option<Classified>,
    p8: i64,
}

impl Root {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p1: u64,
        p2: Option<Attribution>,
        p3: Option<Labeled>,
        p4: Option<DataOrError<Grouping>>,
        p5: Option<Labeled>,
        p6: Option<DataOrError<Container>>,
        p7: Option<Classified>,
        p8: i64,
    ) -> Self {
        Self {
            p1,
            p2,
            p3,
            p4,
            p5,
            p6,
            p7,
            p8,
        }
    }

    pub fn p1(&self) -> u64 {
        self.p1
    }

    pub fn p2(&self) -> Option<&Attribution> {
        self.p2.as_ref()
    }

    pub fn p3(&self) -> Option<&Labeled> {
        self.p3.as_ref()
    }

    pub fn p4(&self) -> Option<&DataOrError<Grouping>> {
        self.p4.as_ref()
    }

    pub fn p5(&self) -> Option<&Labeled> {
        self.p5.as_ref()
    }

    pub fn p6(&self) -> Option<&DataOrError<Container>> {
        self.p6.as_ref()
    }

    pub fn p7(&self) -> Option<&Classified> {
        self.p7.as_ref()
    }

    pub fn p8(&self) -> i64 {
        self.p8
    }
}

impl Message for Root {
    fn encode_fields(&self, enc: &mut Encoder) {
        enc.uint64(1, self.p1);
        enc.message(2, self.p2.as_ref());
        enc.message(3, self.p3.as_ref());
        enc.message(4, self.p4.as_ref());
        enc.message(5, self.p5.as_ref());
        enc.message(6, self.p7.as_ref());
        enc.int64(7, self.p8);
        enc.message(8, self.p6.as_ref());
    }

    fn merge_field(&mut self, field: Field<'_>, depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => self.p1 = field.as_u64()?,
            2 => merge_message(self.p2.get_or_insert_with(Default::default), &field, depth)?,
            3 => merge_message(self.p3.get_or_insert_with(Default::default), &field, depth)?,
            4 => merge_message(self.p4.get_or_insert_with(Default::default), &field, depth)?,
            5 => merge_message(self.p5.get_or_insert_with(Default::default), &field, depth)?,
            6 => merge_message(self.p7.get_or_insert_with(Default::default), &field, depth)?,
            7 => self.p8 = field.as_i64()?,
            8 => merge_message(self.p6.get_or_insert_with(Default::default), &field, depth)?,
            _ => return skip_field("Root", &field),
        }
        Ok(())
    }
}
