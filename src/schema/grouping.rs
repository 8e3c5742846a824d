use serde::{Deserialize, Serialize};

use crate::de::{decode_message, push_uint64s, skip_field};
use crate::{DepthTracker, Encoder, Field, Message, Result};

/// A flag, a list of named counters, and six integer lists. The six lists are independent of
/// each other and may all have different lengths.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    p1: bool,
    p2: Vec<Named>,
    p3: Vec<u64>,
    p4: Vec<u64>,
    p5: Vec<u64>,
    p6: Vec<u64>,
    p7: Vec<u64>,
    p8: Vec<u64>,
}

impl Grouping {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p1: bool,
        p2: Vec<Named>,
        p3: Vec<u64>,
        p4: Vec<u64>,
        p5: Vec<u64>,
        p6: Vec<u64>,
        p7: Vec<u64>,
        p8: Vec<u64>,
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

    pub fn p1(&self) -> bool {
        self.p1
    }

    pub fn p2(&self) -> &[Named] {
        &self.p2
    }

    pub fn p3(&self) -> &[u64] {
        &self.p3
    }

    pub fn p4(&self) -> &[u64] {
        &self.p4
    }

    pub fn p5(&self) -> &[u64] {
        &self.p5
    }

    pub fn p6(&self) -> &[u64] {
        &self.p6
    }

    pub fn p7(&self) -> &[u64] {
        &self.p7
    }

    pub fn p8(&self) -> &[u64] {
        &self.p8
    }
}

impl Message for Grouping {
    fn encode_fields(&self, enc: &mut Encoder) {
        enc.bool(1, self.p1);
        enc.messages(2, &self.p2);
        enc.uint64s(3, &self.p3);
        enc.uint64s(4, &self.p4);
        enc.uint64s(5, &self.p5);
        enc.uint64s(6, &self.p6);
        enc.uint64s(7, &self.p7);
        enc.uint64s(8, &self.p8);
    }

    fn merge_field(&mut self, field: Field<'_>, depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => self.p1 = field.as_bool()?,
            2 => self.p2.push(decode_message(&field, depth)?),
            3 => push_uint64s(&mut self.p3, &field)?,
            4 => push_uint64s(&mut self.p4, &field)?,
            5 => push_uint64s(&mut self.p5, &field)?,
            6 => push_uint64s(&mut self.p6, &field)?,
            7 => push_uint64s(&mut self.p7, &field)?,
            8 => push_uint64s(&mut self.p8, &field)?,
            _ => return skip_field("Grouping", &field),
        }
        Ok(())
    }
}

/// Field numbers here follow declaration order: p1 = 1, p2 = 2.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Named {
    p1: Option<String>,
    p2: u64,
}

impl Named {
    pub fn new(p1: Option<String>, p2: u64) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> Option<&str> {
        self.p1.as_deref()
    }

    pub fn p2(&self) -> u64 {
        self.p2
    }
}

impl Message for Named {
    fn encode_fields(&self, enc: &mut Encoder) {
        enc.string(1, self.p1.as_deref());
        enc.uint64(2, self.p2);
    }

    fn merge_field(&mut self, field: Field<'_>, _depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => self.p1 = Some(field.as_str()?.to_owned()),
            2 => self.p2 = field.as_u64()?,
            _ => return skip_field("Named", &field),
        }
        Ok(())
    }
}
