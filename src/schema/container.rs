use serde::{Deserialize, Serialize};

use crate::de::{decode_message, skip_field};
use crate::{DepthTracker, Encoder, Field, Message, ProtoEnum, Result, UnknownValue};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Flavor {
    #[default]
    E1,
    E2,
    /// Any other number. Only decoding or [`ProtoEnum::from_i32`] produces one.
    Unrecognized(UnknownValue),
}

impl ProtoEnum for Flavor {
    fn from_i32(v: i32) -> Self {
        match v {
            0 => Flavor::E1,
            1 => Flavor::E2,
            v => Flavor::Unrecognized(UnknownValue::new(v)),
        }
    }

    fn to_i32(self) -> i32 {
        match self {
            Flavor::E1 => 0,
            Flavor::E2 => 1,
            Flavor::Unrecognized(v) => v.get(),
        }
    }
}

impl From<i32> for Flavor {
    fn from(v: i32) -> Self {
        Flavor::from_i32(v)
    }
}

impl From<Flavor> for i32 {
    fn from(v: Flavor) -> i32 {
        v.to_i32()
    }
}

/// A list of entries and an optional flavor. `Some(Flavor::E1)` is written out even though E1 is
/// the zero value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    p1: Vec<Entry>,
    p2: Option<Flavor>,
}

impl Container {
    pub fn new(p1: Vec<Entry>, p2: Option<Flavor>) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> &[Entry] {
        &self.p1
    }

    pub fn p2(&self) -> Option<Flavor> {
        self.p2
    }
}

impl Message for Container {
    fn encode_fields(&self, enc: &mut Encoder) {
        enc.messages(1, &self.p1);
        enc.optional_enumeration(2, self.p2);
    }

    fn merge_field(&mut self, field: Field<'_>, depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => self.p1.push(decode_message(&field, depth)?),
            2 => self.p2 = Some(Flavor::from_i32(field.as_i32()?)),
            _ => return skip_field("Container", &field),
        }
        Ok(())
    }
}

/// Field numbers here follow declaration order: p1 = 1, p2 = 2, p3 = 3, p4 = 4.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    p1: Option<String>,
    p2: Vec<Record>,
    p3: Vec<Annotated>,
    p4: bool,
}

impl Entry {
    pub fn new(p1: Option<String>, p2: Vec<Record>, p3: Vec<Annotated>, p4: bool) -> Self {
        Self { p1, p2, p3, p4 }
    }

    pub fn p1(&self) -> Option<&str> {
        self.p1.as_deref()
    }

    pub fn p2(&self) -> &[Record] {
        &self.p2
    }

    pub fn p3(&self) -> &[Annotated] {
        &self.p3
    }

    pub fn p4(&self) -> bool {
        self.p4
    }
}

impl Message for Entry {
    fn encode_fields(&self, enc: &mut Encoder) {
        enc.string(1, self.p1.as_deref());
        enc.messages(2, &self.p2);
        enc.messages(3, &self.p3);
        enc.bool(4, self.p4);
    }

    fn merge_field(&mut self, field: Field<'_>, depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => self.p1 = Some(field.as_str()?.to_owned()),
            2 => self.p2.push(decode_message(&field, depth)?),
            3 => self.p3.push(decode_message(&field, depth)?),
            4 => self.p4 = field.as_bool()?,
            _ => return skip_field("Entry", &field),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    p1: Option<String>,
    p2: Vec<String>,
}

impl Record {
    pub fn new(p1: Option<String>, p2: Vec<String>) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> Option<&str> {
        self.p1.as_deref()
    }

    pub fn p2(&self) -> &[String] {
        &self.p2
    }
}

impl Message for Record {
    fn encode_fields(&self, enc: &mut Encoder) {
        enc.string(1, self.p1.as_deref());
        enc.strings(2, &self.p2);
    }

    fn merge_field(&mut self, field: Field<'_>, _depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => self.p1 = Some(field.as_str()?.to_owned()),
            2 => self.p2.push(field.as_str()?.to_owned()),
            _ => return skip_field("Record", &field),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotated {
    p1: Option<String>,
    p2: Vec<Pair>,
}

impl Annotated {
    pub fn new(p1: Option<String>, p2: Vec<Pair>) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> Option<&str> {
        self.p1.as_deref()
    }

    pub fn p2(&self) -> &[Pair] {
        &self.p2
    }
}

impl Message for Annotated {
    fn encode_fields(&self, enc: &mut Encoder) {
        enc.string(1, self.p1.as_deref());
        enc.messages(2, &self.p2);
    }

    fn merge_field(&mut self, field: Field<'_>, depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => self.p1 = Some(field.as_str()?.to_owned()),
            2 => self.p2.push(decode_message(&field, depth)?),
            _ => return skip_field("Annotated", &field),
        }
        Ok(())
    }
}

/// A number and a string. Its fields are named p3 and p4 but sit at field numbers 1 and 2.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    p3: u64,
    p4: Option<String>,
}

impl Pair {
    pub fn new(p3: u64, p4: Option<String>) -> Self {
        Self { p3, p4 }
    }

    pub fn p3(&self) -> u64 {
        self.p3
    }

    pub fn p4(&self) -> Option<&str> {
        self.p4.as_deref()
    }
}

impl Message for Pair {
    fn encode_fields(&self, enc: &mut Encoder) {
        enc.uint64(1, self.p3);
        enc.string(2, self.p4.as_deref());
    }

    fn merge_field(&mut self, field: Field<'_>, _depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => self.p3 = field.as_u64()?,
            2 => self.p4 = Some(field.as_str()?.to_owned()),
            _ => return skip_field("Pair", &field),
        }
        Ok(())
    }
}
