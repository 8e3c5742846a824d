use serde::{Deserialize, Serialize};

use crate::de::{merge_message, skip_field};
use crate::{DepthTracker, Encoder, Field, Message, ProtoEnum, Result, UnknownValue};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Category {
    #[default]
    E1,
    E2,
    E3,
    E4,
    /// A number outside the named variants, kept so it is written back out unchanged. Only
    /// decoding or [`ProtoEnum::from_i32`] produces one.
    Unrecognized(UnknownValue),
}

impl ProtoEnum for Category {
    fn from_i32(v: i32) -> Self {
        match v {
            0 => Category::E1,
            1 => Category::E2,
            2 => Category::E3,
            3 => Category::E4,
            v => Category::Unrecognized(UnknownValue::new(v)),
        }
    }

    fn to_i32(self) -> i32 {
        match self {
            Category::E1 => 0,
            Category::E2 => 1,
            Category::E3 => 2,
            Category::E4 => 3,
            Category::Unrecognized(v) => v.get(),
        }
    }
}

impl From<i32> for Category {
    fn from(v: i32) -> Self {
        Category::from_i32(v)
    }
}

impl From<Category> for i32 {
    fn from(v: Category) -> i32 {
        v.to_i32()
    }
}

/// A name with an optional flag. An absent flag is not the same as `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    p1: Option<String>,
    p2: Option<bool>,
}

impl Attribution {
    pub fn new(p1: Option<String>, p2: Option<bool>) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> Option<&str> {
        self.p1.as_deref()
    }

    pub fn p2(&self) -> Option<bool> {
        self.p2
    }
}

impl Message for Attribution {
    fn encode_fields(&self, enc: &mut Encoder) {
        enc.string(1, self.p1.as_deref());
        enc.optional_bool(2, self.p2);
    }

    fn merge_field(&mut self, field: Field<'_>, _depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => self.p1 = Some(field.as_str()?.to_owned()),
            2 => self.p2 = Some(field.as_bool()?),
            _ => return skip_field("Attribution", &field),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labeled {
    p1: Option<String>,
    p2: Option<Classified>,
}

impl Labeled {
    pub fn new(p1: Option<String>, p2: Option<Classified>) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> Option<&str> {
        self.p1.as_deref()
    }

    pub fn p2(&self) -> Option<&Classified> {
        self.p2.as_ref()
    }
}

impl Message for Labeled {
    fn encode_fields(&self, enc: &mut Encoder) {
        enc.string(1, self.p1.as_deref());
        enc.message(2, self.p2.as_ref());
    }

    fn merge_field(&mut self, field: Field<'_>, depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => self.p1 = Some(field.as_str()?.to_owned()),
            2 => merge_message(
                self.p2.get_or_insert_with(Default::default),
                &field,
                depth,
            )?,
            _ => return skip_field("Labeled", &field),
        }
        Ok(())
    }
}

/// A category with a description. Also the payload of every error branch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classified {
    p1: Category,
    p2: Option<String>,
}

impl Classified {
    pub fn new(p1: Category, p2: Option<String>) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> Category {
        self.p1
    }

    pub fn p2(&self) -> Option<&str> {
        self.p2.as_deref()
    }
}

impl Message for Classified {
    fn encode_fields(&self, enc: &mut Encoder) {
        enc.enumeration(1, self.p1);
        enc.string(2, self.p2.as_deref());
    }

    fn merge_field(&mut self, field: Field<'_>, _depth: DepthTracker) -> Result<()> {
        match field.number() {
            1 => self.p1 = Category::from_i32(field.as_i32()?),
            2 => self.p2 = Some(field.as_str()?.to_owned()),
            _ => return skip_field("Classified", &field),
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{decode, encode, FieldValue};

    #[test]
    fn absent_flag_is_not_false() {
        let absent = Attribution::new(Some("a".into()), None);
        let unset = Attribution::new(Some("a".into()), Some(false));
        assert_eq!(encode(&absent), vec![0x0a, 0x01, b'a']);
        assert_eq!(encode(&unset), vec![0x0a, 0x01, b'a', 0x10, 0x00]);
        assert_eq!(decode::<Attribution>(&encode(&absent)).unwrap().p2(), None);
        assert_eq!(
            decode::<Attribution>(&encode(&unset)).unwrap().p2(),
            Some(false)
        );
    }

    #[test]
    fn null_and_empty_strings_differ() {
        let null = Classified::new(Category::E2, None);
        let empty = Classified::new(Category::E2, Some(String::new()));
        assert_eq!(encode(&null), vec![0x08, 0x01]);
        assert_eq!(encode(&empty), vec![0x08, 0x01, 0x12, 0x00]);
        assert_eq!(decode::<Classified>(&encode(&empty)).unwrap(), empty);
        assert_eq!(decode::<Classified>(&encode(&null)).unwrap(), null);
    }

    #[test]
    fn default_category_not_written() {
        assert!(encode(&Classified::new(Category::E1, None)).is_empty());
    }

    #[test]
    fn unrecognized_category() {
        let mut enc = Encoder::new();
        enc.raw(1, FieldValue::Varint(9));
        let decoded: Classified = decode(&enc.into_bytes()).unwrap();
        assert!(matches!(decoded.p1(), Category::Unrecognized(v) if v.get() == 9));
        assert_eq!(decoded.p1().to_i32(), 9);

        let negative = Classified::new(Category::from_i32(-3), None);
        let buf = encode(&negative);
        assert_eq!(buf.len(), 11);
        assert_eq!(decode::<Classified>(&buf).unwrap(), negative);
    }

    #[test]
    fn enum_numbers() {
        for (v, cat) in [
            (0, Category::E1),
            (1, Category::E2),
            (2, Category::E3),
            (3, Category::E4),
            (4, Category::from_i32(4)),
        ] {
            assert_eq!(Category::from_i32(v), cat);
            assert_eq!(cat.to_i32(), v);
        }
    }

    #[test]
    fn every_category_number_roundtrips() {
        for v in [i32::MIN, -3, -1, 0, 1, 2, 3, 4, 1000, i32::MAX] {
            let category = Category::from_i32(v);
            assert_eq!(category.to_i32(), v);
            assert_eq!(
                matches!(category, Category::Unrecognized(_)),
                !(0..=3).contains(&v),
                "{} landed on the wrong variant",
                v
            );
            let classified = Classified::new(category, Some("x".into()));
            assert_eq!(
                decode::<Classified>(&encode(&classified)).unwrap(),
                classified,
                "number {}",
                v
            );
        }
    }

    #[test]
    fn category_serde_uses_numbers() {
        assert_eq!(serde_json::to_string(&Category::E4).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Category>("2").unwrap(), Category::E3);
        let unknown: Category = serde_json::from_str("17").unwrap();
        assert_eq!(unknown, Category::from_i32(17));
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "17");
    }

    #[test]
    fn labeled_nested() {
        let labeled = Labeled::new(
            Some("label".into()),
            Some(Classified::new(Category::E4, Some("why".into()))),
        );
        let buf = encode(&labeled);
        assert_eq!(
            buf,
            vec![
                0x0a, 0x05, b'l', b'a', b'b', b'e', b'l', 0x12, 0x07, 0x08, 0x03, 0x12, 0x03,
                b'w', b'h', b'y'
            ]
        );
        assert_eq!(decode::<Labeled>(&buf).unwrap(), labeled);
    }
}
