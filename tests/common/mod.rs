//! Random message graphs. `scale` bounds the length of every list in the graph.
#![allow(dead_code)]

use long_proto::schema::*;
use long_proto::ProtoEnum;
use rand::distributions::Alphanumeric;
use rand::prelude::*;

pub fn string<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(0..16);
    Alphanumeric
        .sample_iter(&mut *rng)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn opt_string<R: Rng>(rng: &mut R) -> Option<String> {
    if rng.gen_bool(0.8) {
        Some(string(rng))
    } else {
        None
    }
}

pub fn number<R: Rng>(rng: &mut R) -> u64 {
    match rng.gen_range(0..4) {
        0 => 0,
        1 => rng.gen_range(0..128),
        2 => rng.gen(),
        _ => rng.gen::<u64>() >> rng.gen_range(0..64),
    }
}

pub fn list<R: Rng, T>(rng: &mut R, scale: usize, mut f: impl FnMut(&mut R) -> T) -> Vec<T> {
    let len = rng.gen_range(0..=scale);
    (0..len).map(|_| f(rng)).collect()
}

pub fn category<R: Rng>(rng: &mut R) -> Category {
    Category::from_i32(rng.gen_range(-2..6))
}

pub fn classified<R: Rng>(rng: &mut R) -> Classified {
    Classified::new(category(rng), opt_string(rng))
}

pub fn labeled<R: Rng>(rng: &mut R) -> Labeled {
    let p1 = opt_string(rng);
    let p2 = rng.gen_bool(0.7).then(|| classified(rng));
    Labeled::new(p1, p2)
}

pub fn attribution<R: Rng>(rng: &mut R) -> Attribution {
    let p1 = opt_string(rng);
    let p2 = [None, Some(false), Some(true)][rng.gen_range(0..3)];
    Attribution::new(p1, p2)
}

pub fn data_or_error<R: Rng, T>(rng: &mut R, f: impl FnOnce(&mut R) -> T) -> DataOrError<T> {
    match rng.gen_range(0..4) {
        0 => DataOrError::Empty,
        1 => DataOrError::Error(classified(rng)),
        _ => DataOrError::Data(f(rng)),
    }
}

pub fn named<R: Rng>(rng: &mut R) -> Named {
    Named::new(opt_string(rng), number(rng))
}

pub fn grouping<R: Rng>(rng: &mut R, scale: usize) -> Grouping {
    Grouping::new(
        rng.gen(),
        list(rng, scale, named),
        list(rng, scale, number),
        list(rng, scale, number),
        list(rng, scale, number),
        list(rng, scale, number),
        list(rng, scale, number),
        list(rng, scale, number),
    )
}

pub fn pair<R: Rng>(rng: &mut R) -> Pair {
    Pair::new(number(rng), opt_string(rng))
}

pub fn record<R: Rng>(rng: &mut R, scale: usize) -> Record {
    Record::new(opt_string(rng), list(rng, scale, string))
}

pub fn annotated<R: Rng>(rng: &mut R, scale: usize) -> Annotated {
    Annotated::new(opt_string(rng), list(rng, scale, pair))
}

pub fn entry<R: Rng>(rng: &mut R, scale: usize) -> Entry {
    Entry::new(
        opt_string(rng),
        list(rng, scale, |rng| record(rng, scale)),
        list(rng, scale, |rng| annotated(rng, scale)),
        rng.gen(),
    )
}

pub fn container<R: Rng>(rng: &mut R, scale: usize) -> Container {
    let p1 = list(rng, scale, |rng| entry(rng, scale));
    let p2 = rng
        .gen_bool(0.5)
        .then(|| Flavor::from_i32(rng.gen_range(0..3)));
    Container::new(p1, p2)
}

fn maybe<R: Rng, T>(rng: &mut R, f: impl FnOnce(&mut R) -> T) -> Option<T> {
    if rng.gen_bool(0.85) {
        Some(f(rng))
    } else {
        None
    }
}

pub fn root<R: Rng>(rng: &mut R, scale: usize) -> Root {
    Root::new(
        number(rng),
        maybe(rng, attribution),
        maybe(rng, labeled),
        maybe(rng, |rng| data_or_error(rng, |rng| grouping(rng, scale))),
        maybe(rng, labeled),
        maybe(rng, |rng| data_or_error(rng, |rng| container(rng, scale))),
        maybe(rng, classified),
        number(rng) as i64,
    )
}

/// A root that passes every caller-side check.
pub fn valid_root<R: Rng>(rng: &mut R, scale: usize) -> Root {
    let mut entries = list(rng, scale, |rng| entry(rng, scale));
    entries.insert(
        0,
        Entry::new(
            Some(string(rng)),
            vec![record(rng, scale)],
            list(rng, scale, |rng| annotated(rng, scale)),
            rng.gen(),
        ),
    );
    Root::new(
        number(rng),
        Some(attribution(rng)),
        Some(labeled(rng)),
        Some(data_or_error(rng, |rng| grouping(rng, scale))),
        Some(labeled(rng)),
        Some(DataOrError::Data(Container::new(entries, Some(Flavor::E2)))),
        Some(classified(rng)),
        (number(rng) as i64).wrapping_neg(),
    )
}
