//! The message graph.
//!
//! Every type here is an immutable record: fields are set through `new` and read through
//! accessors, and nothing outside this module can change them afterwards. Field numbers are
//! listed in [`format::schema`](crate::format::schema).

mod container;
mod grouping;
mod labels;
mod result;
mod root;

pub use self::container::{Annotated, Container, Entry, Flavor, Pair, Record};
pub use self::grouping::{Grouping, Named};
pub use self::labels::{Attribution, Category, Classified, Labeled};
pub use self::result::DataOrError;
pub use self::root::Root;
