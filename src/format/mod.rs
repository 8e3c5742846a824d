/*!

The wire contract for long-proto.

These pages describe the bytes, independent of this crate's types. Two
implementations that follow them produce identical output for identical graphs.

- [Raw Wire Format](./wire/index.html)
- [Message Graph Field Numbers](./schema/index.html)

*/

pub mod schema;
pub mod wire;
