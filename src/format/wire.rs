/*!

The raw wire format.

A message is a sequence of fields with no header, no count, and no terminator.
Its length always comes from outside: the end of the input for a top-level
message, or the length prefix of the field holding a nested message.

# Varints

Unsigned integers are written 7 bits at a time, least-significant group first.
Every byte except the last has its high bit set.

```text
300 = 0b1_0010_1100

+----------+----------+
| 10101100 | 00000010 |
+----------+----------+
  ^ more     ^ last
```

A 64-bit value takes at most 10 bytes, and the 10th byte may only hold bit 63.
A longer chain, or a 10th byte with any other bit set, fails to decode with
`MalformedVarint`.

# Tags

Each field starts with a tag: the varint `(field_number << 3) | wire_kind`.
Field numbers run from 1 to 2^29 - 1.

| Kind | Name             | Value that follows                         |
| --   | --               | --                                         |
| 0    | Varint           | One varint                                 |
| 1    | Fixed64          | 8 bytes, little-endian                     |
| 2    | Length-delimited | A varint length, then that many bytes      |
| 3    | Start group      | Fields, up to the matching end-group tag   |
| 4    | End group        | Nothing                                    |
| 5    | Fixed32          | 4 bytes, little-endian                     |

Kinds 6 and 7 are invalid. The message graph only ever writes kinds 0 and 2;
the rest exist so that unknown fields of any kind can be skipped.

# Values

| Type            | Kind | Encoding                                                 |
| --              | --   | --                                                       |
| uint64          | 0    | The value                                                |
| int64           | 0    | The two's-complement bit pattern as a u64 (no zig-zag)   |
| bool            | 0    | 0 or 1. Any non-zero value decodes as true               |
| enum            | 0    | The 32-bit number, sign-extended to 64 bits              |
| string          | 2    | UTF-8 bytes                                              |
| message         | 2    | The message's fields                                     |
| repeated uint64 | 0/2  | One field per element, or one packed run of varints      |
| repeated other  | 2    | One field per element, in order                          |

Negative int64 and enum values always take 10 bytes.

# Defaults

- Scalars equal to zero (including `false` and an enum's zero variant) are not written.
- Optional scalars are written whenever present, even when zero.
- Strings and nested messages are written whenever present, even when empty.
- Empty repeated fields are not written. A repeated field that is missing
    decodes as an empty list.

Because zero scalars are not written, decoding can't tell a field that was set
to zero from one that was never set.

# Reading

- Fields may appear in any order. Writers use ascending field number.
- Unknown field numbers are skipped using their wire kind.
- A scalar seen twice keeps the last value.
- A repeated field seen again appends. Packed and unpacked runs may be mixed.
- A singular nested message seen twice is merged: its second occurrence is
    decoded on top of the first.
- A data-or-error union keeps whichever branch arrived last.

# Errors

| Error                    | Cause                                                          |
| --                       | --                                                             |
| `MalformedVarint`        | Varint chain longer than 64 bits                               |
| `TruncatedInput`         | Top-level input ends inside a tag or value                     |
| `TruncatedPayload`       | Top-level length prefix runs past the end of the input         |
| `UnexpectedEndOfMessage` | A field inside a nested message runs past the message's end    |
| `WrongWireKind`          | Known field number with a wire kind it can't be read from      |
| `BadEncode`              | Kind 6 or 7, field number 0, bad UTF-8, or an unmatched group  |
| `ParseLimit`             | Nesting deeper than the decoder's limit                        |

Cutting a valid encoding short at any point either decodes (if the cut lands
between top-level fields) or fails with one of the three truncation errors.

*/
