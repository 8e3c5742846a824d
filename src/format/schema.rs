/*!

Field numbers for the message graph.

Field numbers are the identity of a field on the wire. Changing what a number
means is a breaking change.

# Root

| Field | Number | Type                       |
| --    | --     | --                         |
| p1    | 1      | uint64                     |
| p2    | 2      | Attribution                |
| p3    | 3      | Labeled                    |
| p4    | 4      | DataOrError\<Grouping\>    |
| p5    | 5      | Labeled                    |
| p7    | 6      | Classified                 |
| p8    | 7      | int64                      |
| p6    | 8      | DataOrError\<Container\>   |

# Attribution

| Field | Number | Type           |
| --    | --     | --             |
| p1    | 1      | string         |
| p2    | 2      | optional bool  |

# Labeled

| Field | Number | Type       |
| --    | --     | --         |
| p1    | 1      | string     |
| p2    | 2      | Classified |

# Classified

| Field | Number | Type     |
| --    | --     | --       |
| p1    | 1      | Category |
| p2    | 2      | string   |

Category: E1 = 0, E2 = 1, E3 = 2, E4 = 3. Other numbers decode as
`Unrecognized` and are written back unchanged. Only decoding builds that variant, so it
never carries a named number.

# DataOrError\<T\>

| Field | Number | Type       |
| --    | --     | --         |
| data  | 1      | T          |
| error | 2      | Classified |

At most one branch should be written. Readers keep the last one they see.

# Container

| Field | Number | Type               |
| --    | --     | --                 |
| p1    | 1      | repeated Entry     |
| p2    | 2      | optional Flavor    |

Flavor: E1 = 0, E2 = 1.

# Entry

Numbered in declaration order.

| Field | Number | Type               |
| --    | --     | --                 |
| p1    | 1      | string             |
| p2    | 2      | repeated Record    |
| p3    | 3      | repeated Annotated |
| p4    | 4      | bool               |

# Record

| Field | Number | Type            |
| --    | --     | --              |
| p1    | 1      | string          |
| p2    | 2      | repeated string |

# Annotated

| Field | Number | Type          |
| --    | --     | --            |
| p1    | 1      | string        |
| p2    | 2      | repeated Pair |

# Pair

| Field | Number | Type   |
| --    | --     | --     |
| p3    | 1      | uint64 |
| p4    | 2      | string |

# Grouping

| Field | Number | Type            |
| --    | --     | --              |
| p1    | 1      | bool            |
| p2    | 2      | repeated Named  |
| p3    | 3      | repeated uint64 |
| p4    | 4      | repeated uint64 |
| p5    | 5      | repeated uint64 |
| p6    | 6      | repeated uint64 |
| p7    | 7      | repeated uint64 |
| p8    | 8      | repeated uint64 |

# Named

Numbered in declaration order.

| Field | Number | Type   |
| --    | --     | --     |
| p1    | 1      | string |
| p2    | 2      | uint64 |

*/
