//! The compact graph notation.
//!
//! This module only holds documentation. It describes the text format read by
//! [`crate::decode`] and written by [`crate::encode`].
//!
//! # Overview
//!
//! A graph is written as up to four blocks, separated by blank lines. Each
//! block starts with an unindented header; data rows follow, indented by
//! exactly two spaces.
//!
//! ```text
//! graph{id,type,label,directed}:
//!   user-model,class,User Management Classes,true
//!
//! nodes[3]{id,label,type}:
//!   User,User,class
//!   email,email: string,attribute
//!   login,"login(user, password)",method
//!
//! edges[2]{source,target,relation,label}:
//!   User,email,has,
//!   User,login,has,
//!
//! metadata:
//!   description: Example class diagram for user management
//!   version: 1.0.0
//!   tags: [user,auth,example]
//! ```
//!
//! # Headers
//!
//! | Header                 | Section                                           |
//! |------------------------|---------------------------------------------------|
//! | `graph{f1,f2,..}:`     | the single graph record                           |
//! | `nodes[N]{f1,f2,..}:`  | one node per row, keyed by its `id` column        |
//! | `edges[N]{f1,f2,..}:`  | one edge per row                                  |
//! | `metadata:`            | `key: value` lines                                |
//!
//! The field list in braces gives the column order of the rows below it. The
//! writer always uses these orders:
//!
//! - graph: `id,type,label,directed`
//! - nodes: `id,label,type`
//! - edges: `source,target,relation,label`
//!
//! The reader accepts any order and any subset. Columns it does not know are
//! kept in the entity's metadata; edges also understand `id` and `directed`.
//!
//! `N` is advisory. The reader takes however many rows follow, up to the next
//! header. Blank lines inside a section are allowed.
//!
//! Array headers with another name (`groups[2]{..}:`) are recognized so that
//! they end the previous section, but their rows are skipped.
//!
//! # Values
//!
//! Cells are split on commas outside double quotes, then trimmed.
//!
//! | Cell text            | Decoded as                        |
//! |----------------------|-----------------------------------|
//! | *(empty)*            | absent                            |
//! | `true` / `false`     | boolean                           |
//! | `42`, `-1.5`, `1e3`  | number                            |
//! | `"a, b"`             | string `a, b`                     |
//! | `"say ""hi"""`       | string `say "hi"`                 |
//! | anything else        | string, as written                |
//!
//! The writer quotes a string only when it contains a comma, a double quote or
//! a newline. A quoted string containing a newline continues on the following
//! physical lines until its closing quote.
//!
//! A bare cell that looks like a number is read as a number, so a code such as
//! `007` comes back as `7`. Node and edge text columns (`id`, `label`, `type`,
//! `source`, `target`, `relation`) are exempt: they keep the cell text.
//!
//! # Metadata
//!
//! Each metadata line is `key: value`, split at the first colon. A value in
//! square brackets is a list of strings, split like a row:
//!
//! ```text
//! metadata:
//!   tags: [user,"auth, sso"]
//!   note: "[not a list]"
//!   version: 1.0.0
//! ```
//!
//! Empty values are dropped. Scalar strings that look like a list are written
//! quoted.
//!
//! # Several graphs
//!
//! A document with a `graphs` list is written as one graph after another,
//! separated by a blank line. The reader honors only the first `graph{..}:`
//! header and stops at the second.
//!
//! # What does not survive a round trip
//!
//! - node and edge metadata, edge ids and edge `directed` flags (no columns for them)
//! - leading and trailing whitespace of any string
//! - empty strings (written as empty cells, read back as absent)
//! - list elements in metadata that were not strings (read back as strings)
//! - numeric-looking strings in graph header cells and metadata scalars
