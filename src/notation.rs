//! Output Notation
//!
//! This module documents the textual notation produced by the encoder. The output
//! is meant to be read by a Common Lisp reader as-is: strings, lists, keyword
//! plists and the `t`/`nil` literals.
//!
//! # Grammar
//!
//! ```text
//! value      := string | list | plist | atom
//! string     := '"' char* '"'                 ; '"' inside escaped as '\"'
//! list       := '(' (value (' ' value)*)? ')'
//! plist      := '(' (pair (' ' pair)*)? ')'
//! pair       := (':' key ' ' value) | value    ; bare value when key is null
//! atom       := 't' | 'nil' | number-literal | ':' keyword-chars
//! ```
//!
//! Separators are always exactly one space. No newlines or indentation are ever
//! emitted, so the output can be embedded into a larger message verbatim.
//!
//! # Primitives
//!
//! | Value | Notation | Example |
//! |-------|----------|---------|
//! | Null | `nil` | `nil` |
//! | Boolean | `t` or `nil` | `t` |
//! | Integer | Decimal digits, optional `-` | `-42` |
//! | Float | Decimal with `.`, never an exponent | `2.5`, `3.0` |
//! | Big integer | Decimal digits | `123456789012345678901234567890` |
//! | String | Double-quoted | `"foo"` |
//! | Keyword | `:` followed by anything but a space | `:feminine` |
//!
//! ## Strings
//!
//! Strings are always quoted. Inside the quotes only `"` is escaped, as `\"`.
//! Backslashes pass through as they are, and so does every non-ASCII character:
//!
//! ```text
//! foo \ "bar"   ->   "foo \ \"bar\""
//! föø ”         ->   "föø ”"
//! ```
//!
//! Escaping backslashes as well is available as an opt-in through
//! [`LispOptions::with_backslash_escapes`](crate::LispOptions::with_backslash_escapes).
//!
//! ## Keywords
//!
//! A string that starts with `:` and holds no space is written bare. A single space
//! disqualifies it and it falls back to a quoted string:
//!
//! ```text
//! :feminine        ->   :feminine
//! :not a keyword   ->   ":not a keyword"
//! ```
//!
//! # Lists
//!
//! Sequences keep their order and nest freely:
//!
//! ```text
//! [[0, "foo"], [1, "\"bar\""]]   ->   ((0 "foo") (1 "\"bar\""))
//! ```
//!
//! # Plists
//!
//! Mappings become property lists:
//!
//! - entries whose value is null are dropped
//! - the remaining entries are sorted by key, the null key first
//! - a text key is written as `:key` followed by the encoded value
//! - a null key contributes the encoded value alone
//!
//! ```text
//! {"b": "foo", "a": 1, "c": null}   ->   (:a 1 :b "foo")
//! ```
//!
//! Keys are written as they are, without quoting or case conversion.
//!
//! ## Dates
//!
//! A mapping that holds a reserved date key (by default `yyyymmdd`) is a date. The
//! value under the date key is written verbatim, without quotes; the caller is
//! responsible for formatting it. The other keys are encoded normally:
//!
//! ```text
//! {"yyyymmdd": "19491001", "html": "Oct 1, 1949"}
//!     ->   (:html "Oct 1, 1949" :yyyymmdd 19491001)
//! ```
//!
//! # Error Records
//!
//! Errors render as `(:error symbol plist)`. The symbol is the error's type name in
//! hyphenated lower case; the plist holds the error's attributes plus its message
//! under `:message`, following the plist rules above:
//!
//! ```text
//! ValueError("Wrong thing")       ->   (:error value-error :message "Wrong thing")
//! NotImplementedError()           ->   (:error not-implemented-error)
//! ResourceNotFound(reply: "...")  ->   (:error resource-not-found :reply "...")
//! ```
//!
//! An encoded error is *falsy*: [`EncodedNode::is_falsy`](crate::EncodedNode::is_falsy)
//! returns `true` for it and `false` for every other node, `nil` included.
//!
//! # Unencodable Values
//!
//! Values no rule accepts, such as [`Value::Opaque`](crate::Value::Opaque) host
//! values or non-finite floats, fail with
//! [`Error::UnimplementedKind`](crate::Error::UnimplementedKind). The failure
//! propagates out of any sequence or mapping that contains them.
