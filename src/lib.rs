//! Pragmatic field extraction for URI-like strings.
//!
//! This crate splits a URI-like string into its scheme, hostname, path, query parameters,
//! fragment, and scheme-specific credentials (`ftp`) or email address (`mailto`), and renders
//! the fields back into a single string.
//!
//! Note that this crate is **not** an RFC 3986 implementation.
//! It accepts a small grammar subset and tolerates malformed input by leaving the fields it
//! cannot find empty, rather than by failing the whole parse.
//! If you need strict validation, normalization, percent-encoding, or reference resolution,
//! use a dedicated URI crate.
//!
//! # Usage
//!
//! ```
//! use uri_fields::{ParsedUri, Scheme};
//!
//! let uri = ParsedUri::parse("https://www.example.com/path/to/page.html?q=rust&page=2#top");
//! assert_eq!(uri.scheme(), Some(Scheme::Https));
//! assert_eq!(uri.hostname(), "www.example.com");
//! assert_eq!(uri.path(), "/path/to/page.html");
//! assert_eq!(uri.parameters().get("q"), Some("rust"));
//! assert_eq!(uri.fragment(), "top");
//! assert_eq!(uri.tld(), "com");
//! ```
//!
//! # Grammars
//!
//! ```text
//! scheme    = "http" / "https" / "ftp" / "mailto"      ; case-sensitive
//! hostname  = 1*( 1*( word / "-" ) "." ) 1*lowalpha [ ":" 2*5digit ]
//! path      = 1*( "/" 1*alpha ) [ "." 1*lowalpha ]
//! params    = *( word-run "=" any-run delim ) word-run "=" word-run
//! email     = word-run "@" 1*( 1*lowalpha "." ) 1*lowalpha
//! ```
//!
//! Each field is found by searching the whole input, so the grammars above match anywhere in
//! the string, and a few positional rules decide between candidates.
//! See [`UriParser`] for the extraction order.
//!
//! # Setters
//!
//! Fields can be changed after parsing.
//! The scheme, hostname, and path setters re-validate the proposed value and report the
//! outcome as a `Result`, while the other setters accept any value.
//! A rejected scheme resets the scheme to "none", and a rejected hostname or path keeps the
//! previous value.
//!
//! # Features
//!
//! * `serde`: implements `serde::Serialize` for the data types, and `serde::Deserialize` for
//!   the types which cannot break the field grammars ([`Scheme`], [`ParserConfig`],
//!   [`Parameters`]).
//! * `tracing`: emits `tracing` events while extracting fields and when a setter rejects a
//!   value.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod log;

pub mod fields;
mod format;
pub mod params;
pub mod parser;
pub mod scheme;
pub mod uri;
pub mod validate;

pub use self::fields::{FieldValue, Fields};
pub use self::params::Parameters;
pub use self::parser::{ParserConfig, UriParser};
pub use self::scheme::Scheme;
pub use self::uri::ParsedUri;
