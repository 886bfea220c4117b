//! # BibTeX name parsing
//!
//! BibTeX packs every person connected to an entry into a single field:
//! ```bib
//! @book{key,
//!   author = {Galouzeau de Villepin, Dominique and Brinch Hansen, Per},
//! }
//! ```
//! Recovering the individual persons, and the parts of each person's
//! name, requires reproducing the classical BibTeX algorithm: a
//! character-level scan which tracks `{}` nesting, treats `\`-escapes as
//! opaque, decides the lexical case of each word, and switches meaning
//! based on the number of commas. This crate implements that algorithm
//! together with transformation passes which apply it across a
//! bibliography.
//!
//! ## Splitting names
//! The two primitives are [`split_multiple_persons_names`], which carves
//! a field value into persons, and [`parse_single_name_into_parts`],
//! which decomposes one person into a [`NameParts`]:
//! ```
//! use bibtex_names::{parse_single_name_into_parts, split_multiple_persons_names};
//!
//! let persons = split_multiple_persons_names("Amy Author and Walter van der Laan");
//! assert_eq!(persons, vec!["Amy Author", "Walter van der Laan"]);
//!
//! let parts = parse_single_name_into_parts(&persons[1], true).unwrap();
//! assert_eq!(parts.first, vec!["Walter"]);
//! assert_eq!(parts.von, vec!["van", "der"]);
//! assert_eq!(parts.last, vec!["Laan"]);
//! ```
//! Strict parsing rejects malformed names with an [`InvalidNameError`]
//! whose message names both the input and the reason; non-strict parsing
//! repairs them instead. See
//! [`parse_single_name_into_parts`] for the repair rules.
//!
//! ## Transforming libraries
//! The passes in the [middleware module](middleware) apply the
//! primitives to the `author` and `editor` fields of every entry in a
//! [`Library`](model::Library), converting field values between the raw
//! string, a list of persons, and a list of [`NameParts`]. A name which
//! fails strict parsing removes its entry into a failed block instead of
//! aborting the whole transformation; see the [middleware
//! module](middleware) for a worked example.
//!
//! ## Features
//! - `serde`: `Serialize` and `Deserialize` implementations for the
//!   data model.
//! - `syntax`: an explicit [pest](https://docs.rs/pest/latest/pest/)
//!   grammar for the name syntax, see the [syntax module](syntax).

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod middleware;
pub mod model;
mod name;
pub(crate) mod scan;
#[cfg(feature = "syntax")]
#[cfg_attr(docsrs, doc(cfg(feature = "syntax")))]
pub mod syntax;

pub use crate::{
    error::InvalidNameError,
    name::{NameParts, parse_single_name_into_parts, split_multiple_persons_names},
};
