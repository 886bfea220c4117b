//! # Name transformation passes.
//!
//! Each pass rewrites the value of the name fields (by default `author`
//! and `editor`) of every entry in a [`Library`], moving it one step
//! along the pipeline
//!
//! ```text
//! Value::Raw  <->  Value::Persons  <->  Value::Parts
//! ```
//!
//! [`SeparateCoAuthors`] and [`MergeCoAuthors`] convert between the raw
//! string and the person list; [`SplitNameParts`] and [`MergeNameParts`]
//! convert between the person list and the parsed
//! [`NameParts`](crate::NameParts) list. Only [`SplitNameParts`] can
//! fail, and it fails per entry: the offending entry is wrapped into a
//! [`Block::Failed`] carrying the error while every other entry is
//! processed normally.
//!
//! ```
//! use bibtex_names::middleware::{Middleware, SeparateCoAuthors, SplitNameParts};
//! use bibtex_names::model::{Entry, Field, Library};
//!
//! let entry = Entry {
//!     entry_type: "article".into(),
//!     key: "smith2024".into(),
//!     start_line: 0,
//!     raw: "...".into(),
//!     fields: vec![Field::new("author", "A. Author and B. Bystander", 1)],
//! };
//! let library = SeparateCoAuthors::default().transform(Library::from(vec![entry]));
//! let library = SplitNameParts::default().transform(library);
//!
//! let entry = library.entries().next().unwrap();
//! let parts = entry.field("author").unwrap().value.as_parts().unwrap();
//! assert_eq!(parts[0].last, vec!["Author"]);
//! assert_eq!(parts[1].first, vec!["B."]);
//! ```
use unicase::UniCase;

use crate::error::InvalidNameError;
use crate::model::{Block, Entry, FailedBlock, Library, Value};
use crate::name::{parse_single_name_into_parts, split_multiple_persons_names};

/// Field keys treated as person lists unless overridden with
/// `with_name_fields`.
pub const DEFAULT_NAME_FIELDS: [&str; 2] = ["author", "editor"];

#[derive(Debug, Clone)]
struct Config {
    allow_inplace_modification: bool,
    name_fields: Vec<String>,
}

impl Config {
    fn new(allow_inplace_modification: bool) -> Self {
        Self {
            allow_inplace_modification,
            name_fields: Vec::from(DEFAULT_NAME_FIELDS.map(String::from)),
        }
    }
}

/// A transformation pass over the name fields of a library.
///
/// Implementations provide [`transform_value`](Middleware::transform_value);
/// the driver methods are shared. Entries are processed in block order,
/// and within an entry the fields in field order; all attributes other
/// than the values of name fields are preserved exactly.
pub trait Middleware {
    /// Whether [`transform`](Middleware::transform) may reuse the input's
    /// allocations. When `false`, the transformed library shares no
    /// buffers with the blocks that were passed in.
    fn allow_inplace_modification(&self) -> bool;

    /// The field keys rewritten by this pass, matched ignoring ASCII case.
    fn name_fields(&self) -> &[String];

    /// Rewrite a single name-field value in place.
    ///
    /// On failure the value must be left unchanged.
    ///
    /// # Panics
    /// Panics if the value does not have the shape this pass consumes;
    /// applying passes in a meaningful order is the caller's
    /// responsibility.
    fn transform_value(&self, value: &mut Value) -> Result<(), InvalidNameError>;

    /// Rewrite every name field of one entry.
    fn transform_entry(&self, entry: &mut Entry) -> Result<(), InvalidNameError> {
        for field in &mut entry.fields {
            if self.is_name_field(&field.key) {
                self.transform_value(&mut field.value)?;
            }
        }
        Ok(())
    }

    /// Check whether `key` names a field this pass rewrites.
    fn is_name_field(&self, key: &str) -> bool {
        let key = UniCase::new(key);
        self.name_fields()
            .iter()
            .any(|field| UniCase::new(field.as_str()) == key)
    }

    /// Apply the pass to every entry of `library`.
    ///
    /// An entry whose transformation fails is replaced by a
    /// [`Block::Failed`] at the same position; all other blocks pass
    /// through untouched.
    fn transform(&self, library: Library) -> Library {
        // The copy variant must not reuse any buffer of the input.
        let library = if self.allow_inplace_modification() {
            library
        } else {
            library.clone()
        };
        let mut blocks = Vec::with_capacity(library.len());
        for block in library.into_blocks() {
            match block {
                Block::Entry(mut entry) => match self.transform_entry(&mut entry) {
                    Ok(()) => blocks.push(Block::Entry(entry)),
                    Err(error) => blocks.push(Block::Failed(FailedBlock {
                        block: Box::new(Block::Entry(entry)),
                        error,
                    })),
                },
                other => blocks.push(other),
            }
        }
        Library::new(blocks)
    }
}

macro_rules! forward_pass_config {
    () => {
        fn allow_inplace_modification(&self) -> bool {
            self.config.allow_inplace_modification
        }

        fn name_fields(&self) -> &[String] {
            &self.config.name_fields
        }
    };
}

macro_rules! impl_pass_options {
    ($pass:ident, $default:expr) => {
        impl $pass {
            /// Replace the set of field keys treated as name lists.
            ///
            /// The default set is [`DEFAULT_NAME_FIELDS`]; `translator`
            /// is a common addition.
            pub fn with_name_fields<I, S>(mut self, name_fields: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.config.name_fields = name_fields.into_iter().map(Into::into).collect();
                self
            }
        }

        impl Default for $pass {
            fn default() -> Self {
                $default
            }
        }
    };
}

/// Split the raw string value of each name field into a list of person
/// names, on the separator `and` outside braces.
#[derive(Debug, Clone)]
pub struct SeparateCoAuthors {
    config: Config,
}

impl SeparateCoAuthors {
    pub fn new(allow_inplace_modification: bool) -> Self {
        Self {
            config: Config::new(allow_inplace_modification),
        }
    }
}

impl_pass_options!(SeparateCoAuthors, Self::new(true));

impl Middleware for SeparateCoAuthors {
    forward_pass_config!();

    fn transform_value(&self, value: &mut Value) -> Result<(), InvalidNameError> {
        let separated = match &*value {
            Value::Raw(raw) => Value::Persons(split_multiple_persons_names(raw)),
            other => panic!(
                "SeparateCoAuthors requires string values, found a {}",
                other.shape()
            ),
        };
        *value = separated;
        Ok(())
    }
}

/// Join the person list of each name field back into a single string,
/// separated by ` and `.
#[derive(Debug, Clone)]
pub struct MergeCoAuthors {
    config: Config,
}

impl MergeCoAuthors {
    pub fn new(allow_inplace_modification: bool) -> Self {
        Self {
            config: Config::new(allow_inplace_modification),
        }
    }
}

impl_pass_options!(MergeCoAuthors, Self::new(true));

impl Middleware for MergeCoAuthors {
    forward_pass_config!();

    fn transform_value(&self, value: &mut Value) -> Result<(), InvalidNameError> {
        let merged = match &*value {
            Value::Persons(persons) => Value::Raw(persons.join(" and ")),
            other => panic!(
                "MergeCoAuthors requires person-list values, found a {}",
                other.shape()
            ),
        };
        *value = merged;
        Ok(())
    }
}

/// Parse each person of each name field into its
/// [`NameParts`](crate::NameParts).
///
/// Parsing is always strict: a malformed name removes its entry from
/// the regular entries and records it as a failed block, rather than
/// producing silently repaired output.
#[derive(Debug, Clone)]
pub struct SplitNameParts {
    config: Config,
}

impl SplitNameParts {
    pub fn new(allow_inplace_modification: bool) -> Self {
        Self {
            config: Config::new(allow_inplace_modification),
        }
    }
}

impl_pass_options!(SplitNameParts, Self::new(true));

impl Middleware for SplitNameParts {
    forward_pass_config!();

    fn transform_value(&self, value: &mut Value) -> Result<(), InvalidNameError> {
        let split = match &*value {
            Value::Persons(persons) => {
                let mut parts = Vec::with_capacity(persons.len());
                for person in persons {
                    parts.push(parse_single_name_into_parts(person, true)?);
                }
                Value::Parts(parts)
            }
            other => panic!(
                "SplitNameParts requires person-list values, found a {}",
                other.shape()
            ),
        };
        *value = split;
        Ok(())
    }
}

/// Render each parsed name of each name field back into a person string.
#[derive(Debug, Clone)]
pub struct MergeNameParts {
    config: Config,
    last_name_first: bool,
}

impl MergeNameParts {
    pub fn new(last_name_first: bool, allow_inplace_modification: bool) -> Self {
        Self {
            config: Config::new(allow_inplace_modification),
            last_name_first,
        }
    }
}

impl_pass_options!(MergeNameParts, Self::new(false, true));

impl Middleware for MergeNameParts {
    forward_pass_config!();

    fn transform_value(&self, value: &mut Value) -> Result<(), InvalidNameError> {
        let merged = match &*value {
            Value::Parts(parts) => Value::Persons(
                parts
                    .iter()
                    .map(|p| {
                        if self.last_name_first {
                            p.merge_last_name_first()
                        } else {
                            p.merge_first_name_first()
                        }
                    })
                    .collect(),
            ),
            other => panic!(
                "MergeNameParts requires name-parts values, found a {}",
                other.shape()
            ),
        };
        *value = merged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NameParts;

    #[test]
    fn test_separate_value() {
        let mut value = Value::from("A. Author and B. Bystander");
        SeparateCoAuthors::default()
            .transform_value(&mut value)
            .unwrap();
        assert_eq!(
            value,
            Value::Persons(vec!["A. Author".into(), "B. Bystander".into()])
        );
    }

    #[test]
    fn test_merge_value_roundtrip() {
        let mut value = Value::Persons(vec!["A. Author".into(), "B. Bystander".into()]);
        MergeCoAuthors::default()
            .transform_value(&mut value)
            .unwrap();
        assert_eq!(value, Value::from("A. Author and B. Bystander"));
    }

    #[test]
    fn test_split_leaves_value_untouched_on_error() {
        let mut value = Value::Persons(vec!["Amy Author".into(), "BB,".into()]);
        let err = SplitNameParts::default()
            .transform_value(&mut value)
            .unwrap_err();
        assert!(err.to_string().contains("Trailing comma"));
        assert_eq!(
            value,
            Value::Persons(vec!["Amy Author".into(), "BB,".into()])
        );
    }

    #[test]
    fn test_merge_name_parts_orders() {
        let parts = vec![NameParts {
            first: vec!["Per".into()],
            von: vec![],
            last: vec!["Brinch".into(), "Hansen".into()],
            jr: vec![],
        }];

        let mut value = Value::Parts(parts.clone());
        MergeNameParts::new(false, true)
            .transform_value(&mut value)
            .unwrap();
        assert_eq!(value, Value::Persons(vec!["Per Brinch Hansen".into()]));

        let mut value = Value::Parts(parts);
        MergeNameParts::new(true, true)
            .transform_value(&mut value)
            .unwrap();
        assert_eq!(value, Value::Persons(vec!["Brinch Hansen, Per".into()]));
    }

    #[test]
    fn test_name_field_matching() {
        let pass = SeparateCoAuthors::default();
        assert!(pass.is_name_field("author"));
        assert!(pass.is_name_field("Editor"));
        assert!(!pass.is_name_field("title"));

        let pass = pass.with_name_fields(["author", "editor", "translator"]);
        assert!(pass.is_name_field("Translator"));
    }

    #[test]
    #[should_panic(expected = "person-list")]
    fn test_shape_mismatch_panics() {
        let mut value = Value::from("not split yet");
        let _ = MergeCoAuthors::default().transform_value(&mut value);
    }
}
