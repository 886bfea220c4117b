//! # The bibliography data model.
//!
//! A [`Library`] is an ordered sequence of [`Block`]s as produced by a
//! `.bib` parser: entries, `@string` definitions, preambles, explicit
//! and implicit comments, and blocks which failed a transformation. The
//! name passes in [`middleware`](crate::middleware) only ever rewrite
//! the `value` of name fields; every other attribute is carried through
//! untouched.
use unicase::UniCase;

use crate::error::InvalidNameError;
use crate::name::NameParts;

/// The value of an entry field.
///
/// A field value starts its life as the raw string from the `.bib`
/// source and is moved through the other shapes by the passes in
/// [`middleware`](crate::middleware): a list of person names, then a
/// list of parsed [`NameParts`]. The shape is not self-describing
/// beyond this tag, so passes must be applied in a meaningful order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// An unprocessed field value.
    Raw(String),
    /// One string per person, as split by
    /// [`split_multiple_persons_names`](crate::split_multiple_persons_names).
    Persons(Vec<String>),
    /// One parsed name per person.
    Parts(Vec<NameParts>),
}

impl Value {
    /// The raw string, if this value is unprocessed.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(s) => Some(s),
            _ => None,
        }
    }

    /// The person list, if this value holds one.
    pub fn as_persons(&self) -> Option<&[String]> {
        match self {
            Self::Persons(persons) => Some(persons),
            _ => None,
        }
    }

    /// The parsed name list, if this value holds one.
    pub fn as_parts(&self) -> Option<&[NameParts]> {
        match self {
            Self::Parts(parts) => Some(parts),
            _ => None,
        }
    }

    /// A short human-readable description of the shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Raw(_) => "string",
            Self::Persons(_) => "person list",
            Self::Parts(_) => "name-parts list",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

/// A single `key = value` field of an entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub key: String,
    pub value: Value,
    pub start_line: usize,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<Value>, start_line: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            start_line,
        }
    }
}

/// A regular bibliography entry, such as `@article{key, ...}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// The entry type, such as `article`.
    pub entry_type: String,
    /// The citation key.
    pub key: String,
    pub start_line: usize,
    /// The verbatim source text of the block.
    pub raw: String,
    pub fields: Vec<Field>,
}

impl Entry {
    /// Look up a field by key, ignoring ASCII case.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| UniCase::new(f.key.as_str()) == UniCase::new(key))
    }

    /// Look up a field by key for modification, ignoring ASCII case.
    pub fn field_mut(&mut self, key: &str) -> Option<&mut Field> {
        self.fields
            .iter_mut()
            .find(|f| UniCase::new(f.key.as_str()) == UniCase::new(key))
    }
}

/// A `@string{key = value}` definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringDef {
    pub key: String,
    pub value: String,
    pub start_line: usize,
    pub raw: String,
}

/// A `@preamble{...}` block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preamble {
    pub value: String,
    pub start_line: usize,
    pub raw: String,
}

/// A `@comment{...}` block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplicitComment {
    pub comment: String,
    pub start_line: usize,
    pub raw: String,
}

/// Free text between blocks, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImplicitComment {
    pub comment: String,
    pub start_line: usize,
    pub raw: String,
}

/// A block taken out of circulation by a failed transformation.
///
/// The original block is retained unchanged next to the error which
/// removed it, so no information is lost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FailedBlock {
    pub block: Box<Block>,
    pub error: InvalidNameError,
}

/// One block of a bibliography.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    Entry(Entry),
    Strings(StringDef),
    Preamble(Preamble),
    ExplicitComment(ExplicitComment),
    ImplicitComment(ImplicitComment),
    Failed(FailedBlock),
}

impl Block {
    /// The contained entry, if this is an entry block.
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            Self::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    /// The contained failure, if this block failed a transformation.
    pub fn as_failed(&self) -> Option<&FailedBlock> {
        match self {
            Self::Failed(failed) => Some(failed),
            _ => None,
        }
    }
}

impl From<Entry> for Block {
    fn from(entry: Entry) -> Self {
        Self::Entry(entry)
    }
}

impl From<StringDef> for Block {
    fn from(string: StringDef) -> Self {
        Self::Strings(string)
    }
}

impl From<Preamble> for Block {
    fn from(preamble: Preamble) -> Self {
        Self::Preamble(preamble)
    }
}

impl From<ExplicitComment> for Block {
    fn from(comment: ExplicitComment) -> Self {
        Self::ExplicitComment(comment)
    }
}

impl From<ImplicitComment> for Block {
    fn from(comment: ImplicitComment) -> Self {
        Self::ImplicitComment(comment)
    }
}

impl From<FailedBlock> for Block {
    fn from(failed: FailedBlock) -> Self {
        Self::Failed(failed)
    }
}

/// An ordered collection of bibliography blocks.
/// ```
/// use bibtex_names::model::{Block, Entry, Field, Library};
///
/// let entry = Entry {
///     entry_type: "article".into(),
///     key: "smith2024".into(),
///     start_line: 0,
///     raw: "@article{smith2024, ...}".into(),
///     fields: vec![Field::new("author", "J. Smith", 1)],
/// };
/// let library = Library::new(vec![Block::Entry(entry)]);
/// assert_eq!(library.entries().count(), 1);
/// assert_eq!(library.failed_blocks().count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Library {
    blocks: Vec<Block>,
}

impl Library {
    /// Construct a library from blocks, preserving their order.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// All blocks, in their original order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Consume the library, yielding its blocks.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Append a block.
    pub fn add(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    /// The regular entries, in block order. Failed blocks are excluded.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.blocks.iter().filter_map(Block::as_entry)
    }

    /// The regular entries, mutably, in block order.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.blocks.iter_mut().filter_map(|block| match block {
            Block::Entry(entry) => Some(entry),
            _ => None,
        })
    }

    /// The blocks removed by a failed transformation, in block order.
    pub fn failed_blocks(&self) -> impl Iterator<Item = &FailedBlock> {
        self.blocks.iter().filter_map(Block::as_failed)
    }

    /// The number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the library has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl From<Vec<Entry>> for Library {
    fn from(entries: Vec<Entry>) -> Self {
        entries.into_iter().map(Block::Entry).collect()
    }
}

impl FromIterator<Block> for Library {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}
