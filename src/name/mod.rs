//! # Person names and their parts.
//!
//! A BibTeX `author` or `editor` field packs a list of persons into a
//! single string, separated by the word `and` outside of braces. Each
//! person in turn decomposes into four ordered word lists: the first
//! name, the `von` particle (`de`, `van der`, ...), the last name, and a
//! generational suffix (`Jr.`, `III`, ...).
//!
//! [`split_multiple_persons_names`] carves the field value into persons
//! and [`parse_single_name_into_parts`] decomposes one person into a
//! [`NameParts`]. The merge methods on [`NameParts`] reverse the
//! decomposition.

mod parts;
mod split;

pub use parts::parse_single_name_into_parts;
pub use split::split_multiple_persons_names;

/// The four ordered word lists of a BibTeX person name.
///
/// All lists may be empty; a value with four empty lists represents an
/// input with no parseable name at all.
/// ```
/// use bibtex_names::{parse_single_name_into_parts, NameParts};
///
/// assert_eq!(
///     parse_single_name_into_parts("Walter van der Laan", true).unwrap(),
///     NameParts {
///         first: vec!["Walter".into()],
///         von: vec!["van".into(), "der".into()],
///         last: vec!["Laan".into()],
///         jr: vec![],
///     },
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameParts {
    pub first: Vec<String>,
    pub von: Vec<String>,
    pub last: Vec<String>,
    pub jr: Vec<String>,
}

impl NameParts {
    /// Check if every part is empty.
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.von.is_empty() && self.last.is_empty() && self.jr.is_empty()
    }

    /// Render the name in `first von last jr` order, single-spaced.
    ///
    /// Empty parts are skipped, so the output never has leading,
    /// trailing, or doubled spaces.
    /// ```
    /// use bibtex_names::parse_single_name_into_parts;
    ///
    /// let parts = parse_single_name_into_parts("Brinch Hansen, Per", true).unwrap();
    /// assert_eq!(parts.merge_first_name_first(), "Per Brinch Hansen");
    /// ```
    pub fn merge_first_name_first(&self) -> String {
        let mut merged = String::new();
        for word in self
            .first
            .iter()
            .chain(&self.von)
            .chain(&self.last)
            .chain(&self.jr)
        {
            if !merged.is_empty() {
                merged.push(' ');
            }
            merged.push_str(word);
        }
        merged
    }

    /// Render the name in `von last, jr, first` order.
    ///
    /// Words within a group are single-spaced and empty groups are
    /// omitted together with their comma.
    /// ```
    /// use bibtex_names::parse_single_name_into_parts;
    ///
    /// let parts = parse_single_name_into_parts("Ford, Jr., Henry", true).unwrap();
    /// assert_eq!(parts.merge_last_name_first(), "Ford, Jr., Henry");
    /// ```
    pub fn merge_last_name_first(&self) -> String {
        let mut groups = Vec::with_capacity(3);
        let von_last = self
            .von
            .iter()
            .chain(&self.last)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        if !von_last.is_empty() {
            groups.push(von_last);
        }
        if !self.jr.is_empty() {
            groups.push(self.jr.join(" "));
        }
        if !self.first.is_empty() {
            groups.push(self.first.join(" "));
        }
        groups.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn test_merge_first_name_first() {
        let parts = NameParts {
            first: words(&["Charles", "Louis"]),
            von: words(&["de", "la"]),
            last: words(&["Poussin"]),
            jr: vec![],
        };
        assert_eq!(parts.merge_first_name_first(), "Charles Louis de la Poussin");
    }

    #[test]
    fn test_merge_last_name_first() {
        let parts = NameParts {
            first: words(&["Henry"]),
            von: vec![],
            last: words(&["Ford"]),
            jr: words(&["Jr."]),
        };
        assert_eq!(parts.merge_last_name_first(), "Ford, Jr., Henry");

        let parts = NameParts {
            first: words(&["Dominique"]),
            von: words(&["Galouzeau", "de"]),
            last: words(&["Villepin"]),
            jr: vec![],
        };
        assert_eq!(
            parts.merge_last_name_first(),
            "Galouzeau de Villepin, Dominique"
        );
    }

    #[test]
    fn test_merge_omits_empty_groups() {
        let parts = NameParts {
            last: words(&["Anonymous"]),
            ..NameParts::default()
        };
        assert_eq!(parts.merge_first_name_first(), "Anonymous");
        assert_eq!(parts.merge_last_name_first(), "Anonymous");
        assert_eq!(NameParts::default().merge_last_name_first(), "");
    }
}
