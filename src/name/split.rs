//! # Splitting a field value into persons.
use crate::scan::{Cursor, PERSON_SEPARATORS, Step, contains_person_separator};

/// Split an `author`-style field value into individual person names.
///
/// Persons are separated by the word `and` (any ASCII casing) at brace
/// depth 0, flanked on both sides by whitespace. Whitespace here is a
/// space, tab, or newline; the tie `~` binds names together, and `\and`
/// is ordinary text. A leading `and` with nothing before it, or a
/// trailing `and` with nothing after it, is kept as part of the
/// neighbouring person, reproducing the behaviour of BibTeX itself.
///
/// ```
/// use bibtex_names::split_multiple_persons_names;
///
/// assert_eq!(
///     split_multiple_persons_names("First Name and Last Name"),
///     vec!["First Name", "Last Name"],
/// );
/// assert_eq!(
///     split_multiple_persons_names("{Simon and Schuster}"),
///     vec!["{Simon and Schuster}"],
/// );
/// assert_eq!(split_multiple_persons_names("   "), Vec::<String>::new());
/// ```
pub fn split_multiple_persons_names(names: &str) -> Vec<String> {
    // A single word cannot contain a separator.
    if !contains_person_separator(names) {
        return if names.is_empty() {
            Vec::new()
        } else {
            vec![names.to_owned()]
        };
    }

    // Carve the depth-0 whitespace-delimited word spans.
    let mut words: Vec<(usize, usize)> = Vec::new();
    let mut cursor = Cursor::new(names);
    let mut word_start = None;
    while let Some((offset, step)) = cursor.next_step() {
        let separates = match step {
            Step::Char(c) => cursor.depth() == 0 && PERSON_SEPARATORS.contains(&c),
            _ => false,
        };
        if separates {
            if let Some(start) = word_start.take() {
                words.push((start, offset));
            }
        } else if word_start.is_none() {
            word_start = Some(offset);
        }
    }
    if let Some(start) = word_start {
        words.push((start, names.len()));
    }

    // Group words into persons. An `and` only separates when a person is
    // already open before it and at least one word follows it.
    let mut persons = Vec::new();
    let mut person: Option<(usize, usize)> = None;
    for (idx, &(start, end)) in words.iter().enumerate() {
        let word = &names[start..end];
        match person {
            Some((person_start, person_end))
                if word.eq_ignore_ascii_case("and") && idx + 1 != words.len() =>
            {
                persons.push(names[person_start..person_end].to_owned());
                person = None;
            }
            Some((person_start, _)) => person = Some((person_start, end)),
            None => person = Some((start, end)),
        }
    }
    if let Some((person_start, person_end)) = person {
        persons.push(names[person_start..person_end].to_owned());
    }
    persons
}
