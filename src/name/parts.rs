//! # Splitting a single person name into parts.
use crate::error::{InvalidNameError, NameErrorKind};
use crate::name::NameParts;
use crate::scan::{Cursor, Step, WORD_SEPARATORS};

/// Lexical case of a word, decided by the first ASCII-alphabetic
/// character found at brace depth 0 while skipping control sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Upper,
    Lower,
    /// No case-deciding character (yet).
    Caseless,
}

impl Case {
    fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            Case::Upper
        } else {
            Case::Lower
        }
    }
}

#[derive(Debug)]
struct Word {
    text: String,
    case: Case,
}

/// Decompose one person name into its `first`, `von`, `last`, and `jr`
/// parts, following the classical BibTeX rules.
///
/// Sections are delimited by depth-0 commas: no comma means
/// `First von Last`, one means `Last, First`, and two mean
/// `Last, Jr, First`. Within the first section, the `von` part is
/// anchored by lowercase words; words inside balanced braces or consumed
/// by a `\` control sequence contribute no case.
///
/// In strict mode a malformed input (trailing comma, more than two
/// commas, unbalanced braces) fails with an [`InvalidNameError`]; with
/// `strict` unset the malformation is repaired instead and the call
/// never fails. An input with no words at all yields an empty
/// [`NameParts`] in both modes.
///
/// ```
/// use bibtex_names::parse_single_name_into_parts;
///
/// let parts = parse_single_name_into_parts("Brinch Hansen, Per", true).unwrap();
/// assert_eq!(parts.first, vec!["Per"]);
/// assert_eq!(parts.last, vec!["Brinch", "Hansen"]);
///
/// assert!(parse_single_name_into_parts("BB,", true).is_err());
/// let repaired = parse_single_name_into_parts("BB,", false).unwrap();
/// assert_eq!(repaired.last, vec!["BB"]);
/// ```
pub fn parse_single_name_into_parts(
    name: &str,
    strict: bool,
) -> Result<NameParts, InvalidNameError> {
    let sections = tokenize(name, strict)?;
    Ok(assign_parts(sections))
}

/// Split `name` into up to three comma-delimited sections of words,
/// computing the case of each word along the way.
fn tokenize(name: &str, strict: bool) -> Result<Vec<Vec<Word>>, InvalidNameError> {
    let mut tokenizer = Tokenizer::new(name, strict);
    let mut cursor = Cursor::new(name);
    while let Some((_, step)) = cursor.next_step() {
        match step {
            Step::Open => {
                tokenizer.word.push('{');
                tokenizer.bracestart = true;
                tokenizer.controlseq = false;
                tokenizer.specialchar = false;
            }
            Step::Close => {
                tokenizer.bracestart = false;
                tokenizer.word.push('}');
                tokenizer.controlseq = false;
                tokenizer.specialchar = false;
            }
            Step::Underflow => {
                tokenizer.bracestart = false;
                if strict {
                    return Err(tokenizer.fail(NameErrorKind::UnmatchedClosingBrace));
                }
                // Repair: wrap the word accumulated so far in braces.
                tokenizer.word.insert(0, '{');
                tokenizer.word.push('}');
                tokenizer.controlseq = false;
                tokenizer.specialchar = false;
            }
            Step::Escape(escaped) => {
                if WORD_SEPARATORS.contains(&escaped) {
                    // BibTeX does not escape whitespace: keep the backslash
                    // as text and let the separator end the word.
                    tokenizer.word.push('\\');
                    tokenizer.plain(escaped, cursor.depth())?;
                } else {
                    if tokenizer.bracestart {
                        // `{\...`: a special character. Its control
                        // sequence name carries no case, but the rest of
                        // the group may.
                        tokenizer.bracestart = false;
                        tokenizer.controlseq = escaped.is_ascii_alphabetic();
                        tokenizer.specialchar = true;
                    } else if tokenizer.case == Case::Caseless && escaped.is_ascii_alphabetic() {
                        tokenizer.case = Case::of(escaped);
                    }
                    tokenizer.word.push('\\');
                    tokenizer.word.push(escaped);
                }
            }
            Step::Char(c) => tokenizer.plain(c, cursor.depth())?,
        }
    }
    tokenizer.finish(cursor.depth())
}

struct Tokenizer<'s> {
    name: &'s str,
    strict: bool,
    sections: Vec<Vec<Word>>,
    word: String,
    case: Case,
    /// Is the next character the first inside a brace?
    bracestart: bool,
    /// Are we inside the name of a control sequence?
    controlseq: bool,
    /// Does the current brace group start with a control sequence?
    specialchar: bool,
}

impl<'s> Tokenizer<'s> {
    fn new(name: &'s str, strict: bool) -> Self {
        Self {
            name,
            strict,
            sections: vec![Vec::new()],
            word: String::new(),
            case: Case::Caseless,
            bracestart: false,
            controlseq: false,
            specialchar: false,
        }
    }

    fn fail(&self, kind: NameErrorKind) -> InvalidNameError {
        InvalidNameError::new(self.name, kind)
    }

    /// Handle a character which is neither a brace nor part of an escape.
    fn plain(&mut self, c: char, depth: usize) -> Result<(), InvalidNameError> {
        self.bracestart = false;
        if depth > 0 {
            if self.controlseq {
                // A non-alphabetic character ends the control sequence name.
                if !c.is_ascii_alphabetic() {
                    self.controlseq = false;
                }
            } else if self.specialchar && self.case == Case::Caseless && c.is_ascii_alphabetic() {
                self.case = Case::of(c);
            }
            self.word.push(c);
            return Ok(());
        }
        if c == ',' || WORD_SEPARATORS.contains(&c) {
            self.flush_word();
            if c == ',' {
                if self.sections.len() < 3 {
                    self.sections.push(Vec::new());
                } else if self.strict {
                    return Err(self.fail(NameErrorKind::TooManyCommas));
                }
            }
            return Ok(());
        }
        self.word.push(c);
        if self.case == Case::Caseless && c.is_ascii_alphabetic() {
            self.case = Case::of(c);
        }
        Ok(())
    }

    /// Move the accumulated word, if any, into the current section.
    fn flush_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let word = Word {
            text: std::mem::take(&mut self.word),
            case: std::mem::replace(&mut self.case, Case::Caseless),
        };
        let current = self.sections.len() - 1;
        self.sections[current].push(word);
        self.controlseq = false;
        self.specialchar = false;
    }

    fn finish(mut self, depth: usize) -> Result<Vec<Vec<Word>>, InvalidNameError> {
        if depth > 0 {
            if self.strict {
                return Err(self.fail(NameErrorKind::UnterminatedOpeningBrace));
            }
            // Repair: balance the missing closing braces.
            for _ in 0..depth {
                self.word.push('}');
            }
        }
        self.flush_word();
        if self.sections.last().is_some_and(Vec::is_empty) {
            if self.sections.len() > 1 && self.strict {
                return Err(self.fail(NameErrorKind::TrailingComma));
            }
            self.sections.pop();
        }
        Ok(self.sections)
    }
}

/// Distribute the words of each section over the four name parts.
fn assign_parts(mut sections: Vec<Vec<Word>>) -> NameParts {
    if sections.iter().all(Vec::is_empty) {
        return NameParts::default();
    }

    let mut parts = NameParts::default();
    if sections.len() == 1 {
        // First von Last: the von part runs from the first lowercase word
        // through the last, except that the final word always belongs to
        // the last name.
        let mut words = match sections.pop() {
            Some(words) => words,
            None => return parts,
        };
        if let Some(first_lower) = words.iter().position(|w| w.case == Case::Lower) {
            let last_lower = words
                .iter()
                .rposition(|w| w.case == Case::Lower)
                .unwrap_or(first_lower);
            let von_end = if last_lower == words.len() - 1 {
                last_lower
            } else {
                last_lower + 1
            };
            let last = words.split_off(von_end);
            let von = words.split_off(first_lower);
            parts.first = into_texts(words);
            parts.von = into_texts(von);
            parts.last = into_texts(last);
        } else {
            let last = words.split_off(words.len() - 1);
            parts.first = into_texts(words);
            parts.last = into_texts(last);
        }
    } else {
        // von Last, First  or  von Last, Jr, First.
        let mut iter = sections.into_iter();
        let mut head = iter.next().unwrap_or_default();
        let second = iter.next().unwrap_or_default();
        let (jr, first) = match iter.next() {
            Some(third) => (second, third),
            None => (Vec::new(), second),
        };
        parts.first = into_texts(first);
        parts.jr = into_texts(jr);
        if !head.is_empty() {
            if let Some(last_lower) = head.iter().rposition(|w| w.case == Case::Lower) {
                // The von part ends at the last lowercase word, but the
                // last name may not end up empty.
                let mut split = last_lower + 1;
                if split == head.len() {
                    split = 0;
                }
                let last = head.split_off(split);
                parts.von = into_texts(head);
                parts.last = into_texts(last);
            } else {
                parts.last = into_texts(head);
            }
        }
    }
    parts
}

fn into_texts(words: Vec<Word>) -> Vec<String> {
    words.into_iter().map(|w| w.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case_of(word: &str) -> Case {
        let sections = tokenize(word, true).unwrap();
        sections[0][0].case
    }

    #[test]
    fn test_word_case() {
        assert_eq!(case_of("AA"), Case::Upper);
        assert_eq!(case_of("aa"), Case::Lower);
        assert_eq!(case_of("1B"), Case::Upper);
        assert_eq!(case_of("1b"), Case::Lower);
        assert_eq!(case_of("{b}B"), Case::Upper);
        assert_eq!(case_of("{B}b"), Case::Lower);
        assert_eq!(case_of(r"\BB{b}"), Case::Upper);
        assert_eq!(case_of(r"\bb{b}"), Case::Lower);
        assert_eq!(case_of("{bb}"), Case::Caseless);
        assert_eq!(case_of("{Jim Hef{}feron}"), Case::Caseless);
        assert_eq!(case_of("..."), Case::Caseless);
    }

    #[test]
    fn test_special_character_case() {
        // A `{\...` group exposes the first letter after the control
        // sequence name.
        assert_eq!(case_of(r"{\sltt DVI}"), Case::Upper);
        assert_eq!(case_of(r"{\sltt xDVIx}"), Case::Lower);
        assert_eq!(case_of(r"{\'e}mile"), Case::Lower);
        assert_eq!(case_of(r"{\'E}mile"), Case::Upper);
        // The name runs to the end of the group: nothing decides a case.
        assert_eq!(case_of(r"{\LaTeX}"), Case::Caseless);
    }

    #[test]
    fn test_comma_sections() {
        let sections = tokenize("Brinch Hansen, Per", true).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].len(), 2);
        assert_eq!(sections[1].len(), 1);

        // Commas inside braces do not delimit sections.
        let sections = tokenize("CC, dd, {AA, BB}", true).unwrap();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[2][0].text, "{AA, BB}");
    }

    #[test]
    fn test_escaped_separator_splits() {
        // `\~` keeps the backslash as text and splits the word.
        let sections = tokenize(r"Brand\~{a}o", true).unwrap();
        let texts: Vec<&str> = sections[0].iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec![r"Brand\", "{a}o"]);
    }

    #[test]
    fn test_strict_errors() {
        for (input, kind) in [
            ("BB,", NameErrorKind::TrailingComma),
            ("AA, BB, CC, DD", NameErrorKind::TooManyCommas),
            ("AA {BB CC", NameErrorKind::UnterminatedOpeningBrace),
            ("AA BB CC}", NameErrorKind::UnmatchedClosingBrace),
        ] {
            let err = parse_single_name_into_parts(input, true).unwrap_err();
            assert_eq!(err.kind(), kind, "{input}");
            assert_eq!(err.name(), input);
        }
    }

    #[test]
    fn test_repair_wrapping() {
        let parts = parse_single_name_into_parts("AA {{{BB} CC}", false).unwrap();
        assert_eq!(parts.last, vec!["{{{BB} CC}}"]);

        let parts = parse_single_name_into_parts("AA BB CC}}}", false).unwrap();
        assert_eq!(parts.first, vec!["AA", "BB"]);
        assert_eq!(parts.last, vec!["{{{CC}}}"]);
    }

    #[test]
    fn test_empty_inputs() {
        for input in ["", " ", "  ", "  \t~~"] {
            assert_eq!(
                parse_single_name_into_parts(input, true).unwrap(),
                NameParts::default(),
                "{input:?}"
            );
        }
    }
}
