//! # Description of the name syntax
//! The goal of this module is to give an explicit description of the
//! grammar accepted by the splitting functions in this crate. The
//! grammar is stated as [pest](https://docs.rs/pest/latest/pest/) rules
//! and a derived parser is exposed for validation purposes.
//!
//! ## Name lists
//! 1. List whitespace is a space, tab, or newline. Note that the tie
//!    `~` is *not* whitespace here: it binds words of a person together.
//!    ```ignore
//!    ws = _{ (" " | "\t" | "\n")+ }
//!    ```
//! 2. A backslash together with the following character is opaque, and
//!    a braced group absorbs any characters with balanced brackets.
//!    ```ignore
//!    escape = _{ "\\" ~ ANY }
//!    balanced = _{ "{" ~ balanced* ~ "}" | escape | !("{" | "}") ~ ANY }
//!    group = _{ "{" ~ balanced* ~ "}" }
//!    ```
//! 3. A word is a maximal run of groups, escapes, and other
//!    non-whitespace characters.
//!    ```ignore
//!    word_char = _{ group | escape | !("{" | "}" | " " | "\t" | "\n") ~ ANY }
//!    word = @{ word_char+ }
//!    ```
//! 4. Persons are separated by the word `and` in any ASCII casing. An
//!    `and` which has no following word belongs to the final person,
//!    which is why the lookahead in `person` requires a word after the
//!    separator.
//!    ```ignore
//!    and_sep = _{ ws ~ ^"and" ~ ws }
//!    person = { word ~ (ws ~ !(^"and" ~ ws ~ word_char) ~ word)* }
//!    name_list = _{ SOI ~ ws? ~ (person ~ (and_sep ~ person)*)? ~ ws? ~ EOI }
//!    ```
//!
//! ## Single names
//! 1. Word whitespace inside a single name is wider than list
//!    whitespace: the tie `~` and the carriage return also separate
//!    words.
//!    ```ignore
//!    name_ws = _{ (" " | "~" | "\r" | "\n" | "\t")+ }
//!    ```
//! 2. A name consists of up to three sections delimited by commas
//!    outside braces; each section is a list of words.
//!    ```ignore
//!    name_word_char = _{ group | escape | !("{" | "}" | "," | " " | "~" | "\r" | "\n" | "\t") ~ ANY }
//!    name_word = @{ name_word_char+ }
//!    section = { name_word ~ (name_ws ~ name_word)* }
//!    name = _{ SOI ~ name_ws? ~ section? ~ (name_ws? ~ "," ~ name_ws? ~ section?){0, 2} ~ name_ws? ~ EOI }
//!    ```
//!
//! ## Divergences from the splitting functions
//! 1. The grammar treats every escape pair as word content. The word
//!    tokenizer in [`parse_single_name_into_parts`](crate::parse_single_name_into_parts)
//!    instead treats an escaped separator (for instance `\~`) as a
//!    literal backslash followed by a word break, so `Brand\~{a}o`
//!    tokenizes as two words even though the grammar reads it as one.
//! 2. The grammar accepts a trailing comma (a `name` with an empty
//!    final section), which strict parsing rejects. Non-strict parsing
//!    accepts exactly what the grammar accepts.
//! 3. Unbalanced braces are rejected by the grammar outright; the
//!    splitting functions saturate or repair instead.
use pest_derive::Parser;

/// A simple automatically derived pest parser.
#[derive(Parser)]
#[grammar = "syntax/names.pest"] // relative to src
pub struct NamesParser;

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    fn persons(input: &str) -> Vec<String> {
        NamesParser::parse(Rule::name_list, input)
            .expect("valid name list")
            .filter(|pair| pair.as_rule() == Rule::person)
            .map(|pair| pair.as_str().to_owned())
            .collect()
    }

    #[test]
    fn test_name_list() {
        assert_eq!(
            persons("First Name and Last Name"),
            vec!["First Name", "Last Name"]
        );
        assert_eq!(persons("{Simon and Schuster}"), vec!["{Simon and Schuster}"]);
        assert_eq!(
            persons("and John Smith and Phil Holden"),
            vec!["and John Smith", "Phil Holden"]
        );
        assert_eq!(
            persons("John Smith and Phil Holden and"),
            vec!["John Smith", "Phil Holden and"]
        );
        assert_eq!(persons("      "), Vec::<String>::new());
        assert_eq!(persons("~"), vec!["~"]);
    }

    #[test]
    fn test_single_name() {
        assert!(NamesParser::parse(Rule::name, "Brinch Hansen, Per").is_ok());
        assert!(NamesParser::parse(Rule::name, "Ford, Jr., Henry").is_ok());
        assert!(NamesParser::parse(Rule::name, "CC, dd, {AA, BB}").is_ok());

        // More than two depth-0 commas never parses.
        assert!(NamesParser::parse(Rule::name, "AA, BB, CC, DD").is_err());
        // Unbalanced braces never parse.
        assert!(NamesParser::parse(Rule::name, "AA {BB CC").is_err());
    }
}
