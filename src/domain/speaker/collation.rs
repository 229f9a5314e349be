//! Alphabetical name ordering.
//!
//! Three comparison levels in the manner of the Unicode collation algorithm's
//! root order: base letters first, then accents, then case (lowercase
//! before uppercase). Accented letters therefore sort next to their base
//! letter, so "Örjan" lands between "Olle" and "Pelle".
//!
//! Canonical decomposition covers letters such as ö or é. Letters with a
//! stroke or ligature (ø, ł, đ, æ, œ, ß) have no decomposition and are
//! expanded through `expansion` the way the root collation weighs them.
//! Letters with their own primary weight after z (þ) keep their code point.

use std::cmp::Ordering;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Base-letter spelling of a lowercase letter that NFD leaves intact.
const fn expansion(c: char) -> Option<&'static str> {
    match c {
        'ø' => Some("o"),
        'ł' | 'ŀ' => Some("l"),
        'đ' | 'ð' => Some("d"),
        'ħ' => Some("h"),
        'ŧ' => Some("t"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ß' => Some("ss"),
        _ => None,
    }
}

fn lowercase_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    lowercase_letters(name).flat_map(|c| {
        let (expanded, single) = match expansion(c) {
            Some(spelling) => (Some(spelling.chars()), None),
            None => (None, Some(c)),
        };
        expanded.into_iter().flatten().chain(single)
    })
}

fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

fn case_pattern(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

#[must_use]
pub fn compare_names(left: &str, right: &str) -> Ordering {
    base_letters(left)
        .cmp(base_letters(right))
        .then_with(|| accented_letters(left).cmp(accented_letters(right)))
        .then_with(|| case_pattern(left).cmp(case_pattern(right)))
}
