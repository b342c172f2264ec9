// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashMap, hash::Hash};

use crate::window::{self, ByteTable, Window};

/// Returns the length of the longest substring of `s` without repeating characters.
///
/// Characters are Unicode scalar values, so a multi-byte character counts once.
///
/// This operation is *O*(*n*).
///
/// # Examples
///
/// ```
/// assert_eq!(uniqwin::longest_unique_len("abcabcbb"), 3);
/// assert_eq!(uniqwin::longest_unique_len("bbbbb"), 1);
/// assert_eq!(uniqwin::longest_unique_len(""), 0);
/// ```
#[must_use]
pub fn longest_unique_len(s: &str) -> usize {
    window::scan(s.chars(), &mut HashMap::new()).len()
}

/// Returns the leftmost longest substring of `s` without repeating characters.
///
/// # Examples
///
/// ```
/// assert_eq!(uniqwin::longest_unique_substring("pwwkew"), "wke");
/// ```
#[must_use]
pub fn longest_unique_substring(s: &str) -> &str {
    let offsets: Vec<usize> = s.char_indices().map(|(offset, _)| offset).collect();
    let window = window::scan(s.chars(), &mut HashMap::new());

    if window.is_empty() {
        return "";
    }

    let start = offsets[window.start];
    let end = offsets.get(window.end).copied().unwrap_or(s.len());

    &s[start..end]
}

/// Returns the leftmost longest window of `items` in which no item repeats.
///
/// # Examples
///
/// ```
/// let words = ["to", "be", "or", "not", "to", "be"];
/// let window = uniqwin::longest_unique_window(&words);
///
/// assert_eq!(&words[window.range()], ["to", "be", "or", "not"]);
/// ```
#[must_use]
pub fn longest_unique_window<T>(items: &[T]) -> Window
where
    T: Eq + Hash,
{
    window::scan(items, &mut HashMap::with_capacity(items.len()))
}

/// Returns the leftmost longest window of `data` in which no byte repeats.
///
/// Unlike [`longest_unique_window()`], this uses a fixed table indexed by byte value rather than
/// a hash map, and the result can never be longer than 256.
///
/// # Examples
///
/// ```
/// let window = uniqwin::longest_unique_bytes(b"abcabcbb");
///
/// assert_eq!(window.range(), 0..3);
/// ```
#[must_use]
pub fn longest_unique_bytes(data: &[u8]) -> Window {
    window::scan(data.iter().copied(), &mut ByteTable::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(longest_unique_len(""), 0);
        assert_eq!(longest_unique_substring(""), "");
        assert!(longest_unique_bytes(b"").is_empty());
        assert!(longest_unique_window::<u32>(&[]).is_empty());
    }

    #[test]
    fn repeats_after_prefix() {
        assert_eq!(longest_unique_len("abcabcbb"), 3);
        assert_eq!(longest_unique_substring("abcabcbb"), "abc");
    }

    #[test]
    fn all_identical() {
        assert_eq!(longest_unique_len("bbbbb"), 1);
        assert_eq!(longest_unique_len("aaaa"), 1);
        assert_eq!(longest_unique_substring("aaaa"), "a");
    }

    #[test]
    fn run_in_middle() {
        assert_eq!(longest_unique_len("pwwkew"), 3);
        assert_eq!(longest_unique_substring("pwwkew"), "wke");
    }

    #[test]
    fn no_repeats() {
        assert_eq!(longest_unique_len("abcdef"), 6);
        assert_eq!(longest_unique_substring("abcd"), "abcd");
    }

    #[test]
    fn repeat_before_window_start() {
        assert_eq!(longest_unique_len("abba"), 2);
        assert_eq!(longest_unique_len("tmmzuxt"), 5);
        assert_eq!(longest_unique_substring("tmmzuxt"), "mzuxt");
    }

    #[test]
    fn interleaved_repeats() {
        assert_eq!(longest_unique_len("abababab"), 2);
        assert_eq!(longest_unique_len("dvdf"), 3);
        assert_eq!(longest_unique_len("abcbcadefa"), 6);
    }

    #[test]
    fn multi_byte_characters() {
        assert_eq!(longest_unique_len("ééa"), 2);
        assert_eq!(longest_unique_substring("ééa"), "éa");
        assert_eq!(longest_unique_substring("日本日本語"), "日本語");
        // The bytes of 'é' are 0xc3 0xa9, which repeat across the two characters
        assert_eq!(longest_unique_bytes("ééa".as_bytes()).len(), 3);
    }

    #[test]
    fn same_input_same_result() {
        let s = "the quick brown fox";

        assert_eq!(longest_unique_len(s), longest_unique_len(s));
        assert_eq!(longest_unique_substring(s), "quick brown");
    }

    #[test]
    fn bytes_bounded_by_alphabet() {
        let data: Vec<u8> = (0..=255).chain(0..=255).collect();

        assert_eq!(longest_unique_bytes(&data).len(), 256);
    }

    #[test]
    fn generic_window() {
        let window = longest_unique_window(&[3, 1, 4, 1, 5, 9, 2, 6, 5]);

        assert_eq!(window.range(), 2..8);
    }
}
