// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Longest runs without repeated elements.
//!
//! This crate finds the longest contiguous run of a sequence in which no element occurs twice,
//! e.g., the longest substring without repeating characters. All functions run a single sliding
//! window pass over the input and are *O*(*n*).
//!
//! # Examples
//!
//! ```
//! assert_eq!(uniqwin::longest_unique_len("abcabcbb"), 3);
//! assert_eq!(uniqwin::longest_unique_substring("abcabcbb"), "abc");
//! ```

mod longest;
mod scanner;
mod window;

pub use longest::{
    longest_unique_bytes, longest_unique_len, longest_unique_substring, longest_unique_window,
};
pub use scanner::Scanner;
pub use window::Window;
