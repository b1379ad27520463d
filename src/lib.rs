//! A compiler from wildcard query strings to regular expression matchers.
//!
//! A query string is an ordinary string in which every occurrence of the
//! wildcard marker `*` matches any sequence of zero or more characters, and
//! every other character matches only itself, even characters that have
//! special meaning to the regular expression engine.
//!
//! # Features
//!
//! - **Simple API**: Infallible compilation with `Pattern::new()`
//! - **Full-string semantics**: A match must consume the entire candidate
//! - **Literal everything else**: Regex metacharacters in the query are neutralized
//! - **Custom markers**: Any substring can serve as the wildcard marker
//! - **Reusable matchers**: Compiled once, immutable, shareable across threads
//!
//! # Query Syntax
//!
//! - `*` - Matches zero or more characters
//! - Any other character matches itself
//! - There is no escaping syntax; a query cannot match a literal `*`
//!   (choose a different marker with `Pattern::with_marker` instead)
//!
//! # Examples
//!
//! ```
//! use wildre::Pattern;
//!
//! let pattern = Pattern::new("hello*world");
//! assert!(pattern.matches("helloXYZworld"));
//! assert!(pattern.matches("helloworld"));
//! assert!(!pattern.matches("helloXYZplanet"));
//!
//! let pattern = Pattern::new("*");
//! assert!(pattern.matches(""));
//! assert!(pattern.matches("anything"));
//!
//! let pattern = Pattern::new("a.b");
//! assert!(pattern.matches("a.b"));
//! assert!(!pattern.matches("aXb"));
//! ```
//!
//! # Full-String Matching
//!
//! Unlike a plain regular expression search, a compiled pattern never matches
//! a substring of the candidate:
//!
//! ```
//! use wildre::Pattern;
//!
//! let pattern = Pattern::new("exact");
//! assert!(pattern.matches("exact"));
//! assert!(!pattern.matches("exactly"));
//! assert!(!pattern.matches("inexact"));
//! ```

mod pattern;

pub use pattern::*;
