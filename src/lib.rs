//! Showdown is a library for classifying poker hands and deciding a
//! winner. It covers card values, suits, hand categories, and a total
//! ordering over classified hands.
//!
//! # Examples
//!
//! ```
//! use showdown::core::{cards_from_str, Selectable};
//!
//! let pair = cards_from_str("4hKd4c").unwrap().select().unwrap();
//! let straight = cards_from_str("2h3d4s5c6c").unwrap().select().unwrap();
//!
//! assert!(straight > pair);
//! assert_eq!("Straight: Six high", straight.to_string());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
