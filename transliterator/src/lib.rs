//! # transliterator
//!
//! Finglish (Persian in Latin letters) to Farsi script. [`convert`] is a pure, total function
//! over a static [`rules`] table: digraphs (`ch`, `gh`, `kh`, `sh`) are matched before single
//! letters and anything without a rule passes through unchanged.
//!
//! [`Transliterate`] abstracts over backends; [`LocalTransliterator`] wraps [`convert`].

pub mod backend;
pub mod engine;
pub mod rules;

pub use backend::{LocalTransliterator, Transliterate};
pub use engine::convert;
pub use rules::{lookup_digraph, lookup_letter, rules, Rule, DIGRAPHS, LETTERS};
