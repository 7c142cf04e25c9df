//! Text segmentation and fixation engine for RSVP reading.
//!
//! Converts raw text into display-ready word chunks: tokenization and
//! chunk grouping, Optimal Recognition Point and bionic fixation
//! calculation, HTML-safe markup, and a one-shot precomputation pass so
//! the playback loop can index records without per-frame work.
//!
//! The crate is pure and host-agnostic: no I/O, no UI state, no panics
//! on malformed input. Degenerate input yields empty or zero results.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod classify;
pub mod fixation;
pub mod markup;
pub mod policy;
pub mod precompute;
pub mod segment;
pub mod stats;

pub use classify::{Classifier, UnicodeTables};
pub use fixation::{OrpCalculator, bionic_fixation, orp_index};
pub use markup::{RenderOptions, WordParts, escape_html, strip_html, word_parts};
pub use policy::{ChunkPolicy, TextPolicy, validate_text};
pub use precompute::{PrecomputedRecord, Precomputer, precompute_words};
pub use segment::{WordContext, chunk_words, parse_text, word_context, word_context_windowed};
pub use stats::{TextStats, count_sentences, extract_sentences, text_stats};
