//! One-shot conversion of a chunk list into display-ready records.
//!
//! Runs once per loaded document and mode change; the playback loop
//! then indexes the result in O(1) with zero per-frame computation.

use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use crate::classify::Classifier;
use crate::fixation::OrpCalculator;
use crate::markup::{self, RenderOptions, WordParts};

/// Display-ready record for one chunk. Immutable once produced;
/// rebuild the whole list when text, chunk size, or mode changes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrecomputedRecord {
    pub text: String,
    pub parts: Vec<WordParts>,
    pub html: String,
    pub max_length: usize,
    pub orp_index: usize,
}

/// Batch precomputer reusing one fixation scratch buffer across the
/// whole document. Give each worker its own instance.
#[derive(Debug, Default)]
pub struct Precomputer {
    calc: OrpCalculator,
}

impl Precomputer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        Self {
            calc: OrpCalculator::with_classifier(classifier),
        }
    }

    /// One record per chunk, in input order. Equivalent, record for
    /// record, to calling the per-word functions at display time.
    pub fn precompute_words(
        &mut self,
        chunks: &[String],
        options: RenderOptions,
    ) -> Vec<PrecomputedRecord> {
        let mut records = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            records.push(self.record_for(chunk, options));
        }
        debug!(
            "precomputed {} records (orp={}, bionic={})",
            records.len(),
            options.orp_enabled,
            options.bionic
        );
        records
    }

    fn record_for(&mut self, chunk: &str, options: RenderOptions) -> PrecomputedRecord {
        // Bionic mode never needs ORP parts; the modes are exclusive.
        let parts = if options.bionic || chunk.is_empty() {
            Vec::new()
        } else {
            chunk
                .split(' ')
                .map(|word| markup::word_parts(&mut self.calc, word, options.orp_enabled))
                .collect()
        };

        PrecomputedRecord {
            text: String::from(chunk),
            parts,
            html: markup::render_chunk(&mut self.calc, chunk, options),
            max_length: longest_letter_run(self.calc.classifier(), chunk),
            orp_index: self.calc.orp_index(chunk),
        }
    }
}

/// One-shot [`Precomputer::precompute_words`].
pub fn precompute_words(chunks: &[String], options: RenderOptions) -> Vec<PrecomputedRecord> {
    Precomputer::new().precompute_words(chunks, options)
}

/// Longest run of letter/digit characters in `text`; callers size a
/// stable display width from it so playback does not jitter.
fn longest_letter_run(classifier: Classifier, text: &str) -> usize {
    let mut best = 0usize;
    let mut run = 0usize;
    for ch in text.chars() {
        if classifier.is_letter_or_digit(ch) {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}
