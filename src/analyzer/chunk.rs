//! Fixed-size chunking with overlap.
//!
//! This module divides log text into chunks that fit a single service call.
//!
//! # Design
//!
//! - `ChunkConfig` holds the validated size and overlap (in characters)
//! - `Segmenter` produces a lazy `Chunks` iterator over a borrowed text
//! - `LogChunk` is one slice of the text with its position
//! - Overlap keeps context continuous across chunk boundaries
//!
//! Offsets and lengths count Unicode scalar values, so a chunk boundary never
//! lands inside a multibyte character.

use super::error::AnalysisError;

/// Default chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Default overlap between consecutive chunks in characters.
pub const DEFAULT_CHUNK_OVERLAP: usize = 100;

/// Validated chunk size and overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    size: usize,
    overlap: usize,
}

impl ChunkConfig {
    /// Create a chunk configuration.
    ///
    /// Fails with `InvalidConfig` unless `size > 0` and `overlap < size`.
    pub fn new(size: usize, overlap: usize) -> Result<Self, AnalysisError> {
        if size == 0 {
            return Err(AnalysisError::invalid_config(
                "chunk_size",
                "must be greater than 0",
            ));
        }
        if overlap >= size {
            return Err(AnalysisError::invalid_config(
                "chunk_overlap",
                format!("{} must be smaller than chunk_size ({})", overlap, size),
            ));
        }
        Ok(Self { size, overlap })
    }

    /// Maximum characters per chunk.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Characters shared by consecutive chunks.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Distance between consecutive chunk starts.
    pub fn step(&self) -> usize {
        self.size - self.overlap
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

/// A chunk of log text ready for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogChunk<'a> {
    /// Position of this chunk within its document (0-based)
    pub index: usize,
    /// Start offset in characters from the beginning of the document
    pub start: usize,
    /// The chunk text
    pub text: &'a str,
}

impl LogChunk<'_> {
    /// Length of the chunk in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// End offset (exclusive) in characters.
    pub fn end(&self) -> usize {
        self.start + self.char_len()
    }
}

/// Splits text into overlapping chunks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    config: ChunkConfig,
}

impl Segmenter {
    /// Create a segmenter for a validated configuration.
    pub fn new(config: ChunkConfig) -> Self {
        Self { config }
    }

    /// The configuration this segmenter splits with.
    pub fn config(&self) -> ChunkConfig {
        self.config
    }

    /// Split `text` into chunks.
    ///
    /// The returned iterator borrows `text` and can be cloned to restart.
    pub fn split<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            text,
            size: self.config.size,
            step: self.config.step(),
            byte_pos: 0,
            char_pos: 0,
            index: 0,
            done: text.is_empty(),
        }
    }

    /// Number of chunks a text of `char_count` characters produces.
    pub fn chunk_count(&self, char_count: usize) -> usize {
        if char_count == 0 {
            return 0;
        }
        if char_count <= self.config.size {
            return 1;
        }
        let step = self.config.step();
        // Ceiling division over the characters left after the first chunk
        1 + (char_count - self.config.size + step - 1) / step
    }
}

/// Lazy iterator over the chunks of one text.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    text: &'a str,
    size: usize,
    step: usize,
    byte_pos: usize,
    char_pos: usize,
    index: usize,
    done: bool,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = LogChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let rest = &self.text[self.byte_pos..];
        let end = byte_offset_of_char(rest, self.size).map(|off| self.byte_pos + off);

        let chunk = LogChunk {
            index: self.index,
            start: self.char_pos,
            text: &self.text[self.byte_pos..end.unwrap_or(self.text.len())],
        };
        self.index += 1;

        match end {
            // Chunk stopped short of the end: advance by one step
            Some(_) => {
                // step < size, so the step boundary always lies inside this chunk
                let advance = byte_offset_of_char(rest, self.step).unwrap_or(rest.len());
                self.byte_pos += advance;
                self.char_pos += self.step;
            }
            None => self.done = true,
        }

        Some(chunk)
    }
}

/// Byte offset of the `n`th character, or `None` if the text has no more
/// than `n` characters.
fn byte_offset_of_char(text: &str, n: usize) -> Option<usize> {
    text.char_indices().nth(n).map(|(offset, _)| offset)
}
