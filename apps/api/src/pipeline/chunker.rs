//! Word-window chunker — splits extracted document text into overlapping chunks.

use thiserror::Error;

/// Rejected chunking parameters. These are caller-configuration bugs, not
/// recoverable conditions: a zero window produces nothing and an overlap at or
/// above the window size would never advance.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChunkError {
    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,

    #[error("overlap ({overlap}) must be smaller than chunk_size ({chunk_size})")]
    OverlapTooLarge { overlap: usize, chunk_size: usize },
}

/// Splits `text` into overlapping windows of `chunk_size` whitespace-separated
/// words, advancing `chunk_size - overlap` words per step. The final chunk may
/// be shorter than `chunk_size`; together the windows cover every word.
pub fn split_into_chunks(
    text: &str,
    chunk_size: usize,
    overlap: usize,
) -> Result<Vec<String>, ChunkError> {
    if chunk_size == 0 {
        return Err(ChunkError::ZeroChunkSize);
    }
    if overlap >= chunk_size {
        return Err(ChunkError::OverlapTooLarge {
            overlap,
            chunk_size,
        });
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let step = chunk_size - overlap;

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let end = usize::min(start + chunk_size, words.len());
        chunks.push(words[start..end].join(" "));
        start += step;
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_yields_single_chunk() {
        let chunks = split_into_chunks("alpha beta gamma", 500, 50).unwrap();
        assert_eq!(chunks, vec!["alpha beta gamma"]);
    }

    #[test]
    fn test_windows_advance_by_size_minus_overlap() {
        // 10 words, chunk_size 4, overlap 1 → starts at 0, 3, 6, 9
        let text = "w0 w1 w2 w3 w4 w5 w6 w7 w8 w9";
        let chunks = split_into_chunks(text, 4, 1).unwrap();
        assert_eq!(
            chunks,
            vec!["w0 w1 w2 w3", "w3 w4 w5 w6", "w6 w7 w8 w9", "w9"]
        );
    }

    #[test]
    fn test_every_word_is_covered() {
        let words: Vec<String> = (0..137).map(|i| format!("word{i}")).collect();
        let text = words.join(" ");
        let chunks = split_into_chunks(&text, 20, 5).unwrap();

        let mut seen = std::collections::HashSet::new();
        for chunk in &chunks {
            for word in chunk.split_whitespace() {
                seen.insert(word.to_string());
            }
        }
        for word in &words {
            assert!(seen.contains(word), "word {word} not covered");
        }
    }

    #[test]
    fn test_no_chunk_is_empty() {
        let text = "a b c d e f g";
        for (size, overlap) in [(2, 0), (3, 1), (7, 6), (100, 0)] {
            let chunks = split_into_chunks(text, size, overlap).unwrap();
            assert!(!chunks.is_empty());
            assert!(chunks.iter().all(|c| !c.is_empty()), "{size}/{overlap}");
        }
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(split_into_chunks("", 500, 50).unwrap().is_empty());
        assert!(split_into_chunks("   \n\t ", 500, 50).unwrap().is_empty());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        assert_eq!(
            split_into_chunks("a b c", 0, 0),
            Err(ChunkError::ZeroChunkSize)
        );
    }

    #[test]
    fn test_overlap_at_or_above_chunk_size_rejected() {
        assert_eq!(
            split_into_chunks("a b c", 3, 3),
            Err(ChunkError::OverlapTooLarge {
                overlap: 3,
                chunk_size: 3
            })
        );
        assert!(split_into_chunks("a b c", 3, 5).is_err());
    }

    #[test]
    fn test_zero_overlap_produces_disjoint_windows() {
        let chunks = split_into_chunks("a b c d e f", 2, 0).unwrap();
        assert_eq!(chunks, vec!["a b", "c d", "e f"]);
    }
}
