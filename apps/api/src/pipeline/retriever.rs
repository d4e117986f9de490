//! Nearest-neighbor retrieval over chunk embeddings by cosine similarity.

use std::cmp::Ordering;

/// Cosine similarity of two vectors. Defined as 0.0 when either vector has
/// zero magnitude — the degenerate case must not divide by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Returns up to `k` chunks ranked by descending cosine similarity to the
/// query vector. `chunk_vectors` is index-aligned with `chunks`. Ties keep the
/// original chunk order (stable sort); `k` larger than the chunk count returns
/// everything, still ranked.
pub fn retrieve_top_k(
    query_vector: &[f32],
    chunk_vectors: &[Vec<f32>],
    chunks: &[String],
    k: usize,
) -> Vec<String> {
    let mut ranked: Vec<(usize, f32)> = chunk_vectors
        .iter()
        .map(|v| cosine_similarity(query_vector, v))
        .enumerate()
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(k)
        .filter_map(|(i, _)| chunks.get(i).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cosine_self_similarity_is_one() {
        let v = vec![0.3, -0.7, 0.2, 0.9];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-2.0, 0.5, 4.0];
        assert!((cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_bounded() {
        let a = vec![12.0, -3.0, 0.25];
        let b = vec![-1.0, 7.5, 2.0];
        let sim = cosine_similarity(&a, &b);
        assert!((-1.0..=1.0).contains(&sim));
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let zero = vec![0.0; 4];
        let v = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_retrieve_orders_by_descending_similarity() {
        let query = vec![1.0, 0.0];
        let vectors = vec![
            vec![0.0, 1.0],  // orthogonal
            vec![1.0, 0.0],  // identical direction
            vec![1.0, 1.0],  // 45 degrees
        ];
        let chunks = owned(&["orthogonal", "aligned", "diagonal"]);

        let result = retrieve_top_k(&query, &vectors, &chunks, 2);
        assert_eq!(result, owned(&["aligned", "diagonal"]));
    }

    #[test]
    fn test_k_exceeding_chunk_count_returns_all() {
        let query = vec![1.0, 0.0];
        let vectors = vec![vec![0.5, 0.5], vec![1.0, 0.1], vec![0.0, 1.0]];
        let chunks = owned(&["a", "b", "c"]);

        let result = retrieve_top_k(&query, &vectors, &chunks, 5);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], "b");
        assert_eq!(result[2], "c");
    }

    #[test]
    fn test_ties_keep_original_chunk_order() {
        let query = vec![1.0, 0.0];
        // two identical vectors tie exactly; the earlier chunk must win
        let vectors = vec![vec![1.0, 1.0], vec![1.0, 1.0], vec![1.0, 0.0]];
        let chunks = owned(&["first", "second", "best"]);

        let result = retrieve_top_k(&query, &vectors, &chunks, 3);
        assert_eq!(result, owned(&["best", "first", "second"]));
    }

    #[test]
    fn test_retrieve_with_no_chunks_is_empty() {
        let result = retrieve_top_k(&[1.0, 0.0], &[], &[], 5);
        assert!(result.is_empty());
    }

    #[test]
    fn test_retrieve_is_deterministic() {
        let query = hash_like(7);
        let vectors: Vec<Vec<f32>> = (0..6).map(hash_like).collect();
        let chunks: Vec<String> = (0..6).map(|i| format!("chunk {i}")).collect();

        let first = retrieve_top_k(&query, &vectors, &chunks, 4);
        let second = retrieve_top_k(&query, &vectors, &chunks, 4);
        assert_eq!(first, second);
    }

    fn hash_like(seed: usize) -> Vec<f32> {
        (0..8)
            .map(|i| (((seed * 31 + i * 17) % 13) as f32 - 6.0) / 6.0)
            .collect()
    }
}
