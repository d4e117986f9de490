//! Minimal TF-IDF vectorizer with cosine ranking.
//!
//! Mirrors the scikit-learn defaults the matching behavior was tuned against:
//! tokens are lowercased runs of at least two word characters, English stop
//! words are removed, idf is smoothed (`ln((1+n)/(1+df)) + 1`), and vectors
//! are L2-normalized so cosine similarity reduces to a dot product.

use std::collections::{BTreeMap, HashMap};

/// Common English stop words, the subset that actually shows up in job
/// descriptions and resumes.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "you", "your", "yours",
];

/// Lowercased word tokens of at least two characters, stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Ranks `documents` against `query` by TF-IDF cosine similarity and returns
/// the best `(index, similarity)`. `None` when there are no documents or the
/// query produces no usable terms.
pub fn best_match(query: &str, documents: &[String]) -> Option<(usize, f64)> {
    if documents.is_empty() {
        return None;
    }

    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return None;
    }

    let doc_tokens: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

    // vocabulary over the whole corpus (query included), deterministic order
    let mut vocabulary: BTreeMap<&str, usize> = BTreeMap::new();
    for token in query_tokens.iter().chain(doc_tokens.iter().flatten()) {
        let next = vocabulary.len();
        vocabulary.entry(token.as_str()).or_insert(next);
    }

    // document frequency per term
    let corpus_size = doc_tokens.len() + 1;
    let mut document_frequency = vec![0usize; vocabulary.len()];
    for tokens in std::iter::once(&query_tokens).chain(doc_tokens.iter()) {
        let mut seen = vec![false; vocabulary.len()];
        for token in tokens {
            let term = vocabulary[token.as_str()];
            if !seen[term] {
                seen[term] = true;
                document_frequency[term] += 1;
            }
        }
    }

    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| ((1 + corpus_size) as f64 / (1 + df) as f64).ln() + 1.0)
        .collect();

    let query_vector = weigh(&query_tokens, &vocabulary, &idf);

    let mut best: Option<(usize, f64)> = None;
    for (index, tokens) in doc_tokens.iter().enumerate() {
        let doc_vector = weigh(tokens, &vocabulary, &idf);
        let similarity = dot_sparse(&query_vector, &doc_vector);
        let improves = match best {
            Some((_, best_similarity)) => similarity > best_similarity,
            None => true,
        };
        if improves {
            best = Some((index, similarity));
        }
    }
    best
}

/// L2-normalized tf·idf weights for one token list, keyed by term id.
fn weigh(
    tokens: &[String],
    vocabulary: &BTreeMap<&str, usize>,
    idf: &[f64],
) -> HashMap<usize, f64> {
    let mut counts: HashMap<usize, f64> = HashMap::new();
    for token in tokens {
        if let Some(&term) = vocabulary.get(token.as_str()) {
            *counts.entry(term).or_insert(0.0) += 1.0;
        }
    }

    for (term, weight) in counts.iter_mut() {
        *weight *= idf[*term];
    }

    let norm = counts.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in counts.values_mut() {
            *weight /= norm;
        }
    }
    counts
}

fn dot_sparse(a: &HashMap<usize, f64>, b: &HashMap<usize, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, weight)| large.get(term).map(|other| weight * other))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Senior Rust-Engineer, remote!"),
            vec!["senior", "rust", "engineer", "remote"]
        );
    }

    #[test]
    fn test_tokenize_drops_stop_words_and_single_chars() {
        assert_eq!(tokenize("a C developer in the team"), vec!["developer", "team"]);
    }

    #[test]
    fn test_identical_document_scores_near_one() {
        let query = "rust engineer with kubernetes experience";
        let documents = docs(&[
            "rust engineer with kubernetes experience",
            "pastry chef with sourdough experience",
        ]);
        let (index, similarity) = best_match(query, &documents).unwrap();
        assert_eq!(index, 0);
        assert!(similarity > 0.99, "similarity was {similarity}");
    }

    #[test]
    fn test_best_match_prefers_overlapping_vocabulary() {
        let query = "python data analysis pandas";
        let documents = docs(&[
            "javascript frontend react developer",
            "python pandas data analysis notebooks",
        ]);
        let (index, _) = best_match(query, &documents).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let (_, similarity) =
            best_match("alpha bravo", &docs(&["charlie delta"])).unwrap();
        assert_eq!(similarity, 0.0);
    }

    #[test]
    fn test_empty_inputs_yield_none() {
        assert!(best_match("anything", &[]).is_none());
        assert!(best_match("", &docs(&["doc"])).is_none());
        assert!(best_match("the of and", &docs(&["doc"])).is_none());
    }

    #[test]
    fn test_best_match_is_deterministic() {
        let query = "distributed systems engineer";
        let documents = docs(&[
            "distributed databases engineer",
            "systems programmer",
            "distributed systems researcher",
        ]);
        assert_eq!(best_match(query, &documents), best_match(query, &documents));
    }
}
