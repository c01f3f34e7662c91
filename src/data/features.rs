// ============================================================
// Layer 4 — Feature Transformer
// ============================================================
// Reduces a token sequence to numbers the linear model can
// consume, in two explicit steps:
//
//   transform()          tokens → variable-length Vec<usize>
//                        Each token is stemmed, then encoded as
//                        the character length of its stem.
//
//   to_feature_vector()  variable-length → fixed-width Vec<f64>
//                        Pads with zeros or truncates to the
//                        configured input dimension.
//
// Example with input_dimension = 4:
//   tokens:    ["cats", "running", "quickly"]
//   stems:     ["cat",  "run",     "quick"]
//   transform: [3, 3, 5]
//   vector:    [3.0, 3.0, 5.0, 0.0]
//
// The stem-length encoding is a deliberately simple baseline.
// What matters is the shape of the contract: transform() keeps
// one value per token, and the pad/truncate adaptation happens
// HERE, visibly, at the dataset-construction boundary — never
// implicitly inside the trainer. Swapping in a richer encoding
// (hashing, embeddings) touches only this module.
//
// Reference: Rust Book §13 (Iterators)

use crate::infra::lexicon::Lexicon;

/// Map each token to the character length of its stemmed form.
/// Output length always equals input length; empty in, empty out.
pub fn transform(tokens: &[String], lexicon: &Lexicon) -> Vec<usize> {
    tokens
        .iter()
        .map(|tok| lexicon.stem(tok).chars().count())
        .collect()
}

/// Adapt a variable-length encoding to the model's fixed input
/// dimension: truncate past `input_dimension`, pad with 0.0.
pub fn to_feature_vector(values: &[usize], input_dimension: usize) -> Vec<f64> {
    let mut vector: Vec<f64> = values
        .iter()
        .take(input_dimension)
        .map(|&v| v as f64)
        .collect();
    vector.resize(input_dimension, 0.0);
    vector
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_transform_stems_then_measures() {
        let lex = Lexicon::builtin();
        let out = transform(&toks(&["cats", "running", "quickly"]), &lex);
        // cat=3, run=3, quick=5
        assert_eq!(out, vec![3, 3, 5]);
    }

    #[test]
    fn test_transform_preserves_length() {
        let lex = Lexicon::builtin();
        let input = toks(&["one", "two", "three", "four", "five"]);
        assert_eq!(transform(&input, &lex).len(), input.len());
    }

    #[test]
    fn test_transform_empty_gives_empty() {
        let lex = Lexicon::builtin();
        assert!(transform(&[], &lex).is_empty());
    }

    #[test]
    fn test_feature_vector_pads_short_input() {
        assert_eq!(to_feature_vector(&[3, 5], 4), vec![3.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_feature_vector_truncates_long_input() {
        assert_eq!(to_feature_vector(&[1, 2, 3, 4, 5, 6], 4), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_feature_vector_from_empty() {
        assert_eq!(to_feature_vector(&[], 3), vec![0.0, 0.0, 0.0]);
    }
}
