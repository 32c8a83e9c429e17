//! Benchmarking support for the Mauka word frequency counter.
//!
//! Deterministic workloads shared by the criterion benchmarks so runs are
//! comparable across machines and commits.

/// Builds `count` distinct lowercase keys.
///
/// Keys are base-26 spellings of their index, so they are short, unique and
/// spread across the polynomial hash the way dictionary words are.
pub fn distinct_keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|mut n| {
            let mut key = String::new();
            loop {
                key.push(char::from(b'a' + (n % 26) as u8));
                n /= 26;
                if n == 0 {
                    break;
                }
            }
            key
        })
        .collect()
}

/// Builds a text of `words` words drawn round-robin from `vocabulary`
/// distinct keys, separated by spaces.
pub fn corpus(words: usize, vocabulary: usize) -> String {
    let keys = distinct_keys(vocabulary.max(1));
    let mut text = String::new();
    for i in 0..words {
        text.push_str(&keys[i % keys.len()]);
        text.push(' ');
    }
    text
}
