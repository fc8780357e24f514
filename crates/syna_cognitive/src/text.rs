//! 轻量文本工具 - 分词、关键词与重叠度
//!
//! 仅做词面处理，不尝试任何语义理解。

use std::collections::{BTreeSet, HashMap};

/// 不计入关键词的常见虚词
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "these", "those", "from", "into", "through",
    "are", "was", "were", "been", "being", "its", "their", "there", "has", "have", "had", "but",
    "you", "your", "our", "can", "will", "would", "should", "could", "about", "what", "when",
    "where", "which", "who", "whom", "how", "why", "then", "than", "also", "such", "some", "any",
    "all", "each", "more", "most", "very", "just", "like", "over", "under", "between", "onto",
    "upon", "does", "did", "doing", "let", "lets", "please",
];

/// 否定词
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "nor", "without", "cannot", "can't",
    "isn't", "aren't", "wasn't", "weren't", "don't", "doesn't", "didn't", "won't", "wouldn't",
    "shouldn't", "couldn't", "hasn't", "haven't",
];

/// 小写分词，保留词内撇号 (弯撇号统一为 `'`)，顺序与原文一致
pub fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || is_apostrophe(c)))
        .map(|word| word.replace('\u{2019}', "'").trim_matches('\'').to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// 是否为否定词
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

/// 文本是否包含否定
pub fn has_negation(text: &str) -> bool {
    tokens(text).iter().any(|word| is_negation(word))
}

fn is_content(word: &str) -> bool {
    word.chars().count() >= 3 && !STOPWORDS.contains(&word) && !is_negation(word)
}

/// 内容词集合 (去虚词、去否定词)
pub fn content_terms(text: &str) -> BTreeSet<String> {
    tokens(text).into_iter().filter(|w| is_content(w)).collect()
}

/// 按首次出现顺序提取至多 `limit` 个关键词
pub fn key_terms(text: &str, limit: usize) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tokens(text)
        .into_iter()
        .filter(|w| is_content(w) && seen.insert(w.clone()))
        .take(limit)
        .collect()
}

/// 按词频降序提取至多 `limit` 个关键词，同频按首次出现顺序
pub fn ranked_terms(text: &str, limit: usize) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in tokens(text).into_iter().filter(|w| is_content(w)) {
        let count = counts.entry(word.clone()).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }
    // 稳定排序保证同频词保持首现顺序
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(limit);
    order
}

/// 重叠系数 |A ∩ B| / min(|A|, |B|)，任一为空时为 0
pub fn overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / smaller as f64
}

/// 截断到 [0, 1]，NaN 视为 0
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_keep_contractions() {
        assert_eq!(
            tokens("Costs DON'T fall, 'quickly'!"),
            vec!["costs", "don't", "fall", "quickly"]
        );
        assert_eq!(
            tokens("Costs don\u{2019}t fall, \u{2019}quickly\u{2019}"),
            vec!["costs", "don't", "fall", "quickly"]
        );
        assert!(has_negation("caching don\u{2019}t help"));
    }

    #[test]
    fn test_content_terms_drop_stopwords_and_negations() {
        let terms = content_terms("The cache is not warm through the night");
        let expected: BTreeSet<String> = ["cache", "warm", "night"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(terms, expected);
        assert!(has_negation("the cache is not warm"));
        assert!(!has_negation("the cache is warm"));
    }

    #[test]
    fn test_key_terms_first_seen_order() {
        assert_eq!(
            key_terms("river bank river flow bank delta", 3),
            vec!["river", "bank", "flow"]
        );
    }

    #[test]
    fn test_ranked_terms_by_frequency() {
        assert_eq!(
            ranked_terms("river bank river flow bank river delta", 4),
            vec!["river", "bank", "flow", "delta"]
        );
    }

    #[test]
    fn test_overlap() {
        let a = content_terms("reimagine latency through caching");
        let b = content_terms("latency depends on caching");
        assert!((overlap(&a, &b) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(overlap(&a, &BTreeSet::new()), 0.0);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(1.4), 1.0);
        assert_eq!(clamp01(-0.2), 0.0);
        assert_eq!(clamp01(f64::NAN), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
    }
}
