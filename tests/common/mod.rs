#![allow(dead_code)]

pub mod mock_lexicon;
pub mod scripted;

/// `count` distinct words, `w1` through `w{count}`.
pub fn words(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("w{i}")).collect()
}
