//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zimun.
//! The Zimun project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Lexicon Module
//!
//! Read-only lexical resources consulted by insertion and replacement: a
//! stopword set and a synonym thesaurus.
//!
//! A lexicon is loaded once and shared behind an [`Arc`]. The built-in tables
//! are initialised on first use of [`ZiLexicon::builtin`]; production corpora
//! are loaded with [`ZiLexicon::from_json_files`].
//!
//! ## File Formats
//!
//! - Stopwords: a JSON array of strings
//! - Thesaurus: a JSON object mapping a word to an array of synonyms
//!
//! ```rust
//! use zimun::lexicon::ZiLexicon;
//!
//! let lexicon = ZiLexicon::from_json_str(r#"["먼저"]"#, r#"{"물": ["음료수"]}"#).unwrap();
//! assert!(lexicon.is_stopword("먼저"));
//! assert_eq!(lexicon.synonyms("물"), ["음료수".to_string()]);
//! assert!(lexicon.synonyms("불").is_empty());
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use crate::errors::{Result, ZiError};
use crate::text::SENTENCE_TERMINATORS;

/// Common Korean function words: pronouns, conjunctions, particles written
/// apart, and degree adverbs.
const BUILTIN_STOPWORDS: &[&str] = &[
    "이", "그", "저", "것", "수", "등", "들", "및", "때", "더", "또", "좀", "잘", "안", "못",
    "다", "한", "두", "세", "각", "나", "너", "우리", "저희", "당신", "그녀", "자기", "이것",
    "그것", "저것", "여기", "거기", "저기", "이런", "그런", "저런", "어떤", "무슨", "모든",
    "그리고", "그래서", "그러나", "그런데", "하지만", "그러므로", "따라서", "또한", "또는",
    "혹은", "게다가", "즉", "먼저", "다시", "바로", "곧", "이미", "아직", "이제", "지금",
    "너무", "매우", "아주", "정말", "가장", "조금", "의", "가", "을", "를", "에", "에서",
    "으로", "로", "와", "과", "도", "는", "은", "만", "까지", "부터", "에게", "한테", "처럼",
    "보다", "아", "어", "오", "음", "자", "예", "네",
];

/// Seed thesaurus of everyday vocabulary, keyed by surface form.
const BUILTIN_THESAURUS: &[(&str, &[&str])] = &[
    ("어제", &["전날", "작일"]),
    ("오늘", &["금일", "이날"]),
    ("내일", &["명일", "이튿날"]),
    ("식당에", &["음식점에", "밥집에"]),
    ("식당", &["음식점", "밥집"]),
    ("갔다", &["다녀왔다", "방문했다"]),
    ("목이", &["목구멍이"]),
    ("말랐다", &["건조했다", "타들어갔다"]),
    ("물", &["음료수", "식수", "생수"]),
    ("마셨다", &["들이켰다", "마시었다"]),
    ("탕수육을", &["꿔바로우를"]),
    ("집", &["가옥", "주택"]),
    ("집에", &["가옥에", "주택에"]),
    ("학교", &["학원", "교정"]),
    ("학교에", &["학원에", "교정에"]),
    ("친구", &["벗", "동무"]),
    ("친구와", &["벗과", "동무와"]),
    ("사람", &["인간", "인물"]),
    ("길", &["도로", "거리"]),
    ("빨리", &["급히", "재빨리"]),
    ("천천히", &["느긋이", "서서히"]),
    ("크다", &["거대하다", "커다랗다"]),
    ("작다", &["조그맣다", "자그맣다"]),
    ("기쁘다", &["즐겁다", "반갑다"]),
    ("슬프다", &["서럽다", "구슬프다"]),
];

/// Immutable stopword set and synonym thesaurus.
#[derive(Clone, Debug, Default)]
pub struct ZiLexicon {
    stopwords: HashSet<String>,
    thesaurus: HashMap<String, Vec<String>>,
}

impl ZiLexicon {
    /// Builds a lexicon from in-memory tables.
    ///
    /// Each synonym list keeps its first-seen order with duplicates removed.
    /// Synonyms that are blank, equal to the word, or that would not survive
    /// as a single word of a single sentence (whitespace or `.`/`!`/`?`
    /// inside) are dropped, and so are entries left without synonyms.
    pub fn new<S, T>(stopwords: S, thesaurus: T) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        T: IntoIterator<Item = (String, Vec<String>)>,
    {
        let stopwords = stopwords.into_iter().map(Into::into).collect();
        let mut rejected = 0usize;
        let mut dropped = 0usize;
        let thesaurus = thesaurus
            .into_iter()
            .filter_map(|(word, synonyms)| {
                let mut seen = HashSet::new();
                let mut kept = Vec::with_capacity(synonyms.len());
                for synonym in synonyms {
                    if synonym.trim().is_empty() || synonym == word {
                        continue;
                    }
                    if !is_single_word(&synonym) {
                        rejected += 1;
                        continue;
                    }
                    if seen.insert(synonym.clone()) {
                        kept.push(synonym);
                    }
                }
                if kept.is_empty() {
                    dropped += 1;
                    return None;
                }
                Some((word, kept))
            })
            .collect();
        if rejected > 0 {
            log::warn!("dropped {rejected} synonyms containing whitespace or sentence terminators");
        }
        if dropped > 0 {
            log::warn!("dropped {dropped} thesaurus entries without usable synonyms");
        }
        ZiLexicon {
            stopwords,
            thesaurus,
        }
    }

    /// Returns the shared built-in lexicon, building it on first call.
    pub fn builtin() -> Arc<ZiLexicon> {
        static BUILTIN: OnceLock<Arc<ZiLexicon>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                Arc::new(ZiLexicon::new(
                    BUILTIN_STOPWORDS.iter().copied(),
                    BUILTIN_THESAURUS.iter().map(|(word, synonyms)| {
                        (
                            word.to_string(),
                            synonyms.iter().map(|s| s.to_string()).collect(),
                        )
                    }),
                ))
            })
            .clone()
    }

    /// Parses a lexicon from JSON documents.
    pub fn from_json_str(stopwords: &str, thesaurus: &str) -> Result<Self> {
        let stopwords = parse_stopwords(&serde_json::from_str(stopwords)?)?;
        let thesaurus = parse_thesaurus(&serde_json::from_str(thesaurus)?)?;
        Ok(ZiLexicon::new(stopwords, thesaurus))
    }

    /// Loads a lexicon from a stopword file and a thesaurus file.
    pub fn from_json_files(
        stopwords_path: impl AsRef<Path>,
        thesaurus_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let stopwords_path = stopwords_path.as_ref();
        let thesaurus_path = thesaurus_path.as_ref();
        let lexicon = ZiLexicon::from_json_str(
            &fs::read_to_string(stopwords_path)?,
            &fs::read_to_string(thesaurus_path)?,
        )?;
        log::info!(
            "loaded lexicon: {} stopwords from {}, {} thesaurus entries from {}",
            lexicon.stopword_count(),
            stopwords_path.display(),
            lexicon.thesaurus_len(),
            thesaurus_path.display()
        );
        Ok(lexicon)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Synonyms of `word`, empty on a miss.
    pub fn synonyms(&self, word: &str) -> &[String] {
        self.thesaurus
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn thesaurus_len(&self) -> usize {
        self.thesaurus.len()
    }
}

fn is_single_word(synonym: &str) -> bool {
    !synonym
        .chars()
        .any(|c| c.is_whitespace() || SENTENCE_TERMINATORS.contains(&c))
}

fn parse_stopwords(value: &Value) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| ZiError::lexicon("stopwords must be a JSON array of strings"))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ZiError::lexicon(format!("stopword must be a string, got {item}")))
        })
        .collect()
}

fn parse_thesaurus(value: &Value) -> Result<Vec<(String, Vec<String>)>> {
    let entries = value
        .as_object()
        .ok_or_else(|| ZiError::lexicon("thesaurus must be a JSON object"))?;
    entries
        .iter()
        .map(|(word, synonyms)| {
            let synonyms = synonyms
                .as_array()
                .ok_or_else(|| {
                    ZiError::lexicon(format!("synonyms of '{word}' must be an array"))
                })?
                .iter()
                .map(|synonym| {
                    synonym.as_str().map(str::to_string).ok_or_else(|| {
                        ZiError::lexicon(format!("synonyms of '{word}' must be strings"))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok((word.clone(), synonyms))
        })
        .collect()
}
