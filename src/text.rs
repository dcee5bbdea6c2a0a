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

//! # Text Structure Module
//!
//! Sentence segmentation and word tokenization shared by every transform.
//!
//! ## Normalization Rules
//!
//! - A sentence ends at a run of terminal punctuation (`.`, `!`, `?`), plus
//!   any closing quotes or brackets written right after it. The run is kept on
//!   the [`ZiSentence`] as its `terminator`, never on a word.
//! - Words are maximal whitespace-delimited tokens. Any other punctuation
//!   stays on the token it is written against (`"물,"`).
//! - Joining uses single spaces between words and between sentences, so a
//!   split followed by a join reproduces the text up to whitespace runs.
//!
//! ```rust
//! use zimun::text::{join_sentences, split_sentences};
//!
//! let sentences = split_sentences("짜장면을 맛있게 먹었다. 짬뽕도 먹을까?");
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[1].terminator, "?");
//! assert_eq!(join_sentences(&sentences), "짜장면을 맛있게 먹었다. 짬뽕도 먹을까?");
//! ```

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters that terminate a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Closing quotes and brackets that may follow a terminator.
const CLOSING_MARKS: [char; 6] = ['"', '\'', '”', '’', ')', ']'];

/// Marks stripped from the end of a word before lexicon lookups.
const TRAILING_MARKS: [char; 11] = [',', ';', ':', '"', '\'', ')', ']', '”', '’', '…', '·'];

fn sentence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"[^.!?]*[.!?]+["'”’)\]]*|[^.!?]+"#)
            .expect("sentence pattern is a valid regex")
    })
}

/// A sentence: whitespace-normalized body plus its terminal punctuation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZiSentence {
    /// Words of the sentence joined by single spaces.
    pub body: String,
    /// Terminal punctuation run (`"."`, `"?!"`, `".\""`), empty for a trailing
    /// fragment.
    pub terminator: String,
}

impl ZiSentence {
    pub fn new(body: impl Into<String>, terminator: impl Into<String>) -> Self {
        ZiSentence {
            body: body.into(),
            terminator: terminator.into(),
        }
    }

    /// Splits the body into words.
    pub fn words(&self) -> Vec<String> {
        split_words(&self.body)
    }

    /// Returns a sentence with the same terminator and the given words.
    pub fn with_words(&self, words: &[String]) -> Self {
        ZiSentence {
            body: join_words(words),
            terminator: self.terminator.clone(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// A sentence without words carries no content, whatever its terminator.
    pub fn is_empty(&self) -> bool {
        self.word_count() == 0
    }
}

impl fmt::Display for ZiSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.body, self.terminator)
    }
}

/// Splits text into sentences on runs of terminal punctuation.
///
/// Whitespace-only input, and fragments consisting only of punctuation, yield
/// no sentences.
pub fn split_sentences(text: &str) -> Vec<ZiSentence> {
    sentence_pattern()
        .find_iter(text)
        .filter_map(|found| {
            let piece = found.as_str();
            let stem = piece.trim_end_matches(&CLOSING_MARKS[..]);
            let body = match stem.trim_end_matches(&SENTENCE_TERMINATORS[..]) {
                unterminated if unterminated.len() == stem.len() => piece,
                body => body,
            };
            let terminator = &piece[body.len()..];
            let words = split_words(body);
            if words.is_empty() {
                return None;
            }
            Some(ZiSentence::new(join_words(&words), terminator))
        })
        .collect()
}

/// Splits a sentence into whitespace-delimited words. Never yields empty tokens.
pub fn split_words(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().map(str::to_string).collect()
}

/// Joins words with single spaces.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Joins sentences with single spaces, each followed by its terminator.
/// Sentences without words are skipped.
pub fn join_sentences(sentences: &[ZiSentence]) -> String {
    sentences
        .iter()
        .filter(|sentence| !sentence.is_empty())
        .map(ZiSentence::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn first_sentence(text: &str) -> Option<ZiSentence> {
    split_sentences(text).into_iter().next()
}

/// Drops the first sentence and rejoins the remainder.
pub fn remove_first_sentence(text: &str) -> String {
    let sentences = split_sentences(text);
    match sentences.split_first() {
        Some((_, rest)) => join_sentences(rest),
        None => String::new(),
    }
}

/// Places `sentence` in front of `text`.
pub fn prepend_sentence(sentence: &ZiSentence, text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return sentence.to_string();
    }
    format!("{} {}", sentence, text)
}

/// Splits a word into its lookup form and the marks trailing it.
///
/// `"물,"` becomes `("물", ",")`. A word made only of marks is returned whole.
pub fn split_trailing_marks(word: &str) -> (&str, &str) {
    let core = word.trim_end_matches(&TRAILING_MARKS[..]);
    if core.is_empty() {
        return (word, "");
    }
    (core, &word[core.len()..])
}
