#![forbid(unsafe_code)]

//! Imperative mood of the summary line (D401)
//!
//! Deciding whether a word is a verb in base form is a natural-language
//! problem; the rule delegates it to a [`MoodHeuristic`] so the detection can
//! be swapped without touching the rule.

use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::Code;

/// Suggests the imperative form of a summary's first word
pub trait MoodHeuristic: Send + Sync {
    /// Returns the imperative form when `word` is not already imperative
    ///
    /// The suggestion keeps the capitalisation of `word`. `None` means the
    /// word is acceptable (or not recognisably a verb).
    fn suggest(&self, word: &str) -> Option<String>;
}

/// Words ending in `s` that are not third-person verbs
const NOT_VERBS_S: &[&str] = &[
    "this",
    "is",
    "was",
    "its",
    "us",
    "yes",
    "thus",
    "status",
    "series",
    "analysis",
    "basis",
    "various",
    "previous",
    "always",
    "perhaps",
    "unless",
    "whereas",
    "towards",
];

/// Words ending in `ing` that are not participles
const NOT_VERBS_ING: &[&str] = &[
    "thing",
    "string",
    "something",
    "nothing",
    "everything",
    "anything",
    "during",
    "king",
    "ring",
    "sing",
    "ping",
    "spring",
    "swing",
    "wing",
    "bring",
    "sting",
    "cling",
    "fling",
    "sling",
    "wring",
    "morning",
    "evening",
    "ceiling",
];

/// Irregular forms the suffix rules get wrong
const IRREGULAR: &[(&str, &str)] = &[
    ("has", "have"),
    ("does", "do"),
    ("goes", "go"),
    ("caches", "cache"),
    ("being", "be"),
    ("doing", "do"),
    ("having", "have"),
    ("writing", "write"),
    ("creating", "create"),
    ("editing", "edit"),
    ("exiting", "exit"),
    ("visiting", "visit"),
    ("limiting", "limit"),
    ("monitoring", "monitor"),
    ("syncing", "sync"),
];

/// Stem endings (vowel + consonant) that drop a silent `e` before `-ing`
const SILENT_E_ENDINGS: &[&str] = &[
    "at", "ut", "iz", "yz", "az", "ar", "ur", "id", "od", "ib", "ok", "ak", "or", "in", "um",
    "am", "im", "om", "ap", "op", "ip", "ot", "ol", "il", "al", "ul", "ag", "ug", "ig", "og",
];

/// Doubled consonants that belong to the stem
const KEPT_DOUBLES: &[&str] = &["ll", "ss", "ff", "zz", "dd"];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Suffix-stripping heuristic for third-person and participle forms
#[derive(Debug, Default, Clone, Copy)]
pub struct SuffixHeuristic;

impl SuffixHeuristic {
    fn base_form(&self, lower: &str) -> Option<String> {
        if let Some((_, base)) = IRREGULAR.iter().find(|(word, _)| *word == lower) {
            return Some((*base).to_string());
        }
        if lower.ends_with("ing") {
            return Self::from_participle(lower);
        }
        if lower.ends_with('s') {
            return Self::from_third_person(lower);
        }
        None
    }

    fn from_third_person(lower: &str) -> Option<String> {
        if NOT_VERBS_S.contains(&lower)
            || lower.ends_with("ss")
            || lower.ends_with("us")
            || lower.ends_with("is")
        {
            return None;
        }
        if lower.len() > 4
            && let Some(stem) = lower.strip_suffix("ies")
        {
            return Some(format!("{stem}y"));
        }
        for suffix in ["sses", "shes", "ches", "xes", "zzes", "oes"] {
            if lower.ends_with(suffix) {
                return Some(lower[..lower.len() - 2].to_string());
            }
        }
        Some(lower[..lower.len() - 1].to_string())
    }

    fn from_participle(lower: &str) -> Option<String> {
        if NOT_VERBS_ING.contains(&lower) {
            return None;
        }
        let stem = &lower[..lower.len() - 3];
        let chars: Vec<char> = stem.chars().collect();
        if chars.len() < 2 {
            return None;
        }

        let n = chars.len();
        let (last, prev) = (chars[n - 1], chars[n - 2]);
        let tail = &stem[stem.len() - 2..];

        if last == prev && is_consonant(last) && !KEPT_DOUBLES.contains(&tail) {
            return Some(stem[..stem.len() - 1].to_string());
        }

        let before_tail = if n >= 3 { Some(chars[n - 3]) } else { None };
        let silent_e = matches!(last, 'v' | 'u')
            || (last == 's' && prev != 's')
            || (last == 'l' && is_consonant(prev) && prev != 'l')
            || matches!(tail, "rg" | "dg" | "rc" | "nc")
            || (last == 'c' && is_vowel(prev))
            || (SILENT_E_ENDINGS.contains(&tail) && before_tail.is_none_or(is_consonant));

        if silent_e {
            Some(format!("{stem}e"))
        } else {
            Some(stem.to_string())
        }
    }
}

/// Re-applies the capitalisation of `word` to `base`
fn match_case(word: &str, base: &str) -> String {
    match word.chars().next() {
        Some(first) if first.is_uppercase() => {
            let mut chars = base.chars();
            chars
                .next()
                .map(|c| c.to_uppercase().chain(chars).collect())
                .unwrap_or_default()
        }
        _ => base.to_string(),
    }
}

impl MoodHeuristic for SuffixHeuristic {
    fn suggest(&self, word: &str) -> Option<String> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        // Acronyms such as "URLS" or "IDS" are not inflected verbs.
        if word.len() > 1 && word.chars().all(|c| c.is_ascii_uppercase()) {
            return None;
        }

        let lower = word.to_ascii_lowercase();
        let base = self.base_form(&lower)?;
        if base.is_empty() || base == lower {
            return None;
        }
        Some(match_case(word, &base))
    }
}

/// The summary of a function or method starts with an imperative verb
pub struct ImperativeMood {
    heuristic: Box<dyn MoodHeuristic>,
}

impl ImperativeMood {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(SuffixHeuristic))
    }

    pub fn with_heuristic(heuristic: Box<dyn MoodHeuristic>) -> Self {
        Self { heuristic }
    }
}

impl Default for ImperativeMood {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ImperativeMood {
    fn name(&self) -> &'static str {
        "imperative-mood"
    }

    fn codes(&self) -> &'static [Code] {
        &[Code::D401]
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        if !ctx.node.owner_kind.is_callable() {
            return vec![];
        }
        let Some(docstring) = ctx.docstring() else {
            return vec![];
        };
        let Some(first_word) = docstring.trimmed_body().split_whitespace().next() else {
            return vec![];
        };

        match self.heuristic.suggest(first_word) {
            Some(imperative) => vec![ctx.violation(
                Code::D401,
                format!("First line should be in imperative mood ('{imperative}', not '{first_word}')"),
            )],
            None => vec![],
        }
    }
}
