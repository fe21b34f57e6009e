// src/translator.rs

use crate::errors::{RaseedError, RaseedResult};
use crate::language::LanguageCode;
use crate::translations::{canned_phrase, response_rules, CannedPhrase, PhraseRules};
use log::debug;
use regex::{NoExpand, Regex, RegexBuilder};
use std::collections::HashMap;
use std::time::Duration;

/// One substitution: every case-insensitive match of `pattern` becomes
/// `replacement`, taken literally.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> RaseedResult<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                RaseedError::translation_error(format!("Invalid rule pattern '{}': {}", pattern, e))
            })?;

        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(&self.replacement))
            .into_owned()
    }
}

/// Ordered rules for one language. Each rule rescans the output of the
/// previous one, so earlier rules can shadow later ones.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn from_pairs(pairs: PhraseRules) -> RaseedResult<Self> {
        let rules = pairs
            .iter()
            .map(|(pattern, replacement)| Rule::new(pattern, *replacement))
            .collect::<RaseedResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }
}

/// Best-effort phrase substitution into the selected language. Phrases with
/// no rule stay in English.
#[derive(Debug, Clone)]
pub struct PhraseTranslator {
    rule_sets: HashMap<LanguageCode, RuleSet>,
    delay: Duration,
}

impl PhraseTranslator {
    /// Builds the translator from the built-in phrase tables. `delay` stands
    /// in for the latency of a remote translation service.
    pub fn new(delay: Duration) -> RaseedResult<Self> {
        let mut rule_sets = HashMap::new();
        for lang in LanguageCode::ALL {
            if lang.is_english() {
                continue;
            }
            rule_sets.insert(lang, RuleSet::from_pairs(response_rules(lang))?);
        }
        Ok(Self::with_rules(rule_sets, delay))
    }

    pub fn with_rules(rule_sets: HashMap<LanguageCode, RuleSet>, delay: Duration) -> Self {
        Self { rule_sets, delay }
    }

    pub fn rule_count(&self, lang: LanguageCode) -> usize {
        self.rule_sets.get(&lang).map_or(0, RuleSet::len)
    }

    pub async fn translate(&self, text: &str, lang: LanguageCode) -> String {
        if lang.is_english() || text.is_empty() {
            return text.to_string();
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.apply_rules(text, lang)
    }

    /// The substitution pass on its own, without the simulated latency.
    pub fn apply_rules(&self, text: &str, lang: LanguageCode) -> String {
        match self.rule_sets.get(&lang) {
            Some(rules) => {
                debug!("Applying {} phrase rules for '{}'", rules.len(), lang);
                rules.apply(text)
            }
            None => text.to_string(),
        }
    }
}

pub fn translate_error_message(lang: LanguageCode) -> &'static str {
    canned_phrase(CannedPhrase::FetchError, lang)
}

pub fn translate_assistance(lang: LanguageCode) -> &'static str {
    canned_phrase(CannedPhrase::Assistance, lang)
}

pub fn translate_follow_up(lang: LanguageCode) -> &'static str {
    canned_phrase(CannedPhrase::FollowUp, lang)
}
