//! Extraction of `key: value` filter tokens (`limit:10`) from a search query.

use regex::{Regex, RegexBuilder};
use tracing::trace;

const DEFAULT_TOKENS: [&str; 2] = ["limit", "origins"];

/// A query with its filter tokens removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysedQuery {
    /// The remaining free text.
    pub query: String,
    /// Extracted tokens as `key=value`, in token order.
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone)]
struct TokenPattern {
    key: String,
    /// The token with its leading whitespace (or at the start of the query).
    occurrence: Regex,
    value: Regex,
}

impl TokenPattern {
    fn new(key: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(key);
        Ok(Self {
            key: key.to_owned(),
            occurrence: RegexBuilder::new(&format!(r"(^ *{escaped}: *\w+|\s+{escaped}: *\w+)"))
                .case_insensitive(true)
                .build()?,
            value: RegexBuilder::new(&format!(r"{escaped}: *(\w+)"))
                .case_insensitive(true)
                .build()?,
        })
    }

    fn apply(&self, analysed: &mut AnalysedQuery) {
        let Some(found) = self.occurrence.find(&analysed.query) else {
            return;
        };
        let token = found.as_str().to_owned();
        if let Some(value) = self.value.captures(&token).and_then(|c| c.get(1)) {
            trace!(key = %self.key, value = value.as_str(), "Extracted query token");
            analysed
                .parameters
                .push(format!("{}={}", self.key, value.as_str()));
        }
        analysed.query.replace_range(found.range(), "");
    }
}

/// Strips known `key: value` tokens out of a free text query.
///
/// ```rust
/// use coordsearch::TokenAnalyser;
///
/// let analysed = TokenAnalyser::default().analyse("bern limit: 5");
/// assert_eq!(analysed.query, "bern");
/// assert_eq!(analysed.parameters, vec!["limit=5".to_owned()]);
/// ```
#[derive(Debug, Clone)]
pub struct TokenAnalyser {
    patterns: Vec<TokenPattern>,
}

impl Default for TokenAnalyser {
    fn default() -> Self {
        Self::new(DEFAULT_TOKENS).expect("default token patterns")
    }
}

impl TokenAnalyser {
    /// Analyser recognising the given token keys.
    pub fn new<I, S>(keys: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = keys
            .into_iter()
            .map(|key| TokenPattern::new(key.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Remove the first occurrence of each token from `query`.
    pub fn analyse(&self, query: &str) -> AnalysedQuery {
        let mut analysed = AnalysedQuery {
            query: query.to_owned(),
            parameters: Vec::new(),
        };
        for pattern in &self.patterns {
            pattern.apply(&mut analysed);
        }
        analysed
    }
}
