//! Line classification and rewriting
//!
//! The core of the normalizer: decides, for each input line, whether it is
//! discarded (and why) or rewritten into canonical colon-delimited form.

use crate::blacklist::Blacklist;
use memchr::memchr;
use std::fmt;

/// Why a line was not written to the output.
///
/// Closed set so callers and tests can match on the exact reason instead of
/// parsing message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscardReason {
    /// Line begins with `android://`.
    AndroidScheme,
    /// Line contains `[NOT_SAVED]` or `:UNKNOWN:`.
    NotSavedOrUnknownMarker,
    /// Domain part contains a blacklisted substring (the matched entry).
    BlacklistedDomain(String),
    /// Fewer than 3 colons after space conversion.
    TooFewSeparators,
    /// Path part has no colon to split credentials on.
    NoSeparatorAfterSlash,
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AndroidScheme => write!(f, "starts with android://"),
            Self::NotSavedOrUnknownMarker => write!(f, "contains [NOT_SAVED] or :UNKNOWN:"),
            Self::BlacklistedDomain(entry) => {
                write!(f, "contains blacklisted domain: {}", entry)
            }
            Self::TooFewSeparators => write!(f, "fewer than 3 colons"),
            Self::NoSeparatorAfterSlash => write!(f, "no colon after slash"),
        }
    }
}

/// Outcome of classifying a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformResult {
    /// Line survives; payload is the rewritten form.
    Kept(String),
    /// Line is dropped for exactly one reason.
    Discarded(DiscardReason),
}

impl TransformResult {
    /// Whether the line survived classification.
    pub fn is_kept(&self) -> bool {
        matches!(self, Self::Kept(_))
    }
}

/// Classify one line against the blacklist.
///
/// Deterministic and free of side effects. The step order below is
/// load-bearing: later steps assume earlier rejections already happened.
pub fn classify(line: &str, blacklist: &Blacklist) -> TransformResult {
    if line.starts_with("android://") {
        return TransformResult::Discarded(DiscardReason::AndroidScheme);
    }
    if line.contains("[NOT_SAVED]") || line.contains(":UNKNOWN:") {
        return TransformResult::Discarded(DiscardReason::NotSavedOrUnknownMarker);
    }

    // All spaces become colons before any further parsing.
    let line = line.replace(' ', ":");

    // Blacklist check runs on its own scheme-stripped view of the line.
    let domain = domain_of(strip_scheme(&line));
    if let Some(entry) = blacklist.matched_entry(domain) {
        return TransformResult::Discarded(DiscardReason::BlacklistedDomain(entry.to_string()));
    }

    if count_colons(&line) < 3 {
        return TransformResult::Discarded(DiscardReason::TooFewSeparators);
    }

    // The rewrite runs on an independently stripped view. Keeping the two
    // passes separate is intentional: the blacklist check and the rewrite
    // use different separator-priority rules.
    let view = strip_scheme(&line);
    let bytes = view.as_bytes();
    let slash = memchr(b'/', bytes);
    let colon = memchr(b':', bytes);

    match (slash, colon) {
        (Some(s), c) if c.map_or(true, |c| s < c) => {
            let after_slash = &view[s..];
            match memchr(b':', after_slash.as_bytes()) {
                None => TransformResult::Discarded(DiscardReason::NoSeparatorAfterSlash),
                Some(c2) => {
                    let mut out = String::with_capacity(view.len());
                    out.push_str(&view[..s]);
                    out.push_str(&after_slash[c2..]);
                    TransformResult::Kept(out.replace(' ', ":"))
                }
            }
        }
        _ => TransformResult::Kept(view.replace(' ', ":")),
    }
}

/// Strip one leading `http://` or `https://`. Exact spelling, case-sensitive.
#[inline]
fn strip_scheme(s: &str) -> &str {
    s.strip_prefix("http://")
        .or_else(|| s.strip_prefix("https://"))
        .unwrap_or(s)
}

/// Prefix of `s` up to the first `/` or `:`, whichever comes first.
/// The whole string when neither separator exists.
#[inline]
fn domain_of(s: &str) -> &str {
    let bytes = s.as_bytes();
    let end = match (memchr(b'/', bytes), memchr(b':', bytes)) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => s.len(),
    };
    &s[..end]
}

#[inline]
fn count_colons(s: &str) -> usize {
    s.bytes().filter(|&b| b == b':').count()
}
