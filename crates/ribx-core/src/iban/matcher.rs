//! Candidate matching: locating IBAN-shaped substrings in noisy text.

use lazy_static::lazy_static;
use regex::Regex;

use super::countries;

/// Minimum total length across all known IBAN formats.
const MIN_IBAN_LEN: usize = 14;
/// Maximum total length across all known IBAN formats.
const MAX_IBAN_LEN: usize = 34;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // Country code plus check digits, at the start of the text or after
    // a space. The check digits may be separated from the letters by a
    // single space (normalized text contains no other whitespace).
    static ref HEAD: Regex = Regex::new(r"(?:^|\s)([A-Z]{2} ?[0-9]{2})").unwrap();

    // At least nine more alphanumerics must follow the head; checked at
    // the head's end position without consuming, which filters short
    // false positives such as "NO 12" in running text.
    static ref LOOKAHEAD: Regex = Regex::new(r"^(?: ?[A-Z0-9]){9}").unwrap();

    // Noisy body: 2-7 groups, each an optional space followed by up to
    // five letters-then-digit units. Tolerates the spurious spaces OCR
    // inserts inside an otherwise contiguous account number.
    static ref BODY: Regex = Regex::new(r"^((?: ?(?:[A-Z]{0,4}[0-9]){0,5}){2,7})").unwrap();

    // Optional trailing remainder of 1-3 alphanumerics.
    static ref TAIL: Regex = Regex::new(r"^ ?[A-Z0-9]{1,3}").unwrap();
}

/// Flatten text for matching: table borders (`|`) become spaces,
/// whitespace runs collapse to a single space, everything upper-cased.
pub fn normalize(text: &str) -> String {
    let text = text.replace('|', " ");
    WHITESPACE.replace_all(&text, " ").to_uppercase()
}

/// Scan `text` for IBAN-shaped substrings and return cleaned candidates.
///
/// Each candidate is the concatenation of the matched head, body, and
/// optional tail with all internal whitespace removed. Candidates
/// outside [14, 34] characters are dropped. A candidate that starts
/// with a known country code and exceeds that country's expected length
/// is right-truncated to it, recovering from over-greedy captures of
/// trailing noise. The result is deduplicated in first-seen order.
pub fn find_candidates(text: &str) -> Vec<String> {
    let text = normalize(text);
    let mut candidates: Vec<String> = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let caps = match HEAD.captures_at(&text, pos) {
            Some(caps) => caps,
            None => break,
        };
        let head = match caps.get(1) {
            Some(m) => m,
            None => break,
        };

        let rest = &text[head.end()..];
        if !LOOKAHEAD.is_match(rest) {
            // Not enough material after the head; retry past it.
            pos = head.start() + 1;
            continue;
        }

        let body = BODY.find(rest).map(|m| m.as_str()).unwrap_or("");
        let tail = TAIL.find(&rest[body.len()..]).map(|m| m.as_str()).unwrap_or("");

        // Matches never overlap: resume after everything consumed.
        pos = head.end() + body.len() + tail.len();

        let candidate: String = head
            .as_str()
            .chars()
            .chain(body.chars())
            .chain(tail.chars())
            .filter(|c| !c.is_whitespace())
            .collect();

        if candidate.len() < MIN_IBAN_LEN || candidate.len() > MAX_IBAN_LEN {
            continue;
        }

        let candidate = match countries::lookup(&candidate[..2]) {
            Some((len, _)) if candidate.len() > len => candidate[..len].to_string(),
            _ => candidate,
        };

        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_collapses_noise() {
        assert_eq!(normalize("iban: | fr76  3000\n4000"), "IBAN: FR76 3000 4000");
    }

    #[test]
    fn test_normalize_pipes_and_case() {
        assert_eq!(normalize("a|b\n\nc"), "A B C");
    }

    #[test]
    fn test_no_iban_shaped_text() {
        assert!(find_candidates("").is_empty());
        assert!(find_candidates("Relevé d'identité bancaire").is_empty());
        assert!(find_candidates("total: 1234,56 EUR due 01/02/2024").is_empty());
    }

    #[test]
    fn test_short_head_rejected_by_lookahead() {
        // Two letters + two digits but nothing usable behind them.
        assert!(find_candidates("NO 12 was found").is_empty());
    }

    #[test]
    fn test_clean_french_iban_with_spaces() {
        let text = "IBAN: FR76 3000 6000 0112 3456 7890 189";
        let candidates = find_candidates(text);
        assert!(candidates.contains(&"FR7630006000011234567890189".to_string()));
    }

    #[test]
    fn test_iban_split_by_table_border() {
        let text = "Code banque | FR76 3000 6000 |\n| 0112 3456 7890 189 |";
        let candidates = find_candidates(text);
        assert!(candidates.contains(&"FR7630006000011234567890189".to_string()));
    }

    #[test]
    fn test_contiguous_iban_in_noise() {
        let text = "ref 2024-88 PL61109010140000071219812874.";
        let candidates = find_candidates(text);
        assert!(candidates.contains(&"PL61109010140000071219812874".to_string()));
    }

    #[test]
    fn test_trailing_word_absorbed_then_truncated() {
        // The optional tail grabs "AGE" from the following word; the
        // country length table cuts the candidate back to 27.
        let text = "FR76 3000 6000 0112 3456 7890 189 agence LYON";
        let candidates = find_candidates(text);
        assert!(candidates.contains(&"FR7630006000011234567890189".to_string()));
    }

    #[test]
    fn test_truncation_to_country_length() {
        // Trailing digits glued onto a German IBAN get cut at 22 chars.
        let text = "DE89 3704 0044 0532 0130 00 99";
        let candidates = find_candidates(text);
        assert!(candidates.contains(&"DE89370400440532013000".to_string()));
        for c in &candidates {
            if c.starts_with("DE") {
                assert_eq!(c.len(), 22);
                assert!("DE8937040044053201300099".starts_with(c.as_str()));
            }
        }
    }

    #[test]
    fn test_unknown_country_not_truncated() {
        // "QQ" is in no length table; the capture passes through as-is.
        let text = "QQ12 3456 7890 1234 5678";
        let candidates = find_candidates(text);
        assert!(candidates.contains(&"QQ123456789012345678".to_string()));
    }

    #[test]
    fn test_candidates_are_deduplicated() {
        let text = "FR76 3000 6000 0112 3456 7890 189 et FR76 3000 6000 0112 3456 7890 189";
        let candidates = find_candidates(text);
        let target = "FR7630006000011234567890189";
        assert_eq!(candidates.iter().filter(|c| *c == target).count(), 1);
    }

    #[test]
    fn test_lowercase_input_is_matched() {
        let text = "iban fr76 3000 6000 0112 3456 7890 189";
        let candidates = find_candidates(text);
        assert!(candidates.contains(&"FR7630006000011234567890189".to_string()));
    }

    #[test]
    fn test_length_gate_lower_bound() {
        // 13-character reconstruction is dropped, 14 is the minimum.
        assert!(find_candidates("QQ12 123456789").is_empty());
        let candidates = find_candidates("QQ12 1234567890");
        assert!(candidates.contains(&"QQ121234567890".to_string()));
    }

    #[test]
    fn test_length_gate_upper_bound() {
        // 34 characters pass; a 35-character capture is dropped. "QQ"
        // is in no length table, so nothing truncates these back down.
        let at_limit = "QQ12 12345 67890 12345 67890 12345 67890";
        let candidates = find_candidates(at_limit);
        assert!(candidates.contains(&"QQ12123456789012345678901234567890".to_string()));

        let over_limit = "QQ12 12345 67890 12345 67890 12345 67890 1";
        assert!(find_candidates(over_limit).is_empty());
    }
}
