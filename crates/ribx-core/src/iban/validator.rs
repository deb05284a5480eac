//! IBAN structural and checksum validation.
//!
//! Validation is self-contained: it carries its own registry of official
//! country formats and never consults the matcher's truncation table.

/// Official IBAN formats: (country code, total length, BBAN pattern).
///
/// The pattern is a compact run-length form of the per-position
/// character classes: `n` digit, `a` upper-case letter, `c` upper-case
/// alphanumeric. E.g. France is 27 characters total with a BBAN of
/// 10 digits, 11 alphanumerics, 2 digits: `"10n11c2n"`.
const REGISTRY: [(&str, usize, &str); 87] = [
    ("AD", 24, "8n12c"),
    ("AE", 23, "3n16n"),
    ("AL", 28, "8n16c"),
    ("AT", 20, "16n"),
    ("AZ", 28, "4a20c"),
    ("BA", 20, "16n"),
    ("BE", 16, "12n"),
    ("BG", 22, "4a6n8c"),
    ("BH", 22, "4a14c"),
    ("BI", 27, "23n"),
    ("BR", 29, "23n1a1c"),
    ("BY", 28, "4c4n16c"),
    ("CH", 21, "5n12c"),
    ("CR", 22, "18n"),
    ("CY", 28, "8n16c"),
    ("CZ", 24, "20n"),
    ("DE", 22, "18n"),
    ("DJ", 27, "23n"),
    ("DK", 18, "14n"),
    ("DO", 28, "4c20n"),
    ("EE", 20, "16n"),
    ("EG", 29, "25n"),
    ("ES", 24, "20n"),
    ("FI", 18, "14n"),
    ("FK", 18, "2a12n"),
    ("FO", 18, "14n"),
    ("FR", 27, "10n11c2n"),
    ("GB", 22, "4a14n"),
    ("GE", 22, "2a16n"),
    ("GI", 23, "4a15c"),
    ("GL", 18, "14n"),
    ("GR", 27, "7n16c"),
    ("GT", 28, "4c20c"),
    ("HR", 21, "17n"),
    ("HU", 28, "24n"),
    ("IE", 22, "4a14n"),
    ("IL", 23, "19n"),
    ("IQ", 23, "4a15n"),
    ("IS", 26, "22n"),
    ("IT", 27, "1a10n12c"),
    ("JO", 30, "4a4n18c"),
    ("KW", 30, "4a22c"),
    ("KZ", 20, "3n13c"),
    ("LB", 28, "4n20c"),
    ("LC", 32, "4a24c"),
    ("LI", 21, "5n12c"),
    ("LT", 20, "16n"),
    ("LU", 20, "3n13c"),
    ("LV", 21, "4a13c"),
    ("LY", 25, "21n"),
    ("MC", 27, "10n11c2n"),
    ("MD", 24, "2c18c"),
    ("ME", 22, "18n"),
    ("MK", 19, "3n10c2n"),
    ("MN", 20, "16n"),
    ("MR", 27, "23n"),
    ("MT", 31, "4a5n18c"),
    ("MU", 30, "4a19n3a"),
    ("NI", 28, "4a20n"),
    ("NL", 18, "4a10n"),
    ("NO", 15, "11n"),
    ("OM", 23, "3n16c"),
    ("PK", 24, "4a16c"),
    ("PL", 28, "24n"),
    ("PS", 29, "4a21c"),
    ("PT", 25, "21n"),
    ("QA", 29, "4a21c"),
    ("RO", 24, "4a16c"),
    ("RS", 22, "18n"),
    ("RU", 33, "14n15c"),
    ("SA", 24, "2n18c"),
    ("SC", 31, "4a20n3a"),
    ("SD", 18, "14n"),
    ("SE", 24, "20n"),
    ("SI", 19, "15n"),
    ("SK", 24, "20n"),
    ("SM", 27, "1a10n12c"),
    ("SO", 23, "19n"),
    ("ST", 25, "21n"),
    ("SV", 28, "4a20n"),
    ("TL", 23, "19n"),
    ("TN", 24, "20n"),
    ("TR", 26, "5n1c16c"),
    ("UA", 29, "6n19c"),
    ("VA", 22, "18n"),
    ("VG", 24, "4a16n"),
    ("XK", 20, "16n"),
];

fn registry_lookup(code: &str) -> Option<(usize, &'static str)> {
    REGISTRY
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, len, bban)| (*len, *bban))
}

/// Check a BBAN against a run-length pattern like `"10n11c2n"`.
fn bban_matches(bban: &str, pattern: &str) -> bool {
    let mut rest = bban.as_bytes();
    let mut count = 0usize;

    for ch in pattern.chars() {
        if let Some(digit) = ch.to_digit(10) {
            count = count * 10 + digit as usize;
            continue;
        }
        if rest.len() < count {
            return false;
        }
        let (segment, remainder) = rest.split_at(count);
        let ok = match ch {
            'n' => segment.iter().all(u8::is_ascii_digit),
            'a' => segment.iter().all(u8::is_ascii_uppercase),
            'c' => segment
                .iter()
                .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()),
            _ => false,
        };
        if !ok {
            return false;
        }
        rest = remainder;
        count = 0;
    }

    rest.is_empty()
}

/// Streaming mod-97 over the rearranged IBAN: first four characters
/// moved to the end, letters expanded to 10-35. The full number does
/// not fit any integer type, so the remainder is carried digit by digit.
fn checksum(iban: &str) -> u32 {
    let rearranged = iban[4..].bytes().chain(iban[..4].bytes());
    let mut remainder: u32 = 0;

    for b in rearranged {
        if b.is_ascii_digit() {
            remainder = (remainder * 10 + u32::from(b - b'0')) % 97;
        } else {
            // A=10 .. Z=35 contributes two decimal digits at once.
            remainder = (remainder * 100 + u32::from(b - b'A') + 10) % 97;
        }
    }

    remainder
}

/// Full structural validation of a single candidate string.
///
/// The input must already be upper-case and whitespace-free, which is
/// what the matcher emits. Pure and order-independent; every failure
/// mode is the same `false`.
pub fn validate_iban(iban: &str) -> bool {
    if iban.len() < 4 || !iban.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return false;
    }

    let country = &iban[..2];
    let check_digits = &iban[2..4];
    if !country.bytes().all(|b| b.is_ascii_uppercase()) {
        return false;
    }
    if !check_digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let (length, pattern) = match registry_lookup(country) {
        Some(entry) => entry,
        None => return false,
    };

    iban.len() == length && bban_matches(&iban[4..], pattern) && checksum(iban) == 1
}

/// Return the first candidate that passes full validation, if any.
///
/// Stops at the first hit; an empty or all-invalid input yields `None`.
pub fn select_valid<I, S>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .find(|c| validate_iban(c.as_ref()))
        .map(|c| c.as_ref().to_string())
}
