//! Country length table used to truncate over-captured candidates.
//!
//! This table only drives truncation in the matcher. A country code
//! missing here means "no truncation", not "invalid"; validity is the
//! validator's business and it keeps its own registry.

/// (country code, expected total IBAN length, country name).
///
/// 48 entries, quirks included. Do not merge with the validator
/// registry: the two disagree for a few codes, and unifying them would
/// silently change truncation behavior.
const COUNTRY_LENGTHS: [(&str, usize, &str); 48] = [
    ("AL", 28, "Albania"),
    ("AD", 24, "Andorra"),
    ("AT", 20, "Austria"),
    ("BE", 16, "Belgium"),
    ("BA", 20, "Bosnia"),
    ("BG", 22, "Bulgaria"),
    ("HR", 21, "Croatia"),
    ("CY", 28, "Cyprus"),
    ("CZ", 24, "Czech Republic"),
    ("DK", 18, "Denmark"),
    ("EE", 20, "Estonia"),
    ("FO", 18, "Faroe Islands"),
    ("FI", 18, "Finland"),
    ("FR", 27, "France"),
    ("DE", 22, "Germany"),
    ("GI", 23, "Gibraltar"),
    ("GR", 27, "Greece"),
    ("GL", 18, "Greenland"),
    ("HU", 28, "Hungary"),
    ("IS", 26, "Iceland"),
    ("IE", 22, "Ireland"),
    ("IL", 23, "Israel"),
    ("IT", 27, "Italy"),
    ("LV", 21, "Latvia"),
    ("LI", 21, "Liechtenstein"),
    ("LT", 20, "Lithuania"),
    ("LU", 20, "Luxembourg"),
    ("MK", 19, "Macedonia"),
    ("MT", 31, "Malta"),
    ("MU", 30, "Mauritius"),
    ("MC", 27, "Monaco"),
    ("ME", 22, "Montenegro"),
    ("NL", 18, "Netherlands"),
    ("NO", 15, "Northern Ireland"),
    ("PO", 28, "Poland"),
    ("PT", 25, "Portugal"),
    ("RO", 24, "Romania"),
    ("SM", 27, "San Marino"),
    ("SA", 24, "Saudi Arabia"),
    ("RS", 22, "Serbia"),
    ("SK", 24, "Slovakia"),
    ("SI", 19, "Slovenia"),
    ("ES", 24, "Spain"),
    ("SE", 24, "Sweden"),
    ("CH", 21, "Switzerland"),
    ("TR", 26, "Turkey"),
    ("TN", 24, "Tunisia"),
    ("GB", 22, "United Kingdom"),
];

/// Look up the expected IBAN length and country name for a country code.
pub fn lookup(code: &str) -> Option<(usize, &'static str)> {
    COUNTRY_LENGTHS
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, len, name)| (*len, *name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_table_size() {
        assert_eq!(COUNTRY_LENGTHS.len(), 48);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = COUNTRY_LENGTHS.iter().map(|(c, _, _)| *c).collect();
        assert_eq!(codes.len(), COUNTRY_LENGTHS.len());
    }

    #[test]
    fn test_lengths_are_positive() {
        assert!(COUNTRY_LENGTHS.iter().all(|(_, len, _)| *len > 0));
    }

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(lookup("FR"), Some((27, "France")));
        assert_eq!(lookup("DE"), Some((22, "Germany")));
        assert_eq!(lookup("BE"), Some((16, "Belgium")));
        assert_eq!(lookup("MT"), Some((31, "Malta")));
    }

    #[test]
    fn test_lookup_unknown_code() {
        assert_eq!(lookup("XX"), None);
        assert_eq!(lookup("fr"), None);
    }
}
