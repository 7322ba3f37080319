//! Release-name parsing.
//!
//! Extracts a best-guess (title, year) pair from a directory entry name
//! such as `Inception.2010.1080p.mkv`. Dot-separated tokens are preferred;
//! names without any dot fall back to space separation.

/// Title and year guessed from an entry name.
///
/// `year` is empty when no token qualified as a release year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub title: String,
    pub year: String,
}

/// Parse an entry name into a [`ParsedName`].
///
/// The first token that is exactly four ASCII digits with a value strictly
/// between 1000 and 3000 is taken as the year; the title is every token
/// before it, joined with spaces. The space fallback is only attempted when
/// splitting on `.` yields a single token - a dotted name with no valid
/// year token is returned whole, even if it contains spaces.
pub fn parse_name(name: &str) -> ParsedName {
    let mut tokens: Vec<&str> = name.split('.').collect();
    if tokens.len() == 1 {
        tokens = name.split(' ').collect();
    }

    if tokens.len() < 2 {
        return ParsedName {
            title: name.to_string(),
            year: String::new(),
        };
    }

    for (idx, token) in tokens.iter().enumerate() {
        if is_year_token(token) {
            return ParsedName {
                title: tokens[..idx].join(" "),
                year: (*token).to_string(),
            };
        }
    }

    ParsedName {
        title: name.to_string(),
        year: String::new(),
    }
}

/// A year token is exactly four decimal digits, strictly between 1000 and
/// 3000. Shorter or longer digit runs never match, even if numerically in
/// range.
fn is_year_token(token: &str) -> bool {
    token.len() == 4
        && token.bytes().all(|b| b.is_ascii_digit())
        && token
            .parse::<u32>()
            .map(|year| year > 1000 && year < 3000)
            .unwrap_or(false)
}
