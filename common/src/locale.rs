use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Languages the board is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    De,
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::De, Locale::En, Locale::Fr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Picks the first supported language from an `Accept-Language` header,
    /// honouring the order the client sent and ignoring region subtags.
    pub fn from_accept_language(header: &str) -> Option<Locale> {
        let mut ranked: Vec<(f32, usize, Locale)> = header
            .split(',')
            .enumerate()
            .filter_map(|(position, part)| {
                let mut pieces = part.trim().split(';');
                let tag = pieces.next()?.trim();
                let quality = pieces
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);
                let primary = tag.split('-').next()?.to_ascii_lowercase();
                let locale = primary.parse::<Locale>().ok()?;
                Some((quality, position, locale))
            })
            .collect();

        ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        ranked.first().map(|(_, _, locale)| *locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "de" => Ok(Locale::De),
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(ParseError::UnknownLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_locales() {
        assert_eq!("fr".parse::<Locale>(), Ok(Locale::Fr));
        assert_eq!(
            "it".parse::<Locale>(),
            Err(ParseError::UnknownLocale("it".to_string()))
        );
    }

    #[test]
    fn accept_language_prefers_highest_quality() {
        assert_eq!(
            Locale::from_accept_language("it-CH, fr;q=0.8, en;q=0.9"),
            Some(Locale::En)
        );
    }

    #[test]
    fn accept_language_keeps_client_order_on_ties() {
        assert_eq!(
            Locale::from_accept_language("fr-CH,de-CH"),
            Some(Locale::Fr)
        );
    }

    #[test]
    fn accept_language_without_supported_tag() {
        assert_eq!(Locale::from_accept_language("it, es;q=0.5"), None);
        assert_eq!(Locale::from_accept_language(""), None);
    }
}
