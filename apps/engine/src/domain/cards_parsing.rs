//! Card names: `Display` renders the catalog name, `FromStr` accepts a name
//! (any case) or the rank digit.

use std::fmt;
use std::str::FromStr;

use super::cards_types::Card;
use crate::errors::domain::DomainError;

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(value) = token.parse::<u8>() {
            return Card::ALL
                .into_iter()
                .find(|c| c.value() == value)
                .ok_or_else(|| DomainError::config(format!("Parse card: no card of rank {value}")));
        }
        Card::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| DomainError::config(format!("Parse card: {s}")))
    }
}

/// Parse a list of card tokens, failing on the first bad one.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
