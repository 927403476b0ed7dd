use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SchemaError;

/// Clan number: four digits, the first always `0` (`"0138"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClanId(String);

impl ClanId {
    pub fn parse(id: &str) -> Result<Self, SchemaError> {
        let bytes = id.as_bytes();
        if bytes.len() == 4 && bytes[0] == b'0' && bytes.iter().all(u8::is_ascii_digit) {
            Ok(Self(id.to_string()))
        } else {
            Err(SchemaError::MalformedClan(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ClanId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ClanId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Any actor named in a report: a clan (`0138`), tribe (`1138`), element
/// (`1138e1`), courier, garrison, fleet, or a scout run (`1138e1s1`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The clan owning this actor.
    ///
    /// The leading digit of the four-digit tribe number is the unit kind;
    /// zeroing it yields the clan (`2138e2` belongs to `0138`). Ids that do
    /// not start with four digits belong to no clan.
    pub fn clan(&self) -> Option<ClanId> {
        let prefix = self.0.get(..4)?;
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(ClanId(format!("0{}", &prefix[1..])))
    }
}

impl From<&str> for UnitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Game turn, `YYYY-MM`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurnId {
    pub year: u16,
    pub month: u8,
}

impl TurnId {
    pub fn parse(turn: &str) -> Result<Self, SchemaError> {
        let malformed = || SchemaError::MalformedTurn(turn.to_string());
        let (year, month) = turn.split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let year: u16 = year.parse().map_err(|_| malformed())?;
        let month: u8 = month.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) {
            return Err(malformed());
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for TurnId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TurnId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        TurnId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clan_ids_need_leading_zero() {
        assert!(ClanId::parse("0138").is_ok());
        assert!(ClanId::parse("1138").is_err());
        assert!(ClanId::parse("013").is_err());
        assert!(ClanId::parse("01a8").is_err());
    }

    #[test]
    fn unit_parent_clan_zeroes_kind_digit() {
        assert_eq!(UnitId::from("2138e2").clan(), ClanId::parse("0138").ok());
        assert_eq!(UnitId::from("1987e1s1").clan(), ClanId::parse("0987").ok());
        assert_eq!(UnitId::from("0138").clan(), ClanId::parse("0138").ok());
        assert_eq!(UnitId::from("13").clan(), None);
        assert_eq!(UnitId::from("x138").clan(), None);
    }

    #[test]
    fn turns_parse_and_order() {
        let a = TurnId::parse("0901-01").unwrap();
        let b = TurnId::parse("0901-12").unwrap();
        let c = TurnId::parse("0902-01").unwrap();
        assert!(a < b && b < c);
        assert_eq!(b.to_string(), "0901-12");
    }

    #[test]
    fn malformed_turns_are_rejected() {
        for bad in ["", "0901", "901-01", "0901-13", "0901-00", "09O1-01", "0901-1"] {
            assert_eq!(
                TurnId::parse(bad),
                Err(SchemaError::MalformedTurn(bad.to_string())),
                "{bad}"
            );
        }
    }
}
