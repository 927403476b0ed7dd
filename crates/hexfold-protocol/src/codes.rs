//! Closed code tables for terrain, edge features, resources and bearings.
//!
//! Reports carry these as short strings. Each table maps known codes to a
//! variant and keeps anything else in an `Unrecognized` variant so the
//! original text survives until conversion reports it.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::MapError;

/// Which code table an unknown code was looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeKind {
    Terrain,
    Feature,
    Resource,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CodeKind::Terrain => "terrain",
            CodeKind::Feature => "edge feature",
            CodeKind::Resource => "resource",
        })
    }
}

macro_rules! code_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:path {
            $( $variant:ident => $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $variant, )+
            Unrecognized(String),
        }

        impl $name {
            pub const KIND: CodeKind = $kind;

            pub fn from_code(code: &str) -> Self {
                match code {
                    $( $code => $name::$variant, )+
                    other => $name::Unrecognized(other.to_string()),
                }
            }

            pub fn code(&self) -> &str {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Unrecognized(code) => code.as_str(),
                }
            }

            /// Like [`Self::from_code`], but unknown codes are an error.
            pub fn parse(code: &str) -> Result<Self, MapError> {
                match Self::from_code(code) {
                    $name::Unrecognized(code) => Err(MapError::UnknownEnum {
                        kind: Self::KIND,
                        code,
                    }),
                    known => Ok(known),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let code = String::deserialize(deserializer)?;
                Ok(Self::from_code(&code))
            }
        }
    };
}

code_table! {
    /// Terrain of a single hex. The empty code is `Blank`: nothing known yet.
    pub enum Terrain: CodeKind::Terrain {
        Blank => "",
        Alps => "ALPS",
        AridHills => "AH",
        AridTundra => "AR",
        BrushFlat => "BF",
        BrushHills => "BH",
        ConiferHills => "CH",
        Deciduous => "D",
        DeciduousHills => "DH",
        Desert => "DE",
        GrassyHills => "GH",
        GrassyHillsPlateau => "GHP",
        HighSnowyMountains => "HSM",
        Jungle => "JG",
        JungleHills => "JH",
        Lake => "L",
        LowAridMountains => "LAM",
        LowConiferMountains => "LCM",
        LowJungleMountains => "LJM",
        LowSnowyMountains => "LSM",
        LowVolcanicMountains => "LVM",
        Ocean => "O",
        PolarIce => "PI",
        Prairie => "PR",
        PrairiePlateau => "PPR",
        RockyHills => "RH",
        SnowyHills => "SH",
        Swamp => "SW",
        Tundra => "TU",
        UnknownJungleSwamp => "UJS",
        UnknownLand => "UL",
        UnknownMountain => "UM",
        UnknownWater => "UW",
    }
}

code_table! {
    /// Something on the border between two hexes.
    pub enum EdgeFeature: CodeKind::Feature {
        Canal => "Canal",
        Ford => "Ford",
        Pass => "Pass",
        River => "River",
        StoneRoad => "Stone Road",
    }
}

code_table! {
    pub enum Resource: CodeKind::Resource {
        None => "None",
        Coal => "Coal",
        CopperOre => "Copper Ore",
        Diamond => "Diamond",
        Frankincense => "Frankincense",
        Gold => "Gold",
        IronOre => "Iron Ore",
        Jade => "Jade",
        Kaolin => "Kaolin",
        LeadOre => "Lead Ore",
        Limestone => "Limestone",
        NickelOre => "Nickel Ore",
        Pearls => "Pearls",
        Pyrite => "Pyrite",
        Rubies => "Rubies",
        Salt => "Salt",
        Silver => "Silver",
        Sulphur => "Sulphur",
        TinOre => "Tin Ore",
        VanadiumOre => "Vanadium Ore",
        ZincOre => "Zinc Ore",
    }
}

/// Sixteen-point compass bearing used by long-range sightings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bearing {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl Bearing {
    pub const ALL: [Bearing; 16] = [
        Bearing::N,
        Bearing::NNE,
        Bearing::NE,
        Bearing::ENE,
        Bearing::E,
        Bearing::ESE,
        Bearing::SE,
        Bearing::SSE,
        Bearing::S,
        Bearing::SSW,
        Bearing::SW,
        Bearing::WSW,
        Bearing::W,
        Bearing::WNW,
        Bearing::NW,
        Bearing::NNW,
    ];

    pub fn parse(code: &str) -> Result<Self, MapError> {
        Self::ALL
            .into_iter()
            .find(|bearing| bearing.code() == code)
            .ok_or_else(|| MapError::Bearing(code.to_string()))
    }

    pub const fn code(self) -> &'static str {
        match self {
            Bearing::N => "N",
            Bearing::NNE => "NNE",
            Bearing::NE => "NE",
            Bearing::ENE => "ENE",
            Bearing::E => "E",
            Bearing::ESE => "ESE",
            Bearing::SE => "SE",
            Bearing::SSE => "SSE",
            Bearing::S => "S",
            Bearing::SSW => "SSW",
            Bearing::SW => "SW",
            Bearing::WSW => "WSW",
            Bearing::W => "W",
            Bearing::WNW => "WNW",
            Bearing::NW => "NW",
            Bearing::NNW => "NNW",
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Bearing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Bearing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Bearing::parse(&code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_terrain_is_blank() {
        assert_eq!(Terrain::parse(""), Ok(Terrain::Blank));
    }

    #[test]
    fn unknown_terrain_keeps_text() {
        let terrain = Terrain::from_code("XYZZY");
        assert_eq!(terrain, Terrain::Unrecognized("XYZZY".to_string()));
        assert_eq!(terrain.code(), "XYZZY");
        assert!(!terrain.is_recognized());
        assert_eq!(
            Terrain::parse("XYZZY"),
            Err(MapError::UnknownEnum {
                kind: CodeKind::Terrain,
                code: "XYZZY".to_string(),
            })
        );
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(EdgeFeature::parse("Stone Road"), Ok(EdgeFeature::StoneRoad));
        assert!(EdgeFeature::parse("stone road").is_err());
        assert_eq!(Resource::parse("Iron Ore"), Ok(Resource::IronOre));
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&Terrain::BrushHills).unwrap();
        assert_eq!(json, "\"BH\"");
        let back: Terrain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Terrain::BrushHills);
    }

    #[test]
    fn bearings_parse() {
        assert_eq!(Bearing::parse("NNW"), Ok(Bearing::NNW));
        assert_eq!(Bearing::parse("X"), Err(MapError::Bearing("X".to_string())));
    }
}
