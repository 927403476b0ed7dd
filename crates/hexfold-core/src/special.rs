use std::collections::BTreeMap;

use hexfold_protocol::{Document, HexRecord, SpecialHex};

/// Place names declared special by any document, keyed case-insensitively.
#[derive(Clone, Debug, Default)]
pub struct SpecialHexRegistry {
    by_name: BTreeMap<String, SpecialHex>,
}

impl SpecialHexRegistry {
    /// Build the registry from every document's declared list. The first
    /// declaration of a name fixes its id and display casing.
    pub fn collect(documents: &[Document]) -> Self {
        let mut registry = Self::default();
        for name in documents.iter().flat_map(|doc| &doc.special_hexes) {
            registry.declare(name);
        }
        tracing::debug!(special_hexes = registry.len(), "collected special hexes");
        registry
    }

    pub fn declare(&mut self, name: &str) {
        let key = name.to_lowercase();
        if key.is_empty() || self.by_name.contains_key(&key) {
            return;
        }
        let id = self.by_name.len() as u32 + 1;
        self.by_name.insert(
            key,
            SpecialHex {
                id,
                name: name.to_string(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&SpecialHex> {
        self.by_name.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Move settlements whose names are registered into each hex's special
/// list, keeping at most one special per name on a hex.
pub fn promote(hexes: &mut [HexRecord], registry: &SpecialHexRegistry) {
    if registry.is_empty() {
        return;
    }
    for hex in hexes {
        let features = &mut hex.features;
        let settlements = std::mem::take(&mut features.settlements);
        for settlement in settlements {
            let Some(special) = registry.get(&settlement.name) else {
                features.settlements.push(settlement);
                continue;
            };
            let key = special.name.to_lowercase();
            if !features
                .specials
                .iter()
                .any(|have| have.name.to_lowercase() == key)
            {
                features.specials.push(special.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hexfold_protocol::{Features, LinearCoord, Settlement, Terrain};

    use super::*;

    fn declaring(names: &[&str]) -> Document {
        Document {
            special_hexes: names.iter().map(|name| name.to_string()).collect(),
            ..Document::default()
        }
    }

    fn hex_with(names: &[&str]) -> HexRecord {
        HexRecord {
            location: LinearCoord::ZERO,
            render_at: LinearCoord::ZERO,
            terrain: Terrain::Blank,
            was_visited: false,
            was_scouted: false,
            features: Features {
                settlements: names
                    .iter()
                    .map(|name| Settlement {
                        name: name.to_string(),
                    })
                    .collect(),
                ..Features::default()
            },
        }
    }

    #[test]
    fn first_declaration_wins_casing() {
        let registry = SpecialHexRegistry::collect(&[
            declaring(&["Falls of Anduin", "Mordor"]),
            declaring(&["FALLS OF ANDUIN", "Rohan"]),
        ]);
        assert_eq!(registry.len(), 3);
        let falls = registry.get("falls of anduin").unwrap();
        assert_eq!(falls.id, 1);
        assert_eq!(falls.name, "Falls of Anduin");
        assert_eq!(registry.get("rohan").unwrap().id, 3);
    }

    #[test]
    fn duplicate_settlements_promote_once() {
        let registry = SpecialHexRegistry::collect(&[declaring(&["foo"])]);
        let mut hexes = [hex_with(&["Foo", "Foo"])];
        promote(&mut hexes, &registry);

        assert_eq!(hexes[0].features.specials.len(), 1);
        assert!(hexes[0].features.settlements.is_empty());
    }

    #[test]
    fn unregistered_settlements_stay() {
        let registry = SpecialHexRegistry::collect(&[declaring(&["Foo"])]);
        let mut hexes = [hex_with(&["Bar", "foo", "Baz"])];
        promote(&mut hexes, &registry);

        let names: Vec<_> = hexes[0]
            .features
            .settlements
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Bar", "Baz"]);
        assert_eq!(hexes[0].features.specials[0].name, "Foo");
    }

    #[test]
    fn empty_registry_is_a_no_op() {
        let mut hexes = [hex_with(&["Foo"])];
        promote(&mut hexes, &SpecialHexRegistry::default());
        assert_eq!(hexes[0].features.settlements.len(), 1);
    }
}
