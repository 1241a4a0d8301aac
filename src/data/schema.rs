//! Species catalog document schema
//!
//! Only the fields the generator reads are modelled; everything else in the
//! catalog document is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// A species document as returned by the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// Base stat entries
    pub stats: Vec<StatEntry>,
    /// Moves the species can learn
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
    /// Sprite references
    #[serde(default)]
    pub sprites: Sprites,
}

/// One base stat entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One learnable move entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

/// A `{ "name": ..., "url": ... }` reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl SpeciesRecord {
    /// Parse a catalog document
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Convenience builder used when assembling records by hand
    pub fn with_stat(mut self, name: &str, base_stat: u32) -> Self {
        self.stats.push(StatEntry {
            base_stat,
            stat: NamedResource::new(name),
        });
        self
    }

    pub fn with_move(mut self, name: &str) -> Self {
        self.moves.push(MoveEntry {
            move_: NamedResource::new(name),
        });
        self
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.sprites.front_default = Some(url.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_document() {
        let body = r#"{
            "stats": [
                {"base_stat": 48, "effort": 0, "stat": {"name": "speed", "url": ""}},
                {"base_stat": 48, "effort": 1, "stat": {"name": "hp", "url": ""}}
            ],
            "moves": [{"move": {"name": "transform", "url": ""}, "version_group_details": []}],
            "sprites": {"front_default": "https://img.example/132.png", "back_default": null},
            "weight": 40
        }"#;
        let record = SpeciesRecord::from_json(body).unwrap();
        assert_eq!(record.stats.len(), 2);
        assert_eq!(record.stats[1].stat.name, "hp");
        assert_eq!(record.moves[0].move_.name, "transform");
        assert_eq!(record.sprites.front_default.as_deref(), Some("https://img.example/132.png"));
    }

    #[test]
    fn test_moves_and_sprites_optional() {
        let record = SpeciesRecord::from_json(r#"{"stats": []}"#).unwrap();
        assert!(record.moves.is_empty());
        assert_eq!(record.sprites.front_default, None);
    }

    #[test]
    fn test_rejects_non_document() {
        assert!(SpeciesRecord::from_json("Not Found").is_err());
        assert!(SpeciesRecord::from_json(r#"{"moves": []}"#).is_err());
    }
}
