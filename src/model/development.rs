use super::{DataQualityWarning, House};
use serde::{Deserialize, Serialize};

/// A residential development: the full set of houses on sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Development {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub houses: Vec<House>,
}

impl Development {
    #[must_use]
    pub fn new(name: String, address: String, houses: Vec<House>) -> Self {
        Self {
            name,
            address,
            houses,
        }
    }

    #[must_use]
    pub fn house(&self, id: &str) -> Option<&House> {
        self.houses.iter().find(|h| h.id == id)
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.houses.iter().position(|h| h.id == id)
    }

    #[must_use]
    pub fn total_houses(&self) -> usize {
        self.houses.len()
    }

    #[must_use]
    pub fn data_quality_warnings(&self) -> Vec<DataQualityWarning> {
        self.houses
            .iter()
            .flat_map(House::data_quality_warnings)
            .collect()
    }
}
