//! Statistics: a bare ordered collection with no singleton.

use harva_core::defaults::NEW_STATISTIC_NUMBER;
use harva_core::editable::{rank_of, EditableList, NewItem};
use harva_core::types::{Rank, RowId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{object, row_identity, ContentRow, RankedRow};
use crate::store::Record;

/// A row from the `statistics` table. `number` is display text ("65+").
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistic {
    pub id: Option<RowId>,
    pub number: String,
    pub description: String,
    pub display_order: Rank,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Statistic {
    pub fn new(number: &str, description: &str) -> Self {
        Self {
            number: number.to_string(),
            description: description.to_string(),
            ..Self::default()
        }
    }
}

impl ContentRow for Statistic {
    const TABLE: &'static str = "statistics";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "number": self.number,
            "description": self.description,
        }))
    }
}

impl RankedRow for Statistic {
    fn rank(&self) -> Rank {
        self.display_order
    }
}

impl NewItem for Statistic {
    fn new_item(position: usize) -> Self {
        Self {
            display_order: rank_of(position),
            ..Self::new(NEW_STATISTIC_NUMBER, "")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsDraft {
    pub statistics: EditableList<Statistic>,
}
