//! `MediaUnit` (spec §3): `releaseOrder` totally orders a media item's units.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaUnit {
    pub id: Uuid,
    pub media_item_id: Uuid,
    /// Unique within its `MediaItem`; totally orders that item's units.
    pub release_order: i64,
    pub chapter: Option<i64>,
    pub season: Option<i64>,
    pub episode: Option<i64>,
    pub label: Option<String>,
}

impl MediaUnit {
    /// Formats as `SxEy` when season+episode are present, else `Chapter N`,
    /// else `Unit N` (spec §4.6 `getFeedForUser`).
    pub fn unit_reference(&self) -> String {
        match (self.season, self.episode) {
            (Some(s), Some(e)) => format!("S{s}E{e}"),
            _ => match self.chapter {
                Some(c) => format!("Chapter {c}"),
                None => format!("Unit {}", self.release_order),
            },
        }
    }
}
