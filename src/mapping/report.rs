/*
Mapping report: an owned snapshot of a UidMap that can leave the process.

    pairs            correlated (source, destination) uids, positional order
    source_len       length of the source sequence the map was built from
    destination_len  length of the destination sequence

Encoded as TOON text so a sync run can record which messages landed where.
*/
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::error::MapError;
use crate::core::mapping::UidMap;
use crate::core::record::UidPair;
use crate::core::types::Identifier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingReport<T> {
    pairs: Vec<UidPair<T>>,
    source_len: usize,
    destination_len: usize,
}

impl<T: Identifier> MappingReport<T> {
    pub fn from_map(map: &UidMap<'_, T>) -> Self {
        Self {
            pairs: map.iter().collect(),
            source_len: map.source().len(),
            destination_len: map.destination().len(),
        }
    }

    pub fn pairs(&self) -> &[UidPair<T>] {
        &self.pairs
    }

    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn destination_len(&self) -> usize {
        self.destination_len
    }

    //entries of the longer sequence that never got a partner
    pub fn inert_entries(&self) -> usize {
        self.source_len.abs_diff(self.destination_len)
    }

    //same first-match policy as UidMap::get
    pub fn lookup(&self, src: T) -> Option<T> {
        self.pairs
            .iter()
            .find(|p| p.source() == src)
            .map(|p| p.destination())
    }
}

impl<T: Identifier + Serialize> MappingReport<T> {
    pub fn to_toon(&self) -> Result<String, MapError> {
        tracing::debug!(pairs = self.pairs.len(), "encoding mapping report");
        toon_format::encode_default(self).map_err(|e| MapError::Report(e.to_string()))
    }
}

impl<T: Identifier + DeserializeOwned> MappingReport<T> {
    pub fn from_toon(input: &str) -> Result<Self, MapError> {
        let report: Self =
            toon_format::decode_default(input).map_err(|e| MapError::Report(e.to_string()))?;

        //a snapshot pairs exactly the shorter of the two sequences
        let expected = report.source_len.min(report.destination_len);
        if report.pairs.len() != expected {
            return Err(MapError::Report(format!(
                "report carries {} pairs but its lengths ({}, {}) allow {}",
                report.pairs.len(),
                report.source_len,
                report.destination_len,
                expected,
            )));
        }

        tracing::debug!(pairs = report.pairs.len(), "decoded mapping report");
        Ok(report)
    }
}
