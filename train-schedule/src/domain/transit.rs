//! Transit mode codes.

use serde::Deserialize;

/// Numeric transit mode code used by the timetable API.
///
/// Only [`TransitType::RAIL`] is meaningful to this crate; every other code
/// (buses, for instance) is carried through unchanged and filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TransitType(pub i64);

impl TransitType {
    /// GO Train.
    pub const RAIL: TransitType = TransitType(1);

    /// Whether this code denotes a rail trip.
    pub fn is_rail(self) -> bool {
        self == Self::RAIL
    }
}
