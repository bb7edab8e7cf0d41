//! Print-safe design areas, one per garment part.

use crate::garment::GarmentPart;
use crate::geometry::Rect;

/// Default design areas for a 600×700 canvas, indexed by [`GarmentPart::index`].
pub const DEFAULT_ZONES: [Rect; 4] = [
    // Front: centre chest
    Rect {
        x: 200.0,
        y: 200.0,
        width: 200.0,
        height: 280.0,
    },
    // Back: centre back
    Rect {
        x: 200.0,
        y: 200.0,
        width: 200.0,
        height: 280.0,
    },
    // Left sleeve
    Rect {
        x: 300.0,
        y: 210.0,
        width: 50.0,
        height: 80.0,
    },
    // Right sleeve
    Rect {
        x: 260.0,
        y: 220.0,
        width: 50.0,
        height: 80.0,
    },
];

/// Static mapping from garment part to its zone rectangle.
///
/// The table is fixed for the lifetime of an editor; lookups are total because
/// [`GarmentPart`] is a closed enum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRegistry {
    zones: [Rect; 4],
}

impl ZoneRegistry {
    pub fn new(zones: [Rect; 4]) -> Self {
        Self { zones }
    }

    pub fn zone_for(&self, part: GarmentPart) -> Rect {
        self.zones[part.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (GarmentPart, Rect)> + '_ {
        GarmentPart::ALL.into_iter().map(|p| (p, self.zone_for(p)))
    }
}

impl Default for ZoneRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_ZONES)
    }
}
