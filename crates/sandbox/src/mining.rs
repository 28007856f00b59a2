//! Per-player tile damage bookkeeping.
//!
//! A small fixed pool of slots, each tracking one cell being mined. Damage
//! accumulates while the player keeps hitting a cell and the slot expires
//! once the cell has been left alone for a while. A broken tile leaves a
//! slot with no damage data behind for a few ticks.

use tile_display::config::MAX_DAMAGE;
use tile_display::{InteractionLookup, TileCoord};

/// Number of cells that can be mid-mining at once.
pub const HIT_SLOTS: usize = 20;
/// Ticks without a hit before a damage record is dropped.
pub const RECORD_LIFETIME_TICKS: u32 = 120;
/// Ticks a broken cell's empty slot lingers.
pub const BROKEN_LINGER_TICKS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HitSlot {
    cell: TileCoord,
    /// `None` once the tile has broken.
    damage: Option<f32>,
    idle_ticks: u32,
}

impl HitSlot {
    fn lifetime(&self) -> u32 {
        if self.damage.is_some() {
            RECORD_LIFETIME_TICKS
        } else {
            BROKEN_LINGER_TICKS
        }
    }
}

/// Outcome of a single hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrikeOutcome {
    /// Damage so far, below the break threshold.
    Damaged(f32),
    /// The hit pushed the tile past the threshold.
    Broken,
}

#[derive(Debug, Clone)]
pub struct HitTileIndex {
    slots: Vec<Option<HitSlot>>,
}

impl Default for HitTileIndex {
    fn default() -> Self {
        Self {
            slots: vec![None; HIT_SLOTS],
        }
    }
}

impl HitTileIndex {
    /// Look up the record for `cell`: an exact match wins, otherwise the
    /// closest record within `search_distance` (Chebyshev).
    pub fn find(&self, cell: TileCoord, search_distance: u32) -> InteractionLookup {
        let nearest = self
            .slots
            .iter()
            .flatten()
            .map(|slot| (slot.cell.chebyshev(cell), slot))
            .filter(|(distance, _)| *distance <= search_distance)
            .min_by_key(|(distance, _)| *distance);

        match nearest {
            None => InteractionLookup::Missing,
            Some((_, slot)) => match slot.damage {
                None => InteractionLookup::Empty,
                Some(damage) => InteractionLookup::Damage(damage),
            },
        }
    }

    /// Apply `amount` damage to `cell`, claiming a slot if needed.
    ///
    /// When every slot is busy the stalest one is recycled.
    pub fn strike(&mut self, cell: TileCoord, amount: f32) -> StrikeOutcome {
        let index = self.slot_for(cell);
        let slot = self.slots[index].get_or_insert(HitSlot {
            cell,
            damage: Some(0.0),
            idle_ticks: 0,
        });

        let damage = slot.damage.unwrap_or(0.0) + amount;
        slot.idle_ticks = 0;
        if damage >= MAX_DAMAGE {
            slot.damage = None;
            StrikeOutcome::Broken
        } else {
            slot.damage = Some(damage);
            StrikeOutcome::Damaged(damage)
        }
    }

    /// Age every record by one tick and drop the expired ones.
    pub fn tick(&mut self) {
        for entry in &mut self.slots {
            let expired = match entry {
                Some(slot) => {
                    slot.idle_ticks += 1;
                    slot.idle_ticks > slot.lifetime()
                }
                None => false,
            };
            if expired {
                *entry = None;
            }
        }
    }

    /// Number of occupied slots.
    pub fn active(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    fn slot_for(&mut self, cell: TileCoord) -> usize {
        if let Some(i) = self
            .slots
            .iter()
            .position(|s| s.is_some_and(|s| s.cell == cell))
        {
            return i;
        }
        if let Some(i) = self.slots.iter().position(Option::is_none) {
            return i;
        }
        let stalest = self
            .slots
            .iter()
            .enumerate()
            .max_by_key(|(_, s)| s.map_or(0, |s| s.idle_ticks))
            .map_or(0, |(i, _)| i);
        self.slots[stalest] = None;
        stalest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_when_nothing_hit() {
        let index = HitTileIndex::default();
        assert_eq!(index.find(TileCoord::new(0, 0), 1), InteractionLookup::Missing);
    }

    #[test]
    fn test_strikes_accumulate() {
        let mut index = HitTileIndex::default();
        let cell = TileCoord::new(5, 5);
        assert_eq!(index.strike(cell, 30.0), StrikeOutcome::Damaged(30.0));
        assert_eq!(index.strike(cell, 30.0), StrikeOutcome::Damaged(60.0));
        assert_eq!(index.find(cell, 1), InteractionLookup::Damage(60.0));
        assert_eq!(index.active(), 1);
    }

    #[test]
    fn test_break_leaves_empty_slot() {
        let mut index = HitTileIndex::default();
        let cell = TileCoord::new(1, 2);
        index.strike(cell, 60.0);
        assert_eq!(index.strike(cell, 60.0), StrikeOutcome::Broken);
        assert_eq!(index.find(cell, 1), InteractionLookup::Empty);

        for _ in 0..=BROKEN_LINGER_TICKS {
            index.tick();
        }
        assert_eq!(index.find(cell, 1), InteractionLookup::Missing);
    }

    #[test]
    fn test_find_prefers_exact_then_nearby() {
        let mut index = HitTileIndex::default();
        index.strike(TileCoord::new(10, 10), 20.0);
        index.strike(TileCoord::new(11, 10), 40.0);

        assert_eq!(index.find(TileCoord::new(11, 10), 1), InteractionLookup::Damage(40.0));
        assert_eq!(index.find(TileCoord::new(10, 10), 1), InteractionLookup::Damage(20.0));
        assert_eq!(index.find(TileCoord::new(12, 11), 1), InteractionLookup::Damage(40.0));
        assert_eq!(index.find(TileCoord::new(13, 10), 1), InteractionLookup::Missing);
        assert_eq!(index.find(TileCoord::new(12, 11), 0), InteractionLookup::Missing);
    }

    #[test]
    fn test_records_expire_when_idle() {
        let mut index = HitTileIndex::default();
        let cell = TileCoord::new(0, 0);
        index.strike(cell, 10.0);
        for _ in 0..RECORD_LIFETIME_TICKS {
            index.tick();
        }
        assert_eq!(index.find(cell, 0), InteractionLookup::Damage(10.0));
        index.tick();
        assert_eq!(index.find(cell, 0), InteractionLookup::Missing);
    }

    #[test]
    fn test_full_index_recycles_stalest_slot() {
        let mut index = HitTileIndex::default();
        for i in 0..HIT_SLOTS as i32 {
            index.strike(TileCoord::new(i * 10, 0), 5.0);
            index.tick();
        }
        assert_eq!(index.active(), HIT_SLOTS);

        index.strike(TileCoord::new(999, 0), 5.0);
        assert_eq!(index.active(), HIT_SLOTS);
        // The first cell struck had been idle longest.
        assert_eq!(index.find(TileCoord::new(0, 0), 0), InteractionLookup::Missing);
        assert_eq!(index.find(TileCoord::new(999, 0), 0), InteractionLookup::Damage(5.0));
    }
}
