//! Derived combat statistics.
//!
//! Nothing here is stored: effective speed and evasion are pure functions of
//! the surviving part loadout, recomputed whenever a consumer needs them.
//! Destroyed parts contribute nothing, so losing legs genuinely slows a
//! combatant down.

use crate::state::Part;

/// Read-only view of a combatant's derived stats at one instant.
///
/// Consumers (scheduler ordering, hit checks, AI scoring) take a snapshot
/// rather than poking at the part array, so every calculation within one
/// resolution sees the same numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    /// Raw speed sum over non-destroyed parts. May be zero or negative.
    pub speed: i32,
    /// Evasion derived from the same modifiers.
    pub evasion: i32,
}

impl StatsSnapshot {
    /// Compute a snapshot from a part loadout.
    ///
    /// Formulas:
    /// - speed = Σ part.speed over non-destroyed parts
    /// - evasion = speed × 0.6
    pub fn compute<'a>(parts: impl Iterator<Item = &'a Part>) -> Self {
        let speed: i32 = parts
            .filter(|part| !part.is_destroyed())
            .map(|part| part.speed)
            .sum();

        Self {
            speed,
            evasion: (speed * 6) / 10,
        }
    }

    /// Speed as the scheduler consumes it, floored at 1 so a stripped
    /// combatant still charges and never divides the gauge math by zero.
    #[inline]
    pub fn effective_speed(&self) -> i32 {
        self.speed.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PartKind, PartSlot, ResourceMeter};

    fn part(slot: PartSlot, speed: i32, destroyed: bool) -> Part {
        Part {
            slot,
            kind: PartKind::Inert,
            name: "test".into(),
            power: 0,
            accuracy: 0,
            speed,
            durability: if destroyed {
                ResourceMeter::new(0, 10)
            } else {
                ResourceMeter::at_max(10)
            },
            uses: None,
            vital: false,
        }
    }

    #[test]
    fn destroyed_parts_do_not_contribute() {
        let parts = [
            part(PartSlot::Head, 4, false),
            part(PartSlot::Legs, 10, true),
        ];
        let snapshot = StatsSnapshot::compute(parts.iter());
        assert_eq!(snapshot.speed, 4);
        assert_eq!(snapshot.evasion, 2);
    }

    #[test]
    fn effective_speed_floors_at_one() {
        let parts: [Part; 0] = [];
        let snapshot = StatsSnapshot::compute(parts.iter());
        assert_eq!(snapshot.speed, 0);
        assert_eq!(snapshot.effective_speed(), 1);
    }
}
