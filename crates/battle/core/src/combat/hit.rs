//! Hit chance and the hit/crit draws.

use crate::env::HitParams;

/// Hit chance from the acting part's accuracy against the target's evasion.
///
/// ```text
/// hit_chance = base + (accuracy - evasion)
/// clamped to [min, max]
/// ```
///
/// Medaforce attacks are additionally floored at `force_floor`: a charged
/// technique should rarely whiff, whatever the matchup.
pub fn hit_chance(accuracy: i32, evasion: i32, is_force: bool, params: &HitParams) -> u32 {
    let chance = params.base + accuracy - evasion;
    let chance = chance.clamp(params.min as i32, params.max as i32) as u32;

    if is_force { chance.max(params.force_floor) } else { chance }
}

/// Single hit draw: `roll` is a 1-100 percentage roll.
pub fn check_hit(accuracy: i32, evasion: i32, is_force: bool, roll: u32, params: &HitParams) -> bool {
    roll <= hit_chance(accuracy, evasion, is_force, params)
}

/// Independent critical draw, evaluated only after a hit lands.
pub fn check_crit(roll: u32, params: &HitParams) -> bool {
    roll <= params.crit_chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chance_is_clamped() {
        let params = HitParams::default();
        assert_eq!(hit_chance(100, 0, false, &params), params.max);
        assert_eq!(hit_chance(-100, 100, false, &params), params.min);
    }

    #[test]
    fn force_floor_overrides_a_bad_matchup() {
        let params = HitParams::default();
        assert_eq!(hit_chance(-100, 100, true, &params), params.force_floor);
        // A floor never lowers a good chance.
        assert_eq!(hit_chance(100, 0, true, &params), params.max);
    }
}
