//! Damage and heal computation.

use crate::env::DamageParams;

use super::advantage::{self, Advantage};

/// Computes final damage from base power.
///
/// ```text
/// damage = power × advantage × (crit ? crit_multiplier : 1)
/// if defending: damage /= defend_divisor
/// ```
///
/// The advantage fraction and the critical multiplier are independent; the
/// defend halving applies last, to the final amount.
pub fn calculate_damage(
    power: u32,
    matchup: Advantage,
    is_critical: bool,
    target_defending: bool,
    params: &DamageParams,
) -> u32 {
    let mut damage = advantage::scale(power, matchup, params);

    if is_critical {
        damage *= params.crit_multiplier;
    }

    if target_defending {
        damage /= params.defend_divisor;
    }

    damage
}

/// Heal amount for a support action. Kept as its own function so support
/// scaling can diverge from damage scaling without touching the resolver.
pub fn calculate_heal(power: u32) -> u32 {
    power
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defend_halves_after_crit_and_advantage() {
        let params = DamageParams::default();
        // 40 × 3/2 = 60, crit ×2 = 120, defend /2 = 60
        assert_eq!(
            calculate_damage(40, Advantage::Favorable, true, true, &params),
            60
        );
    }

    #[test]
    fn neutral_uncrit_is_raw_power() {
        let params = DamageParams::default();
        assert_eq!(
            calculate_damage(33, Advantage::Neutral, false, false, &params),
            33
        );
    }
}
