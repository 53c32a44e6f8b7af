use thiserror::Error;

use super::Side;
use crate::config::BattleConfig;

/// Errors constructing a battle session from roster snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InitializationError {
    #[error("{side} squad is empty")]
    EmptySquad { side: Side },

    #[error(
        "{side} squad has {len} combatants, maximum is {max}",
        max = BattleConfig::MAX_SQUAD
    )]
    SquadTooLarge { side: Side, len: usize },

    #[error("{side} squad has no conscious combatants")]
    SquadAlreadyDown { side: Side },
}
