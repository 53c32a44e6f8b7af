use std::fmt;

use crate::config::BattleConfig;

/// Unique identifier for a combatant within one battle session.
///
/// Identifiers are assigned once when the session is created (allies first,
/// then the opposing squad) and are never reused or reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which squad a combatant fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Ally,
    Enemy,
}

impl Side {
    /// The squad this side fights against.
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Ally => Side::Enemy,
            Side::Enemy => Side::Ally,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Side::Ally => "ally",
            Side::Enemy => "enemy",
        };
        write!(f, "{}", label)
    }
}

/// Fixed-point charge meter in `[0, GAUGE_FULL]`.
///
/// Stored in milli-percent (`BattleConfig::GAUGE_SCALE` points per percent)
/// so per-tick increments stay integral and replays stay exact. The public
/// reading is the familiar 0..=100 range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gauge(pub u32);

impl Gauge {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(BattleConfig::GAUGE_FULL);

    /// Current fill as a whole percentage (0..=100).
    #[inline]
    pub const fn percent(self) -> u32 {
        self.0 / BattleConfig::GAUGE_SCALE
    }

    #[inline]
    pub const fn is_full(self) -> bool {
        self.0 >= BattleConfig::GAUGE_FULL
    }

    /// Adds `points`, saturating at full. Returns the new value.
    #[inline]
    pub fn charge(&mut self, points: u32) -> Gauge {
        self.0 = self.0.saturating_add(points).min(BattleConfig::GAUGE_FULL);
        *self
    }

    #[inline]
    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Integer resource meter (part durability) tracked per part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    pub fn at_max(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.current == 0
    }

    /// Missing amount relative to the maximum.
    #[inline]
    pub const fn deficit(self) -> u32 {
        self.maximum - self.current
    }
}
