//! Effect kind tag.

use super::Effect;

/// Field-less tag naming an [`Effect`] variant.
///
/// Effects carry no identity of their own; persistence and diagnostics refer
/// to them by this tag.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectKind {
    Damage,
    Healing,
    Destruction,
    Modification,
    Spawn,
    Movement,
    Projectile,
    Group,
    AreaTarget,
}

impl EffectKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Combinators bind new names or recurse instead of mutating directly.
    pub fn is_combinator(self) -> bool {
        matches!(self, Self::Group | Self::AreaTarget)
    }
}

impl From<&Effect> for EffectKind {
    fn from(effect: &Effect) -> Self {
        match effect {
            Effect::Damage(_) => Self::Damage,
            Effect::Healing(_) => Self::Healing,
            Effect::Destruction(_) => Self::Destruction,
            Effect::Modification(_) => Self::Modification,
            Effect::Spawn(_) => Self::Spawn,
            Effect::Movement(_) => Self::Movement,
            Effect::Projectile(_) => Self::Projectile,
            Effect::Group(_) => Self::Group,
            Effect::AreaTarget(_) => Self::AreaTarget,
        }
    }
}
