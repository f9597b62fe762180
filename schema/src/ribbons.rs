use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Every boolean ribbon a specimen can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter)]
pub enum RibbonKind {
    Country,
    National,
    Earth,
    World,
    Classic,
    Premier,
    Event,
    Birthday,
    Special,
    Souvenir,
    Wishing,
    ChampionBattle,
    ChampionRegional,
    ChampionNational,
    ChampionWorld,
    ChampionG3Hoenn,
    Artist,
    ChampionSinnoh,
    Legend,
    Record,
    ChampionKalos,
    ChampionAlola,
    BestFriends,
    Effort,
}

impl RibbonKind {
    /// Ribbons only distributed through events, in check order.
    pub const EVENT: [RibbonKind; 15] = [
        RibbonKind::Country,
        RibbonKind::National,
        RibbonKind::Earth,
        RibbonKind::World,
        RibbonKind::Classic,
        RibbonKind::Premier,
        RibbonKind::Event,
        RibbonKind::Birthday,
        RibbonKind::Special,
        RibbonKind::Souvenir,
        RibbonKind::Wishing,
        RibbonKind::ChampionBattle,
        RibbonKind::ChampionRegional,
        RibbonKind::ChampionNational,
        RibbonKind::ChampionWorld,
    ];
}

impl fmt::Display for RibbonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            RibbonKind::ChampionBattle => "Battle Champ",
            RibbonKind::ChampionRegional => "Regional Champ",
            RibbonKind::ChampionNational => "National Champ",
            RibbonKind::ChampionWorld => "World Champ",
            RibbonKind::ChampionG3Hoenn => "GBA Champion",
            RibbonKind::ChampionSinnoh => "Sinnoh Champ",
            RibbonKind::ChampionKalos => "Kalos Champ",
            RibbonKind::ChampionAlola => "Alola Champ",
            RibbonKind::BestFriends => "Best Friends",
            other => return write!(f, "{:?}", other),
        };
        write!(f, "{}", display_name)
    }
}

/// Ribbon block of a specimen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ribbons {
    pub country: bool,
    pub national: bool,
    pub earth: bool,
    pub world: bool,
    pub classic: bool,
    pub premier: bool,
    pub event: bool,
    pub birthday: bool,
    pub special: bool,
    pub souvenir: bool,
    pub wishing: bool,
    pub champion_battle: bool,
    pub champion_regional: bool,
    pub champion_national: bool,
    pub champion_world: bool,
    pub champion_g3_hoenn: bool,
    pub artist: bool,
    pub champion_sinnoh: bool,
    pub legend: bool,
    pub record: bool,
    pub champion_kalos: bool,
    pub champion_alola: bool,
    pub best_friends: bool,
    pub effort: bool,
    /// Gen 3/4 contest ribbons folded into a count on transfer.
    pub memory_contest: u8,
    /// Gen 3/4 battle ribbons folded into a count on transfer.
    pub memory_battle: u8,
}

impl Ribbons {
    pub fn has(&self, kind: RibbonKind) -> bool {
        match kind {
            RibbonKind::Country => self.country,
            RibbonKind::National => self.national,
            RibbonKind::Earth => self.earth,
            RibbonKind::World => self.world,
            RibbonKind::Classic => self.classic,
            RibbonKind::Premier => self.premier,
            RibbonKind::Event => self.event,
            RibbonKind::Birthday => self.birthday,
            RibbonKind::Special => self.special,
            RibbonKind::Souvenir => self.souvenir,
            RibbonKind::Wishing => self.wishing,
            RibbonKind::ChampionBattle => self.champion_battle,
            RibbonKind::ChampionRegional => self.champion_regional,
            RibbonKind::ChampionNational => self.champion_national,
            RibbonKind::ChampionWorld => self.champion_world,
            RibbonKind::ChampionG3Hoenn => self.champion_g3_hoenn,
            RibbonKind::Artist => self.artist,
            RibbonKind::ChampionSinnoh => self.champion_sinnoh,
            RibbonKind::Legend => self.legend,
            RibbonKind::Record => self.record,
            RibbonKind::ChampionKalos => self.champion_kalos,
            RibbonKind::ChampionAlola => self.champion_alola,
            RibbonKind::BestFriends => self.best_friends,
            RibbonKind::Effort => self.effort,
        }
    }

    pub fn set(&mut self, kind: RibbonKind, value: bool) {
        let field = match kind {
            RibbonKind::Country => &mut self.country,
            RibbonKind::National => &mut self.national,
            RibbonKind::Earth => &mut self.earth,
            RibbonKind::World => &mut self.world,
            RibbonKind::Classic => &mut self.classic,
            RibbonKind::Premier => &mut self.premier,
            RibbonKind::Event => &mut self.event,
            RibbonKind::Birthday => &mut self.birthday,
            RibbonKind::Special => &mut self.special,
            RibbonKind::Souvenir => &mut self.souvenir,
            RibbonKind::Wishing => &mut self.wishing,
            RibbonKind::ChampionBattle => &mut self.champion_battle,
            RibbonKind::ChampionRegional => &mut self.champion_regional,
            RibbonKind::ChampionNational => &mut self.champion_national,
            RibbonKind::ChampionWorld => &mut self.champion_world,
            RibbonKind::ChampionG3Hoenn => &mut self.champion_g3_hoenn,
            RibbonKind::Artist => &mut self.artist,
            RibbonKind::ChampionSinnoh => &mut self.champion_sinnoh,
            RibbonKind::Legend => &mut self.legend,
            RibbonKind::Record => &mut self.record,
            RibbonKind::ChampionKalos => &mut self.champion_kalos,
            RibbonKind::ChampionAlola => &mut self.champion_alola,
            RibbonKind::BestFriends => &mut self.best_friends,
            RibbonKind::Effort => &mut self.effort,
        };
        *field = value;
    }

    pub fn is_empty(&self) -> bool {
        use strum::IntoEnumIterator;

        RibbonKind::iter().all(|kind| !self.has(kind))
            && self.memory_contest == 0
            && self.memory_battle == 0
    }
}

/// Super Training progress block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperTraining {
    /// One bit per regular mission (30 missions).
    pub missions: u32,
    /// One bit per distribution mission.
    pub distribution: u8,
    pub secret_unlocked: bool,
    pub secret_complete: bool,
}

pub const REGULAR_MISSION_COUNT: u32 = 30;

/// Medal groups of the Super Training block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MedalCategory {
    Regular,
    Distribution,
}

impl MedalCategory {
    /// Number of completed missions of this category.
    pub fn completed(self, training: &SuperTraining) -> u32 {
        match self {
            MedalCategory::Regular => {
                (training.missions & ((1 << REGULAR_MISSION_COUNT) - 1)).count_ones()
            }
            MedalCategory::Distribution => training.distribution.count_ones(),
        }
    }
}

impl fmt::Display for MedalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MedalCategory::Regular => write!(f, "Super Training"),
            MedalCategory::Distribution => write!(f, "Distribution Super Training"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_set_and_has_cover_every_ribbon() {
        for kind in RibbonKind::iter() {
            let mut ribbons = Ribbons::default();
            assert!(!ribbons.has(kind));
            ribbons.set(kind, true);
            assert!(ribbons.has(kind), "{} should be readable after set", kind);
            assert!(!ribbons.is_empty());
        }
    }

    #[test]
    fn test_medal_counts() {
        let training = SuperTraining {
            missions: 0b1011 | (1 << 31),
            distribution: 0b11,
            ..Default::default()
        };
        assert_eq!(MedalCategory::Regular.completed(&training), 3);
        assert_eq!(MedalCategory::Distribution.completed(&training), 2);
    }

    #[test]
    fn test_event_ribbon_names() {
        assert_eq!(RibbonKind::EVENT[4].to_string(), "Classic");
        assert_eq!(RibbonKind::EVENT[11].to_string(), "Battle Champ");
    }
}
