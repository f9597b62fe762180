use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter};

/// Stored gender values.
pub const GENDER_MALE: u8 = 0;
pub const GENDER_FEMALE: u8 = 1;
pub const GENDER_GENDERLESS: u8 = 2;

/// Individual game a specimen can originate from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum GameVersion {
    Red,
    Green,
    Blue,
    Yellow,
    Gold,
    Silver,
    Crystal,
    Sapphire,
    Ruby,
    Emerald,
    FireRed,
    LeafGreen,
    ColosseumXd,
    Diamond,
    Pearl,
    Platinum,
    HeartGold,
    SoulSilver,
    White,
    Black,
    White2,
    Black2,
    X,
    Y,
    AlphaSapphire,
    OmegaRuby,
    Sun,
    Moon,
}

impl GameVersion {
    /// The release group this game shares its tables with.
    pub fn group(self) -> GameGroup {
        use GameVersion::*;

        match self {
            Red | Green | Blue | Yellow => GameGroup::Rby,
            Gold | Silver => GameGroup::Gs,
            Crystal => GameGroup::Crystal,
            Sapphire | Ruby | Emerald => GameGroup::Rse,
            FireRed | LeafGreen => GameGroup::Frlg,
            ColosseumXd => GameGroup::ColosseumXd,
            Diamond | Pearl => GameGroup::Dp,
            Platinum => GameGroup::Platinum,
            HeartGold | SoulSilver => GameGroup::Hgss,
            White | Black => GameGroup::Bw,
            White2 | Black2 => GameGroup::B2w2,
            X | Y => GameGroup::Xy,
            AlphaSapphire | OmegaRuby => GameGroup::Oras,
            Sun | Moon => GameGroup::Sm,
        }
    }

    pub fn generation(self) -> u8 {
        self.group().generation()
    }

    /// Generation 1 and 2 games re-released for the 3DS transfer service.
    pub fn is_virtual_console(self) -> bool {
        self.generation() <= 2
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Games that share encounter and learnset tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
)]
pub enum GameGroup {
    Rby,
    Gs,
    Crystal,
    Rse,
    Frlg,
    ColosseumXd,
    Dp,
    Platinum,
    Hgss,
    Bw,
    B2w2,
    Xy,
    Oras,
    Sm,
}

impl GameGroup {
    pub fn generation(self) -> u8 {
        use GameGroup::*;

        match self {
            Rby => 1,
            Gs | Crystal => 2,
            Rse | Frlg | ColosseumXd => 3,
            Dp | Platinum | Hgss => 4,
            Bw | B2w2 => 5,
            Xy | Oras => 6,
            Sm => 7,
        }
    }

    /// All groups that belong to a generation, in release order.
    pub fn for_generation(generation: u8) -> &'static [GameGroup] {
        use GameGroup::*;

        match generation {
            1 => &[Rby],
            2 => &[Gs, Crystal],
            3 => &[Rse, Frlg, ColosseumXd],
            4 => &[Dp, Platinum, Hgss],
            5 => &[Bw, B2w2],
            6 => &[Xy, Oras],
            7 => &[Sm],
            _ => &[],
        }
    }
}

impl fmt::Display for GameGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            GameGroup::Rby => "R/G/B/Y",
            GameGroup::Gs => "G/S",
            GameGroup::Crystal => "C",
            GameGroup::Rse => "R/S/E",
            GameGroup::Frlg => "FR/LG",
            GameGroup::ColosseumXd => "Colosseum/XD",
            GameGroup::Dp => "D/P",
            GameGroup::Platinum => "Pt",
            GameGroup::Hgss => "HG/SS",
            GameGroup::Bw => "B/W",
            GameGroup::B2w2 => "B2/W2",
            GameGroup::Xy => "X/Y",
            GameGroup::Oras => "OR/AS",
            GameGroup::Sm => "S/M",
        };
        write!(f, "{}", display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_version_belongs_to_its_generation_groups() {
        for version in GameVersion::iter() {
            let group = version.group();
            assert!(
                GameGroup::for_generation(version.generation()).contains(&group),
                "{} should be listed under generation {}",
                version,
                version.generation()
            );
        }
    }

    #[test]
    fn test_group_display_names() {
        assert_eq!(GameGroup::Xy.to_string(), "X/Y");
        assert_eq!(GameGroup::Oras.to_string(), "OR/AS");
        assert_eq!(GameGroup::Sm.to_string(), "S/M");
    }

    #[test]
    fn test_virtual_console_versions() {
        assert!(GameVersion::Yellow.is_virtual_console());
        assert!(GameVersion::Crystal.is_virtual_console());
        assert!(!GameVersion::Sapphire.is_virtual_console());
    }
}
