use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender ratio sentinels stored in `PersonalInfo::gender_ratio`.
pub const RATIO_MALE_ONLY: u8 = 0;
pub const RATIO_FEMALE_ONLY: u8 = 254;
pub const RATIO_GENDERLESS: u8 = 255;

/// Experience curve a species levels along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpGrowth {
    #[default]
    MediumFast,
    Erratic,
    Fluctuating,
    MediumSlow,
    Fast,
    Slow,
}

impl ExpGrowth {
    /// Total experience required to reach `level` (level 1 is always 0).
    pub fn experience_at(self, level: u8) -> u32 {
        if level <= 1 {
            return 0;
        }
        let n = i64::from(level.min(100));
        let cube = n * n * n;
        let exp = match self {
            ExpGrowth::MediumFast => cube,
            ExpGrowth::Fast => 4 * cube / 5,
            ExpGrowth::Slow => 5 * cube / 4,
            ExpGrowth::MediumSlow => 6 * cube / 5 - 15 * n * n + 100 * n - 140,
            ExpGrowth::Erratic => match n {
                0..=49 => cube * (100 - n) / 50,
                50..=67 => cube * (150 - n) / 100,
                68..=97 => cube * ((1911 - 10 * n) / 3) / 500,
                _ => cube * (160 - n) / 100,
            },
            ExpGrowth::Fluctuating => match n {
                0..=14 => cube * ((n + 1) / 3 + 24) / 50,
                15..=35 => cube * (n + 14) / 50,
                _ => cube * (n / 2 + 32) / 50,
            },
        };
        exp.max(0) as u32
    }
}

/// Per-species personal table entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Ability ids for slots 1, 2 and hidden.
    pub abilities: [u16; 3],
    pub gender_ratio: u8,
    #[serde(default)]
    pub form_count: u8,
    #[serde(default)]
    pub base_friendship: u8,
    #[serde(default)]
    pub exp_growth: ExpGrowth,
}

impl PersonalInfo {
    pub fn is_genderless(&self) -> bool {
        self.gender_ratio == RATIO_GENDERLESS
    }

    /// The only gender this species can have, if it is single-gendered.
    pub fn fixed_gender(&self) -> Option<u8> {
        match self.gender_ratio {
            RATIO_MALE_ONLY => Some(crate::GENDER_MALE),
            RATIO_FEMALE_ONLY => Some(crate::GENDER_FEMALE),
            RATIO_GENDERLESS => Some(crate::GENDER_GENDERLESS),
            _ => None,
        }
    }

    /// Ability slot index for an ability number (1, 2, 4).
    pub fn ability_for_number(&self, ability_number: u8) -> Option<u16> {
        match ability_number {
            1 => Some(self.abilities[0]),
            2 => Some(self.abilities[1]),
            4 => Some(self.abilities[2]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionMethod {
    Level(u8),
    Item(u16),
    Trade,
    TradeItem(u16),
    Friendship,
    /// Level up with a minimum Beauty contest stat.
    Beauty(u8),
    Other,
}

impl EvolutionMethod {
    pub fn requires_trade(self) -> bool {
        matches!(self, EvolutionMethod::Trade | EvolutionMethod::TradeItem(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionData {
    pub species: u16,
    pub evolves_from: u16,
    pub method: EvolutionMethod,
    /// Generation the evolution method became available.
    #[serde(default = "first_generation")]
    pub generation: u8,
}

fn first_generation() -> u8 {
    1
}

/// Errors raised while decoding packed learnset tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnsetError {
    /// The legacy table ended before every species entry was terminated
    Truncated { species: usize, offset: usize },
}

impl fmt::Display for LearnsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearnsetError::Truncated { species, offset } => write!(
                f,
                "learnset table truncated at offset {} while reading species {}",
                offset, species
            ),
        }
    }
}

impl std::error::Error for LearnsetError {}

/// Level-up moves of one species in one game group, sorted by level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Learnset {
    pub moves: Vec<u16>,
    pub levels: Vec<u16>,
}

impl Learnset {
    pub fn new(entries: &[(u16, u16)]) -> Self {
        let mut sorted = entries.to_vec();
        sorted.sort_by_key(|&(level, _)| level);
        Self {
            levels: sorted.iter().map(|&(level, _)| level).collect(),
            moves: sorted.iter().map(|&(_, move_id)| move_id).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves learnable at or below `level`.
    pub fn moves_up_to(&self, level: u8) -> &[u16] {
        let cutoff = self
            .levels
            .iter()
            .position(|&l| l > u16::from(level))
            .unwrap_or(self.moves.len());
        &self.moves[..cutoff]
    }

    /// Moves learned exactly at `level`.
    pub fn learns_at_level(&self, level: u8) -> Vec<u16> {
        self.levels
            .iter()
            .zip(&self.moves)
            .filter(|(&l, _)| l == u16::from(level))
            .map(|(_, &m)| m)
            .collect()
    }

    pub fn can_learn_move(&self, move_id: u16) -> bool {
        self.moves.contains(&move_id)
    }

    /// Decode one legacy entry: `(level, move)` byte pairs ended by a zero level.
    /// `offset` is advanced past the terminator.
    pub fn from_legacy_bytes(
        data: &[u8],
        offset: &mut usize,
        species: usize,
    ) -> Result<Self, LearnsetError> {
        let mut learnset = Learnset::default();
        loop {
            let level = *data.get(*offset).ok_or(LearnsetError::Truncated {
                species,
                offset: *offset,
            })?;
            if level == 0 {
                break;
            }
            let move_id = *data.get(*offset + 1).ok_or(LearnsetError::Truncated {
                species,
                offset: *offset + 1,
            })?;
            learnset.levels.push(u16::from(level));
            learnset.moves.push(u16::from(move_id));
            *offset += 2;
        }
        *offset += 1;
        Ok(learnset)
    }

    /// Decode a packed legacy table holding entries for species `0..=max_species`.
    pub fn parse_legacy_table(
        input: &[u8],
        max_species: usize,
    ) -> Result<Vec<Learnset>, LearnsetError> {
        let mut offset = 0;
        (0..=max_species)
            .map(|species| Learnset::from_legacy_bytes(input, &mut offset, species))
            .collect()
    }

    /// Decode a modern entry of `{move: u16, level: u16}` little-endian records.
    /// The final record is a sentinel; malformed lengths yield an empty learnset.
    pub fn from_modern_bytes(data: &[u8]) -> Self {
        if data.len() < 4 || data.len() % 4 != 0 {
            return Learnset::default();
        }
        let count = data.len() / 4 - 1;
        let mut learnset = Learnset::default();
        for record in data.chunks_exact(4).take(count) {
            learnset.moves.push(u16::from_le_bytes([record[0], record[1]]));
            learnset.levels.push(u16::from_le_bytes([record[2], record[3]]));
        }
        learnset
    }

    pub fn parse_modern_table(entries: &[Vec<u8>]) -> Vec<Learnset> {
        entries
            .iter()
            .map(|entry| Learnset::from_modern_bytes(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_legacy_table_reads_pairs_until_terminator() {
        // species 0: empty; species 1: Tackle@1, Growl@1, Leech Seed@7
        let data = [0, 1, 33, 1, 45, 7, 73, 0];
        let table = Learnset::parse_legacy_table(&data, 1).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table[0].is_empty());
        assert_eq!(table[1].moves, vec![33, 45, 73]);
        assert_eq!(table[1].levels, vec![1, 1, 7]);
    }

    #[test]
    fn test_legacy_table_reports_truncation() {
        let data = [5, 33];
        let result = Learnset::parse_legacy_table(&data, 0);
        assert_eq!(
            result,
            Err(LearnsetError::Truncated {
                species: 0,
                offset: 2
            })
        );
    }

    #[test]
    fn test_modern_entry_drops_sentinel_record() {
        let data = [
            33, 0, 1, 0, // Tackle @ 1
            0x58, 0x02, 20, 0, // move 600 @ 20
            0xFF, 0xFF, 0xFF, 0xFF, // sentinel
        ];
        let learnset = Learnset::from_modern_bytes(&data);

        assert_eq!(learnset.moves, vec![33, 600]);
        assert_eq!(learnset.levels, vec![1, 20]);
    }

    #[rstest]
    #[case::too_short(vec![1, 0, 1])]
    #[case::misaligned(vec![1, 0, 1, 0, 2, 0])]
    fn test_modern_entry_rejects_malformed_lengths(#[case] data: Vec<u8>) {
        assert!(Learnset::from_modern_bytes(&data).is_empty());
    }

    #[test]
    fn test_moves_up_to_level() {
        let learnset = Learnset::new(&[(1, 33), (1, 45), (7, 73), (13, 22)]);

        assert_eq!(learnset.moves_up_to(1), &[33, 45]);
        assert_eq!(learnset.moves_up_to(12), &[33, 45, 73]);
        assert_eq!(learnset.moves_up_to(100), &[33, 45, 73, 22]);
        assert_eq!(learnset.learns_at_level(7), vec![73]);
    }

    #[rstest]
    #[case(ExpGrowth::MediumFast, 100, 1_000_000)]
    #[case(ExpGrowth::Fast, 100, 800_000)]
    #[case(ExpGrowth::Slow, 100, 1_250_000)]
    #[case(ExpGrowth::MediumSlow, 100, 1_059_860)]
    #[case(ExpGrowth::Erratic, 100, 600_000)]
    #[case(ExpGrowth::Fluctuating, 100, 1_640_000)]
    #[case(ExpGrowth::MediumSlow, 2, 9)]
    #[case(ExpGrowth::Erratic, 1, 0)]
    fn test_experience_curves(#[case] growth: ExpGrowth, #[case] level: u8, #[case] exp: u32) {
        assert_eq!(growth.experience_at(level), exp);
    }
}
