//! Read-only reference tables consulted during analysis.
//!
//! A `GameDatabase` is built once (from RON or a postcard snapshot) before any
//! specimen is analyzed and is never mutated afterwards, so one instance can be
//! shared across threads.

use crate::errors::{DatabaseError, DatabaseResult};
use schema::{
    EncounterArea, EncounterLink, EncounterStatic, EncounterTrade, EvolutionData, GameGroup,
    Learnset, MysteryGift, PersonalInfo,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Per-group move tables keyed by species.
pub type MoveTable = BTreeMap<GameGroup, BTreeMap<u16, Vec<u16>>>;

/// A Pokémon Center location and the game group it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokeCenter {
    pub location: u16,
    pub group: GameGroup,
}

/// Species lists and constants consulted by individual rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTables {
    /// Species that never hatch from an egg.
    pub no_hatch: Vec<u16>,
    /// Species whose baby stage requires an incense to breed.
    pub split_breed: Vec<u16>,
    /// Species that can inherit Volt Tackle through a Light Ball.
    pub light_ball: Vec<u16>,
    pub invalid_sketch: Vec<u16>,
    /// Transferred species that keep their first ability instead of the hidden one.
    pub transfer_default_ability: Vec<u16>,
    pub breed_male_only: Vec<u16>,
    pub inherit_safari: Vec<u16>,
    pub inherit_safari_male: Vec<u16>,
    pub inherit_apricorn_6: Vec<u16>,
    pub inherit_apricorn_7: Vec<u16>,
    pub inherit_sport: Vec<u16>,
    pub inherit_dream: Vec<u16>,
    pub inherit_dream_male: Vec<u16>,
    pub ban_dream_hidden: Vec<u16>,
    pub ban_gen3_ball: Vec<u16>,
    pub ban_gen3_ball_7: Vec<u16>,
    pub ban_gen4_ball_6: Vec<u16>,
    pub ban_gen4_ball_7: Vec<u16>,
    pub ban_no_hidden_7: Vec<u16>,
    pub past_gen_alolan_natives: Vec<u16>,
    pub past_gen_alolan_scans: Vec<u16>,
    /// Species whose alternate forms only exist in battle (including megas and primals).
    pub battle_forms: Vec<u16>,
    /// Species whose non-default form is an Alolan regional form.
    pub alolan_origin_forms: Vec<u16>,
    /// Balls a wild encounter can be caught with, by generation.
    pub wild_balls: BTreeMap<u8, Vec<u8>>,
    /// Highest released held item id, by format.
    pub max_item_id: BTreeMap<u8, u16>,
    pub pokecenter_locations: Vec<PokeCenter>,
    /// Memory ids that name a move, paired with that move.
    pub move_memories: Vec<(u8, u16)>,
    pub memory_not_xy: Vec<u8>,
    pub memory_not_ao: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameDatabase {
    /// Highest species id per generation.
    pub max_species: BTreeMap<u8, u16>,
    pub personal: BTreeMap<u16, PersonalInfo>,
    pub evolutions: Vec<EvolutionData>,
    pub learnsets: BTreeMap<GameGroup, BTreeMap<u16, Learnset>>,
    pub machine_moves: MoveTable,
    pub tutor_moves: MoveTable,
    pub egg_moves: MoveTable,
    pub statics: Vec<EncounterStatic>,
    pub wild: Vec<EncounterArea>,
    /// Species available in the X/Y Friend Safari.
    pub friend_safari: Vec<u16>,
    pub trades: Vec<EncounterTrade>,
    pub links: Vec<EncounterLink>,
    pub gifts: Vec<MysteryGift>,
    /// Valid met locations for hatched eggs, by group.
    pub hatch_locations: BTreeMap<GameGroup, Vec<u16>>,
    /// Species names by language id; index 0 of each list is the word for "Egg".
    pub species_names: Vec<Vec<String>>,
    pub move_names: Vec<String>,
    pub rules: RuleTables,
}

impl GameDatabase {
    pub fn from_ron_str(input: &str) -> DatabaseResult<Self> {
        let db: GameDatabase = ron::from_str(input)?;
        debug!(
            statics = db.statics.len(),
            areas = db.wild.len(),
            gifts = db.gifts.len(),
            "loaded RON game database"
        );
        Ok(db)
    }

    pub fn from_postcard(bytes: &[u8]) -> DatabaseResult<Self> {
        Ok(postcard::from_bytes(bytes)?)
    }

    pub fn to_postcard(&self) -> DatabaseResult<Vec<u8>> {
        Ok(postcard::to_allocvec(self)?)
    }

    /// Loads a `.ron` file as text and anything else as a postcard snapshot.
    pub fn load(path: &Path) -> DatabaseResult<Self> {
        let io_error = |source| DatabaseError::Io {
            path: path.to_path_buf(),
            source,
        };
        if path.extension().is_some_and(|ext| ext == "ron") {
            let content = fs::read_to_string(path).map_err(io_error)?;
            Self::from_ron_str(&content)
        } else {
            let bytes = fs::read(path).map_err(io_error)?;
            Self::from_postcard(&bytes)
        }
    }

    /// Installs level-up tables decoded from packed legacy bytes.
    pub fn insert_legacy_learnsets(
        &mut self,
        group: GameGroup,
        bytes: &[u8],
        max_species: usize,
    ) -> DatabaseResult<()> {
        let table = Learnset::parse_legacy_table(bytes, max_species)?;
        self.insert_learnset_table(group, table);
        Ok(())
    }

    /// Installs level-up tables decoded from per-species modern entries.
    pub fn insert_modern_learnsets(&mut self, group: GameGroup, entries: &[Vec<u8>]) {
        self.insert_learnset_table(group, Learnset::parse_modern_table(entries));
    }

    fn insert_learnset_table(&mut self, group: GameGroup, table: Vec<Learnset>) {
        let by_species = self.learnsets.entry(group).or_default();
        for (species, learnset) in table.into_iter().enumerate() {
            if learnset.is_empty() {
                continue;
            }
            if let Ok(species) = u16::try_from(species) {
                by_species.insert(species, learnset);
            }
        }
    }

    pub fn max_species_id(&self, generation: u8) -> Option<u16> {
        self.max_species.get(&generation).copied()
    }

    /// Whether a species exists in a generation's games.
    pub fn species_in_generation(&self, species: u16, generation: u8) -> bool {
        self.max_species_id(generation)
            .is_some_and(|max| species >= 1 && species <= max)
    }

    pub fn personal_info(&self, species: u16) -> Option<&PersonalInfo> {
        self.personal.get(&species)
    }

    pub fn learnset(&self, group: GameGroup, species: u16) -> Option<&Learnset> {
        self.learnsets.get(&group)?.get(&species)
    }

    pub fn machine_moves(&self, group: GameGroup, species: u16) -> &[u16] {
        lookup(&self.machine_moves, group, species)
    }

    pub fn tutor_moves(&self, group: GameGroup, species: u16) -> &[u16] {
        lookup(&self.tutor_moves, group, species)
    }

    pub fn egg_moves(&self, group: GameGroup, species: u16) -> &[u16] {
        lookup(&self.egg_moves, group, species)
    }

    /// The evolution that produces `species`, if one is known by `generation`.
    pub fn evolution_into(&self, species: u16, generation: u8) -> Option<&EvolutionData> {
        self.evolutions
            .iter()
            .find(|evo| evo.species == species && evo.generation <= generation)
    }

    pub fn hatch_locations(&self, group: GameGroup) -> &[u16] {
        self.hatch_locations
            .get(&group)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn species_names(&self, language: u8) -> Option<&[String]> {
        self.species_names
            .get(usize::from(language))
            .map(Vec::as_slice)
    }

    pub fn move_name(&self, move_id: u16) -> &str {
        self.move_names
            .get(usize::from(move_id))
            .map(String::as_str)
            .unwrap_or("ERROR")
    }

    pub fn wild_balls(&self, generation: u8) -> &[u8] {
        self.rules
            .wild_balls
            .get(&generation)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn lookup(table: &MoveTable, group: GameGroup, species: u16) -> &[u16] {
    table
        .get(&group)
        .and_then(|by_species| by_species.get(&species))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"(
        max_species: {1: 151, 7: 807},
        personal: {
            25: (abilities: (9, 9, 31), gender_ratio: 127),
        },
        egg_moves: {Sm: {172: [344, 204]}},
        move_names: ["(None)", "Pound"],
        rules: (light_ball: [25, 26, 172]),
    )"#;

    #[test]
    fn test_ron_database_loads_tables() {
        let db = GameDatabase::from_ron_str(SAMPLE).expect("sample should parse");

        assert_eq!(db.max_species_id(7), Some(807));
        assert!(db.species_in_generation(151, 1));
        assert!(!db.species_in_generation(152, 1));
        assert_eq!(db.egg_moves(GameGroup::Sm, 172), &[344, 204]);
        assert_eq!(db.egg_moves(GameGroup::Xy, 172), &[] as &[u16]);
        assert_eq!(db.move_name(1), "Pound");
        assert_eq!(db.move_name(900), "ERROR");
        assert_eq!(db.rules.light_ball, vec![25, 26, 172]);
    }

    #[test]
    fn test_postcard_snapshot_preserves_database() {
        let db = GameDatabase::from_ron_str(SAMPLE).expect("sample should parse");
        let bytes = db.to_postcard().expect("snapshot should encode");
        let restored = GameDatabase::from_postcard(&bytes).expect("snapshot should decode");
        assert_eq!(restored, db);
    }

    #[test]
    fn test_malformed_ron_is_an_error() {
        assert!(matches!(
            GameDatabase::from_ron_str("(max_species: [1, 2])"),
            Err(DatabaseError::Ron(_))
        ));
    }

    #[test]
    fn test_learnset_tables_install_by_species() {
        let mut db = GameDatabase::default();
        db.insert_legacy_learnsets(GameGroup::Rby, &[0, 1, 33, 7, 73, 0], 1)
            .expect("table should decode");
        db.insert_modern_learnsets(GameGroup::Sm, &[vec![], vec![33, 0, 1, 0, 0xFF, 0xFF, 0xFF, 0xFF]]);

        assert!(db.learnset(GameGroup::Rby, 0).is_none());
        assert_eq!(db.learnset(GameGroup::Rby, 1).map(|l| l.moves.clone()), Some(vec![33, 73]));
        assert_eq!(db.learnset(GameGroup::Sm, 1).map(|l| l.levels.clone()), Some(vec![1]));

        assert!(matches!(
            db.insert_legacy_learnsets(GameGroup::Gs, &[5], 0),
            Err(DatabaseError::Learnset(_))
        ));
    }
}
