use crate::database::GameDatabase;
use crate::legality::LegalityAnalyzer;
use crate::specimen::Specimen;
use schema::constants::locations;
use schema::{
    EncounterArea, EncounterSlot, EncounterStatic, EvolutionData, EvolutionMethod, GameGroup,
    GameVersion, Learnset, Memory, MysteryGift, PersonalInfo, SlotType, RATIO_GENDERLESS,
};
use std::sync::Arc;

pub const PIKACHU: u16 = 25;
pub const PICHU: u16 = 172;
pub const MAGNEMITE: u16 = 81;
pub const RATTATA: u16 = 19;

pub const THUNDER_SHOCK: u16 = 84;
pub const GROWL: u16 = 45;
pub const THUNDER_WAVE: u16 = 86;
pub const CHARM: u16 = 204;
pub const WISH: u16 = 273;
pub const BIDE: u16 = 117;
pub const SURF: u16 = 57;
pub const TACKLE: u16 = 33;
pub const QUICK_ATTACK: u16 = 98;

/// Route with an ordinary Pikachu slot next to a stronger Rattata slot.
pub const ROUTE: u16 = 10;
/// Cave where every Pikachu slot tops out at the area maximum.
pub const CAVE: u16 = 30;
/// Nursery hatch location.
pub const NURSERY: u16 = 20;
pub const EVENT_LOCATION: u16 = 40001;

pub const TRAINER_ID: u16 = 12345;
pub const SECRET_ID: u16 = 54321;

fn slot(species: u16, level_min: u8, level_max: u8) -> EncounterSlot {
    EncounterSlot {
        species,
        form: 0,
        level_min,
        level_max,
        slot_type: SlotType::Grass,
        allow_dexnav: false,
    }
}

fn learnset(entries: &[(u16, u16)]) -> Learnset {
    Learnset::new(entries)
}

/// A distribution of an event Pikachu at the shared event location.
pub fn event_pikachu(card_id: u16, title: &str, moves: [u16; 4], relearn: [u16; 4]) -> MysteryGift {
    MysteryGift {
        card_id,
        title: title.to_string(),
        generation: 7,
        species: PIKACHU,
        form: 0,
        level: 10,
        met_level: None,
        location: EVENT_LOCATION,
        egg_location: 0,
        is_egg: false,
        ball: schema::constants::balls::CHERISH,
        moves,
        relearn,
        ivs: [u8::MAX; 6],
        ability_type: 4,
        shiny: None,
        tid: None,
        sid: None,
        ot_name: String::new(),
        ot_memory: Memory::default(),
        ribbons: Vec::new(),
    }
}

/// A small database holding the Pichu line, Magnemite and a handful of
/// encounters in Sun/Moon and Yellow.
pub fn fixture_database() -> GameDatabase {
    let mut db = GameDatabase::default();
    db.max_species = [(1, 151), (2, 251), (3, 386), (4, 493), (5, 649), (6, 721), (7, 807)]
        .into_iter()
        .collect();

    db.personal.insert(
        PIKACHU,
        PersonalInfo {
            abilities: [9, 9, 31],
            gender_ratio: 127,
            form_count: 1,
            base_friendship: 70,
            ..Default::default()
        },
    );
    db.personal.insert(
        PICHU,
        PersonalInfo {
            abilities: [9, 9, 31],
            gender_ratio: 127,
            form_count: 1,
            base_friendship: 70,
            ..Default::default()
        },
    );
    db.personal.insert(
        MAGNEMITE,
        PersonalInfo {
            abilities: [42, 5, 148],
            gender_ratio: RATIO_GENDERLESS,
            form_count: 1,
            base_friendship: 70,
            ..Default::default()
        },
    );

    db.evolutions = vec![EvolutionData {
        species: PIKACHU,
        evolves_from: PICHU,
        method: EvolutionMethod::Friendship,
        generation: 2,
    }];

    let sm = db.learnsets.entry(GameGroup::Sm).or_default();
    sm.insert(PIKACHU, learnset(&[(1, THUNDER_SHOCK), (1, GROWL), (5, THUNDER_WAVE), (10, QUICK_ATTACK)]));
    sm.insert(PICHU, learnset(&[(1, THUNDER_SHOCK), (1, CHARM)]));
    sm.insert(MAGNEMITE, learnset(&[(1, TACKLE)]));
    let rby = db.learnsets.entry(GameGroup::Rby).or_default();
    rby.insert(PIKACHU, learnset(&[(1, THUNDER_SHOCK), (1, GROWL), (9, THUNDER_WAVE)]));

    db.egg_moves
        .entry(GameGroup::Sm)
        .or_default()
        .insert(PICHU, vec![WISH, BIDE]);

    db.wild = vec![
        EncounterArea {
            location: ROUTE,
            versions: vec![GameVersion::Sun, GameVersion::Moon],
            slots: vec![slot(PIKACHU, 3, 5), slot(RATTATA, 6, 8), slot(MAGNEMITE, 3, 5)],
        },
        EncounterArea {
            location: CAVE,
            versions: vec![GameVersion::Sun, GameVersion::Moon],
            slots: vec![slot(PIKACHU, 2, 4), slot(PIKACHU, 5, 7)],
        },
        EncounterArea {
            location: 1,
            versions: vec![GameVersion::Red, GameVersion::Blue],
            slots: vec![slot(RATTATA, 2, 4)],
        },
    ];

    db.statics = vec![EncounterStatic {
        species: PIKACHU,
        form: 0,
        level: 5,
        location: 0,
        egg_location: 0,
        versions: vec![GameVersion::Yellow],
        special: false,
        ability: 0,
        shiny: None,
        gift: true,
        ball: schema::constants::balls::POKE,
        fateful: false,
        iv3: false,
        moves: [0; 4],
        relearn: [0; 4],
        ribbon_wishing: false,
    }];

    db.gifts = vec![
        event_pikachu(501, "Surfing Pikachu", [SURF, 0, 0, 0], [0; 4]),
        event_pikachu(502, "Plain Pikachu", [0; 4], [0; 4]),
        event_pikachu(503, "Quick Pikachu", [0; 4], [QUICK_ATTACK, 0, 0, 0]),
    ];

    db.hatch_locations.insert(GameGroup::Sm, vec![ROUTE, NURSERY]);
    db.rules.wild_balls.insert(7, vec![2, 3, 4]);

    let names_for = |labels: [&str; 4]| -> Vec<String> {
        let [egg, pikachu, pichu, magnemite] = labels;
        (0..=807u16)
            .map(|species| match species {
                0 => egg.to_string(),
                PIKACHU => pikachu.to_string(),
                PICHU => pichu.to_string(),
                MAGNEMITE => magnemite.to_string(),
                _ => format!("Species {}", species),
            })
            .collect()
    };
    db.species_names = vec![
        Vec::new(),
        names_for(["タマゴ", "ピカチュウ", "ピチュー", "コイル"]),
        names_for(["Egg", "Pikachu", "Pichu", "Magnemite"]),
    ];

    db.move_names = (0..=800u16).map(|id| format!("Move {}", id)).collect();
    db.move_names[usize::from(THUNDER_SHOCK)] = "Thunder Shock".to_string();
    db.move_names[usize::from(CHARM)] = "Charm".to_string();

    db
}

pub fn analyzer() -> LegalityAnalyzer {
    LegalityAnalyzer::new(Arc::new(fixture_database()))
}

/// A builder for specimens with sensible Sun/Moon defaults.
///
/// # Example
/// ```
/// let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
///     .with_met(ROUTE, 5)
///     .with_moves([THUNDER_SHOCK, GROWL, 0, 0])
///     .build();
/// ```
pub struct TestSpecimenBuilder {
    specimen: Specimen,
}

impl TestSpecimenBuilder {
    /// Creates a wild-caught specimen met at the route at its current level.
    pub fn new(species: u16, level: u8) -> Self {
        let nickname = match species {
            PIKACHU => "Pikachu",
            PICHU => "Pichu",
            MAGNEMITE => "Magnemite",
            _ => "Unknown",
        };
        Self {
            specimen: Specimen {
                species,
                level,
                format: 7,
                version: GameVersion::Sun,
                language: 2,
                nickname: nickname.to_string(),
                tid: TRAINER_ID,
                sid: SECRET_ID,
                ot_name: "Ash".to_string(),
                met_location: ROUTE,
                met_level: level,
                ivs: [31, 20, 10, 5, 25, 15],
                ability: 9,
                ability_number: 1,
                pid: 0x1234_5678,
                encryption_constant: 0x8765_4321,
                ot_friendship: 70,
                box_slot: Some(0),
                ..Default::default()
            },
        }
    }

    pub fn with_version(mut self, version: GameVersion) -> Self {
        self.specimen.version = version;
        self
    }

    pub fn with_met(mut self, location: u16, level: u8) -> Self {
        self.specimen.met_location = location;
        self.specimen.met_level = level;
        self
    }

    pub fn with_moves(mut self, moves: [u16; 4]) -> Self {
        self.specimen.moves = moves;
        self
    }

    pub fn with_relearn(mut self, relearn: [u16; 4]) -> Self {
        self.specimen.relearn_moves = relearn;
        self
    }

    pub fn with_gender(mut self, gender: u8) -> Self {
        self.specimen.gender = gender;
        self
    }

    pub fn with_evs(mut self, evs: [u8; 6]) -> Self {
        self.specimen.evs = evs;
        self
    }

    pub fn with_ability(mut self, ability: u16, ability_number: u8) -> Self {
        self.specimen.ability = ability;
        self.specimen.ability_number = ability_number;
        self
    }

    /// Marks the specimen as hatched from an egg laid at the nursery.
    pub fn hatched(mut self) -> Self {
        self.specimen.egg_location = 60002;
        self
    }

    /// Marks the specimen as received from an event.
    pub fn from_event(mut self) -> Self {
        self.specimen.fateful = true;
        self.specimen.met_location = EVENT_LOCATION;
        self.specimen.ball = schema::constants::balls::CHERISH;
        self
    }

    /// Moves the specimen into a modern container through the Virtual
    /// Console transfer service.
    pub fn transferred_from(mut self, version: GameVersion) -> Self {
        self.specimen.version = version;
        self.specimen.met_location = locations::TRANSFER_VIRTUAL_CONSOLE;
        self.specimen.sid = 0;
        self
    }

    pub fn with_specimen(mut self, edit: impl FnOnce(&mut Specimen)) -> Self {
        edit(&mut self.specimen);
        self
    }

    pub fn build(self) -> Specimen {
        self.specimen
    }
}
