use crate::errors::SpecimenError;
use schema::constants::locations;
use schema::{GameGroup, GameVersion, Memory, Ribbons, SuperTraining};
use serde::{Deserialize, Serialize};

/// Largest supported container generation.
pub const MAX_FORMAT: u8 = 7;

/// One country/region pair of the geolocation history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geolocation {
    pub country: u8,
    pub region: u8,
}

/// The creature record under analysis. Never mutated by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Specimen {
    // Identity
    pub species: u16,
    pub form: u8,
    /// Generation of the container the record is stored in.
    pub format: u8,
    pub version: GameVersion,
    pub language: u8,
    pub nickname: String,
    pub is_nicknamed: bool,
    pub gender: u8,
    pub is_egg: bool,
    pub level: u8,
    pub experience: u32,
    pub held_item: u16,

    // Ownership
    pub tid: u16,
    pub sid: u16,
    pub ot_name: String,
    pub ht_name: String,
    pub ht_gender: u8,
    /// 0 when the original trainer holds it, 1 for the handling trainer.
    pub current_handler: u8,
    pub geolocations: [Geolocation; 5],
    pub country: u8,
    pub console_region: u8,
    pub ot_friendship: u8,
    pub ht_friendship: u8,
    pub ot_affection: u8,
    pub ht_affection: u8,
    pub ot_memory: Memory,
    pub ht_memory: Memory,

    // Acquisition
    pub met_location: u16,
    pub met_level: u8,
    pub egg_location: u16,
    pub ball: u8,
    pub fateful: bool,
    pub pid: u32,
    pub encryption_constant: u32,

    // Genetics
    pub ivs: [u8; 6],
    pub evs: [u8; 6],
    pub ability: u16,
    /// 1, 2 or 4 (hidden).
    pub ability_number: u8,
    pub hyper_trained: [bool; 6],
    pub contest_stats: [u8; 6],

    // Moves
    pub moves: [u16; 4],
    pub pp_ups: [u8; 4],
    pub relearn_moves: [u16; 4],

    // Auxiliary
    pub ribbons: Ribbons,
    pub super_training: SuperTraining,
    /// Box slot when stored in the PC, `None` while in the party.
    pub box_slot: Option<u16>,
    pub pelago_event_status: u8,
}

impl Default for Specimen {
    fn default() -> Self {
        Self {
            species: 0,
            form: 0,
            format: MAX_FORMAT,
            version: GameVersion::Sun,
            language: 2,
            nickname: String::new(),
            is_nicknamed: false,
            gender: 0,
            is_egg: false,
            level: 1,
            experience: 0,
            held_item: 0,
            tid: 0,
            sid: 0,
            ot_name: String::new(),
            ht_name: String::new(),
            ht_gender: 0,
            current_handler: 0,
            geolocations: [Geolocation::default(); 5],
            country: 0,
            console_region: 0,
            ot_friendship: 0,
            ht_friendship: 0,
            ot_affection: 0,
            ht_affection: 0,
            ot_memory: Memory::default(),
            ht_memory: Memory::default(),
            met_location: 0,
            met_level: 0,
            egg_location: 0,
            ball: schema::constants::balls::POKE,
            fateful: false,
            pid: 0,
            encryption_constant: 0,
            ivs: [0; 6],
            evs: [0; 6],
            ability: 0,
            ability_number: 1,
            hyper_trained: [false; 6],
            contest_stats: [0; 6],
            moves: [0; 4],
            pp_ups: [0; 4],
            relearn_moves: [0; 4],
            ribbons: Ribbons::default(),
            super_training: SuperTraining::default(),
            box_slot: None,
            pelago_event_status: 0,
        }
    }
}

impl Specimen {
    pub fn from_ron_str(input: &str) -> Result<Self, SpecimenError> {
        ron::from_str(input).map_err(|e| SpecimenError::Malformed(e.to_string()))
    }

    pub fn from_json_str(input: &str) -> Result<Self, SpecimenError> {
        serde_json::from_str(input).map_err(|e| SpecimenError::Malformed(e.to_string()))
    }

    /// Rejects records the analyzer cannot minimally interpret.
    /// `max_species` is the highest species id known to the record's format.
    pub fn validate(&self, max_species: u16) -> Result<(), SpecimenError> {
        if self.format == 0 || self.format > MAX_FORMAT {
            return Err(SpecimenError::FormatOutOfRange(self.format));
        }
        if self.species == 0 || self.species > max_species {
            return Err(SpecimenError::SpeciesOutOfRange {
                species: self.species,
                max: max_species,
                format: self.format,
            });
        }
        if self.level == 0 || self.level > 100 {
            return Err(SpecimenError::LevelOutOfRange(self.level));
        }
        if self.origin_generation() > self.format {
            return Err(SpecimenError::OriginNewerThanFormat {
                origin: self.origin_generation(),
                format: self.format,
            });
        }
        Ok(())
    }

    pub fn origin_generation(&self) -> u8 {
        self.version.generation()
    }

    pub fn origin_group(&self) -> GameGroup {
        self.version.group()
    }

    /// Transferred forward from a generation 1 game via Virtual Console.
    pub fn vc1(&self) -> bool {
        self.format >= MAX_FORMAT && self.origin_generation() == 1
    }

    /// Transferred forward from a generation 2 game via Virtual Console.
    pub fn vc2(&self) -> bool {
        self.format >= MAX_FORMAT && self.origin_generation() == 2
    }

    pub fn vc(&self) -> bool {
        self.vc1() || self.vc2()
    }

    /// Records shaped by the generation 1/2 rules, stored or transferred.
    pub fn is_legacy(&self) -> bool {
        self.vc() || self.format < 3
    }

    /// Whether the acquisition data shows the record hatched from an egg.
    pub fn was_egg(&self) -> bool {
        if self.is_egg {
            return true;
        }
        match self.origin_generation() {
            0..=2 => false,
            3 => self.format == 3 && self.met_level == 0,
            _ => self.egg_location != 0,
        }
    }

    pub fn was_event(&self) -> bool {
        self.fateful || locations::EVENT_RANGE.contains(&self.met_location)
    }

    pub fn was_event_egg(&self) -> bool {
        let event_location = locations::EVENT_RANGE.contains(&self.egg_location)
            || (self.fateful && self.egg_location == locations::LINK_TRADE);
        self.origin_generation() >= 4 && event_location && self.met_level == 1
    }

    pub fn was_link(&self) -> bool {
        self.format >= 6 && self.met_location == locations::LINK_GIFT
    }

    pub fn was_traded_egg(&self) -> bool {
        self.egg_location == locations::LINK_TRADE
    }

    /// Trainer shiny value.
    pub fn tsv(&self) -> u16 {
        (self.tid ^ self.sid) >> 4
    }

    /// PID shiny value.
    pub fn psv(&self) -> u16 {
        (((self.pid >> 16) ^ (self.pid & 0xFFFF)) >> 4) as u16
    }

    pub fn is_shiny(&self) -> bool {
        if self.format < 3 {
            // Legacy shininess is carried by the DVs.
            let [atk, def, spe, spc] = [self.ivs[1], self.ivs[2], self.ivs[5], self.ivs[3]];
            return def == 10 && spe == 10 && spc == 10 && matches!(atk, 2 | 3 | 6 | 7 | 10 | 11 | 14 | 15);
        }
        let xor = u32::from(self.tid ^ self.sid) ^ (self.pid & 0xFFFF) ^ (self.pid >> 16);
        let threshold = if self.format >= 6 { 16 } else { 8 };
        xor < threshold
    }

    pub fn is_untraded(&self) -> bool {
        self.ht_name.is_empty() && !self.was_link()
    }

    pub fn iv_total(&self) -> u32 {
        self.ivs.iter().map(|&iv| u32::from(iv)).sum()
    }

    pub fn ev_total(&self) -> u32 {
        self.evs.iter().map(|&ev| u32::from(ev)).sum()
    }

    pub fn knows_move(&self, move_id: u16) -> bool {
        move_id != 0 && self.moves.contains(&move_id)
    }
}
