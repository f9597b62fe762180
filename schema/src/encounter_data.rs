use crate::constants::balls;
use crate::{GameGroup, GameVersion, RibbonKind};
use serde::{Deserialize, Serialize};

fn poke_ball() -> u8 {
    balls::POKE
}

fn cherish_ball() -> u8 {
    balls::CHERISH
}

/// IV values above 31 mark a stat the gift leaves random.
fn random_ivs() -> [u8; 6] {
    [u8::MAX; 6]
}

/// Trainer memory block (OT or handling trainer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub memory: u8,
    pub intensity: u8,
    pub text_var: u16,
    pub feeling: u8,
}

impl Memory {
    pub fn is_empty(&self) -> bool {
        self.memory == 0 && self.intensity == 0 && self.text_var == 0 && self.feeling == 0
    }
}

/// A fixed in-game encounter (legendaries, starters, gifts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterStatic {
    pub species: u16,
    #[serde(default)]
    pub form: u8,
    pub level: u8,
    #[serde(default)]
    pub location: u16,
    #[serde(default)]
    pub egg_location: u16,
    pub versions: Vec<GameVersion>,
    /// Only obtainable through an event, never on Virtual Console.
    #[serde(default)]
    pub special: bool,
    /// Forced ability number (1, 2, 4); 0 allows any.
    #[serde(default)]
    pub ability: u8,
    #[serde(default)]
    pub shiny: Option<bool>,
    #[serde(default)]
    pub gift: bool,
    #[serde(default = "poke_ball")]
    pub ball: u8,
    #[serde(default)]
    pub fateful: bool,
    #[serde(default)]
    pub iv3: bool,
    #[serde(default)]
    pub moves: [u16; 4],
    #[serde(default)]
    pub relearn: [u16; 4],
    #[serde(default)]
    pub ribbon_wishing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotType {
    Grass,
    Surf,
    OldRod,
    GoodRod,
    SuperRod,
    RockSmash,
    Horde,
    FriendSafari,
    /// Ally called in during an S/M battle.
    Sos,
    Special,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterSlot {
    pub species: u16,
    #[serde(default)]
    pub form: u8,
    pub level_min: u8,
    pub level_max: u8,
    pub slot_type: SlotType,
    #[serde(default)]
    pub allow_dexnav: bool,
}

/// All wild slots of one location in a set of games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterArea {
    pub location: u16,
    pub versions: Vec<GameVersion>,
    pub slots: Vec<EncounterSlot>,
}

impl EncounterArea {
    /// Highest level any slot of the area can produce; Pressure leads force it.
    pub fn pressure_level(&self) -> u8 {
        self.slots.iter().map(|s| s.level_max).max().unwrap_or(0)
    }
}

/// An NPC trade with a fixed nickname/OT per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterTrade {
    pub species: u16,
    #[serde(default)]
    pub form: u8,
    pub level: u8,
    #[serde(default)]
    pub location: u16,
    pub versions: Vec<GameVersion>,
    #[serde(default)]
    pub ability: u8,
    #[serde(default)]
    pub moves: [u16; 4],
    #[serde(default)]
    pub tid: u16,
    #[serde(default)]
    pub sid: u16,
    #[serde(default = "poke_ball")]
    pub ball: u8,
    #[serde(default)]
    pub shiny: Option<bool>,
    /// Indexed by language id.
    #[serde(default)]
    pub nicknames: Vec<String>,
    /// Indexed by language id.
    #[serde(default)]
    pub ot_names: Vec<String>,
}

/// A Pokémon Link gift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterLink {
    pub species: u16,
    pub level: u8,
    #[serde(default)]
    pub location: u16,
    pub games: Vec<GameGroup>,
    #[serde(default)]
    pub shiny: Option<bool>,
    #[serde(default = "default_link_ability")]
    pub ability: u8,
    #[serde(default = "poke_ball")]
    pub ball: u8,
    #[serde(default)]
    pub relearn: [u16; 4],
    #[serde(default)]
    pub classic_ribbon: bool,
    /// Gift carries its own OT and counts as traded.
    #[serde(default)]
    pub ot: bool,
}

fn default_link_ability() -> u8 {
    1
}

/// A wonder card or other fixed-content distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MysteryGift {
    pub card_id: u16,
    pub title: String,
    pub generation: u8,
    pub species: u16,
    #[serde(default)]
    pub form: u8,
    pub level: u8,
    /// Met level when it differs from the card level.
    #[serde(default)]
    pub met_level: Option<u8>,
    #[serde(default)]
    pub location: u16,
    #[serde(default)]
    pub egg_location: u16,
    #[serde(default)]
    pub is_egg: bool,
    #[serde(default = "cherish_ball")]
    pub ball: u8,
    #[serde(default)]
    pub moves: [u16; 4],
    #[serde(default)]
    pub relearn: [u16; 4],
    #[serde(default = "random_ivs")]
    pub ivs: [u8; 6],
    /// 0-2 fixed slot, 3 random 1/2, 4 random including hidden.
    #[serde(default = "default_gift_ability")]
    pub ability_type: u8,
    #[serde(default)]
    pub shiny: Option<bool>,
    /// Fixed trainer ids; `None` when the recipient becomes the OT.
    #[serde(default)]
    pub tid: Option<u16>,
    #[serde(default)]
    pub sid: Option<u16>,
    #[serde(default)]
    pub ot_name: String,
    #[serde(default)]
    pub ot_memory: Memory,
    #[serde(default)]
    pub ribbons: Vec<RibbonKind>,
}

fn default_gift_ability() -> u8 {
    4
}

impl MysteryGift {
    pub fn has_fixed_ot(&self) -> bool {
        !self.ot_name.is_empty()
    }

    pub fn has_ribbon(&self, kind: RibbonKind) -> bool {
        self.ribbons.contains(&kind)
    }
}
