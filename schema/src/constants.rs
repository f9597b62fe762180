//! Well-known identifiers referenced directly by legality rules.

pub mod species {
    pub const PIKACHU: u16 = 25;
    pub const RAICHU: u16 = 26;
    pub const MEWTWO: u16 = 150;
    pub const MEW: u16 = 151;
    pub const PICHU: u16 = 172;
    pub const UNOWN: u16 = 201;
    pub const SMEARGLE: u16 = 235;
    pub const WURMPLE: u16 = 265;
    pub const SILCOON: u16 = 266;
    pub const BEAUTIFLY: u16 = 267;
    pub const CASCOON: u16 = 268;
    pub const DUSTOX: u16 = 269;
    pub const MILOTIC: u16 = 350;
    pub const MOTHIM: u16 = 414;
    pub const GIRATINA: u16 = 487;
    pub const SHAYMIN: u16 = 492;
    pub const ARCEUS: u16 = 493;
    pub const SAWSBUCK: u16 = 586;
    pub const KELDEO: u16 = 647;
    pub const GENESECT: u16 = 649;
    pub const GRENINJA: u16 = 658;
    pub const SCATTERBUG: u16 = 664;
    pub const SPEWPA: u16 = 665;
    pub const VIVILLON: u16 = 666;
    pub const FLOETTE: u16 = 670;
    pub const FLORGES: u16 = 671;
    pub const FURFROU: u16 = 676;
    pub const SYLVEON: u16 = 700;
    pub const PUMPKABOO: u16 = 710;
    pub const GOURGEIST: u16 = 711;
    pub const ZYGARDE: u16 = 718;
    pub const HOOPA: u16 = 720;
    pub const ROWLET: u16 = 722;
    pub const PRIMARINA: u16 = 730;
    pub const LYCANROC: u16 = 745;
    pub const SILVALLY: u16 = 773;
    pub const MINIOR: u16 = 774;
    pub const SOLGALEO: u16 = 791;
    pub const LUNALA: u16 = 792;

    /// Evolutions of Wurmple, ordered so that `index / 2` is the branch.
    pub const WURMPLE_EVOLUTIONS: [u16; 4] = [SILCOON, BEAUTIFLY, CASCOON, DUSTOX];
}

pub mod moves {
    pub const NONE: u16 = 0;
    pub const PAY_DAY: u16 = 6;
    pub const FLY: u16 = 19;
    pub const VOLT_TACKLE: u16 = 344;
    pub const SECRET_SWORD: u16 = 548;
}

pub mod locations {
    /// Gen 6+ placeholder for eggs and specimens received via link trade.
    pub const LINK_TRADE: u16 = 30002;
    /// Gen 6+ met location of Pokémon Link gifts.
    pub const LINK_GIFT: u16 = 30011;
    /// Met location assigned by the Virtual Console transfer service.
    pub const TRANSFER_VIRTUAL_CONSOLE: u16 = 30013;
    pub const POKE_PELAGO: u16 = 30016;
    pub const FRIEND_SAFARI: u16 = 148;
    /// An egg location that never occurs in X/Y.
    pub const INVALID_XY_EGG: u16 = 318;
    /// Gen 6+ event met/egg locations.
    pub const EVENT_RANGE: std::ops::Range<u16> = 40001..50000;
}

pub mod balls {
    pub const MASTER: u8 = 1;
    pub const POKE: u8 = 4;
    pub const SAFARI: u8 = 5;
    pub const DUSK: u8 = 13;
    pub const QUICK: u8 = 15;
    pub const CHERISH: u8 = 16;
    pub const FAST: u8 = 17;
    pub const MOON: u8 = 23;
    pub const SPORT: u8 = 24;
    pub const DREAM: u8 = 25;
    pub const BEAST: u8 = 26;
}

pub mod items {
    pub const GRISEOUS_ORB: u16 = 112;
    pub const DOUSE_DRIVE: u16 = 116;
    pub const CHILL_DRIVE: u16 = 119;

    /// Plates in Arceus form order (form = index + 1).
    pub const ARCEUS_PLATES: [u16; 17] = [
        303, 306, 304, 305, 309, 308, 310, 313, 298, 299, 301, 300, 307, 302, 311, 312, 644,
    ];

    /// Z-Crystals in Arceus form order (form = index + 1).
    pub const ARCEUS_Z_CRYSTALS: [u16; 17] = [
        782, 785, 784, 783, 788, 787, 789, 790, 777, 778, 780, 779, 786, 781, 791, 792, 793,
    ];

    pub const FIRST_MEMORY: u16 = 904;
    pub const LAST_MEMORY: u16 = 920;
}
