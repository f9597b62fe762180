use crate::database::GameDatabase;
use crate::specimen::Specimen;
use schema::{EvolutionMethod, GameGroup};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::trace;

/// Longest pre-evolution line any species has.
const MAX_CHAIN_DEPTH: usize = 4;

/// One stage of a specimen's evolution line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvoNode {
    pub species: u16,
    pub form: u8,
    /// Highest level the specimen could have had at this stage.
    pub level: u8,
    /// Lowest level the specimen could have had at this stage.
    pub min_level: u8,
    /// How this stage was reached from the previous one; `None` for the base.
    pub method: Option<EvolutionMethod>,
    /// Game groups whose tables apply to this stage.
    pub games: Vec<GameGroup>,
}

/// Evolution line of a specimen, current species first and base species last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvolutionChain {
    nodes: Vec<EvoNode>,
}

impl EvolutionChain {
    pub fn new(nodes: Vec<EvoNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[EvoNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn base(&self) -> Option<&EvoNode> {
        self.nodes.last()
    }

    /// Species an egg of this line hatches as. `skip_baby` steps over the
    /// incense-only baby stage of split-breed lines.
    pub fn base_species(&self, skip_baby: bool) -> Option<u16> {
        let len = self.nodes.len();
        if skip_baby && len >= 2 {
            return Some(self.nodes[len - 2].species);
        }
        self.base().map(|node| node.species)
    }

    pub fn contains_species(&self, species: u16) -> bool {
        self.nodes.iter().any(|node| node.species == species)
    }

    pub fn node_for(&self, species: u16) -> Option<&EvoNode> {
        self.nodes.iter().find(|node| node.species == species)
    }

    pub fn species(&self) -> impl Iterator<Item = u16> + '_ {
        self.nodes.iter().map(|node| node.species)
    }

    pub fn has_evolved(&self) -> bool {
        self.nodes.len() > 1
    }

    /// Any stage of the line was reached through a trade.
    pub fn requires_trade(&self) -> bool {
        self.nodes
            .iter()
            .filter_map(|node| node.method)
            .any(EvolutionMethod::requires_trade)
    }

    /// Every level-gated evolution in the line is reachable at the stored level.
    pub fn evolution_valid(&self) -> bool {
        self.nodes.iter().all(|node| match node.method {
            Some(EvolutionMethod::Level(required)) => node.level >= required,
            _ => true,
        })
    }

    pub fn all_groups(&self) -> BTreeSet<GameGroup> {
        self.nodes
            .iter()
            .flat_map(|node| node.games.iter().copied())
            .collect()
    }
}

/// Supplies the evolution line used to compute move pools and origins.
pub trait EvolutionChainProvider: Send + Sync {
    fn chain(&self, db: &GameDatabase, specimen: &Specimen) -> EvolutionChain;
}

/// Builds evolution lines from the database's evolution table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseEvolutionChains;

impl EvolutionChainProvider for DatabaseEvolutionChains {
    fn chain(&self, db: &GameDatabase, specimen: &Specimen) -> EvolutionChain {
        let generations = compatible_generations(specimen);
        let mut nodes = vec![EvoNode {
            species: specimen.species,
            form: specimen.form,
            level: specimen.level,
            min_level: specimen.met_level.clamp(1, specimen.level),
            method: None,
            games: games_for(db, specimen.species, &generations),
        }];

        while nodes.len() < MAX_CHAIN_DEPTH {
            let Some(child) = nodes.last_mut() else { break };
            let Some(evolution) = db.evolution_into(child.species, specimen.format) else {
                break;
            };
            if evolution.evolves_from == 0 || evolution.evolves_from == child.species {
                break;
            }

            child.method = Some(evolution.method);
            let parent_level = match evolution.method {
                EvolutionMethod::Level(required) => {
                    child.min_level = child.min_level.max(required).min(child.level);
                    child.level.saturating_sub(1).max(1)
                }
                EvolutionMethod::Friendship | EvolutionMethod::Beauty(_) | EvolutionMethod::Other => {
                    child.level.saturating_sub(1).max(1)
                }
                EvolutionMethod::Item(_) | EvolutionMethod::Trade | EvolutionMethod::TradeItem(_) => {
                    child.level
                }
            };
            let parent = EvoNode {
                species: evolution.evolves_from,
                form: 0,
                level: parent_level,
                min_level: specimen.met_level.clamp(1, parent_level),
                method: None,
                games: games_for(db, evolution.evolves_from, &generations),
            };
            trace!(species = parent.species, level = parent.level, "chain ancestor");
            nodes.push(parent);
        }

        EvolutionChain::new(nodes)
    }
}

/// Generations whose tables can have shaped a specimen: origin through format,
/// or 1, 2 and the format for Virtual Console transfers.
pub fn compatible_generations(specimen: &Specimen) -> Vec<u8> {
    if specimen.vc() {
        let mut generations = vec![1, 2, specimen.format];
        generations.dedup();
        return generations;
    }
    (specimen.origin_generation()..=specimen.format).collect()
}

fn games_for(db: &GameDatabase, species: u16, generations: &[u8]) -> Vec<GameGroup> {
    generations
        .iter()
        .filter(|&&generation| db.species_in_generation(species, generation))
        .flat_map(|&generation| GameGroup::for_generation(generation).iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::{EvolutionData, GameVersion};

    fn pikachu_line_db() -> GameDatabase {
        let mut db = GameDatabase::default();
        db.max_species = [(1, 151), (2, 251), (6, 721), (7, 807)].into_iter().collect();
        db.evolutions = vec![
            EvolutionData {
                species: 25,
                evolves_from: 172,
                method: EvolutionMethod::Friendship,
                generation: 2,
            },
            EvolutionData {
                species: 26,
                evolves_from: 25,
                method: EvolutionMethod::Item(83),
                generation: 1,
            },
        ];
        db
    }

    #[test]
    fn test_chain_walks_back_to_base_species() {
        let db = pikachu_line_db();
        let specimen = Specimen {
            species: 26,
            level: 30,
            met_level: 1,
            ..Default::default()
        };
        let chain = DatabaseEvolutionChains.chain(&db, &specimen);

        let species: Vec<u16> = chain.species().collect();
        assert_eq!(species, vec![26, 25, 172]);
        // Item evolution keeps the level, friendship needs one level-up.
        assert_eq!(chain.nodes()[1].level, 30);
        assert_eq!(chain.nodes()[2].level, 29);
        assert_eq!(chain.base_species(false), Some(172));
        assert_eq!(chain.base_species(true), Some(25));
        assert!(chain.has_evolved());
        assert!(!chain.requires_trade());
    }

    #[test]
    fn test_generation_one_chain_stops_before_later_babies() {
        let db = pikachu_line_db();
        let specimen = Specimen {
            species: 25,
            level: 20,
            format: 1,
            version: GameVersion::Yellow,
            ..Default::default()
        };
        let chain = DatabaseEvolutionChains.chain(&db, &specimen);
        assert_eq!(chain.species().collect::<Vec<_>>(), vec![25]);
        assert_eq!(chain.nodes()[0].games, vec![GameGroup::Rby]);
    }

    #[test]
    fn test_virtual_console_generations() {
        let specimen = Specimen {
            species: 25,
            level: 20,
            version: GameVersion::Yellow,
            ..Default::default()
        };
        assert_eq!(compatible_generations(&specimen), vec![1, 2, 7]);

        let modern = Specimen {
            version: GameVersion::X,
            ..specimen
        };
        assert_eq!(compatible_generations(&modern), vec![6, 7]);
    }

    #[test]
    fn test_level_evolution_requires_level() {
        let mut db = GameDatabase::default();
        db.max_species = [(7, 807)].into_iter().collect();
        db.evolutions = vec![EvolutionData {
            species: 2,
            evolves_from: 1,
            method: EvolutionMethod::Level(16),
            generation: 1,
        }];
        let low = Specimen {
            species: 2,
            level: 10,
            met_level: 5,
            ..Default::default()
        };
        assert!(!DatabaseEvolutionChains.chain(&db, &low).evolution_valid());

        let high = Specimen { level: 16, ..low };
        let chain = DatabaseEvolutionChains.chain(&db, &high);
        assert!(chain.evolution_valid());
        assert_eq!(chain.nodes()[0].min_level, 16);
        assert_eq!(chain.nodes()[1].level, 15);
    }
}
