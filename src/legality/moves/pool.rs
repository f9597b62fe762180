use crate::database::GameDatabase;
use crate::evolution::EvolutionChain;
use crate::legality::encounter::EggOrigin;
use schema::GameGroup;
use std::collections::BTreeSet;

/// Moves reachable through every evolution stage and compatible game group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovePool {
    pub level_up: BTreeSet<u16>,
    pub machine: BTreeSet<u16>,
    pub tutor: BTreeSet<u16>,
}

impl MovePool {
    pub fn compute(db: &GameDatabase, chain: &EvolutionChain) -> Self {
        let mut pool = MovePool::default();
        for node in chain.nodes() {
            for &group in &node.games {
                if let Some(learnset) = db.learnset(group, node.species) {
                    pool.level_up.extend(learnset.moves_up_to(node.level));
                }
                pool.machine.extend(db.machine_moves(group, node.species));
                pool.tutor.extend(db.tutor_moves(group, node.species));
            }
        }
        pool
    }
}

/// One hypothesis about where an egg was bred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EggBranch {
    pub group: GameGroup,
    /// The egg hatched as the stage after the incense baby.
    pub skip_baby: bool,
}

impl EggBranch {
    pub fn base_species(&self, chain: &EvolutionChain) -> Option<u16> {
        chain.base_species(self.skip_baby)
    }

    /// Level-1 moves the hatched species starts with.
    pub fn base_moves(&self, db: &GameDatabase, chain: &EvolutionChain) -> Vec<u16> {
        self.base_species(chain)
            .and_then(|species| db.learnset(self.group, species))
            .map(|learnset| learnset.moves_up_to(1).to_vec())
            .unwrap_or_default()
    }

    pub fn egg_moves(&self, db: &GameDatabase, chain: &EvolutionChain) -> Vec<u16> {
        self.base_species(chain)
            .map(|species| db.egg_moves(self.group, species).to_vec())
            .unwrap_or_default()
    }

    /// Moves an egg can carry into its relearn slots: nothing, the base moves
    /// or inherited egg moves.
    pub fn relearn_pool(&self, db: &GameDatabase, chain: &EvolutionChain) -> Vec<u16> {
        let mut pool = vec![0];
        pool.extend(self.base_moves(db, chain));
        pool.extend(self.egg_moves(db, chain));
        pool
    }

    /// Moves allowed in the relearn slots after the base moves: nothing or
    /// an egg move the hatched species does not start with.
    pub fn inherited_pool(&self, db: &GameDatabase, chain: &EvolutionChain) -> Vec<u16> {
        let base = self.base_moves(db, chain);
        let mut pool = vec![0];
        pool.extend(
            self.egg_moves(db, chain)
                .into_iter()
                .filter(|move_id| !base.contains(move_id)),
        );
        pool
    }
}

/// Breeding hypotheses in evaluation order: each origin group, first without
/// and then with the baby stage skipped for split-breed lines.
pub fn egg_branches(db: &GameDatabase, chain: &EvolutionChain, origin: &EggOrigin) -> Vec<EggBranch> {
    let split_breed =
        chain.has_evolved() && chain.species().any(|species| db.rules.split_breed.contains(&species));
    let options: &[bool] = if split_breed { &[false, true] } else { &[false] };

    origin
        .groups
        .iter()
        .flat_map(|&group| {
            options
                .iter()
                .map(move |&skip_baby| EggBranch { group, skip_baby })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::EvoNode;
    use pretty_assertions::assert_eq;
    use schema::Learnset;

    fn node(species: u16, level: u8, games: Vec<GameGroup>) -> EvoNode {
        EvoNode {
            species,
            form: 0,
            level,
            min_level: 1,
            method: None,
            games,
        }
    }

    #[test]
    fn test_pool_respects_node_level_and_games() {
        let mut db = GameDatabase::default();
        db.learnsets.entry(GameGroup::Sm).or_default().insert(
            25,
            Learnset::new(&[(1, 84), (10, 86), (50, 87)]),
        );
        db.learnsets
            .entry(GameGroup::Sm)
            .or_default()
            .insert(172, Learnset::new(&[(1, 204), (20, 1)]));
        db.machine_moves
            .entry(GameGroup::Xy)
            .or_default()
            .insert(25, vec![92]);

        let chain = EvolutionChain::new(vec![
            node(25, 20, vec![GameGroup::Sm]),
            node(172, 19, vec![GameGroup::Sm]),
        ]);
        let pool = MovePool::compute(&db, &chain);

        assert_eq!(pool.level_up, [84, 86, 204].into_iter().collect());
        // X/Y tables are not reachable from this chain.
        assert!(pool.machine.is_empty());
    }

    #[test]
    fn test_split_breed_doubles_branches() {
        let mut db = GameDatabase::default();
        db.rules.split_breed = vec![25];
        let chain = EvolutionChain::new(vec![
            node(25, 20, vec![GameGroup::Xy]),
            node(172, 19, vec![GameGroup::Xy]),
        ]);
        let origin = EggOrigin {
            groups: vec![GameGroup::Xy, GameGroup::Oras],
            traded: true,
        };

        let branches = egg_branches(&db, &chain, &origin);
        assert_eq!(
            branches,
            vec![
                EggBranch { group: GameGroup::Xy, skip_baby: false },
                EggBranch { group: GameGroup::Xy, skip_baby: true },
                EggBranch { group: GameGroup::Oras, skip_baby: false },
                EggBranch { group: GameGroup::Oras, skip_baby: true },
            ]
        );
        assert_eq!(branches[1].base_species(&chain), Some(25));
        assert_eq!(branches[0].base_species(&chain), Some(172));
    }

    #[test]
    fn test_inherited_pool_excludes_base_moves() {
        let mut db = GameDatabase::default();
        db.learnsets
            .entry(GameGroup::Sm)
            .or_default()
            .insert(172, Learnset::new(&[(1, 84), (1, 204)]));
        // Charm is both a starting move and a listed egg move.
        db.egg_moves
            .entry(GameGroup::Sm)
            .or_default()
            .insert(172, vec![273, 204]);
        let chain = EvolutionChain::new(vec![node(172, 1, vec![GameGroup::Sm])]);
        let branch = EggBranch { group: GameGroup::Sm, skip_baby: false };

        assert_eq!(branch.inherited_pool(&db, &chain), vec![0, 273]);
        assert_eq!(branch.relearn_pool(&db, &chain), vec![0, 84, 204, 273, 204]);
    }
}
