#[cfg(test)]
mod tests {
    use crate::legality::tests::common::{
        analyzer, TestSpecimenBuilder, BIDE, CHARM, GROWL, NURSERY, PIKACHU, QUICK_ATTACK, SURF,
        THUNDER_SHOCK, THUNDER_WAVE, WISH,
    };
    use crate::legality::{CheckIdentifier, LegalityReport, Severity};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::GameVersion;

    fn hatched_pikachu(moves: [u16; 4], relearn: [u16; 4]) -> LegalityReport {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .hatched()
            .with_met(NURSERY, 1)
            .with_moves(moves)
            .with_relearn(relearn)
            .build();
        analyzer().analyze(&specimen).unwrap()
    }

    fn comments(results: &[crate::legality::CheckResult]) -> Vec<&str> {
        results.iter().map(|r| r.comment.as_str()).collect()
    }

    #[test]
    fn test_same_move_in_every_slot_is_duplicate() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .with_moves([THUNDER_SHOCK; 4])
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        for result in report.move_results() {
            assert_eq!(result.severity, Severity::Invalid);
            assert_eq!(result.comment, "Duplicate Move.");
        }
        assert!(!report.valid());
    }

    #[test]
    fn test_empty_slots_are_always_valid() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .with_moves([0, 0, THUNDER_SHOCK, 0])
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        assert_eq!(
            comments(report.move_results()),
            vec!["Empty", "Empty", "Learned by Level-up.", "Empty"]
        );
        assert!(report.move_results().iter().all(|r| r.is_valid()));
    }

    #[rstest]
    #[case::learned_at_current_level(THUNDER_WAVE, "Learned by Level-up.", true)]
    #[case::pre_evolution_move(CHARM, "Learned by Level-up.", true)]
    #[case::above_current_level(QUICK_ATTACK, "Invalid Move.", false)]
    #[case::never_learned(SURF, "Invalid Move.", false)]
    fn test_wild_move_sources(#[case] move_id: u16, #[case] comment: &str, #[case] valid: bool) {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .with_moves([GROWL, move_id, 0, 0])
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        let result = &report.move_results()[1];
        assert_eq!(result.comment, comment);
        assert_eq!(result.is_valid(), valid);
    }

    #[test]
    fn test_wild_capture_expects_no_relearn_moves() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .with_moves([GROWL, 0, 0, 0])
            .with_relearn([0, THUNDER_SHOCK, 0, 0])
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        let relearn = report.relearn_results();
        assert!(relearn[0].is_valid());
        assert_eq!(relearn[1].comment, "Expected no Relearn Moves.");
        assert_eq!(relearn[1].identifier, CheckIdentifier::RelearnMove);
        assert_eq!(report.relearn_base, None);
    }

    #[test]
    fn test_duplicate_relearn_moves() {
        let report = hatched_pikachu([THUNDER_SHOCK, 0, 0, 0], [THUNDER_SHOCK, CHARM, WISH, WISH]);
        let relearn = report.relearn_results();

        assert_eq!(relearn[2].comment, "Duplicate Relearn Move.");
        assert_eq!(relearn[3].comment, "Duplicate Relearn Move.");
    }

    #[test]
    fn test_egg_relearn_base_moves_and_inherited_moves() {
        let report = hatched_pikachu([THUNDER_SHOCK, CHARM, WISH, 0], [THUNDER_SHOCK, CHARM, WISH, 0]);

        assert_eq!(
            comments(report.relearn_results()),
            vec!["Base egg move.", "Base egg move.", "Relearn move.", "Empty"]
        );
        assert_eq!(report.relearn_base, Some(vec![THUNDER_SHOCK, CHARM]));

        let moves = report.move_results();
        assert_eq!(moves[0].comment, "Learned by Level-up.");
        assert_eq!(moves[2].comment, "Egg Move.");
        assert!(moves[2].flag);
    }

    #[test]
    fn test_egg_relearn_missing_base_moves() {
        let report = hatched_pikachu([THUNDER_SHOCK, 0, 0, 0], [SURF, 0, 0, 0]);
        let relearn = report.relearn_results();

        assert_eq!(relearn[0].comment, "Base egg move missing.");
        assert_eq!(relearn[1].comment, "Base egg move missing.");
        assert!(relearn[2].comment.starts_with("Base egg move missing."));
        assert!(relearn[2]
            .comment
            .ends_with("Expected the following Relearn Moves: Thunder Shock, Charm."));
        assert_eq!(relearn[3].comment, "Empty");
        assert!(!report.valid());
    }

    #[test]
    fn test_egg_moves_cannot_displace_base_moves() {
        let report = hatched_pikachu([WISH, BIDE, THUNDER_SHOCK, CHARM], [WISH, BIDE, THUNDER_SHOCK, CHARM]);
        let relearn = report.relearn_results();

        // Two inherited moves leave room for both base moves up front.
        assert_eq!(report.relearn_base, Some(vec![THUNDER_SHOCK, CHARM]));
        assert_eq!(relearn[0].comment, "Base egg move missing.");
        assert_eq!(relearn[0].severity, Severity::Invalid);
        assert!(relearn[1].comment.starts_with("Base egg move missing."));
        assert_eq!(relearn[1].severity, Severity::Invalid);
        assert_eq!(relearn[2].comment, "Not an expected relearn move.");
        assert_eq!(relearn[3].comment, "Not an expected relearn move.");
        assert!(!report.valid());
    }

    #[test]
    fn test_egg_relearn_base_then_two_egg_moves() {
        let report = hatched_pikachu([THUNDER_SHOCK, CHARM, WISH, BIDE], [THUNDER_SHOCK, CHARM, WISH, BIDE]);

        assert_eq!(
            comments(report.relearn_results()),
            vec!["Base egg move.", "Base egg move.", "Relearn move.", "Relearn move."]
        );
    }

    #[test]
    fn test_egg_relearn_rejects_foreign_move_after_base() {
        let report = hatched_pikachu([THUNDER_SHOCK, 0, 0, 0], [THUNDER_SHOCK, CHARM, SURF, 0]);
        let relearn = report.relearn_results();

        assert_eq!(relearn[0].comment, "Base egg move.");
        assert_eq!(relearn[2].comment, "Not an expected relearn move.");
        assert_eq!(relearn[2].severity, Severity::Invalid);
    }

    #[test]
    fn test_hatched_egg_moves_from_one_branch() {
        let report = hatched_pikachu([WISH, BIDE, THUNDER_SHOCK, 0], [THUNDER_SHOCK, CHARM, 0, 0]);

        let moves = report.move_results();
        assert_eq!(moves[0].comment, "Egg Move.");
        assert_eq!(moves[1].comment, "Egg Move.");
        assert!(moves.iter().all(|r| r.is_valid()));
        // Modern eggs never need the legacy egg move set search.
        assert_eq!(report.by_identifier(CheckIdentifier::Egg).count(), 0);
    }

    #[test]
    fn test_gen4_egg_move_sets_are_not_judged() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .with_version(GameVersion::Diamond)
            .hatched()
            .with_met(NURSERY, 1)
            .with_moves([SURF, 0, 0, 0])
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        assert_eq!(report.move_results()[0].comment, "Invalid Move.");
        let egg: Vec<_> = report.by_identifier(CheckIdentifier::Egg).collect();
        assert_eq!(egg.len(), 1);
        assert_eq!(egg[0].severity, Severity::NotImplemented);
        assert_eq!(egg[0].comment, "Egg Move set check unimplemented.");
    }
}
