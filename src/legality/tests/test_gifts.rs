#[cfg(test)]
mod tests {
    use crate::legality::tests::common::{
        analyzer, fixture_database, TestSpecimenBuilder, PIKACHU, QUICK_ATTACK, SURF,
        THUNDER_SHOCK,
    };
    use crate::legality::{EncounterCandidate, LegalityAnalyzer, Severity};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn committed_card(candidate: &EncounterCandidate) -> Option<u16> {
        match candidate {
            EncounterCandidate::MysteryGift(gift) => Some(gift.card_id),
            _ => None,
        }
    }

    #[test]
    fn test_relearn_moves_select_a_single_gift() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 10)
            .from_event()
            .with_moves([QUICK_ATTACK, THUNDER_SHOCK, 0, 0])
            .with_relearn([QUICK_ATTACK, 0, 0, 0])
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        assert_eq!(committed_card(&report.encounter), Some(503));
        assert_eq!(
            report.encounter_result().map(|r| r.comment.as_str()),
            Some("Matches #0503 (Quick Pikachu)")
        );
        assert!(report.relearn_results().iter().all(|r| r.is_valid()));
        assert_eq!(report.relearn_base, Some(vec![QUICK_ATTACK, 0, 0, 0]));
        assert!(report.move_results().iter().all(|r| r.is_valid()));
    }

    #[test]
    fn test_residual_ambiguity_is_indeterminate() {
        // Two cards share the relearn set; only one of them teaches Surf.
        let specimen = TestSpecimenBuilder::new(PIKACHU, 10)
            .from_event()
            .with_moves([SURF, THUNDER_SHOCK, 0, 0])
            .with_specimen(|s| s.country = 1)
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        assert_eq!(committed_card(&report.encounter), Some(501));
        let moves = report.move_results();
        assert_eq!(moves[0].severity, Severity::Indeterminate);
        assert_eq!(
            moves[0].comment,
            "Move legality depends on which Mystery Gift was received."
        );
        assert_eq!(moves[1].severity, Severity::Valid);
        // Not knowing which card was received is no reason to call it illegal.
        assert!(report.results.iter().all(|r| r.severity != Severity::Invalid));
        assert!(report.valid());
    }

    #[test]
    fn test_ambiguity_that_does_not_matter_stays_valid() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 10)
            .from_event()
            .with_moves([THUNDER_SHOCK, 0, 0, 0])
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        assert!(report
            .move_results()
            .iter()
            .all(|r| r.severity == Severity::Valid));
    }

    #[test]
    fn test_no_surviving_gift_is_invalid() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 10)
            .from_event()
            .with_relearn([SURF, 0, 0, 0])
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        assert!(report.encounter.is_unknown());
        assert_eq!(
            report.encounter_result().map(|r| r.comment.as_str()),
            Some("Unable to match to a Mystery Gift in the database.")
        );
        assert_eq!(report.relearn_results()[0].comment, "Expected no Relearn Moves.");
    }

    #[test]
    fn test_event_without_card_is_invalid() {
        let mut db = fixture_database();
        db.gifts.clear();
        let analyzer = LegalityAnalyzer::new(Arc::new(db));
        let specimen = TestSpecimenBuilder::new(PIKACHU, 10).from_event().build();
        let report = analyzer.analyze(&specimen).unwrap();

        assert_eq!(
            report.encounter_result().map(|r| r.comment.as_str()),
            Some("Unable to match to a Mystery Gift in the database.")
        );
        assert!(!report.valid());
    }

    #[test]
    fn test_gift_level_rules() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 10)
            .from_event()
            .with_specimen(|s| s.met_level = 12)
            .with_moves([THUNDER_SHOCK, 0, 0, 0])
            .build();
        let report = analyzer().analyze(&specimen).unwrap();
        assert!(report.has_comment("Met Level does not match Wonder Card level."));
    }
}
