#[cfg(test)]
mod tests {
    use crate::legality::tests::common::{
        analyzer, TestSpecimenBuilder, MAGNEMITE, NURSERY, PIKACHU, THUNDER_SHOCK,
    };
    use crate::legality::{CheckIdentifier, Severity};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::constants::balls;
    use schema::GENDER_GENDERLESS;

    #[test]
    fn test_genderless_species_with_gender() {
        let specimen = TestSpecimenBuilder::new(MAGNEMITE, 5)
            .with_ability(42, 1)
            .with_gender(0)
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        let gender: Vec<_> = report.by_identifier(CheckIdentifier::Gender).collect();
        assert_eq!(gender.len(), 1);
        assert_eq!(gender[0].severity, Severity::Invalid);
        assert_eq!(gender[0].comment, "Genderless Pokémon should not have a gender.");
        assert!(!report.valid());
    }

    #[test]
    fn test_gendered_species_stored_as_genderless() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .with_gender(GENDER_GENDERLESS)
            .build();
        let report = analyzer().analyze(&specimen).unwrap();
        assert!(report.has_comment("Gendered Pokémon should have a gender."));
    }

    #[rstest]
    #[case::over_total([252, 252, 7, 0, 0, 0], Some((Severity::Invalid, "EV total cannot be above 510.")))]
    #[case::two_remaining([252, 252, 4, 0, 0, 0], Some((Severity::Fishy, "2 EVs remaining.")))]
    #[case::over_stat_cap([255, 0, 0, 0, 0, 0], Some((Severity::Invalid, "EVs cannot go above 252.")))]
    #[case::all_equal([10; 6], Some((Severity::Fishy, "EVs are all equal.")))]
    #[case::ordinary([4, 0, 0, 0, 0, 0], None)]
    fn test_ev_rules(#[case] evs: [u8; 6], #[case] expected: Option<(Severity, &str)>) {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .with_moves([THUNDER_SHOCK, 0, 0, 0])
            .with_evs(evs)
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        let line = report
            .by_identifier(CheckIdentifier::Evs)
            .next()
            .map(|r| (r.severity, r.comment.as_str()));
        assert_eq!(line, expected);
    }

    #[rstest]
    #[case::wild_ball(balls::POKE, "Correct ball on ingame encounter.", true)]
    #[case::unobtainable(balls::MASTER, "Incorrect ball on ingame encounter.", false)]
    fn test_wild_ball(#[case] ball: u8, #[case] comment: &str, #[case] valid: bool) {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .with_specimen(|s| s.ball = ball)
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        let line = report
            .by_identifier(CheckIdentifier::Ball)
            .next()
            .expect("ball line");
        assert_eq!(line.comment, comment);
        assert_eq!(line.is_valid(), valid);
    }

    #[test]
    fn test_master_ball_on_hatched_egg() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .hatched()
            .with_met(NURSERY, 1)
            .with_specimen(|s| s.ball = balls::MASTER)
            .build();
        let report = analyzer().analyze(&specimen).unwrap();
        assert!(report.has_comment("Master Ball on egg origin."));
    }

    #[test]
    fn test_ability_outside_species_table() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5).with_ability(42, 1).build();
        let report = analyzer().analyze(&specimen).unwrap();

        let ability: Vec<_> = report.by_identifier(CheckIdentifier::Ability).collect();
        assert_eq!(ability.len(), 1);
        assert_eq!(ability[0].comment, "Ability is not valid for species/form.");
    }

    #[test]
    fn test_ability_number_must_match_slot() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5).with_ability(31, 1).build();
        let report = analyzer().analyze(&specimen).unwrap();
        assert!(report.has_comment("Ability does not match ability number."));
    }

    #[test]
    fn test_form_out_of_range() {
        let specimen = TestSpecimenBuilder::new(MAGNEMITE, 5)
            .hatched()
            .with_met(NURSERY, 1)
            .with_ability(42, 1)
            .with_gender(GENDER_GENDERLESS)
            .with_specimen(|s| s.form = 2)
            .build();
        let report = analyzer().analyze(&specimen).unwrap();
        assert!(report.has_comment("Form Count is out of range. Expected <= 0, got 2"));
    }

    #[test]
    fn test_level_below_met_level() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .with_specimen(|s| s.met_level = 7)
            .build();
        let report = analyzer().analyze(&specimen).unwrap();
        assert!(report.has_comment("Current level is below met level."));
    }

    #[test]
    fn test_hyper_training_below_level_100() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .with_specimen(|s| s.hyper_trained[1] = true)
            .build();
        let report = analyzer().analyze(&specimen).unwrap();
        assert!(report.has_comment("Can't Hyper Train a pokemon that isn't level 100."));
    }

    #[test]
    fn test_eggs_cannot_hold_pp_ups() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 1)
            .hatched()
            .with_met(0, 1)
            .with_specimen(|s| {
                s.is_egg = true;
                s.is_nicknamed = true;
                s.nickname = "Egg".to_string();
                s.pp_ups = [1, 0, 0, 0];
            })
            .build();
        let report = analyzer().analyze(&specimen).unwrap();

        assert_eq!(
            report.encounter_result().map(|r| r.comment.as_str()),
            Some("Valid un-hatched egg.")
        );
        assert!(report.has_comment("Cannot apply PP Ups to an Egg."));
        assert!(report.has_comment("Egg matches language Egg name."));
    }

    #[test]
    fn test_unexpected_fateful_flag() {
        let specimen = TestSpecimenBuilder::new(PIKACHU, 5)
            .with_specimen(|s| s.fateful = true)
            .build();
        let report = analyzer().analyze(&specimen).unwrap();
        // No card matches, so the record falls back to the wild tables.
        assert!(matches!(
            report.encounter,
            crate::legality::EncounterCandidate::WildSlot(_)
        ));
        assert!(report.has_comment("Fateful Encounter should not be checked."));
        assert!(!report.valid());
    }
}
