use netdays_core::{
    CardType, Month, PlacementOutcome, PlacementRejection, PlannerConfig, PlannerSession,
};

fn november_session() -> PlannerSession {
    PlannerSession::new(Month::new(2023, 11).unwrap(), PlannerConfig::default()).unwrap()
}

#[test]
fn navigation_discards_every_card() {
    let mut session = november_session();
    session.place(3, CardType::Effort).unwrap();
    session.place(6, CardType::Slump).unwrap();

    let next = session.navigate(1).unwrap();
    assert_eq!(next, Month::new(2023, 12).unwrap());
    assert_eq!(session.month(), next);
    assert!(session.grid().cells().iter().all(|cell| !cell.is_placed()));
    assert_eq!(session.stats().effort_cards_used, 0);
    assert_eq!(session.inventory().remaining(CardType::Effort), 7);
    assert_eq!(session.last_outcome(), None);

    // 2023-12 starts on Friday.
    assert_eq!(session.grid().leading_blanks(), 5);
    assert_eq!(session.grid().dated_count(), 31);
}

#[test]
fn navigation_back_across_year_boundary() {
    let mut session =
        PlannerSession::new(Month::new(2024, 1).unwrap(), PlannerConfig::default()).unwrap();
    assert_eq!(session.navigate(-1).unwrap(), Month::new(2023, 12).unwrap());
    assert_eq!(session.navigate(-12).unwrap(), Month::new(2022, 12).unwrap());
}

#[test]
fn reset_keeps_month_and_clears_cards() {
    let mut session = november_session();
    session.place(3, CardType::Effort).unwrap();
    session.reset();

    assert_eq!(session.month(), Month::new(2023, 11).unwrap());
    assert_eq!(session.stats().effort_days, 0);
    assert!(session.used_card_ids(CardType::Effort).is_empty());
}

#[test]
fn returning_to_a_month_does_not_restore_cards() {
    let mut session = november_session();
    session.place(3, CardType::Effort).unwrap();
    session.navigate(1).unwrap();
    session.navigate(-1).unwrap();
    assert_eq!(session.stats().effort_cards_used, 0);
}

#[test]
fn remove_records_outcomes_and_is_idempotent() {
    let mut session = november_session();
    let card_id = session.place(10, CardType::Effort).unwrap();

    assert_eq!(session.remove(card_id), vec![10, 11, 12]);
    assert_eq!(
        session.last_outcome(),
        Some(&PlacementOutcome::Removed {
            card_id,
            cleared_cells: vec![10, 11, 12],
        })
    );

    let grid_after_first = session.grid().clone();
    assert!(session.remove(card_id).is_empty());
    assert_eq!(session.grid(), &grid_after_first);
    assert_eq!(
        session.last_outcome(),
        Some(&PlacementOutcome::RemoveNoop { card_id })
    );
}

#[test]
fn documented_wednesday_scenario() {
    let mut session = november_session();
    session.place(3, CardType::Effort).unwrap();
    let themes: Vec<Option<u8>> = (3..6)
        .map(|index| session.grid().cell(index).unwrap().theme_index)
        .collect();
    assert_eq!(themes, vec![Some(0), Some(1), Some(2)]);

    assert_eq!(
        session.place(6, CardType::Effort),
        Err(PlacementRejection::InsufficientRun)
    );
    assert_eq!(session.stats().effort_cards_used, 1);
}

#[test]
fn show_month_jumps_and_regenerates() {
    let mut session = november_session();
    session.place(3, CardType::Slump).unwrap();
    session.show_month(Month::new(2024, 2).unwrap());
    assert_eq!(session.grid().leading_blanks(), 4);
    assert_eq!(session.stats().slump_cards_used, 0);
}

#[test]
fn view_serializes_for_ui_layers() {
    let mut session = november_session();
    let card_id = session.place(3, CardType::Effort).unwrap();

    let json = serde_json::to_value(session.view()).unwrap();
    assert_eq!(json["month"]["year"], 2023);
    assert_eq!(json["month"]["month"], 11);
    assert_eq!(json["weekday_labels"][0], "Sun");
    assert_eq!(json["cells"].as_array().unwrap().len(), 33);
    assert_eq!(json["cells"][3]["card_type"], "effort");
    assert_eq!(json["cells"][3]["card_id"], card_id.to_string());
    assert_eq!(json["stats"]["completion_rate"], 10);
    assert_eq!(json["inventory"]["effort"]["remaining"], 6);
    assert_eq!(json["effort_card_ids"][0], card_id.to_string());
    assert_eq!(json["last_outcome"]["status"], "placed");
}
