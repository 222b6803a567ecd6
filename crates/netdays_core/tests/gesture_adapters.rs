use netdays_core::{
    CardType, DragAdapter, GestureAdapter, GestureError, Month, PlacementRejection,
    PlannerConfig, PlannerSession, TapAdapter,
};

fn november_session(config: PlannerConfig) -> PlannerSession {
    PlannerSession::new(Month::new(2023, 11).unwrap(), config).unwrap()
}

#[test]
fn drag_and_tap_share_one_placement_path() {
    let mut session = november_session(PlannerConfig::default());
    let mut drag = DragAdapter::new();
    let mut tap = TapAdapter::new();

    drag.start(CardType::Effort, &session).unwrap();
    let dragged = drag.drop_on(3, &mut session).unwrap();

    tap.select(CardType::Slump, &session).unwrap();
    let tapped = tap.tap(6, &mut session).unwrap();

    assert_eq!(session.grid().card_cells(dragged), vec![3, 4, 5]);
    assert_eq!(session.grid().card_cells(tapped), vec![6]);
    assert_eq!(session.stats().effort_cards_used, 1);
    assert_eq!(session.stats().slump_cards_used, 1);
}

#[test]
fn cancelled_gesture_never_touches_the_grid() {
    let mut session = november_session(PlannerConfig::default());
    let before = session.grid().clone();

    let mut drag = DragAdapter::new();
    drag.start(CardType::Effort, &session).unwrap();
    drag.cancel();
    assert_eq!(drag.pending(), None);
    assert_eq!(
        drag.drop_on(3, &mut session),
        Err(GestureError::NoActiveGesture)
    );

    let mut tap = TapAdapter::new();
    tap.select(CardType::Slump, &session).unwrap();
    tap.cancel();
    assert_eq!(tap.tap(3, &mut session), Err(GestureError::NoActiveGesture));

    assert_eq!(session.grid(), &before);
    assert_eq!(session.last_outcome(), None);
}

#[test]
fn rejected_drop_disarms_and_reports_reason() {
    let mut session = november_session(PlannerConfig::default());
    let mut drag = DragAdapter::new();
    drag.start(CardType::Effort, &session).unwrap();

    assert_eq!(
        drag.drop_on(6, &mut session),
        Err(GestureError::Rejected(PlacementRejection::InsufficientRun))
    );
    assert_eq!(drag.pending(), None);
}

#[test]
fn exhausted_card_type_cannot_be_picked_up() {
    let config = PlannerConfig {
        effort_capacity: 7,
        slump_capacity: 1,
    };
    let mut session = november_session(config);
    let mut tap = TapAdapter::new();
    tap.select(CardType::Slump, &session).unwrap();
    tap.tap(6, &mut session).unwrap();

    assert_eq!(
        tap.select(CardType::Slump, &session),
        Err(GestureError::CardUnavailable(CardType::Slump))
    );
    assert_eq!(tap.pending(), None);
    tap.select(CardType::Effort, &session).unwrap();
    assert_eq!(tap.pending(), Some(CardType::Effort));
}
