//! End-to-end walk through the City Tour sample project.

use common::forms::{FormMode, ProjectForm, Submission};
use common::model::{HomescreenDisplay, Location, LocationTrigger, ParticipantScoring, Project};
use common::ordering;
use common::preview::{Homescreen, Preview, ScreenContent, Tally};
use pretty_assertions::assert_eq;

fn city_tour() -> Project {
    let mut form = ProjectForm::new(&FormMode::Create);
    form.title = "City Tour".into();
    form.description = "d".into();
    form.instructions = "walk".into();
    form.initial_clue = "start at the gate".into();
    form.homescreen_display = HomescreenDisplay::AllLocations;
    form.participant_scoring = ParticipantScoring::LocationsEntered;

    let Ok(Submission::Create(draft)) = form.submit() else {
        panic!("City Tour should validate");
    };
    Project {
        id: 1,
        title: draft.title,
        description: draft.description,
        instructions: draft.instructions,
        initial_clue: Some(draft.initial_clue),
        homescreen_display: draft.homescreen_display,
        participant_scoring: draft.participant_scoring,
        is_published: draft.is_published,
        username: Some("s1234567".into()),
    }
}

fn stop(id: i64, name: &str, points: u32, existing: &[Location]) -> Location {
    Location {
        id,
        project_id: 1,
        location_name: name.into(),
        location_trigger: LocationTrigger::LocationEntry,
        location_position: "(27.4975,153.013276)".into(),
        score_points: points,
        location_order: ordering::next_order(existing),
        clue: None,
        location_content: None,
        username: Some("s1234567".into()),
    }
}

#[test]
fn visiting_every_stop() {
    let mut locations = Vec::new();
    let a = stop(10, "A", 5, &locations);
    ordering::insert(&mut locations, a);
    let b = stop(11, "B", 3, &locations);
    ordering::insert(&mut locations, b);
    assert_eq!(locations[1].location_order, 1);

    let mut preview = Preview::new(city_tour(), locations);
    assert_eq!(
        preview.content(),
        ScreenContent::Home(Homescreen::AllLocations(vec!["A", "B"]))
    );

    preview.select("10");
    preview.select("11");
    preview.select("10");

    assert_eq!(preview.session().score(), 8);
    assert_eq!(preview.session().visited_count(), 2);
    assert_eq!(preview.tally(), Some(Tally::Visited { visited: 2, total: 2 }));
    assert_eq!(preview.max_score(), 8);
}

#[test]
fn blank_title_never_becomes_a_request() {
    let mut form = ProjectForm::new(&FormMode::Create);
    form.title = " ".into();
    form.description = "d".into();
    form.instructions = "walk".into();
    assert!(form.submit().is_err());
}
