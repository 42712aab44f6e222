//! Participant simulation for the preview screen.
//!
//! A [`Preview`] holds one project, its locations in rank order and an
//! ephemeral [`PreviewSession`]. Selecting a location moves the simulated
//! phone to that location and credits it the first time only; selecting the
//! homescreen never touches the tally.

use std::collections::HashSet;
use std::fmt;

use crate::model::{HomescreenDisplay, Location, ParticipantScoring, Project};
use crate::ordering::sort_by_order;

/// Value of the homescreen entry in the location picker.
pub const HOMESCREEN_VALUE: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Homescreen,
    Viewing(i64),
}

/// Score and visits accumulated since the preview was opened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewSession {
    screen: Screen,
    score: u64,
    visited_count: u32,
    visited: HashSet<i64>,
}

impl PreviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn visited_count(&self) -> u32 {
        self.visited_count
    }

    pub fn has_visited(&self, id: i64) -> bool {
        self.visited.contains(&id)
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::Homescreen;
    }

    /// Shows `location`; returns whether this visit was credited.
    pub fn visit(&mut self, location: &Location) -> bool {
        self.screen = Screen::Viewing(location.id);
        if !self.visited.insert(location.id) {
            return false;
        }
        self.visited_count += 1;
        self.score = self.score.saturating_add(u64::from(location.score_points));
        true
    }
}

/// What the homescreen shows, per the project's display mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Homescreen<'a> {
    AllLocations(Vec<&'a str>),
    Instructions {
        instructions: &'a str,
        initial_clue: &'a str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenContent<'a> {
    Home(Homescreen<'a>),
    Location {
        name: &'a str,
        /// Rich HTML content; `None` renders the "no content" placeholder.
        content: Option<&'a str>,
        /// Hint toward the next location.
        clue: Option<&'a str>,
    },
}

/// Counter shown at the bottom of the simulated phone.
///
/// QR-scored projects show points; entry-scored projects show visits;
/// unscored projects show nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tally {
    Score { score: u64, max: u64 },
    Visited { visited: u32, total: u32 },
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tally::Score { score, max } => write!(f, "Score: {score}/{max}"),
            Tally::Visited { visited, total } => write!(f, "Visited: {visited}/{total}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    project: Project,
    locations: Vec<Location>,
    session: PreviewSession,
}

impl Preview {
    pub fn new(project: Project, mut locations: Vec<Location>) -> Self {
        sort_by_order(&mut locations);
        Self {
            project,
            locations,
            session: PreviewSession::new(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn session(&self) -> &PreviewSession {
        &self.session
    }

    /// Applies a picker value: [`HOMESCREEN_VALUE`] or a location id.
    ///
    /// Unknown values leave the session untouched and return `false`.
    pub fn select(&mut self, value: &str) -> bool {
        if value == HOMESCREEN_VALUE {
            self.session.go_home();
            return true;
        }
        let Ok(id) = value.parse::<i64>() else {
            return false;
        };
        match self.locations.iter().find(|l| l.id == id) {
            Some(location) => {
                self.session.visit(location);
                true
            }
            None => false,
        }
    }

    /// Picker value for the current screen.
    pub fn selected_value(&self) -> String {
        match self.session.screen() {
            Screen::Homescreen => HOMESCREEN_VALUE.to_string(),
            Screen::Viewing(id) => id.to_string(),
        }
    }

    pub fn current_location(&self) -> Option<&Location> {
        match self.session.screen() {
            Screen::Homescreen => None,
            Screen::Viewing(id) => self.locations.iter().find(|l| l.id == id),
        }
    }

    pub fn max_score(&self) -> u64 {
        self.locations
            .iter()
            .fold(0u64, |total, l| total.saturating_add(u64::from(l.score_points)))
    }

    pub fn homescreen(&self) -> Homescreen<'_> {
        match self.project.homescreen_display {
            HomescreenDisplay::AllLocations => Homescreen::AllLocations(
                self.locations
                    .iter()
                    .map(|l| l.location_name.as_str())
                    .collect(),
            ),
            HomescreenDisplay::InitialClue => Homescreen::Instructions {
                instructions: &self.project.instructions,
                initial_clue: self.project.initial_clue(),
            },
        }
    }

    pub fn content(&self) -> ScreenContent<'_> {
        match self.current_location() {
            Some(location) => ScreenContent::Location {
                name: &location.location_name,
                content: location.content(),
                clue: location.clue(),
            },
            None => ScreenContent::Home(self.homescreen()),
        }
    }

    pub fn tally(&self) -> Option<Tally> {
        match self.project.participant_scoring {
            ParticipantScoring::NotScored => None,
            ParticipantScoring::QrScans => Some(Tally::Score {
                score: self.session.score(),
                max: self.max_score(),
            }),
            ParticipantScoring::LocationsEntered => Some(Tally::Visited {
                visited: self.session.visited_count(),
                total: self.locations.len() as u32,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocationTrigger;
    use pretty_assertions::assert_eq;

    fn project(display: HomescreenDisplay, scoring: ParticipantScoring) -> Project {
        Project {
            id: 1,
            title: "Walk".into(),
            description: "d".into(),
            instructions: "follow the river".into(),
            initial_clue: Some("under the bridge".into()),
            homescreen_display: display,
            participant_scoring: scoring,
            is_published: false,
            username: None,
        }
    }

    fn location(id: i64, name: &str, points: u32, order: i32) -> Location {
        Location {
            id,
            project_id: 1,
            location_name: name.into(),
            location_trigger: LocationTrigger::QrCodeScan,
            location_position: String::new(),
            score_points: points,
            location_order: order,
            clue: None,
            location_content: None,
            username: None,
        }
    }

    #[test]
    fn second_visit_is_not_credited() {
        let mut session = PreviewSession::new();
        let a = location(1, "A", 5, 0);
        assert!(session.visit(&a));
        assert!(!session.visit(&a));
        assert_eq!(session.score(), 5);
        assert_eq!(session.visited_count(), 1);
    }

    #[test]
    fn homescreen_never_changes_tally() {
        let mut preview = Preview::new(
            project(HomescreenDisplay::InitialClue, ParticipantScoring::QrScans),
            vec![location(1, "A", 5, 0)],
        );
        assert!(preview.select(HOMESCREEN_VALUE));
        assert_eq!(preview.session().score(), 0);
        preview.select("1");
        preview.select(HOMESCREEN_VALUE);
        assert_eq!(preview.session().score(), 5);
        assert_eq!(preview.session().visited_count(), 1);
        assert_eq!(preview.session().screen(), Screen::Homescreen);
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let mut preview = Preview::new(
            project(HomescreenDisplay::InitialClue, ParticipantScoring::QrScans),
            vec![location(1, "A", 5, 0)],
        );
        assert!(!preview.select("42"));
        assert!(!preview.select("not-a-number"));
        assert_eq!(preview.session(), &PreviewSession::new());
    }

    #[test]
    fn instructions_homescreen() {
        let preview = Preview::new(
            project(HomescreenDisplay::InitialClue, ParticipantScoring::NotScored),
            vec![],
        );
        assert_eq!(
            preview.content(),
            ScreenContent::Home(Homescreen::Instructions {
                instructions: "follow the river",
                initial_clue: "under the bridge",
            })
        );
        assert_eq!(preview.tally(), None);
    }

    #[test]
    fn location_screen_shows_content_and_clue() {
        let mut with_content = location(2, "B", 3, 0);
        with_content.location_content = Some("<p>hello</p>".into());
        with_content.clue = Some("look up".into());
        let mut preview = Preview::new(
            project(HomescreenDisplay::InitialClue, ParticipantScoring::NotScored),
            vec![with_content, location(3, "C", 1, 1)],
        );

        preview.select("2");
        assert_eq!(preview.selected_value(), "2");
        assert_eq!(
            preview.content(),
            ScreenContent::Location {
                name: "B",
                content: Some("<p>hello</p>"),
                clue: Some("look up"),
            }
        );

        preview.select("3");
        assert_eq!(
            preview.content(),
            ScreenContent::Location {
                name: "C",
                content: None,
                clue: None,
            }
        );
    }

    #[test]
    fn tally_follows_scoring_mode() {
        let locations = vec![location(1, "A", 5, 0), location(2, "B", 3, 1)];
        let mut qr = Preview::new(
            project(HomescreenDisplay::InitialClue, ParticipantScoring::QrScans),
            locations.clone(),
        );
        qr.select("2");
        assert_eq!(qr.tally(), Some(Tally::Score { score: 3, max: 8 }));
        assert_eq!(qr.tally().unwrap().to_string(), "Score: 3/8");

        let mut entered = Preview::new(
            project(HomescreenDisplay::InitialClue, ParticipantScoring::LocationsEntered),
            locations,
        );
        entered.select("1");
        assert_eq!(entered.tally().unwrap().to_string(), "Visited: 1/2");
    }

    #[test]
    fn large_point_values_do_not_overflow_the_tally() {
        let points = 3_000_000_000;
        let mut preview = Preview::new(
            project(HomescreenDisplay::InitialClue, ParticipantScoring::QrScans),
            vec![location(1, "A", points, 0), location(2, "B", points, 1)],
        );
        preview.select("1");
        preview.select("2");
        assert_eq!(preview.max_score(), 6_000_000_000);
        assert_eq!(
            preview.tally(),
            Some(Tally::Score { score: 6_000_000_000, max: 6_000_000_000 })
        );
        assert_eq!(preview.tally().unwrap().to_string(), "Score: 6000000000/6000000000");
    }

    #[test]
    fn locations_are_kept_in_rank_order() {
        let preview = Preview::new(
            project(HomescreenDisplay::AllLocations, ParticipantScoring::NotScored),
            vec![location(2, "Second", 1, 1), location(1, "First", 1, 0)],
        );
        assert_eq!(
            preview.homescreen(),
            Homescreen::AllLocations(vec!["First", "Second"])
        );
    }
}
