//! Hash routes of the single-page app.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    Locations { project_id: i64 },
    Preview { project_id: i64 },
    NotFound,
}

impl Route {
    /// Parses `location.hash`, with or without the leading `#`.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["projects"] => Route::Projects,
            ["projects", id, page] => match (id.parse::<i64>(), *page) {
                (Ok(project_id), "locations") => Route::Locations { project_id },
                (Ok(project_id), "preview") => Route::Preview { project_id },
                _ => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home | Route::NotFound => write!(f, "#/"),
            Route::Projects => write!(f, "#/projects"),
            Route::Locations { project_id } => write!(f, "#/projects/{project_id}/locations"),
            Route::Preview { project_id } => write!(f, "#/projects/{project_id}/preview"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/projects"), Route::Projects);
        assert_eq!(Route::from_hash("#/projects/"), Route::Projects);
        assert_eq!(
            Route::from_hash("#/projects/12/locations"),
            Route::Locations { project_id: 12 }
        );
        assert_eq!(
            Route::from_hash("projects/12/preview"),
            Route::Preview { project_id: 12 }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_hash("#/projects/abc/locations"), Route::NotFound);
        assert_eq!(Route::from_hash("#/projects/1/settings"), Route::NotFound);
        assert_eq!(Route::from_hash("#/elsewhere"), Route::NotFound);
    }

    #[test]
    fn href_round_trips() {
        for route in [
            Route::Home,
            Route::Projects,
            Route::Locations { project_id: 3 },
            Route::Preview { project_id: 3 },
        ] {
            assert_eq!(Route::from_hash(&route.href()), route);
        }
    }
}
