//! Payload encoded in a location's QR code.
//!
//! The participant app decodes this string after a scan, so the format is a
//! contract: `<project_id>,<location_id>,<score_points>`, decimal integers
//! separated by single commas.

use std::fmt;
use std::str::FromStr;

use crate::model::Location;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrPayloadError {
    #[error("expected 3 comma-separated fields, found {0}")]
    WrongArity(usize),
    #[error("{0:?} is not a valid number")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrPayload {
    pub project_id: i64,
    pub location_id: i64,
    pub score_points: u32,
}

impl QrPayload {
    pub fn for_location(location: &Location) -> Self {
        Self {
            project_id: location.project_id,
            location_id: location.id,
            score_points: location.score_points,
        }
    }
}

impl fmt::Display for QrPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.project_id, self.location_id, self.score_points)
    }
}

fn number<T: FromStr>(part: &str) -> Result<T, QrPayloadError> {
    part.parse()
        .map_err(|_| QrPayloadError::InvalidNumber(part.to_string()))
}

impl FromStr for QrPayload {
    type Err = QrPayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        let [project_id, location_id, score_points] = parts.as_slice() else {
            return Err(QrPayloadError::WrongArity(parts.len()));
        };
        Ok(Self {
            project_id: number(project_id)?,
            location_id: number(location_id)?,
            score_points: number(score_points)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_stable_format() {
        let payload = QrPayload {
            project_id: 12,
            location_id: 340,
            score_points: 5,
        };
        assert_eq!(payload.to_string(), "12,340,5");
        assert_eq!("12,340,5".parse::<QrPayload>(), Ok(payload));
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert_eq!("1,2".parse::<QrPayload>(), Err(QrPayloadError::WrongArity(2)));
        assert_eq!("1,2,3,4".parse::<QrPayload>(), Err(QrPayloadError::WrongArity(4)));
        assert_eq!(
            "1, 2,3".parse::<QrPayload>(),
            Err(QrPayloadError::InvalidNumber(" 2".into()))
        );
        assert_eq!(
            "1,2,-3".parse::<QrPayload>(),
            Err(QrPayloadError::InvalidNumber("-3".into()))
        );
    }
}
