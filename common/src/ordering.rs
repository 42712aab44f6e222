//! Rank bookkeeping for the locations of one project.
//!
//! Ranks (`location_order`) within a project always form `0..n`: no gaps, no
//! duplicates. Every function here keeps that invariant on the slice it is
//! given and reports which rows changed so the caller can persist them.

use std::collections::HashSet;

use crate::model::Location;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderingError {
    /// Swaps move a location by exactly one rank.
    #[error("a location can only move by one position, got {0}")]
    InvalidDelta(i32),

    /// The location is already first (moving up) or last (moving down).
    #[error("location {id} cannot move by {delta}: no neighbour at that rank")]
    AtBoundary { id: i64, delta: i32 },

    #[error("location {0} is not in this project")]
    NotFound(i64),
}

/// Result of removing a location: the removed row and every row whose rank
/// was shifted down to close the gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub removed: Location,
    pub shifted: Vec<Location>,
}

/// Sorts ascending by rank.
pub fn sort_by_order(locations: &mut [Location]) {
    locations.sort_by_key(|l| l.location_order);
}

/// Rank for a location appended to the list.
pub fn next_order(locations: &[Location]) -> i32 {
    locations
        .iter()
        .map(|l| l.location_order)
        .max()
        .map_or(0, |max| max + 1)
}

/// Whether ranks are exactly `0..len`.
pub fn is_contiguous(locations: &[Location]) -> bool {
    let ranks: HashSet<i32> = locations.iter().map(|l| l.location_order).collect();
    ranks.len() == locations.len() && (0..locations.len() as i32).all(|r| ranks.contains(&r))
}

/// Inserts a stored location and restores rank order.
pub fn insert(locations: &mut Vec<Location>, location: Location) {
    locations.push(location);
    sort_by_order(locations);
}

/// Replaces the row with the same id, keeping rank order.
pub fn replace(locations: &mut [Location], location: Location) -> Result<(), OrderingError> {
    let slot = locations
        .iter_mut()
        .find(|l| l.id == location.id)
        .ok_or(OrderingError::NotFound(location.id))?;
    *slot = location;
    sort_by_order(locations);
    Ok(())
}

/// Removes a location and decrements every rank above it.
pub fn remove(locations: &mut Vec<Location>, id: i64) -> Result<Removal, OrderingError> {
    let index = locations
        .iter()
        .position(|l| l.id == id)
        .ok_or(OrderingError::NotFound(id))?;
    let removed = locations.remove(index);

    let mut shifted = Vec::new();
    for location in locations.iter_mut() {
        if location.location_order > removed.location_order {
            location.location_order -= 1;
            shifted.push(location.clone());
        }
    }
    sort_by_order(locations);

    Ok(Removal { removed, shifted })
}

/// Exchanges the rank of `id` with its neighbour at `rank + delta`.
///
/// `delta` is `-1` (move up, toward rank 0) or `1` (move down). On error the
/// slice is untouched. On success both updated rows are returned, moved
/// location first.
pub fn swap(
    locations: &mut [Location],
    id: i64,
    delta: i32,
) -> Result<(Location, Location), OrderingError> {
    if delta != 1 && delta != -1 {
        return Err(OrderingError::InvalidDelta(delta));
    }

    let target = locations
        .iter()
        .position(|l| l.id == id)
        .ok_or(OrderingError::NotFound(id))?;
    let target_order = locations[target].location_order;
    let neighbour = locations
        .iter()
        .position(|l| l.location_order == target_order + delta)
        .ok_or(OrderingError::AtBoundary { id, delta })?;

    locations[target].location_order = target_order + delta;
    locations[neighbour].location_order = target_order;
    let updated = (locations[target].clone(), locations[neighbour].clone());
    sort_by_order(locations);

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocationTrigger;
    use pretty_assertions::assert_eq;

    fn location(id: i64, order: i32) -> Location {
        Location {
            id,
            project_id: 1,
            location_name: format!("L{id}"),
            location_trigger: LocationTrigger::LocationEntry,
            location_position: String::new(),
            score_points: 1,
            location_order: order,
            clue: None,
            location_content: None,
            username: None,
        }
    }

    fn ids(locations: &[Location]) -> Vec<i64> {
        locations.iter().map(|l| l.id).collect()
    }

    fn orders(locations: &[Location]) -> Vec<i32> {
        locations.iter().map(|l| l.location_order).collect()
    }

    #[test]
    fn next_order_starts_at_zero() {
        assert_eq!(next_order(&[]), 0);
        assert_eq!(next_order(&[location(1, 0), location(2, 1)]), 2);
    }

    #[test]
    fn remove_closes_the_gap() {
        let mut list = vec![location(1, 0), location(2, 1), location(3, 2), location(4, 3)];
        let removal = remove(&mut list, 2).unwrap();

        assert_eq!(removal.removed.id, 2);
        assert_eq!(ids(&removal.shifted), vec![3, 4]);
        assert_eq!(ids(&list), vec![1, 3, 4]);
        assert_eq!(orders(&list), vec![0, 1, 2]);
    }

    #[test]
    fn removing_the_last_shifts_nothing() {
        let mut list = vec![location(1, 0), location(2, 1)];
        let removal = remove(&mut list, 2).unwrap();
        assert!(removal.shifted.is_empty());
        assert!(is_contiguous(&list));
    }

    #[test]
    fn swap_moves_up_and_down() {
        let mut list = vec![location(1, 0), location(2, 1), location(3, 2)];

        let (moved, other) = swap(&mut list, 3, -1).unwrap();
        assert_eq!((moved.id, moved.location_order), (3, 1));
        assert_eq!((other.id, other.location_order), (2, 2));
        assert_eq!(ids(&list), vec![1, 3, 2]);

        swap(&mut list, 1, 1).unwrap();
        assert_eq!(ids(&list), vec![3, 1, 2]);
        assert_eq!(orders(&list), vec![0, 1, 2]);
    }

    #[test]
    fn swap_rejects_other_deltas() {
        let mut list = vec![location(1, 0), location(2, 1), location(3, 2)];
        let before = list.clone();
        for delta in [0, 2, -2, 5] {
            assert_eq!(swap(&mut list, 2, delta), Err(OrderingError::InvalidDelta(delta)));
        }
        assert_eq!(list, before);
    }

    #[test]
    fn swap_at_boundary_is_rejected() {
        let mut list = vec![location(1, 0), location(2, 1)];
        let before = list.clone();
        assert_eq!(
            swap(&mut list, 1, -1),
            Err(OrderingError::AtBoundary { id: 1, delta: -1 })
        );
        assert_eq!(
            swap(&mut list, 2, 1),
            Err(OrderingError::AtBoundary { id: 2, delta: 1 })
        );
        assert_eq!(list, before);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut list = vec![location(1, 0)];
        assert_eq!(swap(&mut list, 9, 1), Err(OrderingError::NotFound(9)));
        assert_eq!(remove(&mut list, 9), Err(OrderingError::NotFound(9)));
        assert_eq!(replace(&mut list, location(9, 0)), Err(OrderingError::NotFound(9)));
    }

    #[test]
    fn contiguity_check() {
        assert!(is_contiguous(&[]));
        assert!(is_contiguous(&[location(1, 1), location(2, 0)]));
        assert!(!is_contiguous(&[location(1, 0), location(2, 2)]));
        assert!(!is_contiguous(&[location(1, 0), location(2, 0)]));
    }

    #[test]
    fn replace_keeps_rank_order() {
        let mut list = vec![location(1, 0), location(2, 1)];
        let mut renamed = location(2, 1);
        renamed.location_name = "Renamed".into();
        replace(&mut list, renamed).unwrap();
        assert_eq!(list[1].location_name, "Renamed");
    }
}
