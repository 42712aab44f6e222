use common::model::{Location, LocationTrigger};
use common::ordering::{self, OrderingError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert,
    Delete(usize),
    Swap(usize, i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Insert),
        (0usize..16).prop_map(Op::Delete),
        ((0usize..16), -3i32..=3).prop_map(|(i, d)| Op::Swap(i, d)),
    ]
}

fn new_location(id: i64, order: i32) -> Location {
    Location {
        id,
        project_id: 1,
        location_name: format!("Stop {id}"),
        location_trigger: LocationTrigger::LocationEntry,
        location_position: String::new(),
        score_points: 1,
        location_order: order,
        clue: None,
        location_content: None,
        username: None,
    }
}

fn orders(locations: &[Location]) -> Vec<i32> {
    locations.iter().map(|l| l.location_order).collect()
}

proptest! {
    #[test]
    fn ranks_stay_contiguous(ops in prop::collection::vec(op(), 0..60)) {
        let mut locations: Vec<Location> = Vec::new();
        let mut next_id = 1;

        for op in ops {
            match op {
                Op::Insert => {
                    let order = ordering::next_order(&locations);
                    ordering::insert(&mut locations, new_location(next_id, order));
                    next_id += 1;
                }
                Op::Delete(index) => {
                    if locations.is_empty() {
                        continue;
                    }
                    let victim = locations[index % locations.len()].clone();
                    let before = locations.clone();
                    let removal = ordering::remove(&mut locations, victim.id).unwrap();

                    prop_assert_eq!(removal.removed.id, victim.id);
                    for old in &before {
                        if old.id == victim.id {
                            continue;
                        }
                        let now = locations.iter().find(|l| l.id == old.id).unwrap();
                        let expected = if old.location_order > victim.location_order {
                            old.location_order - 1
                        } else {
                            old.location_order
                        };
                        prop_assert_eq!(now.location_order, expected);
                    }
                }
                Op::Swap(index, delta) => {
                    if locations.is_empty() {
                        continue;
                    }
                    let id = locations[index % locations.len()].id;
                    let before = orders(&locations);
                    match ordering::swap(&mut locations, id, delta) {
                        Ok(_) => prop_assert!(delta == 1 || delta == -1),
                        Err(OrderingError::InvalidDelta(_)) | Err(OrderingError::AtBoundary { .. }) => {
                            prop_assert_eq!(orders(&locations), before);
                        }
                        Err(other) => prop_assert!(false, "unexpected error {other}"),
                    }
                }
            }

            prop_assert!(ordering::is_contiguous(&locations));
            let sorted = orders(&locations);
            prop_assert_eq!(sorted, (0..locations.len() as i32).collect::<Vec<_>>());
        }
    }
}
