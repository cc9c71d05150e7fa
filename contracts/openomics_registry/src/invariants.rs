#![allow(dead_code)]

extern crate std;

use soroban_sdk::{Address, String, Vec};

use crate::types::{SavedSession, VestingSchedule, MAX_PERCENT, MAX_RECIPIENTS};
use crate::Error;

/// INV-1: Stored sessions carry a name, an id and bounded recipients.
pub fn assert_session_well_formed(session: &SavedSession) {
    assert!(!session.id.is_empty(), "INV-1 violated: empty session id");
    assert!(
        !session.session_name.is_empty(),
        "INV-1 violated: empty session name"
    );
    assert!(
        session.recipients.len() <= MAX_RECIPIENTS,
        "INV-1 violated: {} recipients",
        session.recipients.len()
    );
    for r in session.recipients.iter() {
        assert!(
            r.allocation_percentage <= MAX_PERCENT,
            "INV-1 violated: recipient above 100% ({})",
            r.allocation_percentage
        );
    }
}

/// INV-2: A stored schedule is owned by the address it is stored under.
pub fn assert_schedule_owned(schedule: &VestingSchedule, owner: &Address) {
    assert_eq!(
        &schedule.admin, owner,
        "INV-2 violated: schedule stored under another owner"
    );
    assert!(schedule.token_price >= 0, "INV-2 violated: negative price");
}

/// INV-3: Listings never repeat a key.
pub fn assert_unique(keys: &Vec<String>) {
    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            assert_ne!(
                keys.get(i),
                keys.get(j),
                "INV-3 violated: duplicate entry at {} and {}",
                i,
                j
            );
        }
    }
}

pub fn session_ids(sessions: &Vec<SavedSession>) -> Vec<String> {
    let mut ids = Vec::new(sessions.env());
    for s in sessions.iter() {
        ids.push_back(s.id);
    }
    ids
}

pub fn schedule_names(schedules: &Vec<VestingSchedule>) -> Vec<String> {
    let mut names = Vec::new(schedules.env());
    for s in schedules.iter() {
        names.push_back(s.name);
    }
    names
}

/// Runs every listing invariant for `owner`.
pub fn assert_all_listing_invariants(
    owner: &Address,
    sessions: &Vec<SavedSession>,
    schedules: &Vec<VestingSchedule>,
) {
    for s in sessions.iter() {
        assert_session_well_formed(&s);
    }
    for s in schedules.iter() {
        assert_schedule_owned(&s, owner);
    }
    assert_unique(&session_ids(sessions));
    assert_unique(&schedule_names(schedules));
}

/// Host error raised by `panic_with_error!` for `err`, as seen by `try_*` calls.
pub fn contract_error(err: Error) -> soroban_sdk::Error {
    soroban_sdk::Error::from_contract_error(err as u32)
}
