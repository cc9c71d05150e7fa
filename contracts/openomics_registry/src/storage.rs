//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the registry.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key         | Type      | Description                          |
//! |-------------|-----------|--------------------------------------|
//! | `Bootstrap` | `Address` | Admin set by `init`; never demoted   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                        | Type              | Description                    |
//! |----------------------------|-------------------|--------------------------------|
//! | `Session(owner, id)`       | `SavedSession`    | One saved allocation model     |
//! | `SessionIds(owner)`        | `Vec<String>`     | Owner's session ids, in order  |
//! | `Schedule(owner, name)`    | `VestingSchedule` | One saved projection           |
//! | `ScheduleNames(owner)`     | `Vec<String>`     | Owner's schedule names         |
//! | `Profile(user)`            | `UserProfile`     | Display profile                |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//! [`read`] and [`write`] apply the bump and are shared with `rbac`, whose
//! role and approval keys live in the same tier.
//!
//! Saving under an existing id or name overwrites the record in place; the
//! index keeps its original position.

use soroban_sdk::{contracttype, Address, Env, IntoVal, String, TryFromVal, Val, Vec};

use crate::types::{SavedSession, UserProfile, VestingSchedule};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Admin installed by `init` (Instance).
    Bootstrap,
    /// Saved session keyed by owner and session id (Persistent).
    Session(Address, String),
    /// Ordered session ids of one owner (Persistent).
    SessionIds(Address),
    /// Saved vesting schedule keyed by owner and name (Persistent).
    Schedule(Address, String),
    /// Ordered schedule names of one owner (Persistent).
    ScheduleNames(Address),
    /// User profile (Persistent).
    Profile(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn bootstrap_admin(env: &Env) -> Option<Address> {
    let admin = env.storage().instance().get(&DataKey::Bootstrap);
    if admin.is_some() {
        bump_instance(env);
    }
    admin
}

pub fn set_bootstrap_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Bootstrap, admin);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

pub(crate) fn bump_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Read `key`, bumping its TTL when present.
pub(crate) fn read<K, T>(env: &Env, key: &K) -> Option<T>
where
    K: IntoVal<Env, Val>,
    T: TryFromVal<Env, Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

pub(crate) fn write<K, T>(env: &Env, key: &K, value: &T)
where
    K: IntoVal<Env, Val>,
    T: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

fn load_index(env: &Env, key: &DataKey) -> Vec<String> {
    read(env, key).unwrap_or_else(|| Vec::new(env))
}

/// Append `entry` to the index at `key` unless already listed.
fn index_insert(env: &Env, key: &DataKey, entry: &String) {
    let mut index = load_index(env, key);
    if !index.contains(entry) {
        index.push_back(entry.clone());
        write(env, key, &index);
    }
}

/// Drop `entry` from the index at `key`.
fn index_remove(env: &Env, key: &DataKey, entry: &String) {
    let mut index = load_index(env, key);
    if let Some(pos) = index.first_index_of(entry) {
        index.remove(pos);
        write(env, key, &index);
    }
}

// ─────────────────────────────────────────────────────────
// Sessions
// ─────────────────────────────────────────────────────────

pub fn save_session(env: &Env, owner: &Address, session: &SavedSession) {
    write(
        env,
        &DataKey::Session(owner.clone(), session.id.clone()),
        session,
    );
    index_insert(env, &DataKey::SessionIds(owner.clone()), &session.id);
}

pub fn load_session(env: &Env, owner: &Address, id: &String) -> Option<SavedSession> {
    read(env, &DataKey::Session(owner.clone(), id.clone()))
}

/// Every session of `owner`, in first-save order.
pub fn load_sessions(env: &Env, owner: &Address) -> Vec<SavedSession> {
    let mut sessions = Vec::new(env);
    for id in load_index(env, &DataKey::SessionIds(owner.clone())).iter() {
        if let Some(session) = load_session(env, owner, &id) {
            sessions.push_back(session);
        }
    }
    sessions
}

// ─────────────────────────────────────────────────────────
// Vesting schedules
// ─────────────────────────────────────────────────────────

pub fn save_schedule(env: &Env, owner: &Address, schedule: &VestingSchedule) {
    write(
        env,
        &DataKey::Schedule(owner.clone(), schedule.name.clone()),
        schedule,
    );
    index_insert(env, &DataKey::ScheduleNames(owner.clone()), &schedule.name);
}

pub fn load_schedule(env: &Env, owner: &Address, name: &String) -> Option<VestingSchedule> {
    read(env, &DataKey::Schedule(owner.clone(), name.clone()))
}

pub fn load_schedules(env: &Env, owner: &Address) -> Vec<VestingSchedule> {
    let mut schedules = Vec::new(env);
    for name in load_index(env, &DataKey::ScheduleNames(owner.clone())).iter() {
        if let Some(schedule) = load_schedule(env, owner, &name) {
            schedules.push_back(schedule);
        }
    }
    schedules
}

/// Remove a schedule. Returns `false` when it did not exist.
pub fn remove_schedule(env: &Env, owner: &Address, name: &String) -> bool {
    let key = DataKey::Schedule(owner.clone(), name.clone());
    if !env.storage().persistent().has(&key) {
        return false;
    }
    env.storage().persistent().remove(&key);
    index_remove(env, &DataKey::ScheduleNames(owner.clone()), name);
    true
}

// ─────────────────────────────────────────────────────────
// Profiles
// ─────────────────────────────────────────────────────────

pub fn save_profile(env: &Env, user: &Address, profile: &UserProfile) {
    write(env, &DataKey::Profile(user.clone()), profile);
}

pub fn load_profile(env: &Env, user: &Address) -> Option<UserProfile> {
    read(env, &DataKey::Profile(user.clone()))
}
