//! # Openomics Registry Contract
//!
//! Persistence and approval service behind the Openomics calculator. It
//! exposes the single Soroban contract `OpenomicsRegistry`:
//!
//! | Area            | Entry Point(s)                                                  |
//! |-----------------|-----------------------------------------------------------------|
//! | Bootstrap       | [`OpenomicsRegistry::init`]                                     |
//! | Roles           | `assign_user_role`, `user_role`, `is_admin`                     |
//! | Approvals       | `request_approval`, `set_approval`, `is_approved`, `list_approvals`, `approvals_for` |
//! | Profiles        | `save_profile`, `profile_of`                                    |
//! | Sessions        | `save_session`, `get_session`, `get_all_sessions`               |
//! | Schedules       | `save_vesting_schedule`, `get_vesting_schedule`, `get_all_vesting_schedules`, `delete_vesting_schedule` |
//!
//! ## Architecture
//!
//! Roles and approvals live in [`rbac`]. Storage access is fully delegated to
//! [`storage`]. This file holds the entry points, record validation and event
//! emissions. Every mutation publishes an event from [`events`], which is the
//! registry's audit log.
//!
//! Saving sessions and schedules is open to any authenticated owner; records
//! are scoped to that owner.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env, String, Vec};

pub mod events;
pub mod rbac;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use rbac::{ApprovalStatus, UserApprovalInfo, UserRole, MAX_APPROVAL_ENTRIES};
pub use types::{
    Recipient, SavedSession, Schedule, UserProfile, VestingCliff, VestingSchedule, VestingStep,
    VestingType, MAX_PERCENT, MAX_RECIPIENTS, PERCENT_SCALE, PRICE_SCALE,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    SessionNotFound = 3,
    ScheduleNotFound = 4,
    EmptyName = 5,
    TooManyRecipients = 6,
    InvalidPercentage = 7,
    InvalidAmount = 8,
    ApprovalQueueFull = 9,
}

#[contract]
pub struct OpenomicsRegistry;

#[contractimpl]
impl OpenomicsRegistry {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Install `admin` as the bootstrap admin.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    pub fn init(env: Env, admin: Address) {
        admin.require_auth();
        rbac::init_admin(&env, &admin);
    }

    // ─────────────────────────────────────────────────────────
    // Roles
    // ─────────────────────────────────────────────────────────

    /// Assign `role` to `user`. `caller` must be an admin.
    pub fn assign_user_role(env: Env, caller: Address, user: Address, role: UserRole) {
        caller.require_auth();
        rbac::assign_role(&env, &caller, &user, role);
    }

    /// Role of `user`; `Guest` when never assigned.
    pub fn user_role(env: Env, user: Address) -> UserRole {
        rbac::get_role(&env, &user)
    }

    pub fn is_admin(env: Env, user: Address) -> bool {
        rbac::is_admin(&env, &user)
    }

    // ─────────────────────────────────────────────────────────
    // Approvals
    // ─────────────────────────────────────────────────────────

    /// Panics with `Error::ApprovalQueueFull` for a first-time caller once
    /// [`MAX_APPROVAL_ENTRIES`] addresses are listed.
    pub fn request_approval(env: Env, caller: Address) {
        caller.require_auth();
        rbac::request_approval(&env, &caller);
    }

    /// Decide `user`'s approval. `caller` must be an admin.
    pub fn set_approval(env: Env, caller: Address, user: Address, status: ApprovalStatus) {
        caller.require_auth();
        rbac::set_approval(&env, &caller, &user, status);
    }

    /// `true` for approved users and for every admin.
    pub fn is_approved(env: Env, user: Address) -> bool {
        rbac::is_approved(&env, &user)
    }

    /// All approval entries. `caller` must be an admin.
    pub fn list_approvals(env: Env, caller: Address) -> Vec<UserApprovalInfo> {
        caller.require_auth();
        rbac::list_approvals(&env, &caller)
    }

    pub fn approvals_for(env: Env, user: Address) -> Vec<UserApprovalInfo> {
        rbac::approvals_for(&env, &user)
    }

    // ─────────────────────────────────────────────────────────
    // Profiles
    // ─────────────────────────────────────────────────────────

    pub fn save_profile(env: Env, caller: Address, profile: UserProfile) {
        caller.require_auth();
        if profile.name.is_empty() {
            panic_with_error!(&env, Error::EmptyName);
        }
        storage::save_profile(&env, &caller, &profile);
        events::emit_profile_saved(&env, caller, profile.name);
    }

    pub fn profile_of(env: Env, user: Address) -> Option<UserProfile> {
        storage::load_profile(&env, &user)
    }

    // ─────────────────────────────────────────────────────────
    // Sessions
    // ─────────────────────────────────────────────────────────

    /// Save `session` under `owner`, replacing any session with the same id.
    ///
    /// Rejects empty ids and names, more than [`MAX_RECIPIENTS`] recipients,
    /// and any recipient above 100%.
    pub fn save_session(env: Env, owner: Address, session: SavedSession) {
        owner.require_auth();

        if session.id.is_empty() || session.session_name.is_empty() {
            panic_with_error!(&env, Error::EmptyName);
        }
        if session.recipients.len() > MAX_RECIPIENTS {
            panic_with_error!(&env, Error::TooManyRecipients);
        }
        for recipient in session.recipients.iter() {
            if recipient.allocation_percentage > MAX_PERCENT {
                panic_with_error!(&env, Error::InvalidPercentage);
            }
        }

        storage::save_session(&env, &owner, &session);
        events::emit_session_saved(&env, owner, session.id, session.recipients.len());
    }

    /// Panics with `Error::SessionNotFound` for unknown ids.
    pub fn get_session(env: Env, owner: Address, id: String) -> SavedSession {
        match storage::load_session(&env, &owner, &id) {
            Some(session) => session,
            None => panic_with_error!(&env, Error::SessionNotFound),
        }
    }

    pub fn get_all_sessions(env: Env, owner: Address) -> Vec<SavedSession> {
        storage::load_sessions(&env, &owner)
    }

    // ─────────────────────────────────────────────────────────
    // Vesting schedules
    // ─────────────────────────────────────────────────────────

    /// Save `schedule` under `owner`, keyed by name. The stored `admin` is
    /// always `owner`.
    pub fn save_vesting_schedule(env: Env, owner: Address, schedule: VestingSchedule) {
        owner.require_auth();

        if schedule.name.is_empty() {
            panic_with_error!(&env, Error::EmptyName);
        }
        if schedule.token_price < 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let schedule = VestingSchedule {
            admin: owner.clone(),
            ..schedule
        };
        storage::save_schedule(&env, &owner, &schedule);
        events::emit_schedule_saved(&env, owner, schedule.name, schedule.total_tokens);
    }

    /// Panics with `Error::ScheduleNotFound` for unknown names.
    pub fn get_vesting_schedule(env: Env, owner: Address, name: String) -> VestingSchedule {
        match storage::load_schedule(&env, &owner, &name) {
            Some(schedule) => schedule,
            None => panic_with_error!(&env, Error::ScheduleNotFound),
        }
    }

    pub fn get_all_vesting_schedules(env: Env, owner: Address) -> Vec<VestingSchedule> {
        storage::load_schedules(&env, &owner)
    }

    pub fn delete_vesting_schedule(env: Env, owner: Address, name: String) {
        owner.require_auth();
        if !storage::remove_schedule(&env, &owner, &name) {
            panic_with_error!(&env, Error::ScheduleNotFound);
        }
        events::emit_schedule_deleted(&env, owner, name);
    }
}
