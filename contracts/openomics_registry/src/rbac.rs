//! # RBAC: Roles and Approvals
//!
//! Three user roles gate registry administration:
//!
//! ```text
//! Admin  ── assigns roles, decides approvals, lists approvals
//! User   ── regular calculator user
//! Guest  ── default for any address never assigned a role
//! ```
//!
//! Approval is a separate per-user flag (`Pending`, `Approved`, `Rejected`)
//! that users request and admins decide. Admins count as approved.
//!
//! ## Storage layout
//!
//! - `RbacKey::Role(addr)`     → `UserRole`
//! - `RbacKey::Approval(addr)` → `ApprovalStatus`
//! - `RbacKey::Requests`       → `Vec<Address>`, every address with an approval entry,
//!   capped at [`MAX_APPROVAL_ENTRIES`]
//!
//! All three are persistent entries, TTL-bumped through the helpers in
//! [`storage`] on every read and write.
//!
//! ## Event emissions
//!
//! | Event topic prefix | Trigger |
//! |--------------------|---------|
//! | `role_set`         | Role assigned or replaced |
//! | `approval`         | Approval requested or decided |
//!
//! ## Threat model notes
//!
//! - The bootstrap admin installed by `init` can never be demoted.
//! - Only admins mutate roles or approvals of other addresses.
//! - Any address can request approval, so the listing is bounded. New
//!   addresses are refused with `Error::ApprovalQueueFull` once it is full;
//!   addresses already listed can still be decided and re-request.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::events;
use crate::storage;
use crate::Error;

// ─────────────────────────────────────────────────────────
// Enums
// ─────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// One row of the approval listing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserApprovalInfo {
    pub principal: Address,
    pub status: ApprovalStatus,
}

/// Addresses the approval listing may hold.
pub const MAX_APPROVAL_ENTRIES: u32 = 200;

// ─────────────────────────────────────────────────────────
// Storage keys
// ─────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RbacKey {
    Role(Address),
    Approval(Address),
    Requests,
}

// ─────────────────────────────────────────────────────────
// Storage helpers (private)
// ─────────────────────────────────────────────────────────

fn store_role(env: &Env, address: &Address, role: UserRole) {
    storage::write(env, &RbacKey::Role(address.clone()), &role);
}

fn get_approval(env: &Env, address: &Address) -> Option<ApprovalStatus> {
    storage::read(env, &RbacKey::Approval(address.clone()))
}

fn load_requests(env: &Env) -> Vec<Address> {
    storage::read(env, &RbacKey::Requests).unwrap_or_else(|| Vec::new(env))
}

/// Store `status` for `address`, listing first-time addresses in
/// `RbacKey::Requests`. Panics with `Error::ApprovalQueueFull` once the
/// listing holds [`MAX_APPROVAL_ENTRIES`] addresses.
fn store_approval(env: &Env, address: &Address, status: ApprovalStatus) {
    let key = RbacKey::Approval(address.clone());
    if !env.storage().persistent().has(&key) {
        let mut requests = load_requests(env);
        if requests.len() >= MAX_APPROVAL_ENTRIES {
            panic_with_error_rbac(env, Error::ApprovalQueueFull);
        }
        requests.push_back(address.clone());
        storage::write(env, &RbacKey::Requests, &requests);
    }
    storage::write(env, &key, &status);
}

/// Role of `address`; unassigned addresses are guests.
pub fn get_role(env: &Env, address: &Address) -> UserRole {
    storage::read(env, &RbacKey::Role(address.clone())).unwrap_or(UserRole::Guest)
}

// ─────────────────────────────────────────────────────────
// Initialisation
// ─────────────────────────────────────────────────────────

/// Install the bootstrap admin. Panics with `Error::AlreadyInitialized` if
/// called again.
pub fn init_admin(env: &Env, admin: &Address) {
    if storage::bootstrap_admin(env).is_some() {
        panic_with_error_rbac(env, Error::AlreadyInitialized);
    }
    storage::set_bootstrap_admin(env, admin);
    store_role(env, admin, UserRole::Admin);
    emit_role(env, admin, UserRole::Admin, None);
}

// ─────────────────────────────────────────────────────────
// Role assignment
// ─────────────────────────────────────────────────────────

/// Assign `role` to `target`.
///
/// - `caller` must be an admin.
/// - The bootstrap admin cannot be given any other role.
///
/// Emits a `role_set` event.
pub fn assign_role(env: &Env, caller: &Address, target: &Address, role: UserRole) {
    require_admin(env, caller);

    if role != UserRole::Admin && storage::bootstrap_admin(env).as_ref() == Some(target) {
        panic_with_error_rbac(env, Error::NotAuthorized);
    }

    store_role(env, target, role);
    emit_role(env, target, role, Some(caller.clone()));
}

// ─────────────────────────────────────────────────────────
// Approvals
// ─────────────────────────────────────────────────────────

/// Mark `caller` as waiting for approval. Already approved callers stay
/// approved.
pub fn request_approval(env: &Env, caller: &Address) {
    if get_approval(env, caller) == Some(ApprovalStatus::Approved) {
        return;
    }
    store_approval(env, caller, ApprovalStatus::Pending);
    events::emit_approval_changed(env, caller.clone(), ApprovalStatus::Pending, None);
}

/// Record an admin's decision on `user`.
pub fn set_approval(env: &Env, caller: &Address, user: &Address, status: ApprovalStatus) {
    require_admin(env, caller);
    store_approval(env, user, status);
    events::emit_approval_changed(env, user.clone(), status, Some(caller.clone()));
}

pub fn is_approved(env: &Env, user: &Address) -> bool {
    is_admin(env, user) || get_approval(env, user) == Some(ApprovalStatus::Approved)
}

/// Every approval entry, in first-request order. Admin only.
pub fn list_approvals(env: &Env, caller: &Address) -> Vec<UserApprovalInfo> {
    require_admin(env, caller);
    let requests = load_requests(env);

    let mut out = Vec::new(env);
    for principal in requests.iter() {
        if let Some(status) = get_approval(env, &principal) {
            out.push_back(UserApprovalInfo { principal, status });
        }
    }
    out
}

/// The approval entry of `user`, if any, as a zero- or one-element list.
pub fn approvals_for(env: &Env, user: &Address) -> Vec<UserApprovalInfo> {
    let mut out = Vec::new(env);
    if let Some(status) = get_approval(env, user) {
        out.push_back(UserApprovalInfo {
            principal: user.clone(),
            status,
        });
    }
    out
}

// ─────────────────────────────────────────────────────────
// Access guards
// ─────────────────────────────────────────────────────────

pub fn is_admin(env: &Env, address: &Address) -> bool {
    get_role(env, address) == UserRole::Admin
}

/// Panics with `Error::NotAuthorized` unless `address` is an admin.
pub fn require_admin(env: &Env, address: &Address) {
    if !is_admin(env, address) {
        panic_with_error_rbac(env, Error::NotAuthorized);
    }
}

// ─────────────────────────────────────────────────────────
// Internal helpers
// ─────────────────────────────────────────────────────────

/// Topic: `(role_set, target_address, role_symbol)`
/// Data:  `Option<caller_address>`
fn emit_role(env: &Env, target: &Address, role: UserRole, by: Option<Address>) {
    env.events().publish(
        (symbol_short!("role_set"), target.clone(), role_to_symbol(role)),
        by,
    );
}

pub(crate) fn role_to_symbol(role: UserRole) -> Symbol {
    match role {
        UserRole::Admin => symbol_short!("admin"),
        UserRole::User => symbol_short!("user"),
        UserRole::Guest => symbol_short!("guest"),
    }
}

#[inline(always)]
fn panic_with_error_rbac(env: &Env, err: Error) -> ! {
    soroban_sdk::panic_with_error!(env, err)
}
