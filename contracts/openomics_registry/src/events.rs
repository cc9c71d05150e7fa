use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::rbac::ApprovalStatus;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionSaved {
    pub owner: Address,
    pub session_id: String,
    pub recipients: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScheduleSaved {
    pub owner: Address,
    pub name: String,
    pub total_tokens: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScheduleDeleted {
    pub owner: Address,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalChanged {
    pub user: Address,
    pub status: ApprovalStatus,
    /// Deciding admin; `None` when the user requested approval.
    pub by: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileSaved {
    pub user: Address,
    pub name: String,
}

pub fn emit_session_saved(env: &Env, owner: Address, session_id: String, recipients: u32) {
    let topics = (symbol_short!("sess_save"), owner.clone());
    let data = SessionSaved {
        owner,
        session_id,
        recipients,
    };
    env.events().publish(topics, data);
}

pub fn emit_schedule_saved(env: &Env, owner: Address, name: String, total_tokens: u64) {
    let topics = (symbol_short!("sched_set"), owner.clone());
    let data = ScheduleSaved {
        owner,
        name,
        total_tokens,
    };
    env.events().publish(topics, data);
}

pub fn emit_schedule_deleted(env: &Env, owner: Address, name: String) {
    let topics = (symbol_short!("sched_del"), owner.clone());
    let data = ScheduleDeleted { owner, name };
    env.events().publish(topics, data);
}

pub fn emit_approval_changed(
    env: &Env,
    user: Address,
    status: ApprovalStatus,
    by: Option<Address>,
) {
    let topics = (symbol_short!("approval"), user.clone());
    let data = ApprovalChanged { user, status, by };
    env.events().publish(topics, data);
}

pub fn emit_profile_saved(env: &Env, user: Address, name: String) {
    let topics = (symbol_short!("profile"), user.clone());
    let data = ProfileSaved { user, name };
    env.events().publish(topics, data);
}
