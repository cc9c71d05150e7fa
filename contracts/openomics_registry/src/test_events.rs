extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{ApprovalChanged, ProfileSaved, ScheduleDeleted, ScheduleSaved, SessionSaved};
use crate::{
    ApprovalStatus, OpenomicsRegistry, OpenomicsRegistryClient, SavedSession, UserProfile,
    UserRole, VestingSchedule, VestingType,
};

fn setup_with_init() -> (Env, OpenomicsRegistryClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(OpenomicsRegistry, ());
    let client = OpenomicsRegistryClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.init(&admin);
    (env, client, admin)
}

fn empty_session(env: &Env, id: &str) -> SavedSession {
    SavedSession {
        id: String::from_str(env, id),
        session_name: String::from_str(env, "Events"),
        total_supply: 1_000,
        recipients: vec![env],
        timestamp: 0,
        decimals: 8,
        enable_inflation: false,
        inflation_rate: 0,
        inflation_start_year: 2026,
    }
}

fn schedule(env: &Env, owner: &Address) -> VestingSchedule {
    VestingSchedule {
        name: String::from_str(env, "Seed"),
        vesting_type: VestingType::Graded,
        total_tokens: 42_000,
        token_price: 0,
        cliff_period: 0,
        vesting_duration: 24,
        start_date: 0,
        admin: owner.clone(),
    }
}

#[test]
fn test_init_emits_role_event() {
    let (env, client, admin) = setup_with_init();

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("role_set").into_val(&env),
        admin.into_val(&env),
        symbol_short!("admin").into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let by: Option<Address> = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(by, None);
}

#[test]
fn test_assign_role_event_names_caller() {
    let (env, client, admin) = setup_with_init();
    let user = Address::generate(&env);
    client.assign_user_role(&admin, &user, &UserRole::User);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("role_set").into_val(&env),
        user.into_val(&env),
        symbol_short!("user").into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let by: Option<Address> = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(by, Some(admin));
}

#[test]
fn test_session_saved_event() {
    let (env, client, _admin) = setup_with_init();
    let owner = Address::generate(&env);
    let session = empty_session(&env, "session-1");
    client.save_session(&owner, &session);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("sess_save").into_val(&env),
        owner.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let data: SessionSaved = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        SessionSaved {
            owner,
            session_id: session.id,
            recipients: 0,
        }
    );
}

#[test]
fn test_schedule_saved_and_deleted_events() {
    let (env, client, _admin) = setup_with_init();
    let owner = Address::generate(&env);
    let schedule = schedule(&env, &owner);
    client.save_vesting_schedule(&owner, &schedule);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("sched_set").into_val(&env),
        owner.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let data: ScheduleSaved = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        ScheduleSaved {
            owner: owner.clone(),
            name: schedule.name.clone(),
            total_tokens: 42_000,
        }
    );

    client.delete_vesting_schedule(&owner, &schedule.name);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("sched_del").into_val(&env),
        owner.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let data: ScheduleDeleted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        ScheduleDeleted {
            owner,
            name: schedule.name,
        }
    );
}

#[test]
fn test_approval_events() {
    let (env, client, admin) = setup_with_init();
    let user = Address::generate(&env);

    client.request_approval(&user);
    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("approval").into_val(&env),
        user.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let data: ApprovalChanged = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        ApprovalChanged {
            user: user.clone(),
            status: ApprovalStatus::Pending,
            by: None,
        }
    );

    client.set_approval(&admin, &user, &ApprovalStatus::Rejected);
    let last_event = env.events().all().last().expect("No events found");
    let data: ApprovalChanged = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        ApprovalChanged {
            user,
            status: ApprovalStatus::Rejected,
            by: Some(admin),
        }
    );
}

#[test]
fn test_profile_saved_event() {
    let (env, client, _admin) = setup_with_init();
    let user = Address::generate(&env);
    let name = String::from_str(&env, "Ada");
    client.save_profile(&user, &UserProfile { name: name.clone() });

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("profile").into_val(&env),
        user.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let data: ProfileSaved = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, ProfileSaved { user, name });
}
