//! # Types
//!
//! Records persisted by the registry. They mirror the calculator's JSON
//! records field for field, with two differences forced by the ledger:
//!
//! ### Fixed point instead of floats
//!
//! | Quantity     | Type   | Scale              | Example               |
//! |--------------|--------|--------------------|-----------------------|
//! | Percentages  | `u32`  | [`PERCENT_SCALE`]  | `20%` → `200_000`     |
//! | Token price  | `i128` | [`PRICE_SCALE`]    | `$0.10` → `1_000_000` |
//!
//! ### Owner-scoped records
//!
//! Every session and schedule belongs to the address that saved it. A
//! schedule's `admin` field always holds that owner, whatever the caller
//! submitted.

use soroban_sdk::{contracttype, Address, String, Vec};

/// `1%` in stored percentage units (four decimal places).
pub const PERCENT_SCALE: u32 = 10_000;

/// `100%` in stored percentage units.
pub const MAX_PERCENT: u32 = 100 * PERCENT_SCALE;

/// `1` unit of currency in stored price units (seven decimal places).
pub const PRICE_SCALE: i128 = 10_000_000;

/// Recipients a single session may carry.
pub const MAX_RECIPIENTS: u32 = 50;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingCliff {
    /// Months.
    pub cliff_period: u64,
    pub cliff_percentage: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingStep {
    /// Months.
    pub step_period: u64,
    pub step_percentage: u32,
    /// Months between releases: 3 for quarterly, otherwise 1.
    pub step_frequency: u64,
}

/// Low-level release schedule of one recipient.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    pub id: String,
    pub cliff: VestingCliff,
    pub step: VestingStep,
    pub num_chunks: u64,
    pub lock_period: u64,
    pub is_token_lock: bool,
    pub chunk_size: u64,
}

/// One allocation category of a saved session.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Recipient {
    pub id: String,
    pub name: String,
    /// Share of supply in [`PERCENT_SCALE`] units.
    pub allocation_percentage: u32,
    pub schedule: Schedule,
}

/// A saved allocation model.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavedSession {
    pub id: String,
    pub session_name: String,
    pub total_supply: u64,
    pub recipients: Vec<Recipient>,
    /// Epoch milliseconds.
    pub timestamp: u64,
    pub decimals: u32,
    pub enable_inflation: bool,
    pub inflation_rate: u32,
    pub inflation_start_year: u32,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VestingType {
    CliffLinear,
    Graded,
}

/// A saved single-schedule projection.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingSchedule {
    pub name: String,
    pub vesting_type: VestingType,
    pub total_tokens: u64,
    /// Unit price in [`PRICE_SCALE`] units.
    pub token_price: i128,
    pub cliff_period: u64,
    pub vesting_duration: u64,
    /// Epoch milliseconds.
    pub start_date: u64,
    /// Owner of the record.
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserProfile {
    pub name: String,
}
