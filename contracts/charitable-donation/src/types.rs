use soroban_sdk::{contracterror, contracttype, Address, String};

/// Storage keys for contract data
#[contracttype]
pub enum DataKey {
    Admin,          // Contract administrator
    Charity(u32),   // Charity ID -> Charity
    CharityCount,   // Counter for charity IDs
    Donation(u32),  // Donation ID -> Donation
    DonationCount,  // Counter for donation IDs
    Milestone(u32), // Milestone ID -> Milestone
    MilestoneCount, // Counter for milestone IDs
}

/// A registered beneficiary eligible to receive donations
#[contracttype]
#[derive(Clone)]
pub struct Charity {
    pub id: u32,
    pub name: String,
    pub wallet: Address,
    pub active: bool,
    pub total_received: i128, // Sum of all accepted donation amounts
    pub reputation_score: u32,
}

/// A single funds transfer recorded against a charity
#[contracttype]
#[derive(Clone)]
pub struct Donation {
    pub id: u32,
    pub charity_id: u32,
    pub donor: Address,
    pub amount: i128,
    pub status: DonationStatus,
}

/// Status of a donation
#[contracttype]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DonationStatus {
    Completed, // Donation recorded and credited
    Refunded,  // Reserved for future refund support
}

/// A funding target tracked per charity
#[contracttype]
#[derive(Clone)]
pub struct Milestone {
    pub id: u32,
    pub charity_id: u32,
    pub description: String,
    pub target_amount: i128,
    pub current_amount: i128,
    pub completed: bool, // Always current_amount >= target_amount
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,     // Contract not initialized
    AlreadyInitialized = 2, // Contract already setup
    Unauthorized = 3,       // Caller lacks permission or charity inactive
    CharityNotFound = 4,    // Charity doesn't exist
    DonationNotFound = 5,   // Donation doesn't exist
    MilestoneNotFound = 6,  // Milestone doesn't exist
    InvalidAmount = 7,      // Amount must be positive
    InvalidInput = 8,       // Empty required text field
}
