//! Interface documentation for the Charitable Donation Contract
//!
//! This contract keeps a ledger of registered charities, donations made to
//! them, and funding milestones reported by the charities themselves.

#![allow(dead_code)]

use crate::types::{Charity, Donation, Error, Milestone};
use soroban_sdk::{Address, String};

/// Contract Interface
pub trait CharitableDonationTrait {
    /// Initialize the contract with an admin address
    ///
    /// # Arguments
    /// * `admin` - The address that will have administrative privileges
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the contract has already been initialized
    fn initialize(admin: Address) -> Result<(), Error>;

    /// Get the contract administrator
    ///
    /// # Errors
    /// * `NotInitialized` - If the contract has not been initialized
    fn get_contract_owner() -> Result<Address, Error>;

    /// Register a new charity (admin only)
    ///
    /// # Arguments
    /// * `caller` - Must be the contract administrator
    /// * `name` - Display name of the charity, must be non-empty
    /// * `wallet` - The charity's wallet address
    ///
    /// # Returns
    /// The ID of the new charity
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the admin
    /// * `InvalidInput` - If the name is empty
    fn register_charity(caller: Address, name: String, wallet: Address) -> Result<u32, Error>;

    /// Get details of a charity
    ///
    /// # Errors
    /// * `CharityNotFound` - If the charity doesn't exist
    fn get_charity(charity_id: u32) -> Result<Charity, Error>;

    /// Deactivate a charity so it can no longer receive donations (admin only)
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the admin
    /// * `CharityNotFound` - If the charity doesn't exist
    fn deactivate_charity(caller: Address, charity_id: u32) -> Result<(), Error>;

    /// Donate to a charity
    ///
    /// Records the donation and credits the charity's running total in the
    /// same invocation; a failure leaves both untouched.
    ///
    /// # Arguments
    /// * `donor` - The donating address, any identity may donate
    /// * `charity_id` - The target charity
    /// * `amount` - Donation amount in stroops, must be positive
    ///
    /// # Returns
    /// The ID of the new donation
    ///
    /// # Errors
    /// * `CharityNotFound` - If the charity doesn't exist
    /// * `Unauthorized` - If the charity has been deactivated
    /// * `InvalidAmount` - If the amount is not positive
    fn donate(donor: Address, charity_id: u32, amount: i128) -> Result<u32, Error>;

    /// Get details of a donation
    ///
    /// # Errors
    /// * `DonationNotFound` - If the donation doesn't exist
    fn get_donation(donation_id: u32) -> Result<Donation, Error>;

    /// Add a funding milestone to a charity (admin only)
    ///
    /// # Arguments
    /// * `caller` - Must be the contract administrator
    /// * `charity_id` - The charity the milestone belongs to
    /// * `description` - What the milestone funds, must be non-empty
    /// * `target_amount` - Funding target in stroops, must be positive
    ///
    /// # Returns
    /// The ID of the new milestone
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the admin
    /// * `CharityNotFound` - If the charity doesn't exist
    /// * `InvalidInput` - If the description is empty
    /// * `InvalidAmount` - If the target is not positive
    fn add_milestone(
        caller: Address,
        charity_id: u32,
        description: String,
        target_amount: i128,
    ) -> Result<u32, Error>;

    /// Get details of a milestone
    ///
    /// # Errors
    /// * `MilestoneNotFound` - If the milestone doesn't exist
    fn get_milestone(milestone_id: u32) -> Result<Milestone, Error>;

    /// Report progress on a milestone (owning charity's wallet only)
    ///
    /// `new_current_amount` is the new cumulative figure, not an increment.
    /// The completed flag is recomputed on every call.
    ///
    /// # Errors
    /// * `MilestoneNotFound` - If the milestone doesn't exist
    /// * `Unauthorized` - If the caller is not the owning charity's wallet
    /// * `InvalidAmount` - If the new amount is negative
    fn update_milestone_progress(
        caller: Address,
        milestone_id: u32,
        new_current_amount: i128,
    ) -> Result<(), Error>;
}
