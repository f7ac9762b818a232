#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};

mod access;
mod charity;
mod donation;
mod interface;
mod milestone;
mod types;

use crate::access::AccessManager;
use crate::charity::CharityManager;
use crate::donation::DonationManager;
use crate::milestone::MilestoneManager;
use crate::types::{Charity, DataKey, Donation, Error, Milestone};

#[contract]
pub struct CharitableDonationContract;

#[contractimpl]
impl CharitableDonationContract {
    /// Initialize the contract with an admin
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);

        // Initialize managers
        CharityManager::init(&env);
        DonationManager::init(&env);
        MilestoneManager::init(&env);

        env.events().publish((Symbol::new(&env, "init"),), (admin,));
        Ok(())
    }

    /// Get the contract administrator
    pub fn get_contract_owner(env: Env) -> Result<Address, Error> {
        AccessManager::admin(&env)
    }

    /// Register a new charity (admin only)
    pub fn register_charity(
        env: Env,
        caller: Address,
        name: String,
        wallet: Address,
    ) -> Result<u32, Error> {
        caller.require_auth();
        CharityManager::register_charity(&env, &caller, name, wallet)
    }

    /// Get charity details
    pub fn get_charity(env: Env, charity_id: u32) -> Result<Charity, Error> {
        CharityManager::get_charity(&env, charity_id)
    }

    /// Deactivate a charity (admin only)
    pub fn deactivate_charity(env: Env, caller: Address, charity_id: u32) -> Result<(), Error> {
        caller.require_auth();
        CharityManager::deactivate_charity(&env, &caller, charity_id)
    }

    /// Donate to a charity
    pub fn donate(env: Env, donor: Address, charity_id: u32, amount: i128) -> Result<u32, Error> {
        donor.require_auth();
        DonationManager::donate(&env, donor, charity_id, amount)
    }

    /// Get donation details
    pub fn get_donation(env: Env, donation_id: u32) -> Result<Donation, Error> {
        DonationManager::get_donation(&env, donation_id)
    }

    /// Add a milestone to a charity (admin only)
    pub fn add_milestone(
        env: Env,
        caller: Address,
        charity_id: u32,
        description: String,
        target_amount: i128,
    ) -> Result<u32, Error> {
        caller.require_auth();
        MilestoneManager::add_milestone(&env, &caller, charity_id, description, target_amount)
    }

    /// Get milestone details
    pub fn get_milestone(env: Env, milestone_id: u32) -> Result<Milestone, Error> {
        MilestoneManager::get_milestone(&env, milestone_id)
    }

    /// Report progress on a milestone (owning charity's wallet only)
    pub fn update_milestone_progress(
        env: Env,
        caller: Address,
        milestone_id: u32,
        new_current_amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        MilestoneManager::update_milestone_progress(&env, &caller, milestone_id, new_current_amount)
    }
}
