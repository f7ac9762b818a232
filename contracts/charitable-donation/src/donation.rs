use crate::charity::CharityManager;
use crate::types::{DataKey, Donation, DonationStatus, Error};
use soroban_sdk::{Address, Env, Symbol};

pub struct DonationManager;

impl DonationManager {
    /// Initialize the donation ledger
    pub fn init(env: &Env) {
        if !env.storage().instance().has(&DataKey::DonationCount) {
            env.storage()
                .instance()
                .set(&DataKey::DonationCount, &0u32);
        }
    }

    /// Process a donation to a charity (any caller)
    pub fn donate(
        env: &Env,
        donor: Address,
        charity_id: u32,
        amount: i128,
    ) -> Result<u32, Error> {
        let charity = CharityManager::get_charity(env, charity_id)?;

        if !charity.active {
            return Err(Error::Unauthorized);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        // Get next donation ID
        let donation_count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::DonationCount)
            .unwrap_or(0);
        let donation_id = donation_count + 1;

        let donation = Donation {
            id: donation_id,
            charity_id,
            donor: donor.clone(),
            amount,
            status: DonationStatus::Completed,
        };

        env.storage()
            .instance()
            .set(&DataKey::Donation(donation_id), &donation);
        env.storage()
            .instance()
            .set(&DataKey::DonationCount, &donation_id);

        // Update charity running total
        CharityManager::credit_donation(env, charity_id, amount)?;

        env.events().publish(
            (Symbol::new(env, "donation_received"), charity_id),
            (donation_id, donor, amount),
        );

        Ok(donation_id)
    }

    /// Get donation details
    pub fn get_donation(env: &Env, donation_id: u32) -> Result<Donation, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Donation(donation_id))
            .ok_or(Error::DonationNotFound)
    }
}
