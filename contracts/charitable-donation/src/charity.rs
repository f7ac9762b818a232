use crate::access::AccessManager;
use crate::types::{Charity, DataKey, Error};
use soroban_sdk::{Address, Env, String, Symbol};

pub struct CharityManager;

impl CharityManager {
    /// Initialize the charity registry
    pub fn init(env: &Env) {
        if !env.storage().instance().has(&DataKey::CharityCount) {
            env.storage().instance().set(&DataKey::CharityCount, &0u32);
        }
    }

    /// Register a new charity (admin only)
    pub fn register_charity(
        env: &Env,
        caller: &Address,
        name: String,
        wallet: Address,
    ) -> Result<u32, Error> {
        AccessManager::verify_admin(env, caller)?;

        if name.is_empty() {
            return Err(Error::InvalidInput);
        }

        // Get next charity ID
        let charity_count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::CharityCount)
            .unwrap_or(0);
        let charity_id = charity_count + 1;

        let charity = Charity {
            id: charity_id,
            name,
            wallet: wallet.clone(),
            active: true,
            total_received: 0,
            reputation_score: 100,
        };

        env.storage()
            .instance()
            .set(&DataKey::Charity(charity_id), &charity);
        env.storage()
            .instance()
            .set(&DataKey::CharityCount, &charity_id);

        env.events().publish(
            (Symbol::new(env, "charity_registered"), charity_id),
            wallet,
        );

        Ok(charity_id)
    }

    /// Get charity details
    pub fn get_charity(env: &Env, charity_id: u32) -> Result<Charity, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Charity(charity_id))
            .ok_or(Error::CharityNotFound)
    }

    /// Deactivate a charity (admin only)
    pub fn deactivate_charity(env: &Env, caller: &Address, charity_id: u32) -> Result<(), Error> {
        AccessManager::verify_admin(env, caller)?;

        let mut charity = Self::get_charity(env, charity_id)?;
        charity.active = false;
        env.storage()
            .instance()
            .set(&DataKey::Charity(charity_id), &charity);

        env.events()
            .publish((Symbol::new(env, "charity_deactivated"),), charity_id);

        Ok(())
    }

    /// Credit a donation amount to a charity's running total
    pub fn credit_donation(env: &Env, charity_id: u32, amount: i128) -> Result<(), Error> {
        let mut charity = Self::get_charity(env, charity_id)?;
        charity.total_received = charity
            .total_received
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        env.storage()
            .instance()
            .set(&DataKey::Charity(charity_id), &charity);
        Ok(())
    }
}
