use crate::types::{Charity, DataKey, Error};
use soroban_sdk::{Address, Env};

pub struct AccessManager;

impl AccessManager {
    /// Get the contract administrator
    pub fn admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    /// Verify the caller is the contract administrator
    pub fn verify_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        let admin = Self::admin(env)?;
        if caller != &admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// Verify the caller is the wallet of the given charity
    pub fn verify_charity_wallet(env: &Env, caller: &Address, charity_id: u32) -> Result<(), Error> {
        let charity: Charity = env
            .storage()
            .instance()
            .get(&DataKey::Charity(charity_id))
            .ok_or(Error::CharityNotFound)?;

        if caller != &charity.wallet {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
