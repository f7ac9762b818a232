use crate::access::AccessManager;
use crate::charity::CharityManager;
use crate::types::{DataKey, Error, Milestone};
use soroban_sdk::{Address, Env, String, Symbol};

pub struct MilestoneManager;

impl MilestoneManager {
    /// Initialize the milestone tracker
    pub fn init(env: &Env) {
        if !env.storage().instance().has(&DataKey::MilestoneCount) {
            env.storage()
                .instance()
                .set(&DataKey::MilestoneCount, &0u32);
        }
    }

    /// Add a milestone to a charity (admin only)
    pub fn add_milestone(
        env: &Env,
        caller: &Address,
        charity_id: u32,
        description: String,
        target_amount: i128,
    ) -> Result<u32, Error> {
        AccessManager::verify_admin(env, caller)?;

        // Charity must exist
        CharityManager::get_charity(env, charity_id)?;

        if description.is_empty() {
            return Err(Error::InvalidInput);
        }
        if target_amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        // Get next milestone ID
        let milestone_count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::MilestoneCount)
            .unwrap_or(0);
        let milestone_id = milestone_count + 1;

        let milestone = Milestone {
            id: milestone_id,
            charity_id,
            description,
            target_amount,
            current_amount: 0,
            completed: false,
        };

        env.storage()
            .instance()
            .set(&DataKey::Milestone(milestone_id), &milestone);
        env.storage()
            .instance()
            .set(&DataKey::MilestoneCount, &milestone_id);

        env.events().publish(
            (Symbol::new(env, "milestone_added"), charity_id),
            (milestone_id, target_amount),
        );

        Ok(milestone_id)
    }

    /// Get milestone details
    pub fn get_milestone(env: &Env, milestone_id: u32) -> Result<Milestone, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Milestone(milestone_id))
            .ok_or(Error::MilestoneNotFound)
    }

    /// Report progress on a milestone (owning charity's wallet only)
    ///
    /// Takes the new cumulative figure, not an increment. Completion is
    /// recomputed on every call, so a downward revision below target un-sets
    /// the completed flag.
    pub fn update_milestone_progress(
        env: &Env,
        caller: &Address,
        milestone_id: u32,
        new_current_amount: i128,
    ) -> Result<(), Error> {
        let mut milestone = Self::get_milestone(env, milestone_id)?;

        AccessManager::verify_charity_wallet(env, caller, milestone.charity_id)?;

        if new_current_amount < 0 {
            return Err(Error::InvalidAmount);
        }

        milestone.current_amount = new_current_amount;
        milestone.completed = milestone.current_amount >= milestone.target_amount;
        env.storage()
            .instance()
            .set(&DataKey::Milestone(milestone_id), &milestone);

        env.events().publish(
            (Symbol::new(env, "milestone_progress"), milestone_id),
            new_current_amount,
        );
        if milestone.completed {
            env.events().publish(
                (Symbol::new(env, "milestone_completed"), milestone.charity_id),
                milestone_id,
            );
        }

        Ok(())
    }
}
