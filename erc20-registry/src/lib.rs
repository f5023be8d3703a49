#![no_std]

multiversx_sc::imports!();

pub mod erc20_registry_proxy;
pub mod types;

use types::{FactUpdate, OptionalBool};

// ============================================================
// Constants
// ============================================================

/// Standing fact 0: set automatically the first time any fact is written
/// for a token.
pub const IS_REGISTERED: u64 = 0;

/// Standing fact 1: the validity flag pool factories gate on.
pub const IS_VALID_ERC20: u64 = 1;

/// Highest fact id representable in a compact fact-set mask.
const MAX_FACT_SET_ID: u64 = 63;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Erc20Registry {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, owner: ManagedAddress) {
        self.owner().set(&owner);
        self.create_fact_record(ManagedBuffer::from(b"IS_REGISTERED"));
        self.create_fact_record(ManagedBuffer::from(b"IS_VALID_ERC20"));
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createFact
    // Sequential allocation of a new fact id bound to a code.
    // Fact count is unbounded; values are stored per (token,
    // fact) pair rather than packed into a fixed-width word.
    // ========================================================

    #[endpoint(createFact)]
    fn create_fact(&self, code: ManagedBuffer) -> u64 {
        self.require_caller_is_owner();
        require!(!code.is_empty(), "Fact code cannot be empty");
        self.create_fact_record(code)
    }

    // ========================================================
    // ENDPOINT: addUpdateERC20
    // Applies (fact, value) assignments for one token. First
    // contact always leaves IS_REGISTERED set to True.
    // ========================================================

    #[endpoint(addUpdateERC20)]
    fn add_update_erc20(&self, token: ManagedAddress, updates: ManagedVec<FactUpdate>) {
        self.require_caller_is_owner();

        let highwater = self.highwater_fact();
        for update in updates.iter() {
            self.require_fact_created(update.fact_id, highwater);
        }

        let newly_registered =
            self.token_fact(&token, IS_REGISTERED).get() != OptionalBool::True;

        for update in updates.iter() {
            self.token_fact(&token, update.fact_id).set(update.value);
        }

        if newly_registered {
            self.token_fact(&token, IS_REGISTERED).set(OptionalBool::True);
        }

        self.erc20_facts_updated_event(&token, newly_registered, &updates);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn create_fact_record(&self, code: ManagedBuffer) -> u64 {
        let fact_id = self.fact_count().get();
        self.fact_code(fact_id).set(&code);
        self.fact_count().set(fact_id + 1);
        self.erc20_fact_created_event(fact_id, &code);
        fact_id
    }

    fn require_fact_created(&self, fact_id: u64, highwater: u64) {
        if fact_id > highwater {
            sc_panic!("Invalid fact {} (highwater is {})", fact_id, highwater);
        }
    }

    fn require_caller_is_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            "Only the registry owner can call this"
        );
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(highwaterFact)]
    fn highwater_fact(&self) -> u64 {
        self.fact_count().get() - 1
    }

    #[view(queryTokenFacts)]
    fn query_token_facts(
        &self,
        token: ManagedAddress,
        fact_ids: MultiValueEncoded<u64>,
    ) -> MultiValueEncoded<OptionalBool> {
        let highwater = self.highwater_fact();
        let mut values = MultiValueEncoded::new();
        for fact_id in fact_ids {
            self.require_fact_created(fact_id, highwater);
            values.push(self.token_fact(&token, fact_id).get());
        }
        values
    }

    #[view(tokenIsRegistered)]
    fn token_is_registered(&self, token: ManagedAddress) -> OptionalBool {
        self.token_fact(&token, IS_REGISTERED).get()
    }

    #[view(tokenIsValidERC20)]
    fn token_is_valid_erc20(&self, token: ManagedAddress) -> OptionalBool {
        self.token_fact(&token, IS_VALID_ERC20).get()
    }

    #[view(factsAreValidated)]
    fn facts_are_validated(
        &self,
        token: ManagedAddress,
        fact_ids: MultiValueEncoded<u64>,
    ) -> bool {
        let highwater = self.highwater_fact();
        for fact_id in fact_ids {
            self.require_fact_created(fact_id, highwater);
            if self.token_fact(&token, fact_id).get() != OptionalBool::True {
                return false;
            }
        }
        true
    }

    #[view(factSetIsValidated)]
    fn fact_set_is_validated(&self, token: ManagedAddress, fact_set: u64) -> bool {
        let highwater = self.highwater_fact();
        let mut remaining = fact_set;
        let mut fact_id = 0u64;
        while remaining != 0 {
            if remaining & 1 == 1 {
                self.require_fact_created(fact_id, highwater);
                if self.token_fact(&token, fact_id).get() != OptionalBool::True {
                    return false;
                }
            }
            remaining >>= 1;
            fact_id += 1;
        }
        true
    }

    #[view(factsToFactSet)]
    fn facts_to_fact_set(&self, fact_ids: MultiValueEncoded<u64>) -> u64 {
        let mut fact_set = 0u64;
        for fact_id in fact_ids {
            require!(
                fact_id <= MAX_FACT_SET_ID,
                "Fact id does not fit in a fact set"
            );
            fact_set |= 1 << fact_id;
        }
        fact_set
    }

    #[view(factSetToFacts)]
    fn fact_set_to_facts(&self, fact_set: u64) -> MultiValueEncoded<u64> {
        let mut fact_ids = MultiValueEncoded::new();
        for fact_id in 0..=MAX_FACT_SET_ID {
            if fact_set & (1 << fact_id) != 0 {
                fact_ids.push(fact_id);
            }
        }
        fact_ids
    }

    #[view(getFactCode)]
    fn get_fact_code(&self, fact_id: u64) -> ManagedBuffer {
        self.require_fact_created(fact_id, self.highwater_fact());
        self.fact_code(fact_id).get()
    }

    #[view(getRegistryOwner)]
    fn get_registry_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("erc20FactCreated")]
    fn erc20_fact_created_event(&self, #[indexed] fact_id: u64, code: &ManagedBuffer);

    #[event("erc20FactsUpdated")]
    fn erc20_facts_updated_event(
        &self,
        #[indexed] token: &ManagedAddress,
        #[indexed] newly_registered: bool,
        updates: &ManagedVec<FactUpdate>,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── The controlling address, normally the governor contract ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Fact allocation ──

    #[storage_mapper("factCount")]
    fn fact_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("factCode")]
    fn fact_code(&self, fact_id: u64) -> SingleValueMapper<ManagedBuffer>;

    // ── Per-(token, fact) tri-state values; unwritten pairs read Unset ──

    #[storage_mapper("tokenFact")]
    fn token_fact(
        &self,
        token: &ManagedAddress,
        fact_id: u64,
    ) -> SingleValueMapper<OptionalBool>;
}
