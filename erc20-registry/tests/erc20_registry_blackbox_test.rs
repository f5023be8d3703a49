// Blackbox tests for the ERC20 fact registry.
//
// The registry is deployed with a plain account as its owner so the
// endpoints can be driven directly; governance-gated ownership is covered
// by the governor crate's tests.

use erc20_registry::erc20_registry_proxy::{self, FactUpdate, OptionalBool};
use multiversx_sc_scenario::imports::*;

const REGISTRY_ADDRESS: TestSCAddress = TestSCAddress::new("erc20-registry");
const REGISTRY_CODE_PATH: MxscPath = MxscPath::new("output/erc20-registry.mxsc.json");

const OWNER: TestAddress = TestAddress::new("owner");
const ALICE: TestAddress = TestAddress::new("alice");

const TOKEN_A: TestAddress = TestAddress::new("token-a");
const TOKEN_B: TestAddress = TestAddress::new("token-b");

const IS_REGISTERED: u64 = 0;
const IS_VALID_ERC20: u64 = 1;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("erc20-registry");
    blockchain.register_contract(REGISTRY_CODE_PATH, erc20_registry::ContractBuilder);
    blockchain
}

struct RegistryTestState {
    world: ScenarioWorld,
}

impl RegistryTestState {
    fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1);
        world.account(ALICE).nonce(1);

        world
            .tx()
            .from(OWNER)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .init(OWNER.to_managed_address())
            .code(REGISTRY_CODE_PATH)
            .new_address(REGISTRY_ADDRESS)
            .run();

        Self { world }
    }

    fn create_fact(&mut self, code: &str) -> u64 {
        self.world
            .tx()
            .from(OWNER)
            .to(REGISTRY_ADDRESS)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .create_fact(ManagedBuffer::from(code))
            .returns(ReturnsResult)
            .run()
    }

    fn add_update(&mut self, token: TestAddress, updates: Vec<(u64, OptionalBool)>) {
        let mut update_vec: ManagedVec<StaticApi, FactUpdate> = ManagedVec::new();
        for (fact_id, value) in updates {
            update_vec.push(FactUpdate { fact_id, value });
        }
        self.world
            .tx()
            .from(OWNER)
            .to(REGISTRY_ADDRESS)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .add_update_erc20(token.to_managed_address(), update_vec)
            .run();
    }

    // ── Queries ──

    fn highwater_fact(&mut self) -> u64 {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .highwater_fact()
            .returns(ReturnsResult)
            .run()
    }

    fn fact_code(&mut self, fact_id: u64) -> ManagedBuffer<StaticApi> {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .get_fact_code(fact_id)
            .returns(ReturnsResult)
            .run()
    }

    fn query_token_facts(&mut self, token: TestAddress, fact_ids: &[u64]) -> Vec<OptionalBool> {
        let mut ids = MultiValueEncoded::new();
        for fact_id in fact_ids {
            ids.push(*fact_id);
        }
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .query_token_facts(token.to_managed_address(), ids)
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    fn token_is_registered(&mut self, token: TestAddress) -> OptionalBool {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .token_is_registered(token.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    fn token_is_valid_erc20(&mut self, token: TestAddress) -> OptionalBool {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .token_is_valid_erc20(token.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    fn facts_are_validated(&mut self, token: TestAddress, fact_ids: &[u64]) -> bool {
        let mut ids = MultiValueEncoded::new();
        for fact_id in fact_ids {
            ids.push(*fact_id);
        }
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .facts_are_validated(token.to_managed_address(), ids)
            .returns(ReturnsResult)
            .run()
    }

    fn fact_set_is_validated(&mut self, token: TestAddress, fact_set: u64) -> bool {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .fact_set_is_validated(token.to_managed_address(), fact_set)
            .returns(ReturnsResult)
            .run()
    }

    fn facts_to_fact_set(&mut self, fact_ids: &[u64]) -> u64 {
        let mut ids = MultiValueEncoded::new();
        for fact_id in fact_ids {
            ids.push(*fact_id);
        }
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .facts_to_fact_set(ids)
            .returns(ReturnsResult)
            .run()
    }

    fn fact_set_to_facts(&mut self, fact_set: u64) -> Vec<u64> {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(erc20_registry_proxy::Erc20RegistryProxy)
            .fact_set_to_facts(fact_set)
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }
}

// ============================================================
// Construction
// ============================================================

#[test]
fn constructor_creates_the_standing_facts() {
    let mut state = RegistryTestState::new();

    assert_eq!(state.highwater_fact(), 1);
    assert_eq!(state.fact_code(0), ManagedBuffer::from("IS_REGISTERED"));
    assert_eq!(state.fact_code(1), ManagedBuffer::from("IS_VALID_ERC20"));

    let owner: ManagedAddress<StaticApi> = state
        .world
        .query()
        .to(REGISTRY_ADDRESS)
        .typed(erc20_registry_proxy::Erc20RegistryProxy)
        .get_registry_owner()
        .returns(ReturnsResult)
        .run();
    assert_eq!(owner, OWNER.to_managed_address());
}

// ============================================================
// Fact administration
// ============================================================

#[test]
fn fact_creation_allocates_sequential_ids() {
    let mut state = RegistryTestState::new();

    assert_eq!(state.create_fact("NEW_FACT"), 2);
    assert_eq!(state.highwater_fact(), 2);
    assert_eq!(state.fact_code(2), ManagedBuffer::from("NEW_FACT"));

    assert_eq!(state.create_fact("ANOTHER_FACT"), 3);
    assert_eq!(state.highwater_fact(), 3);
}

#[test]
fn fact_creation_is_owner_gated_and_rejects_empty_codes() {
    let mut state = RegistryTestState::new();

    state
        .world
        .tx()
        .from(ALICE)
        .to(REGISTRY_ADDRESS)
        .typed(erc20_registry_proxy::Erc20RegistryProxy)
        .create_fact(ManagedBuffer::from("NEW_FACT"))
        .returns(ExpectError(4, "Only the registry owner can call this"))
        .run();

    state
        .world
        .tx()
        .from(OWNER)
        .to(REGISTRY_ADDRESS)
        .typed(erc20_registry_proxy::Erc20RegistryProxy)
        .create_fact(ManagedBuffer::new())
        .returns(ExpectError(4, "Fact code cannot be empty"))
        .run();

    assert_eq!(state.highwater_fact(), 1);
}

// ============================================================
// Token fact updates
// ============================================================

#[test]
fn update_rejects_uncreated_facts() {
    let mut state = RegistryTestState::new();

    let mut updates: ManagedVec<StaticApi, FactUpdate> = ManagedVec::new();
    updates.push(FactUpdate {
        fact_id: 5,
        value: OptionalBool::True,
    });
    state
        .world
        .tx()
        .from(OWNER)
        .to(REGISTRY_ADDRESS)
        .typed(erc20_registry_proxy::Erc20RegistryProxy)
        .add_update_erc20(TOKEN_A.to_managed_address(), updates)
        .returns(ExpectError(4, "Invalid fact 5 (highwater is 1)"))
        .run();

    // Nothing was applied, not even the auto-registration.
    assert_eq!(state.token_is_registered(TOKEN_A), OptionalBool::Unset);
}

#[test]
fn update_is_owner_gated() {
    let mut state = RegistryTestState::new();

    let mut updates: ManagedVec<StaticApi, FactUpdate> = ManagedVec::new();
    updates.push(FactUpdate {
        fact_id: IS_VALID_ERC20,
        value: OptionalBool::True,
    });
    state
        .world
        .tx()
        .from(ALICE)
        .to(REGISTRY_ADDRESS)
        .typed(erc20_registry_proxy::Erc20RegistryProxy)
        .add_update_erc20(TOKEN_A.to_managed_address(), updates)
        .returns(ExpectError(4, "Only the registry owner can call this"))
        .run();
}

#[test]
fn first_write_registers_the_token() {
    let mut state = RegistryTestState::new();

    assert_eq!(state.token_is_registered(TOKEN_A), OptionalBool::Unset);

    // The update does not mention fact 0, yet first contact sets it.
    state.add_update(TOKEN_A, vec![(IS_VALID_ERC20, OptionalBool::True)]);

    assert_eq!(state.token_is_registered(TOKEN_A), OptionalBool::True);
    assert_eq!(state.token_is_valid_erc20(TOKEN_A), OptionalBool::True);

    // An untouched token stays entirely unset.
    assert_eq!(state.token_is_registered(TOKEN_B), OptionalBool::Unset);
}

#[test]
fn unset_and_false_are_distinct() {
    let mut state = RegistryTestState::new();
    state.create_fact("FACT_ID_2");

    state.add_update(TOKEN_A, vec![(2, OptionalBool::False)]);

    assert_eq!(
        state.query_token_facts(TOKEN_A, &[0, 1, 2]),
        vec![OptionalBool::True, OptionalBool::Unset, OptionalBool::False]
    );
}

#[test]
fn untouched_tokens_read_unset_for_every_fact() {
    let mut state = RegistryTestState::new();
    state.create_fact("FACT_ID_2");

    assert_eq!(
        state.query_token_facts(TOKEN_A, &[0, 1, 2]),
        vec![
            OptionalBool::Unset,
            OptionalBool::Unset,
            OptionalBool::Unset
        ]
    );
}

#[test]
fn query_rejects_uncreated_facts() {
    let mut state = RegistryTestState::new();

    let mut ids = MultiValueEncoded::new();
    ids.push(7u64);
    state
        .world
        .query()
        .to(REGISTRY_ADDRESS)
        .typed(erc20_registry_proxy::Erc20RegistryProxy)
        .query_token_facts(TOKEN_A.to_managed_address(), ids)
        .returns(ExpectError(4, "Invalid fact 7 (highwater is 1)"))
        .run();
}

// ============================================================
// Validation predicates
// ============================================================

#[test]
fn facts_are_validated_has_and_semantics() {
    let mut state = RegistryTestState::new();
    state.create_fact("FACT_ID_2");

    state.add_update(TOKEN_A, vec![(IS_VALID_ERC20, OptionalBool::True)]);
    state.add_update(TOKEN_B, vec![(2, OptionalBool::True)]);

    assert_eq!(state.token_is_valid_erc20(TOKEN_A), OptionalBool::True);
    assert_eq!(state.token_is_valid_erc20(TOKEN_B), OptionalBool::Unset);

    assert!(state.facts_are_validated(TOKEN_A, &[IS_REGISTERED, IS_VALID_ERC20]));
    assert!(!state.facts_are_validated(TOKEN_B, &[IS_REGISTERED, IS_VALID_ERC20]));

    // Every listed fact must hold True; one miss fails the whole set.
    assert!(!state.facts_are_validated(TOKEN_A, &[IS_REGISTERED, IS_VALID_ERC20, 2]));

    // A fact explicitly set to False also fails the set.
    state.add_update(TOKEN_A, vec![(2, OptionalBool::False)]);
    assert!(!state.facts_are_validated(TOKEN_A, &[2]));
}

#[test]
fn fact_set_is_validated_matches_the_mask() {
    let mut state = RegistryTestState::new();

    state.add_update(TOKEN_A, vec![(IS_VALID_ERC20, OptionalBool::True)]);
    state.add_update(TOKEN_B, vec![(IS_VALID_ERC20, OptionalBool::False)]);

    // IS_REGISTERED | IS_VALID_ERC20 = b11 = 3
    assert!(state.fact_set_is_validated(TOKEN_A, 3));
    assert!(!state.fact_set_is_validated(TOKEN_B, 3));

    // The empty mask is vacuously validated.
    assert!(state.fact_set_is_validated(TOKEN_B, 0));
}

#[test]
fn fact_set_is_validated_rejects_uncreated_facts() {
    let mut state = RegistryTestState::new();

    // Bit 7 refers to fact 7, which does not exist yet.
    state
        .world
        .query()
        .to(REGISTRY_ADDRESS)
        .typed(erc20_registry_proxy::Erc20RegistryProxy)
        .fact_set_is_validated(TOKEN_A.to_managed_address(), 1u64 << 7)
        .returns(ExpectError(4, "Invalid fact 7 (highwater is 1)"))
        .run();
}

// ============================================================
// Fact-set conversion utilities
// ============================================================

#[test]
fn facts_to_fact_set_works() {
    let mut state = RegistryTestState::new();

    // b1 = 1
    assert_eq!(state.facts_to_fact_set(&[0]), 1);

    // b101100 = 44
    assert_eq!(state.facts_to_fact_set(&[5, 3, 2]), 44);

    // b1000000000000000000000101 = 16777221
    assert_eq!(state.facts_to_fact_set(&[24, 2, 0]), 16_777_221);
}

#[test]
fn fact_set_to_facts_works() {
    let mut state = RegistryTestState::new();

    assert_eq!(state.fact_set_to_facts(1), vec![0]);
    assert_eq!(state.fact_set_to_facts(44), vec![2, 3, 5]);
    assert_eq!(state.fact_set_to_facts(16_777_221), vec![0, 2, 24]);
}

#[test]
fn facts_to_fact_set_rejects_oversized_ids() {
    let mut state = RegistryTestState::new();

    let mut ids = MultiValueEncoded::new();
    ids.push(64u64);
    state
        .world
        .query()
        .to(REGISTRY_ADDRESS)
        .typed(erc20_registry_proxy::Erc20RegistryProxy)
        .facts_to_fact_set(ids)
        .returns(ExpectError(4, "Fact id does not fit in a fact set"))
        .run();
}
