#![no_std]

multiversx_sc::imports!();

pub mod mock_factory_proxy;
pub mod registry_proxy;

use registry_proxy::OptionalBool;

// ============================================================
// Contract
// ============================================================

/// Minimal pool factory that consumes the fact registry's validity flag:
/// a pair can only be created from tokens the registry marks as valid
/// ERC-20 implementations.
#[multiversx_sc::contract]
pub trait MockFactory {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, registry_address: ManagedAddress) {
        self.registry_address().set(&registry_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createPair
    // Gated on the registry's IS_VALID_ERC20 fact for both
    // tokens.
    // ========================================================

    #[endpoint(createPair)]
    fn create_pair(&self, token_a: ManagedAddress, token_b: ManagedAddress) -> u64 {
        require!(token_a != token_b, "Identical token addresses");
        require!(
            self.pair(&token_a, &token_b).is_empty(),
            "Pair already exists"
        );

        let registry_address = self.registry_address().get();

        let token_a_validity: OptionalBool = self
            .tx()
            .to(&registry_address)
            .typed(registry_proxy::Erc20RegistryProxy)
            .token_is_valid_erc20(token_a.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(
            token_a_validity == OptionalBool::True,
            "Token A is not a valid ERC20 implementation"
        );

        let token_b_validity: OptionalBool = self
            .tx()
            .to(&registry_address)
            .typed(registry_proxy::Erc20RegistryProxy)
            .token_is_valid_erc20(token_b.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(
            token_b_validity == OptionalBool::True,
            "Token B is not a valid ERC20 implementation"
        );

        let pair_id = self.pair_count().get() + 1;
        self.pair_count().set(pair_id);
        self.pair(&token_a, &token_b).set(pair_id);

        self.pair_created_event(&token_a, &token_b, pair_id);

        pair_id
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getPair)]
    fn get_pair(&self, token_a: ManagedAddress, token_b: ManagedAddress) -> u64 {
        self.pair(&token_a, &token_b).get()
    }

    #[view(getPairCount)]
    fn get_pair_count(&self) -> u64 {
        self.pair_count().get()
    }

    #[view(getRegistryAddress)]
    fn get_registry_address(&self) -> ManagedAddress {
        self.registry_address().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("pairCreated")]
    fn pair_created_event(
        &self,
        #[indexed] token_a: &ManagedAddress,
        #[indexed] token_b: &ManagedAddress,
        pair_id: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("registryAddress")]
    fn registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("pairCount")]
    fn pair_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("pair")]
    fn pair(
        &self,
        token_a: &ManagedAddress,
        token_b: &ManagedAddress,
    ) -> SingleValueMapper<u64>;
}
