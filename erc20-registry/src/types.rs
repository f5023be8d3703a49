multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// OptionalBool — tri-state fact value
// ============================================================

/// `Unset` must stay the first variant: an empty storage entry decodes to
/// it, which is what makes "never written" distinct from `False`.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Copy, PartialEq, Eq,
    Debug,
)]
pub enum OptionalBool {
    Unset,
    False,
    True,
}

// ============================================================
// FactUpdate — one (fact, value) assignment of an update call
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug)]
pub struct FactUpdate {
    pub fact_id: u64,
    pub value: OptionalBool,
}
