multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Content-derived proposal identifier: keccak-256 of the encoded action
/// bundle and description.
pub type ProposalId<M> = ManagedByteArray<M, 32>;

// ============================================================
// Proposal State — computed on read, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// No record exists for this identifier.
    NotDefined,
    /// Voting window is open. Members can vote for/against.
    Active,
    /// Voting window closed without quorum, or without a for-majority.
    /// Ties count as defeated. Terminal state.
    Defeated,
    /// Quorum reached, for > against. Any caller can trigger execution.
    Succeeded,
    /// All bundled actions performed. Terminal state.
    Executed,
}

// ============================================================
// Action — one bundled call of a proposal
// ============================================================

/// An empty `endpoint_name` means a plain EGLD transfer to `to`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug)]
pub struct Action<M: ManagedTypeApi> {
    pub to: ManagedAddress<M>,
    pub egld_value: BigUint<M>,
    pub endpoint_name: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

// ============================================================
// Proposal — the stored lifecycle record
// ============================================================

/// The bundled actions and description are not stored: the identifier is
/// their fingerprint, and `execute` re-derives it from caller-supplied
/// content.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub proposer: ManagedAddress<M>,
    pub start: u64,
    pub end: u64,
    pub for_votes: u64,
    pub against_votes: u64,
    pub executed: bool,
}
