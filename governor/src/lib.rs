#![no_std]

multiversx_sc::imports!();

pub mod governor_proxy;
pub mod types;

use types::{Action, Proposal, ProposalId, ProposalState};

// ============================================================
// Constants
// ============================================================

/// Voting window: 24 hours in seconds
const VOTING_PERIOD: u64 = 86_400;

/// Quorum is expressed as an integer percent of current total members
const PERCENT_DENOMINATOR: u64 = 100;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Governor {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, quorum: u64, initial_members: MultiValueEncoded<ManagedAddress>) {
        require!(
            quorum <= PERCENT_DENOMINATOR,
            "Quorum must be between 0 and 100"
        );
        self.quorum().set(quorum);
        for member in initial_members {
            self.members().insert(member);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: propose
    // Any member can bundle a sequence of actions for a vote.
    // The proposal is keyed by its content fingerprint, so
    // resubmitting identical content is rejected.
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        actions: ManagedVec<Action<Self::Api>>,
        description: ManagedBuffer,
    ) -> ProposalId<Self::Api> {
        let caller = self.blockchain().get_caller();
        require!(
            self.members().contains(&caller),
            "Only members can propose"
        );
        require!(!actions.is_empty(), "Proposal has no actions");

        let proposal_id = self.proposal_id(&actions, &description);
        require!(
            self.proposals(&proposal_id).is_empty(),
            "Proposal already exists"
        );

        let now = self.blockchain().get_block_timestamp();
        let proposal = Proposal {
            proposer: caller.clone(),
            start: now,
            end: now + VOTING_PERIOD,
            for_votes: 0,
            against_votes: 0,
            executed: false,
        };
        self.proposals(&proposal_id).set(&proposal);

        self.proposal_created_event(&proposal_id, &caller, &description);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: castVote
    // One vote per member while the window is open. Tallies are
    // monotonic; votes are never retracted.
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: ProposalId<Self::Api>, support: bool) {
        let caller = self.blockchain().get_caller();
        require!(self.members().contains(&caller), "Only members can vote");
        require!(
            !self.proposals(&proposal_id).is_empty(),
            "Proposal does not exist"
        );

        let mut proposal = self.proposals(&proposal_id).get();
        let now = self.blockchain().get_block_timestamp();
        require!(now < proposal.end, "Voting period has expired");
        require!(
            !self.has_voted(&proposal_id, &caller).get(),
            "Already voted"
        );

        if support {
            proposal.for_votes += 1;
        } else {
            proposal.against_votes += 1;
        }
        self.has_voted(&proposal_id, &caller).set(true);
        self.proposals(&proposal_id).set(&proposal);

        self.vote_cast_event(&proposal_id, &caller, support);
    }

    // ========================================================
    // ENDPOINT: execute
    // Looks the proposal up by re-deriving its fingerprint from
    // the supplied content. Performs the bundled actions in
    // order; a failure in any of them reverts the whole call,
    // including the executed flag.
    // ========================================================

    #[endpoint(execute)]
    fn execute(&self, actions: ManagedVec<Action<Self::Api>>, description: ManagedBuffer) {
        let proposal_id = self.proposal_id(&actions, &description);
        require!(
            self.state_of(&proposal_id) == ProposalState::Succeeded,
            "Proposal has not succeeded or was already executed"
        );

        self.proposals(&proposal_id).update(|proposal| {
            proposal.executed = true;
        });

        for action in actions.iter() {
            if action.endpoint_name.is_empty() {
                self.tx().to(&action.to).egld(&action.egld_value).transfer();
            } else {
                self.tx()
                    .to(&action.to)
                    .egld(&action.egld_value)
                    .raw_call(action.endpoint_name.clone())
                    .arguments_raw(action.arguments.clone().into())
                    .sync_call();
            }
        }

        self.proposal_executed_event(&proposal_id);
    }

    // ========================================================
    // Self-amendment endpoints
    // Only reachable as bundled actions inside execute(): the
    // immediate caller must be this contract itself. Governance
    // changes its own rules only through its own passed
    // proposals.
    // ========================================================

    #[endpoint(addMember)]
    fn add_member(&self, member: ManagedAddress) {
        self.require_caller_is_self();
        require!(self.members().insert(member.clone()), "Already a member");
        self.member_added_event(&member);
    }

    #[endpoint(removeMember)]
    fn remove_member(&self, member: ManagedAddress) {
        self.require_caller_is_self();
        require!(self.members().swap_remove(&member), "Not a member");
        self.member_removed_event(&member);
    }

    #[endpoint(changeQuorum)]
    fn change_quorum(&self, quorum: u64) {
        self.require_caller_is_self();
        require!(
            quorum <= PERCENT_DENOMINATOR,
            "Quorum must be between 0 and 100"
        );
        self.quorum().set(quorum);
        self.quorum_changed_event(quorum);
    }

    // ========================================================
    // INTERNAL: identifier derivation
    // keccak-256 over the nested encoding of the action bundle
    // followed by the description. Callers can pre-compute ids
    // off-chain by reproducing this encoding.
    // ========================================================

    fn proposal_id(
        &self,
        actions: &ManagedVec<Action<Self::Api>>,
        description: &ManagedBuffer,
    ) -> ProposalId<Self::Api> {
        let mut encoded = ManagedBuffer::new();
        if actions.dep_encode(&mut encoded).is_err()
            || description.dep_encode(&mut encoded).is_err()
        {
            sc_panic!("Proposal encoding failed");
        }
        self.crypto().keccak256(encoded)
    }

    // ========================================================
    // INTERNAL: state machine
    // Evaluated on read. Quorum uses the member count at
    // evaluation time, not a snapshot at proposal creation.
    // ========================================================

    fn state_of(&self, proposal_id: &ProposalId<Self::Api>) -> ProposalState {
        if self.proposals(proposal_id).is_empty() {
            return ProposalState::NotDefined;
        }

        let proposal = self.proposals(proposal_id).get();
        if proposal.executed {
            return ProposalState::Executed;
        }

        let now = self.blockchain().get_block_timestamp();
        if now < proposal.end {
            return ProposalState::Active;
        }

        let total_members = self.members().len() as u64;
        let quorum_reached =
            proposal.for_votes * PERCENT_DENOMINATOR >= self.quorum().get() * total_members;
        if quorum_reached && proposal.for_votes > proposal.against_votes {
            ProposalState::Succeeded
        } else {
            ProposalState::Defeated
        }
    }

    fn require_caller_is_self(&self) {
        require!(
            self.blockchain().get_caller() == self.blockchain().get_sc_address(),
            "Only the governor itself can call this"
        );
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(hashProposal)]
    fn hash_proposal(
        &self,
        actions: ManagedVec<Action<Self::Api>>,
        description: ManagedBuffer,
    ) -> ProposalId<Self::Api> {
        self.proposal_id(&actions, &description)
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: ProposalId<Self::Api>) -> ProposalState {
        self.state_of(&proposal_id)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: ProposalId<Self::Api>) -> Proposal<Self::Api> {
        self.proposals(&proposal_id).get()
    }

    #[view(hasMemberVoted)]
    fn has_member_voted(&self, proposal_id: ProposalId<Self::Api>, member: &ManagedAddress) -> bool {
        self.has_voted(&proposal_id, member).get()
    }

    #[view(getQuorum)]
    fn get_quorum(&self) -> u64 {
        self.quorum().get()
    }

    #[view(getTotalMembers)]
    fn get_total_members(&self) -> u64 {
        self.members().len() as u64
    }

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.members().len();
        let start = from as usize;
        let end = core::cmp::min(start + count as usize, total);

        for (idx, member) in self.members().iter().enumerate() {
            if idx >= start && idx < end {
                result.push(member);
            }
            if idx >= end {
                break;
            }
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] proposer: &ManagedAddress,
        description: &ManagedBuffer,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: &ProposalId<Self::Api>);

    #[event("memberAdded")]
    fn member_added_event(&self, #[indexed] member: &ManagedAddress);

    #[event("memberRemoved")]
    fn member_removed_event(&self, #[indexed] member: &ManagedAddress);

    #[event("quorumChanged")]
    fn quorum_changed_event(&self, #[indexed] quorum: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Governance parameters, mutable only via self-execution ──

    #[storage_mapper("quorum")]
    fn quorum(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Proposals, keyed by content fingerprint ──

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: &ProposalId<Self::Api>)
        -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<bool>;
}
