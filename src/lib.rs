#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod types;

use errors::*;
use types::{Proposal, ProposalStatus};

// ============================================================
// Contract
// ============================================================

/// Committee-controlled EGLD pool. A fixed set of members votes on one
/// payment proposal at a time; once `requiredVotes` distinct members have
/// approved it, the payment is sent and the proposal is closed for good.
#[multiversx_sc::contract]
pub trait ApprovalGate {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, required_votes: u32, members: MultiValueEncoded<ManagedAddress>) {
        for member in members {
            require!(self.members().insert(member), ERR_DUPLICATE_MEMBER);
        }

        let member_count = self.members().len();
        require!(
            required_votes >= 1 && (required_votes as usize) <= member_count,
            ERR_INVALID_REQUIRED_VOTES
        );

        self.required_votes().set(required_votes);
        self.active_proposal_id().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Members top up the shared pool. The VM credits the
    // attached EGLD; nothing else changes here.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let amount = self.call_value().egld_value().clone_value();
        self.deposit_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: submitProposal
    // Opens a new voting round. Whatever was active before
    // is superseded, partial votes included.
    // ========================================================

    #[endpoint(submitProposal)]
    fn submit_proposal(&self, receiver: ManagedAddress, amount: BigUint) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        require!(amount <= self.shared_balance(), ERR_INSUFFICIENT_FUNDS);

        let previous_id = self.active_proposal_id().get();
        let proposal_id = previous_id + 1;

        if previous_id > 0 {
            self.supersede(previous_id, proposal_id);
        }

        let mut proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            receiver,
            amount,
            status: ProposalStatus::Open,
            created_at: self.blockchain().get_block_timestamp(),
            executed_at: 0u64,
            superseded_by: 0u64,
        };
        self.active_proposal_id().set(proposal_id);
        self.proposal_submitted_event(
            proposal_id,
            &caller,
            &proposal.receiver,
            &proposal.amount,
        );

        // The proposer's approval is implicit
        self.record_approval(&mut proposal, &caller);
        self.proposals(proposal_id).set(&proposal);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: voteOnProposal
    // Always targets the active proposal.
    // ========================================================

    #[endpoint(voteOnProposal)]
    fn vote_on_proposal(&self) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let proposal_id = self.active_proposal_id().get();
        require!(proposal_id > 0, ERR_NO_ACTIVE_PROPOSAL);

        require!(
            !self.proposal_voters(proposal_id).contains(&caller),
            ERR_DUPLICATE_VOTE
        );
        let mut proposal = self.proposals(proposal_id).get();
        require!(proposal.is_open(), ERR_PROPOSAL_NOT_OPEN);

        self.record_approval(&mut proposal, &caller);
        self.proposals(proposal_id).set(&proposal);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_member(&self, address: &ManagedAddress) {
        require!(self.members().contains(address), ERR_NOT_MEMBER);
    }

    fn shared_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    /// Adds `voter` to the proposal and pays out once the threshold is met.
    /// The caller persists `proposal` afterwards.
    fn record_approval(&self, proposal: &mut Proposal<Self::Api>, voter: &ManagedAddress) {
        self.proposal_voters(proposal.id).insert(voter.clone());
        let vote_count = self.proposal_voters(proposal.id).len();
        self.vote_event(proposal.id, voter, vote_count);

        if vote_count >= self.required_votes().get() as usize {
            self.execute_payout(proposal);
        }
    }

    fn execute_payout(&self, proposal: &mut Proposal<Self::Api>) {
        require!(
            proposal.amount <= self.shared_balance(),
            ERR_INSUFFICIENT_FUNDS
        );

        proposal.status = ProposalStatus::Executed;
        proposal.executed_at = self.blockchain().get_block_timestamp();

        if proposal.amount > 0u64 {
            self.send().direct_egld(&proposal.receiver, &proposal.amount);
        }
        self.proposal_executed_event(proposal.id, &proposal.receiver, &proposal.amount);
    }

    fn supersede(&self, proposal_id: u64, superseded_by: u64) {
        let mut previous = self.proposals(proposal_id).get();
        if !previous.is_open() {
            return;
        }

        previous.status = ProposalStatus::Superseded;
        previous.superseded_by = superseded_by;
        self.proposals(proposal_id).set(&previous);
        self.proposal_superseded_event(proposal_id, superseded_by);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Proposal<Self::Api> {
        require!(!self.proposals(id).is_empty(), ERR_PROPOSAL_NOT_FOUND);
        self.proposals(id).get()
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.active_proposal_id().get();
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            if !self.proposals(id).is_empty() {
                result.push(self.proposals(id).get());
            }
        }
        result
    }

    #[view(getActiveProposal)]
    fn get_active_proposal(&self) -> OptionalValue<Proposal<Self::Api>> {
        let id = self.active_proposal_id().get();
        if id == 0 {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.proposals(id).get())
    }

    #[view(getVoters)]
    fn get_voters(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.proposal_voters(proposal_id).iter() {
            result.push(voter);
        }
        result
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, member: &ManagedAddress) -> bool {
        self.proposal_voters(proposal_id).contains(member)
    }

    #[view(isVotingComplete)]
    fn is_voting_complete(&self, proposal_id: u64) -> bool {
        !self.proposals(proposal_id).is_empty()
            && self.proposals(proposal_id).get().is_voting_complete()
    }

    #[view(getMembers)]
    fn get_members(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.members().iter() {
            result.push(member);
        }
        result
    }

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    #[view(getBalance)]
    fn get_balance(&self) -> BigUint {
        self.shared_balance()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] member: &ManagedAddress, amount: &BigUint);

    #[event("proposalSubmitted")]
    fn proposal_submitted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("proposalSuperseded")]
    fn proposal_superseded_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] superseded_by: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        vote_count: usize,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] receiver: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getRequiredVotes)]
    #[storage_mapper("requiredVotes")]
    fn required_votes(&self) -> SingleValueMapper<u32>;

    // ── Proposals ──

    #[view(getActiveProposalId)]
    #[storage_mapper("activeProposalId")]
    fn active_proposal_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalVoters")]
    fn proposal_voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
