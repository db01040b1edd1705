multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Collecting votes. Only the active proposal can be Open.
    Open,
    /// Threshold reached, funds sent. Terminal state.
    Executed,
    /// Replaced by a newer submission before reaching the threshold.
    /// Its votes are kept for audit but can never count again.
    Superseded,
}

// ============================================================
// Proposal — a pending payment awaiting committee approval
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub receiver: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub status: ProposalStatus,
    pub created_at: u64,
    /// Block timestamp of the payout (0 unless Executed)
    pub executed_at: u64,
    /// Id of the proposal that replaced this one (0 unless Superseded)
    pub superseded_by: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_open(&self) -> bool {
        self.status == ProposalStatus::Open
    }

    pub fn is_voting_complete(&self) -> bool {
        self.status == ProposalStatus::Executed
    }
}
