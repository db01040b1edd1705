// User error messages. Every failed check reverts the whole call.

pub const ERR_NOT_MEMBER: &str = "Not a member of the multisig";
pub const ERR_INSUFFICIENT_FUNDS: &str =
    "The multisig does not have enough funds for this proposal";
pub const ERR_DUPLICATE_VOTE: &str = "Member has already voted on this proposal";
pub const ERR_NO_ACTIVE_PROPOSAL: &str = "No active proposal";
pub const ERR_PROPOSAL_NOT_OPEN: &str = "Proposal is not open for voting";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";

// ── Construction ──

pub const ERR_INVALID_REQUIRED_VOTES: &str = "Invalid required votes";
pub const ERR_DUPLICATE_MEMBER: &str = "Duplicate member";
