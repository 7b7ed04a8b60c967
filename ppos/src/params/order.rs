// staking
pub const CREATE_STAKING: u32 = 1000;
pub const EDIT_CANDIDATE: u32 = 1001;
pub const INCREASE_STAKING: u32 = 1002;
pub const WITHDREW_STAKING: u32 = 1003;
pub const DELEGATE: u32 = 1004;
pub const WITHDREW_DELEGATION: u32 = 1005;
pub const REDEEM_DELEGATION: u32 = 1006;
pub const GET_VERIFIER_LIST: u32 = 1100;
pub const GET_VALIDATOR_LIST: u32 = 1101;
pub const GET_CANDIDATE_LIST: u32 = 1102;
pub const GET_RELATED_LIST_BY_DEL_ADDR: u32 = 1103;
pub const GET_DELEGATE_INFO: u32 = 1104;
pub const GET_CANDIDATE_INFO: u32 = 1105;
pub const GET_DELEGATION_LOCK_INFO: u32 = 1106;
pub const GET_PACKAGE_REWARD: u32 = 1200;
pub const GET_STAKING_REWARD: u32 = 1201;
pub const GET_AVG_PACK_TIME: u32 = 1202;

// governance
pub const SUBMIT_TEXT: u32 = 2000;
pub const SUBMIT_VERSION: u32 = 2001;
pub const SUBMIT_PARAM: u32 = 2002;
pub const VOTE: u32 = 2003;
pub const DECLARE_VERSION: u32 = 2004;
pub const SUBMIT_CANCEL: u32 = 2005;
pub const GET_PROPOSAL: u32 = 2100;
pub const GET_TALLY_RESULT: u32 = 2101;
pub const LIST_PROPOSAL: u32 = 2102;
pub const GET_ACTIVE_VERSION: u32 = 2103;
pub const GET_GOVERN_PARAM_VALUE: u32 = 2104;
pub const GET_ACCU_VERIFIERS_COUNT: u32 = 2105;
pub const LIST_GOVERN_PARAM: u32 = 2106;

// slashing
pub const REPORT_DUPLICATE_SIGN: u32 = 3000;
pub const CHECK_DUPLICATE_SIGN: u32 = 3001;

// restricting
pub const CREATE_RESTRICTING_PLAN: u32 = 4000;
pub const GET_RESTRICTING_INFO: u32 = 4100;

// reward
pub const WITHDRAW_DELEGATE_REWARD: u32 = 5000;
pub const GET_DELEGATE_REWARD: u32 = 5100;

/// Positional parameter names of every function code.
/// The order is the call-data layout expected by the precompiled contracts.
pub const PARAMS_ORDER: &[(u32, &[&str])] = &[
    (
        CREATE_STAKING,
        &[
            "typ",
            "benefitAddress",
            "nodeId",
            "externalId",
            "nodeName",
            "website",
            "details",
            "amount",
            "rewardPer",
            "programVersion",
            "programVersionSign",
            "blsPubKey",
            "blsProof",
        ],
    ),
    (
        EDIT_CANDIDATE,
        &[
            "benefitAddress",
            "nodeId",
            "rewardPer",
            "externalId",
            "nodeName",
            "website",
            "details",
        ],
    ),
    (INCREASE_STAKING, &["nodeId", "typ", "amount"]),
    (WITHDREW_STAKING, &["nodeId"]),
    (DELEGATE, &["typ", "nodeId", "amount"]),
    (WITHDREW_DELEGATION, &["stakingBlockNum", "nodeId", "amount"]),
    (REDEEM_DELEGATION, &[]),
    (GET_VERIFIER_LIST, &[]),
    (GET_VALIDATOR_LIST, &[]),
    (GET_CANDIDATE_LIST, &[]),
    (GET_RELATED_LIST_BY_DEL_ADDR, &["addr"]),
    (GET_DELEGATE_INFO, &["stakingBlockNum", "delAddr", "nodeId"]),
    (GET_CANDIDATE_INFO, &["nodeId"]),
    (GET_DELEGATION_LOCK_INFO, &["delAddr"]),
    (GET_PACKAGE_REWARD, &[]),
    (GET_STAKING_REWARD, &[]),
    (GET_AVG_PACK_TIME, &[]),
    (SUBMIT_TEXT, &["verifier", "pIDID"]),
    (SUBMIT_VERSION, &["verifier", "pIDID", "newVersion", "endVotingRounds"]),
    (SUBMIT_PARAM, &["verifier", "pIDID", "module", "name", "newValue"]),
    (VOTE, &["verifier", "proposalID", "option", "programVersion", "versionSign"]),
    (DECLARE_VERSION, &["verifier", "programVersion", "versionSign"]),
    (
        SUBMIT_CANCEL,
        &["verifier", "pIDID", "endVotingRounds", "tobeCanceledProposalID"],
    ),
    (GET_PROPOSAL, &["proposalID"]),
    (GET_TALLY_RESULT, &["proposalID"]),
    (LIST_PROPOSAL, &[]),
    (GET_ACTIVE_VERSION, &[]),
    (GET_GOVERN_PARAM_VALUE, &["module", "name"]),
    (GET_ACCU_VERIFIERS_COUNT, &["proposalID", "blockHash"]),
    (LIST_GOVERN_PARAM, &["module"]),
    (REPORT_DUPLICATE_SIGN, &["typ", "data"]),
    (CHECK_DUPLICATE_SIGN, &["typ", "addr", "blockNumber"]),
    (CREATE_RESTRICTING_PLAN, &["account", "plan"]),
    (GET_RESTRICTING_INFO, &["account"]),
    (WITHDRAW_DELEGATE_REWARD, &[]),
    (GET_DELEGATE_REWARD, &["address", "nodeIDs"]),
];

pub fn param_order(code: u32) -> Option<&'static [&'static str]> {
    PARAMS_ORDER
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, order)| *order)
}

#[cfg(test)]
mod tests {
    use {super::*, crate::router::address_for_function_code, std::collections::BTreeSet};

    #[test]
    fn codes_are_unique() {
        let codes = PARAMS_ORDER.iter().map(|(c, _)| *c).collect::<BTreeSet<_>>();
        assert_eq!(codes.len(), PARAMS_ORDER.len());
        assert_eq!(codes.len(), 36);
    }

    #[test]
    fn every_code_is_routed() {
        for (code, _) in PARAMS_ORDER {
            assert!(address_for_function_code(*code).is_ok(), "{code}");
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(
            param_order(WITHDREW_DELEGATION).unwrap(),
            &["stakingBlockNum", "nodeId", "amount"]
        );
        assert_eq!(param_order(CREATE_STAKING).unwrap().len(), 13);
        assert!(param_order(WITHDRAW_DELEGATE_REWARD).unwrap().is_empty());
        assert!(param_order(1007).is_none());
        assert!(param_order(6000).is_none());
    }
}
