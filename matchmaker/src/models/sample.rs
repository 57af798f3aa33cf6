use super::UserDirectory;

/// Built-in directory used when no input file is configured.
pub fn sample_directory() -> UserDirectory {
    UserDirectory::new()
        .with_memo(
            "userA",
            "Focusing on AI trading strategies and cross-chain arbitrage. Interested in collaborating on NFT-lending initiatives.",
        )
        .with_memo(
            "userB",
            "Looking for marketing experts and data analysts for future metaverse expansions. Keen on stablecoin yield farming.",
        )
        .with_memo(
            "userC",
            "Passionate about DeFi governance and on-chain treasury management. Also open to cross-network collaborations.",
        )
        .with_tasks(
            "userA",
            [
                "Completed a short analysis on high-frequency XRPL trading",
                "Participated in NFT aggregator experiment",
            ],
        )
        .with_tasks(
            "userB",
            [
                "Developed marketing strategy for new token listing",
                "Researched stablecoin yield optimization",
            ],
        )
        .with_tasks(
            "userC",
            [
                "Launched governance proposal for a treasury pilot project",
                "Coordinated a cross-chain partnership with side networks",
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_three_users_with_history() {
        let directory = sample_directory();
        assert_eq!(directory.memos.len(), 3);
        for user in directory.memos.keys() {
            assert_eq!(directory.tasks_for(user).len(), 2);
        }
        assert_eq!(directory.users_without_memo().count(), 0);
    }
}
