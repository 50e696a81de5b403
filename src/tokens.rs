// TOKEN REGISTRY
// Tracked inscription tokens on Base, their supply levels and getSvg ABIs.

pub const FUNGI_TOKEN: &str = "0x7d9CE55D54FF3FEddb611fC63fF63ec01F26D15F";
pub const JELLI_TOKEN: &str = "0xA1b9d812926a529D8B002E69FCd070c8275eC73c";
pub const PEPI_TOKEN: &str = "0x28a5e71BFc02723eAC17E39c84c5190415C0de9F";
pub const FROGGI_TOKEN: &str = "0x88A78C5035BdC8C9A8bb5c029e6cfCDD14B822FE";
pub const TRUFFI_TOKEN: &str = "0x2496a9AF81A87eD0b17F6edEaf4Ac57671d24f38";

#[derive(Debug)]
pub struct Project {
    pub name: &'static str,
    pub address: &'static str,
}

pub static PROJECTS: [Project; 5] = [
    Project { name: "Fungi", address: FUNGI_TOKEN },
    Project { name: "Jelli", address: JELLI_TOKEN },
    Project { name: "Pepi", address: PEPI_TOKEN },
    Project { name: "Froggi", address: FROGGI_TOKEN },
    Project { name: "Truffi", address: TRUFFI_TOKEN },
];

// Seed bands per token. Consecutive entries bound one rarity band,
// so every table needs at least two entries.
const DEFAULT_LEVELS: &[u64] = &[0, 1_000_000];
const FUNGI_LEVELS: &[u64] = &[0, 21_000, 525_000, 1_050_000, 1_575_000, 2_100_000, 2_625_000];
const JELLI_LEVELS: &[u64] = &[0, 21_000, 105_000, 420_000, 1_050_000, 1_764_000];
const PEPI_LEVELS: &[u64] = &[0, 11, 22, 33, 44, 56, 77];
const FROGGI_LEVELS: &[u64] = &[0, 3_000, 10_000, 30_000, 60_000, 120_000, 240_000];
// Truffi seeds start at 1, the contract treats zero as unminted.
const TRUFFI_LEVELS: &[u64] = &[1, 21_000, 105_000, 420_000, 1_050_000, 2_100_000];

/// True when `token` is one of the tracked inscription contracts.
pub fn is_token(token: &str) -> bool {
    PROJECTS
        .iter()
        .any(|project| project.address.eq_ignore_ascii_case(token))
}

pub fn get_levels(token: &str) -> &'static [u64] {
    if token.eq_ignore_ascii_case(FUNGI_TOKEN) {
        FUNGI_LEVELS
    } else if token.eq_ignore_ascii_case(JELLI_TOKEN) {
        JELLI_LEVELS
    } else if token.eq_ignore_ascii_case(PEPI_TOKEN) {
        PEPI_LEVELS
    } else if token.eq_ignore_ascii_case(FROGGI_TOKEN) {
        FROGGI_LEVELS
    } else if token.eq_ignore_ascii_case(TRUFFI_TOKEN) {
        TRUFFI_LEVELS
    } else {
        DEFAULT_LEVELS
    }
}

/// Human-readable descriptor for the token's `getSvg` view. Pepi takes a
/// second seed, Truffi takes the creator address, everything else takes
/// the two-field tuple.
pub fn get_abi(token: &str) -> &'static str {
    if token.eq_ignore_ascii_case(PEPI_TOKEN) {
        "function getSvg((uint256,uint256,uint256)) view returns (string)"
    } else if token.eq_ignore_ascii_case(TRUFFI_TOKEN) {
        "function getSvg((uint256,uint256,address)) view returns (string)"
    } else {
        "function getSvg((uint256,uint256)) view returns (string)"
    }
}
