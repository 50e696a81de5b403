// Inscription draws. Mirrors the token contracts' mint derivation: a seed
// sampled from the token's supply bands and a keccak hash binding the seed
// to the creator wallet.

use ethers::types::{Address, U256};
use ethers::utils::keccak256;
use rand::Rng;

use crate::tokens;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inscription {
    pub seed: U256,
    pub seed2: U256,
    pub extra: U256,
    pub creator: Address,
}

impl Inscription {
    /// A zero seed or zero hash means the contract has nothing to render
    /// for this draw.
    pub fn is_valid(&self) -> bool {
        !self.seed.is_zero() && !self.extra.is_zero()
    }
}

/// Draws a random inscription for `creator` against the token's level
/// table. The draw is not resampled when it comes up zero; callers treat
/// that as "no image".
pub fn generate(creator: Address, token: &str, rng: &mut impl Rng) -> Inscription {
    let levels = tokens::get_levels(token);
    let band = rng.gen_range(0..levels.len() - 1);
    let (min, max) = (levels[band], levels[band + 1]);
    let seed = U256::from((rng.gen::<f64>() * (max - min) as f64) as u64 + min);

    let mut packed = creator.as_bytes().to_vec();
    packed.extend_from_slice(&seed_bytes(seed));
    let extra = U256::from_big_endian(&keccak256(&packed));

    Inscription {
        seed,
        seed2: extra,
        extra,
        creator,
    }
}

/// Minimal big-endian encoding of `seed`, always at least one byte. This
/// is the byte layout the contracts hash at mint time.
pub(crate) fn seed_bytes(seed: U256) -> Vec<u8> {
    let mut buf = [0u8; 32];
    seed.to_big_endian(&mut buf);
    let start = buf.iter().position(|byte| *byte != 0).unwrap_or(31);
    buf[start..].to_vec()
}
