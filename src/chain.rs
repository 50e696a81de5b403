// CHAIN CLIENT
// Read-only eth_call access to the token contracts' getSvg views on Base.

use std::str::FromStr;

use async_trait::async_trait;
use ethers::abi::{HumanReadableParser, ParamType, Token};
use ethers::providers::{Http, Middleware, Provider};
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, TransactionRequest};
use tracing::info;

use crate::error::ServiceError;
use crate::inscription::Inscription;
use crate::tokens;

#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Calls the token's `getSvg` view. Returns `Ok(None)` when the
    /// contract renders nothing for this inscription.
    async fn get_svg(
        &self,
        token: &str,
        inscription: &Inscription,
    ) -> Result<Option<String>, ServiceError>;
}

pub struct RpcChainClient {
    provider: Provider<Http>,
}

impl RpcChainClient {
    pub fn new(rpc_url: &str) -> Result<Self, ServiceError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| ServiceError::Contract(format!("Invalid RPC url: {}", e)))?;
        Ok(Self { provider })
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn get_svg(
        &self,
        token: &str,
        inscription: &Inscription,
    ) -> Result<Option<String>, ServiceError> {
        let to = Address::from_str(token)
            .map_err(|e| ServiceError::Contract(format!("Invalid token address: {}", e)))?;

        // parse_abi rejects anonymous tuple parameters, the lexer accepts them.
        let function = HumanReadableParser::parse_function(tokens::get_abi(token))
            .map_err(|e| ServiceError::Contract(format!("Bad ABI descriptor: {}", e)))?;

        let args = inscription_tuple(function.inputs.first().map(|p| &p.kind), inscription)?;
        let data = function
            .encode_input(&[args])
            .map_err(|e| ServiceError::Contract(format!("Encode failed: {}", e)))?;

        info!("[CHAIN] Calling getSvg on {} with seed {}", token, inscription.seed);

        let tx = TypedTransaction::Legacy(TransactionRequest::new().to(to).data(data));
        let raw = self
            .provider
            .call(&tx, None)
            .await
            .map_err(|e| ServiceError::Contract(format!("getSvg call failed: {}", e)))?;

        let svg = function
            .decode_output(&raw)
            .map_err(|e| ServiceError::Contract(format!("Decode failed: {}", e)))?
            .into_iter()
            .next()
            .and_then(Token::into_string)
            .ok_or_else(|| ServiceError::Contract("getSvg returned no string".to_string()))?;

        Ok((!svg.is_empty()).then_some(svg))
    }
}

/// Shapes the inscription into the tuple layout the token's descriptor
/// declares. The registry only hands out these three layouts.
fn inscription_tuple(
    kind: Option<&ParamType>,
    inscription: &Inscription,
) -> Result<Token, ServiceError> {
    let components = match kind {
        Some(ParamType::Tuple(components)) => components.as_slice(),
        _ => return Err(ServiceError::Contract("getSvg takes a tuple".to_string())),
    };

    let fields = match components {
        [ParamType::Uint(256), ParamType::Uint(256)] => vec![
            Token::Uint(inscription.seed),
            Token::Uint(inscription.extra),
        ],
        [ParamType::Uint(256), ParamType::Uint(256), ParamType::Uint(256)] => vec![
            Token::Uint(inscription.seed),
            Token::Uint(inscription.seed2),
            Token::Uint(inscription.extra),
        ],
        [ParamType::Uint(256), ParamType::Uint(256), ParamType::Address] => vec![
            Token::Uint(inscription.seed),
            Token::Uint(inscription.extra),
            Token::Address(inscription.creator),
        ],
        _ => {
            return Err(ServiceError::Contract(
                "Unsupported inscription tuple".to_string(),
            ))
        }
    };

    Ok(Token::Tuple(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::abi::Function;
    use ethers::types::U256;
    use ethers::utils::keccak256;

    fn sample_inscription() -> Inscription {
        Inscription {
            seed: U256::from(500),
            seed2: U256::from(7),
            extra: U256::from(7),
            creator: Address::from_str("0xF78108c9BBaF466dd96BE41be728Fe3220b37119").unwrap(),
        }
    }

    fn selector(signature: &str) -> [u8; 4] {
        let hash = keccak256(signature.as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    fn parse_for(token: &str) -> Function {
        HumanReadableParser::parse_function(tokens::get_abi(token)).unwrap()
    }

    fn encode_for(token: &str) -> Vec<u8> {
        let function = parse_for(token);
        let args =
            inscription_tuple(function.inputs.first().map(|p| &p.kind), &sample_inscription())
                .unwrap();
        function.encode_input(&[args]).unwrap()
    }

    #[test]
    fn every_registry_descriptor_parses() {
        for project in &tokens::PROJECTS {
            let function = parse_for(project.address);
            assert_eq!(function.name, "getSvg", "{} descriptor", project.name);
            assert_eq!(function.inputs.len(), 1);
            assert!(matches!(function.inputs[0].kind, ParamType::Tuple(_)));
            assert_eq!(function.outputs.len(), 1);
            assert_eq!(function.outputs[0].kind, ParamType::String);
        }

        let fallback = parse_for("0x1111111111111111111111111111111111111111");
        assert_eq!(fallback.name, "getSvg");
    }

    #[test]
    fn encodes_the_two_field_call() {
        let data = encode_for(tokens::FUNGI_TOKEN);
        assert_eq!(&data[..4], selector("getSvg((uint256,uint256))"));
        assert_eq!(data.len(), 4 + 64);
        assert_eq!(U256::from_big_endian(&data[4..36]), U256::from(500));
        assert_eq!(U256::from_big_endian(&data[36..68]), U256::from(7));
    }

    #[test]
    fn encodes_the_pepi_call_with_seed2() {
        let data = encode_for(tokens::PEPI_TOKEN);
        assert_eq!(&data[..4], selector("getSvg((uint256,uint256,uint256))"));
        assert_eq!(data.len(), 4 + 96);
        assert_eq!(U256::from_big_endian(&data[4..36]), U256::from(500));
        assert_eq!(U256::from_big_endian(&data[36..68]), U256::from(7));
        assert_eq!(U256::from_big_endian(&data[68..100]), U256::from(7));
    }

    #[test]
    fn encodes_the_truffi_call_with_creator() {
        let data = encode_for(tokens::TRUFFI_TOKEN);
        assert_eq!(&data[..4], selector("getSvg((uint256,uint256,address))"));
        assert_eq!(data.len(), 4 + 96);
        let creator = Address::from_slice(&data[80..100]);
        assert_eq!(creator, sample_inscription().creator);
    }

    #[test]
    fn decodes_the_string_output() {
        let function = parse_for(tokens::FUNGI_TOKEN);
        let encoded = ethers::abi::encode(&[Token::String("<svg/>".to_string())]);

        let decoded = function.decode_output(&encoded).unwrap();
        assert_eq!(
            decoded.into_iter().next().and_then(Token::into_string),
            Some("<svg/>".to_string())
        );
    }

    #[test]
    fn rejects_unknown_tuple_shapes() {
        let inscription = sample_inscription();
        let bad = ParamType::Tuple(vec![ParamType::Bool]);
        assert!(inscription_tuple(Some(&bad), &inscription).is_err());
        assert!(inscription_tuple(Some(&ParamType::Uint(256)), &inscription).is_err());
        assert!(inscription_tuple(None, &inscription).is_err());
    }
}
