// HTTP HANDLERS
// Handles: Farcaster mention webhooks, inscription PNG rendering, health.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use ethers::types::Address;
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::Deserialize;
use serde_json::json;
use sha2::Sha512;
use tracing::{error, info};

use crate::chain::ChainClient;
use crate::error::ServiceError;
use crate::inscription::{self, Inscription};
use crate::svg;
use crate::tokens::{self, Project, PROJECTS};
use crate::{messages, AppState};

type HmacSha512 = Hmac<Sha512>;

pub const SIGNATURE_HEADER: &str = "x-neynar-signature";

/// Wallet whose inscriptions back every generated image.
pub const INSCRIPTION_HOLDER: &str = "0xF78108c9BBaF466dd96BE41be728Fe3220b37119";

// ==================== Mention Webhook ====================

#[derive(Debug, Deserialize)]
struct MentionPayload {
    data: Option<CastData>,
}

#[derive(Debug, Deserialize)]
struct CastData {
    hash: Option<String>,
    text: Option<String>,
}

pub async fn mentions_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ServiceError> {
    verify_webhook_signature(&headers, &body, &state.config.webhook_secret)?;

    let payload: MentionPayload = serde_json::from_slice(&body)
        .map_err(|_| ServiceError::InvalidRequest("Missing cast hash in request".to_string()))?;
    let cast = payload
        .data
        .ok_or_else(|| ServiceError::InvalidRequest("Missing cast hash in request".to_string()))?;
    let hash = cast
        .hash
        .ok_or_else(|| ServiceError::InvalidRequest("Missing cast hash in request".to_string()))?;
    let text = cast
        .text
        .ok_or_else(|| ServiceError::InvalidRequest("Missing cast text in request".to_string()))?;

    let (project, reply, url) = {
        let mut rng = rand::thread_rng();
        let project = select_project(&text, &mut rng);
        let reply = messages::get_token_message(project.name, &mut rng)
            .ok_or_else(|| ServiceError::Other(format!("No reply lines for {}", project.name)))?;
        let url = inscription_url(&state.config.public_base_url, project, &mut rng);
        (project, reply, url)
    };

    info!("[MENTIONS] Replying to cast {} with a {} inscription", hash, project.name);

    // Reply failures are logged and swallowed, the webhook still acks.
    if let Err(e) = state
        .publisher
        .publish_cast(&state.config.signer_uuid, &hash, reply, &url)
        .await
    {
        error!("[MENTIONS] Failed to publish reply to {}: {}", hash, e);
    }

    Ok(Json(json!({ "success": true })).into_response())
}

/// Checks the webhook body against the shared-secret HMAC-SHA512 header.
pub(crate) fn verify_webhook_signature(
    headers: &HeaderMap,
    body: &[u8],
    secret: &str,
) -> Result<(), ServiceError> {
    let mut values = headers.get_all(SIGNATURE_HEADER).iter();
    let signature = match (values.next(), values.next()) {
        (Some(value), None) => value.to_str().map_err(|_| {
            ServiceError::Unauthorized("Invalid signature header".to_string())
        })?,
        (None, _) => {
            return Err(ServiceError::Unauthorized(
                "Missing signature header".to_string(),
            ))
        }
        _ => {
            return Err(ServiceError::Unauthorized(
                "Ambiguous signature header".to_string(),
            ))
        }
    };

    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|_| ServiceError::Unauthorized("Invalid webhook secret".to_string()))?;
    mac.update(body);
    let expected = hex::encode(mac.finalize().into_bytes());

    if expected == signature {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized("Invalid signature".to_string()))
    }
}

/// Picks the project to reply about. A project counts as mentioned when
/// the cast text contains its name or $ticker, case-insensitively; with
/// no mention at all, any tracked project will do.
pub(crate) fn select_project(text: &str, rng: &mut impl Rng) -> &'static Project {
    let text = text.to_lowercase();
    // A $ticker mention always contains the bare name, so one check covers both.
    let mentioned: Vec<&'static Project> = PROJECTS
        .iter()
        .filter(|project| text.contains(&project.name.to_lowercase()))
        .collect();

    if mentioned.is_empty() {
        &PROJECTS[rng.gen_range(0..PROJECTS.len())]
    } else {
        mentioned[rng.gen_range(0..mentioned.len())]
    }
}

pub(crate) fn inscription_url(base_url: &str, project: &Project, rng: &mut impl Rng) -> String {
    format!(
        "{}/api/inscription-png?token={}&address={}&q={}",
        base_url,
        project.address,
        INSCRIPTION_HOLDER,
        cache_buster(rng)
    )
}

/// Six random base36 characters so feed clients refetch the embed.
pub(crate) fn cache_buster(rng: &mut impl Rng) -> String {
    const CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..6)
        .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
        .collect()
}

// ==================== Inscription PNG ====================

#[derive(Debug, Deserialize)]
pub struct InscriptionQuery {
    token: Option<String>,
    address: Option<String>,
}

pub async fn inscription_png_handler(
    State(state): State<AppState>,
    Query(query): Query<InscriptionQuery>,
) -> Result<Response, ServiceError> {
    if let Some(token) = query.token.as_deref() {
        if !tokens::is_token(token) {
            return Err(ServiceError::InvalidRequest("Invalid token".to_string()));
        }
    }

    let (Some(token), Some(address)) = (query.token.as_deref(), query.address.as_deref()) else {
        return Err(ServiceError::InvalidRequest(
            "Missing or invalid token or address parameter".to_string(),
        ));
    };
    let creator = address.parse::<Address>().map_err(|_| {
        ServiceError::InvalidRequest("Missing or invalid token or address parameter".to_string())
    })?;

    let draw = inscription::generate(creator, token, &mut rand::thread_rng());

    let png = get_png(state.chain.as_ref(), token, &draw)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Failed to generate PNG".to_string()))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
        ],
        png,
    )
        .into_response())
}

/// Renders the PNG for one inscription draw, or `None` when there is no
/// image to serve. Zero draws never reach the contract.
pub(crate) async fn get_png(
    chain: &dyn ChainClient,
    token: &str,
    draw: &Inscription,
) -> Result<Option<Vec<u8>>, ServiceError> {
    if !draw.is_valid() {
        return Ok(None);
    }

    let Some(raw_svg) = chain.get_svg(token, draw).await? else {
        return Ok(None);
    };

    let png = svg::render_png(&svg::sanitize_svg(&raw_svg))?;
    Ok(Some(png))
}

// ==================== Health ====================

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "service": "fungibles-service",
        "version": "1.0.0",
        "status": "healthy"
    }))
}
