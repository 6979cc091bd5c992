/// In-app purchase stub
///
/// Purchases are disabled in this version while the build migrates off its
/// previous billing library; every flow returns Unavailable. The premium
/// entitlement flag is still persisted so a previously granted entitlement
/// keeps working.

use thiserror::Error;
use tracing::warn;

use crate::storage::{keys, StorageGateway};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IapError {
    #[error("In-app purchases are currently unavailable in this build")]
    Unavailable,
}

/// Attempt to buy the premium subscription (always unavailable)
pub async fn purchase_premium() -> Result<(), IapError> {
    Err(IapError::Unavailable)
}

/// Attempt to restore previous purchases (always unavailable)
pub async fn restore_purchases() -> Result<(), IapError> {
    Err(IapError::Unavailable)
}

/// Whether a premium entitlement has been recorded
pub async fn is_premium<G: StorageGateway>(gateway: &G) -> bool {
    match gateway.get(keys::PREMIUM).await {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            warn!("Failed to read premium flag: {}", e);
            false
        }
    }
}

/// Record or revoke the premium entitlement
pub async fn set_premium<G: StorageGateway>(gateway: &G, active: bool) {
    let value = if active { "true" } else { "false" };
    if let Err(e) = gateway.set(keys::PREMIUM, value).await {
        warn!("Failed to persist premium flag: {}", e);
    }
}
