use serde::Serialize;
use tracing::{info, warn};

use crate::database::ActivityRegistry;
use crate::error::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupReceipt {
    pub message: String,
}

// Emails are opaque; only surrounding whitespace is dropped and blanks rejected.
pub fn normalize_email(raw: &str) -> Result<&str, RegistryError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(RegistryError::InvalidEmail);
    }
    Ok(email)
}

pub fn sign_up(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<SignupReceipt, RegistryError> {
    let email = normalize_email(email)?;
    match registry.signup(activity_name, email) {
        Ok(()) => {
            info!(activity = activity_name, email, "participant signed up");
            Ok(SignupReceipt {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = activity_name, email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

pub fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<SignupReceipt, RegistryError> {
    let email = normalize_email(email)?;
    match registry.unregister(activity_name, email) {
        Ok(()) => {
            info!(activity = activity_name, email, "participant unregistered");
            Ok(SignupReceipt {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = activity_name, email, "unregister rejected: {}", e);
            Err(e)
        }
    }
}
