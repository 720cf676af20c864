use thiserror::Error;

// Validation failures from roster operations. None of them are fatal or retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found: {activity}")]
    NotFound { activity: String },

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { email: String, activity: String },

    #[error("{email} is not signed up for {activity}")]
    NotRegistered { email: String, activity: String },

    #[error("{activity} is full ({max_participants} participants)")]
    Full {
        activity: String,
        max_participants: usize,
    },

    #[error("Email must not be empty")]
    InvalidEmail,
}

impl RegistryError {
    pub fn not_found(activity: &str) -> Self {
        Self::NotFound {
            activity: activity.to_string(),
        }
    }
}
