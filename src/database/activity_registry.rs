use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::database::seed;
use crate::error::RegistryError;
use crate::models::Activity;

// In-memory activity store shared by every request handler.
//
// Cloning is cheap and every clone points at the same rosters. One mutex guards the whole
// map; each operation does its check-then-mutate under a single lock acquisition.
#[derive(Debug, Clone)]
pub struct ActivityRegistry {
    inner: Arc<Mutex<IndexMap<String, Activity>>>,
}

impl ActivityRegistry {
    pub fn new<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        Self {
            inner: Arc::new(Mutex::new(activities.into_iter().collect())),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    // Snapshot in seed order, rosters included.
    pub fn list_activities(&self) -> IndexMap<String, Activity> {
        self.inner.lock().clone()
    }

    pub fn get_activity(&self, activity_name: &str) -> Result<Activity, RegistryError> {
        self.inner
            .lock()
            .get(activity_name)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(activity_name))
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.inner.lock();
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::not_found(activity_name))?;

        // Duplicate first: a repeat signup on a full activity still reports "already".
        if activity.is_registered(email) {
            return Err(RegistryError::AlreadyRegistered {
                email: email.to_string(),
                activity: activity_name.to_string(),
            });
        }
        if activity.is_full() {
            return Err(RegistryError::Full {
                activity: activity_name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.inner.lock();
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::not_found(activity_name))?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered {
                email: email.to_string(),
                activity: activity_name.to_string(),
            });
        };

        // `remove`, not `swap_remove`: the rest of the roster keeps signup order.
        activity.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_registry() -> ActivityRegistry {
        ActivityRegistry::new([
            (
                "Chess Club".to_string(),
                Activity::new("Chess", "Fridays", 3).with_participants(&["a@x", "b@x"]),
            ),
            (
                "Choir".to_string(),
                Activity::new("Singing", "Mondays", 1),
            ),
        ])
    }

    #[test]
    fn signup_appends_in_order() {
        let registry = small_registry();
        registry.signup("Chess Club", "c@x").unwrap();
        let chess = registry.get_activity("Chess Club").unwrap();
        assert_eq!(chess.participants, vec!["a@x", "b@x", "c@x"]);
    }

    #[test]
    fn signup_unknown_activity_is_not_found() {
        let registry = small_registry();
        let err = registry.signup("Knitting", "a@x").unwrap_err();
        assert_eq!(err, RegistryError::not_found("Knitting"));
    }

    #[test]
    fn duplicate_signup_mentions_already() {
        let registry = small_registry();
        let err = registry.signup("Chess Club", "a@x").unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
        assert!(err.to_string().to_lowercase().contains("already"));
    }

    #[test]
    fn full_activity_rejects_and_keeps_roster() {
        let registry = small_registry();
        registry.signup("Choir", "solo@x").unwrap();
        let err = registry.signup("Choir", "late@x").unwrap_err();
        assert_eq!(
            err,
            RegistryError::Full {
                activity: "Choir".to_string(),
                max_participants: 1,
            }
        );
        assert_eq!(registry.get_activity("Choir").unwrap().participants, vec!["solo@x"]);
    }

    #[test]
    fn duplicate_check_wins_over_capacity() {
        let registry = small_registry();
        registry.signup("Choir", "solo@x").unwrap();
        let err = registry.signup("Choir", "solo@x").unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }), "got: {err}");
    }

    #[test]
    fn unregister_keeps_remaining_order() {
        let registry = small_registry();
        registry.signup("Chess Club", "c@x").unwrap();
        registry.unregister("Chess Club", "a@x").unwrap();
        let chess = registry.get_activity("Chess Club").unwrap();
        assert_eq!(chess.participants, vec!["b@x", "c@x"]);
    }

    #[test]
    fn unregister_absent_email_is_not_registered() {
        let registry = small_registry();
        let before = registry.get_activity("Chess Club").unwrap();
        let err = registry.unregister("Chess Club", "ghost@x").unwrap_err();
        assert!(matches!(err, RegistryError::NotRegistered { .. }));
        assert_eq!(registry.get_activity("Chess Club").unwrap(), before);
    }

    #[test]
    fn registry_only_holds_what_it_was_built_with() {
        let empty = ActivityRegistry::new(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        let registry = small_registry();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn clones_share_rosters() {
        let registry = small_registry();
        let handle = registry.clone();
        handle.signup("Choir", "shared@x").unwrap();
        assert!(registry.get_activity("Choir").unwrap().is_registered("shared@x"));
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let names: Vec<String> = small_registry().list_activities().into_keys().collect();
        assert_eq!(names, vec!["Chess Club", "Choir"]);
    }
}
