use indexmap::IndexMap;

use crate::database::ActivityRegistry;
use crate::models::ActivityView;

pub type ActivitiesPage = IndexMap<String, ActivityView>;

pub fn list_activities(registry: &ActivityRegistry) -> ActivitiesPage {
    registry
        .list_activities()
        .into_iter()
        .map(|(name, activity)| (name, ActivityView::from(activity)))
        .collect()
}
