use std::{collections::HashSet, sync::Arc};

use crate::server::util::parse::normalize_platform_id;

/// Allow-list of platform IDs with administrator rights.
///
/// Administrators may cancel any booking. The list is loaded once from configuration
/// and shared across request handlers, so clones share the same set.
#[derive(Clone, Debug, Default)]
pub struct AdminService {
    ids: Arc<HashSet<String>>,
}

impl AdminService {
    /// Creates the service from a list of platform IDs.
    ///
    /// IDs are normalized and blank entries are skipped.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = ids
            .into_iter()
            .map(|id| normalize_platform_id(id.as_ref()))
            .filter(|id| !id.is_empty())
            .collect();

        Self { ids: Arc::new(ids) }
    }

    /// Parses a comma separated list such as the `ADMIN_IDS` variable.
    pub fn from_csv(value: &str) -> Self {
        Self::new(value.split(','))
    }

    /// Checks whether the given platform ID belongs to an administrator.
    ///
    /// The ID is normalized first, so `"123.0"` matches a configured `"123"`.
    pub fn is_admin(&self, platform_id: &str) -> bool {
        let platform_id = normalize_platform_id(platform_id);
        !platform_id.is_empty() && self.ids.contains(&platform_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
