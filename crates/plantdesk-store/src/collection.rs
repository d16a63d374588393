use std::collections::HashMap;
use std::fmt;

use tokio::sync::RwLock;
use uuid::Uuid;

use plantdesk_core::ListQuery;

use crate::error::StoreError;
use crate::record::Record;

/// One resource's rows, keyed by id.
pub struct Collection<T> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Record> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("resource", &T::RESOURCE)
            .finish_non_exhaustive()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: impl IntoIterator<Item = T>) -> Result<Self, StoreError> {
        let mut map = HashMap::new();
        for row in rows {
            let id = row.id();
            if map.insert(id, row).is_some() {
                return Err(StoreError::DuplicateId {
                    resource: T::RESOURCE,
                    id,
                });
            }
        }
        Ok(Self {
            rows: RwLock::new(map),
        })
    }

    /// Answers a list query: owner predicate, filters, sort, count, page.
    ///
    /// Returns the page and the total number of rows that passed the owner
    /// predicate and the filters.
    pub async fn fetch(&self, query: &ListQuery<T::Filter>, owner: Option<Uuid>) -> (Vec<T>, u64) {
        let rows = self.rows.read().await;

        let mut matched: Vec<&T> = rows
            .values()
            .filter(|row| owner.is_none() || row.owner() == owner)
            .filter(|row| row.matches(query.filters()))
            .collect();

        let field = query.sort();
        let order = query.order();
        matched.sort_by(|a, b| {
            order
                .apply(a.sort_key(field).cmp(&b.sort_key(field)))
                .then_with(|| a.id().cmp(&b.id()))
        });

        let total = matched.len() as u64;
        let offset = usize::try_from(query.page_request().offset()).unwrap_or(usize::MAX);
        let page = matched
            .into_iter()
            .skip(offset)
            .take(query.limit() as usize)
            .cloned()
            .collect();

        (page, total)
    }

    pub async fn get(&self, id: Uuid) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    /// First row satisfying `predicate`, in no particular order.
    pub async fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().await.values().find(|row| predicate(row)).cloned()
    }

    pub async fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.rows.read().await.values().any(predicate)
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    pub async fn insert(&self, row: T) -> Result<T, StoreError> {
        self.insert_unless(row, |_| None).await
    }

    /// Inserts `row` unless `conflict` reports a clash with an existing row.
    ///
    /// The check and the insert happen under one write lock.
    pub async fn insert_unless(
        &self,
        row: T,
        conflict: impl Fn(&T) -> Option<String>,
    ) -> Result<T, StoreError> {
        let mut rows = self.rows.write().await;

        if rows.contains_key(&row.id()) {
            return Err(StoreError::DuplicateId {
                resource: T::RESOURCE,
                id: row.id(),
            });
        }
        if let Some(reason) = rows.values().find_map(&conflict) {
            return Err(StoreError::Conflict(reason));
        }

        rows.insert(row.id(), row.clone());
        Ok(row)
    }

    /// Replaces the row with id `id` by `apply(current)`.
    ///
    /// Returns `Ok(None)` when no such row exists. When `apply` fails the
    /// stored row is left untouched.
    pub async fn update<E>(
        &self,
        id: Uuid,
        apply: impl FnOnce(T) -> Result<T, E>,
    ) -> Result<Option<T>, E> {
        let mut rows = self.rows.write().await;

        let Some(current) = rows.get(&id) else {
            return Ok(None);
        };
        let updated = apply(current.clone())?;
        rows.insert(id, updated.clone());

        Ok(Some(updated))
    }

    pub async fn remove(&self, id: Uuid) -> Option<T> {
        self.rows.write().await.remove(&id)
    }

    /// Removes every row matching `predicate` and returns how many went.
    pub async fn remove_where(&self, predicate: impl Fn(&T) -> bool) -> usize {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|_, row| !predicate(row));
        before - rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use plantdesk_core::{FilterSet, Paginated, RawParams, SortOrder};
    use plantdesk_models::{
        Metadata, Project, ProjectCategory, ProjectFilter, ProjectStatus, Setting,
    };
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> RawParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn query(pairs: &[(&str, &str)]) -> ListQuery<ProjectFilter> {
        let query = ListQuery::<ProjectFilter>::from_params(&params(pairs)).unwrap();
        query.ensure_sortable(ProjectFilter::SORT_FIELDS).unwrap();
        query
    }

    fn project(n: i64, client_id: Uuid) -> Project {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap() + Duration::hours(n);
        Project {
            id: Uuid::new_v4(),
            title: format!("Project {:02}", n),
            description: None,
            status: if n % 2 == 0 {
                ProjectStatus::Planning
            } else {
                ProjectStatus::Completed
            },
            category: ProjectCategory::Repair,
            campus: "Main".to_string(),
            building: None,
            is_emergency: n % 5 == 0,
            budget_cents: 1_000 * n,
            client_id,
            contractor_id: None,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).map(|d| d + Duration::days(n)),
            end_date: None,
            metadata: Metadata::new(),
            created_at: created,
            updated_at: created,
        }
    }

    fn collection(count: i64, client_id: Uuid) -> Collection<Project> {
        Collection::from_rows((1..=count).map(|n| project(n, client_id))).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_second_page_of_twenty_five() {
        let projects = collection(25, Uuid::new_v4());
        let query = query(&[("page", "2"), ("limit", "10")]);

        let (rows, total) = projects.fetch(&query, None).await;
        let envelope = Paginated::new(rows, total, query.page_request());

        assert_eq!(envelope.meta.total, 25);
        assert_eq!(envelope.meta.page, 2);
        assert_eq!(envelope.meta.limit, 10);
        assert_eq!(envelope.meta.total_pages, 3);
        assert_eq!(envelope.data.len(), 10);
        // newest first: page 2 starts at the 11th newest
        assert_eq!(envelope.data[0].title, "Project 15");
    }

    #[tokio::test]
    async fn test_fetch_last_partial_page_and_beyond() {
        let projects = collection(25, Uuid::new_v4());

        let (rows, total) = projects.fetch(&query(&[("page", "3"), ("limit", "10")]), None).await;
        assert_eq!(rows.len(), 5);
        assert_eq!(total, 25);

        let (rows, total) = projects.fetch(&query(&[("page", "9"), ("limit", "10")]), None).await;
        assert!(rows.is_empty());
        assert_eq!(total, 25);
    }

    #[tokio::test]
    async fn test_fetch_empty_collection() {
        let projects = Collection::<Project>::new();
        let query = query(&[]);

        let (rows, total) = projects.fetch(&query, None).await;
        let envelope = Paginated::new(rows, total, query.page_request());

        assert!(envelope.data.is_empty());
        assert_eq!(envelope.meta.total, 0);
        assert_eq!(envelope.meta.page, 1);
        assert_eq!(envelope.meta.limit, 20);
        assert_eq!(envelope.meta.total_pages, 0);
    }

    #[tokio::test]
    async fn test_owner_predicate_applies_before_count() {
        let mine = Uuid::new_v4();
        let theirs = Uuid::new_v4();
        let rows = (1..=7)
            .map(|n| project(n, mine))
            .chain((8..=20).map(|n| project(n, theirs)));
        let projects = Collection::from_rows(rows).unwrap();

        let (rows, total) = projects.fetch(&query(&[("limit", "5")]), Some(mine)).await;
        assert_eq!(total, 7);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|p| p.client_id == mine));
    }

    #[tokio::test]
    async fn test_filters_and_sort() {
        let projects = collection(10, Uuid::new_v4());

        let (rows, total) = projects
            .fetch(
                &query(&[("status", "planning"), ("sort", "budget"), ("order", "ASC")]),
                None,
            )
            .await;
        assert_eq!(total, 5);
        let budgets: Vec<i64> = rows.iter().map(|p| p.budget_cents).collect();
        assert_eq!(budgets, vec![2_000, 4_000, 6_000, 8_000, 10_000]);
    }

    #[tokio::test]
    async fn test_sort_ties_broken_by_id() {
        let client = Uuid::new_v4();
        let rows: Vec<Project> = (0..6)
            .map(|_| Project {
                title: "Same".to_string(),
                ..project(1, client)
            })
            .map(|p| Project {
                id: Uuid::new_v4(),
                ..p
            })
            .collect();
        let mut expected: Vec<Uuid> = rows.iter().map(|p| p.id).collect();
        expected.sort();

        let projects = Collection::from_rows(rows).unwrap();
        let query = query(&[("sort", "title")]);
        assert_eq!(query.order(), SortOrder::Desc);

        let (first, _) = projects.fetch(&query, None).await;
        let (second, _) = projects.fetch(&query, None).await;
        let ids: Vec<Uuid> = first.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_from_rows_rejects_duplicate_ids() {
        let row = project(1, Uuid::new_v4());
        let err = Collection::from_rows(vec![row.clone(), row]).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { .. }));
    }

    #[tokio::test]
    async fn test_insert_unless_conflict() {
        let settings = Collection::<Setting>::new();
        let now = Utc::now();
        let setting = |key: &str| Setting {
            id: Uuid::new_v4(),
            key: key.to_string(),
            value: json!(true),
            description: None,
            created_at: now,
            updated_at: now,
        };
        let same_key = |key: &'static str| {
            move |existing: &Setting| (existing.key == key).then(|| format!("{key} exists"))
        };

        settings
            .insert_unless(setting("maintenance.window"), same_key("maintenance.window"))
            .await
            .unwrap();
        let err = settings
            .insert_unless(setting("maintenance.window"), same_key("maintenance.window"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(settings.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_leaves_row_on_error() {
        let projects = collection(1, Uuid::new_v4());
        let (rows, _) = projects.fetch(&query(&[]), None).await;
        let id = rows[0].id;

        let result: Result<_, &str> = projects
            .update(id, |mut p| {
                p.title = "Changed".to_string();
                Err("rejected")
            })
            .await;
        assert!(result.is_err());
        assert_eq!(projects.get(id).await.unwrap().title, "Project 01");

        let updated = projects
            .update(id, |mut p| {
                p.title = "Changed".to_string();
                Ok::<_, &str>(p)
            })
            .await
            .unwrap();
        assert_eq!(updated.unwrap().title, "Changed");

        let missing = projects
            .update(Uuid::new_v4(), Ok::<_, &str>)
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_remove_where() {
        let client = Uuid::new_v4();
        let projects = collection(10, client);
        let removed = projects.remove_where(|p| p.is_emergency).await;
        assert_eq!(removed, 2);
        assert_eq!(projects.len().await, 8);
        assert!(!projects.any(|p| p.is_emergency).await);
    }
}
