//! List sort/filter engine.
//!
//! Derives the visible rows of an offer or project table from an in-memory
//! export: unconditional visibility constraints, user-selected filters
//! (AND-combined), and a single-column sort with an asc/desc/none cycle.
//! All operations are total over well-typed input and preserve input order
//! for ties (the underlying sort is stable).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tavle_types::{CompanyId, Offer, OfferPhase, OfferStatus, Project};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active single-column sort. Absence (the `None` of an
/// `Option<SortConfig>`) means "no user sort": the default order applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

/// Advance the sort state for a repeated column activation:
/// none/other-key -> asc -> desc -> none on the same key; activating a
/// different key always restarts at asc.
pub fn cycle_sort(current: Option<&SortConfig>, key: &str) -> Option<SortConfig> {
    match current {
        Some(config) if config.key == key => match config.direction {
            SortDirection::Asc => Some(SortConfig {
                key: config.key.clone(),
                direction: SortDirection::Desc,
            }),
            SortDirection::Desc => None,
        },
        _ => Some(SortConfig {
            key: key.to_string(),
            direction: SortDirection::Asc,
        }),
    }
}

/// Comparable value extracted from a record at a sort key.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
    /// Epoch milliseconds.
    Time(i64),
}

impl SortValue {
    pub fn text(value: impl Into<String>) -> Self {
        SortValue::Text(value.into())
    }

    /// Timestamps arrive as RFC3339 or bare dates; anything else is
    /// compared as text.
    pub fn time_or_text(raw: &str) -> Self {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return SortValue::Time(dt.with_timezone(&Utc).timestamp_millis());
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            && let Some(dt) = date.and_hms_opt(0, 0, 0)
        {
            return SortValue::Time(dt.and_utc().timestamp_millis());
        }
        SortValue::text(raw)
    }

    fn canonical(&self) -> String {
        match self {
            SortValue::Text(s) => s.clone(),
            SortValue::Number(n) => n.to_string(),
            SortValue::Time(t) => t.to_string(),
        }
    }
}

/// Epoch milliseconds for a raw timestamp field, 0 when missing or
/// unparseable. Backs the default newest-first order.
fn epoch_millis(raw: Option<&str>) -> i64 {
    match raw.map(SortValue::time_or_text) {
        Some(SortValue::Time(t)) => t,
        _ => 0,
    }
}

// Caseless comparison stands in for the web client's locale collation;
// record order for equal keys comes from the stable sort.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
        (SortValue::Number(a), SortValue::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
        // Mixed pairing: plain less-than check over the canonical form.
        _ => a.canonical().cmp(&b.canonical()),
    }
}

/// Record that can be sorted by a wire field name.
pub trait SortSource {
    /// Value at `key`, or `None` when the field is missing on this record
    /// or the key is unknown.
    fn sort_value(&self, key: &str) -> Option<SortValue>;

    /// `updated_at` as epoch milliseconds, 0 when missing. Drives the
    /// default newest-first order.
    fn updated_at_epoch(&self) -> i64;
}

/// Sort in place. `None` config applies the default order (`updated_at`
/// descending, missing timestamps sink as epoch 0). With a config, missing
/// values sort after present ones on both directions; `desc` negates the
/// comparison of present values only.
pub fn sort_items<T: SortSource>(items: &mut [T], config: Option<&SortConfig>) {
    match config {
        None => items.sort_by_key(|item| std::cmp::Reverse(item.updated_at_epoch())),
        Some(config) => items.sort_by(|a, b| {
            match (a.sort_value(&config.key), b.sort_value(&config.key)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(va), Some(vb)) => {
                    let ordering = compare_values(&va, &vb);
                    match config.direction {
                        SortDirection::Asc => ordering,
                        SortDirection::Desc => ordering.reverse(),
                    }
                }
            }
        }),
    }
}

/// User-selected filters. `None` is the "all" sentinel: no constraint.
/// Configured filters combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    pub phase: Option<String>,
    pub company: Option<CompanyId>,
}

/// Record that can be matched against a [`ListFilter`].
pub trait Filterable {
    fn phase_key(&self) -> &'static str;
    fn company(&self) -> CompanyId;

    /// Unconditional visibility constraint, applied before user filters
    /// and never bypassable through filter sentinels.
    fn is_listable(&self) -> bool {
        true
    }
}

/// Keep the items every configured filter matches, after dropping items
/// that fail their unconditional constraints.
pub fn filter_items<T: Filterable>(items: Vec<T>, filter: &ListFilter) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.is_listable())
        .filter(|item| {
            filter
                .phase
                .as_deref()
                .is_none_or(|phase| item.phase_key() == phase)
        })
        .filter(|item| {
            filter
                .company
                .is_none_or(|company| item.company() == company)
        })
        .collect()
}

impl Filterable for Offer {
    fn phase_key(&self) -> &'static str {
        self.phase.as_key()
    }

    fn company(&self) -> CompanyId {
        self.company_id
    }

    // Drafts and archived offers never show up in list views, whatever
    // the user filters say.
    fn is_listable(&self) -> bool {
        self.phase != OfferPhase::Draft && self.status == OfferStatus::Active
    }
}

impl Filterable for Project {
    fn phase_key(&self) -> &'static str {
        self.phase.as_key()
    }

    fn company(&self) -> CompanyId {
        self.company_id
    }
}

impl SortSource for Offer {
    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "title" => Some(SortValue::text(&self.title)),
            "customerName" => self.customer_name.as_deref().map(SortValue::text),
            "responsibleUserName" => self.responsible_user_name.as_deref().map(SortValue::text),
            "phase" => Some(SortValue::text(self.phase.as_key())),
            "value" => self.value.map(SortValue::Number),
            "probability" => self.probability.map(|p| SortValue::Number(f64::from(p))),
            "dueDate" => self.due_date.as_deref().map(SortValue::time_or_text),
            "updatedAt" => self.updated_at.as_deref().map(SortValue::time_or_text),
            _ => None,
        }
    }

    fn updated_at_epoch(&self) -> i64 {
        epoch_millis(self.updated_at.as_deref())
    }
}

impl SortSource for Project {
    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::text(&self.name)),
            "customerName" => self.customer_name.as_deref().map(SortValue::text),
            "responsibleUserName" => self.responsible_user_name.as_deref().map(SortValue::text),
            "phase" => Some(SortValue::text(self.phase.as_key())),
            "contractValue" => self.contract_value.map(SortValue::Number),
            "completion" => self.completion.map(|c| SortValue::Number(f64::from(c))),
            "updatedAt" => self.updated_at.as_deref().map(SortValue::time_or_text),
            _ => None,
        }
    }

    fn updated_at_epoch(&self) -> i64 {
        epoch_millis(self.updated_at.as_deref())
    }
}
