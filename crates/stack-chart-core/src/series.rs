// File: crates/stack-chart-core/src/series.rs
// Summary: Observation model, ordered series keys, and the validated frame the engine consumes.
// Notes:
// - Observations are never re-sorted; input order is taken as chronological.
// - Missing or non-numeric values are rejected, never zero-filled.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{ChartError, Result};

/// Ordered, distinct series names. The first key is the base layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesKeys(Vec<String>);

impl SeriesKeys {
    pub fn new<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(keys.len());
        for k in &keys {
            if !seen.insert(k.as_str()) {
                return Err(ChartError::DuplicateKey(k.clone()));
            }
        }
        Ok(Self(keys))
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }
    pub fn as_slice(&self) -> &[String] { &self.0 }
    pub fn last(&self) -> Option<&str> { self.0.last().map(String::as_str) }
}

/// One time-keyed row of series values.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub date: DateTime<Utc>,
    pub values: HashMap<String, f64>,
}

impl Observation {
    pub fn new(date: DateTime<Utc>) -> Self {
        Self { date, values: HashMap::new() }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Raw value for `key` at `row`, failing on a missing or non-finite entry.
    pub fn require(&self, row: usize, key: &str) -> Result<f64> {
        match self.values.get(key) {
            None => Err(ChartError::MissingKey { row, key: key.to_string() }),
            Some(v) if !v.is_finite() => Err(ChartError::NonNumeric {
                row,
                key: key.to_string(),
                raw: v.to_string(),
            }),
            Some(&v) => Ok(v),
        }
    }

    /// Build an observation from a raw string record (e.g. one CSV row).
    ///
    /// Only `date_field` and the fields named in `keys` are read; other
    /// columns are ignored. Empty cells count as missing.
    pub fn from_fields<'a, I>(row: usize, fields: I, date_field: &str, keys: &SeriesKeys) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let fields: HashMap<&str, &str> = fields
            .into_iter()
            .map(|(k, v)| (k.trim(), v.trim()))
            .filter(|(_, v)| !v.is_empty())
            .collect();

        let raw_date = fields.get(date_field).ok_or(ChartError::MissingDate { row })?;
        let date = parse_date(raw_date).ok_or_else(|| ChartError::InvalidDate {
            row,
            raw: raw_date.to_string(),
        })?;

        let mut obs = Observation::new(date);
        for key in keys.iter() {
            let raw = fields
                .get(key)
                .ok_or_else(|| ChartError::MissingKey { row, key: key.to_string() })?;
            let v = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ChartError::NonNumeric {
                    row,
                    key: key.to_string(),
                    raw: raw.to_string(),
                })?;
            obs.values.insert(key.to_string(), v);
        }
        Ok(obs)
    }
}

/// Parse RFC 3339, `%Y-%m-%d`, `%Y-%m-%d %H:%M:%S`, or integer epoch
/// seconds (milliseconds when above 10^12).
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(12) {
            return DateTime::from_timestamp_millis(n);
        }
        return DateTime::from_timestamp(n, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&ndt));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}

/// Observations paired with the keys they were validated against.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    keys: SeriesKeys,
    observations: Vec<Observation>,
}

impl Frame {
    /// Validate that every observation carries a finite value for every key.
    pub fn new(keys: SeriesKeys, observations: Vec<Observation>) -> Result<Self> {
        for (row, obs) in observations.iter().enumerate() {
            for key in keys.iter() {
                obs.require(row, key)?;
            }
        }
        Ok(Self { keys, observations })
    }

    pub fn keys(&self) -> &SeriesKeys { &self.keys }
    pub fn observations(&self) -> &[Observation] { &self.observations }
    pub fn len(&self) -> usize { self.observations.len() }
    pub fn is_empty(&self) -> bool { self.observations.is_empty() }

    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.observations.get(index)
    }

    /// A single observation is drawn as one stacked column instead of areas.
    pub fn is_single_column(&self) -> bool {
        self.observations.len() == 1
    }

    /// Earliest and latest dates, or `None` with no observations.
    pub fn date_extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let mut it = self.observations.iter().map(|o| o.date);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }
}
