//! Severity filtering.

use std::collections::BTreeSet;

use crate::log::Severity;

/// Decides whether a record of a given severity is written.
///
/// A record passes when its severity is at or above the minimum and, if an
/// allow-list is set, is a member of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelFilter {
    min: Severity,
    allowed: Option<BTreeSet<Severity>>,
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new(Severity::Debug)
    }
}

impl LevelFilter {
    /// Pass every severity at or above `min`.
    pub fn new(min: Severity) -> Self {
        Self { min, allowed: None }
    }

    /// Restrict output to the given severities. An empty set clears the
    /// restriction instead of silencing everything.
    pub fn with_allowed(mut self, allowed: impl IntoIterator<Item = Severity>) -> Self {
        let allowed: BTreeSet<Severity> = allowed.into_iter().collect();
        self.allowed = (!allowed.is_empty()).then_some(allowed);
        self
    }

    /// The minimum severity.
    pub fn min(&self) -> Severity {
        self.min
    }

    /// The allow-list, if one is set.
    pub fn allowed(&self) -> Option<&BTreeSet<Severity>> {
        self.allowed.as_ref()
    }

    #[inline]
    pub fn allows(&self, severity: Severity) -> bool {
        severity >= self.min
            && self
                .allowed
                .as_ref()
                .map_or(true, |allowed| allowed.contains(&severity))
    }

    /// Build a filter from raw configuration strings.
    ///
    /// Never fails: an unparseable minimum falls back to DEBUG and unknown
    /// allow-list entries are skipped. Each problem is returned as a
    /// human-readable warning for the caller to log.
    pub fn from_config(
        min_level: Option<&str>,
        levels: Option<&[String]>,
    ) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let min = match min_level.map(str::trim).filter(|s| !s.is_empty()) {
            None => Severity::default(),
            Some(raw) => raw.parse::<Severity>().unwrap_or_else(|e| {
                warnings.push(format!("{}; falling back to {}", e, Severity::default()));
                Severity::default()
            }),
        };

        let mut filter = Self::new(min);
        if let Some(levels) = levels {
            let parsed = levels.iter().filter_map(|raw| match raw.parse::<Severity>() {
                Ok(severity) => Some(severity),
                Err(e) => {
                    warnings.push(format!("{}; ignoring allow-list entry", e));
                    None
                }
            });
            filter = filter.with_allowed(parsed.collect::<Vec<_>>());
        }

        (filter, warnings)
    }
}
