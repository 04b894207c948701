//! Anti-repetition memory for procedural picks.
//!
//! Every procedural roll (world themes, encounter flavors, loot families)
//! goes through the same funnel: a bounded per-profile history of recently
//! chosen keys, and a weighted draw that penalizes candidates in proportion
//! to how often their key appears in that history. Selection and commitment
//! are split on purpose: `pick` never records its own result, so callers
//! can preview or discard a draw without polluting the history.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::save::ProfileMeta;

/// Default bound on the recent-pick history.
pub const DEFAULT_WINDOW: u32 = 8;
/// Default per-repeat weight multiplier. One recent occurrence quarters a
/// candidate's weight, two cut it to a sixteenth, and so on.
pub const DEFAULT_PENALTY_BASE: f64 = 0.25;

/// Bounded recent-pick history, persisted inside the profile save data as
/// `{ "window": <int>, "recent": [<key>, ...] }` with the newest key last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessMemory {
    pub window: u32,
    pub recent: Vec<String>,
}

impl FreshnessMemory {
    pub fn new(window: u32) -> Self {
        Self {
            window: window.max(1),
            recent: Vec::new(),
        }
    }

    /// Drop oldest entries until `recent` fits the window again.
    fn truncate(&mut self) {
        let keep = self.window.max(1) as usize;
        if self.recent.len() > keep {
            let excess = self.recent.len() - keep;
            self.recent.drain(..excess);
        }
    }
}

/// Knobs for freshness behavior. `None` fields fall back to the defaults
/// above; a `penalty_base` outside the open interval (0, 1) is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreshnessConfig {
    pub window: Option<u32>,
    pub penalty_base: Option<f64>,
}

/// One candidate for a weighted draw. Weights are relative, not normalized.
#[derive(Debug, Clone)]
pub struct WeightedOption<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> WeightedOption<T> {
    pub fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// A committed-to-be-committable draw: the chosen value plus the history key
/// the caller should `push` once the pick is actually used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult<T> {
    pub value: T,
    pub key: String,
}

/// Guarantees the profile carries a well-formed memory, creating it lazily
/// with the configured window on first use. Re-clamps the window to at least
/// 1 and truncates the history on every call, so a collaborator that
/// reconfigured the window directly still ends up bounded.
pub fn ensure<'a>(meta: &'a mut ProfileMeta, cfg: &FreshnessConfig) -> &'a mut FreshnessMemory {
    let window = cfg.window.unwrap_or(DEFAULT_WINDOW).max(1);
    let mem = meta
        .freshness
        .get_or_insert_with(|| FreshnessMemory::new(window));
    if mem.window < 1 {
        mem.window = window;
    }
    mem.truncate();
    mem
}

/// Occurrences of `key` in the recent history. Zero when the profile has no
/// memory yet or the key is empty; pure read.
pub fn count_recent(meta: &ProfileMeta, key: &str) -> usize {
    let Some(mem) = meta.freshness.as_ref() else {
        return 0;
    };
    if key.is_empty() {
        return 0;
    }
    mem.recent.iter().filter(|k| k.as_str() == key).count()
}

/// Records a used pick. No-op when the profile has no memory yet or the key
/// is empty. The only mutator besides `ensure`.
pub fn push(meta: &mut ProfileMeta, key: &str) {
    let Some(mem) = meta.freshness.as_mut() else {
        return;
    };
    if key.is_empty() {
        return;
    }
    mem.recent.push(key.to_owned());
    mem.truncate();
}

/// `weight * base^count`. A count of zero returns the weight untouched, and
/// the function never floors a positive weight to exactly zero on its own.
pub fn penalize_weight(weight: f64, count: usize, base: Option<f64>) -> f64 {
    let base = match base {
        Some(b) if b > 0.0 && b < 1.0 => b,
        _ => DEFAULT_PENALTY_BASE,
    };
    if count == 0 {
        return weight;
    }
    weight * base.powi(count as i32)
}

/// Weighted draw with freshness penalty.
///
/// Keys come from `key_fn` when given, otherwise from the value's `Display`
/// form. Input weights are sanitized (negative or non-finite become zero)
/// before the penalty applies. When every penalized weight is zero the draw
/// falls back to a uniform choice over the original options, so history can
/// bias a pick but never starve one. Iteration follows input order, so a
/// seeded generator reproduces the same result every time.
pub fn pick<T>(
    rng: &mut dyn RandomSource,
    options: &[WeightedOption<T>],
    key_fn: Option<&dyn Fn(&T) -> String>,
    meta: &ProfileMeta,
    cfg: &FreshnessConfig,
) -> Option<SelectionResult<T>>
where
    T: Clone + Display,
{
    if options.is_empty() {
        return None;
    }
    let key_of = |value: &T| match key_fn {
        Some(f) => f(value),
        None => value.to_string(),
    };

    let mut total = 0.0;
    let mut penalized: Vec<(String, f64)> = Vec::with_capacity(options.len());
    for opt in options {
        let key = key_of(&opt.value);
        let count = count_recent(meta, &key);
        let raw = if opt.weight.is_finite() {
            opt.weight.max(0.0)
        } else {
            0.0
        };
        let w = penalize_weight(raw, count, cfg.penalty_base);
        total += w;
        penalized.push((key, w));
    }

    // Everything penalized (or supplied) down to nothing: uniform fallback
    // over the original options keeps picks alive regardless of history.
    if total <= 0.0 {
        let idx = ((rng.next_f64() * options.len() as f64) as usize).min(options.len() - 1);
        let opt = &options[idx];
        return Some(SelectionResult {
            value: opt.value.clone(),
            key: key_of(&opt.value),
        });
    }

    let mut r = rng.next_f64() * total;
    for (i, (key, w)) in penalized.iter().enumerate() {
        r -= w;
        if r <= 0.0 {
            return Some(SelectionResult {
                value: options[i].value.clone(),
                key: key.clone(),
            });
        }
    }

    // Cumulative rounding can leave a sliver of `r`; the last option wins.
    let (key, _) = penalized.pop()?;
    let value = options.last()?.value.clone();
    Some(SelectionResult { value, key })
}
