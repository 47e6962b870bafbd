use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static NON_MINUTE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9+]").expect("valid regex"));

/// Render provider elapsed/extra into a display minute: `25'` or `45'+2`.
/// No elapsed minute renders as an empty string, which sorts last.
pub fn format_minute(elapsed: Option<i64>, extra: Option<i64>) -> String {
    match (elapsed, extra) {
        (None, _) => String::new(),
        (Some(base), None) => format!("{}'", base),
        (Some(base), Some(extra)) => format!("{}'+{}", base, extra),
    }
}

/// Sort key derived from a display minute.
///
/// Ordered by base minute, then stoppage minute. `Unknown` sorts after every
/// parsed minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinuteKey {
    At { base: u32, extra: u32 },
    Unknown,
}

impl MinuteKey {
    /// Parse `45'`, `45'+2`, `90+3'`; anything without a leading number is `Unknown`.
    pub fn parse(minute: &str) -> Self {
        let normalized = minute.trim().replace("â€™", "'").replace('’', "'");
        let digits = NON_MINUTE_CHARS.replace_all(&normalized, "");
        if digits.is_empty() {
            return MinuteKey::Unknown;
        }

        let (base_str, extra_str) = match digits.split_once('+') {
            Some((b, e)) => (b, e),
            None => (&*digits, "0"),
        };

        let Ok(base) = base_str.parse::<u32>() else {
            return MinuteKey::Unknown;
        };
        // "45+" or "45+2+1" keep the base and drop the unreadable stoppage part
        let extra = extra_str.parse::<u32>().unwrap_or(0);

        MinuteKey::At { base, extra }
    }

    /// Numeric projection `base + extra / 100`; `Unknown` is positive infinity.
    pub fn as_f64(&self) -> f64 {
        match self {
            MinuteKey::At { base, extra } => *base as f64 + *extra as f64 / 100.0,
            MinuteKey::Unknown => f64::INFINITY,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, MinuteKey::Unknown)
    }
}

impl Ord for MinuteKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (MinuteKey::Unknown, MinuteKey::Unknown) => Ordering::Equal,
            (MinuteKey::Unknown, _) => Ordering::Greater,
            (_, MinuteKey::Unknown) => Ordering::Less,
            (
                MinuteKey::At { base: b1, extra: e1 },
                MinuteKey::At { base: b2, extra: e2 },
            ) => b1.cmp(b2).then(e1.cmp(e2)),
        }
    }
}

impl PartialOrd for MinuteKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minute() {
        assert_eq!(format_minute(Some(25), None), "25'");
        assert_eq!(format_minute(Some(45), Some(2)), "45'+2");
        assert_eq!(format_minute(None, Some(2)), "");
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(MinuteKey::parse("45'"), MinuteKey::At { base: 45, extra: 0 });
        assert_eq!(MinuteKey::parse("45'+2"), MinuteKey::At { base: 45, extra: 2 });
        assert_eq!(MinuteKey::parse(" 90+3' "), MinuteKey::At { base: 90, extra: 3 });
        assert_eq!(MinuteKey::parse("45’+1"), MinuteKey::At { base: 45, extra: 1 });
        assert_eq!(MinuteKey::parse(""), MinuteKey::Unknown);
        assert_eq!(MinuteKey::parse("HT"), MinuteKey::Unknown);
        assert_eq!(MinuteKey::parse("+3"), MinuteKey::Unknown);
    }

    #[test]
    fn test_stoppage_sorts_between_minutes() {
        let m45 = MinuteKey::parse("45'");
        let m45_2 = MinuteKey::parse("45'+2");
        let m46 = MinuteKey::parse("46'");
        assert!(m45 < m45_2);
        assert!(m45_2 < m46);
        assert!(m45.as_f64() < m45_2.as_f64() && m45_2.as_f64() < m46.as_f64());
    }

    #[test]
    fn test_large_stoppage_never_spills_into_next_minute() {
        // a 120-minute stoppage still belongs to minute 45
        assert!(MinuteKey::parse("45'+120") < MinuteKey::parse("46'"));
    }

    #[test]
    fn test_unknown_sorts_last() {
        assert!(MinuteKey::parse("120'+5") < MinuteKey::Unknown);
        assert_eq!(MinuteKey::Unknown.as_f64(), f64::INFINITY);
        assert!(MinuteKey::parse("??").is_unknown());
    }
}
