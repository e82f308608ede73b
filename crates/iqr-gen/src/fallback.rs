//! Fallback reporting for lenient string parameters

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Record of a default substituted for an unrecognised parameter value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackNotice {
    /// Parameter name (e.g., "how")
    pub parameter: String,

    /// Value the caller passed
    pub given: String,

    /// Value used instead
    pub substituted: String,
}

impl FallbackNotice {
    /// Create a notice and log it as a warning
    pub fn emit(
        parameter: impl Into<String>,
        given: impl Into<String>,
        substituted: impl Into<String>,
    ) -> Self {
        let notice = Self {
            parameter: parameter.into(),
            given: given.into(),
            substituted: substituted.into(),
        };
        warn!(
            parameter = %notice.parameter,
            given = %notice.given,
            substituted = %notice.substituted,
            "unrecognised parameter value, using default"
        );
        notice
    }
}

impl std::fmt::Display for FallbackNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "wrong input '{}' for '{}' parameter, '{}' is used",
            self.given, self.parameter, self.substituted
        )
    }
}

/// A value together with any defaults that were substituted to produce it
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub fallbacks: Vec<FallbackNotice>,
}

impl<T> Resolved<T> {
    /// Value obtained from exactly what the caller asked for
    pub fn exact(value: T) -> Self {
        Self {
            value,
            fallbacks: Vec::new(),
        }
    }

    /// Value obtained by substituting a default
    pub fn fallback(value: T, notice: FallbackNotice) -> Self {
        Self {
            value,
            fallbacks: vec![notice],
        }
    }

    /// True when no default was substituted
    pub fn is_exact(&self) -> bool {
        self.fallbacks.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            fallbacks: self.fallbacks,
        }
    }

    /// Combine with another resolution, concatenating notices in order
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Resolved<U>) -> Resolved<U> {
        let mut next = f(self.value);
        let mut fallbacks = self.fallbacks;
        fallbacks.append(&mut next.fallbacks);
        Resolved {
            value: next.value,
            fallbacks,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        let r = Resolved::exact(3);
        assert!(r.is_exact());
        assert_eq!(r.into_inner(), 3);
    }

    #[test]
    fn test_and_then_collects_notices() {
        let r = Resolved::fallback(1, FallbackNotice::emit("how", "bogus", "gaussian"))
            .and_then(|v| Resolved::fallback(v + 1, FallbackNotice::emit("output_format", "xml", "raw")));

        assert_eq!(r.value, 2);
        assert_eq!(r.fallbacks.len(), 2);
        assert_eq!(r.fallbacks[0].parameter, "how");
        assert_eq!(r.fallbacks[1].parameter, "output_format");
    }

    #[test]
    fn test_notice_display() {
        let notice = FallbackNotice::emit("how", "unknown", "gaussian");
        let text = notice.to_string();
        assert!(text.contains("unknown"));
        assert!(text.contains("gaussian"));
    }
}
