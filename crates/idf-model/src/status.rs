use serde::Serialize;

/// Batch-wide severity, escalate-only.
///
/// The aggregator starts at `Normal`, raises to `Warning` when a record is
/// skipped, and `Fatal` is reserved for the zero-valid-commands case. The
/// derived `Ord` (`Normal < Warning < Fatal`) is what makes
/// [`ExitStatus::escalate`] monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ExitStatus {
    Normal,
    Warning,
    Fatal,
}

impl ExitStatus {
    /// Merge in an observed severity, never downgrading.
    #[must_use]
    pub fn escalate(self, observed: Self) -> Self {
        self.max(observed)
    }
}

#[cfg(test)]
mod tests {
    use super::ExitStatus;

    #[test]
    fn escalate_never_downgrades() {
        assert_eq!(
            ExitStatus::Normal.escalate(ExitStatus::Warning),
            ExitStatus::Warning
        );
        assert_eq!(
            ExitStatus::Warning.escalate(ExitStatus::Normal),
            ExitStatus::Warning
        );
        assert_eq!(
            ExitStatus::Fatal.escalate(ExitStatus::Warning),
            ExitStatus::Fatal
        );
    }

    #[test]
    fn severity_ordering() {
        assert!(ExitStatus::Normal < ExitStatus::Warning);
        assert!(ExitStatus::Warning < ExitStatus::Fatal);
    }
}
