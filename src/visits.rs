//! Per-browser view counter, bumped once per session.

pub const VIEW_COUNT_KEY: &str = "viewCount";
pub const SESSION_KEY: &str = "hasVisitedThisSession";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub count: u64,
    /// The stored count changed and must be written back.
    pub first_in_session: bool,
}

pub fn record_visit(stored: u64, visited_this_session: bool) -> Visit {
    if visited_this_session {
        Visit {
            count: stored,
            first_in_session: false,
        }
    } else {
        Visit {
            count: stored.saturating_add(1),
            first_in_session: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_once_per_session() {
        let first = record_visit(0, false);
        assert_eq!(
            first,
            Visit {
                count: 1,
                first_in_session: true
            }
        );
        let again = record_visit(first.count, true);
        assert_eq!(again.count, 1);
        assert!(!again.first_in_session);

        // new session picks up the stored count
        assert_eq!(record_visit(again.count, false).count, 2);
    }
}
