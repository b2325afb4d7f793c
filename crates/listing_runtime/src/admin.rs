//! Admin panel reveal gate.
//!
//! The passphrase is part of the delivered page, so this is a UI convenience that hides a panel
//! from casual visitors. It is not access control and must not guard anything sensitive.

/// Outcome of one reveal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminDecision {
    Unlocked,
    Rejected,
    /// The visitor dismissed the prompt.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminGate {
    passphrase: String,
}

impl AdminGate {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// Compares a prompt reply by exact equality.
    pub fn check(&self, reply: Option<&str>) -> AdminDecision {
        match reply {
            None => AdminDecision::Cancelled,
            Some(reply) if reply == self.passphrase => AdminDecision::Unlocked,
            Some(_) => AdminDecision::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_reply_unlocks() {
        let gate = AdminGate::new("open");
        assert_eq!(gate.check(Some("open")), AdminDecision::Unlocked);
        assert_eq!(gate.check(Some(" open")), AdminDecision::Rejected);
        assert_eq!(gate.check(Some("")), AdminDecision::Rejected);
        assert_eq!(gate.check(None), AdminDecision::Cancelled);
    }
}
