use std::collections::HashSet;

/// Clients entitled to the loyalty discount. Membership is never revoked.
#[derive(Debug, Clone, Default)]
pub struct LoyaltyRegistry {
    members: HashSet<String>,
}

impl LoyaltyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_member(&self, client_id: &str) -> bool {
        self.members.contains(client_id)
    }

    /// Returns true if the client was not a member before.
    pub fn enroll(&mut self, client_id: &str) -> bool {
        if self.is_member(client_id) {
            return false;
        }
        self.members.insert(client_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
