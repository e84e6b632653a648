use bowl_core::Energy;

/// Which documents each slot admitted during one iteration,
/// with the distance recorded at admission.
///
/// Two assignments are equal when every slot holds the same documents in
/// the same order; scores do not take part.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    members: Vec<Vec<(usize, Energy)>>,
}

impl Assignment {
    pub fn new(k: usize) -> Self {
        Self {
            members: vec![Vec::new(); k],
        }
    }
    /// number of slots
    pub fn k(&self) -> usize {
        self.members.len()
    }
    pub fn admit(&mut self, slot: usize, position: usize, score: Energy) {
        self.members[slot].push((position, score));
    }
    pub fn members(&self, slot: usize) -> &[(usize, Energy)] {
        &self.members[slot]
    }
    /// documents admitted anywhere
    pub fn admitted(&self) -> usize {
        self.members.iter().map(Vec::len).sum()
    }
}

impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.members.len() == other.members.len()
            && self
                .members
                .iter()
                .zip(other.members.iter())
                .all(|(a, b)| a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.0 == y.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_scores() {
        let mut a = Assignment::new(2);
        let mut b = Assignment::new(2);
        a.admit(0, 3, 0.1);
        b.admit(0, 3, 0.4);
        assert_eq!(a, b);
        a.admit(1, 4, 0.2);
        assert_ne!(a, b);
        b.admit(0, 4, 0.2);
        assert_ne!(a, b);
    }

    #[test]
    fn empty_assignments_compare_by_width() {
        assert_eq!(Assignment::new(3), Assignment::new(3));
        assert_ne!(Assignment::new(3), Assignment::new(2));
    }
}
