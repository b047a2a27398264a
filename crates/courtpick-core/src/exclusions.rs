// Players already rostered elsewhere in the league.

use std::collections::{BTreeMap, HashSet};

/// Player names that must never be selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten `{team name: [player names]}` into one set. Names are trimmed;
    /// blank entries are dropped.
    pub fn from_teams(teams: &BTreeMap<String, Vec<String>>) -> Self {
        teams.values().flatten().map(String::as_str).collect()
    }

    pub fn insert(&mut self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name.trim())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ExclusionSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_teams_flattens_all_rosters() {
        let mut teams = BTreeMap::new();
        teams.insert("North".to_string(), vec!["A One".to_string(), "B Two".to_string()]);
        teams.insert("South".to_string(), vec!["C Three".to_string(), " ".to_string()]);
        let set = ExclusionSet::from_teams(&teams);
        assert_eq!(set.len(), 3);
        assert!(set.contains("A One"));
        assert!(set.contains("C Three"));
        assert!(!set.contains("D Four"));
    }

    #[test]
    fn names_are_trimmed() {
        let set: ExclusionSet = ["  Padded Name  "].into_iter().collect();
        assert!(set.contains("Padded Name"));
        assert!(set.contains(" Padded Name"));
    }

    #[test]
    fn duplicate_names_collapse() {
        let set: ExclusionSet = ["Same", "Same"].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
