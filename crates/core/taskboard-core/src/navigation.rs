/// Dashboard sections. Exactly one is visible at a time; the dashboard starts
/// on [`Section::Tasks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Tasks,
    New,
    Profile,
    Stats,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Tasks,
        Section::New,
        Section::Profile,
        Section::Stats,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Tasks => "tasks",
            Section::New => "new",
            Section::Profile => "profile",
            Section::Stats => "stats",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Page title shown while the section is active
    pub fn title(self) -> &'static str {
        match self {
            Section::Tasks => "My Tasks",
            Section::New => "New Task",
            Section::Profile => "My Profile",
            Section::Stats => "Statistics",
        }
    }

    /// Sidebar link label
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Tasks => "My Tasks",
            Section::New => "New Task",
            Section::Profile => "Profile",
            Section::Stats => "Statistics",
        }
    }

    pub fn nav_icon(self) -> &'static str {
        match self {
            Section::Tasks => "fa-tasks",
            Section::New => "fa-plus-circle",
            Section::Profile => "fa-user",
            Section::Stats => "fa-chart-pie",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        let titles: Vec<_> = Section::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(titles, ["My Tasks", "New Task", "My Profile", "Statistics"]);
    }

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("settings"), None);
        assert_eq!(Section::default(), Section::Tasks);
    }
}
