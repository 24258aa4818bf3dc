use crate::table::Table;
use std::fmt;
use std::str::FromStr;

/// The report views, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Listing,
    Names,
    Sorted,
    Executables,
    Extensions,
    Folders,
    Percentages,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Listing,
        View::Names,
        View::Sorted,
        View::Executables,
        View::Extensions,
        View::Folders,
        View::Percentages,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Names => "names",
            Self::Sorted => "sorted",
            Self::Executables => "executables",
            Self::Extensions => "extensions",
            Self::Folders => "folders",
            Self::Percentages => "percentages",
        }
    }

    /// Section header printed above the view.
    pub fn title(self) -> &'static str {
        match self {
            Self::Listing => "Files",
            Self::Names => "File names and extensions",
            Self::Sorted => "Files by extension, then name descending",
            Self::Executables => "Executables over 1 MB, smallest first",
            Self::Extensions => "Size statistics by extension",
            Self::Folders => "Size by folder and extension",
            Self::Percentages => "Extension share of folder size",
        }
    }

    /// Folder views walk the tree roots; the rest list the listing roots.
    pub fn scans_tree(self) -> bool {
        matches!(self, Self::Folders | Self::Percentages)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown view '{}'", s))
    }
}

/// Output of one view.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub view: View,
    pub tables: Vec<Table>,
}

impl Section {
    pub fn title(&self) -> &'static str {
        self.view.title()
    }

    pub fn row_count(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_ids_round_trip() {
        for view in View::ALL {
            assert_eq!(view.id().parse::<View>().unwrap(), view);
        }
        assert_eq!("FOLDERS".parse::<View>().unwrap(), View::Folders);
        assert!("bogus".parse::<View>().is_err());
    }

    #[test]
    fn test_only_folder_views_scan_tree() {
        let tree: Vec<View> = View::ALL.into_iter().filter(|v| v.scans_tree()).collect();
        assert_eq!(tree, vec![View::Folders, View::Percentages]);
    }
}
