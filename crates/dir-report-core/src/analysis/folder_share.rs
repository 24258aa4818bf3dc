use super::aggregate::{folder_extension_stats, folder_then_size_desc, folder_totals};
use super::aggregate::{FolderExtensionStats, FolderTotal};
use crate::error::Error;
use crate::model::FileRecord;
use crate::table::{fmt_decimal, fmt_extension, TableRow};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A (folder, extension) group with its share of the folder's total size.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderShare {
    pub folder: PathBuf,
    pub extension: String,
    pub file_count: usize,
    pub total_kb: f64,
    pub percentage: f64,
}

impl TableRow for FolderShare {
    fn headers() -> &'static [&'static str] {
        &["Folder", "Extension", "Files", "Size (KB)", "Percent"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.folder.display().to_string(),
            fmt_extension(&self.extension),
            self.file_count.to_string(),
            fmt_decimal(self.total_kb),
            fmt_decimal(self.percentage),
        ]
    }
}

/// Join every group to its folder total on folder path.
///
/// Each folder must appear exactly once in `totals`; anything else is a
/// [`Error::JoinCardinality`]. A folder totalling zero bytes gives 0% to
/// each of its groups.
pub fn join_folder_shares(
    groups: &[FolderExtensionStats],
    totals: &[FolderTotal],
) -> Result<Vec<FolderShare>, Error> {
    let mut by_folder: BTreeMap<&Path, Vec<&FolderTotal>> = BTreeMap::new();
    for total in totals {
        by_folder.entry(total.folder.as_path()).or_default().push(total);
    }

    let mut shares = Vec::with_capacity(groups.len());
    for group in groups {
        let total = match by_folder.get(group.folder.as_path()).map(Vec::as_slice) {
            Some([single]) => *single,
            matched => {
                return Err(Error::JoinCardinality {
                    folder: group.folder.clone(),
                    matches: matched.map_or(0, <[_]>::len),
                })
            }
        };

        let percentage = if total.total_bytes == 0 {
            0.0
        } else {
            100.0 * (group.total_kb / total.total_kb)
        };

        shares.push((
            group.total_bytes,
            FolderShare {
                folder: group.folder.clone(),
                extension: group.extension.clone(),
                file_count: group.file_count,
                total_kb: group.total_kb,
                percentage,
            },
        ));
    }

    shares.sort_by(|(a_bytes, a), (b_bytes, b)| {
        folder_then_size_desc(&a.folder, *a_bytes, &b.folder, *b_bytes)
            .then_with(|| a.extension.cmp(&b.extension))
    });

    Ok(shares.into_iter().map(|(_, share)| share).collect())
}

/// Folder totals and each (folder, extension) group's share of them.
pub fn folder_share_report(
    records: &[FileRecord],
) -> Result<(Vec<FolderTotal>, Vec<FolderShare>), Error> {
    let totals = folder_totals(records);
    let groups = folder_extension_stats(records);
    let shares = join_folder_shares(&groups, &totals)?;
    Ok((totals, shares))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, size: u64) -> FileRecord {
        FileRecord::new(PathBuf::from(path), size)
    }

    #[test]
    fn test_quarter_and_three_quarters() {
        let records = vec![
            record("/f/one.a", 100 * 1024),
            record("/f/two.b", 300 * 1024),
        ];
        let (totals, shares) = folder_share_report(&records).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total_kb, 400.0);

        assert_eq!(shares[0].extension, "B");
        assert_eq!(shares[0].percentage, 75.0);
        assert_eq!(shares[1].extension, "A");
        assert_eq!(shares[1].percentage, 25.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred_per_folder() {
        let records = vec![
            record("/x/a.txt", 7),
            record("/x/b.txt", 13),
            record("/x/c.dll", 333),
            record("/x/d", 1),
            record("/y/e.png", 4096),
            record("/y/f.jpg", 1000),
        ];
        let (totals, shares) = folder_share_report(&records).unwrap();
        for total in &totals {
            let sum: f64 = shares
                .iter()
                .filter(|s| s.folder == total.folder)
                .map(|s| s.percentage)
                .sum();
            assert!((sum - 100.0).abs() < 1e-9, "{} sums to {}", total.folder.display(), sum);
        }
    }

    #[test]
    fn test_zero_byte_folder_reports_zero() {
        let records = vec![record("/e/a.txt", 0), record("/e/b.log", 0)];
        let (_, shares) = folder_share_report(&records).unwrap();
        assert!(shares.iter().all(|s| s.percentage == 0.0));
    }

    #[test]
    fn test_missing_folder_total_is_cardinality_error() {
        let groups = folder_extension_stats(&[record("/g/a.txt", 10)]);
        let err = join_folder_shares(&groups, &[]).unwrap_err();
        match err {
            Error::JoinCardinality { folder, matches } => {
                assert_eq!(folder, Path::new("/g"));
                assert_eq!(matches, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_folder_total_is_cardinality_error() {
        let records = vec![record("/g/a.txt", 10)];
        let groups = folder_extension_stats(&records);
        let mut totals = folder_totals(&records);
        totals.push(totals[0].clone());

        let err = join_folder_shares(&groups, &totals).unwrap_err();
        assert!(matches!(err, Error::JoinCardinality { matches: 2, .. }));
    }

    #[test]
    fn test_every_group_joins_exactly_once() {
        let records = vec![
            record("/r/a.txt", 1),
            record("/r/s/b.txt", 2),
            record("/r/s/t/c.txt", 3),
        ];
        let totals = folder_totals(&records);
        let groups = folder_extension_stats(&records);
        for group in &groups {
            let matches = totals.iter().filter(|t| t.folder == group.folder).count();
            assert_eq!(matches, 1, "folder {}", group.folder.display());
        }
        assert_eq!(join_folder_shares(&groups, &totals).unwrap().len(), groups.len());
    }
}
