//! Queries over scanned file records: projections and filters, grouped
//! statistics, and the folder-share join.

pub mod aggregate;
pub mod folder_share;
pub mod projection;

pub use aggregate::{
    extension_stats, folder_extension_stats, folder_totals, summarize_by, ExtensionStats,
    FolderExtensionStats, FolderTotal, SizeSummary,
};
pub use folder_share::{folder_share_report, join_folder_shares, FolderShare};
pub use projection::{
    large_executables, listing, names_and_extensions, sorted_by_extension, ExecutableRow,
    ListingRow, NameExtension,
};
