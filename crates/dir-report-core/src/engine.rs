use crate::analysis::{
    extension_stats, folder_extension_stats, folder_share_report, large_executables, listing,
    names_and_extensions, sorted_by_extension,
};
use crate::config::AppConfig;
use crate::error::Error;
use crate::model::FileRecord;
use crate::progress::ScanReporter;
use crate::report::{Section, View};
use crate::scanner;
use crate::table::Table;
use glob::Pattern;
use std::time::Instant;
use tracing::{debug, info};

/// Builds report sections, scanning each root set at most once.
///
/// Listing roots are read the first time a listing-based view asks for
/// them and tree roots the first time a folder view does; later views
/// reuse the same records.
pub struct ReportEngine<'a> {
    config: AppConfig,
    ignore_patterns: Vec<Pattern>,
    reporter: &'a dyn ScanReporter,
    listing_records: Option<Vec<FileRecord>>,
    tree_records: Option<Vec<FileRecord>>,
}

impl<'a> ReportEngine<'a> {
    pub fn new(config: AppConfig, reporter: &'a dyn ScanReporter) -> Result<Self, Error> {
        let ignore_patterns = scanner::compile_ignore_patterns(&config.ignore_patterns)?;
        Ok(Self {
            config,
            ignore_patterns,
            reporter,
            listing_records: None,
            tree_records: None,
        })
    }

    /// Compute one view. Failures carry the view they happened in.
    pub fn section(&mut self, view: View) -> Result<Section, Error> {
        let start = Instant::now();
        let section = self.build_section(view).map_err(|e| e.in_view(view))?;
        debug!(
            "{} view: {} rows in {:.3}s",
            view,
            section.row_count(),
            start.elapsed().as_secs_f64()
        );
        Ok(section)
    }

    /// Compute `views` in order, stopping at the first failure.
    pub fn generate(&mut self, views: &[View]) -> Result<Vec<Section>, Error> {
        views.iter().map(|&view| self.section(view)).collect()
    }

    fn build_section(&mut self, view: View) -> Result<Section, Error> {
        let records = self.records_for(view)?;

        let tables = match view {
            View::Listing => vec![Table::from_rows(&listing(records))],
            View::Names => vec![Table::from_rows(&names_and_extensions(records))],
            View::Sorted => vec![Table::from_rows(&sorted_by_extension(records))],
            View::Executables => vec![Table::from_rows(&large_executables(records))],
            View::Extensions => vec![Table::from_rows(&extension_stats(records))],
            View::Folders => vec![Table::from_rows(&folder_extension_stats(records))],
            View::Percentages => {
                let (totals, shares) = folder_share_report(records)?;
                vec![
                    Table::from_rows(&totals).with_title("Folder totals"),
                    Table::from_rows(&shares).with_title("Share of folder"),
                ]
            }
        };

        Ok(Section { view, tables })
    }

    fn records_for(&mut self, view: View) -> Result<&[FileRecord], Error> {
        let (slot, roots, recursive) = if view.scans_tree() {
            (&mut self.tree_records, &self.config.tree_roots, true)
        } else {
            (&mut self.listing_records, &self.config.listing_roots, false)
        };

        if slot.is_none() {
            info!("Processing directories: {:?}", roots);
            let records =
                scanner::scan_roots(roots, recursive, &self.ignore_patterns, self.reporter)?;
            *slot = Some(records);
        }

        Ok(slot.as_deref().unwrap_or_default())
    }
}
