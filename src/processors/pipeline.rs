use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ProcessingError, Result};
use crate::models::{
    BoundingBox, CollectionExtent, ItemRecord, SourceFile, SourceFormat, StacItem, TimeRange,
};
use crate::processors::aggregator::ExtentAccumulator;
use crate::processors::extent::extract_extent;
use crate::processors::organizer::DirectoryOrganizer;
use crate::readers::{default_grid_reader, CoordinateReader, DelimitedTextReader};
use crate::settings::RunConfig;
use crate::utils::filename::parse_time_range;
use crate::utils::layout::CatalogLayout;
use crate::utils::progress::ProgressReporter;
use crate::writers::{write_item, CatalogEmitter, ItemConfigWriter, OverwritePolicy, WriteOutcome};

/// List the supported files directly inside `input_dir`, sorted by name
pub fn discover_sources(input_dir: &Path) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        if let Some(source) = SourceFile::from_path(&entry.path()) {
            sources.push(source);
        }
    }

    sources.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));
    Ok(sources)
}

/// Extents of one file, as reported by [`CatalogBuilder::inspect`]
#[derive(Debug, Clone)]
pub struct InspectedFile {
    pub source: SourceFile,
    pub time_range: TimeRange,
    pub bbox: BoundingBox,
}

#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub items: Vec<ItemRecord>,
    pub extent: CollectionExtent,
    pub collection_path: PathBuf,
    pub collection_config_path: PathBuf,
    pub item_configs_written: usize,
    pub item_configs_skipped: usize,
    pub stac_items_written: usize,
}

impl BuildSummary {
    pub fn summary(&self) -> String {
        format!(
            "Catalog Summary:\n  Items: {}\n  Item configs written: {}\n  Item configs kept: {}\n  STAC items written: {}\n  {}\n  Collection: {}\n  Collection config: {}",
            self.items.len(),
            self.item_configs_written,
            self.item_configs_skipped,
            self.stac_items_written,
            self.extent.summary().replace('\n', "\n  "),
            self.collection_path.display(),
            self.collection_config_path.display()
        )
    }
}

/// Drives one catalog run: discovery, per-file placement, aggregation and
/// final emission.
///
/// Any error aborts the run before `collection.json` is written, so a
/// collection-level extent always accounts for every input file.
pub struct CatalogBuilder {
    layout: CatalogLayout,
    run_config: RunConfig,
    grid_reader: Box<dyn CoordinateReader>,
    text_reader: Box<dyn CoordinateReader>,
    item_config_policy: OverwritePolicy,
    emit_items: bool,
    show_progress: bool,
}

impl CatalogBuilder {
    pub fn new(base_dir: &Path, run_config: RunConfig) -> Self {
        Self {
            layout: CatalogLayout::new(base_dir, &run_config.id),
            run_config,
            grid_reader: default_grid_reader(),
            text_reader: Box::new(DelimitedTextReader::new()),
            item_config_policy: OverwritePolicy::default(),
            emit_items: false,
            show_progress: false,
        }
    }

    pub fn with_grid_reader(mut self, reader: Box<dyn CoordinateReader>) -> Self {
        self.grid_reader = reader;
        self
    }

    pub fn with_text_reader(mut self, reader: Box<dyn CoordinateReader>) -> Self {
        self.text_reader = reader;
        self
    }

    pub fn with_item_config_policy(mut self, policy: OverwritePolicy) -> Self {
        self.item_config_policy = policy;
        self
    }

    pub fn with_emit_items(mut self, emit_items: bool) -> Self {
        self.emit_items = emit_items;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn layout(&self) -> &CatalogLayout {
        &self.layout
    }

    pub fn run_config(&self) -> &RunConfig {
        &self.run_config
    }

    /// Organize every supported file in `input_dir` and emit the collection
    pub fn build(&self, input_dir: &Path) -> Result<BuildSummary> {
        let sources = self.discover(input_dir)?;
        info!(
            input = %input_dir.display(),
            files = sources.len(),
            collection = %self.layout.collection_root().display(),
            "Building catalog"
        );

        self.layout.ensure_dirs()?;

        let progress = ProgressReporter::new(
            sources.len() as u64,
            "Organizing files...",
            !self.show_progress,
        );

        let result = self.organize_all(&sources, input_dir, &progress);
        match &result {
            Ok(summary) => progress.finish_with_message(&format!(
                "Organized {} files",
                summary.items.len()
            )),
            Err(_) => progress.abandon(),
        }

        result
    }

    /// Parse and extract every supported file without writing anything
    pub fn inspect(&self, input_dir: &Path) -> Result<Vec<InspectedFile>> {
        self.discover(input_dir)?
            .into_iter()
            .map(|source| -> Result<InspectedFile> {
                let (time_range, bbox) = self.analyze(&source)?;
                Ok(InspectedFile {
                    source,
                    time_range,
                    bbox,
                })
            })
            .collect()
    }

    fn discover(&self, input_dir: &Path) -> Result<Vec<SourceFile>> {
        let sources = discover_sources(input_dir)?;
        if sources.is_empty() {
            return Err(ProcessingError::NoInputFiles {
                dir: input_dir.to_path_buf(),
            });
        }
        Ok(sources)
    }

    fn organize_all(
        &self,
        sources: &[SourceFile],
        input_dir: &Path,
        progress: &ProgressReporter,
    ) -> Result<BuildSummary> {
        let organizer = DirectoryOrganizer::new(&self.layout.data_dir(), &self.run_config.id);
        let item_config_writer = ItemConfigWriter::new(self.item_config_policy);
        let items_dir = self.layout.items_dir();

        let mut accumulator = ExtentAccumulator::with_capacity(input_dir, sources.len());
        let mut items = Vec::with_capacity(sources.len());
        // Item folders touched in this run, with the box written (or kept) there
        let mut item_configs: HashMap<PathBuf, (BoundingBox, WriteOutcome)> = HashMap::new();
        let mut item_configs_written = 0;
        let mut item_configs_skipped = 0;
        let mut stac_items_written = 0;

        for source in sources {
            let file_name = source.file_name()?;
            progress.set_message(&format!("Organizing {}", file_name));

            let (time_range, bbox) = self.analyze(source)?;
            let item_dir = organizer.place(source.path(), &time_range)?;

            match item_configs.entry(item_dir.clone()) {
                Entry::Vacant(slot) => {
                    let outcome = item_config_writer.write(&item_dir, &bbox)?;
                    match outcome {
                        WriteOutcome::Written => item_configs_written += 1,
                        WriteOutcome::Skipped => item_configs_skipped += 1,
                    }
                    slot.insert((bbox, outcome));
                }
                Entry::Occupied(mut slot) => {
                    // Same time range as an earlier file: the folder's box covers both
                    let (shared, outcome) = slot.get_mut();
                    if *outcome == WriteOutcome::Written {
                        *shared = shared.union(&bbox);
                        item_config_writer.replace(&item_dir, shared)?;
                    }
                    debug!(
                        file = %file_name,
                        item_dir = %item_dir.display(),
                        bbox = %shared,
                        "Item folder shared with an earlier file"
                    );
                }
            }

            let record = ItemRecord {
                source: source.clone(),
                asset_path: item_dir.join(file_name),
                item_dir,
                bbox,
                time_range,
            };

            if self.emit_items {
                write_item(&items_dir, &StacItem::from_record(&record)?)?;
                stac_items_written += 1;
            }

            info!(
                file = %file_name,
                format = %source.format(),
                bbox = %bbox,
                interval = %time_range,
                "Organized item"
            );

            accumulator.push(bbox, time_range);
            items.push(record);
            progress.increment(1);
        }

        let extent = accumulator.finish()?;
        let emitter = CatalogEmitter::new(self.layout.clone());
        let collection_path = emitter.emit_collection(&extent, &self.run_config)?;
        let collection_config_path = emitter.emit_collection_config(&self.run_config.id)?;

        Ok(BuildSummary {
            items,
            extent,
            collection_path,
            collection_config_path,
            item_configs_written,
            item_configs_skipped,
            stac_items_written,
        })
    }

    /// Time range from the file name, then bounding box from the file content
    fn analyze(&self, source: &SourceFile) -> Result<(TimeRange, BoundingBox)> {
        let file_name = source.file_name()?;
        let time_range = parse_time_range(file_name, source.format())?;

        let coordinates = self
            .reader_for(source.format())
            .read_coordinates(source.path())?;
        let bbox = extract_extent(&coordinates, file_name)?;

        debug!(file = %file_name, bbox = %bbox, interval = %time_range, "Analyzed file");
        Ok((time_range, bbox))
    }

    fn reader_for(&self, format: SourceFormat) -> &dyn CoordinateReader {
        match format {
            SourceFormat::Grid => self.grid_reader.as_ref(),
            SourceFormat::DelimitedText => self.text_reader.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::Coordinates;
    use tempfile::TempDir;

    struct FixedGridReader(Coordinates);

    impl CoordinateReader for FixedGridReader {
        fn read_coordinates(&self, _path: &Path) -> Result<Coordinates> {
            Ok(self.0.clone())
        }
    }

    fn run_config() -> RunConfig {
        RunConfig {
            id: "test-collection".to_string(),
            ..RunConfig::default()
        }
    }

    #[test]
    fn test_discover_filters_and_sorts() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("b_2002_2004.nc"), b"")?;
        fs::write(temp_dir.path().join("a_2001_2003.nc"), b"")?;
        fs::write(temp_dir.path().join("events_2020010100-2020123123.csv"), b"")?;
        fs::write(temp_dir.path().join("README.md"), b"")?;
        fs::create_dir(temp_dir.path().join("nested.nc"))?;

        let sources = discover_sources(temp_dir.path())?;
        let names: Vec<_> = sources.iter().map(|s| s.file_name().unwrap()).collect();

        assert_eq!(
            names,
            vec!["a_2001_2003.nc", "b_2002_2004.nc", "events_2020010100-2020123123.csv"]
        );
        Ok(())
    }

    #[test]
    fn test_malformed_filename_aborts_before_emission() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let input_dir = temp_dir.path().join("appdata");
        fs::create_dir(&input_dir)?;
        fs::write(input_dir.join("precipitation.nc"), b"grid")?;

        let builder = CatalogBuilder::new(temp_dir.path(), run_config()).with_grid_reader(
            Box::new(FixedGridReader(Coordinates::new(vec![50.0], vec![8.0]))),
        );

        let err = builder.build(&input_dir).unwrap_err();
        assert!(matches!(err, ProcessingError::MalformedFilename { .. }));
        assert!(!builder.layout().collection_file().exists());
        Ok(())
    }

    #[test]
    fn test_inspect_writes_nothing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let input_dir = temp_dir.path().join("appdata");
        fs::create_dir(&input_dir)?;
        fs::write(input_dir.join("pr_2001_2003.nc"), b"grid")?;

        let builder = CatalogBuilder::new(temp_dir.path(), run_config()).with_grid_reader(
            Box::new(FixedGridReader(Coordinates::new(vec![47.0, 55.0], vec![5.0, 15.0]))),
        );

        let inspected = builder.inspect(&input_dir)?;

        assert_eq!(inspected.len(), 1);
        assert_eq!(inspected[0].bbox.to_array(), [5.0, 47.0, 15.0, 55.0]);
        assert_eq!(inspected[0].time_range.start_year(), 2001);
        assert!(!builder.layout().collection_root().exists());
        Ok(())
    }
}
