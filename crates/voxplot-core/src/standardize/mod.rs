//! Raw JSON → canonical model, one standardizer per visualization kind.

mod heat_map;
mod multi_series;
mod pie;
mod scatter;
mod stacked;

pub use heat_map::HeatMapStandardizer;
pub use multi_series::MultiSeriesStandardizer;
pub use pie::PieChartStandardizer;
pub use scatter::ScatterPlotStandardizer;
pub use stacked::StackedMultiSeriesStandardizer;

use crate::{Error, ProcessedData, Result, VisualizationKind};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub trait DataStandardizer: Send + Sync {
    fn kind(&self) -> VisualizationKind;

    /// Parses `raw` and derives the canonical model for [`DataStandardizer::kind`].
    fn standardize(&self, raw: &str) -> Result<ProcessedData>;
}

/// Maps a visualization kind to the standardizer that handles it.
pub struct StandardizerRegistry {
    standardizers: HashMap<VisualizationKind, Box<dyn DataStandardizer>>,
}

impl std::fmt::Debug for StandardizerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.standardizers.keys().copied().collect();
        kinds.sort();
        f.debug_struct("StandardizerRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

impl Default for StandardizerRegistry {
    fn default() -> Self {
        Self::with_all_kinds()
    }
}

impl StandardizerRegistry {
    /// An empty registry; every kind reports [`Error::NotImplemented`].
    pub fn new() -> Self {
        Self {
            standardizers: HashMap::new(),
        }
    }

    pub fn with_all_kinds() -> Self {
        let mut reg = Self::new();
        reg.insert(Box::new(ScatterPlotStandardizer));
        reg.insert(Box::new(HeatMapStandardizer));
        reg.insert(Box::new(MultiSeriesStandardizer));
        reg.insert(Box::new(StackedMultiSeriesStandardizer));
        reg.insert(Box::new(PieChartStandardizer));
        reg
    }

    /// Registers `standardizer` under its own kind, replacing any previous entry.
    pub fn insert(&mut self, standardizer: Box<dyn DataStandardizer>) {
        self.standardizers.insert(standardizer.kind(), standardizer);
    }

    pub fn remove(&mut self, kind: VisualizationKind) -> Option<Box<dyn DataStandardizer>> {
        self.standardizers.remove(&kind)
    }

    pub fn get(&self, kind: VisualizationKind) -> Option<&dyn DataStandardizer> {
        self.standardizers.get(&kind).map(|s| s.as_ref())
    }

    pub fn create(&self, kind: VisualizationKind) -> Result<&dyn DataStandardizer> {
        self.get(kind).ok_or(Error::NotImplemented { kind })
    }

    pub fn create_for_tag(&self, tag: &str) -> Result<&dyn DataStandardizer> {
        self.create(VisualizationKind::from_tag(tag)?)
    }

    pub fn standardize(&self, kind: VisualizationKind, raw: &str) -> Result<ProcessedData> {
        let data = self.create(kind)?.standardize(raw)?;
        tracing::debug!(%kind, bytes = raw.len(), "standardized raw data");
        Ok(data)
    }
}

pub(crate) fn parse_json<T: DeserializeOwned>(kind: VisualizationKind, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|err| Error::parse(kind, err.to_string()))
}
