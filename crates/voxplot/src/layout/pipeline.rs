use super::Result;
use voxplot_core::{
    EndpointTable, ProcessedData, RawDataSource, StandardizerRegistry, VisualizationKind,
    fetch_raw,
};
use voxplot_layout::{LayoutConfig, RenderPass, VisualizationDispatcher};

/// Standardize → dispatch → descriptors, for every visualization kind.
#[derive(Debug)]
pub struct Pipeline {
    standardizers: StandardizerRegistry,
    dispatcher: VisualizationDispatcher,
    endpoints: EndpointTable,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(
            StandardizerRegistry::default(),
            VisualizationDispatcher::default(),
            EndpointTable::local_defaults(),
        )
    }
}

impl Pipeline {
    pub fn new(
        standardizers: StandardizerRegistry,
        dispatcher: VisualizationDispatcher,
        endpoints: EndpointTable,
    ) -> Self {
        Self {
            standardizers,
            dispatcher,
            endpoints,
        }
    }

    pub fn with_layout_config(config: LayoutConfig) -> Self {
        Self {
            dispatcher: VisualizationDispatcher::with_config(config),
            ..Self::default()
        }
    }

    pub fn with_endpoints(mut self, endpoints: EndpointTable) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn endpoints(&self) -> &EndpointTable {
        &self.endpoints
    }

    pub fn standardizers(&self) -> &StandardizerRegistry {
        &self.standardizers
    }

    pub fn dispatcher(&self) -> &VisualizationDispatcher {
        &self.dispatcher
    }

    pub fn standardize(&self, kind: VisualizationKind, raw: &str) -> Result<ProcessedData> {
        Ok(self.standardizers.standardize(kind, raw)?)
    }

    pub fn layout(&self, data: &ProcessedData) -> Result<RenderPass> {
        Ok(self.dispatcher.render(data)?)
    }

    /// Executor-free path for raw JSON already in hand.
    pub fn render_sync(&self, kind: VisualizationKind, raw: &str) -> Result<RenderPass> {
        let data = self.standardize(kind, raw)?;
        self.layout(&data)
    }

    /// Fetches the raw body for `kind` from its configured endpoint, then standardizes it.
    pub async fn fetch<S: RawDataSource>(
        &self,
        source: &S,
        kind: VisualizationKind,
    ) -> Result<ProcessedData> {
        let raw = fetch_raw(source, &self.endpoints, kind).await?;
        self.standardize(kind, &raw)
    }

    pub async fn fetch_and_render<S: RawDataSource>(
        &self,
        source: &S,
        kind: VisualizationKind,
    ) -> Result<RenderPass> {
        let data = self.fetch(source, kind).await?;
        self.layout(&data)
    }
}
