//! Kind → visualization handler.

use crate::chart::{
    HeatMapUsingBars, MultiSeriesBarChart, PieChart, ScatterPlot, StackedMultiSeriesBarChart,
    VisualizationHandler,
};
use crate::config::LayoutConfig;
use crate::model::RenderPass;
use crate::Result;
use std::collections::HashMap;
use voxplot_core::{ProcessedData, VisualizationKind};

pub type HandlerConstructor = fn(&LayoutConfig) -> Box<dyn VisualizationHandler>;

fn scatter_plot(config: &LayoutConfig) -> Box<dyn VisualizationHandler> {
    Box::new(ScatterPlot::new(config))
}

fn heat_map_using_bars(config: &LayoutConfig) -> Box<dyn VisualizationHandler> {
    Box::new(HeatMapUsingBars::new(config))
}

fn multi_series_bar_chart(config: &LayoutConfig) -> Box<dyn VisualizationHandler> {
    Box::new(MultiSeriesBarChart::new(config))
}

fn stacked_multi_series_bar_chart(config: &LayoutConfig) -> Box<dyn VisualizationHandler> {
    Box::new(StackedMultiSeriesBarChart::new(config))
}

fn pie_chart(config: &LayoutConfig) -> Box<dyn VisualizationHandler> {
    Box::new(PieChart::new(config))
}

#[derive(Clone)]
pub struct VisualizationDispatcher {
    config: LayoutConfig,
    constructors: HashMap<VisualizationKind, HandlerConstructor>,
}

impl std::fmt::Debug for VisualizationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.constructors.keys().copied().collect();
        kinds.sort();
        f.debug_struct("VisualizationDispatcher")
            .field("config", &self.config)
            .field("kinds", &kinds)
            .finish()
    }
}

impl Default for VisualizationDispatcher {
    fn default() -> Self {
        Self::with_config(LayoutConfig::default())
    }
}

impl VisualizationDispatcher {
    /// A dispatcher with no handlers registered.
    pub fn empty(config: LayoutConfig) -> Self {
        Self {
            config,
            constructors: HashMap::new(),
        }
    }

    /// A dispatcher with a handler for every visualization kind.
    pub fn with_config(config: LayoutConfig) -> Self {
        let mut dispatcher = Self::empty(config);
        dispatcher.insert(VisualizationKind::ScatterPlot, scatter_plot);
        dispatcher.insert(VisualizationKind::HeatMapUsingBars, heat_map_using_bars);
        dispatcher.insert(VisualizationKind::MultiSeriesBarChart, multi_series_bar_chart);
        dispatcher.insert(
            VisualizationKind::StackedMultiSeriesBarChart,
            stacked_multi_series_bar_chart,
        );
        dispatcher.insert(VisualizationKind::PieChart, pie_chart);
        dispatcher
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn insert(&mut self, kind: VisualizationKind, constructor: HandlerConstructor) {
        self.constructors.insert(kind, constructor);
    }

    pub fn remove(&mut self, kind: VisualizationKind) -> Option<HandlerConstructor> {
        self.constructors.remove(&kind)
    }

    pub fn contains(&self, kind: VisualizationKind) -> bool {
        self.constructors.contains_key(&kind)
    }

    pub fn create(&self, kind: VisualizationKind) -> Result<Box<dyn VisualizationHandler>> {
        let constructor = self.constructors.get(&kind).ok_or_else(|| {
            voxplot_core::Error::UnsupportedKind {
                tag: kind.as_tag().to_string(),
            }
        })?;
        Ok(constructor(&self.config))
    }

    pub fn create_for_tag(&self, tag: &str) -> Result<Box<dyn VisualizationHandler>> {
        self.create(VisualizationKind::from_tag(tag)?)
    }

    /// Creates the handler for `data.kind()` and renders one pass.
    pub fn render(&self, data: &ProcessedData) -> Result<RenderPass> {
        let mut handler = self.create(data.kind())?;
        handler.render(data)
    }
}
