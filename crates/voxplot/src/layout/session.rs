use super::{Pipeline, Result};
use voxplot_core::{ProcessedData, RawDataSource, VisualizationKind};
use voxplot_layout::RenderPass;

/// The artifacts of one successful render.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub generation: u64,
    pub data: ProcessedData,
    pub pass: RenderPass,
}

/// Holds the most recent frame; each successful render replaces it wholesale.
///
/// A failed render leaves the previous frame in place.
#[derive(Debug, Default)]
pub struct RenderSession {
    pipeline: Pipeline,
    current: Option<Frame>,
    generation: u64,
}

impl RenderSession {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            current: None,
            generation: 0,
        }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn current(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    /// Number of frames produced so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn render(&mut self, kind: VisualizationKind, raw: &str) -> Result<&Frame> {
        let data = self.pipeline.standardize(kind, raw)?;
        self.replace(data)
    }

    pub async fn refresh<S: RawDataSource>(
        &mut self,
        source: &S,
        kind: VisualizationKind,
    ) -> Result<&Frame> {
        let data = self.pipeline.fetch(source, kind).await?;
        self.replace(data)
    }

    fn replace(&mut self, data: ProcessedData) -> Result<&Frame> {
        let pass = self.pipeline.layout(&data)?;
        self.generation += 1;
        tracing::debug!(
            kind = %pass.kind,
            generation = self.generation,
            replaced = self.current.is_some(),
            "render session frame replaced"
        );
        Ok(&*self.current.insert(Frame {
            generation: self.generation,
            data,
            pass,
        }))
    }
}
