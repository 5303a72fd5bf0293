//! Bar chart for (category, value) results
//!
//! [`ChartRenderer`] is the only owner of the live chart widget. It is either
//! empty or holds exactly one handle, and always releases the old handle before
//! asking its [`ChartSurface`] for a new one.

pub mod chartjs;
pub mod spec;

pub use chartjs::ChartJsSurface;
pub use spec::BarChartSpec;

use contracts::usecases::common::QueryResult;

use crate::shared::error::ChartError;

/// Something that can draw and tear down chart widgets
pub trait ChartSurface {
    /// A live widget
    type Handle;

    fn create(&mut self, spec: &BarChartSpec) -> Result<Self::Handle, ChartError>;

    /// Releases everything the widget holds
    fn destroy(&mut self, handle: Self::Handle);

    fn set_visible(&mut self, visible: bool);
}

pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
    handle: Option<S::Handle>,
    visible: bool,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            handle: None,
            visible: false,
        }
    }

    /// Replaces the current chart with one built from `result`
    pub fn render(&mut self, result: &QueryResult) -> Result<(), ChartError> {
        let spec = BarChartSpec::from_result(result)?;

        if let Some(old) = self.handle.take() {
            self.surface.destroy(old);
        }

        // Chart.js sizes itself from the canvas, so it must be shown first
        self.set_visible(true);
        match self.surface.create(&spec) {
            Ok(handle) => {
                self.handle = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.set_visible(false);
                Err(e)
            }
        }
    }

    /// Hides the region; the widget itself stays until the next render
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.surface.set_visible(visible);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// In-memory surface that records widget lifecycles
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        next_id: u32,
        pub live: Vec<u32>,
        pub destroyed: Vec<u32>,
        pub specs: Vec<BarChartSpec>,
        pub visible: bool,
        pub fail_next: bool,
    }

    impl RecordingSurface {
        pub fn created(&self) -> usize {
            self.specs.len()
        }
    }

    impl ChartSurface for RecordingSurface {
        type Handle = u32;

        fn create(&mut self, spec: &BarChartSpec) -> Result<u32, ChartError> {
            if std::mem::take(&mut self.fail_next) {
                return Err(ChartError::MissingCanvas("chartCanvas".into()));
            }
            self.next_id += 1;
            self.live.push(self.next_id);
            self.specs.push(spec.clone());
            Ok(self.next_id)
        }

        fn destroy(&mut self, handle: u32) {
            self.live.retain(|id| *id != handle);
            self.destroyed.push(handle);
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }
}
