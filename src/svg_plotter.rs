extern crate ndarray;

use ndarray::ArrayView1;
use plotters::prelude::*;

use std::path::{Path, PathBuf};

use crate::dataset::*;
use crate::params::*;
use crate::renderer::*;

///A [`Renderer`] which writes each plot as an SVG file at a fixed path.
///Positive points are drawn as green circles, negative points as red crosses.
pub struct SvgPlotter {
    path : PathBuf,
    size : (u32, u32)
}

impl SvgPlotter {
    pub fn new<P : AsRef<Path>>(path : P) -> SvgPlotter {
        SvgPlotter {
            path : path.as_ref().to_path_buf(),
            size : PLOT_SIZE
        }
    }

    pub fn with_size(mut self, width : u32, height : u32) -> SvgPlotter {
        self.size = (width, height);
        self
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    fn draw(&self, data : &Dataset, geometry : Option<BoundaryGeometry>) -> anyhow::Result<()> {
        let (positives, negatives) = split_by_label(data);

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(PLOT_TITLE, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(30)
            .build_cartesian_2d(-PLOT_EXTENT..PLOT_EXTENT, -PLOT_EXTENT..PLOT_EXTENT)?;

        chart.configure_mesh()
             .x_desc("X")
             .y_desc("Y")
             .draw()?;

        chart.draw_series(positives.iter()
                                   .map(|&(x, y)| Circle::new((x, y), MARKER_SIZE, GREEN.filled())))?
             .label("1")
             .legend(|(x, y)| Circle::new((x, y), MARKER_SIZE, GREEN.filled()));

        chart.draw_series(negatives.iter()
                                   .map(|&(x, y)| Cross::new((x, y), MARKER_SIZE, &RED)))?
             .label("2")
             .legend(|(x, y)| Cross::new((x, y), MARKER_SIZE, &RED));

        if let Some(geometry) = geometry {
            chart.draw_series(LineSeries::new(vec![geometry.line_start, geometry.line_end], &BLUE))?;
            chart.draw_series(LineSeries::new(vec![(0.0f32, 0.0f32), geometry.arrow_tip], &BLACK))?;
            chart.draw_series(std::iter::once(
                TriangleMarker::new(geometry.arrow_tip, MARKER_SIZE, BLACK.filled())))?;
        }

        chart.configure_series_labels()
             .position(SeriesLabelPosition::UpperRight)
             .background_style(&WHITE)
             .border_style(&BLACK)
             .draw()?;

        root.present()?;
        Ok(())
    }
}

impl Renderer for SvgPlotter {
    fn render_data(&mut self, data : &Dataset) -> anyhow::Result<()> {
        check_plottable(data)?;
        self.draw(data, None)?;
        trace!("Plotted {} points to {}", data.num_points(), self.path.display());
        Ok(())
    }

    fn render_boundary(&mut self, data : &Dataset, weights : ArrayView1<f32>) -> anyhow::Result<()> {
        check_plottable(data)?;
        let geometry = boundary_geometry(weights)?;
        self.draw(data, Some(geometry))?;
        trace!("Plotted {} points and boundary for {} to {}", data.num_points(), weights, self.path.display());
        Ok(())
    }
}
