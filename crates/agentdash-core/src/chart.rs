//! Activity chart data and viewport math
//!
//! The series are compile-time constants. Drawing happens in the CLI; this
//! module only supplies the data, the y-axis scale and the projection of
//! points into a canvas of a given size.

/// X-axis labels
pub const LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Y-axis upper bound
pub const Y_MAX: f64 = 100.0;

/// Number of horizontal gridlines, including the baseline
pub const GRIDLINES: usize = 5;

/// A named polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub values: [f64; 7],
}

pub const SERIES: [Series; 3] = [
    Series {
        name: "Agent Tasks",
        values: [65.0, 59.0, 80.0, 81.0, 56.0, 55.0, 72.0],
    },
    Series {
        name: "RAG Queries",
        values: [28.0, 48.0, 40.0, 19.0, 86.0, 27.0, 90.0],
    },
    Series {
        name: "Model Calls",
        values: [45.0, 25.0, 60.0, 70.0, 45.0, 80.0, 62.0],
    },
];

impl Series {
    /// `(x, y)` in data space, x being the label index
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect()
    }
}

/// Values at which gridlines are drawn, bottom to top
pub fn gridline_values() -> Vec<f64> {
    let step = Y_MAX / (GRIDLINES - 1) as f64;
    (0..GRIDLINES).map(|i| i as f64 * step).collect()
}

/// Canvas geometry for the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartViewport {
    pub width: u16,
    pub height: u16,
    /// Inner padding on every side
    pub padding: u16,
}

impl ChartViewport {
    pub fn new(width: u16, height: u16) -> Self {
        let padding = if width.min(height) >= 20 { 2 } else { 0 };
        Self {
            width,
            height,
            padding,
        }
    }

    fn plot_width(&self) -> f64 {
        f64::from(self.width.saturating_sub(2 * self.padding).max(1))
    }

    fn plot_height(&self) -> f64 {
        f64::from(self.height.saturating_sub(2 * self.padding).max(1))
    }

    /// Map a data point to canvas coordinates; y grows downward
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        let last = (LABELS.len() - 1) as f64;
        let pad = f64::from(self.padding);
        let cx = pad + (x / last) * (self.plot_width() - 1.0);
        let cy = pad + (1.0 - (y / Y_MAX).clamp(0.0, 1.0)) * (self.plot_height() - 1.0);
        (cx, cy)
    }

    /// Canvas polyline for a series
    pub fn polyline(&self, series: &Series) -> Vec<(f64, f64)> {
        series
            .points()
            .into_iter()
            .map(|(x, y)| self.project(x, y))
            .collect()
    }

    /// Canvas rows of the gridlines, baseline first
    pub fn gridline_rows(&self) -> Vec<f64> {
        gridline_values()
            .into_iter()
            .map(|v| self.project(0.0, v).1)
            .collect()
    }

    /// Y-axis labels that fit; short canvases only label the ends
    pub fn y_labels(&self) -> Vec<String> {
        let values = gridline_values();
        if self.height < GRIDLINES as u16 * 2 {
            vec![format!("{:.0}", values[0]), format!("{:.0}", Y_MAX)]
        } else {
            values.iter().map(|v| format!("{:.0}", v)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_shape() {
        assert_eq!(SERIES.len(), 3);
        for series in SERIES {
            assert_eq!(series.points().len(), LABELS.len());
            assert!(series.values.iter().all(|v| (0.0..=Y_MAX).contains(v)));
        }
    }

    #[test]
    fn test_gridlines() {
        assert_eq!(gridline_values(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_projection_corners() {
        let viewport = ChartViewport::new(102, 52);
        assert_eq!(viewport.padding, 2);
        assert_eq!(viewport.project(0.0, Y_MAX), (2.0, 2.0));
        assert_eq!(viewport.project(6.0, 0.0), (2.0 + 97.0, 2.0 + 47.0));
    }

    #[test]
    fn test_polyline_stays_inside_canvas() {
        let viewport = ChartViewport::new(40, 12);
        for series in SERIES {
            for (x, y) in viewport.polyline(&series) {
                assert!(x >= 0.0 && x < 40.0);
                assert!(y >= 0.0 && y < 12.0);
            }
        }
    }

    #[test]
    fn test_gridline_rows_descend() {
        let rows = ChartViewport::new(60, 30).gridline_rows();
        assert!(rows.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_degenerate_viewport() {
        let viewport = ChartViewport::new(0, 0);
        let (x, y) = viewport.project(3.0, 50.0);
        assert!(x.is_finite() && y.is_finite());
        assert_eq!(viewport.y_labels(), vec!["0".to_string(), "100".to_string()]);
    }
}
