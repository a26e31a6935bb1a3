//! Donut Chart Geometry
//!
//! Computes SVG arc paths for the pending/done chart. Angles are in degrees,
//! starting at 3 o'clock and growing counter-clockwise.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutGeometry {
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Default for DonutGeometry {
    fn default() -> Self {
        Self {
            cx: 100.0,
            cy: 100.0,
            inner_radius: 50.0,
            outer_radius: 70.0,
        }
    }
}

/// One chart input: legend label, value and fill color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartEntry {
    pub label: &'static str,
    pub value: usize,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub label: &'static str,
    pub color: &'static str,
    pub start_angle: f64,
    pub end_angle: f64,
    /// SVG path data for the ring segment
    pub path: String,
}

impl DonutGeometry {
    fn point(&self, radius: f64, angle: f64) -> (f64, f64) {
        let rad = angle * PI / 180.0;
        (self.cx + radius * rad.cos(), self.cy - radius * rad.sin())
    }

    /// Ring segment between two angles. A full turn is drawn as two half
    /// arcs since SVG cannot draw an arc whose endpoints coincide.
    fn ring_path(&self, start: f64, end: f64) -> String {
        let sweep = end - start;
        if sweep >= 360.0 {
            let mid = start + 180.0;
            return format!(
                "{} {}",
                self.ring_path(start, mid),
                self.ring_path(mid, start + 360.0)
            );
        }
        let large_arc = if sweep > 180.0 { 1 } else { 0 };
        let (ox0, oy0) = self.point(self.outer_radius, start);
        let (ox1, oy1) = self.point(self.outer_radius, end);
        let (ix1, iy1) = self.point(self.inner_radius, end);
        let (ix0, iy0) = self.point(self.inner_radius, start);
        format!(
            "M {:.3} {:.3} A {r} {r} 0 {la} 0 {:.3} {:.3} L {:.3} {:.3} A {ir} {ir} 0 {la} 1 {:.3} {:.3} Z",
            ox0,
            oy0,
            ox1,
            oy1,
            ix1,
            iy1,
            ix0,
            iy0,
            r = self.outer_radius,
            ir = self.inner_radius,
            la = large_arc,
        )
    }
}

/// Slices for all non-zero entries; empty when the total is zero
pub fn donut_slices(entries: &[ChartEntry], geometry: &DonutGeometry) -> Vec<DonutSlice> {
    let total: usize = entries.iter().map(|e| e.value).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = 0.0;
    let mut slices = Vec::new();
    for entry in entries.iter().filter(|e| e.value > 0) {
        let end = start + 360.0 * entry.value as f64 / total as f64;
        slices.push(DonutSlice {
            label: entry.label,
            color: entry.color,
            start_angle: start,
            end_angle: end,
            path: geometry.ring_path(start, end),
        });
        start = end;
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pending: usize, done: usize) -> [ChartEntry; 2] {
        [
            ChartEntry { label: "Pending", value: pending, color: "#4CAF50" },
            ChartEntry { label: "Done", value: done, color: "#1B5E20" },
        ]
    }

    #[test]
    fn test_empty_chart_has_no_slices() {
        assert!(donut_slices(&entries(0, 0), &DonutGeometry::default()).is_empty());
    }

    #[test]
    fn test_slices_proportional() {
        let slices = donut_slices(&entries(3, 1), &DonutGeometry::default());
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Pending");
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[0].end_angle - 270.0).abs() < 1e-9);
        assert!((slices[1].start_angle - 270.0).abs() < 1e-9);
        assert!((slices[1].end_angle - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_value_is_full_ring() {
        let slices = donut_slices(&entries(0, 4), &DonutGeometry::default());
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "Done");
        assert!((slices[0].end_angle - 360.0).abs() < 1e-9);
        // Two half arcs, each a closed subpath
        assert_eq!(slices[0].path.matches('M').count(), 2);
    }

    #[test]
    fn test_first_point_at_three_oclock() {
        let slices = donut_slices(&entries(1, 1), &DonutGeometry::default());
        assert!(slices[0].path.starts_with("M 170.000 100.000"));
    }
}
