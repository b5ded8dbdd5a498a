//! Builders for equipment footprints and anchor arrangements.

use std::ops::Range;

use crate::errors::LayoutError;
use crate::geometry::{Footprint, Point};

/// A single anchor bolt in the equipment's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// Sequential identifier assigned in insertion order, starting at zero.
    pub tag: usize,
    /// Unrotated position of the anchor.
    pub position: Point,
}

/// Selects which points of a rectangular anchor grid are kept.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GridMode {
    /// Keep every point of the grid.
    #[default]
    Full,
    /// Keep only the points on the outer rows and columns.
    Perimeter,
}

/// Footprint pieces and anchors describing an equipment base.
///
/// The layout is the builder phase of an analysis: it is filled incrementally and
/// then handed to the solver, which never modifies it.
#[derive(Clone, Debug, Default)]
pub struct AnchorLayout {
    /// Anchors indexed by their tag.
    anchors: Vec<Anchor>,
    /// Rectangular pieces of the bounding polygon.
    footprints: Vec<Footprint>,
}

impl AnchorLayout {
    /// Create an empty layout.
    ///
    /// # Examples
    /// ```
    /// use anchorx::AnchorLayout;
    ///
    /// let layout = AnchorLayout::new();
    /// assert_eq!(layout.anchor_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of anchors in the layout.
    #[must_use]
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Anchors in tag order.
    #[must_use]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Footprint pieces in insertion order.
    #[must_use]
    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    /// Append an axis-aligned rectangle to the bounding polygon.
    ///
    /// Pieces may overlap; only their corners take part in the analysis.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidExtent`] when either extent is negative or not finite.
    pub fn add_footprint(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
    ) -> Result<(), LayoutError> {
        check_extent(width, height)?;
        self.footprints.push(Footprint::rectangle(origin, width, height));
        Ok(())
    }

    /// Append a single anchor and return its tag.
    ///
    /// # Examples
    /// ```
    /// use anchorx::{point, AnchorLayout};
    ///
    /// let mut layout = AnchorLayout::new();
    /// assert_eq!(layout.add_anchor(point(30.0, -5.0)), 0);
    /// assert_eq!(layout.add_anchor(point(30.0, 125.0)), 1);
    /// ```
    pub fn add_anchor(&mut self, position: Point) -> usize {
        let tag = self.anchors.len();
        self.anchors.push(Anchor { tag, position });
        tag
    }

    /// Append an `nx` by `ny` grid of evenly spaced anchors spanning the given box.
    ///
    /// Spacing collapses to zero along an axis with a single anchor, so `nx = 1`
    /// produces one column at `origin.x`. Points are inserted column by column
    /// (X outer, Y inner), which keeps tagging reproducible. The returned range
    /// holds the tags of the new anchors.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyGrid`] when either count is zero and
    /// [`LayoutError::InvalidExtent`] when either extent is negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use anchorx::{point, AnchorLayout, GridMode};
    ///
    /// let mut layout = AnchorLayout::new();
    /// let tags = layout
    ///     .add_anchor_group(point(0.0, 0.0), 20.0, 20.0, 3, 3, GridMode::Perimeter)
    ///     .expect("valid grid");
    /// // The centre point of the 3 x 3 grid is discarded.
    /// assert_eq!(tags, 0..8);
    /// ```
    pub fn add_anchor_group(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        nx: usize,
        ny: usize,
        mode: GridMode,
    ) -> Result<Range<usize>, LayoutError> {
        if nx == 0 || ny == 0 {
            return Err(LayoutError::EmptyGrid { nx, ny });
        }
        check_extent(width, height)?;
        let sx = spacing(width, nx);
        let sy = spacing(height, ny);

        let first = self.anchors.len();
        for i in 0..nx {
            for j in 0..ny {
                let on_edge = i == 0 || i == nx - 1 || j == 0 || j == ny - 1;
                if mode == GridMode::Perimeter && !on_edge {
                    continue;
                }
                // Index-based coordinates keep the edge test exact.
                self.add_anchor(Point::new(
                    origin.x + sx * i as f64,
                    origin.y + sy * j as f64,
                ));
            }
        }
        Ok(first..self.anchors.len())
    }
}

/// Distance between neighbouring grid points along one axis.
fn spacing(extent: f64, count: usize) -> f64 {
    if count == 1 {
        0.0
    } else {
        extent / (count - 1) as f64
    }
}

/// Reject rectangles that cannot describe a physical region.
fn check_extent(width: f64, height: f64) -> Result<(), LayoutError> {
    let valid = |value: f64| value.is_finite() && value >= 0.0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(LayoutError::InvalidExtent { width, height })
    }
}
