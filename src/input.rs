use crate::grid::Cell;

/// A point in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Anything that can report where the user is pointing.
///
/// Mouse and touch events differ in shape; the selection logic only ever asks
/// for a position.
pub trait Pointer {
    /// The pointer's position in client coordinates, or `None` if the event
    /// carries no usable position (e.g. a touch event with no touches).
    fn position(&self) -> Option<Point>;
}

impl Pointer for Point {
    fn position(&self) -> Option<Point> {
        Some(*self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseInput {
    pub client_x: f64,
    pub client_y: f64,
}

impl Pointer for MouseInput {
    fn position(&self) -> Option<Point> {
        Some(Point::new(self.client_x, self.client_y))
    }
}

/// A touch event; only the first active touch selects.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TouchInput {
    pub touches: Vec<Point>,
}

impl Pointer for TouchInput {
    fn position(&self) -> Option<Point> {
        self.touches.first().copied()
    }
}

/// The on-page box of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// How the drawing surface's bitmap relates to its on-page box.
///
/// The bitmap is `bitmap_width × bitmap_height` pixels but is displayed in
/// `rect`, which can be a different size under CSS scaling or a non-unit device
/// pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub rect: Rect,
    pub bitmap_width: f64,
    pub bitmap_height: f64,
    pub cell_size: f64,
}

impl SurfaceMetrics {
    /// Metrics for a surface displayed at its natural size at `(0, 0)`.
    pub fn unscaled(grid_size: usize, cell_size: f64) -> Self {
        let side = grid_size as f64 * cell_size;
        SurfaceMetrics {
            rect: Rect {
                left: 0.0,
                top: 0.0,
                width: side,
                height: side,
            },
            bitmap_width: side,
            bitmap_height: side,
            cell_size,
        }
    }

    /// Map a client point to the cell under it.
    ///
    /// Returns `None` for points left of or above the surface, and for degenerate
    /// metrics. Points right of or below the surface still map to a cell; the
    /// caller bounds-checks against the grid.
    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        if self.rect.width <= 0.0 || self.rect.height <= 0.0 || self.cell_size <= 0.0 {
            return None;
        }
        let x = (point.x - self.rect.left) * (self.bitmap_width / self.rect.width);
        let y = (point.y - self.rect.top) * (self.bitmap_height / self.rect.height);
        let col = (x / self.cell_size).floor();
        let row = (y / self.cell_size).floor();
        if !(row.is_finite() && col.is_finite()) || row < 0.0 || col < 0.0 {
            return None;
        }
        Some(Cell::new(row as usize, col as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn metrics() -> SurfaceMetrics {
        SurfaceMetrics::unscaled(12, 40.0)
    }

    #[rstest]
    #[case(Point::new(0.0, 0.0), Some(Cell::new(0, 0)))]
    #[case(Point::new(39.9, 39.9), Some(Cell::new(0, 0)))]
    #[case(Point::new(40.0, 0.0), Some(Cell::new(0, 1)))]
    #[case(Point::new(85.0, 130.0), Some(Cell::new(3, 2)))]
    #[case(Point::new(-1.0, 10.0), None)]
    #[case(Point::new(10.0, -0.5), None)]
    fn maps_points_to_cells(
        metrics: SurfaceMetrics,
        #[case] point: Point,
        #[case] expect: Option<Cell>,
    ) {
        assert_eq!(metrics.cell_at(point), expect);
    }

    #[rstest]
    fn accounts_for_offset_and_css_scaling(metrics: SurfaceMetrics) {
        // a 480px bitmap shown at 240 CSS px, 100px from the left and 50px down
        let metrics = SurfaceMetrics {
            rect: Rect {
                left: 100.0,
                top: 50.0,
                width: 240.0,
                height: 240.0,
            },
            ..metrics
        };
        assert_eq!(metrics.cell_at(Point::new(100.0, 50.0)), Some(Cell::new(0, 0)));
        assert_eq!(metrics.cell_at(Point::new(141.0, 50.0)), Some(Cell::new(0, 2)));
        assert_eq!(metrics.cell_at(Point::new(339.0, 289.0)), Some(Cell::new(11, 11)));
    }

    #[rstest]
    fn degenerate_rect_maps_nothing(metrics: SurfaceMetrics) {
        let metrics = SurfaceMetrics {
            rect: Rect::default(),
            ..metrics
        };
        assert_eq!(metrics.cell_at(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn touch_uses_first_touch() {
        let touch = TouchInput {
            touches: vec![Point::new(3.0, 4.0), Point::new(50.0, 60.0)],
        };
        assert_eq!(touch.position(), Some(Point::new(3.0, 4.0)));
        assert_eq!(TouchInput::default().position(), None);
    }

    #[test]
    fn mouse_uses_client_position() {
        let mouse = MouseInput {
            client_x: 7.5,
            client_y: 2.0,
        };
        assert_eq!(mouse.position(), Some(Point::new(7.5, 2.0)));
    }
}
