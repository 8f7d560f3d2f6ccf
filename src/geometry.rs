//! Points, rectangles, and the clipping arithmetic that keeps drawing in bounds.
//!
//! Every operation here saturates instead of failing: a rectangle that lies
//! outside its bounds clips to an empty rectangle, and an inset larger than
//! the rectangle collapses it to zero extent.

use core::fmt;

/// A pixel coordinate. Origin is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Clamp each coordinate into `bounds`, far edges inclusive.
    ///
    /// A clipped point may therefore land on `bounds.right()` or
    /// `bounds.bottom()`, one past the last addressable pixel.
    pub fn clip_to(self, bounds: Rect) -> Self {
        Self {
            x: self.x.clamp(bounds.x, bounds.right()),
            y: self.y.clamp(bounds.y, bounds.bottom()),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

/// One side of a [`Rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// An axis-aligned rectangle; `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size anchored at the origin.
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Exclusive right edge, saturating at `u32::MAX`.
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `u32::MAX`.
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether `point` addresses a pixel inside this rectangle.
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Intersect with `bounds`.
    ///
    /// The result always lies within `bounds`. Disjoint rectangles clip to a
    /// zero-extent rectangle on the nearest edge of `bounds`.
    pub fn clip_to(self, bounds: Rect) -> Self {
        let max_x = self.right().min(bounds.right());
        let max_y = self.bottom().min(bounds.bottom());
        let x = self.x.clamp(bounds.x, bounds.right());
        let y = self.y.clamp(bounds.y, bounds.bottom());
        Self {
            x,
            y,
            width: max_x.saturating_sub(x),
            height: max_y.saturating_sub(y),
        }
    }

    /// Move one edge inward by `delta`, never past the opposite edge.
    pub fn inset_edge(self, delta: u32, edge: Edge) -> Self {
        let mut rect = self;
        match edge {
            Edge::Left => {
                let delta = delta.min(rect.width);
                rect.x += delta;
                rect.width -= delta;
            }
            Edge::Right => rect.width -= delta.min(rect.width),
            Edge::Top => {
                let delta = delta.min(rect.height);
                rect.y += delta;
                rect.height -= delta;
            }
            Edge::Bottom => rect.height -= delta.min(rect.height),
        }
        rect
    }

    /// Reduce the rectangle to a band of `thickness` along `edge`.
    ///
    /// Right and bottom bands keep their far side where it was, so the
    /// origin moves.
    pub fn set_edge(self, thickness: u32, edge: Edge) -> Self {
        let mut rect = self;
        match edge {
            Edge::Left => rect.width = thickness.min(rect.width),
            Edge::Right => {
                let band = thickness.min(rect.width);
                rect.x += rect.width - band;
                rect.width = band;
            }
            Edge::Top => rect.height = thickness.min(rect.height),
            Edge::Bottom => {
                let band = thickness.min(rect.height);
                rect.y += rect.height - band;
                rect.height = band;
            }
        }
        rect
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {}, y: {}): {} by {}",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::from_size(100, 50);

    #[test]
    fn clip_point_clamps_inclusive() {
        assert_eq!(Point::new(10, 20).clip_to(BOUNDS), Point::new(10, 20));
        assert_eq!(Point::new(500, 500).clip_to(BOUNDS), Point::new(100, 50));

        let offset = Rect::new(10, 10, 5, 5);
        assert_eq!(Point::new(0, 12).clip_to(offset), Point::new(10, 12));
    }

    #[test]
    fn clip_rect_inside_is_noop() {
        let r = Rect::new(5, 5, 20, 10);
        assert_eq!(r.clip_to(BOUNDS), r);
        assert_eq!(BOUNDS.clip_to(BOUNDS), BOUNDS);
    }

    #[test]
    fn clip_rect_partial_overlap() {
        let r = Rect::new(90, 40, 20, 20);
        assert_eq!(r.clip_to(BOUNDS), Rect::new(90, 40, 10, 10));

        let offset = Rect::new(10, 10, 10, 10);
        assert_eq!(Rect::new(0, 0, 15, 15).clip_to(offset), Rect::new(10, 10, 5, 5));
    }

    #[test]
    fn clip_rect_disjoint_is_empty_and_contained() {
        let clipped = Rect::new(200, 200, 10, 10).clip_to(BOUNDS);
        assert!(clipped.is_empty());
        assert!(clipped.x <= BOUNDS.right());
        assert!(clipped.y <= BOUNDS.bottom());

        let offset = Rect::new(50, 50, 10, 10);
        let clipped = Rect::new(0, 0, 10, 10).clip_to(offset);
        assert_eq!(clipped, Rect::new(50, 50, 0, 0));
    }

    #[test]
    fn clip_rect_never_overflows() {
        let huge = Rect::new(u32::MAX - 1, u32::MAX - 1, u32::MAX, u32::MAX);
        let clipped = huge.clip_to(BOUNDS);
        assert!(clipped.is_empty());
    }

    #[test]
    fn clip_rect_always_within_bounds() {
        let cases = [
            Rect::new(0, 0, 1000, 1000),
            Rect::new(99, 49, 5, 5),
            Rect::new(100, 50, 5, 5),
            Rect::new(30, 0, 0, 70),
        ];
        for r in cases {
            let c = r.clip_to(BOUNDS);
            assert!(c.x >= BOUNDS.x && c.right() <= BOUNDS.right(), "{r} -> {c}");
            assert!(c.y >= BOUNDS.y && c.bottom() <= BOUNDS.bottom(), "{r} -> {c}");
        }
    }

    #[test]
    fn inset_each_edge() {
        let r = Rect::new(10, 10, 20, 30);
        assert_eq!(r.inset_edge(5, Edge::Left), Rect::new(15, 10, 15, 30));
        assert_eq!(r.inset_edge(5, Edge::Right), Rect::new(10, 10, 15, 30));
        assert_eq!(r.inset_edge(5, Edge::Top), Rect::new(10, 15, 20, 25));
        assert_eq!(r.inset_edge(5, Edge::Bottom), Rect::new(10, 10, 20, 25));
    }

    #[test]
    fn inset_saturates_at_zero() {
        let r = Rect::new(10, 10, 4, 4);
        assert_eq!(r.inset_edge(9, Edge::Left), Rect::new(14, 10, 0, 4));
        assert_eq!(r.inset_edge(9, Edge::Bottom), Rect::new(10, 10, 4, 0));
    }

    #[test]
    fn set_edge_bands() {
        let r = Rect::new(10, 10, 20, 30);
        assert_eq!(r.set_edge(3, Edge::Left), Rect::new(10, 10, 3, 30));
        assert_eq!(r.set_edge(3, Edge::Right), Rect::new(27, 10, 3, 30));
        assert_eq!(r.set_edge(3, Edge::Top), Rect::new(10, 10, 20, 3));
        assert_eq!(r.set_edge(3, Edge::Bottom), Rect::new(10, 37, 20, 3));
    }

    #[test]
    fn set_edge_saturates_to_whole_rect() {
        let r = Rect::new(1, 2, 4, 6);
        assert_eq!(r.set_edge(100, Edge::Right), r);
        assert_eq!(r.set_edge(100, Edge::Bottom), r);
    }

    #[test]
    fn contains_excludes_far_edges() {
        let r = Rect::new(2, 2, 3, 3);
        assert!(r.contains(Point::new(2, 2)));
        assert!(r.contains(Point::new(4, 4)));
        assert!(!r.contains(Point::new(5, 4)));
        assert!(!r.contains(Point::new(1, 3)));
    }

    #[test]
    fn display_matches_dump_format() {
        assert_eq!(format!("{}", Point::new(3, 4)), "(x: 3, y: 4)");
        assert_eq!(format!("{}", Rect::new(1, 2, 3, 4)), "(x: 1, y: 2): 3 by 4");
    }
}
