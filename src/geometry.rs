use glam::{IVec2, Vec2};

/// Segments used to approximate a quarter arc
pub const ARC_SEGMENTS: usize = 12;

/// Integer rectangle in client or screen units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Half-open containment: left/top edges inclusive, right/bottom exclusive
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Samples an elliptical arc inscribed in `bounds`.
///
/// Angles are in degrees, measured clockwise from the positive x axis in
/// y-down screen space, so 270° is the top of the ellipse.
pub fn arc_points(bounds: Rect, start_deg: f32, sweep_deg: f32, segments: usize) -> Vec<Vec2> {
    let center = bounds.center();
    let radius = Vec2::new(bounds.width as f32 / 2.0, bounds.height as f32 / 2.0);
    let segments = segments.max(1);

    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let angle = (start_deg + sweep_deg * t).to_radians();
            center + radius * Vec2::new(angle.cos(), angle.sin())
        })
        .collect()
}
