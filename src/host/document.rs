// Document environment
//
// Everything a controller may sample or mutate about the page. Units are
// logical pixels in document coordinates (y grows downward from the page top).

/// How a programmatic scroll should move the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump immediately
    #[allow(dead_code)] // the page only ever animates; tests jump
    Instant,
    /// Animate over several frames
    #[default]
    Smooth,
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Vertical extent of an element in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Pointer position in host units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned hit region in the same units as [`Point`]
///
/// Stands in for an element reference when asking "did this pointer land
/// inside the toggle or the panel".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HitBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// The page as seen by the navigation controllers
pub trait Document {
    /// Current vertical scroll offset
    fn scroll_y(&self) -> f64;

    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// Total document height (content extent, not the viewport)
    fn scroll_height(&self) -> f64;

    /// Bounds of the element with the given id, if it is in the document
    fn element_bounds(&self, id: &str) -> Option<Bounds>;

    /// Request a scroll to `top`; the document clamps to its own range
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    /// Current body overflow style value ("" when unset)
    fn body_overflow(&self) -> &str;

    fn set_body_overflow(&mut self, value: &str);

    /// Whether visibility observation is available at all
    fn supports_intersection_observer(&self) -> bool {
        true
    }
}
