//! Inline SVG icons.
//!
//! The page draws a small, fixed set of stroke icons (24×24 viewBox, 2px
//! round strokes). Each icon is an [`Icon`] variant, so a reference to an
//! icon that does not exist is a compile error rather than an empty slot at
//! runtime.

use maud::{Markup, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Close,
    ChevronLeft,
    ChevronRight,
    Grid,
    Camera,
    Mail,
    Instagram,
    ZoomIn,
}

/// Primitive shapes an icon is drawn from, in viewBox coordinates.
enum Shape {
    Path(&'static str),
    Circle(f32, f32, f32),
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        r: f32,
    },
    Line(f32, f32, f32, f32),
}

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::Close,
        Icon::ChevronLeft,
        Icon::ChevronRight,
        Icon::Grid,
        Icon::Camera,
        Icon::Mail,
        Icon::Instagram,
        Icon::ZoomIn,
    ];

    /// Kebab-case name, used as a CSS hook (`icon-chevron-left`).
    pub fn name(self) -> &'static str {
        match self {
            Icon::Close => "close",
            Icon::ChevronLeft => "chevron-left",
            Icon::ChevronRight => "chevron-right",
            Icon::Grid => "grid",
            Icon::Camera => "camera",
            Icon::Mail => "mail",
            Icon::Instagram => "instagram",
            Icon::ZoomIn => "zoom-in",
        }
    }

    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::Close => &[Shape::Path("M18 6 6 18"), Shape::Path("m6 6 12 12")],
            Icon::ChevronLeft => &[Shape::Path("m15 18-6-6 6-6")],
            Icon::ChevronRight => &[Shape::Path("m9 18 6-6-6-6")],
            Icon::Grid => &[
                Shape::Rect {
                    x: 3.0,
                    y: 3.0,
                    w: 18.0,
                    h: 18.0,
                    r: 2.0,
                },
                Shape::Path("M3 9h18"),
                Shape::Path("M3 15h18"),
                Shape::Path("M9 3v18"),
                Shape::Path("M15 3v18"),
            ],
            Icon::Camera => &[
                Shape::Path(
                    "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z",
                ),
                Shape::Circle(12.0, 13.0, 3.0),
            ],
            Icon::Mail => &[
                Shape::Rect {
                    x: 2.0,
                    y: 4.0,
                    w: 20.0,
                    h: 16.0,
                    r: 2.0,
                },
                Shape::Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Icon::Instagram => &[
                Shape::Rect {
                    x: 2.0,
                    y: 2.0,
                    w: 20.0,
                    h: 20.0,
                    r: 5.0,
                },
                Shape::Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
                Shape::Line(17.5, 6.5, 17.51, 6.5),
            ],
            Icon::ZoomIn => &[
                Shape::Circle(11.0, 11.0, 8.0),
                Shape::Line(21.0, 21.0, 16.65, 16.65),
                Shape::Line(11.0, 8.0, 11.0, 14.0),
                Shape::Line(8.0, 11.0, 14.0, 11.0),
            ],
        }
    }

    /// Render at `size` CSS pixels, inheriting the text color.
    pub fn render(self, size: u32) -> Markup {
        self.render_with_class(size, None)
    }

    pub fn render_with_class(self, size: u32, class: Option<&str>) -> Markup {
        let classes = match class {
            Some(extra) => format!("icon icon-{} {}", self.name(), extra),
            None => format!("icon icon-{}", self.name()),
        };
        html! {
            svg class=(classes) xmlns="http://www.w3.org/2000/svg" width=(size) height=(size)
                viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
                @for shape in self.shapes() {
                    @match shape {
                        Shape::Path(d) => { path d=(d) {} }
                        Shape::Circle(cx, cy, r) => { circle cx=(cx) cy=(cy) r=(r) {} }
                        Shape::Rect { x, y, w, h, r } => {
                            rect x=(x) y=(y) width=(w) height=(h) rx=(r) ry=(r) {}
                        }
                        Shape::Line(x1, y1, x2, y2) => { line x1=(x1) y1=(y1) x2=(x2) y2=(y2) {} }
                    }
                }
            }
        }
    }
}
