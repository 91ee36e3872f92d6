use isopix_color::Color;
use isopix_geom::ScreenPoint;

/// Drawing interface the renderer emits into. Implementations own
/// rasterization; the renderer never reads back.
pub trait Surface {
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color);

    fn stroke_line(&mut self, points: &[ScreenPoint], color: Color, width: f32);

    /// Only used by the debug overlay.
    fn fill_text(&mut self, _text: &str, _at: ScreenPoint, _size: f32, _color: Color) {}
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        (**self).fill_polygon(points, color)
    }

    fn stroke_line(&mut self, points: &[ScreenPoint], color: Color, width: f32) {
        (**self).stroke_line(points, color, width)
    }

    fn fill_text(&mut self, text: &str, at: ScreenPoint, size: f32, color: Color) {
        (**self).fill_text(text, at, size, color)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Polygon {
        points: Vec<ScreenPoint>,
        color: Color,
    },
    Line {
        points: Vec<ScreenPoint>,
        color: Color,
        width: f32,
    },
    Text {
        text: String,
        at: ScreenPoint,
        size: f32,
        color: Color,
    },
}

/// A [`Surface`] that records every call for later inspection or replay.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&[ScreenPoint], Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polygon { points, color } => Some((points.as_slice(), *color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&[ScreenPoint], Color, f32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line {
                points,
                color,
                width,
            } => Some((points.as_slice(), *color, *width)),
            _ => None,
        })
    }

    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Polygon { points, color } => target.fill_polygon(points, *color),
                DrawCommand::Line {
                    points,
                    color,
                    width,
                } => target.stroke_line(points, *color, *width),
                DrawCommand::Text {
                    text,
                    at,
                    size,
                    color,
                } => target.fill_text(text, *at, *size, *color),
            }
        }
    }
}

impl Surface for DrawList {
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_line(&mut self, points: &[ScreenPoint], color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn fill_text(&mut self, text: &str, at: ScreenPoint, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            size,
            color,
        });
    }
}
