use cubemath::{Float, Vector2, Vector3};
use cubeprefs::{Rgb, StylePreferences};
use cubepuzzle::{Color, Face};

use crate::{Geometry, SubFace, VertexRef};

/// Pixel dimensions and zoom of the area the cube is drawn in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: Float,
    /// Height in pixels.
    pub height: Float,
    /// Scale factor applied on top of the default size.
    pub zoom: Float,
}

impl Viewport {
    /// Constructs a viewport.
    pub fn new(width: Float, height: Float, zoom: Float) -> Self {
        Self {
            width,
            height,
            zoom,
        }
    }

    /// Returns the number of pixels per unit of view space.
    pub fn scale(&self) -> Float {
        self.width.min(self.height) / 4.0 * self.zoom
    }

    /// Returns the pixel position of a view-space point.
    pub fn project(&self, point: Vector3) -> Vector2 {
        let scale = self.scale();
        Vector2::new(
            point.x * scale + self.width / 2.0,
            point.y * scale + self.height / 2.0,
        )
    }

    /// Returns the normalized view coordinates of a pixel position.
    pub fn normalize(&self, pixel: Vector2) -> Vector2 {
        let scale = self.scale();
        Vector2::new(
            (pixel.x - self.width / 2.0) / scale,
            (pixel.y - self.height / 2.0) / scale,
        )
    }
}

/// How to fill a facet.
#[derive(Debug, Copy, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Fill {
    /// Solid color.
    Flat(Rgb),
    /// Radial gradient from `inner` at `center` to `outer` at distance
    /// `radius`, in pixels.
    RadialGradient {
        center: Vector2,
        radius: Float,
        inner: Rgb,
        outer: Rgb,
    },
}

/// What a facet depicts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FacetKind {
    /// Sticker showing element `element` of `face` in the cube state.
    Sticker {
        face: Face,
        element: usize,
        color: Color,
    },
    /// Cut surface exposed by a partial turn.
    InnerSurface,
}

/// Convex quadrilateral to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFacet {
    /// Sub-face the facet lies on.
    pub sub_face: SubFace,
    /// Element index within the sub-face.
    pub element: usize,
    /// Corners in pixel coordinates, in polygon order.
    pub polygon: [Vector2; 4],
    /// Sticker or inner surface.
    pub kind: FacetKind,
    /// Fill style for the polygon, to be outlined with the frame's border.
    pub fill: Fill,
}

/// Everything needed to draw one frame, back to front.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct Frame {
    pub background: Rgb,
    pub border_color: Rgb,
    pub line_width: Float,
    pub facets: Vec<RenderFacet>,
}

impl Geometry {
    /// Builds the list of facets to draw, in drawing order.
    pub fn frame(
        &self,
        colors: impl Fn(Face, usize) -> Color,
        viewport: &Viewport,
        style: &StylePreferences,
    ) -> Frame {
        let n = self.size() as Float;
        let shininess = style.shininess as Float;
        let mut facets = vec![];

        for sub in self.visible_sub_faces() {
            let norm = self.normal(sub);
            for element in 0..self.element_count(sub) {
                let polygon = VertexRef::POLYGON
                    .map(|v| viewport.project(self.element_vertex(sub, element, v)));

                let (kind, fill) = match self.sticker(sub, element) {
                    None => (FacetKind::InnerSurface, Fill::Flat(style.inner_color)),
                    Some((face, state_element)) => {
                        let color = colors(face, state_element);
                        let rgb = style.face_color(color);
                        let fill = if shininess > 0.0 {
                            let center = self.element_vertex(sub, element, VertexRef::Center);
                            Fill::RadialGradient {
                                center: viewport.project(center - norm / n / 2.0),
                                radius: viewport.scale() / n / shininess,
                                inner: rgb,
                                outer: Rgb::BLACK,
                            }
                        } else {
                            Fill::Flat(rgb)
                        };
                        let kind = FacetKind::Sticker {
                            face,
                            element: state_element,
                            color,
                        };
                        (kind, fill)
                    }
                };

                facets.push(RenderFacet {
                    sub_face: sub,
                    element,
                    polygon,
                    kind,
                    fill,
                });
            }
        }

        Frame {
            background: style.background,
            border_color: style.border_color,
            line_width: style.line_width as Float,
            facets,
        }
    }
}
