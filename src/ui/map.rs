/// Mock map canvas with zoom/pan support
///
/// There is no real mapping engine: markers are projected from their
/// (longitude, latitude) positions around a geographic center onto the
/// canvas, over a simple street-grid backdrop. Wheel scrolling zooms,
/// dragging pans, and a click (press and release without movement) picks
/// the nearest marker.

use cgmath::Vector2;
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Program};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use crate::state::data::{Coordinates, Poi, PoiCategory};
use crate::Message;

/// Pixels per degree of longitude at zoom 1.0 (city scale)
const BASE_SCALE: f32 = 3600.0;

/// Marker radius in pixels
const MARKER_RADIUS: f32 = 6.0;

/// Cursor slop for marker picking, in pixels
const PICK_RADIUS: f32 = 12.0;

/// A press-release pair closer than this counts as a click, not a drag
const CLICK_SLOP: f32 = 4.0;

/// Map viewport: geographic center, zoom level and pan offset
#[derive(Debug, Clone)]
pub struct Viewport {
    pub center: Coordinates,
    /// Zoom level (1.0 = 100%)
    pub zoom: f32,
    /// Pan offset in screen pixels
    pub offset: Vector2<f32>,
}

impl Viewport {
    pub fn new(center: Coordinates) -> Self {
        Self {
            center,
            zoom: 1.0,
            offset: Vector2::new(0.0, 0.0),
        }
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(0.25, 8.0);
    }

    pub fn pan_by(&mut self, delta: Vector2<f32>) {
        self.offset += delta;
    }

    /// Recenter on a position and drop any accumulated pan
    pub fn center_on(&mut self, position: Coordinates) {
        self.center = position;
        self.offset = Vector2::new(0.0, 0.0);
    }
}

/// Project geographic coordinates into canvas space
///
/// Equirectangular around the viewport center; longitude deltas are
/// compressed by cos(center latitude) so east-west and north-south
/// distances read the same at city scale.
fn project(position: Coordinates, viewport: &Viewport, bounds: Rectangle) -> Point {
    let scale = BASE_SCALE * viewport.zoom;
    let lon_ratio = viewport.center.lat.to_radians().cos() as f32;

    let dx = (position.lon - viewport.center.lon) as f32 * lon_ratio * scale;
    let dy = (viewport.center.lat - position.lat) as f32 * scale;

    Point::new(
        bounds.width / 2.0 + dx + viewport.offset.x,
        bounds.height / 2.0 + dy + viewport.offset.y,
    )
}

/// The marker whose projection lies closest to the cursor, within the
/// picking radius
fn nearest_poi<'a>(
    pois: &'a [Poi],
    viewport: &Viewport,
    bounds: Rectangle,
    cursor: Point,
) -> Option<&'a Poi> {
    pois.iter()
        .map(|poi| {
            let p = project(poi.position, viewport, bounds);
            let dx = p.x - cursor.x;
            let dy = p.y - cursor.y;
            (poi, (dx * dx + dy * dy).sqrt())
        })
        .filter(|(_, d)| *d <= PICK_RADIUS)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(poi, _)| poi)
}

fn marker_color(category: PoiCategory) -> Color {
    match category {
        PoiCategory::Landmark | PoiCategory::Museum | PoiCategory::Park => {
            Color::from_rgb8(0xe8, 0x6a, 0x33)
        }
        PoiCategory::Hotel | PoiCategory::Hostel | PoiCategory::Apartment => {
            Color::from_rgb8(0x2b, 0x6c, 0xb0)
        }
    }
}

/// Canvas renderer for the mock map
///
/// Owns a snapshot of the markers on display (the filtered visible set),
/// rebuilt on every view like the cards themselves.
pub struct MapProgram<'a> {
    pub pois: Vec<Poi>,
    pub user_location: Option<Coordinates>,
    pub selected: Option<&'a str>,
    pub viewport: &'a Viewport,
}

impl Program<Message> for MapProgram<'_> {
    type State = PanState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Backdrop
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb8(0xe9, 0xf0, 0xe6),
        );

        // Street grid, offset along with the pan so dragging feels real
        let spacing = 72.0 * self.viewport.zoom.max(0.5);
        let mut grid = canvas::path::Builder::new();
        let mut x = self.viewport.offset.x.rem_euclid(spacing);
        while x < bounds.width {
            grid.move_to(Point::new(x, 0.0));
            grid.line_to(Point::new(x, bounds.height));
            x += spacing;
        }
        let mut y = self.viewport.offset.y.rem_euclid(spacing);
        while y < bounds.height {
            grid.move_to(Point::new(0.0, y));
            grid.line_to(Point::new(bounds.width, y));
            y += spacing;
        }
        frame.stroke(
            &grid.build(),
            canvas::Stroke::default()
                .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.6))
                .with_width(2.0),
        );

        // User location, when the probe succeeded
        if let Some(location) = self.user_location {
            let p = project(location, self.viewport, bounds);
            frame.fill(
                &canvas::Path::circle(p, MARKER_RADIUS + 3.0),
                Color::from_rgba(0.18, 0.55, 0.34, 0.3),
            );
            frame.fill(
                &canvas::Path::circle(p, MARKER_RADIUS - 1.0),
                Color::from_rgb8(0x2e, 0x8b, 0x57),
            );
        }

        // POI markers
        for poi in &self.pois {
            let p = project(poi.position, self.viewport, bounds);
            let selected = self.selected == Some(poi.id.as_str());

            if selected {
                frame.stroke(
                    &canvas::Path::circle(p, MARKER_RADIUS + 4.0),
                    canvas::Stroke::default()
                        .with_color(Color::from_rgb8(0x1a, 0x1a, 0x1a))
                        .with_width(2.0),
                );
            }
            frame.fill(
                &canvas::Path::circle(p, MARKER_RADIUS),
                marker_color(poi.category),
            );

            if selected {
                frame.fill_text(canvas::Text {
                    content: poi.name.clone(),
                    position: Point::new(p.x + MARKER_RADIUS + 6.0, p.y - 6.0),
                    color: Color::from_rgb8(0x1a, 0x1a, 0x1a),
                    size: 13.0.into(),
                    ..canvas::Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Mouse wheel for zooming
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.position_in(bounds).is_none() {
                    return (canvas::event::Status::Ignored, None);
                }
                let zoom_delta = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y * 0.1,
                    mouse::ScrollDelta::Pixels { y, .. } => y * 0.01,
                };
                return (
                    canvas::event::Status::Captured,
                    Some(Message::MapZoomed(zoom_delta)),
                );
            }

            // Mouse button press - start dragging
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(pos) = cursor.position_in(bounds) {
                    state.is_dragging = true;
                    state.last_position = Some(pos);
                    state.pressed_at = Some(pos);
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Mouse button release - stop dragging; a stationary
            // press/release pair picks the marker under the cursor
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let pressed_at = state.pressed_at.take();
                state.is_dragging = false;
                state.last_position = None;

                if let (Some(start), Some(end)) = (pressed_at, cursor.position_in(bounds)) {
                    let moved = ((end.x - start.x).powi(2) + (end.y - start.y).powi(2)).sqrt();
                    if moved <= CLICK_SLOP {
                        if let Some(poi) = nearest_poi(&self.pois, self.viewport, bounds, end) {
                            return (
                                canvas::event::Status::Captured,
                                Some(Message::PoiPicked(poi.id.clone())),
                            );
                        }
                    }
                }
                return (canvas::event::Status::Captured, None);
            }

            // Mouse move - pan if dragging
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.is_dragging {
                    if let Some(current_pos) = cursor.position_in(bounds) {
                        if let Some(last_pos) = state.last_position {
                            let delta = Vector2::new(
                                current_pos.x - last_pos.x,
                                current_pos.y - last_pos.y,
                            );
                            state.last_position = Some(current_pos);
                            return (
                                canvas::event::Status::Captured,
                                Some(Message::MapPanned(delta)),
                            );
                        }
                    }
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }
}

/// State for drag interactions on the map
#[derive(Debug, Clone, Default)]
pub struct PanState {
    pub is_dragging: bool,
    pub last_position: Option<Point>,
    pub pressed_at: Option<Point>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn bounds() -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: 640.0,
            height: 360.0,
        }
    }

    #[test]
    fn test_project_center_lands_mid_canvas() {
        let viewport = Viewport::new(mock::MAP_CENTER);
        let p = project(mock::MAP_CENTER, &viewport, bounds());
        assert!((p.x - 320.0).abs() < 0.001);
        assert!((p.y - 180.0).abs() < 0.001);
    }

    #[test]
    fn test_project_scales_with_zoom() {
        let mut viewport = Viewport::new(mock::MAP_CENTER);
        let east = Coordinates::new(mock::MAP_CENTER.lon + 0.01, mock::MAP_CENTER.lat);

        let dx1 = project(east, &viewport, bounds()).x - 320.0;
        viewport.zoom = 2.0;
        let dx2 = project(east, &viewport, bounds()).x - 320.0;

        assert!(dx1 > 0.0);
        assert!((dx2 - 2.0 * dx1).abs() < 0.01);
    }

    #[test]
    fn test_zoom_clamps() {
        let mut viewport = Viewport::new(mock::MAP_CENTER);
        viewport.zoom_by(100.0);
        assert_eq!(viewport.zoom, 8.0);
        viewport.zoom_by(-100.0);
        assert_eq!(viewport.zoom, 0.25);
    }

    #[test]
    fn test_nearest_poi_respects_pick_radius() {
        let viewport = Viewport::new(mock::MAP_CENTER);
        let pois = mock::attractions();

        let eiffel = &pois[0];
        let at_marker = project(eiffel.position, &viewport, bounds());
        let picked = nearest_poi(&pois, &viewport, bounds(), at_marker);
        assert_eq!(picked.map(|p| p.id.as_str()), Some("a1"));

        let far_corner = Point::new(0.0, 0.0);
        assert!(nearest_poi(&pois, &viewport, bounds(), far_corner).is_none());
    }
}
