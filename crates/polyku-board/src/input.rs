//! Gesture-to-action mapping and the pinch zoom/pan transform.
//!
//! [`BoardInput`] translates raw pointer gestures into logical board actions
//! (tap / long-press on a cell) and maintains the continuous zoom/offset
//! transform for pinch gestures. It is host-agnostic: the host's gesture
//! recognizer produces [`GestureEvent`]s, and the host's presentation layer
//! applies [`ScreenTransform`] when painting.
//!
//! Two states exist: identity (zoom 1, offset zero) and zoomed (zoom in
//! (1, 3], offset clamped to the board bounds). Toggling the enabled flag
//! resets to identity; no gesture can escape the clamp ranges.

use polyku_core::CellPos;

use crate::{geom::Point, geometry::BoardGeometry};

/// Minimum zoom factor (fully zoomed out, identity).
pub const MIN_ZOOM: f32 = 1.0;
/// Maximum zoom factor.
pub const MAX_ZOOM: f32 = 3.0;

/// A discrete gesture delivered by the host's input system.
///
/// Points are in raw widget pixels, relative to the board's top-left corner,
/// before the zoom/offset transform is undone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A completed tap.
    Tap(Point),
    /// A completed long-press.
    LongPress(Point),
    /// One update of an in-progress pinch/pan gesture.
    Pinch {
        /// Centroid of the pointers.
        centroid: Point,
        /// Pan delta since the previous update.
        pan: Point,
        /// Multiplicative zoom delta since the previous update.
        zoom: f32,
    },
}

/// A logical board action resolved from a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// The cell was tapped.
    Tap(CellPos),
    /// The cell was long-pressed.
    LongPress(CellPos),
}

/// The zoom/offset view transform.
///
/// `offset` is the top-left of the visible window within the logical board,
/// in un-zoomed board pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Zoom factor in `[MIN_ZOOM, MAX_ZOOM]`.
    pub zoom: f32,
    /// Origin of the visible window in board pixel space.
    pub offset: Point,
}

impl ViewTransform {
    /// The identity transform (no zoom, no offset).
    pub const IDENTITY: Self = Self {
        zoom: MIN_ZOOM,
        offset: Point::ZERO,
    };

    /// Returns whether this is the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.zoom == MIN_ZOOM && self.offset == Point::ZERO
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The linear transform a host applies when presenting the board.
///
/// Translate by `translation`, then scale by `scale`, with the transform
/// origin at the board's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    /// Pre-scale translation in screen pixels.
    pub translation: Point,
    /// Uniform scale factor.
    pub scale: f32,
}

/// Maps pointer gestures to board actions and maintains the view transform.
#[derive(Debug, Clone)]
pub struct BoardInput {
    transform: ViewTransform,
    enabled: bool,
    zoomable: bool,
}

impl Default for BoardInput {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardInput {
    /// Creates an enabled, non-zoomable input mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            enabled: true,
            zoomable: false,
        }
    }

    /// Enables or disables pinch zoom/pan handling.
    pub const fn set_zoomable(&mut self, zoomable: bool) {
        self.zoomable = zoomable;
    }

    /// Enables or disables the board.
    ///
    /// Any transition resets the transform to identity, so a board that is
    /// disabled and later re-enabled always comes back at zoom 1 with no
    /// offset. While disabled, gestures are recognized but have no effect.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("board enabled -> {enabled}; transform reset");
            self.transform = ViewTransform::IDENTITY;
        }
        self.enabled = enabled;
    }

    /// Returns whether the board currently accepts gestures.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The current view transform.
    #[must_use]
    pub const fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// The presentation transform for the current zoom/offset.
    #[must_use]
    pub fn screen_transform(&self) -> ScreenTransform {
        ScreenTransform {
            translation: -self.transform.offset * self.transform.zoom,
            scale: self.transform.zoom,
        }
    }

    /// Processes one gesture, returning the resolved action if any.
    ///
    /// Taps and long-presses resolve through the inverse view transform to a
    /// cell; points that land outside the grid are ignored. Pinch updates
    /// mutate the transform (when zoomable) and never produce an action.
    pub fn handle(&mut self, event: GestureEvent, geometry: &BoardGeometry) -> Option<BoardAction> {
        if !self.enabled {
            return None;
        }
        match event {
            GestureEvent::Tap(point) => self.resolve(point, geometry).map(BoardAction::Tap),
            GestureEvent::LongPress(point) => {
                self.resolve(point, geometry).map(BoardAction::LongPress)
            }
            GestureEvent::Pinch { centroid, pan, zoom } => {
                if self.zoomable {
                    self.apply_pinch(centroid, pan, zoom, geometry.width());
                }
                None
            }
        }
    }

    fn resolve(&self, point: Point, geometry: &BoardGeometry) -> Option<CellPos> {
        let board_point = point / self.transform.zoom + self.transform.offset;
        let resolved = geometry.cell_at(board_point);
        log::trace!("gesture at {point:?} -> board {board_point:?} -> {resolved:?}");
        resolved
    }

    fn apply_pinch(&mut self, centroid: Point, pan: Point, zoom_delta: f32, width: f32) {
        let old_zoom = self.transform.zoom;
        let new_zoom = (old_zoom * zoom_delta).clamp(MIN_ZOOM, MAX_ZOOM);

        // Keep the point under the gesture centroid visually stationary.
        let offset = (self.transform.offset + centroid / old_zoom)
            - (centroid / new_zoom + pan / old_zoom);

        // The visible window is width/zoom wide; keep it inside the board.
        let max_offset = width - width / new_zoom;
        self.transform = ViewTransform {
            zoom: new_zoom,
            offset: Point::new(
                offset.x.clamp(0.0, max_offset),
                offset.y.clamp(0.0, max_offset),
            ),
        };
    }
}
