//! Board renderer and input mapper for Polyku grids.
//!
//! This crate turns a snapshot of board state into a list of drawing
//! commands, and raw pointer gestures into logical board actions. It is
//! host-agnostic: no windowing or GPU types appear in its API, only plain
//! points, rectangles, and colors. A host (such as the egui application in
//! `polyku-app`) replays [`DrawCmd`]s onto its own surface and feeds
//! [`GestureEvent`]s into [`BoardInput`].
//!
//! # Overview
//!
//! - [`geometry`]: cell size, note subdivisions, and separator cadence
//!   derived from grid size and layout width
//! - [`paint`]: font sizing defaults and glyph metrics
//! - [`notes`]: the candidate-to-sub-cell placement table
//! - [`view`]: the validated per-frame snapshot consumed by the renderer
//! - [`draw`]: the pure `(view) -> Vec<DrawCmd>` pipeline
//! - [`input`]: tap/long-press resolution and the pinch zoom/pan transform
//!
//! # Examples
//!
//! ```
//! use polyku_board::{
//!     BoardGeometry, BoardPaints, BoardPalette, BoardView, FontSizes,
//!     HeuristicTextMetrics, render,
//! };
//! use polyku_core::{Cell, GridSize};
//!
//! let size = GridSize::NINE;
//! let cells: Vec<Cell> = size.positions().map(Cell::empty).collect();
//! let view = BoardView::new(size, &cells, &[], None, &[]).unwrap();
//!
//! let geometry = BoardGeometry::new(size, 540.0);
//! let paints = BoardPaints::new(FontSizes::defaults_for(size), 1.0, &HeuristicTextMetrics);
//! let commands = render(&view, &geometry, &paints, &BoardPalette::default());
//! assert!(!commands.is_empty()); // at least the frame and separators
//! ```

pub mod draw;
pub mod geom;
pub mod geometry;
pub mod input;
pub mod notes;
pub mod paint;
pub mod palette;
pub mod view;

pub use self::{
    draw::{DrawCmd, render},
    geom::{Point, Rect},
    geometry::{Axis, BoardGeometry, Separator},
    input::{BoardAction, BoardInput, GestureEvent, ScreenTransform, ViewTransform},
    notes::{NoteSlot, note_slot},
    paint::{BoardPaints, FontSizes, GlyphExtents, HeuristicTextMetrics, TextMetrics},
    palette::{BoardPalette, Rgba},
    view::{BoardFlags, BoardView, ViewError},
};
