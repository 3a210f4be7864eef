#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LoaderConfig`**: Segment count, direction, stroke widths, durations, colors and peak scale
//! - **`SegmentGeometry`**: Angular layout of the even and odd segment families
//! - **`AnimationCycle`**: The transform → rotation → flip state machine
//! - **`LoaderFrame`**: Resolved colors, offsets and scales for one tick
//! - **`LoopLoader`**: Owns one loader, reads the clock and renders each tick
//! - **`FrameRenderer`**: Trait (or closure) receiving every frame
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Canvas`**: Trait to implement for your drawing surface
//! - **`LoaderPainter`**: Turns a frame into `Canvas` calls
//!
//! The library uses `Srgba<f32>` (0.0-1.0 range) for all color operations and interpolation.

// Re-export Srgba from palette for user convenience
pub use palette::Srgba;

pub mod canvas;
pub mod colors;
pub mod command;
pub mod config;
pub mod cycle;
pub mod frame;
pub mod geometry;
pub mod loader;
pub mod paint;
pub mod time;
pub mod types;

pub use canvas::{ArcSpec, Canvas, Paint, Point, RadialGradient, Rect, Stroke};
pub use command::LoaderAction;
pub use config::{ConfigBuilder, LoaderConfig};
pub use cycle::{AnimationCycle, CycleProgress, CycleStep};
pub use frame::LoaderFrame;
pub use geometry::{SegmentGeometry, SegmentOffsets};
pub use loader::{FrameRenderer, LoopLoader, ServiceTiming};
pub use paint::{DrawOp, DrawPlan, LoaderPainter, PaintError, Viewport, draw_op_count};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ConfigError, CycleState, Easing, Family, Phase, RotationDirection};
