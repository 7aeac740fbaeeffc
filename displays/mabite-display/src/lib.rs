//! Display support for the MABITE console
//!
//! This crate provides:
//! - [`FrameBuffer`]: a 128x64 one-bit frame laid out in SSD1306 pages,
//!   usable as an `embedded-graphics` draw target
//! - [`Canvas`]: the core's `Presenter`, composing text and selection bars
//!   into a frame and handing finished frames to a [`FrameSink`]
//!
//! # Architecture
//!
//! The game core draws through `Presenter`. The canvas owns the frame
//! being composed; on `flush()` the frame is passed to a sink. On the
//! device the sink copies it into a shared buffer that the display task
//! streams to the panel over I2C, so the console tick never waits on the
//! bus.

#![no_std]

pub mod canvas;
pub mod frame;

pub use canvas::{Canvas, FrameSink};
pub use frame::{FrameBuffer, HEIGHT, PAGES, WIDTH};
