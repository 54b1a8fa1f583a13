// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! # EdgeFirst Framebuffer Mirror Library
//!
//! This library mirrors one Linux framebuffer onto another using the NXP
//! i.MX hardware accelerators for the scaled copy. It is used to show the
//! internal panel of a device on a secondary output such as HDMI without
//! involving the CPU in the pixel copy.
//!
//! ## Features
//!
//! - **Display Geometry**: Query resolution, stride and physical address of
//!   framebuffer devices.
//! - **Aspect Fit**: Center the source image in the destination while
//!   keeping its aspect ratio.
//! - **Hardware Acceleration**: Scaled copies through the i.MX6 IPU task
//!   queue or the i.MX8 G2D blit engine.
//! - **Frame Pacing**: Bound the mirror rate without relying on vsync.
//!
//! ## Example
//!
//! ```no_run
//! use edgefirst_mirror::{backend::IpuBackend, compositor::Compositor, display::DisplayDevice};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let src = DisplayDevice::open("/dev/fb0")?;
//! let dst = DisplayDevice::open("/dev/fb1")?;
//! let ipu = IpuBackend::open("/dev/mxc_ipu")?;
//!
//! // Copy fb0 onto fb1 at 30 fps until the IPU reports an error
//! let mut compositor = Compositor::new(src.surface(), dst.surface(), ipu, 30);
//! compositor.run()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Platform Requirements
//!
//! - **Linux**: framebuffer devices with physically contiguous memory
//! - **Hardware Acceleration**: NXP i.MX6 (IPU) or i.MX8 (G2D)
//!
//! ## Safety
//!
//! This library uses `unsafe` code for the framebuffer and IPU ioctls. All
//! unsafe operations are isolated to the `display` and `backend::ipu`
//! modules and wrapped with safe APIs. G2D calls go through the safe
//! wrapper of the `g2d-sys` crate.

pub mod backend;
pub mod compositor;
pub mod display;
mod error;
pub mod pacer;
pub mod scaler;

pub use error::Error;
