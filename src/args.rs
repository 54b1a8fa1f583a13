// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use clap::Parser;
use edgefirst_mirror::backend::{g2d::G2D_LIBRARY, ipu::IPU_DEVICE};
use std::path::PathBuf;

/// Hardware accelerator used for the scaled copy.
#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Copy)]
pub enum Backend {
    /// i.MX6 Image Processing Unit task queue (/dev/mxc_ipu)
    Ipu,
    /// i.MX8 G2D blit engine (libg2d)
    G2d,
}

/// Command-line arguments for EdgeFirst Framebuffer Mirror.
///
/// Arguments can be specified via command line or environment variables.
///
/// # Example
///
/// ```bash
/// # Mirror the panel onto HDMI at 30 fps
/// edgefirst-mirror -i /dev/fb0 -o /dev/fb1 -f 30
///
/// # Via environment variables
/// export MIRROR_OUTPUT=/dev/fb2
/// export MIRROR_BACKEND=g2d
/// edgefirst-mirror
/// ```
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Source framebuffer to copy from
    #[arg(short, long, env = "MIRROR_INPUT", default_value = "/dev/fb0")]
    pub input: PathBuf,

    /// Destination framebuffer to copy to
    #[arg(short, long, env = "MIRROR_OUTPUT", default_value = "/dev/fb1")]
    pub output: PathBuf,

    /// Mirror frame rate limit
    #[arg(
        short,
        long,
        env = "MIRROR_FPS",
        default_value = "30",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub fps: u32,

    /// Hardware accelerator used for the copy
    #[arg(long, env = "MIRROR_BACKEND", default_value = "ipu", value_enum)]
    pub backend: Backend,

    /// IPU task device node
    #[arg(long, env = "MIRROR_IPU_DEVICE", default_value = IPU_DEVICE)]
    pub ipu_device: PathBuf,

    /// G2D library to load
    #[arg(long, env = "MIRROR_G2D_LIBRARY", default_value = G2D_LIBRARY)]
    pub g2d_library: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable Tracy profiler for performance analysis
    #[arg(long, env = "TRACY")]
    pub tracy: bool,
}
