// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::Error;
use core::fmt;
use mxc_sys::{
    fb_fix_screeninfo, fb_var_screeninfo, fbioget_fscreeninfo, fbioget_vscreeninfo,
    IPU_PIX_FMT_BGRA32, IPU_PIX_FMT_RGBA32,
};
use std::{
    fs::{File, OpenOptions},
    os::fd::AsRawFd,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// Pixel formats requested from the accelerators.
///
/// The mirror never negotiates formats with the framebuffer driver, both
/// surfaces are always described as 32-bit with an alpha channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// 32-bit BGRA, the native layout of the i.MX display controllers
    #[default]
    Bgra32,
    /// 32-bit RGBA
    Rgba32,
}

impl PixelFormat {
    pub const fn fourcc(self) -> u32 {
        match self {
            PixelFormat::Bgra32 => IPU_PIX_FMT_BGRA32,
            PixelFormat::Rgba32 => IPU_PIX_FMT_RGBA32,
        }
    }

    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Bgra32 | PixelFormat::Rgba32 => 32,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PixelFormat::Bgra32 => write!(f, "BGRA"),
            PixelFormat::Rgba32 => write!(f, "RGBA"),
        }
    }
}

/// Geometry and memory location of one display, captured once at startup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisplaySurface {
    /// Visible width in pixels
    pub width: u32,
    /// Visible height in pixels
    pub height: u32,
    /// Bytes per row as reported by the driver
    pub stride: u32,
    /// Depth reported by the driver
    pub bits_per_pixel: u32,
    /// Physical base address of the framebuffer memory
    pub phys_addr: u64,
    /// Format requested from the accelerator
    pub format: PixelFormat,
}

impl DisplaySurface {
    /// Describes a tightly packed surface at `phys_addr`.
    pub fn new(width: u32, height: u32, phys_addr: u64, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            stride: width * format.bits_per_pixel() / 8,
            bits_per_pixel: format.bits_per_pixel(),
            phys_addr,
            format,
        }
    }

    /// Row pitch in pixels, falling back to the width when the driver did
    /// not report a usable line length.
    pub fn stride_pixels(&self) -> u32 {
        if self.stride == 0 || self.bits_per_pixel == 0 {
            return self.width;
        }
        self.stride * 8 / self.bits_per_pixel
    }

    /// Byte offset of pixel (`x`, `y`) for a buffer laid out
    /// [`stride_pixels`](Self::stride_pixels) pixels per row in the
    /// requested format.
    pub fn byte_offset(&self, x: u32, y: u32) -> u64 {
        (self.stride_pixels() as u64 * y as u64 + x as u64) * self.format.bits_per_pixel() as u64
            / 8
    }
}

impl fmt::Display for DisplaySurface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{} {} stride:{} bpp:{} paddr:{:#x}",
            self.width, self.height, self.format, self.stride, self.bits_per_pixel, self.phys_addr
        )
    }
}

/// An opened framebuffer device node.
///
/// The node stays open for the lifetime of the value and is closed on drop.
#[derive(Debug)]
pub struct DisplayDevice {
    path: PathBuf,
    _file: File,
    var: fb_var_screeninfo,
    fix: fb_fix_screeninfo,
}

impl DisplayDevice {
    /// Opens the framebuffer at `path` read-write and queries its variable
    /// and fixed screen information.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceOpen`] if the node cannot be opened and
    /// [`Error::DeviceQuery`] if it does not answer the framebuffer ioctls,
    /// for example when `path` is not a framebuffer.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|source| Error::DeviceOpen {
                path: path.clone(),
                source,
            })?;

        let mut var = fb_var_screeninfo::default();
        unsafe { fbioget_vscreeninfo(file.as_raw_fd(), &mut var) }.map_err(|errno| {
            Error::DeviceQuery {
                path: path.clone(),
                query: "var",
                source: errno.into(),
            }
        })?;

        let mut fix = fb_fix_screeninfo::default();
        unsafe { fbioget_fscreeninfo(file.as_raw_fd(), &mut fix) }.map_err(|errno| {
            Error::DeviceQuery {
                path: path.clone(),
                query: "fix",
                source: errno.into(),
            }
        })?;

        let device = Self {
            path,
            _file: file,
            var,
            fix,
        };
        debug!("opened {}", device);
        Ok(device)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn id(&self) -> String {
        self.fix.id()
    }

    /// Describes the visible area of the device as a BGRA surface.
    pub fn surface(&self) -> DisplaySurface {
        let format = PixelFormat::default();
        if self.var.bits_per_pixel != format.bits_per_pixel() {
            warn!(
                "{} reports {} bpp but is mirrored as {} bpp {}",
                self.path.display(),
                self.var.bits_per_pixel,
                format.bits_per_pixel(),
                format
            );
        }

        DisplaySurface {
            width: self.var.xres,
            height: self.var.yres,
            stride: self.fix.line_length,
            bits_per_pixel: self.var.bits_per_pixel,
            phys_addr: self.fix.smem_start as u64,
            format,
        }
    }
}

impl fmt::Display for DisplayDevice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}x{} bpp:{} line_length:{} smem_start:{:#x}",
            self.path.display(),
            self.id(),
            self.var.xres,
            self.var.yres,
            self.var.bits_per_pixel,
            self.fix.line_length,
            self.fix.smem_start
        )
    }
}
