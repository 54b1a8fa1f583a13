// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use super::BlitBackend;
use crate::{display::DisplaySurface, scaler::ScaledRegion, Error};
use mxc_sys::{dma_addr_t, ipu_crop, ipu_pos, ipu_queue_task, ipu_task, IPU_ROTATE_NONE};
use std::{
    fs::{File, OpenOptions},
    os::fd::AsRawFd,
    path::{Path, PathBuf},
};
use tracing::{debug, trace_span};

/// Default IPU task device node on i.MX6 platforms.
pub const IPU_DEVICE: &str = "/dev/mxc_ipu";

/// Source lines cropped from the top of every frame submitted to the IPU.
///
/// The copy starts one line down and is one line shorter. This is a
/// workaround specific to the IPU and is not applied by other backends.
pub const SOURCE_SKIP_LINES: u32 = 1;

const NAME: &str = "ipu";

/// Builds the IPU task copying all of `src` into `region` of `dst`.
///
/// The task width of each side is the row pitch of its framebuffer, the
/// crops select the visible pixels.
///
/// The destination placement is expressed by advancing the output physical
/// address to the first pixel of `region`, the output crop then only carries
/// the scaled size.
pub fn build_task(src: &DisplaySurface, dst: &DisplaySurface, region: &ScaledRegion) -> ipu_task {
    let mut task = ipu_task::default();

    task.input.width = src.stride_pixels();
    task.input.height = src.height;
    task.input.format = src.format.fourcc();
    task.input.crop = ipu_crop {
        pos: ipu_pos {
            x: 0,
            y: SOURCE_SKIP_LINES,
        },
        w: src.width,
        h: src.height.saturating_sub(SOURCE_SKIP_LINES),
    };
    task.input.paddr = src.phys_addr as dma_addr_t;

    task.output.width = dst.stride_pixels();
    task.output.height = dst.height;
    task.output.format = dst.format.fourcc();
    task.output.rotate = IPU_ROTATE_NONE;
    task.output.crop = ipu_crop {
        pos: ipu_pos::default(),
        w: region.width,
        h: region.height,
    };
    task.output.paddr =
        (dst.phys_addr + dst.byte_offset(region.offset_x, region.offset_y)) as dma_addr_t;

    task
}

/// Task-queue backend driving the i.MX Image Processing Unit.
///
/// Each frame is queued as a single synchronous task, the ioctl returns once
/// the IPU has processed it.
#[derive(Debug)]
pub struct IpuBackend {
    path: PathBuf,
    file: File,
}

impl IpuBackend {
    /// Opens the IPU task device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackendOpen`] if the device node cannot be opened
    /// read-write, usually because the IPU driver is not loaded or the
    /// process lacks permission.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|e| Error::BackendOpen {
                backend: NAME,
                source: Box::new(e),
            })?;
        debug!("IPU opened {}", path.display());
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlitBackend for IpuBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn submit_frame(
        &mut self,
        src: &DisplaySurface,
        dst: &DisplaySurface,
        region: &ScaledRegion,
    ) -> Result<(), Error> {
        let task = build_task(src, dst, region);
        let _span = trace_span!("ipu_queue_task").entered();
        unsafe { ipu_queue_task(self.file.as_raw_fd(), &task) }.map_err(|errno| {
            Error::BackendSubmit {
                backend: NAME,
                operation: "IPU_QUEUE_TASK",
                status: -1,
                source: errno.into(),
            }
        })?;
        Ok(())
    }
}
