// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Raw bindings for the Linux framebuffer (`linux/fb.h`) and the NXP i.MX
//! Image Processing Unit task interface (`linux/ipu.h`).
//!
//! Structures are `#[repr(C)]` mirrors of the kernel UAPI headers and the
//! ioctl wrappers are generated with [`nix`]. Nothing here is safe to call
//! without a valid descriptor for the matching device node.

#![allow(non_camel_case_types)]

use libc::{c_char, c_int, c_ulong};

/// Kernel `dma_addr_t`, the bus address the IPU reads from and writes to.
#[cfg(target_pointer_width = "64")]
pub type dma_addr_t = u64;
/// Kernel `dma_addr_t`, the bus address the IPU reads from and writes to.
#[cfg(not(target_pointer_width = "64"))]
pub type dma_addr_t = u32;

pub const FBIOGET_VSCREENINFO: c_ulong = 0x4600;
pub const FBIOGET_FSCREENINFO: c_ulong = 0x4602;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct fb_bitfield {
    pub offset: u32,
    pub length: u32,
    pub msb_right: u32,
}

/// Variable screen information: resolution, depth and timings.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct fb_var_screeninfo {
    pub xres: u32,
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    pub bits_per_pixel: u32,
    pub grayscale: u32,
    pub red: fb_bitfield,
    pub green: fb_bitfield,
    pub blue: fb_bitfield,
    pub transp: fb_bitfield,
    pub nonstd: u32,
    pub activate: u32,
    pub height: u32,
    pub width: u32,
    pub accel_flags: u32,
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    pub sync: u32,
    pub vmode: u32,
    pub rotate: u32,
    pub colorspace: u32,
    pub reserved: [u32; 4],
}

/// Fixed screen information: memory layout of the framebuffer.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct fb_fix_screeninfo {
    pub id: [c_char; 16],
    pub smem_start: c_ulong,
    pub smem_len: u32,
    pub type_: u32,
    pub type_aux: u32,
    pub visual: u32,
    pub xpanstep: u16,
    pub ypanstep: u16,
    pub ywrapstep: u16,
    pub line_length: u32,
    pub mmio_start: c_ulong,
    pub mmio_len: u32,
    pub accel: u32,
    pub capabilities: u16,
    pub reserved: [u16; 2],
}

impl fb_fix_screeninfo {
    /// Driver identification string, trimmed at the first NUL.
    pub fn id(&self) -> String {
        let bytes: Vec<u8> = self
            .id
            .iter()
            .take_while(|c| **c != 0)
            .map(|c| *c as u8)
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

nix::ioctl_read_bad!(
    /// Reads the variable screen information of a framebuffer device.
    fbioget_vscreeninfo,
    FBIOGET_VSCREENINFO,
    fb_var_screeninfo
);

nix::ioctl_read_bad!(
    /// Reads the fixed screen information of a framebuffer device.
    fbioget_fscreeninfo,
    FBIOGET_FSCREENINFO,
    fb_fix_screeninfo
);

/// Builds a V4L2 style fourcc code, as the IPU pixel format tags are defined.
pub const fn fourcc(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) | ((b as u32) << 8) | ((c as u32) << 16) | ((d as u32) << 24)
}

pub const IPU_PIX_FMT_BGRA32: u32 = fourcc(b'B', b'G', b'R', b'A');
pub const IPU_PIX_FMT_RGBA32: u32 = fourcc(b'R', b'G', b'B', b'A');

pub const IPU_ROTATE_NONE: u8 = 0;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ipu_pos {
    pub x: u32,
    pub y: u32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ipu_crop {
    pub pos: ipu_pos,
    pub w: u32,
    pub h: u32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ipu_deinterlace {
    pub enable: bool,
    pub motion: u8,
    pub field_fmt: u8,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ipu_input {
    pub width: u32,
    pub height: u32,
    pub format: u32,
    pub crop: ipu_crop,
    pub paddr: dma_addr_t,
    pub deinterlace: ipu_deinterlace,
    pub paddr_n: dma_addr_t,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ipu_alpha {
    pub mode: u8,
    pub gvalue: u8,
    pub loc_alp_paddr: dma_addr_t,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ipu_colorkey {
    pub enable: c_int,
    pub value: u32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ipu_overlay {
    pub width: u32,
    pub height: u32,
    pub format: u32,
    pub crop: ipu_crop,
    pub alpha: ipu_alpha,
    pub colorkey: ipu_colorkey,
    pub paddr: dma_addr_t,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ipu_output {
    pub width: u32,
    pub height: u32,
    pub format: u32,
    pub rotate: u8,
    pub crop: ipu_crop,
    pub paddr: dma_addr_t,
}

/// A single IPU processing task. A zero `timeout` selects the driver
/// default.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ipu_task {
    pub input: ipu_input,
    pub output: ipu_output,
    pub overlay_en: bool,
    pub overlay: ipu_overlay,
    pub priority: u8,
    pub task_id: u8,
    pub timeout: u32,
}

nix::ioctl_write_ptr!(
    /// Queues a task on the IPU and blocks until it has been processed.
    ipu_queue_task,
    b'I',
    0x1,
    ipu_task
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourcc() {
        assert_eq!(IPU_PIX_FMT_BGRA32, 0x4152_4742);
        assert_eq!(IPU_PIX_FMT_RGBA32, 0x4142_4752);
    }

    #[test]
    fn test_screeninfo_layout() {
        // Sizes fixed by the kernel UAPI.
        assert_eq!(std::mem::size_of::<fb_var_screeninfo>(), 160);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(std::mem::size_of::<fb_fix_screeninfo>(), 80);
        #[cfg(target_pointer_width = "32")]
        assert_eq!(std::mem::size_of::<fb_fix_screeninfo>(), 68);
    }

    #[test]
    fn test_fix_id() {
        let mut fix = fb_fix_screeninfo::default();
        for (dst, src) in fix.id.iter_mut().zip(b"DISP3 BG\0junk".iter()) {
            *dst = *src as c_char;
        }
        assert_eq!(fix.id(), "DISP3 BG");
    }
}
