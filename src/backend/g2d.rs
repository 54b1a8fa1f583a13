// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use super::BlitBackend;
use crate::{
    display::{DisplaySurface, PixelFormat},
    scaler::ScaledRegion,
    Error,
};
use g2d_sys::{
    g2d_format, g2d_format_G2D_BGRA8888, g2d_format_G2D_RGBA8888, G2DSurface, Version, G2D,
};
use std::io;
use tracing::{debug, trace_span};

/// Default G2D library soname.
pub const G2D_LIBRARY: &str = "libg2d.so.2";

const NAME: &str = "g2d";

const fn g2d_format_of(format: PixelFormat) -> g2d_format {
    match format {
        PixelFormat::Bgra32 => g2d_format_G2D_BGRA8888,
        PixelFormat::Rgba32 => g2d_format_G2D_RGBA8888,
    }
}

fn io_error(err: g2d_sys::Error) -> io::Error {
    match err {
        g2d_sys::Error::IoError(e) => e,
        g2d_sys::Error::LibraryError(e) => io::Error::other(e),
        g2d_sys::Error::InvalidFormat(s) => io::Error::new(io::ErrorKind::InvalidInput, s),
    }
}

/// Maps the outcome of a blit to the mirror error, any failure of the blit
/// or the following finish is reported with status -1.
fn check(result: g2d_sys::Result<()>) -> Result<(), Error> {
    result.map_err(|e| Error::BackendSubmit {
        backend: NAME,
        operation: "g2d_blit",
        status: -1,
        source: io_error(e),
    })
}

impl From<&DisplaySurface> for G2DSurface {
    fn from(surface: &DisplaySurface) -> Self {
        Self {
            planes: [surface.phys_addr as _, 0, 0],
            format: g2d_format_of(surface.format),
            left: 0,
            top: 0,
            right: surface.width as i32,
            bottom: surface.height as i32,
            stride: surface.stride_pixels() as i32,
            width: surface.width as i32,
            height: surface.height as i32,
            ..Default::default()
        }
    }
}

/// Describes `dst` with its drawing rectangle narrowed to `region`.
pub fn destination(dst: &DisplaySurface, region: &ScaledRegion) -> G2DSurface {
    G2DSurface {
        left: region.offset_x as i32,
        top: region.offset_y as i32,
        right: region.right() as i32,
        bottom: region.bottom() as i32,
        ..dst.into()
    }
}

/// Direct blit-engine backend using the NXP G2D library.
///
/// Each frame is issued with `g2d_blit` and completed with `g2d_finish`,
/// which blocks until the GPU has written the destination. The surface
/// layout passed to the library follows its reported version, and the
/// context is closed when the backend is dropped.
///
/// # Thread Safety
///
/// `G2dBackend` is **not** thread-safe, it owns a single G2D context.
pub struct G2dBackend {
    g2d: G2D,
}

impl G2dBackend {
    /// Loads the G2D library and opens a G2D context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackendOpen`] if:
    /// - The G2D library cannot be loaded (usually `libg2d.so.2`)
    /// - The G2D device cannot be opened (usually `/dev/galcore`)
    pub fn open(library: &str) -> Result<Self, Error> {
        let g2d = G2D::new(library).map_err(|e| Error::BackendOpen {
            backend: NAME,
            source: Box::new(io_error(e)),
        })?;
        debug!("G2D opened {} version {}", library, g2d.version());
        Ok(Self { g2d })
    }

    pub fn version(&self) -> Version {
        self.g2d.version()
    }
}

impl BlitBackend for G2dBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn submit_frame(
        &mut self,
        src: &DisplaySurface,
        dst: &DisplaySurface,
        region: &ScaledRegion,
    ) -> Result<(), Error> {
        let _span = trace_span!("g2d_blit").entered();
        let src: G2DSurface = src.into();
        let dst = destination(dst, region);
        check(self.g2d.blit(&src, &dst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaler::aspect_fit;

    #[test]
    fn test_surface() {
        let surface = DisplaySurface::new(1280, 720, 0x1800_0000, PixelFormat::Bgra32);
        let s: G2DSurface = (&surface).into();
        assert_eq!(s.format, g2d_format_G2D_BGRA8888);
        assert_eq!(s.planes, [0x1800_0000, 0, 0]);
        assert_eq!((s.width, s.height, s.stride), (1280, 720, 1280));
        assert_eq!((s.left, s.top, s.right, s.bottom), (0, 0, 1280, 720));
        assert_eq!(s.rot, g2d_sys::g2d_rotation_G2D_ROTATION_0);
    }

    #[test]
    fn test_destination_region() {
        let mut dst = DisplaySurface::new(1366, 768, 0x2000_0000, PixelFormat::Bgra32);
        dst.stride = 1376 * 4;
        let region = aspect_fit(1920, 640, 1366, 768);
        let d = destination(&dst, &region);
        assert_eq!((d.width, d.height, d.stride), (1366, 768, 1376));
        assert_eq!(d.planes[0], 0x2000_0000);
        assert_eq!((d.left, d.top, d.right, d.bottom), (0, 156, 1366, 611));
    }

    #[test]
    fn test_check_status() {
        assert!(check(Ok(())).is_ok());

        let err = check(Err(io::Error::from_raw_os_error(5).into())).unwrap_err();
        assert!(matches!(
            err,
            Error::BackendSubmit {
                backend: "g2d",
                operation: "g2d_blit",
                status: -1,
                ..
            }
        ));
        assert_eq!(err.exit_code(), -1);

        let err = check(Err(g2d_sys::Error::InvalidFormat("NV12".to_owned()))).unwrap_err();
        assert!(err.to_string().contains("NV12"));
    }

    #[test]
    fn test_open_missing_library() {
        let err = match G2dBackend::open("libg2d-does-not-exist.so") {
            Ok(_) => panic!("missing library opened"),
            Err(e) => e,
        };
        assert!(matches!(err, Error::BackendOpen { backend: "g2d", .. }));
        assert_eq!(err.exit_code(), -1);
    }
}
