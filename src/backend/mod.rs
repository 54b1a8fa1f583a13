// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Hardware blit backends.
//!
//! Each backend copies the full source framebuffer into the scaled region
//! of the destination framebuffer once per call and blocks until the
//! hardware has finished. A failed submission is returned as
//! [`Error::BackendSubmit`] and is never retried.

pub mod g2d;
pub mod ipu;

use crate::{display::DisplaySurface, scaler::ScaledRegion, Error};

pub use g2d::G2dBackend;
pub use ipu::IpuBackend;

/// A hardware accelerator able to perform one scaled full-frame copy.
pub trait BlitBackend {
    /// Short backend name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Copies `src` into `region` of `dst`, returning once the hardware
    /// has completed the copy.
    fn submit_frame(
        &mut self,
        src: &DisplaySurface,
        dst: &DisplaySurface,
        region: &ScaledRegion,
    ) -> Result<(), Error>;
}

impl<B: BlitBackend + ?Sized> BlitBackend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn submit_frame(
        &mut self,
        src: &DisplaySurface,
        dst: &DisplaySurface,
        region: &ScaledRegion,
    ) -> Result<(), Error> {
        (**self).submit_frame(src, dst, region)
    }
}
