// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{
    backend::BlitBackend,
    display::DisplaySurface,
    pacer::{FramePacer, FrameRate},
    scaler::{aspect_fit, ScaledRegion},
    Error,
};
use std::convert::Infallible;
use tracing::{debug, info, info_span};

/// The mirror loop: one scaled copy followed by one pacing wait, forever.
///
/// Geometry is captured once at construction. Frame `n` is fully submitted
/// and completed before its pacing wait starts, and that wait completes
/// before frame `n + 1` is submitted.
pub struct Compositor<B: BlitBackend> {
    src: DisplaySurface,
    dst: DisplaySurface,
    region: ScaledRegion,
    backend: B,
    pacer: FramePacer,
    rate: FrameRate,
    frames: u64,
}

impl<B: BlitBackend> Compositor<B> {
    /// Prepares a compositor mirroring `src` onto `dst` at `target_fps`.
    ///
    /// `target_fps` must be non-zero.
    pub fn new(src: DisplaySurface, dst: DisplaySurface, backend: B, target_fps: u32) -> Self {
        let region = aspect_fit(src.width, src.height, dst.width, dst.height);
        info!(
            "mirroring {}x{} onto {}x{} region {} with {} at {} fps",
            src.width,
            src.height,
            dst.width,
            dst.height,
            region,
            backend.name(),
            target_fps
        );

        Self {
            src,
            dst,
            region,
            backend,
            pacer: FramePacer::new(target_fps),
            rate: FrameRate::default(),
            frames: 0,
        }
    }

    pub fn region(&self) -> &ScaledRegion {
        &self.region
    }

    pub fn source(&self) -> &DisplaySurface {
        &self.src
    }

    pub fn destination(&self) -> &DisplaySurface {
        &self.dst
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Frames successfully submitted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Submits one frame and then waits out the rest of the frame interval.
    pub fn step(&mut self) -> Result<(), Error> {
        let _span = info_span!("frame").entered();

        self.backend.submit_frame(&self.src, &self.dst, &self.region)?;
        self.frames += 1;

        self.pacer.throttle();

        if let Some(client) = tracy_client::Client::running() {
            client.frame_mark();
        }

        let fps = self.rate.update();
        if self.frames % self.pacer.target_fps().max(1) as u64 == 0 {
            debug!("frames: {} fps: {:.1}", self.frames, fps);
        }

        Ok(())
    }

    /// Runs until the backend reports a failure, which is returned as is.
    pub fn run(&mut self) -> Result<Infallible, Error> {
        loop {
            self.step()?;
        }
    }
}
