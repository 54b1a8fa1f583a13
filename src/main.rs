// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

mod args;

use args::{Args, Backend};
use clap::Parser;
use edgefirst_mirror::{
    backend::{BlitBackend, G2dBackend, IpuBackend},
    compositor::Compositor,
    display::DisplayDevice,
    Error,
};
use std::{convert::Infallible, process};
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, Layer, Registry};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { -1 } else { 0 });
        }
    };

    if let Err(e) = init_logging(&args) {
        eprintln!("failed to initialize logging: {e}");
    }

    info!("EdgeFirst Framebuffer Mirror {}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(never) => match never {},
        Err(e) => {
            error!("{e}");
            process::exit(e.exit_code());
        }
    }
}

fn init_logging(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let stdout_log = tracing_subscriber::fmt::layer().with_filter(level);

    let journald = match tracing_journald::layer() {
        Ok(journald) => Some(journald.with_filter(level)),
        Err(_) => None,
    };

    let tracy = if args.tracy {
        tracy_client::Client::start();
        Some(tracing_tracy::TracyLayer::default())
    } else {
        None
    };

    let subscriber = Registry::default()
        .with(stdout_log)
        .with(journald)
        .with(tracy);
    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    Ok(())
}

fn run(args: &Args) -> Result<Infallible, Error> {
    let src = DisplayDevice::open(&args.input)?;
    info!("source {}", src);
    let dst = DisplayDevice::open(&args.output)?;
    info!("destination {}", dst);

    match args.backend {
        Backend::Ipu => mirror(&src, &dst, IpuBackend::open(&args.ipu_device)?, args),
        Backend::G2d => mirror(&src, &dst, G2dBackend::open(&args.g2d_library)?, args),
    }
}

fn mirror<B: BlitBackend>(
    src: &DisplayDevice,
    dst: &DisplayDevice,
    backend: B,
    args: &Args,
) -> Result<Infallible, Error> {
    let mut compositor = Compositor::new(src.surface(), dst.surface(), backend, args.fps);
    compositor.run()
}
