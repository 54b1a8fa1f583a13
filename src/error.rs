// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use std::{io, path::PathBuf};

/// Failures of the mirror pipeline. Every variant is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The framebuffer device node could not be opened read-write.
    #[error("unable to open {}: {source}", path.display())]
    DeviceOpen { path: PathBuf, source: io::Error },

    /// A screen information ioctl on an opened framebuffer failed.
    #[error("unable to get {} {query} screeninfo: {source}", path.display())]
    DeviceQuery {
        path: PathBuf,
        query: &'static str,
        source: io::Error,
    },

    /// The hardware accelerator handle could not be acquired.
    #[error("unable to open {backend} backend: {source}")]
    BackendOpen {
        backend: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A per-frame submission to the accelerator reported a negative status.
    #[error("{backend} {operation} failed with status {status}: {source}")]
    BackendSubmit {
        backend: &'static str,
        operation: &'static str,
        status: i32,
        source: io::Error,
    },
}

impl Error {
    /// Process exit status for this failure.
    ///
    /// Submission failures carry the backend's own negative status, all
    /// other failures exit with -1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::BackendSubmit { status, .. } if *status < 0 => *status,
            _ => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code() {
        let err = Error::DeviceOpen {
            path: PathBuf::from("/dev/fb9"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), -1);
        assert!(err.to_string().starts_with("unable to open /dev/fb9"));

        let err = Error::BackendSubmit {
            backend: "ipu",
            operation: "IPU_QUEUE_TASK",
            status: -22,
            source: io::Error::from_raw_os_error(22),
        };
        assert_eq!(err.exit_code(), -22);
        assert!(err.to_string().starts_with("ipu IPU_QUEUE_TASK failed"));
    }
}
