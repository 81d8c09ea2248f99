//! Where the reallocation attempt counter goes.
//!
//! Every growth attempt bumps a per-array counter and hands the new value to
//! the array's [`ResizeSink`], if one is attached. Closures taking a `u64`
//! are sinks, which is handy for tests. With the `std` feature a
//! [`FileSink`] is available that keeps the latest value in a file.

/// Receives the running reallocation attempt counter.
pub trait ResizeSink {
    fn record(&mut self, attempts: u64);
}

impl<F> ResizeSink for F
where
    F: FnMut(u64),
{
    fn record(&mut self, attempts: u64) {
        self(attempts);
    }
}

#[cfg(feature = "std")]
pub use file_sink::FileSink;

#[cfg(feature = "std")]
mod file_sink {
    use std::fs;
    use std::path::Path;
    use std::path::PathBuf;
    use std::string::ToString;

    use super::ResizeSink;

    /// Truncates `path` and writes the counter into it on every attempt.
    ///
    /// Write failures are logged and otherwise ignored.
    #[derive(Debug, Clone)]
    pub struct FileSink {
        path: PathBuf,
    }

    impl FileSink {
        pub const DEFAULT_PATH: &'static str = "/dev/shm/tagged_array_realloc_attempts";

        pub fn new(path: impl Into<PathBuf>) -> Self {
            return Self { path: path.into() };
        }

        pub fn path(&self) -> &Path {
            return &self.path;
        }
    }

    impl Default for FileSink {
        fn default() -> Self {
            return Self::new(Self::DEFAULT_PATH);
        }
    }

    impl ResizeSink for FileSink {
        fn record(&mut self, attempts: u64) {
            if let Err(e) = fs::write(&self.path, attempts.to_string()) {
                log::warn!("could not write realloc attempts to {}: {e}", self.path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn closure_sink_sees_every_value() {
        let mut seen = Vec::new();
        {
            let mut sink = |n: u64| seen.push(n);
            sink.record(1);
            sink.record(2);
        }
        assert_eq!(seen, [1, 2]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn file_sink_truncates() {
        let path = std::env::temp_dir().join("tagged_array_file_sink_test");
        let mut sink = FileSink::new(&path);
        sink.record(1234);
        sink.record(7);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "7");
        let _ = std::fs::remove_file(&path);
    }

    #[cfg(feature = "std")]
    #[test]
    fn file_sink_default_path() {
        assert_eq!(FileSink::default().path(), std::path::Path::new(FileSink::DEFAULT_PATH));
    }
}
