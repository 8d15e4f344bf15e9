use std::path::PathBuf;

/// GraphRequest - Request DTO for the render graph use case
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// A Podfile.lock, or the directory containing one
    pub lockfile_path: PathBuf,
}

impl GraphRequest {
    pub fn new(lockfile_path: PathBuf) -> Self {
        Self { lockfile_path }
    }
}
