//! Uploaded audio value object

/// Value object representing an uploaded audio file.
/// The bytes are forwarded to the transcription service untouched.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    data: Vec<u8>,
    file_name: Option<String>,
}

impl AudioUpload {
    /// Create an upload from raw bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            file_name: None,
        }
    }

    /// Attach the client-supplied file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Get the raw audio bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
