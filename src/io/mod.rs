#[cfg(feature = "svg-io")]
mod svg;

#[cfg(feature = "dxf-io")]
mod dxf;

/// Generic I/O and format‑conversion errors.
///
/// The export backends are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant is *not*
/// constructed in user code.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    /// The profile table holds no samples, so there is no curve to write.
    EmptyProfile,

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while writing the drawing.
    DxfWrite(::dxf::DxfError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            EmptyProfile => write!(f, "Profile table holds no samples"),

            #[cfg(feature = "dxf-io")]
            DxfWrite(error) => write!(f, "DXF write error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

#[cfg(feature = "dxf-io")]
impl From<::dxf::DxfError> for IoError {
    fn from(value: ::dxf::DxfError) -> Self {
        Self::DxfWrite(value)
    }
}
