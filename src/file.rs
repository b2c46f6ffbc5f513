//! Reading and writing .xp files on disk.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    errors::XpError,
    loader::{decode_with, DecodeOptions},
    output::{encode_with, EncodeOptions},
    xp_image::XpImage,
};

pub const XP_EXTENSION: &str = ".xp";

fn has_xp_extension(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .ends_with(XP_EXTENSION.as_bytes())
}

/// Loads the image at `path`, which must end in `.xp` (case-sensitive).
pub fn load(path: impl AsRef<Path>) -> Result<XpImage, XpError> {
    load_with(path, &DecodeOptions::default())
}

pub fn load_with(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<XpImage, XpError> {
    let path = path.as_ref();
    if !has_xp_extension(path) {
        return Err(XpError::Validation {
            message: format!("{} is not an .xp file", path.display()),
        });
    }
    debug!("loading {}", path.display());
    let file = File::open(path)?;
    decode_with(BufReader::new(file), options)
}

/// Writes `image` to `path`, appending `.xp` if it is missing. An existing file
/// is overwritten. Returns the path actually written.
pub fn save(image: &XpImage, path: impl AsRef<Path>) -> Result<PathBuf, XpError> {
    save_with(image, path, &EncodeOptions::default())
}

pub fn save_with(
    image: &XpImage,
    path: impl AsRef<Path>,
    options: &EncodeOptions,
) -> Result<PathBuf, XpError> {
    let mut path = path.as_ref().to_path_buf();
    if !has_xp_extension(&path) {
        path.as_mut_os_string().push(XP_EXTENSION);
    }
    debug!("saving {}", path.display());
    let file = File::create(&path)?;
    let mut writer = encode_with(image, BufWriter::new(file), options)?;
    writer.flush()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert!(has_xp_extension(Path::new("art/title.xp")));
        assert!(!has_xp_extension(Path::new("art/title.XP")));
        assert!(!has_xp_extension(Path::new("art/title.xp.gz")));
        assert!(!has_xp_extension(Path::new("art/title")));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_keeps_extension() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let path = Path::new(OsStr::from_bytes(b"art/\xFFtitle.xp"));
        assert!(has_xp_extension(path));
        let err = load(path).unwrap_err();
        assert!(matches!(err, XpError::Io(_)), "{err:?}");
    }

    #[test]
    fn load_rejects_other_extensions() {
        let err = load("does/not/matter.png").unwrap_err();
        assert!(matches!(err, XpError::Validation { .. }), "{err:?}");
    }

    #[test]
    fn load_missing_file() {
        let err = load("does/not/exist.xp").unwrap_err();
        assert!(matches!(err, XpError::Io(_)), "{err:?}");
    }
}
