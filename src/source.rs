//! Reading shader source files.

use std::{fs, io, path};

use crate::error::Error;

/// Largest shader source file accepted, in bytes.
pub const MAX_SOURCE_LEN: u64 = 0x10000;

/// Reads a whole shader source file as UTF-8 text.
///
/// Files larger than [`MAX_SOURCE_LEN`] are rejected without being read.
///
/// [`MAX_SOURCE_LEN`]: constant.MAX_SOURCE_LEN.html
pub fn read<P>(path: P) -> Result<String, Error>
    where P: AsRef<path::Path>
{
    use io::Read;

    let path = path.as_ref();
    let read_error = |source| Error::Read { path: path.to_owned(), source };
    let file = fs::File::open(path).map_err(read_error)?;
    let len = file.metadata().map_err(read_error)?.len();
    if len > MAX_SOURCE_LEN {
        return Err(Error::TooLarge { path: path.to_owned(), len, max: MAX_SOURCE_LEN });
    }

    // The file may grow between the size check and the read.
    let mut contents = String::with_capacity(len as usize);
    let read = io::BufReader::new(file)
        .take(MAX_SOURCE_LEN + 1)
        .read_to_string(&mut contents)
        .map_err(read_error)?;
    if read as u64 > MAX_SOURCE_LEN {
        return Err(Error::TooLarge { path: path.to_owned(), len: read as u64, max: MAX_SOURCE_LEN });
    }
    debug!(target: "shader", "read {} bytes from {}", read, path.display());
    Ok(contents)
}
