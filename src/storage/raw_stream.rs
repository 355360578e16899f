use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Creates (or truncates) the raw capture stream.
///
/// The stream has no header: frames are concatenated RGBA8 rows, so whatever
/// encodes it later needs the resolution and pixel format out-of-band.
pub fn create_raw_stream(filepath: impl AsRef<Path>) -> std::io::Result<BufWriter<File>> {
    let file = File::create(filepath)?;
    Ok(BufWriter::new(file))
}
