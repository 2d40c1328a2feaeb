use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read + Send>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read + Send> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read + Send>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read + Send>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    fn test_reads_plain_and_gzipped() {
        let dir = tempfile::tempdir().unwrap();

        let plain = dir.path().join("counts.tsv");
        std::fs::write(&plain, "Chromosome\tBenign\n1\t3\n").unwrap();

        let gz = dir.path().join("counts.tsv.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(b"Chromosome\tBenign\n1\t3\n").unwrap();
        encoder.finish().unwrap();

        let mut a = String::new();
        get_dynamic_reader(&plain).unwrap().read_to_string(&mut a).unwrap();
        let mut b = String::new();
        get_dynamic_reader(&gz).unwrap().read_to_string(&mut b).unwrap();

        assert_eq!(a, b);
    }

    #[rstest]
    fn test_missing_file_is_an_error() {
        assert!(get_dynamic_reader(Path::new("does/not/exist.tsv")).is_err());
    }
}
