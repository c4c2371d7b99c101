use std::{fs::File, io, path::Path};

use memmap::{Mmap, MmapOptions};

use crate::error::LoadError;

/// Raw bytes of a volume file
pub enum DataSource {
    Vec(Vec<u8>),
    Mmap(Mmap),
}

impl DataSource {
    pub fn get_slice(&self) -> &[u8] {
        match self {
            DataSource::Vec(v) => v.as_slice(),
            DataSource::Mmap(m) => &m[..],
        }
    }

    /// Memory map file at `path`
    pub fn from_file<P>(path: P) -> Result<DataSource, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("path {} does not lead to a file", path.display()),
            )
            .into());
        }

        let file = File::open(path)?;

        // Zero length maps are rejected by the OS
        if file.metadata()?.len() == 0 {
            return Ok(DataSource::Vec(Vec::new()));
        }

        let mmap = unsafe { MmapOptions::new().map(&file)? };
        Ok(DataSource::Mmap(mmap))
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::test_helpers::TempFile;

    #[test]
    fn missing_file() {
        let res = DataSource::from_file("/definitely/not/here.dat");
        assert!(matches!(res, Err(LoadError::Io(_))));
    }

    #[test]
    fn mapped_bytes_match() {
        let file = TempFile::with_bytes("mapped_bytes_match", &[1, 2, 3, 4]);
        let ds = DataSource::from_file(file.path()).unwrap();
        assert_eq!(ds.get_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn empty_file() {
        let file = TempFile::with_bytes("empty_file", &[]);
        let ds = DataSource::from_file(file.path()).unwrap();
        assert!(ds.get_slice().is_empty());
    }
}
