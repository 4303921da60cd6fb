#![allow(dead_code)]

pub mod command;

use std::path::Path;

const TMPDIR: &str = "../playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

pub fn zlib_compress(data: &[u8]) -> Vec<u8> {
    use std::io::Write;

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).expect("Failed to compress data");
    encoder.finish().expect("Failed to finish compressing data")
}

pub fn zlib_decompress(data: &[u8]) -> Vec<u8> {
    use std::io::Read;

    let mut decoder = flate2::read::ZlibDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .expect("Failed to decompress data");
    decompressed
}

/// Plant a raw encoded object at the fan-out path its id derives,
/// bypassing the store. Used to stage corrupt or exotic objects.
pub fn write_stored_object(repository_dir: &Path, id: &str, encoded: &[u8]) {
    let object_path = repository_dir
        .join(".git")
        .join("objects")
        .join(&id[..2])
        .join(&id[2..]);

    std::fs::create_dir_all(object_path.parent().unwrap())
        .expect("Failed to create object directory");
    std::fs::write(object_path, zlib_compress(encoded)).expect("Failed to write object file");
}

pub fn stored_object_path(repository_dir: &Path, id: &str) -> std::path::PathBuf {
    repository_dir
        .join(".git")
        .join("objects")
        .join(&id[..2])
        .join(&id[2..])
}
