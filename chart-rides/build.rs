//! Copies the rides CSV to OUT_DIR so it can be embedded with `include_str!`.
//!
//! Rows are checked for the expected header so a malformed fixture fails
//! the build instead of producing an empty chart.

use std::env;
use std::fs;
use std::path::Path;

const EXPECTED_HEADER: [&str; 3] = ["Date", "DayKM", "DaySeconds"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let src_path = "../fixtures/rides.csv";
    let src = Path::new(src_path);
    let dest = Path::new(&out_dir).join("rides.csv");

    if src.exists() {
        let mut rdr = csv::Reader::from_path(src)
            .unwrap_or_else(|e| panic!("Failed to open {}: {}", src_path, e));
        let headers = rdr
            .headers()
            .unwrap_or_else(|e| panic!("Failed to read header of {}: {}", src_path, e));
        for (i, expected) in EXPECTED_HEADER.iter().enumerate() {
            if headers.get(i).map(str::trim) != Some(*expected) {
                panic!("{} column {} should be {}", src_path, i + 1, expected);
            }
        }
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
    } else {
        fs::write(&dest, "").unwrap();
        println!(
            "cargo:warning=Fixture file {} not found, using empty placeholder",
            src_path
        );
    }
    println!("cargo:rerun-if-changed={}", src_path);
    println!("cargo:rerun-if-changed=build.rs");
}
