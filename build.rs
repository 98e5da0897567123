use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let output_path = PathBuf::from_iter([std::env::var("OUT_DIR").unwrap(), "lut.rs".into()]);
    let mut output_file = BufWriter::new(File::create(output_path).unwrap());

    output_file
        .write_all("pub const BYTE_TO_HEX_LITERAL: [&str; 256] = [\n".as_bytes())
        .unwrap();

    for byte in 0..=0xffu8 {
        output_file
            .write_all(format!("    \"0x{byte:02x}\",\n").as_bytes())
            .unwrap();
    }
    output_file.write_all("];\n".as_bytes()).unwrap();
    output_file.flush().unwrap();
}
