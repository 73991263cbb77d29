use std::fs;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>LostLocate</title></head>\n<body><p>Frontend bundle not built. Run `trunk build --release` in ../frontend.</p></body></html>\n";

fn main() {
    let out_dir = Path::new("static");
    let embedded_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    } else if !embedded_dir.join("index.html").exists() {
        // include_dir! needs the directory to exist even without a frontend build
        fs::create_dir_all(&embedded_dir).unwrap();
        fs::write(embedded_dir.join("index.html"), PLACEHOLDER_INDEX).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
