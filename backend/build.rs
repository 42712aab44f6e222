use std::fs;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>StoryPath</title></head>\
<body><p>The frontend has not been built. Run <code>trunk build --release</code> in <code>frontend/</code> and rebuild the backend.</p></body></html>\n";

fn main() {
    let out_dir = Path::new("static");
    let embedded_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static/");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("copy frontend bundle");
    } else if !embedded_dir.join("index.html").exists() {
        // include_dir! needs the directory to exist even without a bundle
        fs::create_dir_all(&embedded_dir).expect("create static/dist");
        fs::write(embedded_dir.join("index.html"), PLACEHOLDER_INDEX).expect("write placeholder");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
