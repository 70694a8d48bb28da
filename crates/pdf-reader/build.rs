use std::fs;
use std::path::Path;

fn pdfium_library_name() -> &'static str {
    match std::env::var("CARGO_CFG_TARGET_OS").as_deref() {
        Ok("windows") => "pdfium.dll",
        Ok("macos") => "libpdfium.dylib",
        _ => "libpdfium.so",
    }
}

fn main() {
    let Some(workspace_root) = env!("CARGO_MANIFEST_DIR").split("crates").next() else {
        return;
    };

    let library_name = pdfium_library_name();
    let vendor_library = Path::new(workspace_root)
        .join("vendor")
        .join("pdfium")
        .join(library_name);

    println!("cargo:rerun-if-changed={}", vendor_library.display());

    if !vendor_library.exists() {
        println!(
            "cargo:warning={} not found at {}, falling back to the system PDFium",
            library_name,
            vendor_library.display()
        );
        return;
    }

    let Ok(out_dir) = std::env::var("OUT_DIR") else {
        return;
    };

    // OUT_DIR is target/<profile>/build/<crate>-<hash>/out
    let Some(target_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        return;
    };

    let dest_library = target_dir.join(library_name);

    match fs::copy(&vendor_library, &dest_library) {
        Ok(_) => println!(
            "cargo:warning=Copied {} from vendor to {}",
            library_name,
            dest_library.display()
        ),
        Err(e) => println!("cargo:warning=Failed to copy {}: {}", library_name, e),
    }
}
