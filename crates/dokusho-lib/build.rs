fn main() -> Result<(), Box<dyn std::error::Error>> {
    let version = rustc_version::version()?;
    println!("cargo:rustc-env=RUSTC_VERSION={version}");
    Ok(())
}
