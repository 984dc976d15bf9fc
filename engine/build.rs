fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/valuation.proto");
    tonic_build::configure()
        .build_server(true)
        .build_client(true) // The GUI reuses the generated client through this crate.
        .compile(
            &["proto/valuation.proto"],
            &["proto"],
        )?;
    Ok(())
}
