use anyhow::Result;
use vergen::EmitBuilder;

// Embeds VERGEN_GIT_SHA for the binaries' --version output
fn main() -> Result<()> {
    EmitBuilder::builder().git_sha(true).emit()?;
    Ok(())
}
