//! Stamps dev builds of `ccon` with the short git SHA.
//!
//! `cli::VERSION` reads `VERGEN_GIT_SHA`; builds with the `release` feature
//! print the bare package version and skip git entirely.

#[cfg(not(feature = "release"))]
fn emit_git_sha() -> Result<(), Box<dyn std::error::Error>> {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let git = GitclBuilder::default().sha(true).build()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}

fn main() {
    #[cfg(not(feature = "release"))]
    if let Err(e) = emit_git_sha() {
        // Source tarballs have no .git
        println!("cargo:warning=git SHA unavailable: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}
