use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Commit shown by `solconf --version`
    vergen_gitcl::Emitter::default()
        .add_instructions(
            &vergen_gitcl::GitclBuilder::default()
                .sha(true)
                .dirty(true)
                .build()?,
        )?
        .emit()?;
    Ok(())
}
