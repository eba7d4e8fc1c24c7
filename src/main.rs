use anyhow::Result;

fn main() -> Result<()> {
    filmlog::cli::run()
}
