use std::io;

use bin2lua::{cli, RealFileSystem};

fn main() -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    cli::run(std::env::args_os(), &RealFileSystem, &mut stdout)
}
