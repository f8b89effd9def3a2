// Owned buffer demonstration: prints each buffer's elements, one per line.
//
// Run with: cargo run --bin owned_buffer_demo
use std::io::{self, Write};

use anyhow::Context;
use owned_buffer::demo;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out).context("owned buffer demonstration failed")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
