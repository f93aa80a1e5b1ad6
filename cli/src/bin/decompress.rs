use huffpack_cli::{init_tracing, parse_args, run, Mode};

fn main() -> anyhow::Result<()> {
    let args = parse_args(Mode::Decompress);
    init_tracing();
    run(Mode::Decompress, &args)?;
    Ok(())
}
