use anyhow::Result;
use cobertura2profile::cli::{init_logging, parse_args, ConvertConfig};
use cobertura2profile::{convert_file, ConvertError};
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    init_logging();
    let config = ConvertConfig::from(parse_args());

    let result = {
        let mut out = BufWriter::new(io::stdout().lock());
        convert_file(&config.report_path, &mut out)
    };

    match result {
        Ok(_) => Ok(()),
        Err(e) => handle_convert_error(e, &mut io::stdout().lock()),
    }
}

// Parse failures go to stdout and still exit 0; callers rely on that status.
fn handle_convert_error<W: Write>(err: ConvertError, out: &mut W) -> Result<()> {
    match err {
        err if err.is_parse_failure() => writeln!(out, "error: {}", err)
            .and_then(|()| out.flush())
            .or_else(ignore_broken_pipe),
        ConvertError::Write(e) => ignore_broken_pipe(e),
        err => Err(err.into()),
    }
}

fn ignore_broken_pipe(err: io::Error) -> Result<()> {
    if err.kind() == io::ErrorKind::BrokenPipe {
        log::debug!("Output closed early: {}", err);
        Ok(())
    } else {
        Err(ConvertError::Write(err).into())
    }
}
