//! Command handling for the `packages` binary.
//!
//! ```bash
//! packages            # one tab-separated row per package
//! packages --json     # the whole table as a JSON array
//! packages sedan      # a single package
//! ```

use std::io::{self, ErrorKind, Write};

use log::{error, info};
use serde::Serialize;

use crate::{entries, lookup_slug, PackageMeta, PackageSlug};

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

#[derive(Serialize)]
struct Row {
    slug: PackageSlug,
    #[serde(flatten)]
    meta: &'static PackageMeta,
}

/// Runs the command for `args` (program name excluded) and returns the
/// process exit status.
///
/// A reader closing `out` early (`packages | head`) is not a failure.
pub fn run<I, S, O, E>(args: I, out: &mut O, err: &mut E) -> u8
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    O: Write,
    E: Write,
{
    let arg = args.into_iter().next();

    match dispatch(arg.as_ref().map(AsRef::as_ref), out, err) {
        Ok(status) => status,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => SUCCESS,
        Err(e) => {
            error!("Failed to write package table: {e}");
            FAILURE
        }
    }
}

fn dispatch<O: Write, E: Write>(arg: Option<&str>, out: &mut O, err: &mut E) -> io::Result<u8> {
    match arg {
        None => {
            for (slug, meta) in entries() {
                write_row(out, slug.as_slug(), meta)?;
            }
        }
        Some("--json") => {
            let rows: Vec<Row> = entries().map(|(slug, meta)| Row { slug, meta }).collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
        Some(raw) => match lookup_slug(raw) {
            Ok(meta) => {
                info!("Resolved package {:?}", raw.trim());
                write_row(out, raw.trim(), meta)?;
            }
            Err(e) => {
                writeln!(err, "{e}")?;
                return Ok(FAILURE);
            }
        },
    }

    out.flush()?;
    Ok(SUCCESS)
}

fn write_row<O: Write>(out: &mut O, slug: &str, meta: &PackageMeta) -> io::Result<()> {
    writeln!(
        out,
        "{slug}\t{}\t{}\t{}",
        meta.name, meta.icon, meta.description
    )
}
