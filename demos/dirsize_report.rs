//! Measure a mail root the way the quota framework would.
//!
//! ```text
//! cargo run --example dirsize_report -- <mail-root> [<inbox-file>]
//! RUST_LOG=dirsize_quota=trace cargo run --example dirsize_report -- ~/Maildir
//! ```

use std::process::ExitCode;

use dirsize_quota::{
    Namespace, NativeFs, QuotaGetResult, QuotaRootScanner, RootSettings, StaticNamespace, registry,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(root) = args.next() else {
        eprintln!("usage: dirsize_report <mail-root> [<inbox-file>]");
        return ExitCode::FAILURE;
    };
    let ns = match args.next() {
        Some(inbox) => StaticNamespace::new(root).with_inbox(inbox, true),
        None => StaticNamespace::new(root),
    };
    let namespaces: [&dyn Namespace; 1] = [&ns];

    let settings = RootSettings::default();
    match QuotaRootScanner::new(&NativeFs, &settings).report(&namespaces) {
        Ok(report) => {
            for root in &report.roots {
                let kind = if root.root.is_file { "file" } else { "dir " };
                println!("{kind} {:>12}  {}", root.bytes, root.root.path.display());
            }
        }
        Err(err) => eprintln!("scan failed: {err}"),
    }

    let mut backend = match registry().create("dirsize") {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = backend.init("") {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match backend.get_resource("STORAGE_BYTES", &namespaces) {
        QuotaGetResult::Limited(bytes) => {
            println!("total {bytes} bytes ({} KiB)", bytes / 1024);
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("{}", other.message().unwrap_or_default());
            ExitCode::FAILURE
        }
    }
}
