use buildinfo::{report, version};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout stays a clean, parseable report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(event = "report.start", build_version = %version::build_version());

    for line in report::report_lines(version::global()) {
        println!("{}", line);
    }
}
