use clap::Parser;
use kyobus::app::KyobusApp;
use kyobus::error::RunError;

fn main() -> Result<(), RunError> {
    let args = KyobusApp::parse();
    args.run()
}
